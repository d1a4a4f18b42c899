//! Claim ledger integration tests
//!
//! Covers:
//! - Append and persist of a first claim
//! - Idempotence for repeated claims of the same id
//! - First-claimed ordering across distinct ids
//! - Recovery from a corrupted ledger
//! - Completion despite a failing store

use async_trait::async_trait;
use aidfeed_core::{
    claim, claimed_ids, claimed_listings, Listing, ListingId, MemoryStore, StorageAdapter,
    StorageError, CLAIMS_KEY,
};

/// Store whose saves always fail and whose loads return nothing.
struct WriteBrokenStore;

#[async_trait]
impl StorageAdapter for WriteBrokenStore {
    async fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk full".to_string()))
    }

    async fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
}

#[tokio::test]
async fn first_claim_is_appended_and_persisted() {
    let store = MemoryStore::new();
    let listing = Listing::new("l-1", "Drinking water").with_category("Food");

    let receipt = claim(&listing, &store).await;

    assert!(receipt.recorded);
    assert!(receipt.diagnostic.is_none());

    let persisted = store.load(CLAIMS_KEY).await.unwrap().expect("ledger written");
    let ledger: Vec<Listing> = serde_json::from_str(&persisted).unwrap();
    assert_eq!(ledger, vec![listing]);
}

#[tokio::test]
async fn claiming_the_same_id_twice_keeps_one_entry() {
    let store = MemoryStore::new();
    let listing = Listing::new(5, "Tent for four");

    let first = claim(&listing, &store).await;
    let second = claim(&listing, &store).await;

    assert!(first.recorded);
    assert!(!second.recorded, "second claim must be a no-op");

    let ledger = claimed_listings(&store).await;
    assert_eq!(ledger.len(), 1);
}

#[tokio::test]
async fn same_id_with_edited_fields_still_deduplicates() {
    let store = MemoryStore::new();

    claim(&Listing::new(5, "Tent for four"), &store).await;
    let receipt = claim(&Listing::new(5, "Tent for four (edited)"), &store).await;

    assert!(!receipt.recorded);

    // The ledger keeps the snapshot from claim time, not the edit.
    let ledger = claimed_listings(&store).await;
    assert_eq!(ledger[0].title, "Tent for four");
}

#[tokio::test]
async fn distinct_ids_accumulate_in_first_claimed_order() {
    let store = MemoryStore::new();

    claim(&Listing::new("a", "Generator fuel"), &store).await;
    claim(&Listing::new("b", "Blankets"), &store).await;
    claim(&Listing::new("c", "Insulin"), &store).await;

    let ledger = claimed_listings(&store).await;
    let order: Vec<String> = ledger.iter().map(|l| l.id.to_string()).collect();
    assert_eq!(order, ["a", "b", "c"]);
}

#[tokio::test]
async fn corrupted_ledger_is_treated_as_empty() {
    let store = MemoryStore::new();
    store.save(CLAIMS_KEY, "%% not json %%").await.unwrap();

    let receipt = claim(&Listing::new(9, "Volunteer drivers"), &store).await;

    assert!(receipt.recorded);
    let ledger = claimed_listings(&store).await;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].id, ListingId::from(9));
}

#[tokio::test]
async fn persist_failure_still_completes_the_claim() {
    let receipt = claim(&Listing::new(3, "Water tanker"), &WriteBrokenStore).await;

    assert!(receipt.recorded, "in-memory claim still counts");
    assert!(receipt
        .diagnostic
        .as_deref()
        .is_some_and(|d| d.contains("claim not persisted")));
}

#[tokio::test]
async fn claimed_ids_reflects_ledger_membership() {
    let store = MemoryStore::new();

    claim(&Listing::new("x", "Shovels"), &store).await;
    claim(&Listing::new(12, "Heaters"), &store).await;

    let ids = claimed_ids(&store).await;
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&ListingId::from("x")));
    assert!(ids.contains(&ListingId::from(12)));
    assert!(!ids.contains(&ListingId::from("unclaimed")));
}

#[tokio::test]
async fn empty_store_reads_as_empty_ledger() {
    let store = MemoryStore::new();
    assert!(claimed_listings(&store).await.is_empty());
    assert!(claimed_ids(&store).await.is_empty());
}
