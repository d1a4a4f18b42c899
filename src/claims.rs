//! Claim ledger: persisted record of listings the user has committed to.
//!
//! Append-only and deduplicated by listing id. There is no unclaim; the
//! only transition a listing makes is unclaimed to claimed, once.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::model::{Listing, ListingId};
use crate::storage::StorageAdapter;

/// Store key holding the claimed-listing array.
pub const CLAIMS_KEY: &str = "claimed_listings";

/// Outcome of a claim call. Never an error: claiming always completes.
#[derive(Debug, Clone, Default)]
pub struct ClaimReceipt {
    /// True when this call appended the listing; false when its id was
    /// already in the ledger (idempotent no-op).
    pub recorded: bool,
    /// Note describing any failure recovered along the way.
    pub diagnostic: Option<String>,
}

/// Claim a listing.
///
/// Loads the ledger (absent or unreadable data counts as empty), appends
/// the full listing record unless its id is already present, and writes
/// the ledger back in full. A persist failure comes back in the receipt
/// rather than being raised; the claim still counts for the in-memory
/// session and no retry is attempted.
///
/// The ledger keeps whole listing snapshots, so a claimed entry retains
/// the fields as they were at claim time even if the feed later edits the
/// listing.
pub async fn claim(listing: &Listing, store: &dyn StorageAdapter) -> ClaimReceipt {
    let mut ledger = load_ledger(store).await;

    let already_claimed = ledger.iter().any(|claimed| claimed.id == listing.id);
    if already_claimed {
        debug!("Listing {} already claimed", listing.id);
    } else {
        ledger.push(listing.clone());
    }

    // The (possibly unchanged) ledger is written back in full either way.
    let diagnostic = match serde_json::to_string(&ledger) {
        Ok(serialized) => match store.save(CLAIMS_KEY, &serialized).await {
            Ok(()) => None,
            Err(e) => {
                warn!("Could not persist claim ledger: {}", e);
                Some(format!("claim not persisted: {}", e))
            }
        },
        Err(e) => {
            warn!("Could not serialize claim ledger: {}", e);
            Some(format!("claim not persisted: {}", e))
        }
    };

    ClaimReceipt {
        recorded: !already_claimed,
        diagnostic,
    }
}

/// Current ledger contents in first-claimed order; empty on any failure.
pub async fn claimed_listings(store: &dyn StorageAdapter) -> Vec<Listing> {
    load_ledger(store).await
}

/// Ids of claimed listings, for claimed/unclaimed rendering.
pub async fn claimed_ids(store: &dyn StorageAdapter) -> HashSet<ListingId> {
    load_ledger(store)
        .await
        .into_iter()
        .map(|listing| listing.id)
        .collect()
}

async fn load_ledger(store: &dyn StorageAdapter) -> Vec<Listing> {
    match store.load(CLAIMS_KEY).await {
        Ok(Some(text)) => match serde_json::from_str(&text) {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!("Claim ledger is unreadable, starting empty: {}", e);
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Claim ledger read failed, starting empty: {}", e);
            Vec::new()
        }
    }
}
