//! Availability resolver: fresh-or-cached listing retrieval.
//!
//! Decides between a network fetch and the local cache based on a
//! point-in-time reachability signal, and leaves the cache overwritten with
//! the latest successful fetch. Every exit path yields a usable snapshot;
//! a relief tool degrades to "best available data", never to an error
//! screen.

use tracing::{debug, info, warn};

use crate::feed::ListingSource;
use crate::model::Listing;
use crate::storage::StorageAdapter;

/// Store key holding the last successfully fetched listing array.
pub const CACHE_KEY: &str = "relief_listings_cache";

/// Result of an availability resolution.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Best available listings; possibly empty.
    pub listings: Vec<Listing>,
    /// True when the listings came from cache rather than a fresh fetch.
    pub is_stale: bool,
    /// Note describing any failure recovered along the way.
    pub diagnostic: Option<String>,
}

/// Resolve the current listings.
///
/// `reachable` is a hint, not a guarantee: with `reachable = true` the
/// fetch attempt is the authoritative check, and any failure there
/// (transport, status, decode) falls back to the cache exactly as the
/// offline path does. Errors never propagate to the caller; they surface
/// only through `is_stale`, an empty listing vector, or the diagnostic
/// note.
pub async fn resolve(
    reachable: bool,
    source: &dyn ListingSource,
    store: &dyn StorageAdapter,
) -> FeedSnapshot {
    if !reachable {
        info!("Network unreachable, serving listings from cache");
        return from_cache(store, None).await;
    }

    match source.fetch_listings().await {
        Ok(listings) => {
            let diagnostic = persist_cache(store, &listings).await;
            FeedSnapshot {
                listings,
                is_stale: false,
                diagnostic,
            }
        }
        Err(e) => {
            warn!("Listing fetch failed, serving from cache: {}", e);
            from_cache(store, Some(format!("fetch failed: {}", e))).await
        }
    }
}

/// Overwrite the cache with a freshly fetched listing array.
///
/// A write failure does not demote the fresh result; it comes back as a
/// diagnostic note only.
async fn persist_cache(store: &dyn StorageAdapter, listings: &[Listing]) -> Option<String> {
    let serialized = match serde_json::to_string(listings) {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not serialize listings for caching: {}", e);
            return Some(format!("cache not updated: {}", e));
        }
    };

    match store.save(CACHE_KEY, &serialized).await {
        Ok(()) => None,
        Err(e) => {
            warn!("Could not persist listing cache: {}", e);
            Some(format!("cache not updated: {}", e))
        }
    }
}

/// Serve the last known good listings, or an empty sequence when there are
/// none. Always stale, never an error.
async fn from_cache(store: &dyn StorageAdapter, mut diagnostic: Option<String>) -> FeedSnapshot {
    let listings = match store.load(CACHE_KEY).await {
        Ok(Some(text)) => match serde_json::from_str::<Vec<Listing>>(&text) {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Cached listings are unreadable, serving empty: {}", e);
                append_note(&mut diagnostic, format!("cache unreadable: {}", e));
                Vec::new()
            }
        },
        Ok(None) => {
            debug!("No cached listings yet");
            Vec::new()
        }
        Err(e) => {
            warn!("Cache read failed, serving empty: {}", e);
            append_note(&mut diagnostic, format!("cache read failed: {}", e));
            Vec::new()
        }
    };

    FeedSnapshot {
        listings,
        is_stale: true,
        diagnostic,
    }
}

fn append_note(diagnostic: &mut Option<String>, note: String) {
    match diagnostic {
        Some(existing) => {
            existing.push_str("; ");
            existing.push_str(&note);
        }
        None => *diagnostic = Some(note),
    }
}
