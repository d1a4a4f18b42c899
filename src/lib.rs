//! Offline-first availability core for disaster-relief listing apps
//!
//! The shared data layer behind a relief listing UI:
//! - Availability resolver: fetch the remote listing feed when the network
//!   is reachable, fall back to the local cache when it is not, and always
//!   hand the caller a usable snapshot with an honest staleness flag
//! - Claim ledger: idempotent, persisted record of the listings the user
//!   has committed to help with
//! - Storage capability: pluggable async key/value adapters so each
//!   deployment target (browser, mobile, node) injects its own backend
//! - Pure category/text filters for the presentation layer
//!
//! Nothing in this crate raises on a network or storage failure. A relief
//! tool degrades to "best available data", never to an error screen.

pub mod availability;
pub mod claims;
pub mod feed;
pub mod filter;
pub mod model;
pub mod storage;

pub use availability::{resolve, FeedSnapshot, CACHE_KEY};
pub use claims::{claim, claimed_ids, claimed_listings, ClaimReceipt, CLAIMS_KEY};
pub use feed::{FeedError, HttpFeed, ListingSource, FEED_URL};
pub use filter::{filter_by_category, search};
pub use model::{Listing, ListingId};
pub use storage::{FileStore, MemoryStore, StorageAdapter, StorageError};
