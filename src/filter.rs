//! Pure listing filters for the presentation layer.
//!
//! No storage involvement; the UI combines these over whatever snapshot
//! the availability resolver returned.

use crate::model::Listing;

/// Listings whose category matches `category`, case-insensitively.
///
/// `None` or an empty selector keeps everything. Uncategorized listings
/// match only the keep-everything selector.
pub fn filter_by_category(listings: &[Listing], category: Option<&str>) -> Vec<Listing> {
    let wanted = match category {
        Some(c) if !c.is_empty() => c.to_lowercase(),
        _ => return listings.to_vec(),
    };

    listings
        .iter()
        .filter(|listing| {
            listing
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == wanted)
        })
        .cloned()
        .collect()
}

/// Listings whose title or description contains `query`,
/// case-insensitively. An empty query keeps everything.
pub fn search(listings: &[Listing], query: &str) -> Vec<Listing> {
    if query.is_empty() {
        return listings.to_vec();
    }

    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|listing| {
            listing.title.to_lowercase().contains(&needle)
                || listing.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
