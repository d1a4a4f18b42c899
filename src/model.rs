//! Listing records shared by the availability and claim layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a listing as it appears in the remote feed.
///
/// The feed mixes string and numeric ids, so both forms decode. Ids are
/// compared for equality only; no ordering is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Text(s) => f.write_str(s),
            ListingId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId::Text(s.to_string())
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        ListingId::Text(s)
    }
}

impl From<i64> for ListingId {
    fn from(n: i64) -> Self {
        ListingId::Number(n)
    }
}

impl From<i32> for ListingId {
    fn from(n: i32) -> Self {
        ListingId::Number(n.into())
    }
}

/// One aid request/offer from the relief feed.
///
/// `id` is the sole identity key: two records with the same id are the same
/// listing regardless of other fields. Everything else is display material
/// that the core never validates. The serde aliases accept the upstream
/// feed's original Turkish field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,

    #[serde(default, alias = "baslik")]
    pub title: String,

    #[serde(default, alias = "aciklama")]
    pub description: String,

    /// Category tag used for filtering; missing or empty means
    /// uncategorized.
    #[serde(default, alias = "kategori", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, alias = "aciliyet", skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,

    #[serde(default, alias = "lokasyon", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, alias = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, alias = "lng", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Listing {
    /// Listing with only identity and title set.
    pub fn new(id: impl Into<ListingId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: None,
            urgency: None,
            location: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Set the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
