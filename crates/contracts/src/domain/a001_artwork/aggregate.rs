use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Catalog identifier of an artwork. Stable across pages and re-fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub i64);

impl ArtworkId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog record as displayed in the grid.
///
/// Field names follow the catalog wire format (`place_of_origin`); the
/// catalog sends `null` for descriptive fields it has no data for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    /// Title (`null` on the wire becomes an empty string)
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Place of origin
    #[serde(rename = "place_of_origin", default)]
    pub origin_place: Option<String>,
    /// Artist line as printed on the label (may span several lines)
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Start of the creation period (year)
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End of the creation period (year)
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Title for display, with a placeholder for untitled records
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}
