use super::aggregate::Artwork;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/v1/artworks?page=..&limit=..`
///
/// The catalog also sends `info` and `config` blocks; they are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkListResponse {
    pub data: Vec<Artwork>,
    pub pagination: PaginationInfo,
}

/// Pagination block of a catalog list response.
///
/// Only `total` is required; the rest is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_response() {
        let json = r#"{
            "pagination": {
                "total": 129884,
                "limit": 2,
                "offset": 0,
                "total_pages": 64942,
                "current_page": 1,
                "next_url": "https://api.artic.edu/api/v1/artworks?page=2&limit=2"
            },
            "data": [
                {"id": 1, "title": "One", "place_of_origin": "Japan", "artist_display": "A", "date_start": 1800, "date_end": 1810},
                {"id": 2, "title": "Two", "place_of_origin": null, "artist_display": null, "date_start": null, "date_end": null}
            ],
            "info": {"version": "1.13"},
            "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
        }"#;
        let response: ArtworkListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.pagination.total, 129884);
        assert_eq!(response.pagination.current_page, Some(1));
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[1].title, "Two");
    }

    #[test]
    fn test_total_is_required() {
        let json = r#"{"pagination": {"limit": 12}, "data": []}"#;
        let result: Result<ArtworkListResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
