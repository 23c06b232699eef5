//! API utilities for talking to the artwork catalog
//!
//! Provides helpers for constructing catalog URLs.

use crate::shared::config::CatalogConfig;
use contracts::shared::paging::PageRequest;
use serde::Serialize;

/// Query string of a catalog list request
#[derive(Debug, Serialize)]
struct CatalogListQuery<'a> {
    /// 1-based page number
    page: usize,
    limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a str>,
}

/// Build the URL of one catalog page
///
/// # Example
/// ```rust,ignore
/// let url = catalog_page_url(&config.catalog, PageRequest::new(12, 12))?;
/// // https://api.artic.edu/api/v1/artworks?page=2&limit=12&fields=...
/// ```
pub fn catalog_page_url(
    catalog: &CatalogConfig,
    request: PageRequest,
) -> Result<String, serde_qs::Error> {
    let fields = catalog.fields.join(",");
    let query = CatalogListQuery {
        page: request.remote_page(),
        limit: request.rows,
        fields: if fields.is_empty() { None } else { Some(&fields) },
    };
    let base = catalog.base_url.trim_end_matches('?');
    Ok(format!("{}?{}", base, serde_qs::to_string(&query)?))
}
