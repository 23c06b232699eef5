use crate::shared::api_utils::catalog_page_url;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::FetchError;
use contracts::domain::a001_artwork::{Artwork, ArtworkListResponse};
use contracts::shared::paging::{Page, PageRequest};
use gloo_net::http::Request;

pub type ArtworkPage = Page<Artwork>;

/// Fetch one page of artworks from the catalog.
///
/// Does not touch any list or selection state.
pub async fn fetch_page(catalog: &CatalogConfig, request: PageRequest) -> Result<ArtworkPage, FetchError> {
    let url = catalog_page_url(catalog, request)
        .map_err(|e| FetchError::Transport(format!("Failed to build request: {}", e)))?;

    log::debug!("Loading artworks with URL: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::HttpStatus(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    decode_page(&body, request)
}

/// Decode a catalog list body into a page for `request`.
pub fn decode_page(body: &str, request: PageRequest) -> Result<ArtworkPage, FetchError> {
    let result: ArtworkListResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let total_count = usize::try_from(result.pagination.total).unwrap_or(usize::MAX);
    Ok(Page::new(result.data, request, total_count))
}
