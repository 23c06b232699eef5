pub mod aggregate;
pub mod response;

pub use aggregate::{Artwork, ArtworkId};
pub use response::{ArtworkListResponse, PaginationInfo};
