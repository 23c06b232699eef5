pub mod api;
pub mod ui;

use crate::shared::selection::Selectable;
use contracts::domain::a001_artwork::{Artwork, ArtworkId};

impl Selectable for Artwork {
    type Key = ArtworkId;

    fn selection_key(&self) -> ArtworkId {
        self.id
    }
}
