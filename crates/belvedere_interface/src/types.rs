//! Values exchanged between the presenter and its view.

use belvedere_core::MediaResult;
use serde::{Deserialize, Serialize};

/// One tile of the image stream as the view holds it.
///
/// Tiles that are not backed by a media item (the camera tile, for example)
/// carry no result and are never selectable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamItem {
    media_result: Option<MediaResult>,
    selected: bool,
}

impl StreamItem {
    /// An unselected tile showing `media_result`.
    pub fn new(media_result: MediaResult) -> Self {
        Self {
            media_result: Some(media_result),
            selected: false,
        }
    }

    /// A tile with no media behind it.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Same tile, marked selected or not.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Media shown by the tile.
    pub fn media_result(&self) -> Option<&MediaResult> {
        self.media_result.as_ref()
    }

    /// Whether the tile is drawn as selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Mark the tile selected or unselected.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Messages the presenter asks the view to show the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum UserMessage {
    /// The picked item is larger than the configured limit.
    #[display("The selected file exceeds the maximum file size")]
    MaxFileSizeExceeded,
}
