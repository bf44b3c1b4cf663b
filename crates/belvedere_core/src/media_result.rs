//! Selectable media items.

use crate::ContentUri;
use belvedere_error::{BuilderError, BuilderErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One selectable media item.
///
/// Equality compares every field. De-duplication across sources uses
/// [`MediaResult::identity`] instead, which is the content URI alone.
///
/// # Examples
///
/// ```
/// use belvedere_core::{ContentUri, MediaResult};
///
/// let photo = MediaResult::builder()
///     .uri(ContentUri::external_file(7))
///     .name("IMG_0007.jpg")
///     .mime_type("image/jpeg")
///     .size(2_048_i64)
///     .build()
///     .unwrap();
///
/// assert_eq!(photo.identity().as_str(), "content://media/external/file/7");
/// assert_eq!(*photo.width(), MediaResult::UNKNOWN_VALUE);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct MediaResult {
    /// Resolved local file, when the item has been copied into app storage.
    #[builder(default)]
    #[serde(default)]
    file: Option<PathBuf>,

    /// Content identifier; the de-duplication identity.
    uri: ContentUri,

    /// Identifier the item had before it was resolved.
    #[builder(default)]
    #[serde(default)]
    original_uri: Option<ContentUri>,

    /// Display name.
    #[builder(default)]
    #[serde(default)]
    name: String,

    /// MIME type.
    #[builder(default)]
    #[serde(default)]
    mime_type: String,

    /// Size in bytes.
    #[builder(default = "MediaResult::UNKNOWN_VALUE")]
    size: i64,

    /// Width in pixels.
    #[builder(default = "MediaResult::UNKNOWN_VALUE")]
    width: i64,

    /// Height in pixels.
    #[builder(default = "MediaResult::UNKNOWN_VALUE")]
    height: i64,
}

impl MediaResult {
    /// Marker for an unknown size or dimension.
    pub const UNKNOWN_VALUE: i64 = -1;

    /// Creates a new media result builder.
    pub fn builder() -> MediaResultBuilder {
        MediaResultBuilder::default()
    }

    /// A placeholder with no identity and unknown metrics.
    pub fn empty() -> Self {
        Self {
            file: None,
            uri: ContentUri::default(),
            original_uri: None,
            name: String::new(),
            mime_type: String::new(),
            size: Self::UNKNOWN_VALUE,
            width: Self::UNKNOWN_VALUE,
            height: Self::UNKNOWN_VALUE,
        }
    }

    /// The identifier used to de-duplicate items across sources.
    pub fn identity(&self) -> &ContentUri {
        &self.uri
    }

    /// Whether this item is larger than `max_file_size`.
    ///
    /// A negative limit means unlimited.
    pub fn exceeds(&self, max_file_size: i64) -> bool {
        max_file_size >= 0 && self.size > max_file_size
    }
}

impl MediaResultBuilder {
    /// Builds the `MediaResult`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content URI was not set.
    pub fn build(&self) -> Result<MediaResult, BuilderError> {
        self.build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::MissingField(e.to_string())))
    }
}
