//! Session configuration handed to the image stream.

use crate::{SharedIntentList, SharedMediaList};
use belvedere_error::{BuilderError, BuilderErrorKind};
use derive_getters::Getters;

/// What one image stream session shows and how it gates selections.
///
/// The item lists are shared handles: the session observes the caller's
/// lists rather than copies of them.
///
/// # Examples
///
/// ```
/// use belvedere_core::{IntentTarget, MediaIntent, UiConfig};
///
/// let config = UiConfig::builder()
///     .intents(vec![MediaIntent::new(1, None, "Camera", true, IntentTarget::Camera)])
///     .max_file_size(5 * 1024 * 1024_i64)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.intents().len(), 1);
/// assert!(config.selected_items().is_empty());
/// assert!(*config.resolve_media());
/// ```
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct UiConfig {
    /// Capture and pick targets offered in the stream.
    #[builder(default)]
    intents: SharedIntentList,

    /// Items the user has already selected.
    #[builder(default)]
    selected_items: SharedMediaList,

    /// Items attached upstream that are shown but not selected.
    #[builder(default)]
    additional_items: SharedMediaList,

    /// Largest selectable item in bytes; negative means unlimited.
    #[builder(default = "UiConfig::UNLIMITED_FILE_SIZE")]
    max_file_size: i64,

    /// Whether picked items are copied into app storage before delivery.
    #[builder(default = "true")]
    resolve_media: bool,
}

impl UiConfig {
    /// Marker for "no file size limit".
    pub const UNLIMITED_FILE_SIZE: i64 = -1;

    /// Creates a new UI config builder.
    pub fn builder() -> UiConfigBuilder {
        UiConfigBuilder::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            intents: SharedIntentList::new(),
            selected_items: SharedMediaList::new(),
            additional_items: SharedMediaList::new(),
            max_file_size: Self::UNLIMITED_FILE_SIZE,
            resolve_media: true,
        }
    }
}

impl UiConfigBuilder {
    /// Builds the `UiConfig`.
    ///
    /// # Errors
    ///
    /// Every field has a default, so this only fails if derive_builder
    /// reports an uninitialized field.
    pub fn build(&self) -> Result<UiConfig, BuilderError> {
        self.build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))
    }
}
