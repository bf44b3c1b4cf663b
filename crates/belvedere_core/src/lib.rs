//! Core data types for the Belvedere media picker.
//!
//! This crate provides the values shared by every layer of the image stream:
//! the media items a user can pick, the external capture/pick targets, the
//! platform API level, and the shared list handles through which the caller
//! and the stream model observe the same selection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api_level;
mod media_intent;
mod media_result;
mod mime;
mod shared;
mod ui_config;
mod uri;

pub use api_level::ApiLevel;
pub use media_intent::{
    ACTION_GET_CONTENT, ACTION_IMAGE_CAPTURE, ACTION_OPEN_DOCUMENT, GOOGLE_PHOTOS_PACKAGE,
    IntentPayload, IntentTarget, MediaIntent, MediaIntentBuilder,
};
pub use media_result::{MediaResult, MediaResultBuilder};
pub use mime::{DEFAULT_MIME_TYPE, UNKNOWN_MIME_TYPE, infer_mime_type, mime_type_for_extension};
pub use shared::{SharedIntentList, SharedList, SharedMediaList};
pub use ui_config::{UiConfig, UiConfigBuilder};
pub use uri::ContentUri;
