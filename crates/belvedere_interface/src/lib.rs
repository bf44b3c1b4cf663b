//! Trait definitions for the Belvedere media picker.
//!
//! This crate provides the seams between the image stream and the platform:
//! the media index, the build version, the view, and the host backend, along
//! with the query and cursor values that cross them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod query;
mod traits;
mod types;

pub use query::{CursorRow, CursorValue, MediaCursor, MediaQuery, QueryArgs, SortDirection};
pub use traits::{
    AppAvailability, BuildVersionProvider, ContentResolver, ImageStreamBackend,
    ImageStreamListener, ImageStreamService, ImageStreamUi, ImageStreamView, ItemListener,
    PermissionChecker, PermissionStore, ScrollListener, StreamModel,
};
pub use types::{StreamItem, UserMessage};
