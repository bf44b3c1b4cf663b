//! Belvedere: an in-app media picker.
//!
//! An image stream session shows the most recent device images, merged with
//! the items the user has already selected or attached, and offers entry
//! points to camera capture, the document picker and Google Photos. The
//! platform is reached only through the traits re-exported from
//! [`belvedere_interface`].
//!
//! # Example
//!
//! ```no_run
//! use belvedere::{BelvedereConfig, ImageStream, ImageStreamSession, init_tracing};
//! # use belvedere::{ApiLevel, BuildVersionProvider, ContentResolver, ImageStreamBackend,
//! #     ImageStreamView, ItemListener, MediaCursor, MediaIntent, MediaQuery, MediaResult,
//! #     UserMessage};
//! # use std::rc::Rc;
//! # struct Resolver;
//! # impl ContentResolver for Resolver {
//! #     fn query(&self, _: &MediaQuery) -> Option<MediaCursor> { None }
//! # }
//! # struct Device;
//! # impl BuildVersionProvider for Device {
//! #     fn current_version(&self) -> ApiLevel { ApiLevel::R }
//! # }
//! # struct View;
//! # impl ImageStreamView for View {
//! #     fn init_views(&self) {}
//! #     fn show_image_stream(&self, _: &[MediaResult], _: &[MediaResult], _: bool, _: Rc<dyn ItemListener>) {}
//! #     fn show_document_menu_item(&self, _: &MediaIntent) {}
//! #     fn show_google_photos_menu_item(&self, _: &MediaIntent) {}
//! #     fn show_toast(&self, _: UserMessage) {}
//! #     fn open_media_intent(&self, _: &MediaIntent, _: &dyn ImageStreamBackend) {}
//! # }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! init_tracing()?;
//! let config = BelvedereConfig::load()?;
//!
//! let backend = Rc::new(ImageStream::new());
//! let session = ImageStreamSession::builder()
//!     .resolver(Rc::new(Resolver))
//!     .version_provider(Rc::new(Device))
//!     .view(Rc::new(View))
//!     .backend(backend.clone())
//!     .ui_config(config.ui_config_builder().build()?)
//!     .max_images(config.image_stream.max_images)
//!     .build()?;
//!
//! session.start()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod session;
mod telemetry;

pub use config::{BelvedereConfig, ImageStreamConfig, LoggingConfig};
pub use session::{ImageStreamSession, ImageStreamSessionBuilder, SessionSetup};
pub use telemetry::{init_tracing, init_tracing_with_config};

pub use belvedere_core::{
    ACTION_GET_CONTENT, ACTION_IMAGE_CAPTURE, ACTION_OPEN_DOCUMENT, ApiLevel, ContentUri,
    GOOGLE_PHOTOS_PACKAGE, IntentPayload, IntentTarget, MediaIntent, MediaIntentBuilder,
    MediaResult, MediaResultBuilder, SharedIntentList, SharedMediaList, UiConfig,
    UiConfigBuilder,
};
pub use belvedere_error::{
    BelvedereError, BelvedereErrorKind, BelvedereResult, BuilderError, BuilderErrorKind,
    ConfigError, QueryError, QueryErrorKind, StreamError, StreamErrorKind,
};
pub use belvedere_interface::{
    AppAvailability, BuildVersionProvider, ContentResolver, CursorValue, ImageStreamBackend,
    ImageStreamListener, ImageStreamService, ImageStreamUi, ImageStreamView, ItemListener,
    MediaCursor, MediaQuery, PermissionChecker, PermissionStore, QueryArgs, ScrollListener,
    SortDirection, StreamItem, StreamModel, UserMessage,
};
pub use belvedere_media_store::{
    ImageStreamCursorProvider, MediaStoreService, OrderColumn, QueryPolicy,
};
pub use belvedere_stream::{
    ImageStream, ImageStreamModel, ImageStreamPresenter, MemoryPermissionStore, PermissionPlan,
    PresenterState, READ_EXTERNAL_STORAGE, plan_permissions, record_permission_result,
};
