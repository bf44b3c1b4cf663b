//! Device media index access for the Belvedere image stream.
//!
//! [`QueryPolicy`] decides, from the platform API level, which date column
//! orders the stream and whether paging travels as structured query arguments
//! or as a raw sort clause. [`ImageStreamCursorProvider`] issues that query and
//! [`MediaStoreService`] turns the rows into [`belvedere_core::MediaResult`]s.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod columns;
mod cursor_provider;
mod policy;
mod service;

pub use columns::{EXTERNAL_IMAGES_URI, OrderColumn, PROJECTION};
pub use cursor_provider::ImageStreamCursorProvider;
pub use policy::{Paging, QueryPolicy};
pub use service::MediaStoreService;
