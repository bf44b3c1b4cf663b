//! Error types for the Belvedere media picker.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind together with the source location
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! Conditions the image stream treats as normal flow (an empty media query,
//! an oversized selection, a negative scroll velocity) never surface here.
//!
//! # Examples
//!
//! ```
//! use belvedere_error::{BelvedereResult, StreamError, StreamErrorKind};
//!
//! fn reopen() -> BelvedereResult<()> {
//!     Err(StreamError::new(StreamErrorKind::Dismissed))?
//! }
//!
//! assert!(reopen().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod query;
mod stream;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{BelvedereError, BelvedereErrorKind, BelvedereResult};
pub use query::{QueryError, QueryErrorKind};
pub use stream::{StreamError, StreamErrorKind};
