//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, QueryError, StreamError};

/// Every error condition a Belvedere operation can report.
///
/// # Examples
///
/// ```
/// use belvedere_error::{BelvedereError, ConfigError};
///
/// let err: BelvedereError = ConfigError::new("bad value").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BelvedereErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Media-index query error
    #[from(QueryError)]
    Query(QueryError),
    /// Image stream session error
    #[from(StreamError)]
    Stream(StreamError),
}

/// Belvedere error with kind discrimination.
///
/// # Examples
///
/// ```
/// use belvedere_error::{BelvedereErrorKind, BelvedereResult, ConfigError};
///
/// fn might_fail() -> BelvedereResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), BelvedereErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Belvedere Error: {}", _0)]
pub struct BelvedereError(Box<BelvedereErrorKind>);

impl BelvedereError {
    /// Create a new error from a kind.
    pub fn new(kind: BelvedereErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BelvedereErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BelvedereErrorKind
impl<T> From<T> for BelvedereError
where
    T: Into<BelvedereErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Belvedere operations.
pub type BelvedereResult<T> = std::result::Result<T, BelvedereError>;
