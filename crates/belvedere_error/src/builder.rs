//! Errors raised when a media item, intent, UI config or session is built
//! from incomplete parts.

/// Why a Belvedere builder refused to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A field without a default was never set, such as a media item's URI
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    /// The assembled value was rejected as a whole
    #[display("Validation failed: {}", _0)]
    ValidationFailed(String),
}

/// Builder error with the location that raised it.
///
/// # Examples
///
/// ```
/// use belvedere_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField("uri".to_string()));
/// assert_eq!(err.kind(), &BuilderErrorKind::MissingField("uri".to_string()));
/// assert!(err.to_string().starts_with("Builder Error: Missing required field: uri"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Record `kind` at the caller's location.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
