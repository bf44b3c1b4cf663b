//! Image stream session error types.

/// Kinds of image stream errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StreamErrorKind {
    /// The session was dismissed and cannot be initialized again
    #[display("Image stream has been dismissed")]
    Dismissed,
    /// A required collaborator was not supplied
    #[display("Missing collaborator: {}", _0)]
    MissingCollaborator(String),
}

/// Image stream error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stream Error: {} at line {} in {}", kind, line, file)]
pub struct StreamError {
    /// The kind of error that occurred
    pub kind: StreamErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StreamError {
    /// Create a new stream error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
