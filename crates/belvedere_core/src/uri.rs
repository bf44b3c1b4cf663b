//! URI-like content identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a piece of media, in `content://` URI form.
///
/// Two media items with equal `ContentUri`s are the same item for
/// de-duplication purposes.
///
/// # Examples
///
/// ```
/// use belvedere_core::ContentUri;
///
/// let uri = ContentUri::external_file(42);
/// assert_eq!(uri.as_str(), "content://media/external/file/42");
/// assert_eq!(uri.scheme(), Some("content"));
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct ContentUri(String);

impl ContentUri {
    /// Base URI of files on the shared external volume.
    pub const EXTERNAL_FILES: &'static str = "content://media/external/file";

    /// Create a URI from any string.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// URI of a row of the external files table.
    pub fn external_file(id: i64) -> Self {
        Self(format!("{}/{}", Self::EXTERNAL_FILES, id))
    }

    /// The URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme part, if the URI has one.
    pub fn scheme(&self) -> Option<&str> {
        self.0.split_once("://").map(|(scheme, _)| scheme)
    }

    /// Whether this is the empty placeholder URI.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ContentUri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl AsRef<str> for ContentUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
