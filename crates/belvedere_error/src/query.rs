//! Media-index query error types.

/// Kinds of media-index query errors.
///
/// A resolver that returns no result set is not an error; these cover rows
/// that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum QueryErrorKind {
    /// A projected column is missing from a row
    #[display("Column {} missing from row {}", column, row)]
    MissingColumn {
        /// Projection index of the column
        column: usize,
        /// Row position in the cursor
        row: usize,
    },
    /// A column holds a value of an unexpected type
    #[display("Column {} in row {} has unexpected type: expected {}", column, row, expected)]
    UnexpectedType {
        /// Projection index of the column
        column: usize,
        /// Row position in the cursor
        row: usize,
        /// Expected value type
        expected: &'static str,
    },
}

/// Query error with location tracking.
///
/// # Examples
///
/// ```
/// use belvedere_error::{QueryError, QueryErrorKind};
///
/// let err = QueryError::new(QueryErrorKind::MissingColumn { column: 0, row: 3 });
/// assert!(format!("{}", err).contains("missing"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Query Error: {} at line {} in {}", kind, line, file)]
pub struct QueryError {
    /// The kind of error that occurred
    pub kind: QueryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl QueryError {
    /// Create a new query error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: QueryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
