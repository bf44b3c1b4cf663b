//! Media-index query and result-set values.

use belvedere_error::{QueryError, QueryErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Direction of a sort.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum SortDirection {
    /// Smallest first
    #[strum(serialize = "ASC")]
    Ascending,
    /// Largest first
    #[strum(serialize = "DESC")]
    Descending,
}

/// Structured query arguments: paging and ordering without raw SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct QueryArgs {
    /// Maximum number of rows.
    limit: u32,
    /// Columns to sort by, most significant first.
    sort_columns: Vec<String>,
    /// Sort direction applied to every sort column.
    sort_direction: SortDirection,
}

impl QueryArgs {
    /// Create query arguments.
    pub fn new(limit: u32, sort_columns: Vec<String>, sort_direction: SortDirection) -> Self {
        Self {
            limit,
            sort_columns,
            sort_direction,
        }
    }
}

/// One query against the device media index.
///
/// Exactly one of `args` and `sort_order` carries paging and ordering,
/// depending on what the platform supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MediaQuery {
    /// Table to query.
    uri: String,
    /// Columns to return, in order.
    projection: Vec<String>,
    /// Structured arguments, when supported.
    args: Option<QueryArgs>,
    /// Raw sort clause, when structured arguments are not supported.
    sort_order: Option<String>,
}

impl MediaQuery {
    /// Query paged and ordered through structured arguments.
    pub fn with_args(uri: impl Into<String>, projection: Vec<String>, args: QueryArgs) -> Self {
        Self {
            uri: uri.into(),
            projection,
            args: Some(args),
            sort_order: None,
        }
    }

    /// Query paged and ordered through a raw sort clause.
    pub fn with_sort_order(
        uri: impl Into<String>,
        projection: Vec<String>,
        sort_order: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            projection,
            args: None,
            sort_order: Some(sort_order.into()),
        }
    }
}

/// A single cell of a result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
pub enum CursorValue {
    /// SQL NULL
    Null,
    /// Integer column
    #[from(i64)]
    Integer(i64),
    /// Floating point column
    #[from(f64)]
    Float(f64),
    /// Text column
    #[from(String)]
    Text(String),
}

impl From<&str> for CursorValue {
    fn from(value: &str) -> Self {
        CursorValue::Text(value.to_string())
    }
}

/// Rows returned by a media-index query, read by projection position.
///
/// # Examples
///
/// ```
/// use belvedere_interface::{CursorValue, MediaCursor};
///
/// let cursor = MediaCursor::new(
///     vec!["_id".to_string(), "_display_name".to_string()],
///     vec![vec![CursorValue::from(7_i64), CursorValue::from("cat.png")]],
/// );
///
/// let row = cursor.rows().next().unwrap();
/// assert_eq!(row.long(0).unwrap(), Some(7));
/// assert_eq!(row.string(1).unwrap(), Some("cat.png"));
/// assert_eq!(cursor.column_index("_display_name"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct MediaCursor {
    /// Column names, in projection order.
    columns: Vec<String>,
    #[getter(skip)]
    rows: Vec<Vec<CursorValue>>,
}

impl MediaCursor {
    /// Create a cursor over `rows`.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CursorValue>>) -> Self {
        Self { columns, rows }
    }

    /// A cursor with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = CursorRow<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(position, values)| CursorRow { position, values })
    }
}

/// One row of a [`MediaCursor`].
#[derive(Debug, Clone, Copy)]
pub struct CursorRow<'a> {
    position: usize,
    values: &'a [CursorValue],
}

impl<'a> CursorRow<'a> {
    /// Position of the row in its cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    fn value(&self, column: usize) -> Result<&'a CursorValue, QueryError> {
        self.values.get(column).ok_or_else(|| {
            QueryError::new(QueryErrorKind::MissingColumn {
                column,
                row: self.position,
            })
        })
    }

    /// Integer value of `column`; `None` for NULL.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is missing or holds text.
    pub fn long(&self, column: usize) -> Result<Option<i64>, QueryError> {
        match self.value(column)? {
            CursorValue::Null => Ok(None),
            CursorValue::Integer(value) => Ok(Some(*value)),
            CursorValue::Float(value) => Ok(Some(*value as i64)),
            CursorValue::Text(_) => Err(QueryError::new(QueryErrorKind::UnexpectedType {
                column,
                row: self.position,
                expected: "integer",
            })),
        }
    }

    /// Text value of `column`; `None` for NULL.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is missing or is not text.
    pub fn string(&self, column: usize) -> Result<Option<&'a str>, QueryError> {
        match self.value(column)? {
            CursorValue::Null => Ok(None),
            CursorValue::Text(value) => Ok(Some(value.as_str())),
            _ => Err(QueryError::new(QueryErrorKind::UnexpectedType {
                column,
                row: self.position,
                expected: "text",
            })),
        }
    }
}
