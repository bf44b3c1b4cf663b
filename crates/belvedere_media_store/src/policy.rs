//! Version-dependent query shaping.

use crate::columns::{self, EXTERNAL_IMAGES_URI, OrderColumn};
use belvedere_core::ApiLevel;
use belvedere_interface::{MediaQuery, QueryArgs, SortDirection};
use derive_getters::Getters;

/// How the row limit and ordering reach the media index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Paging {
    /// Structured query arguments, API 26 and later.
    #[strum(serialize = "query_args")]
    QueryArgs,
    /// A raw `ORDER BY ... LIMIT n` clause, before API 26.
    #[strum(serialize = "sort_clause")]
    SortClause,
}

/// Query shape for one platform version, chosen once per provider.
///
/// # Examples
///
/// ```
/// use belvedere_core::ApiLevel;
/// use belvedere_media_store::{OrderColumn, Paging, QueryPolicy};
///
/// let policy = QueryPolicy::for_api_level(ApiLevel::N_MR1);
/// assert_eq!(*policy.order_column(), OrderColumn::DateModified);
/// assert_eq!(*policy.paging(), Paging::SortClause);
///
/// let query = policy.build(9);
/// assert_eq!(query.sort_order().as_deref(), Some("date_modified DESC LIMIT 9"));
/// assert!(query.args().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct QueryPolicy {
    /// Column the stream is sorted by.
    order_column: OrderColumn,
    /// Where the limit and ordering go.
    paging: Paging,
}

impl QueryPolicy {
    /// Pick the policy for `level`.
    ///
    /// `date_taken` is only reliable from API 29; earlier levels order by
    /// `date_modified`.
    pub fn for_api_level(level: ApiLevel) -> Self {
        let order_column = if level >= ApiLevel::Q {
            OrderColumn::DateTaken
        } else {
            OrderColumn::DateModified
        };
        let paging = if level >= ApiLevel::O {
            Paging::QueryArgs
        } else {
            Paging::SortClause
        };
        Self {
            order_column,
            paging,
        }
    }

    /// The query for the `limit` newest images.
    pub fn build(&self, limit: u32) -> MediaQuery {
        match self.paging {
            Paging::QueryArgs => MediaQuery::with_args(
                EXTERNAL_IMAGES_URI,
                columns::projection(),
                QueryArgs::new(
                    limit,
                    vec![self.order_column.to_string()],
                    SortDirection::Descending,
                ),
            ),
            Paging::SortClause => MediaQuery::with_sort_order(
                EXTERNAL_IMAGES_URI,
                columns::projection(),
                format!(
                    "{} {} LIMIT {}",
                    self.order_column,
                    SortDirection::Descending,
                    limit
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_args_start_at_oreo() {
        assert_eq!(
            *QueryPolicy::for_api_level(ApiLevel::N_MR1).paging(),
            Paging::SortClause
        );
        assert_eq!(*QueryPolicy::for_api_level(ApiLevel::O).paging(), Paging::QueryArgs);
    }

    #[test]
    fn test_date_taken_starts_at_q() {
        assert_eq!(
            *QueryPolicy::for_api_level(ApiLevel::P).order_column(),
            OrderColumn::DateModified
        );
        assert_eq!(
            *QueryPolicy::for_api_level(ApiLevel::Q).order_column(),
            OrderColumn::DateTaken
        );
    }

    #[test]
    fn test_pie_query_uses_args_with_date_modified() {
        let query = QueryPolicy::for_api_level(ApiLevel::P).build(25);
        let args = query.args().as_ref().unwrap();

        assert_eq!(*args.limit(), 25);
        assert_eq!(args.sort_columns(), &vec!["date_modified".to_string()]);
        assert_eq!(*args.sort_direction(), SortDirection::Descending);
        assert!(query.sort_order().is_none());
        assert_eq!(query.uri(), EXTERNAL_IMAGES_URI);
    }
}
