//! Issues the stream's media index query.

use crate::{OrderColumn, QueryPolicy};
use belvedere_core::ApiLevel;
use belvedere_interface::{BuildVersionProvider, ContentResolver, MediaCursor};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Queries the newest device images through a [`ContentResolver`].
///
/// The query shape is fixed when the provider is created.
pub struct ImageStreamCursorProvider {
    resolver: Rc<dyn ContentResolver>,
    api_level: ApiLevel,
    policy: QueryPolicy,
}

impl ImageStreamCursorProvider {
    /// Create a provider for a device running `api_level`.
    pub fn new(resolver: Rc<dyn ContentResolver>, api_level: ApiLevel) -> Self {
        Self {
            resolver,
            api_level,
            policy: QueryPolicy::for_api_level(api_level),
        }
    }

    /// Create a provider for the API level `versions` reports.
    pub fn from_version_provider(
        resolver: Rc<dyn ContentResolver>,
        versions: &dyn BuildVersionProvider,
    ) -> Self {
        Self::new(resolver, versions.current_version())
    }

    /// Column the stream is ordered by.
    pub fn order_column(&self) -> OrderColumn {
        *self.policy.order_column()
    }

    /// The policy in use.
    pub fn policy(&self) -> &QueryPolicy {
        &self.policy
    }

    /// API level the policy was chosen for.
    pub fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    /// Query at most `limit` images, newest first.
    ///
    /// A resolver that produces no result set yields an empty cursor.
    #[instrument(skip(self), fields(api_level = %self.api_level, paging = %self.policy.paging()))]
    pub fn get_cursor(&self, limit: u32) -> MediaCursor {
        let query = self.policy.build(limit);
        match self.resolver.query(&query) {
            Some(cursor) => {
                debug!(rows = cursor.len(), "Media index query returned");
                cursor
            }
            None => {
                debug!("Media index returned no result set");
                MediaCursor::empty()
            }
        }
    }
}

impl fmt::Debug for ImageStreamCursorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStreamCursorProvider")
            .field("api_level", &self.api_level)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
