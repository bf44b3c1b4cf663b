//! Device media as [`MediaResult`]s.

use crate::ImageStreamCursorProvider;
use crate::columns::{DISPLAY_NAME_INDEX, HEIGHT_INDEX, ID_INDEX, SIZE_INDEX, WIDTH_INDEX};
use belvedere_core::{ContentUri, MediaResult, infer_mime_type};
use belvedere_error::BelvedereResult;
use belvedere_interface::{AppAvailability, CursorRow, ImageStreamService};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// [`ImageStreamService`] backed by the device media index.
pub struct MediaStoreService {
    cursor_provider: ImageStreamCursorProvider,
    app_availability: Option<Rc<dyn AppAvailability>>,
}

impl MediaStoreService {
    /// Create a service reading through `cursor_provider`.
    pub fn new(cursor_provider: ImageStreamCursorProvider) -> Self {
        Self {
            cursor_provider,
            app_availability: None,
        }
    }

    /// Use `probe` to answer app availability questions.
    pub fn with_app_availability(mut self, probe: Rc<dyn AppAvailability>) -> Self {
        self.app_availability = Some(probe);
        self
    }

    /// The underlying cursor provider.
    pub fn cursor_provider(&self) -> &ImageStreamCursorProvider {
        &self.cursor_provider
    }
}

/// Read one projection row. `Ok(None)` for rows without an id.
fn media_result_from_row(row: &CursorRow<'_>) -> BelvedereResult<Option<MediaResult>> {
    let Some(id) = row.long(ID_INDEX)? else {
        return Ok(None);
    };
    let name = row.string(DISPLAY_NAME_INDEX)?.unwrap_or_default();
    let uri = ContentUri::external_file(id);

    let result = MediaResult::builder()
        .uri(uri.clone())
        .original_uri(Some(uri))
        .name(name)
        .mime_type(infer_mime_type(name))
        .size(row.long(SIZE_INDEX)?.unwrap_or(MediaResult::UNKNOWN_VALUE))
        .width(row.long(WIDTH_INDEX)?.unwrap_or(MediaResult::UNKNOWN_VALUE))
        .height(row.long(HEIGHT_INDEX)?.unwrap_or(MediaResult::UNKNOWN_VALUE))
        .build()?;
    Ok(Some(result))
}

impl ImageStreamService for MediaStoreService {
    #[instrument(skip(self))]
    fn query_recent_images(&self, count: u32) -> Vec<MediaResult> {
        let cursor = self.cursor_provider.get_cursor(count);
        let mut results = Vec::with_capacity(cursor.len());

        for row in cursor.rows() {
            match media_result_from_row(&row) {
                Ok(Some(result)) => results.push(result),
                Ok(None) => warn!(row = row.position(), "Skipping media row without an id"),
                Err(e) => warn!(row = row.position(), error = %e, "Skipping unreadable media row"),
            }
        }

        debug!(count = results.len(), "Loaded recent images");
        results
    }

    fn is_app_available(&self, package: &str) -> bool {
        self.app_availability
            .as_ref()
            .is_some_and(|probe| probe.is_installed(package))
    }
}

impl fmt::Debug for MediaStoreService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStoreService")
            .field("cursor_provider", &self.cursor_provider)
            .field("app_availability", &self.app_availability.is_some())
            .finish()
    }
}
