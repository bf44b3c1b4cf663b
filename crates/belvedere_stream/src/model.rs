//! Selection state and intent lookup for one image stream session.

use crate::merge_media;
use belvedere_core::{
    ACTION_GET_CONTENT, GOOGLE_PHOTOS_PACKAGE, IntentPayload, IntentTarget, MediaIntent,
    MediaResult, SharedIntentList, SharedMediaList, UiConfig,
};
use belvedere_interface::{ImageStreamService, StreamModel};
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Backs the image stream with the caller's lists and the device media index.
///
/// The intent and item lists are shared handles. Whatever the caller pushes
/// into them after construction shows up in the next query.
pub struct ImageStreamModel {
    service: Rc<dyn ImageStreamService>,
    max_file_size: i64,
    max_images: u32,
    intents: SharedIntentList,
    selected_items: SharedMediaList,
    additional_items: SharedMediaList,
    google_photos_intent: OnceCell<ResolvedPhotosIntent>,
}

/// The Google Photos target together with the document intent it came from.
#[derive(Debug, Clone)]
struct ResolvedPhotosIntent {
    document: Option<MediaIntent>,
    photos: Option<MediaIntent>,
}

impl ImageStreamModel {
    /// Device images requested per query unless overridden.
    pub const DEFAULT_MAX_IMAGES: u32 = 500;

    /// Create a model over the caller's lists.
    pub fn new(
        service: Rc<dyn ImageStreamService>,
        max_file_size: i64,
        intents: SharedIntentList,
        selected_items: SharedMediaList,
        additional_items: SharedMediaList,
    ) -> Self {
        Self {
            service,
            max_file_size,
            max_images: Self::DEFAULT_MAX_IMAGES,
            intents,
            selected_items,
            additional_items,
            google_photos_intent: OnceCell::new(),
        }
    }

    /// Create a model sharing the lists held by `config`.
    pub fn from_config(service: Rc<dyn ImageStreamService>, config: &UiConfig) -> Self {
        Self::new(
            service,
            *config.max_file_size(),
            config.intents().clone(),
            config.selected_items().clone(),
            config.additional_items().clone(),
        )
    }

    /// Request `max_images` device images per query.
    pub fn with_max_images(mut self, max_images: u32) -> Self {
        self.max_images = max_images;
        self
    }

    /// Device images requested per query.
    pub fn max_images(&self) -> u32 {
        self.max_images
    }

    /// Resolve the Google Photos target once and keep it for the session.
    ///
    /// The stored intent is served while the caller's document intent is
    /// unchanged; once it changes, the target is derived from the live list.
    /// The shared intent list is never modified.
    #[instrument(skip(self))]
    pub fn resolve_google_photos_intent(&self) -> Option<MediaIntent> {
        self.google_photos_intent.get_or_init(|| {
            let document = self.document_intent();
            let photos = retarget_to_google_photos(document.as_ref());
            debug!(resolved = photos.is_some(), "Resolved Google Photos intent");
            ResolvedPhotosIntent { document, photos }
        });
        self.google_photos_intent()
    }

    /// Whether [`Self::resolve_google_photos_intent`] has run.
    pub fn is_google_photos_resolved(&self) -> bool {
        self.google_photos_intent.get().is_some()
    }

    fn intent_for_target(&self, target: IntentTarget) -> Option<MediaIntent> {
        self.intents.with(|intents| {
            intents
                .iter()
                .find(|intent| *intent.target() == target)
                .cloned()
        })
    }

    fn offers(&self, target: IntentTarget) -> bool {
        self.intents
            .with(|intents| intents.iter().any(|intent| intent.offers(target)))
    }
}

/// `document` routed to Google Photos with `ACTION_GET_CONTENT`.
fn retarget_to_google_photos(document: Option<&MediaIntent>) -> Option<MediaIntent> {
    document.map(|document| {
        let payload = match document.payload() {
            Some(payload) => payload.retargeted(GOOGLE_PHOTOS_PACKAGE, ACTION_GET_CONTENT),
            None => IntentPayload::default()
                .with_package(GOOGLE_PHOTOS_PACKAGE)
                .with_action(ACTION_GET_CONTENT),
        };
        document.with_payload(Some(payload))
    })
}

impl StreamModel for ImageStreamModel {
    #[instrument(skip(self), fields(max_images = self.max_images))]
    fn latest_images(&self) -> Vec<MediaResult> {
        let system = self.service.query_recent_images(self.max_images);
        let merged = self.selected_items.with(|selected| {
            self.additional_items
                .with(|additional| merge_media(selected, additional, system))
        });
        debug!(count = merged.len(), "Merged stream media");
        merged
    }

    fn max_file_size(&self) -> i64 {
        self.max_file_size
    }

    fn add_to_selected_items(&self, item: MediaResult) -> Vec<MediaResult> {
        self.selected_items.push(item);
        self.selected_items.snapshot()
    }

    fn remove_from_selected_items(&self, item: &MediaResult) -> Vec<MediaResult> {
        if !self.selected_items.remove_first(item) {
            debug!(uri = %item.uri(), "Item was not selected");
        }
        self.selected_items.snapshot()
    }

    fn selected_media_results(&self) -> Vec<MediaResult> {
        self.selected_items.snapshot()
    }

    fn has_camera_intent(&self) -> bool {
        self.offers(IntentTarget::Camera)
    }

    fn has_document_intent(&self) -> bool {
        self.offers(IntentTarget::Document)
    }

    fn has_google_photos_intent(&self) -> bool {
        self.document_intent().is_some() && self.service.is_app_available(GOOGLE_PHOTOS_PACKAGE)
    }

    fn camera_intent(&self) -> Option<MediaIntent> {
        self.intent_for_target(IntentTarget::Camera)
    }

    fn document_intent(&self) -> Option<MediaIntent> {
        self.intent_for_target(IntentTarget::Document)
    }

    fn google_photos_intent(&self) -> Option<MediaIntent> {
        let document = self.document_intent();
        match self.google_photos_intent.get() {
            Some(resolved) if resolved.document == document => resolved.photos.clone(),
            Some(_) => {
                debug!("Document intent changed since resolution; deriving Google Photos intent");
                retarget_to_google_photos(document.as_ref())
            }
            None => retarget_to_google_photos(document.as_ref()),
        }
    }

    fn media_intents(&self) -> Vec<MediaIntent> {
        self.intents.snapshot()
    }
}

impl fmt::Debug for ImageStreamModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStreamModel")
            .field("max_file_size", &self.max_file_size)
            .field("max_images", &self.max_images)
            .field("intents", &self.intents)
            .field("selected_items", &self.selected_items)
            .field("additional_items", &self.additional_items)
            .finish_non_exhaustive()
    }
}
