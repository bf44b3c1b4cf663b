//! Trait seams between the image stream and the platform around it.
//!
//! The stream runs on a single UI thread, so none of these traits require
//! `Send` or `Sync`, and methods take `&self` with implementors relying on
//! interior mutability where they record state.

use crate::{MediaCursor, MediaQuery, StreamItem, UserMessage};
use belvedere_core::{ApiLevel, MediaIntent, MediaResult, UiConfig};
use std::rc::Rc;

/// Access to the device media index.
pub trait ContentResolver {
    /// Run `query`. `None` means the index produced no result set.
    fn query(&self, query: &MediaQuery) -> Option<MediaCursor>;
}

/// Reports the platform API level the app is running on.
pub trait BuildVersionProvider {
    /// Current API level.
    fn current_version(&self) -> ApiLevel;
}

/// Answers whether an app package is installed and enabled.
pub trait AppAvailability {
    /// Whether `package` can receive intents.
    fn is_installed(&self, package: &str) -> bool;
}

/// Source of device media for the stream.
pub trait ImageStreamService {
    /// Up to `count` of the most recent device images, newest first.
    fn query_recent_images(&self, count: u32) -> Vec<MediaResult>;

    /// Whether `package` is available on the device.
    fn is_app_available(&self, package: &str) -> bool;
}

/// Merged media, selection state, and intent lookup for one session.
pub trait StreamModel {
    /// Selected, attached, and recent device media with duplicates removed.
    fn latest_images(&self) -> Vec<MediaResult>;

    /// Largest selectable size in bytes; negative means unlimited.
    fn max_file_size(&self) -> i64;

    /// Append `item` to the selection and return the new selection.
    fn add_to_selected_items(&self, item: MediaResult) -> Vec<MediaResult>;

    /// Remove one occurrence of `item` from the selection and return the new selection.
    fn remove_from_selected_items(&self, item: &MediaResult) -> Vec<MediaResult>;

    /// Current selection.
    fn selected_media_results(&self) -> Vec<MediaResult>;

    /// Whether an available camera target exists.
    fn has_camera_intent(&self) -> bool;

    /// Whether an available document target exists.
    fn has_document_intent(&self) -> bool;

    /// Whether the document target can be routed to Google Photos.
    fn has_google_photos_intent(&self) -> bool;

    /// First camera target.
    fn camera_intent(&self) -> Option<MediaIntent>;

    /// First document target.
    fn document_intent(&self) -> Option<MediaIntent>;

    /// The document target routed to Google Photos.
    fn google_photos_intent(&self) -> Option<MediaIntent>;

    /// Every configured target.
    fn media_intents(&self) -> Vec<MediaIntent>;
}

/// Callbacks the view invokes on user interaction with the stream.
pub trait ItemListener {
    /// The camera tile was tapped.
    fn on_open_camera(&self);

    /// A media tile was tapped. Returns whether the tile's state changed.
    fn on_selection_changed(&self, item: &mut StreamItem) -> bool;
}

/// The picker's on-screen surface.
pub trait ImageStreamView {
    /// Prepare widgets before anything is shown.
    fn init_views(&self);

    /// Render the stream.
    fn show_image_stream(
        &self,
        images: &[MediaResult],
        selected: &[MediaResult],
        show_camera: bool,
        listener: Rc<dyn ItemListener>,
    );

    /// Show the "browse documents" menu entry.
    fn show_document_menu_item(&self, intent: &MediaIntent);

    /// Show the "Google Photos" menu entry.
    fn show_google_photos_menu_item(&self, intent: &MediaIntent);

    /// Show a short message.
    fn show_toast(&self, message: UserMessage);

    /// Dispatch `intent`, delivering results through `backend`.
    fn open_media_intent(&self, intent: &MediaIntent, backend: &dyn ImageStreamBackend);
}

/// Handle on an attached picker UI.
pub trait ImageStreamUi {
    /// Close the UI.
    fn dismiss(&self);
}

/// Host-side hub that relays stream events to the embedding app.
pub trait ImageStreamBackend {
    /// The stream became visible.
    fn notify_visible(&self);

    /// The selection changed. `replace` tells listeners the list supersedes previous ones.
    fn notify_image_selected(&self, selection: &[MediaResult], replace: bool);

    /// The stream scrolled.
    fn notify_scroll_listener(&self, dx: i32, dy: i32, velocity: f32);

    /// The stream was dismissed.
    fn notify_dismissed(&self);

    /// Attach or detach the UI handle and its configuration.
    fn set_image_stream_ui(&self, ui: Option<Rc<dyn ImageStreamUi>>, config: Option<UiConfig>);
}

/// Receives stream lifecycle and selection events.
pub trait ImageStreamListener {
    /// The stream was dismissed.
    fn on_dismissed(&self);

    /// The stream became visible.
    fn on_visible(&self);

    /// Media was selected or delivered.
    fn on_media_selected(&self, media: &[MediaResult], replace: bool);
}

/// Receives scroll events.
pub trait ScrollListener {
    /// The stream scrolled by (`dx`, `dy`).
    fn on_scroll(&self, dx: i32, dy: i32, velocity: f32);
}

/// Answers whether runtime permissions are granted.
pub trait PermissionChecker {
    /// Whether `permission` is granted.
    fn is_granted(&self, permission: &str) -> bool;
}

/// Remembers permissions the user asked not to be prompted for again.
pub trait PermissionStore {
    /// Record that `permission` must not be requested again.
    fn never_ask_again(&self, permission: &str);

    /// Whether `permission` was marked never-ask.
    fn should_never_ask(&self, permission: &str) -> bool;
}
