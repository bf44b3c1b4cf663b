//! Mediates between the stream model, the view and the host backend.

use belvedere_error::{StreamError, StreamErrorKind};
use belvedere_interface::{
    ImageStreamBackend, ImageStreamView, ItemListener, StreamItem, StreamModel, UserMessage,
};
use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, instrument};

/// Lifecycle of a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum PresenterState {
    /// Created, nothing shown yet.
    #[default]
    #[display("idle")]
    Idle,
    /// The stream is on screen.
    #[display("initialized")]
    Initialized,
    /// The stream was torn down.
    #[display("dismissed")]
    Dismissed,
}

/// Drives one image stream session.
///
/// # Examples
///
/// Presenters are normally created by a session; see the `belvedere` crate.
/// Once dismissed, a presenter refuses to initialize again:
///
/// ```ignore
/// presenter.dismiss();
/// assert!(presenter.init().is_err());
/// ```
pub struct ImageStreamPresenter {
    model: Rc<dyn StreamModel>,
    view: Rc<dyn ImageStreamView>,
    backend: Rc<dyn ImageStreamBackend>,
    listener: Rc<SelectionListener>,
    state: Cell<PresenterState>,
}

impl ImageStreamPresenter {
    /// Create an idle presenter.
    pub fn new(
        model: Rc<dyn StreamModel>,
        view: Rc<dyn ImageStreamView>,
        backend: Rc<dyn ImageStreamBackend>,
    ) -> Self {
        let listener = Rc::new(SelectionListener {
            model: Rc::clone(&model),
            view: Rc::downgrade(&view),
            backend: Rc::clone(&backend),
        });
        Self {
            model,
            view,
            backend,
            listener,
            state: Cell::new(PresenterState::Idle),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PresenterState {
        self.state.get()
    }

    /// Show the menu entries and the stream, then tell the backend the stream
    /// is visible.
    ///
    /// Calling this again re-renders the stream.
    ///
    /// # Errors
    ///
    /// Returns [`StreamErrorKind::Dismissed`] after [`Self::dismiss`].
    #[instrument(skip(self), fields(state = %self.state.get()))]
    pub fn init(&self) -> Result<(), StreamError> {
        if self.state.get() == PresenterState::Dismissed {
            return Err(StreamError::new(StreamErrorKind::Dismissed));
        }

        self.view.init_views();
        self.init_menu();

        let images = self.model.latest_images();
        let selected = self.model.selected_media_results();
        let show_camera = self.model.has_camera_intent();
        debug!(
            images = images.len(),
            selected = selected.len(),
            show_camera,
            "Showing image stream"
        );
        let listener: Rc<dyn ItemListener> = self.listener.clone();
        self.view
            .show_image_stream(&images, &selected, show_camera, listener);

        self.backend.notify_visible();
        self.state.set(PresenterState::Initialized);
        Ok(())
    }

    fn init_menu(&self) {
        if self.model.has_document_intent()
            && let Some(document) = self.model.document_intent()
        {
            self.view.show_document_menu_item(&document);
        }

        if self.model.has_google_photos_intent()
            && let Some(photos) = self.model.google_photos_intent()
        {
            self.view.show_google_photos_menu_item(&photos);
        }
    }

    /// Open the document picker. Returns whether an intent was dispatched.
    pub fn open_gallery(&self) -> bool {
        if !self.model.has_document_intent() {
            return false;
        }
        match self.model.document_intent() {
            Some(document) => {
                self.view.open_media_intent(&document, self.backend.as_ref());
                true
            }
            None => false,
        }
    }

    /// Open Google Photos. Returns whether an intent was dispatched.
    pub fn open_google_photos(&self) -> bool {
        if !self.model.has_google_photos_intent() {
            return false;
        }
        match self.model.google_photos_intent() {
            Some(photos) => {
                self.view.open_media_intent(&photos, self.backend.as_ref());
                true
            }
            None => false,
        }
    }

    /// Tear the stream down: detach the UI, reset scroll listeners and
    /// notify dismissal.
    #[instrument(skip(self))]
    pub fn dismiss(&self) {
        self.backend.set_image_stream_ui(None, None);
        self.backend.notify_scroll_listener(0, 0, 0.0);
        self.backend.notify_dismissed();
        self.state.set(PresenterState::Dismissed);
    }

    /// Forward a scroll event. Negative velocities come from overscroll and
    /// are dropped.
    pub fn on_image_stream_scrolled(&self, dx: i32, dy: i32, velocity: f32) {
        if velocity >= 0.0 {
            self.backend.notify_scroll_listener(dx, dy, velocity);
        } else {
            debug!(dx, dy, velocity, "Ignoring overscroll");
        }
    }
}

impl fmt::Debug for ImageStreamPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStreamPresenter")
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

/// Listener the presenter hands to the view.
///
/// Holds the view weakly; the view owns the listener.
pub struct SelectionListener {
    model: Rc<dyn StreamModel>,
    view: Weak<dyn ImageStreamView>,
    backend: Rc<dyn ImageStreamBackend>,
}

impl ItemListener for SelectionListener {
    fn on_open_camera(&self) {
        if !self.model.has_camera_intent() {
            debug!("No available camera intent");
            return;
        }
        let Some(camera) = self.model.camera_intent() else {
            debug!("No camera intent configured");
            return;
        };
        match self.view.upgrade() {
            Some(view) => view.open_media_intent(&camera, self.backend.as_ref()),
            None => debug!("View dropped before camera could open"),
        }
    }

    #[instrument(skip_all, fields(selected = item.is_selected()))]
    fn on_selection_changed(&self, item: &mut StreamItem) -> bool {
        let Some(media) = item.media_result().cloned() else {
            return false;
        };

        if item.is_selected() {
            item.set_selected(false);
            let selection = self.model.remove_from_selected_items(&media);
            self.backend.notify_image_selected(&selection, true);
            return true;
        }

        let max_file_size = self.model.max_file_size();
        if media.exceeds(max_file_size) {
            debug!(size = *media.size(), max_file_size, "Item exceeds maximum file size");
            if let Some(view) = self.view.upgrade() {
                view.show_toast(UserMessage::MaxFileSizeExceeded);
            }
            return false;
        }

        item.set_selected(true);
        let selection = self.model.add_to_selected_items(media);
        self.backend.notify_image_selected(&selection, true);
        true
    }
}

impl fmt::Debug for SelectionListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionListener")
            .field("view_alive", &(self.view.strong_count() > 0))
            .finish_non_exhaustive()
    }
}
