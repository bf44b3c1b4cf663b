//! Host-side hub for image stream events.

use belvedere_core::{MediaResult, UiConfig};
use belvedere_interface::{ImageStreamBackend, ImageStreamListener, ImageStreamUi, ScrollListener};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, instrument, warn};

/// Relays stream events to the embedding app and holds the attached UI.
///
/// Listeners are held weakly. Registering one does not keep it alive, and
/// listeners that have been dropped are pruned on the next notification.
///
/// # Examples
///
/// ```
/// use belvedere_core::MediaResult;
/// use belvedere_interface::{ImageStreamBackend, ImageStreamListener};
/// use belvedere_stream::ImageStream;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct CountVisible(Cell<u32>);
///
/// impl ImageStreamListener for CountVisible {
///     fn on_dismissed(&self) {}
///     fn on_visible(&self) {
///         self.0.set(self.0.get() + 1);
///     }
///     fn on_media_selected(&self, _media: &[MediaResult], _replace: bool) {}
/// }
///
/// let stream = ImageStream::new();
/// let listener = Rc::new(CountVisible::default());
/// stream.add_listener(&listener);
///
/// stream.notify_visible();
/// assert_eq!(listener.0.get(), 1);
///
/// drop(listener);
/// stream.notify_visible();
/// assert_eq!(stream.listener_count(), 0);
/// ```
#[derive(Default)]
pub struct ImageStream {
    listeners: RefCell<Vec<Weak<dyn ImageStreamListener>>>,
    scroll_listeners: RefCell<Vec<Weak<dyn ScrollListener>>>,
    ui: RefCell<Option<Rc<dyn ImageStreamUi>>>,
    config: RefCell<Option<UiConfig>>,
    was_open: Cell<bool>,
}

/// Upgrade the live entries of `registry`, pruning dead ones.
fn live<T: ?Sized>(registry: &RefCell<Vec<Weak<T>>>, kind: &'static str) -> Vec<Rc<T>> {
    let mut entries = registry.borrow_mut();
    let before = entries.len();
    entries.retain(|entry| entry.strong_count() > 0);
    let pruned = before - entries.len();
    if pruned > 0 {
        warn!(kind, pruned, "Dropped listeners were pruned");
    }
    entries.iter().filter_map(Weak::upgrade).collect()
}

impl ImageStream {
    /// Create a backend with no listeners and no UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stream listener without taking ownership of it.
    pub fn add_listener<L: ImageStreamListener + 'static>(&self, listener: &Rc<L>) {
        let weak = Rc::downgrade(listener) as Weak<dyn ImageStreamListener>;
        self.listeners.borrow_mut().push(weak);
    }

    /// Register a scroll listener without taking ownership of it.
    pub fn add_scroll_listener<L: ScrollListener + 'static>(&self, listener: &Rc<L>) {
        let weak = Rc::downgrade(listener) as Weak<dyn ScrollListener>;
        self.scroll_listeners.borrow_mut().push(weak);
    }

    /// Registered stream listeners, including ones not yet pruned.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Registered scroll listeners, including ones not yet pruned.
    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_listeners.borrow().len()
    }

    /// Whether a picker UI is attached.
    pub fn is_attachments_popup_visible(&self) -> bool {
        self.ui.borrow().is_some()
    }

    /// Whether the UI was open when the host last paused.
    pub fn was_open(&self) -> bool {
        self.was_open.get()
    }

    /// Configuration of the most recently attached UI.
    pub fn ui_config(&self) -> Option<UiConfig> {
        self.config.borrow().clone()
    }

    /// Size limit of the attached configuration; unlimited when none is attached.
    pub fn max_file_size(&self) -> i64 {
        self.config
            .borrow()
            .as_ref()
            .map_or(UiConfig::UNLIMITED_FILE_SIZE, |config| *config.max_file_size())
    }

    /// Close the attached UI, if any.
    pub fn dismiss(&self) {
        let ui = self.ui.borrow().clone();
        if let Some(ui) = ui {
            ui.dismiss();
        }
    }

    /// The host is pausing: close the UI and remember whether it was open.
    #[instrument(skip(self))]
    pub fn on_pause(&self) {
        let ui = self.ui.borrow().clone();
        match ui {
            Some(ui) => {
                ui.dismiss();
                self.was_open.set(true);
            }
            None => self.was_open.set(false),
        }
    }

    /// Hand media returned by an external picker to the listeners.
    ///
    /// Items larger than the attached limit are withheld. Returns how many
    /// were withheld so the caller can warn the user.
    #[instrument(skip(self, results), fields(count = results.len()))]
    pub fn deliver_picked_media(&self, results: Vec<MediaResult>) -> usize {
        let max_file_size = self.max_file_size();
        let total = results.len();
        let accepted: Vec<MediaResult> = results
            .into_iter()
            .filter(|result| !result.exceeds(max_file_size))
            .collect();
        let rejected = total - accepted.len();
        if rejected > 0 {
            debug!(rejected, max_file_size, "Withheld oversized picked media");
        }

        self.notify_image_selected(&accepted, false);
        rejected
    }
}

impl ImageStreamBackend for ImageStream {
    fn notify_visible(&self) {
        for listener in live(&self.listeners, "stream") {
            listener.on_visible();
        }
    }

    fn notify_image_selected(&self, selection: &[MediaResult], replace: bool) {
        for listener in live(&self.listeners, "stream") {
            listener.on_media_selected(selection, replace);
        }
    }

    fn notify_scroll_listener(&self, dx: i32, dy: i32, velocity: f32) {
        for listener in live(&self.scroll_listeners, "scroll") {
            listener.on_scroll(dx, dy, velocity);
        }
    }

    fn notify_dismissed(&self) {
        for listener in live(&self.listeners, "stream") {
            listener.on_dismissed();
        }
    }

    fn set_image_stream_ui(&self, ui: Option<Rc<dyn ImageStreamUi>>, config: Option<UiConfig>) {
        debug!(attached = ui.is_some(), "Setting image stream UI");
        *self.ui.borrow_mut() = ui;
        if let Some(config) = config {
            *self.config.borrow_mut() = Some(config);
        }
    }
}

impl fmt::Debug for ImageStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStream")
            .field("listeners", &self.listener_count())
            .field("scroll_listeners", &self.scroll_listener_count())
            .field("ui_attached", &self.is_attachments_popup_visible())
            .field("was_open", &self.was_open.get())
            .finish()
    }
}
