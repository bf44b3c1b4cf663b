//! Recording fakes for the stream's collaborators.

use belvedere_core::{MediaIntent, MediaResult, UiConfig};
use belvedere_interface::{
    ImageStreamBackend, ImageStreamService, ImageStreamUi, ImageStreamView, ItemListener,
    StreamModel, UserMessage,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Device media source with canned results.
#[derive(Default)]
pub struct FakeService {
    pub recent: RefCell<Vec<MediaResult>>,
    pub installed: RefCell<Vec<String>>,
    pub requested: RefCell<Vec<u32>>,
}

impl FakeService {
    pub fn returning(recent: Vec<MediaResult>) -> Self {
        Self {
            recent: RefCell::new(recent),
            ..Self::default()
        }
    }

    pub fn install(&self, package: &str) {
        self.installed.borrow_mut().push(package.to_string());
    }
}

impl ImageStreamService for FakeService {
    fn query_recent_images(&self, count: u32) -> Vec<MediaResult> {
        self.requested.borrow_mut().push(count);
        self.recent.borrow().clone()
    }

    fn is_app_available(&self, package: &str) -> bool {
        self.installed.borrow().iter().any(|p| p == package)
    }
}

/// Model whose answers are set field by field.
pub struct FakeModel {
    pub latest: RefCell<Vec<MediaResult>>,
    pub selected: RefCell<Vec<MediaResult>>,
    pub max_file_size: Cell<i64>,
    pub has_camera: Cell<bool>,
    pub has_document: Cell<bool>,
    pub has_google_photos: Cell<bool>,
    pub camera: RefCell<Option<MediaIntent>>,
    pub document: RefCell<Option<MediaIntent>>,
    pub google_photos: RefCell<Option<MediaIntent>>,
    pub added: RefCell<Vec<MediaResult>>,
    pub removed: RefCell<Vec<MediaResult>>,
}

impl Default for FakeModel {
    fn default() -> Self {
        Self {
            latest: RefCell::default(),
            selected: RefCell::default(),
            max_file_size: Cell::new(-1),
            has_camera: Cell::default(),
            has_document: Cell::default(),
            has_google_photos: Cell::default(),
            camera: RefCell::default(),
            document: RefCell::default(),
            google_photos: RefCell::default(),
            added: RefCell::default(),
            removed: RefCell::default(),
        }
    }
}

impl StreamModel for FakeModel {
    fn latest_images(&self) -> Vec<MediaResult> {
        self.latest.borrow().clone()
    }

    fn max_file_size(&self) -> i64 {
        self.max_file_size.get()
    }

    fn add_to_selected_items(&self, item: MediaResult) -> Vec<MediaResult> {
        self.added.borrow_mut().push(item.clone());
        self.selected.borrow_mut().push(item);
        self.selected.borrow().clone()
    }

    fn remove_from_selected_items(&self, item: &MediaResult) -> Vec<MediaResult> {
        self.removed.borrow_mut().push(item.clone());
        let mut selected = self.selected.borrow_mut();
        if let Some(index) = selected.iter().position(|s| s == item) {
            selected.remove(index);
        }
        selected.clone()
    }

    fn selected_media_results(&self) -> Vec<MediaResult> {
        self.selected.borrow().clone()
    }

    fn has_camera_intent(&self) -> bool {
        self.has_camera.get()
    }

    fn has_document_intent(&self) -> bool {
        self.has_document.get()
    }

    fn has_google_photos_intent(&self) -> bool {
        self.has_google_photos.get()
    }

    fn camera_intent(&self) -> Option<MediaIntent> {
        self.camera.borrow().clone()
    }

    fn document_intent(&self) -> Option<MediaIntent> {
        self.document.borrow().clone()
    }

    fn google_photos_intent(&self) -> Option<MediaIntent> {
        self.google_photos.borrow().clone()
    }

    fn media_intents(&self) -> Vec<MediaIntent> {
        [
            self.camera_intent(),
            self.document_intent(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Something the presenter asked the view to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    InitViews,
    ShowImageStream {
        images: Vec<MediaResult>,
        selected: Vec<MediaResult>,
        show_camera: bool,
    },
    ShowDocumentMenuItem(MediaIntent),
    ShowGooglePhotosMenuItem(MediaIntent),
    ShowToast(UserMessage),
    OpenMediaIntent {
        intent: MediaIntent,
        backend: usize,
    },
}

/// View that records calls and keeps the listener it is handed.
#[derive(Default)]
pub struct RecordingView {
    pub calls: RefCell<Vec<ViewCall>>,
    pub listener: RefCell<Option<Rc<dyn ItemListener>>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&ViewCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn listener(&self) -> Rc<dyn ItemListener> {
        self.listener
            .borrow()
            .clone()
            .expect("show_image_stream was not called")
    }
}

/// Address of a backend, for identity comparisons.
pub fn backend_address(backend: &dyn ImageStreamBackend) -> usize {
    std::ptr::from_ref(backend).cast::<()>() as usize
}

impl ImageStreamView for RecordingView {
    fn init_views(&self) {
        self.calls.borrow_mut().push(ViewCall::InitViews);
    }

    fn show_image_stream(
        &self,
        images: &[MediaResult],
        selected: &[MediaResult],
        show_camera: bool,
        listener: Rc<dyn ItemListener>,
    ) {
        self.calls.borrow_mut().push(ViewCall::ShowImageStream {
            images: images.to_vec(),
            selected: selected.to_vec(),
            show_camera,
        });
        *self.listener.borrow_mut() = Some(listener);
    }

    fn show_document_menu_item(&self, intent: &MediaIntent) {
        self.calls
            .borrow_mut()
            .push(ViewCall::ShowDocumentMenuItem(intent.clone()));
    }

    fn show_google_photos_menu_item(&self, intent: &MediaIntent) {
        self.calls
            .borrow_mut()
            .push(ViewCall::ShowGooglePhotosMenuItem(intent.clone()));
    }

    fn show_toast(&self, message: UserMessage) {
        self.calls.borrow_mut().push(ViewCall::ShowToast(message));
    }

    fn open_media_intent(&self, intent: &MediaIntent, backend: &dyn ImageStreamBackend) {
        self.calls.borrow_mut().push(ViewCall::OpenMediaIntent {
            intent: intent.clone(),
            backend: backend_address(backend),
        });
    }
}

/// Something the presenter told the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    NotifyVisible,
    NotifyImageSelected {
        selection: Vec<MediaResult>,
        replace: bool,
    },
    NotifyScroll {
        dx: i32,
        dy: i32,
        velocity: f32,
    },
    NotifyDismissed,
    SetImageStreamUi {
        ui_attached: bool,
        config_attached: bool,
    },
}

/// Backend that records every notification.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<BackendCall>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }
}

impl ImageStreamBackend for RecordingBackend {
    fn notify_visible(&self) {
        self.calls.borrow_mut().push(BackendCall::NotifyVisible);
    }

    fn notify_image_selected(&self, selection: &[MediaResult], replace: bool) {
        self.calls.borrow_mut().push(BackendCall::NotifyImageSelected {
            selection: selection.to_vec(),
            replace,
        });
    }

    fn notify_scroll_listener(&self, dx: i32, dy: i32, velocity: f32) {
        self.calls
            .borrow_mut()
            .push(BackendCall::NotifyScroll { dx, dy, velocity });
    }

    fn notify_dismissed(&self) {
        self.calls.borrow_mut().push(BackendCall::NotifyDismissed);
    }

    fn set_image_stream_ui(&self, ui: Option<Rc<dyn ImageStreamUi>>, config: Option<UiConfig>) {
        self.calls.borrow_mut().push(BackendCall::SetImageStreamUi {
            ui_attached: ui.is_some(),
            config_attached: config.is_some(),
        });
    }
}
