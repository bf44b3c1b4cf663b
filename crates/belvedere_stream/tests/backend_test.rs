//! Tests for the image stream backend.

mod test_utils;

use belvedere_core::{MediaResult, UiConfig};
use belvedere_interface::{ImageStreamBackend, ImageStreamListener, ImageStreamUi, ScrollListener};
use belvedere_stream::ImageStream;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use test_utils::media_result;

#[derive(Default)]
struct RecordingListener {
    visible: Cell<u32>,
    dismissed: Cell<u32>,
    selected: RefCell<Vec<(Vec<MediaResult>, bool)>>,
}

impl ImageStreamListener for RecordingListener {
    fn on_dismissed(&self) {
        self.dismissed.set(self.dismissed.get() + 1);
    }

    fn on_visible(&self) {
        self.visible.set(self.visible.get() + 1);
    }

    fn on_media_selected(&self, media: &[MediaResult], replace: bool) {
        self.selected.borrow_mut().push((media.to_vec(), replace));
    }
}

#[derive(Default)]
struct RecordingScroll {
    events: RefCell<Vec<(i32, i32, f32)>>,
}

impl ScrollListener for RecordingScroll {
    fn on_scroll(&self, dx: i32, dy: i32, velocity: f32) {
        self.events.borrow_mut().push((dx, dy, velocity));
    }
}

#[derive(Default)]
struct FakeUi {
    dismissed: Cell<u32>,
}

impl ImageStreamUi for FakeUi {
    fn dismiss(&self) {
        self.dismissed.set(self.dismissed.get() + 1);
    }
}

fn config(max_file_size: i64) -> UiConfig {
    UiConfig::builder()
        .max_file_size(max_file_size)
        .build()
        .unwrap()
}

#[test]
fn test_notifications_reach_every_listener() {
    let stream = ImageStream::new();
    let first = Rc::new(RecordingListener::default());
    let second = Rc::new(RecordingListener::default());
    stream.add_listener(&first);
    stream.add_listener(&second);

    let selection = vec![media_result(1)];
    stream.notify_visible();
    stream.notify_image_selected(&selection, true);
    stream.notify_dismissed();

    for listener in [&first, &second] {
        assert_eq!(listener.visible.get(), 1);
        assert_eq!(listener.dismissed.get(), 1);
        assert_eq!(
            listener.selected.borrow().as_slice(),
            &[(selection.clone(), true)]
        );
    }
}

#[test]
fn test_registration_accepts_concrete_listeners_without_owning_them() {
    let stream = ImageStream::new();
    let listener = Rc::new(RecordingListener::default());
    let scroll = Rc::new(RecordingScroll::default());

    stream.add_listener(&listener);
    stream.add_scroll_listener(&scroll);

    assert_eq!(stream.listener_count(), 1);
    assert_eq!(stream.scroll_listener_count(), 1);
    assert_eq!(Rc::strong_count(&listener), 1);
    assert_eq!(Rc::strong_count(&scroll), 1);
}

#[test]
fn test_dropped_listeners_are_pruned() {
    let stream = ImageStream::new();
    let kept = Rc::new(RecordingListener::default());
    let dropped = Rc::new(RecordingListener::default());
    stream.add_listener(&kept);
    stream.add_listener(&dropped);
    drop(dropped);

    assert_eq!(stream.listener_count(), 2);
    stream.notify_visible();
    assert_eq!(stream.listener_count(), 1);
    assert_eq!(kept.visible.get(), 1);
}

#[test]
fn test_scroll_listeners() {
    let stream = ImageStream::new();
    let scroll = Rc::new(RecordingScroll::default());
    stream.add_scroll_listener(&scroll);

    stream.notify_scroll_listener(3, 4, 1.5);
    assert_eq!(scroll.events.borrow().as_slice(), &[(3, 4, 1.5)]);

    drop(scroll);
    stream.notify_scroll_listener(0, 0, 0.0);
    assert_eq!(stream.scroll_listener_count(), 0);
}

#[test]
fn test_detaching_ui_keeps_config() {
    let stream = ImageStream::new();
    assert!(!stream.is_attachments_popup_visible());
    assert_eq!(stream.max_file_size(), UiConfig::UNLIMITED_FILE_SIZE);

    let ui: Rc<dyn ImageStreamUi> = Rc::new(FakeUi::default());
    stream.set_image_stream_ui(Some(ui), Some(config(1_000)));
    assert!(stream.is_attachments_popup_visible());
    assert_eq!(stream.max_file_size(), 1_000);

    stream.set_image_stream_ui(None, None);
    assert!(!stream.is_attachments_popup_visible());
    assert_eq!(stream.max_file_size(), 1_000);
}

#[test]
fn test_pause_dismisses_open_ui() {
    let stream = ImageStream::new();
    stream.on_pause();
    assert!(!stream.was_open());

    let ui = Rc::new(FakeUi::default());
    stream.set_image_stream_ui(Some(ui.clone()), None);
    stream.on_pause();
    assert!(stream.was_open());
    assert_eq!(ui.dismissed.get(), 1);

    stream.dismiss();
    assert_eq!(ui.dismissed.get(), 2);
}

#[test]
fn test_picked_media_is_filtered_by_size() {
    let stream = ImageStream::new();
    let listener = Rc::new(RecordingListener::default());
    stream.add_listener(&listener);
    stream.set_image_stream_ui(None, Some(config(100)));

    let small = media_result(100);
    let large = media_result(101);
    let rejected = stream.deliver_picked_media(vec![small.clone(), large]);

    assert_eq!(rejected, 1);
    assert_eq!(listener.selected.borrow().as_slice(), &[(vec![small], false)]);
}

#[test]
fn test_picked_media_without_limit() {
    let stream = ImageStream::new();
    let listener = Rc::new(RecordingListener::default());
    stream.add_listener(&listener);

    let rejected = stream.deliver_picked_media(vec![media_result(1), media_result(i64::MAX)]);

    assert_eq!(rejected, 0);
    assert_eq!(listener.selected.borrow()[0].0.len(), 2);
}
