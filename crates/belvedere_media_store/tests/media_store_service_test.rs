//! Tests for reading device media rows.

use belvedere_core::{ApiLevel, ContentUri, MediaResult};
use belvedere_interface::{
    AppAvailability, ContentResolver, CursorValue, ImageStreamService, MediaCursor, MediaQuery,
};
use belvedere_media_store::{ImageStreamCursorProvider, MediaStoreService, PROJECTION};
use std::rc::Rc;

struct FixedResolver(Option<MediaCursor>);

impl ContentResolver for FixedResolver {
    fn query(&self, _query: &MediaQuery) -> Option<MediaCursor> {
        self.0.clone()
    }
}

struct InstalledPackages(Vec<&'static str>);

impl AppAvailability for InstalledPackages {
    fn is_installed(&self, package: &str) -> bool {
        self.0.contains(&package)
    }
}

fn row(id: Option<i64>, name: &str, size: i64) -> Vec<CursorValue> {
    vec![
        id.map(CursorValue::from).unwrap_or(CursorValue::Null),
        CursorValue::from(name),
        CursorValue::from(size),
        CursorValue::from(640_i64),
        CursorValue::Null,
    ]
}

fn service(rows: Option<Vec<Vec<CursorValue>>>) -> MediaStoreService {
    let cursor = rows.map(|rows| {
        MediaCursor::new(PROJECTION.iter().map(|c| c.to_string()).collect(), rows)
    });
    let provider = ImageStreamCursorProvider::new(Rc::new(FixedResolver(cursor)), ApiLevel::Q);
    MediaStoreService::new(provider)
}

#[test]
fn test_rows_become_media_results() {
    let service = service(Some(vec![row(Some(42), "sunset.png", 2_048)]));

    let images = service.query_recent_images(10);
    assert_eq!(images.len(), 1);

    let image = &images[0];
    assert_eq!(image.uri(), &ContentUri::external_file(42));
    assert_eq!(image.original_uri().as_ref(), Some(&ContentUri::external_file(42)));
    assert_eq!(image.name(), "sunset.png");
    assert_eq!(image.mime_type(), "image/png");
    assert_eq!(*image.size(), 2_048);
    assert_eq!(*image.width(), 640);
    assert_eq!(*image.height(), MediaResult::UNKNOWN_VALUE);
}

#[test]
fn test_mime_type_falls_back() {
    let service = service(Some(vec![
        row(Some(1), "no_extension", 1),
        row(Some(2), "archive.xyz", 1),
    ]));

    let images = service.query_recent_images(10);
    assert_eq!(images[0].mime_type(), "image/jpeg");
    assert_eq!(images[1].mime_type(), "application/octet-stream");
}

#[test]
fn test_rows_without_id_are_skipped() {
    let service = service(Some(vec![
        row(None, "ghost.jpg", 1),
        row(Some(3), "real.jpg", 1),
    ]));

    let images = service.query_recent_images(10);
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].name(), "real.jpg");
}

#[test]
fn test_malformed_rows_are_skipped() {
    let service = service(Some(vec![
        vec![CursorValue::from("not a number")],
        row(Some(4), "fine.jpg", 1),
    ]));

    let images = service.query_recent_images(10);
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].uri(), &ContentUri::external_file(4));
}

#[test]
fn test_missing_result_set_yields_no_images() {
    let service = service(None);
    assert!(service.query_recent_images(10).is_empty());
}

#[test]
fn test_app_availability_requires_probe() {
    let service = service(None);
    assert!(!service.is_app_available("com.google.android.apps.photos"));

    let service = service_with_probe();
    assert!(service.is_app_available("com.google.android.apps.photos"));
    assert!(!service.is_app_available("com.example.other"));
}

fn service_with_probe() -> MediaStoreService {
    service(None).with_app_availability(Rc::new(InstalledPackages(vec![
        "com.google.android.apps.photos",
    ])))
}
