//! Test utilities for image stream tests.
//!
//! This module provides recording fakes for the stream's collaborators and
//! helpers that build uniquely identified media.

#![allow(dead_code)]

pub mod fakes;

#[allow(unused_imports)]
pub use fakes::{
    BackendCall, FakeModel, FakeService, RecordingBackend, RecordingView, ViewCall,
};

use belvedere_core::{
    ACTION_OPEN_DOCUMENT, ContentUri, IntentPayload, IntentTarget, MediaIntent, MediaResult,
};
use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// A fresh content identifier.
pub fn unique_uri() -> ContentUri {
    ContentUri::external_file(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Media with a fresh identity and the given size.
pub fn media_result(size: i64) -> MediaResult {
    media_result_with_uri(unique_uri(), size)
}

/// Media with `uri` and a name no other helper call produces.
pub fn media_result_with_uri(uri: ContentUri, size: i64) -> MediaResult {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    MediaResult::builder()
        .uri(uri.clone())
        .original_uri(Some(uri))
        .name(format!("IMG_{n:04}.jpg"))
        .mime_type("image/jpeg")
        .size(size)
        .width(640_i64)
        .height(480_i64)
        .build()
        .expect("Failed to build test media")
}

/// An available intent for `target` carrying a document-picker payload.
pub fn media_intent(target: impl Into<IntentTarget>) -> MediaIntent {
    let target = target.into();
    MediaIntent::builder()
        .request_code(NEXT_ID.fetch_add(1, Ordering::Relaxed) as i32)
        .label(target.to_string())
        .payload(Some(
            IntentPayload::default()
                .with_action(ACTION_OPEN_DOCUMENT)
                .with_content_type("image/*"),
        ))
        .target(target)
        .build()
        .expect("Failed to build test intent")
}
