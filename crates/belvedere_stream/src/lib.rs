//! The Belvedere image stream.
//!
//! [`ImageStreamModel`] merges the caller's selection, attached items and
//! recent device media, and answers which capture and pick targets are
//! available. [`ImageStreamPresenter`] drives a view from that model and
//! reports selection changes to an [`ImageStream`] backend, which fans them
//! out to the embedding app.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod merge;
mod model;
mod permissions;
mod presenter;

pub use backend::ImageStream;
pub use merge::merge_media;
pub use model::ImageStreamModel;
pub use permissions::{
    MemoryPermissionStore, PermissionPlan, READ_EXTERNAL_STORAGE, plan_permissions,
    record_permission_result,
};
pub use presenter::{ImageStreamPresenter, PresenterState, SelectionListener};
