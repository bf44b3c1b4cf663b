//! External capture and pick targets.

use belvedere_error::{BuilderError, BuilderErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Package name of the Google Photos app.
pub const GOOGLE_PHOTOS_PACKAGE: &str = "com.google.android.apps.photos";

/// Action that lets the user pick content of a given type.
pub const ACTION_GET_CONTENT: &str = "android.intent.action.GET_CONTENT";

/// Action that opens the system document picker.
pub const ACTION_OPEN_DOCUMENT: &str = "android.intent.action.OPEN_DOCUMENT";

/// Action that asks a camera app to capture a still image.
pub const ACTION_IMAGE_CAPTURE: &str = "android.media.action.IMAGE_CAPTURE";

/// What kind of target a [`MediaIntent`] opens.
///
/// Codes other than the document and camera codes are reserved for future
/// targets and are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IntentTarget {
    /// A document or gallery picker
    #[display("document")]
    Document,
    /// A camera capture
    #[display("camera")]
    Camera,
    /// A reserved target code
    #[display("target {}", _0)]
    Other(i32),
}

impl IntentTarget {
    /// Numeric code of the document target.
    pub const DOCUMENT_CODE: i32 = 1;
    /// Numeric code of the camera target.
    pub const CAMERA_CODE: i32 = 2;

    /// The numeric target code.
    pub fn code(&self) -> i32 {
        match self {
            IntentTarget::Document => Self::DOCUMENT_CODE,
            IntentTarget::Camera => Self::CAMERA_CODE,
            IntentTarget::Other(code) => *code,
        }
    }
}

impl From<i32> for IntentTarget {
    fn from(code: i32) -> Self {
        match code {
            Self::DOCUMENT_CODE => IntentTarget::Document,
            Self::CAMERA_CODE => IntentTarget::Camera,
            other => IntentTarget::Other(other),
        }
    }
}

/// The platform request a [`MediaIntent`] dispatches.
///
/// # Examples
///
/// ```
/// use belvedere_core::{ACTION_GET_CONTENT, GOOGLE_PHOTOS_PACKAGE, IntentPayload};
///
/// let picker = IntentPayload::default()
///     .with_action("android.intent.action.OPEN_DOCUMENT")
///     .with_content_type("image/*");
/// assert!(!picker.is_google_photos());
///
/// let photos = picker.retargeted(GOOGLE_PHOTOS_PACKAGE, ACTION_GET_CONTENT);
/// assert!(photos.is_google_photos());
/// assert_eq!(photos.content_type().as_deref(), Some("image/*"));
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", into, strip_option)]
pub struct IntentPayload {
    /// Action to perform.
    #[serde(default)]
    action: Option<String>,

    /// Package the request is restricted to.
    #[serde(default)]
    package: Option<String>,

    /// MIME type filter.
    #[serde(default)]
    content_type: Option<String>,

    /// Further MIME types accepted alongside `content_type`.
    #[serde(default)]
    extra_mime_types: Vec<String>,

    /// Whether the target may return several items.
    #[serde(default)]
    allow_multiple: bool,
}

impl IntentPayload {
    /// Restrict the request to `package`.
    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = Some(package.into());
    }

    /// Replace the action.
    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = Some(action.into());
    }

    /// A copy of this payload restricted to `package` and performing `action`.
    pub fn retargeted(&self, package: impl Into<String>, action: impl Into<String>) -> Self {
        let mut payload = self.clone();
        payload.set_package(package);
        payload.set_action(action);
        payload
    }

    /// Whether the request is routed to Google Photos.
    pub fn is_google_photos(&self) -> bool {
        self.package.as_deref() == Some(GOOGLE_PHOTOS_PACKAGE)
    }
}

/// One externally invocable capture or pick target.
///
/// # Examples
///
/// ```
/// use belvedere_core::{IntentTarget, MediaIntent};
///
/// let camera = MediaIntent::new(1, None, "Camera", true, IntentTarget::Camera);
/// assert!(camera.is_available());
/// assert_eq!(camera.target().code(), 2);
///
/// assert!(!MediaIntent::not_available().is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct MediaIntent {
    /// Request code the result is delivered under.
    request_code: i32,

    /// Platform request to dispatch.
    #[builder(default)]
    #[serde(default)]
    payload: Option<IntentPayload>,

    /// Human-readable label.
    #[builder(default)]
    #[serde(default)]
    label: String,

    /// Permission that must be granted before dispatch.
    #[builder(default)]
    #[serde(default)]
    permission: Option<String>,

    /// Whether some app on the device can handle the request.
    #[builder(default = "true")]
    #[getter(skip)]
    available: bool,

    /// Target classification.
    target: IntentTarget,
}

impl MediaIntent {
    /// Create an intent with no permission requirement.
    pub fn new(
        request_code: i32,
        payload: Option<IntentPayload>,
        label: impl Into<String>,
        available: bool,
        target: impl Into<IntentTarget>,
    ) -> Self {
        Self {
            request_code,
            payload,
            label: label.into(),
            permission: None,
            available,
            target: target.into(),
        }
    }

    /// Creates a new media intent builder.
    pub fn builder() -> MediaIntentBuilder {
        MediaIntentBuilder::default()
    }

    /// Placeholder for a target no app on the device can handle.
    pub fn not_available() -> Self {
        Self::new(-1, None, "", false, IntentTarget::Other(-1))
    }

    /// Whether some app on the device can handle the request.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Whether the intent targets `target` and can be dispatched.
    pub fn offers(&self, target: IntentTarget) -> bool {
        self.available && self.target == target
    }

    /// Whether a permission must be granted before dispatch.
    pub fn requires_permission(&self) -> bool {
        self.permission.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// A copy of this intent with a different platform request.
    pub fn with_payload(&self, payload: Option<IntentPayload>) -> Self {
        Self {
            payload,
            ..self.clone()
        }
    }
}

impl MediaIntentBuilder {
    /// Builds the `MediaIntent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request code or target was not set.
    pub fn build(&self) -> Result<MediaIntent, BuilderError> {
        self.build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::MissingField(e.to_string())))
    }
}
