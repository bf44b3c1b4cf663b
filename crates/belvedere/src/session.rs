//! Wiring one image stream session together.

use belvedere_core::{ApiLevel, UiConfig};
use belvedere_error::{
    BelvedereError, BelvedereResult, BuilderError, BuilderErrorKind, StreamError, StreamErrorKind,
};
use belvedere_interface::{
    AppAvailability, BuildVersionProvider, ContentResolver, ImageStreamBackend, ImageStreamService,
    ImageStreamUi, ImageStreamView,
};
use belvedere_media_store::{ImageStreamCursorProvider, MediaStoreService};
use belvedere_stream::{ImageStreamModel, ImageStreamPresenter, PresenterState};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Collaborators and settings a session is built from.
#[derive(Clone, derive_builder::Builder)]
#[builder(
    name = "ImageStreamSessionBuilder",
    build_fn(private, name = "build_internal")
)]
pub struct SessionSetup {
    /// Device media index.
    resolver: Rc<dyn ContentResolver>,

    /// Source of the platform API level.
    version_provider: Rc<dyn BuildVersionProvider>,

    /// Answers whether apps such as Google Photos are installed.
    #[builder(default, setter(strip_option))]
    app_availability: Option<Rc<dyn AppAvailability>>,

    /// Picker surface.
    view: Rc<dyn ImageStreamView>,

    /// Host hub for stream events.
    backend: Rc<dyn ImageStreamBackend>,

    /// Attached picker UI, if one is already showing.
    #[builder(default, setter(strip_option))]
    ui: Option<Rc<dyn ImageStreamUi>>,

    /// Intents, item lists and limits.
    #[builder(default)]
    ui_config: UiConfig,

    /// Recent device images to query.
    #[builder(default = "ImageStreamModel::DEFAULT_MAX_IMAGES")]
    max_images: u32,
}

impl ImageStreamSessionBuilder {
    /// Wire the session: cursor provider, media service, model and presenter.
    ///
    /// The Google Photos target is resolved here, once, and the UI config is
    /// attached to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a required collaborator was not supplied.
    #[instrument(skip(self))]
    pub fn build(&self) -> BelvedereResult<ImageStreamSession> {
        let setup = self.build_internal().map_err(|e| match e {
            ImageStreamSessionBuilderError::UninitializedField(field) => BelvedereError::from(
                StreamError::new(StreamErrorKind::MissingCollaborator(field.to_string())),
            ),
            ImageStreamSessionBuilderError::ValidationError(message) => BelvedereError::from(
                BuilderError::new(BuilderErrorKind::ValidationFailed(message)),
            ),
        })?;

        let api_level = setup.version_provider.current_version();
        let cursor_provider = ImageStreamCursorProvider::new(setup.resolver, api_level);
        let service = match setup.app_availability {
            Some(probe) => MediaStoreService::new(cursor_provider).with_app_availability(probe),
            None => MediaStoreService::new(cursor_provider),
        };
        let service: Rc<dyn ImageStreamService> = Rc::new(service);

        let model = Rc::new(
            ImageStreamModel::from_config(service, &setup.ui_config)
                .with_max_images(setup.max_images),
        );
        let google_photos = model.resolve_google_photos_intent();

        setup
            .backend
            .set_image_stream_ui(setup.ui, Some(setup.ui_config.clone()));

        let presenter =
            ImageStreamPresenter::new(model.clone(), setup.view, setup.backend);

        debug!(
            %api_level,
            max_images = setup.max_images,
            google_photos = google_photos.is_some(),
            "Image stream session ready"
        );

        Ok(ImageStreamSession {
            api_level,
            ui_config: setup.ui_config,
            model,
            presenter,
        })
    }
}

/// One picker session.
pub struct ImageStreamSession {
    api_level: ApiLevel,
    ui_config: UiConfig,
    model: Rc<ImageStreamModel>,
    presenter: ImageStreamPresenter,
}

impl ImageStreamSession {
    /// Creates a new session builder.
    pub fn builder() -> ImageStreamSessionBuilder {
        ImageStreamSessionBuilder::default()
    }

    /// Show the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the session was dismissed.
    pub fn start(&self) -> BelvedereResult<()> {
        Ok(self.presenter.init()?)
    }

    /// Tear the stream down.
    pub fn dismiss(&self) {
        self.presenter.dismiss();
    }

    /// Lifecycle state.
    pub fn state(&self) -> PresenterState {
        self.presenter.state()
    }

    /// The presenter driving the view.
    pub fn presenter(&self) -> &ImageStreamPresenter {
        &self.presenter
    }

    /// The session's model.
    pub fn model(&self) -> &ImageStreamModel {
        &self.model
    }

    /// API level the query shape was chosen for.
    pub fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    /// The configuration the session was built with.
    pub fn ui_config(&self) -> &UiConfig {
        &self.ui_config
    }
}

impl fmt::Debug for ImageStreamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStreamSession")
            .field("api_level", &self.api_level)
            .field("state", &self.presenter.state())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
