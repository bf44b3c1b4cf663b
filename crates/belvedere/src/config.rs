//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - the bundled `belvedere.toml`
//! - `~/.config/belvedere/belvedere.toml`
//! - `./belvedere.toml`
//!
//! Missing user files are skipped.

use belvedere_core::{UiConfig, UiConfigBuilder};
use belvedere_error::{BelvedereError, BelvedereResult, ConfigError};
use belvedere_stream::ImageStreamModel;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../belvedere.toml");

/// Image stream defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageStreamConfig {
    /// Recent device images queried for the stream.
    #[serde(default = "default_max_images")]
    pub max_images: u32,

    /// Largest selectable item in bytes; negative disables the limit.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: i64,

    /// Copy picked items into app storage before handing them out.
    #[serde(default = "default_true")]
    pub resolve_media: bool,
}

fn default_max_images() -> u32 {
    ImageStreamModel::DEFAULT_MAX_IMAGES
}

fn default_max_file_size() -> i64 {
    UiConfig::UNLIMITED_FILE_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for ImageStreamConfig {
    fn default() -> Self {
        Self {
            max_images: default_max_images(),
            max_file_size: default_max_file_size(),
            resolve_media: true,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info,belvedere=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Top-level Belvedere configuration.
///
/// # Example
///
/// ```no_run
/// use belvedere::BelvedereConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BelvedereConfig::load()?;
/// let ui_config = config.ui_config_builder().build()?;
/// println!("limit: {}", ui_config.max_file_size());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct BelvedereConfig {
    /// Image stream defaults
    #[serde(default)]
    pub image_stream: ImageStreamConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BelvedereConfig {
    /// Load configuration from a specific file path, on top of nothing but
    /// the field defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> BelvedereResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                BelvedereError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BelvedereError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// result is invalid.
    #[instrument]
    pub fn load() -> BelvedereResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/belvedere/belvedere.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("belvedere").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                BelvedereError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BelvedereError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> BelvedereResult<Self> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| {
            BelvedereError::from(ConfigError::new(format!(
                "Failed to parse bundled configuration: {}",
                e
            )))
        })
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_images` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_stream.max_images == 0 {
            return Err(ConfigError::new("image_stream.max_images must be at least 1"));
        }
        Ok(())
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> BelvedereResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            BelvedereError::from(ConfigError::new(format!(
                "Failed to serialize configuration: {}",
                e
            )))
        })
    }

    /// A [`UiConfig`] builder seeded with the configured limits.
    pub fn ui_config_builder(&self) -> UiConfigBuilder {
        let mut builder = UiConfig::builder();
        builder
            .max_file_size(self.image_stream.max_file_size)
            .resolve_media(self.image_stream.resolve_media);
        builder
    }
}
