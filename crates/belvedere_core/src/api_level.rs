//! Platform API levels.

use serde::{Deserialize, Serialize};

/// API level of the platform the picker runs on.
///
/// # Examples
///
/// ```
/// use belvedere_core::ApiLevel;
///
/// let device = ApiLevel::new(28);
/// assert!(device >= ApiLevel::O);
/// assert!(device < ApiLevel::Q);
/// assert_eq!(format!("{}", device), "API 28");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("API {}", _0)]
pub struct ApiLevel(u32);

impl ApiLevel {
    /// Nougat.
    pub const N: ApiLevel = ApiLevel(24);
    /// Nougat MR1.
    pub const N_MR1: ApiLevel = ApiLevel(25);
    /// Oreo, which introduced structured query argument bundles.
    pub const O: ApiLevel = ApiLevel(26);
    /// Oreo MR1.
    pub const O_MR1: ApiLevel = ApiLevel(27);
    /// Pie.
    pub const P: ApiLevel = ApiLevel(28);
    /// Android 10, which indexes the date an image was taken.
    pub const Q: ApiLevel = ApiLevel(29);
    /// Android 11.
    pub const R: ApiLevel = ApiLevel(30);

    /// Wrap a raw level.
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// The raw level.
    pub const fn get(self) -> u32 {
        self.0
    }
}
