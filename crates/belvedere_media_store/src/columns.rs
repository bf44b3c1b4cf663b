//! Media index column names.

/// Row id.
pub const ID: &str = "_id";
/// Display name.
pub const DISPLAY_NAME: &str = "_display_name";
/// Size in bytes.
pub const SIZE: &str = "_size";
/// Width in pixels.
pub const WIDTH: &str = "width";
/// Height in pixels.
pub const HEIGHT: &str = "height";

/// Columns requested by every stream query, in the order rows are read.
pub const PROJECTION: [&str; 5] = [ID, DISPLAY_NAME, SIZE, WIDTH, HEIGHT];

/// Position of [`ID`] in [`PROJECTION`].
pub const ID_INDEX: usize = 0;
/// Position of [`DISPLAY_NAME`] in [`PROJECTION`].
pub const DISPLAY_NAME_INDEX: usize = 1;
/// Position of [`SIZE`] in [`PROJECTION`].
pub const SIZE_INDEX: usize = 2;
/// Position of [`WIDTH`] in [`PROJECTION`].
pub const WIDTH_INDEX: usize = 3;
/// Position of [`HEIGHT`] in [`PROJECTION`].
pub const HEIGHT_INDEX: usize = 4;

/// Table of external images.
pub const EXTERNAL_IMAGES_URI: &str = "content://media/external/images/media";

/// Date column the stream is ordered by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum OrderColumn {
    /// When the picture was taken.
    #[strum(serialize = "date_taken")]
    DateTaken,
    /// When the file last changed.
    #[strum(serialize = "date_modified")]
    DateModified,
}

/// The projection as owned strings.
pub fn projection() -> Vec<String> {
    PROJECTION.iter().map(|column| column.to_string()).collect()
}
