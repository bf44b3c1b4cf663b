//! MIME type inference from display names.

/// MIME type assumed when a name carries no extension.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// MIME type used when the extension is not recognised.
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Look up the MIME type of a file extension (without the dot).
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "mp4" | "m4v" => "video/mp4",
        "3gp" => "video/3gpp",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime)
}

/// Infer the MIME type of a media item from its display name.
///
/// Names without an extension are assumed to be JPEG images, matching what
/// the device camera produces.
///
/// # Examples
///
/// ```
/// use belvedere_core::infer_mime_type;
///
/// assert_eq!(infer_mime_type("IMG_0001.PNG"), "image/png");
/// assert_eq!(infer_mime_type("snapshot"), "image/jpeg");
/// assert_eq!(infer_mime_type("archive.xyz"), "application/octet-stream");
/// ```
pub fn infer_mime_type(name: &str) -> &'static str {
    match name.rsplit_once('.') {
        Some((_, extension)) => mime_type_for_extension(extension).unwrap_or(UNKNOWN_MIME_TYPE),
        None => DEFAULT_MIME_TYPE,
    }
}
