//! Image URL validation
//!
//! Only the URL itself is inspected here; the response content-type is
//! checked separately when the image is fetched.

use percent_encoding::percent_decode_str;
use url::Url;

/// Extensions accepted as images, lowercase
pub const SUPPORTED_IMAGE_TYPES: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Filename used when the URL has no usable path segment
pub const FALLBACK_FILENAME: &str = "image.jpg";

/// Whether `url` is an absolute URL whose path ends in a supported extension
///
/// The extension is whatever follows the last `.` in the path, compared
/// case-insensitively. Unparseable input yields `false`.
pub fn is_valid_image(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let extension = path_extension(parsed.path());
    SUPPORTED_IMAGE_TYPES.contains(&extension.as_str())
}

/// Filename for the attachment: the last path segment of `url`, decoded
pub fn attachment_filename(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        })
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

fn path_extension(path: &str) -> String {
    path.rsplit('.').next().unwrap_or(path).to_ascii_lowercase()
}
