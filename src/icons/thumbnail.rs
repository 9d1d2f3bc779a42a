//! Image files shown as their own icons.
//!
//! Small images are used directly as the custom image of their descriptor.
//! Larger ones use a pre-made thumbnail from the `.thumbnails` directory next
//! to the file when one exists; making thumbnails is left to other tools.

use super::loader::custom_image_path;

/// Images smaller than this many bytes are their own icon.
pub const SELF_THUMBNAIL_SIZE_THRESHOLD: u64 = 16384;

/// Directory holding thumbnails, relative to the image's directory.
pub const THUMBNAIL_DIR_NAME: &str = ".thumbnails";

/// URI of the thumbnail for `image_uri`.
///
/// `dir/photo.jpg` maps to `dir/.thumbnails/photo.jpg.png`; PNG files keep
/// their name. Returns `None` for a URI without a file name.
pub fn thumbnail_uri(image_uri: &str) -> Option<String> {
    let (dir, name) = image_uri.rsplit_once('/')?;
    if name.is_empty() {
        return None;
    }

    if name.ends_with(".png") || name.ends_with(".PNG") {
        Some(format!("{dir}/{THUMBNAIL_DIR_NAME}/{name}"))
    } else {
        Some(format!("{dir}/{THUMBNAIL_DIR_NAME}/{name}.png"))
    }
}

/// The thumbnail URI for `image_uri`, if that file exists locally.
pub fn existing_thumbnail_uri(image_uri: &str) -> Option<String> {
    let uri = thumbnail_uri(image_uri)?;
    custom_image_path(&uri)
        .is_ok_and(|path| path.is_file())
        .then_some(uri)
}

/// Custom image URI for an image file, or `None` for other files.
pub fn image_icon_uri(file_uri: &str, mime_type: Option<&str>, size: u64) -> Option<String> {
    if !mime_type.is_some_and(|mime| mime.starts_with("image/")) {
        return None;
    }

    if size < SELF_THUMBNAIL_SIZE_THRESHOLD {
        return Some(file_uri.to_string());
    }

    let thumbnail = existing_thumbnail_uri(file_uri);
    if thumbnail.is_none() {
        tracing::debug!("No thumbnail for {file_uri}");
    }
    thumbnail
}
