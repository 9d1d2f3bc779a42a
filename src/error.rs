//! Error types for icon loading.
//!
//! These only travel between the loader and the cache. The public cache
//! operations never fail: anything reported here ends up logged and replaced
//! by the next lookup candidate or the built-in fallback image.

use std::path::PathBuf;

/// Errors that can occur while resolving or decoding an icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Reading the icon file failed.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a decodable image.
    #[error("Failed to decode {path}: {source}")]
    Decode {
        /// File that could not be decoded.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// Custom image URI is not a local file reference.
    #[error("Unsupported icon URI: {0}")]
    UnsupportedUri(String),

    /// No file for the icon name exists on the search path.
    #[error("Icon '{0}' not found")]
    NotFound(String),
}
