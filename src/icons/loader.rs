//! Icon file lookup and decoding.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::IconError;

/// File name suffixes tried for every icon name, in order.
pub const ICON_FILE_SUFFIXES: [&str; 4] = [".png", ".PNG", ".gif", ".GIF"];

/// Decodes an image file into RGBA pixels.
///
/// This is the seam between the cache and the image library; the cache
/// calls it at most once per (descriptor, default size) entry.
pub trait PixbufLoader {
    /// Decode the file at `path`.
    fn load(&self, path: &Path) -> Result<RgbaImage, IconError>;
}

/// Loader backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoader;

impl PixbufLoader for ImageLoader {
    fn load(&self, path: &Path) -> Result<RgbaImage, IconError> {
        let bytes = std::fs::read(path).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let image = image::load_from_memory(&bytes).map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(image.to_rgba8())
    }
}

/// Resolves icon names to files on a list of search roots.
///
/// Layout under each root is `<theme>/<name><suffix>` for themed icons and
/// `<name><suffix>` for the unthemed set.
#[derive(Debug, Clone, Default)]
pub struct IconLookup {
    search_paths: Vec<PathBuf>,
}

impl IconLookup {
    /// Create a lookup over the given roots, searched in order.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Roots searched by this lookup.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Existing files for `name`: every themed candidate before any unthemed one.
    pub fn candidates(&self, theme: Option<&str>, name: &str) -> Vec<PathBuf> {
        let theme = theme.filter(|t| !t.is_empty());
        let themed = theme.into_iter().flat_map(|theme| {
            self.search_paths
                .iter()
                .map(move |root| root.join(theme))
        });
        let unthemed = self.search_paths.iter().cloned();

        themed
            .chain(unthemed)
            .flat_map(|dir| {
                ICON_FILE_SUFFIXES
                    .iter()
                    .map(move |suffix| dir.join(format!("{name}{suffix}")))
            })
            .filter(|path| path.is_file())
            .collect()
    }

    /// Decode the first candidate for `name` that loads.
    pub fn load<L: PixbufLoader + ?Sized>(
        &self,
        loader: &L,
        theme: Option<&str>,
        name: &str,
    ) -> Result<RgbaImage, IconError> {
        for path in self.candidates(theme, name) {
            match loader.load(&path) {
                Ok(image) => {
                    tracing::debug!("Loaded icon '{}' from {}", name, path.display());
                    return Ok(image);
                }
                Err(e) => tracing::warn!("Skipping icon file: {e}"),
            }
        }

        Err(IconError::NotFound(name.to_string()))
    }
}

/// Map a custom image URI to a local path.
///
/// Only local `file://` URIs (no host, or `localhost`) with an absolute path
/// are loadable; the path part is percent-decoded.
pub fn custom_image_path(uri: &str) -> Result<PathBuf, IconError> {
    let rest = uri
        .strip_prefix("file://")
        .ok_or_else(|| IconError::UnsupportedUri(uri.to_string()))?;
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    if !rest.starts_with('/') {
        return Err(IconError::UnsupportedUri(uri.to_string()));
    }

    let decoded =
        urlencoding::decode(rest).map_err(|_| IconError::UnsupportedUri(uri.to_string()))?;
    Ok(PathBuf::from(decoded.into_owned()))
}
