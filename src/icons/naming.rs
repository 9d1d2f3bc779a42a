//! Choosing the symbolic icon name for a file.

#![allow(missing_docs)]

use super::descriptor::{DescriptorRegistry, IconDescriptor};
use super::thumbnail;

pub const ICON_NAME_DIRECTORY: &str = "i-directory";
pub const ICON_NAME_EXECUTABLE: &str = "i-executable";
pub const ICON_NAME_REGULAR: &str = "i-regular";
pub const ICON_NAME_CORE: &str = "i-core";
pub const ICON_NAME_SOCKET: &str = "i-sock";
pub const ICON_NAME_FIFO: &str = "i-fifo";
pub const ICON_NAME_CHARACTER_DEVICE: &str = "i-chardev";
pub const ICON_NAME_BLOCK_DEVICE: &str = "i-blockdev";
pub const ICON_NAME_BROKEN_SYMBOLIC_LINK: &str = "i-brokenlink";

/// Emblem composited onto icons of symbolic links.
pub const EMBLEM_NAME_SYMBOLIC_LINK: &str = "symbolic-link";

/// Prefix of emblem icon names.
pub const EMBLEM_NAME_PREFIX: &str = "emblem-";

/// File type as reported by the file system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Directory.
    Directory,
    /// Named pipe.
    Fifo,
    /// Unix domain socket.
    Socket,
    /// Character device node.
    CharDevice,
    /// Block device node.
    BlockDevice,
    /// Symbolic link whose target does not exist.
    BrokenSymlink,
    /// Regular file.
    Regular,
    /// Type could not be determined.
    #[default]
    Unknown,
}

/// What the icon factory needs to know about a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileInfo<'a> {
    /// Base name of the file.
    pub name: &'a str,
    /// File type.
    pub kind: FileKind,
    /// Icon name registered for the file's MIME type, if any.
    pub mime_icon: Option<&'a str>,
    /// Whether the file is executable.
    pub executable: bool,
    /// Whether the file is reached through a symbolic link.
    pub is_symlink: bool,
    /// User-chosen custom icon URI, if any.
    pub custom_icon_uri: Option<&'a str>,
    /// The file's own URI.
    pub uri: Option<&'a str>,
    /// MIME type, if known.
    pub mime_type: Option<&'a str>,
    /// Size in bytes.
    pub size: u64,
    /// User-assigned keywords, each shown as an emblem.
    pub keywords: &'a [&'a str],
}

/// Pick the icon name for a file.
///
/// Special file types have fixed icons. Regular (and unknown) files use the
/// MIME icon when there is one, with `core` files and executables getting
/// their own icons otherwise.
pub fn icon_name_for_file<'a>(
    kind: FileKind,
    file_name: &str,
    mime_icon: Option<&'a str>,
    executable: bool,
) -> &'a str {
    match kind {
        FileKind::Directory => ICON_NAME_DIRECTORY,
        FileKind::Fifo => ICON_NAME_FIFO,
        FileKind::Socket => ICON_NAME_SOCKET,
        FileKind::CharDevice => ICON_NAME_CHARACTER_DEVICE,
        FileKind::BlockDevice => ICON_NAME_BLOCK_DEVICE,
        FileKind::BrokenSymlink => ICON_NAME_BROKEN_SYMBOLIC_LINK,
        FileKind::Regular | FileKind::Unknown => {
            if file_name == "core" {
                ICON_NAME_CORE
            } else if let Some(icon) = mime_icon.filter(|icon| !icon.is_empty()) {
                icon
            } else if executable {
                ICON_NAME_EXECUTABLE
            } else {
                ICON_NAME_REGULAR
            }
        }
    }
}

/// Get the descriptor for a file from `registry`.
///
/// A custom icon wins; otherwise image files show themselves (or their
/// thumbnail) with the generic icon as fallback.
pub fn descriptor_for_file(registry: &DescriptorRegistry, file: &FileInfo<'_>) -> IconDescriptor {
    let name = icon_name_for_file(file.kind, file.name, file.mime_icon, file.executable);
    let custom = file
        .custom_icon_uri
        .filter(|uri| !uri.is_empty())
        .map(str::to_string)
        .or_else(|| {
            file.uri
                .and_then(|uri| thumbnail::image_icon_uri(uri, file.mime_type, file.size))
        });
    registry.get_or_create(custom.as_deref(), name, file.is_symlink)
}

/// Get one emblem descriptor per keyword of a file, preceded by the link
/// emblem for symbolic links.
pub fn emblem_descriptors_for_file(
    registry: &DescriptorRegistry,
    file: &FileInfo<'_>,
) -> Vec<IconDescriptor> {
    let link = file.is_symlink.then_some(EMBLEM_NAME_SYMBOLIC_LINK);
    link.into_iter()
        .chain(file.keywords.iter().copied())
        .map(|emblem| registry.get_or_create(None, &format!("{EMBLEM_NAME_PREFIX}{emblem}"), false))
        .collect()
}
