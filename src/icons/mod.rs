//! Icon descriptors and the bounded bitmap cache.
//!
//! A file's icon is identified by an [`IconDescriptor`]: the custom image
//! URI (if any), the symbolic icon name and whether the file is a symbolic
//! link. The [`IconFactory`] turns a descriptor and a pixel size into a
//! shared bitmap, decoding each icon once at the default size and scaling
//! from there. Memory stays bounded through a short recently used list and a
//! deferred sweep that drops entries nobody is holding.

pub mod cache;
pub mod descriptor;
pub mod loader;
pub mod naming;
pub mod pixbuf;
pub mod sweep;
pub mod thumbnail;
pub mod zoom;

pub use cache::IconFactory;
pub use descriptor::{DescriptorId, DescriptorRegistry, IconDescriptor};
pub use loader::{IconLookup, ImageLoader, PixbufLoader};
pub use naming::{FileInfo, FileKind};
pub use pixbuf::Pixbuf;
pub use sweep::{SweepTimer, run_sweeper};
pub use zoom::ZoomLevel;
