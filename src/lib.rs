//! # nautilus-icons
//!
//! Icon lookup and a bounded bitmap cache for a file manager.
//!
//! ## Overview
//!
//! Every file shown in a view needs an icon bitmap at the view's zoom size.
//! Many files share the same icon, so bitmaps are cached per
//! (descriptor, size) and shared between callers. The cache never evicts on
//! insertion; a short recently used list plus a deferred sweep keep it small.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       IconFactory                           │
//! │   get_pixbuf(descriptor, size) → shared bitmap              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │   Descriptors   │ │  Recently used  │ │      Sweep      │
//! │                 │ │                 │ │                 │
//! │ • Deduplicated  │ │ • Fixed size    │ │ • One-shot      │
//! │ • Ref counted   │ │ • Most recent   │ │ • Drops unused  │
//! │ • Self-removing │ │   first         │ │   entries       │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Lookup      │ │     Decode      │ │  Scale/Emblem   │
//! │                 │ │                 │ │                 │
//! │ • Theme first   │ │ • PNG / GIF     │ │ • From default  │
//! │ • Search roots  │ │ • file:// URIs  │ │ • Link emblem   │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`icons`] — Descriptors, lookup, the cache and its sweep
//! - [`config`] — Configuration management
//! - [`error`] — Error types
//! - [`paths`] — Config and icon directories
//!
//! ## Example
//!
//! ```no_run
//! use nautilus_icons::{Config, IconFactory};
//!
//! let config = Config::load()?;
//! let mut factory = IconFactory::new(&config);
//!
//! let icon = factory.descriptor(None, "i-directory", false);
//! let bitmap = factory.get_pixbuf(&icon, 72);
//! println!("{}x{}", bitmap.width(), bitmap.height());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/nautilus-icons/0.3.1")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::use_self)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod error;
pub mod icons;
pub mod paths;

// Re-export main types for convenience
pub use config::Config;
pub use error::IconError;
pub use icons::{FileInfo, FileKind, IconDescriptor, IconFactory, Pixbuf, ZoomLevel};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
