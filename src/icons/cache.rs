//! Bounded cache of decoded icon bitmaps.
//!
//! Entries are keyed by (descriptor, pixel size). Nothing is evicted on
//! insertion; instead a fixed-size list of the most recently used keys
//! protects entries from the deferred sweep, and the sweep drops every other
//! entry whose bitmap no caller is still holding.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::sync::Arc;

use image::RgbaImage;
use lru::LruCache;
use tokio::sync::Notify;
use tokio::time::Instant;

use super::descriptor::{DescriptorId, DescriptorRegistry, IconDescriptor};
use super::loader::{IconLookup, ImageLoader, PixbufLoader, custom_image_path};
use super::naming::{
    EMBLEM_NAME_SYMBOLIC_LINK, FileInfo, descriptor_for_file, emblem_descriptors_for_file,
};
use super::pixbuf::{self, Pixbuf};
use super::sweep::SweepTimer;
use crate::config::Config;

/// Identifies one cached bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    descriptor: DescriptorId,
    size: u32,
}

/// One cached bitmap and the descriptor reference that keeps its key valid.
struct CacheEntry {
    _descriptor: IconDescriptor,
    pixbuf: Pixbuf,
}

type IconsChangedListener = Box<dyn FnMut(Option<&str>)>;

/// Produces and caches icon bitmaps.
///
/// The factory is an ordinary value owned by whoever sets up the UI: create
/// it once, pass it by reference to the code that paints icons and drop it at
/// shutdown. It is single-threaded by construction (`!Send`).
pub struct IconFactory<L = ImageLoader> {
    theme: Option<String>,
    default_size: u32,
    registry: DescriptorRegistry,
    lookup: IconLookup,
    loader: L,
    entries: HashMap<CacheKey, CacheEntry>,
    recently_used: LruCache<CacheKey, ()>,
    sweep: SweepTimer,
    symlink_emblem: Option<Rc<RgbaImage>>,
    fallback: OnceCell<RgbaImage>,
    listeners: Vec<IconsChangedListener>,
}

impl IconFactory<ImageLoader> {
    /// Create a factory that decodes files with the `image` crate.
    pub fn new(config: &Config) -> Self {
        Self::with_loader(config, ImageLoader)
    }
}

impl<L: PixbufLoader> IconFactory<L> {
    /// Create a factory with a custom decoder.
    pub fn with_loader(config: &Config, loader: L) -> Self {
        let capacity = NonZeroUsize::new(config.effective_recently_used_capacity())
            .unwrap_or(NonZeroUsize::MIN);
        let lookup = IconLookup::new(config.search_paths.clone());
        tracing::debug!("Icon search path: {:?}", lookup.search_paths());

        Self {
            theme: config.theme.clone().filter(|t| !t.is_empty()),
            default_size: config.effective_default_size(),
            registry: DescriptorRegistry::new(),
            lookup,
            loader,
            entries: HashMap::new(),
            recently_used: LruCache::new(capacity),
            sweep: SweepTimer::new(config.sweep_delay()),
            symlink_emblem: None,
            fallback: OnceCell::new(),
            listeners: Vec::new(),
        }
    }

    /// Get or create the descriptor for (uri, name, is_symlink).
    pub fn descriptor(&self, uri: Option<&str>, name: &str, is_symlink: bool) -> IconDescriptor {
        self.registry.get_or_create(uri, name, is_symlink)
    }

    /// Get the descriptor for a file.
    pub fn icon_for_file(&self, file: &FileInfo<'_>) -> IconDescriptor {
        descriptor_for_file(&self.registry, file)
    }

    /// Get the emblem descriptors for a file, link emblem first.
    pub fn emblems_for_file(&self, file: &FileInfo<'_>) -> Vec<IconDescriptor> {
        emblem_descriptors_for_file(&self.registry, file)
    }

    /// Get the bitmap for a file's icon at `size` pixels.
    pub fn get_pixbuf_for_file(&mut self, file: &FileInfo<'_>, size: u32) -> Pixbuf {
        let icon = self.icon_for_file(file);
        self.get_pixbuf(&icon, size)
    }

    /// The descriptor registry.
    pub const fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// Active theme name.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// The size icons are decoded at.
    pub const fn default_size(&self) -> u32 {
        self.default_size
    }

    /// Get the bitmap for `descriptor` at `size` pixels.
    ///
    /// Never fails: when nothing can be decoded the built-in fallback image
    /// is used. The returned handle keeps the bitmap alive, and keeps the
    /// entry from being swept, for as long as the caller holds it.
    pub fn get_pixbuf(&mut self, descriptor: &IconDescriptor, size: u32) -> Pixbuf {
        let key = CacheKey {
            descriptor: descriptor.id(),
            size,
        };

        let pixbuf = if let Some(entry) = self.entries.get(&key) {
            Rc::clone(&entry.pixbuf)
        } else {
            tracing::debug!("Icon cache miss for '{}' at {}px", descriptor.name(), size);
            let pixbuf = Rc::new(self.produce(descriptor, size));
            self.entries.insert(
                key,
                CacheEntry {
                    _descriptor: descriptor.clone(),
                    pixbuf: Rc::clone(&pixbuf),
                },
            );
            pixbuf
        };

        self.mark_recently_used(key);
        if self.sweep.schedule(Instant::now()) {
            tracing::trace!("Icon cache sweep scheduled in {:?}", self.sweep.delay());
        }

        pixbuf
    }

    /// Switch to another theme, dropping everything that was cached.
    pub fn set_theme(&mut self, theme: Option<&str>) {
        self.clear();
        self.theme = theme.filter(|t| !t.is_empty()).map(str::to_string);
        tracing::debug!("Icon theme set to {:?}", self.theme);

        let theme = self.theme.as_deref();
        for listener in &mut self.listeners {
            listener(theme);
        }
    }

    /// Call `listener` after every theme change with the new theme name.
    pub fn connect_icons_changed<F>(&mut self, listener: F)
    where
        F: FnMut(Option<&str>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Drop every cached bitmap and the descriptor references they hold.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recently_used.clear();
        self.symlink_emblem = None;
    }

    /// Remove entries that are neither recently used nor held by a caller.
    ///
    /// Returns the number of entries removed. Also disarms the sweep timer.
    pub fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        let recently_used = &self.recently_used;
        self.entries.retain(|key, entry| {
            recently_used.contains(key) || Rc::strong_count(&entry.pixbuf) > 1
        });
        self.sweep.clear();

        let removed = before - self.entries.len();
        tracing::debug!("Swept {} of {} cached icons", removed, before);
        removed
    }

    /// Run the pending sweep if it is due at `now`.
    pub fn run_due_sweep(&mut self, now: Instant) -> Option<usize> {
        self.sweep.is_due(now).then(|| self.sweep())
    }

    /// When the pending sweep is due, if one is scheduled.
    pub const fn sweep_deadline(&self) -> Option<Instant> {
        self.sweep.deadline()
    }

    pub(crate) fn sweep_notifier(&self) -> Arc<Notify> {
        self.sweep.notifier()
    }

    /// Number of cached bitmaps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a bitmap for `descriptor` at `size` is cached.
    pub fn contains(&self, descriptor: &IconDescriptor, size: u32) -> bool {
        self.entries.contains_key(&CacheKey {
            descriptor: descriptor.id(),
            size,
        })
    }

    /// Check if `descriptor` at `size` is on the recently used list.
    pub fn is_recently_used(&self, descriptor: &IconDescriptor, size: u32) -> bool {
        self.recently_used.contains(&CacheKey {
            descriptor: descriptor.id(),
            size,
        })
    }

    /// Number of keys on the recently used list.
    pub fn recently_used_len(&self) -> usize {
        self.recently_used.len()
    }

    fn produce(&mut self, descriptor: &IconDescriptor, size: u32) -> RgbaImage {
        if size != self.default_size {
            let base = self.get_pixbuf(descriptor, self.default_size);
            return pixbuf::scale_to_size(&base, size, self.default_size);
        }

        let mut image = self.decode(descriptor);
        if descriptor.is_symlink() {
            let emblem = self.symlink_emblem();
            pixbuf::composite_lower_left(&mut image, &emblem);
        }
        image
    }

    fn decode(&self, descriptor: &IconDescriptor) -> RgbaImage {
        if let Some(uri) = descriptor.uri() {
            match custom_image_path(uri).and_then(|path| self.loader.load(&path)) {
                Ok(image) => return image,
                Err(e) => tracing::debug!("No custom image for '{}': {e}", descriptor.name()),
            }
        }

        match self
            .lookup
            .load(&self.loader, self.theme.as_deref(), descriptor.name())
        {
            Ok(image) => image,
            Err(e) => {
                tracing::debug!("{e}, using fallback icon");
                // Each entry gets its own copy so its reference count stays meaningful.
                let size = self.default_size;
                self.fallback
                    .get_or_init(|| pixbuf::fallback_icon_at(size))
                    .clone()
            }
        }
    }

    fn symlink_emblem(&mut self) -> Rc<RgbaImage> {
        if let Some(emblem) = &self.symlink_emblem {
            return Rc::clone(emblem);
        }

        let emblem = self
            .lookup
            .load(&self.loader, self.theme.as_deref(), EMBLEM_NAME_SYMBOLIC_LINK)
            .unwrap_or_else(|e| {
                tracing::debug!("{e}, using built-in link emblem");
                pixbuf::symlink_emblem()
            });

        let emblem = Rc::new(emblem);
        self.symlink_emblem = Some(Rc::clone(&emblem));
        emblem
    }

    fn mark_recently_used(&mut self, key: CacheKey) {
        // `get` moves an existing key to the front.
        if self.recently_used.get(&key).is_some() {
            return;
        }
        if let Some((dropped, ())) = self.recently_used.push(key, ()) {
            tracing::trace!("{:?} fell off the recently used list", dropped);
        }
    }
}

impl<L> fmt::Debug for IconFactory<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconFactory")
            .field("theme", &self.theme)
            .field("default_size", &self.default_size)
            .field("entries", &self.entries.len())
            .field("recently_used", &self.recently_used.len())
            .field("sweep_deadline", &self.sweep.deadline())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::icons::naming::FileKind;
    use image::Rgba;
    use std::cell::{Cell, RefCell};
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::{TempDir, tempdir};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    /// Records every file it is asked to decode.
    #[derive(Clone, Default)]
    struct CountingLoader {
        loads: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl CountingLoader {
        fn count(&self) -> usize {
            self.loads.borrow().len()
        }

        fn count_for(&self, file_name: &str) -> usize {
            self.loads
                .borrow()
                .iter()
                .filter(|path| path.file_name().is_some_and(|name| name == file_name))
                .count()
        }
    }

    impl PixbufLoader for CountingLoader {
        fn load(&self, path: &Path) -> Result<RgbaImage, IconError> {
            self.loads.borrow_mut().push(path.to_path_buf());
            ImageLoader.load(path)
        }
    }

    fn write_icon(path: &Path, color: Rgba<u8>) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(48, 48, color).save(path).unwrap();
    }

    fn setup() -> (TempDir, IconFactory<CountingLoader>, CountingLoader) {
        let dir = tempdir().unwrap();
        write_icon(&dir.path().join("i-regular.png"), RED);
        write_icon(&dir.path().join("crux").join("i-regular.png"), GREEN);

        let config = Config {
            search_paths: vec![dir.path().to_path_buf()],
            ..Config::default()
        };
        let loader = CountingLoader::default();
        let factory = IconFactory::with_loader(&config, loader.clone());
        (dir, factory, loader)
    }

    #[test]
    fn test_cache_hit_reuses_bitmap() {
        let (_dir, mut factory, loader) = setup();
        let icon = factory.descriptor(None, "i-regular", false);

        let first = factory.get_pixbuf(&icon, 48);
        let second = factory.get_pixbuf(&icon, 48);

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.get_pixel(10, 10), &RED);
        assert_eq!(loader.count(), 1);
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_other_sizes_scale_from_default() {
        let (_dir, mut factory, loader) = setup();
        let icon = factory.descriptor(None, "i-regular", false);

        let large = factory.get_pixbuf(&icon, 96);
        let standard = factory.get_pixbuf(&icon, 48);

        assert_eq!(large.dimensions(), (96, 96));
        assert_eq!(*large, pixbuf::scale_to_size(&standard, 96, 48));
        assert_eq!(loader.count(), 1);
        assert!(factory.contains(&icon, 48));
        assert!(factory.contains(&icon, 96));
    }

    #[test]
    fn test_missing_icon_uses_fallback() {
        let (_dir, mut factory, _loader) = setup();
        let icon = factory.descriptor(None, "text-plain", false);

        let standard = factory.get_pixbuf(&icon, 48);
        assert_eq!(*standard, pixbuf::fallback_icon());

        let large = factory.get_pixbuf(&icon, 96);
        assert_eq!(large.dimensions(), (96, 96));
        assert_eq!(*large, pixbuf::scale_to_size(&pixbuf::fallback_icon(), 96, 48));
    }

    #[test]
    fn test_entries_hold_one_descriptor_reference() {
        let (_dir, mut factory, _loader) = setup();
        let icon = factory.descriptor(None, "i-regular", false);

        drop(factory.get_pixbuf(&icon, 48));
        drop(factory.get_pixbuf(&icon, 24));
        assert_eq!(icon.ref_count(), 3);

        factory.clear();
        assert_eq!(icon.ref_count(), 1);
    }

    #[test]
    fn test_recently_used_list_is_bounded() {
        let (_dir, mut factory, _loader) = setup();
        let icons: Vec<_> = (0..25)
            .map(|i| factory.descriptor(None, &format!("missing-{i}"), false))
            .collect();

        for icon in &icons {
            drop(factory.get_pixbuf(icon, 48));
        }

        assert_eq!(factory.len(), 25);
        assert_eq!(factory.recently_used_len(), 20);
        for (i, icon) in icons.iter().enumerate() {
            assert_eq!(factory.is_recently_used(icon, 48), i >= 5, "icon {i}");
        }
    }

    #[test]
    fn test_hit_moves_key_to_front() {
        let (_dir, mut factory, _loader) = setup();
        let icons: Vec<_> = (0..20)
            .map(|i| factory.descriptor(None, &format!("missing-{i}"), false))
            .collect();
        for icon in &icons {
            drop(factory.get_pixbuf(icon, 48));
        }

        // Touch the oldest, then push one more key in.
        drop(factory.get_pixbuf(&icons[0], 48));
        let extra = factory.descriptor(None, "missing-extra", false);
        drop(factory.get_pixbuf(&extra, 48));

        assert!(factory.is_recently_used(&icons[0], 48));
        assert!(!factory.is_recently_used(&icons[1], 48));
        assert_eq!(factory.recently_used_len(), 20);
    }

    #[test]
    fn test_sweep_removes_only_unused_stale_entries() {
        let (_dir, mut factory, _loader) = setup();
        let icons: Vec<_> = (0..25)
            .map(|i| factory.descriptor(None, &format!("missing-{i}"), false))
            .collect();

        let held = factory.get_pixbuf(&icons[0], 48);
        for icon in &icons[1..] {
            drop(factory.get_pixbuf(icon, 48));
        }

        // icons[0..5] fell off the list; icons[0] is still held by us.
        assert_eq!(factory.sweep(), 4);
        assert_eq!(factory.len(), 21);
        assert!(factory.contains(&icons[0], 48));
        for icon in &icons[1..5] {
            assert!(!factory.contains(icon, 48));
        }
        for icon in &icons[5..] {
            assert!(factory.contains(icon, 48));
        }

        drop(held);
        assert_eq!(factory.sweep(), 1);
        assert!(!factory.contains(&icons[0], 48));
    }

    #[test]
    fn test_sweep_releases_descriptors() {
        let (_dir, mut factory, _loader) = setup();
        for i in 0..21 {
            let icon = factory.descriptor(None, &format!("missing-{i}"), false);
            drop(factory.get_pixbuf(&icon, 48));
        }
        assert!(factory.registry().contains(None, "missing-0", false));

        assert_eq!(factory.sweep(), 1);
        assert!(!factory.registry().contains(None, "missing-0", false));
        assert_eq!(factory.registry().len(), 20);
    }

    #[test]
    fn test_sweep_timer_lifecycle() {
        let (_dir, mut factory, _loader) = setup();
        let icon = factory.descriptor(None, "i-regular", false);
        assert_eq!(factory.sweep_deadline(), None);

        drop(factory.get_pixbuf(&icon, 48));
        let deadline = factory.sweep_deadline().unwrap();

        drop(factory.get_pixbuf(&icon, 48));
        assert_eq!(factory.sweep_deadline(), Some(deadline));

        assert_eq!(factory.run_due_sweep(deadline - Duration::from_secs(1)), None);
        assert_eq!(factory.run_due_sweep(deadline), Some(0));
        assert_eq!(factory.sweep_deadline(), None);

        drop(factory.get_pixbuf(&icon, 48));
        assert!(factory.sweep_deadline().is_some());
    }

    #[test]
    fn test_set_theme_clears_and_reloads() {
        let (_dir, mut factory, loader) = setup();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&changes);
        factory.connect_icons_changed(move |theme| seen.borrow_mut().push(theme.map(str::to_string)));

        let icon = factory.descriptor(None, "i-regular", false);
        let before = factory.get_pixbuf(&icon, 48);
        drop(factory.get_pixbuf(&icon, 96));
        assert_eq!(before.get_pixel(0, 0), &RED);

        factory.set_theme(Some("crux"));
        assert!(factory.is_empty());
        assert_eq!(factory.recently_used_len(), 0);
        assert_eq!(factory.theme(), Some("crux"));
        assert_eq!(icon.ref_count(), 1);
        assert_eq!(*changes.borrow(), vec![Some("crux".to_string())]);

        let after = factory.get_pixbuf(&icon, 48);
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.get_pixel(0, 0), &GREEN);
        assert_eq!(loader.count(), 2);

        factory.set_theme(None);
        assert_eq!(factory.theme(), None);
        assert_eq!(changes.borrow().last(), Some(&None));
    }

    #[test]
    fn test_symlink_emblem_on_lower_left() {
        let (_dir, mut factory, _loader) = setup();
        let icon = factory.descriptor(None, "i-regular", true);
        let image = factory.get_pixbuf(&icon, 48);

        let emblem = pixbuf::symlink_emblem();
        assert_eq!(image.get_pixel(0, 47), emblem.get_pixel(0, 15));
        assert_eq!(image.get_pixel(47, 0), &RED);
        assert_eq!(image.get_pixel(47, 47), &RED);
    }

    #[test]
    fn test_symlink_emblem_loaded_once() {
        let (dir, mut factory, loader) = setup();
        write_icon(&dir.path().join("symbolic-link.png"), GREEN);

        let a = factory.descriptor(None, "i-regular", true);
        let b = factory.descriptor(None, "missing", true);
        drop(factory.get_pixbuf(&a, 48));
        drop(factory.get_pixbuf(&b, 48));
        assert_eq!(loader.count_for("symbolic-link.png"), 1);

        factory.set_theme(None);
        drop(factory.get_pixbuf(&a, 48));
        assert_eq!(loader.count_for("symbolic-link.png"), 2);
    }

    #[test]
    fn test_custom_uri_takes_precedence() {
        let (dir, mut factory, _loader) = setup();
        let custom = dir.path().join("my pictures").join("cover.png");
        write_icon(&custom, GREEN);

        let uri = format!("file://{}", custom.display()).replace(' ', "%20");
        let icon = factory.descriptor(Some(&uri), "i-regular", false);
        assert_eq!(factory.get_pixbuf(&icon, 48).get_pixel(0, 0), &GREEN);

        let remote = factory.descriptor(Some("http://example.com/a.png"), "i-regular", false);
        assert_eq!(factory.get_pixbuf(&remote, 48).get_pixel(0, 0), &RED);
    }

    #[test]
    fn test_icon_for_file() {
        let (_dir, mut factory, _loader) = setup();
        let file = FileInfo {
            name: "notes",
            kind: FileKind::Regular,
            ..FileInfo::default()
        };

        let icon = factory.icon_for_file(&file);
        assert_eq!(icon.name(), "i-regular");
        assert_eq!(factory.get_pixbuf(&icon, 48).get_pixel(0, 0), &RED);
    }

    #[test]
    fn test_fallback_follows_default_size() {
        let config = Config {
            search_paths: Vec::new(),
            default_size: 96,
            ..Config::default()
        };
        let mut factory = IconFactory::new(&config);
        let icon = factory.descriptor(None, "text-plain", false);

        assert_eq!(factory.get_pixbuf(&icon, 96).dimensions(), (96, 96));
        assert_eq!(factory.get_pixbuf(&icon, 192).dimensions(), (192, 192));
        assert_eq!(factory.get_pixbuf(&icon, 48).dimensions(), (48, 48));
    }

    #[test]
    fn test_get_pixbuf_for_file() {
        let (dir, mut factory, loader) = setup();
        let picture = dir.path().join("small.png");
        write_icon(&picture, GREEN);
        let uri = format!("file://{}", picture.display());

        let file = FileInfo {
            name: "small.png",
            kind: FileKind::Regular,
            uri: Some(&uri),
            mime_type: Some("image/png"),
            size: 200,
            ..FileInfo::default()
        };
        let image = factory.get_pixbuf_for_file(&file, 96);
        assert_eq!(image.dimensions(), (96, 96));
        assert_eq!(image.get_pixel(0, 0), &GREEN);
        assert_eq!(loader.count_for("small.png"), 1);

        let plain = FileInfo {
            name: "notes",
            kind: FileKind::Regular,
            ..FileInfo::default()
        };
        assert_eq!(factory.get_pixbuf_for_file(&plain, 48).get_pixel(0, 0), &RED);
    }

    #[test]
    fn test_emblems_for_file() {
        let (_dir, factory, _loader) = setup();
        let keywords = ["urgent"];
        let file = FileInfo {
            name: "report",
            is_symlink: true,
            keywords: &keywords,
            ..FileInfo::default()
        };

        let names: Vec<_> = factory
            .emblems_for_file(&file)
            .iter()
            .map(|icon| icon.name().to_string())
            .collect();
        assert_eq!(names, vec!["emblem-symbolic-link", "emblem-urgent"]);
    }

    #[test]
    fn test_loader_failure_counts() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("i-regular.png"), b"junk").unwrap();
        let config = Config {
            search_paths: vec![dir.path().to_path_buf()],
            ..Config::default()
        };
        let calls = Rc::new(Cell::new(0));

        struct Failing(Rc<Cell<usize>>);
        impl PixbufLoader for Failing {
            fn load(&self, path: &Path) -> Result<RgbaImage, IconError> {
                self.0.set(self.0.get() + 1);
                Err(IconError::NotFound(path.display().to_string()))
            }
        }

        let mut factory = IconFactory::with_loader(&config, Failing(Rc::clone(&calls)));
        let icon = factory.descriptor(None, "i-regular", false);
        assert_eq!(*factory.get_pixbuf(&icon, 48), pixbuf::fallback_icon());
        assert_eq!(*factory.get_pixbuf(&icon, 72), pixbuf::scale_to_size(&pixbuf::fallback_icon(), 72, 48));
        assert_eq!(calls.get(), 1);
    }
}
