//! Deduplicated, reference-counted icon descriptors.
//!
//! A descriptor is the size-independent identity of an icon: an optional
//! custom image URI, a symbolic icon name and the symlink flag. The registry
//! hands out one shared object per distinct triple and forgets it as soon as
//! the last handle is dropped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DESCRIPTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a descriptor. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DescriptorKey {
    uri: Option<String>,
    name: String,
    is_symlink: bool,
}

impl DescriptorKey {
    fn new(uri: Option<&str>, name: &str, is_symlink: bool) -> Self {
        Self {
            // An empty URI means the same as no URI.
            uri: uri.filter(|u| !u.is_empty()).map(str::to_string),
            name: name.to_string(),
            is_symlink,
        }
    }
}

#[derive(Default)]
struct RegistryState {
    descriptors: HashMap<DescriptorKey, Weak<Descriptor>>,
}

struct Descriptor {
    id: DescriptorId,
    key: DescriptorKey,
    registry: Weak<RefCell<RegistryState>>,
}

impl Drop for Descriptor {
    fn drop(&mut self) {
        let Some(state) = self.registry.upgrade() else {
            return;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            // Left as a dead slot; get_or_create replaces it.
            return;
        };
        let this: *const Self = self;
        let is_ours = state
            .descriptors
            .get(&self.key)
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), this));
        if is_ours {
            state.descriptors.remove(&self.key);
        }
    }
}

/// Shared handle to a logical icon.
///
/// Cloning takes a reference and dropping releases it. Two handles are equal
/// only if they point at the same descriptor, which the registry guarantees
/// for equal (URI, name, symlink) triples.
#[derive(Clone)]
pub struct IconDescriptor(Rc<Descriptor>);

impl IconDescriptor {
    /// Process-unique identifier.
    pub fn id(&self) -> DescriptorId {
        self.0.id
    }

    /// Custom image URI, if any.
    pub fn uri(&self) -> Option<&str> {
        self.0.key.uri.as_deref()
    }

    /// Symbolic icon name.
    pub fn name(&self) -> &str {
        &self.0.key.name
    }

    /// Whether the symbolic link emblem is drawn on top.
    pub fn is_symlink(&self) -> bool {
        self.0.key.is_symlink
    }

    /// Number of live handles to this descriptor.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl PartialEq for IconDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for IconDescriptor {}

impl Hash for IconDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for IconDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconDescriptor")
            .field("id", &self.0.id)
            .field("uri", &self.0.key.uri)
            .field("name", &self.0.key.name)
            .field("is_symlink", &self.0.key.is_symlink)
            .finish()
    }
}

/// Registry of live descriptors.
///
/// The registry only holds weak references: it never keeps a descriptor
/// alive, it just makes sure equal requests share one object.
#[derive(Clone, Default)]
pub struct DescriptorRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the descriptor for (uri, name, is_symlink), creating it if needed.
    pub fn get_or_create(&self, uri: Option<&str>, name: &str, is_symlink: bool) -> IconDescriptor {
        let key = DescriptorKey::new(uri, name, is_symlink);
        let mut state = self.state.borrow_mut();

        if let Some(existing) = state.descriptors.get(&key).and_then(Weak::upgrade) {
            return IconDescriptor(existing);
        }

        let id = DescriptorId(NEXT_DESCRIPTOR_ID.fetch_add(1, Ordering::Relaxed));

        let descriptor = Rc::new(Descriptor {
            id,
            key: key.clone(),
            registry: Rc::downgrade(&self.state),
        });
        state.descriptors.insert(key, Rc::downgrade(&descriptor));
        tracing::trace!("Created icon descriptor {:?} for '{}'", id, name);

        IconDescriptor(descriptor)
    }

    /// Check whether a live descriptor exists for the triple.
    pub fn contains(&self, uri: Option<&str>, name: &str, is_symlink: bool) -> bool {
        let key = DescriptorKey::new(uri, name, is_symlink);
        self.state
            .borrow()
            .descriptors
            .get(&key)
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Number of live descriptors.
    pub fn len(&self) -> usize {
        self.state
            .borrow()
            .descriptors
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Check if no descriptor is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for DescriptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorRegistry")
            .field("live", &self.len())
            .finish()
    }
}
