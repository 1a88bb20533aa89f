//! Mount points.
//!
//! A mount is the container a component attaches its canvas to. The only
//! thing components read from it is the client size, at creation and on every
//! resize. Hosts resolve selectors to mounts through a [`Document`].

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// A container element with readable client dimensions.
pub trait Mount: Send + Sync {
    /// Current `(width, height)` in pixels.
    fn client_size(&self) -> (u32, u32);
}

/// Shared handle to a mount.
pub type MountRef = Arc<dyn Mount>;

/// Resolves selectors to mounts.
pub trait Document {
    /// Returns the mount matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<MountRef>;
}

/// A mount whose size is set by the host.
#[derive(Debug)]
pub struct StaticMount {
    size: RwLock<(u32, u32)>,
}

impl StaticMount {
    /// Creates a mount with the given client size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: RwLock::new((width, height)),
        }
    }

    /// Changes the client size. Components pick it up on the next resize
    /// dispatch.
    pub fn set_size(&self, width: u32, height: u32) {
        *self.size.write() = (width, height);
    }
}

impl Mount for StaticMount {
    fn client_size(&self) -> (u32, u32) {
        *self.size.read()
    }
}

/// In-memory selector table.
#[derive(Debug, Default)]
pub struct StaticDocument {
    mounts: HashMap<String, Arc<StaticMount>>,
}

impl StaticDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a mount under `selector`.
    pub fn insert(
        &mut self,
        selector: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Arc<StaticMount> {
        let mount = Arc::new(StaticMount::new(width, height));
        self.mounts.insert(selector.into(), Arc::clone(&mount));
        mount
    }

    /// Returns the concrete mount so callers can resize it.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<Arc<StaticMount>> {
        self.mounts.get(selector).cloned()
    }

    /// Number of registered mounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

impl Document for StaticDocument {
    fn query(&self, selector: &str) -> Option<MountRef> {
        self.mounts
            .get(selector)
            .map(|mount| Arc::clone(mount) as MountRef)
    }
}
