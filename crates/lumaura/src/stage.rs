//! # Stage
//!
//! Hosts every mounted component of a page:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ init_*        resolve mount → size canvas → start (1st frame) │
//! │ frame()       clock.now_secs → tick every Running loop        │
//! │ dispatch_resize()  re-read client sizes → resize every loop   │
//! │ unmount(id)   stop → detach from frames and resizes           │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing mount is a silent no-op: the page simply has no such section.

use std::fmt;
use std::sync::Arc;

use lumaura_core::{Animated, AnimationLoop, Canvas, Clock, Document, LoopState, MountRef};
use lumaura_effects::{
    ParticleField, ParticleSystem, ParticleSystemHandle, ParticleSystemOptions, PortalHologram,
};
use tracing::{debug, info};

use crate::error::StageResult;

/// Golden-ratio increment used to spread per-component seeds.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Identifies a mounted component for the lifetime of a [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which visualization a component is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Ambient particle field.
    Field,
    /// Portal hologram.
    Hologram,
    /// Configurable particle system.
    ParticleSystem,
}

/// A particle system mounted on the stage, with its runtime controls.
#[derive(Debug, Clone)]
pub struct MountedSystem {
    /// Stage id, for [`Stage::unmount`].
    pub id: ComponentId,
    /// Count, speed and color controls.
    pub handle: ParticleSystemHandle,
}

struct Entry {
    id: ComponentId,
    kind: ComponentKind,
    mount: MountRef,
    animation: AnimationLoop<Box<dyn Animated>>,
}

/// Component host driven by the page's frame and resize events.
pub struct Stage {
    clock: Arc<dyn Clock>,
    seed: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("seed", &self.seed)
            .field("components", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Stage {
    /// Creates an empty stage. Component seeds derive from `seed`, so a
    /// fixed seed and clock reproduce every frame.
    pub fn new(clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self {
            clock,
            seed,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Mounts the ambient particle field on the element matching `selector`.
    ///
    /// # Errors
    ///
    /// Only on a lifecycle violation, which a fresh component cannot hit.
    pub fn init_field(
        &mut self,
        document: &dyn Document,
        selector: &str,
    ) -> StageResult<Option<ComponentId>> {
        let Some(mount) = document.query(selector) else {
            debug!(selector, "No particle field container, skipping");
            return Ok(None);
        };
        let (width, height) = mount.client_size();
        let seed = self.component_seed();
        let field = ParticleField::new(width, height, seed);
        self.attach(ComponentKind::Field, mount, Box::new(field)).map(Some)
    }

    /// Mounts a portal hologram on `element`.
    ///
    /// # Errors
    ///
    /// Only on a lifecycle violation, which a fresh component cannot hit.
    pub fn init_hologram(
        &mut self,
        element: Option<MountRef>,
        portal_id: &str,
        detailed: bool,
    ) -> StageResult<Option<ComponentId>> {
        self.mount_hologram(element, portal_id, detailed, None)
    }

    /// Like [`Stage::init_hologram`], with the backdrop tinted by `accent`.
    ///
    /// # Errors
    ///
    /// Only on a lifecycle violation, which a fresh component cannot hit.
    pub fn init_hologram_with_accent(
        &mut self,
        element: Option<MountRef>,
        portal_id: &str,
        detailed: bool,
        accent: &str,
    ) -> StageResult<Option<ComponentId>> {
        self.mount_hologram(element, portal_id, detailed, Some(accent))
    }

    fn mount_hologram(
        &mut self,
        element: Option<MountRef>,
        portal_id: &str,
        detailed: bool,
        accent: Option<&str>,
    ) -> StageResult<Option<ComponentId>> {
        let Some(mount) = element else {
            debug!(portal_id, "No hologram element, skipping");
            return Ok(None);
        };
        let (width, height) = mount.client_size();
        let seed = self.component_seed();
        let mut hologram = PortalHologram::new(width, height, portal_id, detailed, seed);
        if let Some(accent) = accent {
            hologram = hologram.with_accent(accent);
        }
        self.attach(ComponentKind::Hologram, mount, Box::new(hologram)).map(Some)
    }

    /// Mounts a configurable particle system on `container`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail validation.
    pub fn create_particle_system(
        &mut self,
        container: Option<MountRef>,
        options: ParticleSystemOptions,
    ) -> StageResult<Option<MountedSystem>> {
        let Some(mount) = container else {
            debug!("No particle system container, skipping");
            return Ok(None);
        };
        let (width, height) = mount.client_size();
        let seed = self.component_seed();
        let system = ParticleSystem::new(width, height, options, seed)?;
        let handle = system.handle();
        let id = self.attach(ComponentKind::ParticleSystem, mount, Box::new(system))?;
        Ok(Some(MountedSystem { id, handle }))
    }

    fn component_seed(&self) -> u64 {
        self.seed ^ (self.next_id + 1).wrapping_mul(SEED_SPREAD)
    }

    fn attach(
        &mut self,
        kind: ComponentKind,
        mount: MountRef,
        component: Box<dyn Animated>,
    ) -> StageResult<ComponentId> {
        let id = ComponentId(self.next_id);
        self.next_id += 1;

        let mut animation = AnimationLoop::new(component);
        animation.start(self.clock.now_secs())?;
        let canvas = animation.inner().canvas();
        info!(%id, ?kind, width = canvas.width(), height = canvas.height(), "Component mounted");

        self.entries.push(Entry {
            id,
            kind,
            mount,
            animation,
        });
        Ok(id)
    }

    /// Draws one frame on every running component. Returns how many drew.
    pub fn frame(&mut self) -> usize {
        let now = self.clock.now_secs();
        self.entries
            .iter_mut()
            .map(|entry| entry.animation.tick(now))
            .filter(|drew| *drew)
            .count()
    }

    /// Re-reads every mount's client size and resizes its canvas.
    /// Returns how many components were resized.
    pub fn dispatch_resize(&mut self) -> usize {
        let mut resized = 0;
        for entry in &mut self.entries {
            let (width, height) = entry.mount.client_size();
            if entry.animation.resize(width, height) {
                resized += 1;
            }
        }
        debug!(resized, "Resize dispatched");
        resized
    }

    /// Stops a component and detaches it. Returns `false` for an unknown id.
    pub fn unmount(&mut self, id: ComponentId) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let mut entry = self.entries.remove(index);
        entry.animation.stop();
        info!(%id, kind = ?entry.kind, frames = entry.animation.frames(), "Component unmounted");
        true
    }

    /// Stops and detaches every component.
    pub fn stop_all(&mut self) {
        for entry in &mut self.entries {
            entry.animation.stop();
        }
        info!(components = self.entries.len(), "Stage stopped");
        self.entries.clear();
    }

    /// The canvas of a mounted component.
    pub fn canvas(&self, id: ComponentId) -> Option<&Canvas> {
        self.entry(id).map(|entry| entry.animation.inner().canvas())
    }

    /// Lifecycle state of a mounted component.
    pub fn state(&self, id: ComponentId) -> Option<LoopState> {
        self.entry(id).map(|entry| entry.animation.state())
    }

    /// Kind of a mounted component.
    pub fn kind(&self, id: ComponentId) -> Option<ComponentKind> {
        self.entry(id).map(|entry| entry.kind)
    }

    /// Frames drawn by a mounted component, including the first.
    pub fn frames(&self, id: ComponentId) -> Option<u64> {
        self.entry(id).map(|entry| entry.animation.frames())
    }

    /// Ids of every mounted component, in mount order.
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Number of mounted components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: ComponentId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}
