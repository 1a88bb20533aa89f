//! # LUMAURA
//!
//! Page host for the portal visualizations:
//! - [`Stage`] mounts components, drives their frames and resizes, and
//!   tears them down
//! - [`SceneConfig`] describes a page in TOML
//! - [`PortalApi`] / [`PortalInteractions`] talk to the portal backend
//!
//! Components and primitives are re-exported from `lumaura_core` and
//! `lumaura_effects`.

#![deny(unsafe_code)]

pub mod api;
pub mod error;
pub mod interactions;
pub mod scene;
pub mod stage;

pub use api::{PortalApi, PortalBackend, PortalSummary, ServiceStatus};
pub use error::{BackendError, BackendResult, SceneError, SceneResult, StageError, StageResult};
pub use interactions::{Alerts, LogAlerts, PortalInteractions, RecommendationOutcome, StageChange};
pub use scene::{MountedScene, SceneConfig};
pub use stage::{ComponentId, ComponentKind, MountedSystem, Stage};

pub use lumaura_core as core;
pub use lumaura_effects as effects;
