//! Scene files.
//!
//! A scene lists the page's mount points with their sizes and the components
//! to put on them. Loaded once at startup:
//!
//! ```toml
//! seed = 7
//!
//! [[mounts]]
//! selector = "#particles-js"
//! width = 1280
//! height = 720
//!
//! [[fields]]
//! selector = "#particles-js"
//!
//! [[holograms]]
//! selector = ".portal-hologram"
//! portal = "xuvevault"
//! detailed = true
//!
//! [[particle_systems]]
//! selector = "#hero"
//! options = { particle_count = 250, particle_color = "rgba(3, 218, 198, 0.8)" }
//! ```

use std::collections::HashSet;
use std::path::Path;

use lumaura_core::{Document, StaticDocument};
use lumaura_effects::ParticleSystemOptions;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SceneError, SceneResult};
use crate::stage::{ComponentId, MountedSystem, Stage};

/// A named container with a fixed client size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountConfig {
    /// Selector the components refer to.
    pub selector: String,
    /// Client width in pixels.
    pub width: u32,
    /// Client height in pixels.
    pub height: u32,
}

/// Ambient particle field placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Mount selector.
    pub selector: String,
}

/// Portal hologram placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HologramConfig {
    /// Mount selector.
    pub selector: String,
    /// Portal identifier.
    pub portal: String,
    /// Draw spokes, center dot and pulse ring, with twice the particles.
    #[serde(default)]
    pub detailed: bool,
    /// Backdrop tint overriding the portal's primary color.
    #[serde(default)]
    pub accent: Option<String>,
}

/// Particle system placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystemConfig {
    /// Mount selector.
    pub selector: String,
    /// Construction options; omitted keys take their defaults.
    #[serde(default)]
    pub options: ParticleSystemOptions,
}

/// A whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Stage seed.
    pub seed: u64,
    /// Mount points.
    pub mounts: Vec<MountConfig>,
    /// Particle fields.
    pub fields: Vec<FieldConfig>,
    /// Portal holograms.
    pub holograms: Vec<HologramConfig>,
    /// Particle systems.
    pub particle_systems: Vec<ParticleSystemConfig>,
}

/// Everything a scene put on a stage.
#[derive(Debug)]
pub struct MountedScene {
    /// The scene's mounts; resize them here, then dispatch on the stage.
    pub document: StaticDocument,
    /// Mounted fields and holograms, in scene order.
    pub components: Vec<ComponentId>,
    /// Mounted particle systems, in scene order.
    pub systems: Vec<MountedSystem>,
}

impl SceneConfig {
    /// Parses a scene from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed TOML or wrongly typed values.
    pub fn from_toml_str(text: &str) -> SceneResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a scene file.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file cannot be read, otherwise as
    /// [`SceneConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_toml_str(&text)?;
        info!(path = %path.display(), mounts = scene.mounts.len(), "Scene loaded");
        Ok(scene)
    }

    /// Builds the scene's mount table.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateMount`] if a selector repeats.
    pub fn document(&self) -> SceneResult<StaticDocument> {
        let mut seen = HashSet::new();
        let mut document = StaticDocument::new();
        for mount in &self.mounts {
            if !seen.insert(mount.selector.as_str()) {
                return Err(SceneError::DuplicateMount(mount.selector.clone()));
            }
            document.insert(mount.selector.clone(), mount.width, mount.height);
        }
        Ok(document)
    }

    /// Mounts every component on `stage`. Components whose selector has no
    /// mount are skipped.
    ///
    /// # Errors
    ///
    /// Duplicate mounts, or particle system options that fail validation.
    pub fn mount(&self, stage: &mut Stage) -> SceneResult<MountedScene> {
        let document = self.document()?;
        let mut components = Vec::new();
        let mut systems = Vec::new();

        for field in &self.fields {
            components.extend(stage.init_field(&document, &field.selector)?);
        }
        for hologram in &self.holograms {
            let element = document.query(&hologram.selector);
            let id = match &hologram.accent {
                Some(accent) => stage.init_hologram_with_accent(
                    element,
                    &hologram.portal,
                    hologram.detailed,
                    accent,
                )?,
                None => stage.init_hologram(element, &hologram.portal, hologram.detailed)?,
            };
            components.extend(id);
        }
        for system in &self.particle_systems {
            let container = document.query(&system.selector);
            systems.extend(stage.create_particle_system(container, system.options.clone())?);
        }

        info!(
            components = components.len(),
            systems = systems.len(),
            "Scene mounted"
        );
        Ok(MountedScene {
            document,
            components,
            systems,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaura_core::Color;

    #[test]
    fn test_empty_scene() {
        let scene = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(scene, SceneConfig::default());
    }

    #[test]
    fn test_defaults_fill_in() {
        let scene = SceneConfig::from_toml_str(
            r##"
            [[holograms]]
            selector = "#h"
            portal = "xuvecode"

            [[particle_systems]]
            selector = "#s"
            options = { particle_speed = 2.0, unknown_key = 1 }

            [[particle_systems]]
            selector = "#t"
            "##,
        )
        .unwrap();

        assert!(!scene.holograms[0].detailed);
        assert_eq!(scene.holograms[0].accent, None);
        let options = &scene.particle_systems[0].options;
        assert!((options.particle_speed - 2.0).abs() < f32::EPSILON);
        assert_eq!(options.particle_count, 100);
        assert_eq!(scene.particle_systems[1].options, ParticleSystemOptions::default());
    }

    #[test]
    fn test_color_options_parse() {
        let scene = SceneConfig::from_toml_str(
            r##"
            [[particle_systems]]
            selector = "#s"

            [particle_systems.options]
            particle_color = "rgb(3, 218, 198)"
            background_color = "rgba(0, 0, 0, 0.5)"
            "##,
        )
        .unwrap();
        let options = &scene.particle_systems[0].options;
        assert_eq!(options.particle_color, Color::rgb(3, 218, 198));
        assert_eq!(options.background_color, Color::rgba(0, 0, 0, 0.5));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(matches!(
            SceneConfig::from_toml_str("seed = \"seven\""),
            Err(SceneError::Parse(_))
        ));
        assert!(SceneConfig::from_toml_str(
            r##"
            [[particle_systems]]
            selector = "#s"
            options = { particle_color = "hsl(0, 0%, 0%)" }
            "##
        )
        .is_err());
    }

    #[test]
    fn test_duplicate_mount() {
        let scene = SceneConfig::from_toml_str(
            r##"
            [[mounts]]
            selector = "#a"
            width = 10
            height = 10

            [[mounts]]
            selector = "#a"
            width = 20
            height = 20
            "##,
        )
        .unwrap();
        assert!(matches!(scene.document(), Err(SceneError::DuplicateMount(s)) if s == "#a"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SceneConfig::load("/nonexistent/scene.toml"),
            Err(SceneError::Io { .. })
        ));
    }
}
