//! # Stage Integration Tests
//!
//! Mount, resize and teardown through the public host API, plus the shipped
//! preview scene.

use std::sync::Arc;

use lumaura::core::{Clock, LoopState, ManualClock, StaticDocument};
use lumaura::effects::ParticleSystemOptions;
use lumaura::{ComponentKind, SceneConfig, Stage};

fn manual_stage(seed: u64) -> (Arc<ManualClock>, Stage) {
    let clock = Arc::new(ManualClock::new(0.0));
    let stage = Stage::new(Arc::clone(&clock) as Arc<dyn Clock>, seed);
    (clock, stage)
}

/// Test: a resize lands on the canvas before the next frame draws.
#[test]
fn test_resize_applies_before_next_frame() {
    let (_, mut stage) = manual_stage(1);
    let mut document = StaticDocument::new();
    let field_mount = document.insert("#particles-js", 800, 600);
    let holo_mount = document.insert("#portal", 200, 200);

    let field = stage.init_field(&document, "#particles-js").unwrap().unwrap();
    let hologram = stage
        .init_hologram(Some(holo_mount.clone()), "xuvecode", true)
        .unwrap()
        .unwrap();

    field_mount.set_size(1024, 768);
    holo_mount.set_size(300, 150);
    assert_eq!(stage.dispatch_resize(), 2);

    // Resized canvases hold no stale commands
    let canvas = stage.canvas(field).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (1024, 768));
    assert!(canvas.commands().is_empty());

    stage.frame();
    let canvas = stage.canvas(hologram).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (300, 150));
    assert!(!canvas.commands().is_empty());
}

/// Test: an unmounted component is gone from frames and resizes.
#[test]
fn test_unmount_stops_drawing() {
    let (clock, mut stage) = manual_stage(2);
    let mut document = StaticDocument::new();
    let mount = document.insert("#hero", 400, 300);

    let system = stage
        .create_particle_system(Some(mount.clone()), ParticleSystemOptions::default())
        .unwrap()
        .unwrap();
    let hologram = stage.init_hologram(Some(mount.clone()), "xuveteam", false).unwrap().unwrap();
    assert_eq!(stage.state(system.id), Some(LoopState::Running));
    assert_eq!(stage.kind(system.id), Some(ComponentKind::ParticleSystem));

    assert!(stage.unmount(system.id));
    assert!(!stage.unmount(system.id));
    assert_eq!(stage.state(system.id), None);

    clock.advance(1.0 / 60.0);
    assert_eq!(stage.frame(), 1);
    assert_eq!(stage.frames(hologram), Some(2));

    mount.set_size(10, 10);
    assert_eq!(stage.dispatch_resize(), 1);

    // The handle outlives the component and still reflects its state
    system.handle.set_particle_count(5);
    assert_eq!(system.handle.particle_count(), 5);
}

/// Test: same seed and clock reproduce the same frames.
#[test]
fn test_stage_is_deterministic() {
    let run = || {
        let (clock, mut stage) = manual_stage(99);
        let mut document = StaticDocument::new();
        document.insert("#particles-js", 320, 240);
        let id = stage.init_field(&document, "#particles-js").unwrap().unwrap();
        for _ in 0..30 {
            clock.advance(0.016);
            stage.frame();
        }
        stage.canvas(id).unwrap().commands().to_vec()
    };
    assert_eq!(run(), run());
}

/// Test: the shipped preview scene parses and mounts fully.
#[test]
fn test_preview_scene_mounts() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/preview_scene.toml");
    let scene = SceneConfig::load(path).unwrap();
    assert_eq!(scene.mounts.len(), 7);

    let (clock, mut stage) = manual_stage(scene.seed);
    let mounted = scene.mount(&mut stage).unwrap();
    assert_eq!(mounted.components.len(), 6);
    assert_eq!(mounted.systems.len(), 1);
    assert_eq!(stage.len(), 7);
    assert_eq!(mounted.systems[0].handle.particle_count(), 250);

    for _ in 0..10 {
        clock.advance(1.0 / 60.0);
        assert_eq!(stage.frame(), 7);
    }
}

/// Test: components whose mount is missing are skipped.
#[test]
fn test_scene_skips_missing_mounts() {
    let scene = SceneConfig::from_toml_str(
        r##"
        [[mounts]]
        selector = "#present"
        width = 100
        height = 100

        [[fields]]
        selector = "#absent"

        [[holograms]]
        selector = "#present"
        portal = "unknown-portal"

        [[particle_systems]]
        selector = "#absent"
        "##,
    )
    .unwrap();

    let (_, mut stage) = manual_stage(scene.seed);
    let mounted = scene.mount(&mut stage).unwrap();
    assert_eq!(mounted.components.len(), 1);
    assert!(mounted.systems.is_empty());
    assert_eq!(stage.kind(mounted.components[0]), Some(ComponentKind::Hologram));
}
