//! # Particle Property Tests
//!
//! Count, speed and color control on a running system, edge behavior of every
//! component, and the detail elements of the portal glyph.

use lumaura_core::{Animated, Color, DrawCommand};
use lumaura_effects::{
    EdgeBehavior, Particle, ParticleField, ParticleSystem, ParticleSystemOptions, PortalHologram,
};

fn running_system(count: usize, seed: u64) -> ParticleSystem {
    let options = ParticleSystemOptions {
        particle_count: count,
        ..Default::default()
    };
    let mut system = ParticleSystem::new(640, 360, options, seed).unwrap();
    system.draw_frame(0.0);
    system
}

/// Test: growing keeps every existing particle and appends fresh ones.
#[test]
fn test_grow_preserves_prefix() {
    let system = running_system(40, 1);
    let handle = system.handle();
    let before = handle.particles();

    handle.set_particle_count(95);
    let after = handle.particles();

    assert_eq!(after.len(), 95);
    assert_eq!(&after[..40], &before[..]);
    for p in &after[40..] {
        assert!((0.0..640.0).contains(&p.x));
        assert!((0.0..360.0).contains(&p.y));
        assert!((1.0..3.0).contains(&p.size));
    }
}

/// Test: shrinking keeps exactly the first N in order.
#[test]
fn test_shrink_keeps_first_n() {
    let system = running_system(100, 2);
    let handle = system.handle();
    let before = handle.particles();

    for n in [100, 64, 7, 1, 0] {
        handle.set_particle_count(n);
        let after = handle.particles();
        assert_eq!(after.len(), n);
        assert_eq!(&after[..], &before[..n]);
    }

    handle.set_particle_count(3);
    assert_eq!(handle.particle_count(), 3);
}

/// Test: speed changes re-randomize every velocity within ±v/2.
#[test]
fn test_speed_rerandomizes_within_bounds() {
    let system = running_system(500, 3);
    let handle = system.handle();
    let before = handle.particles();

    for v in [0.1_f32, 0.5, 1.0, 3.75, 20.0] {
        handle.set_particle_speed(v).unwrap();
        for p in handle.particles() {
            assert!(p.speed_x >= -v / 2.0 && p.speed_x < v / 2.0, "v={v} sx={}", p.speed_x);
            assert!(p.speed_y >= -v / 2.0 && p.speed_y < v / 2.0, "v={v} sy={}", p.speed_y);
        }
    }
    assert!((handle.options().particle_speed - 20.0).abs() < f32::EPSILON);

    // Positions survive, only velocities change
    let after = handle.particles();
    for (old, new) in before.iter().zip(&after) {
        assert_eq!((old.x, old.y, old.size), (new.x, new.y, new.size));
    }
    // Full re-randomization, not a rescale of the old direction
    let rescaled = before
        .iter()
        .zip(&after)
        .filter(|(old, new)| (old.speed_x * 40.0 - new.speed_x).abs() < 1e-4)
        .count();
    assert!(rescaled < 10);
}

/// Test: color changes assign the exact color everywhere.
#[test]
fn test_color_assigned_to_every_particle() {
    let system = running_system(80, 4);
    let handle = system.handle();
    let color = Color::rgba(12, 34, 56, 0.9);

    handle.set_particle_color(color);
    assert!(handle.particles().iter().all(|p| p.color == color));

    // New particles take the stored color too
    handle.set_particle_count(120);
    assert!(handle.particles().iter().all(|p| p.color == color));
}

/// Test: system particles wrap, field and hologram particles bounce.
#[test]
fn test_wrap_and_bounce_stay_distinct() {
    let escaping = Particle {
        x: 99.9,
        y: 50.0,
        size: 1.0,
        speed_x: 2.0,
        speed_y: 0.0,
        opacity: 0.5,
        color: Color::WHITE,
    };

    let mut bounced = escaping;
    bounced.step(EdgeBehavior::Bounce, 100, 100);
    assert!((bounced.x - 101.9).abs() < 1e-4);
    assert!((bounced.speed_x + 2.0).abs() < f32::EPSILON);

    let mut wrapped = escaping;
    wrapped.step(EdgeBehavior::Wrap, 100, 100);
    assert!((wrapped.x + 1.0).abs() < 1e-4);
    assert!((wrapped.speed_x - 2.0).abs() < f32::EPSILON);

    // Driven through the components: field particles never wrap away,
    // system particles never leave the wrap margin.
    let mut field = ParticleField::new(50, 50, 8);
    let mut hologram = PortalHologram::new(50, 50, "xuveteam", true, 8);
    let mut system = running_system(100, 8);
    for frame in 0..3_000 {
        let now = f64::from(frame) / 60.0;
        field.draw_frame(now);
        hologram.draw_frame(now);
        system.draw_frame(now);
    }
    for p in field.particles().iter().chain(hologram.particles()) {
        assert!(p.x > -0.5 && p.x < 50.5);
        assert!(p.y > -0.5 && p.y < 50.5);
    }
    for p in system.handle().particles() {
        assert!(p.x >= -p.size - 0.25 && p.x <= 640.0 + p.size + 0.25);
        assert!(p.y >= -p.size - 0.25 && p.y <= 360.0 + p.size + 0.25);
    }
}

fn count_detail(commands: &[DrawCommand]) -> (usize, usize, usize) {
    let spokes = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Lines { .. }))
        .count();
    let dots = commands
        .iter()
        .filter(|c| {
            matches!(
                c,
                DrawCommand::Circle { fill: Some(_), stroke: None, radius, .. }
                    if (*radius - 10.0).abs() < 1e-4
            )
        })
        .count();
    let rings = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { fill: None, stroke: Some(_), .. }))
        .count();
    (spokes, dots, rings)
}

/// Test: detailed vault hologram draws spokes, center dot and ring.
#[test]
fn test_vault_detail_elements() {
    let mut detailed = PortalHologram::new(300, 300, "xuvevault", true, 5);
    detailed.draw_frame(0.0);
    let commands = detailed.canvas().commands();

    let (spokes, _, rings) = count_detail(commands);
    assert_eq!(spokes, 1);
    assert_eq!(rings, 1);

    // Detail elements follow the two polygons
    match &commands[4] {
        DrawCommand::Lines { segments, stroke } => {
            assert_eq!(segments.len(), 6);
            assert_eq!(stroke.color, Color::rgba(244, 67, 54, 0.3));
        }
        other => panic!("expected spokes, got {other:?}"),
    }
    match &commands[5] {
        DrawCommand::Circle { radius, fill, .. } => {
            assert!((radius - 10.0).abs() < 1e-4);
            assert_eq!(*fill, Some(Color::rgba(244, 67, 54, 0.6)));
        }
        other => panic!("expected center dot, got {other:?}"),
    }
    match &commands[6] {
        DrawCommand::Circle { radius, stroke: Some(stroke), .. } => {
            assert!((radius - 30.0).abs() < 1e-4);
            assert_eq!(stroke.color, Color::rgba(244, 67, 54, 0.2));
        }
        other => panic!("expected ring, got {other:?}"),
    }

    let mut compact = PortalHologram::new(300, 300, "xuvevault", false, 5);
    compact.draw_frame(0.0);
    let (spokes, _, rings) = count_detail(compact.canvas().commands());
    assert_eq!((spokes, rings), (0, 0));
    // No circle other than particles (radius < 4)
    assert!(!compact.canvas().commands().iter().any(
        |c| matches!(c, DrawCommand::Circle { radius, .. } if *radius >= 4.0)
    ));
}
