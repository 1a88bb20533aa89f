//! # LUMAURA Preview
//!
//! Runs a scene headless on a manual clock and logs what each component
//! recorded. Useful for checking a scene file without a browser.
//!
//! ## Usage
//!
//! ```bash
//! lumaura_preview --scene crates/lumaura/data/preview_scene.toml --frames 300 --resize 960x540
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use lumaura::core::{Clock, DrawCommand, ManualClock};
use lumaura::{SceneConfig, Stage};
use tracing::{error, info};

const DEFAULT_SCENE: &str = "crates/lumaura/data/preview_scene.toml";

struct PreviewArgs {
    scene: String,
    frames: u32,
    fps: u32,
    resize: Option<(u32, u32)>,
}

fn parse_size(text: &str) -> Option<(u32, u32)> {
    let (w, h) = text.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

fn parse_args() -> Option<PreviewArgs> {
    // Simple parsing, no external deps
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = PreviewArgs {
        scene: DEFAULT_SCENE.to_owned(),
        frames: 120,
        fps: 60,
        resize: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scene" | "-s" => {
                if i + 1 < args.len() {
                    parsed.scene.clone_from(&args[i + 1]);
                    i += 1;
                }
            }
            "--frames" | "-n" => {
                if i + 1 < args.len() {
                    parsed.frames = args[i + 1].parse().unwrap_or(120);
                    i += 1;
                }
            }
            "--fps" | "-f" => {
                if i + 1 < args.len() {
                    parsed.fps = args[i + 1].parse().unwrap_or(60).max(1);
                    i += 1;
                }
            }
            "--resize" | "-r" => {
                if i + 1 < args.len() {
                    parsed.resize = parse_size(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: lumaura_preview [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --scene <PATH>      Scene TOML (default: {DEFAULT_SCENE})");
                println!("  -n, --frames <NUM>      Frames to draw (default: 120)");
                println!("  -f, --fps <RATE>        Simulated frame rate (default: 60)");
                println!("  -r, --resize <W>x<H>    Resize every mount halfway through");
                println!("  -h, --help              Show this help");
                return None;
            }
            _ => {}
        }
        i += 1;
    }
    Some(parsed)
}

fn summarize(commands: &[DrawCommand]) -> (usize, usize, usize) {
    let mut circles = 0;
    let mut polygons = 0;
    let mut other = 0;
    for command in commands {
        match command {
            DrawCommand::Circle { .. } => circles += 1,
            DrawCommand::Polygon { .. } => polygons += 1,
            _ => other += 1,
        }
    }
    (circles, polygons, other)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let Some(args) = parse_args() else {
        return ExitCode::SUCCESS;
    };

    let scene = match SceneConfig::load(&args.scene) {
        Ok(scene) => scene,
        Err(e) => {
            error!(error = %e, "Cannot load scene");
            return ExitCode::FAILURE;
        }
    };

    let clock = Arc::new(ManualClock::new(0.0));
    let mut stage = Stage::new(Arc::clone(&clock) as Arc<dyn Clock>, scene.seed);
    let mounted = match scene.mount(&mut stage) {
        Ok(mounted) => mounted,
        Err(e) => {
            error!(error = %e, "Cannot mount scene");
            return ExitCode::FAILURE;
        }
    };

    info!(
        frames = args.frames,
        fps = args.fps,
        components = stage.len(),
        "Starting preview"
    );

    let frame_secs = 1.0 / f64::from(args.fps);
    let halfway = args.frames / 2;
    for frame in 0..args.frames {
        if frame == halfway {
            if let Some((width, height)) = args.resize {
                for mount in &scene.mounts {
                    if let Some(handle) = mounted.document.get(&mount.selector) {
                        handle.set_size(width, height);
                    }
                }
                let resized = stage.dispatch_resize();
                info!(width, height, resized, "Mounts resized");
            }
        }
        clock.advance(frame_secs);
        stage.frame();
    }

    for id in stage.component_ids().collect::<Vec<_>>() {
        let (Some(canvas), Some(kind), Some(frames)) =
            (stage.canvas(id), stage.kind(id), stage.frames(id))
        else {
            continue;
        };
        let (circles, polygons, other) = summarize(canvas.commands());
        info!(
            %id,
            ?kind,
            width = canvas.width(),
            height = canvas.height(),
            frames,
            commands = canvas.commands().len(),
            circles,
            polygons,
            other,
            "Last frame"
        );
    }
    for system in &mounted.systems {
        info!(id = %system.id, particles = system.handle.particle_count(), "Particle system");
    }

    stage.stop_all();
    ExitCode::SUCCESS
}
