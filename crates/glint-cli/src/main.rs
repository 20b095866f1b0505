// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Glint headless driver.
//!
//! Builds the torus-knot scene, replays a scripted pointer drag and wheel
//! across a fixed number of frames, computes the per-frame uniforms a WebGL
//! surface would upload, and persists the resulting orientation to the
//! viewer prefs.
//!
//! # Usage
//! ```text
//! glint --frames 120 --seed 7 --drag 40,-30 --wheel -100
//! ```
//!
//! A JSON summary of the run (knot, frame counts, final scale and MVP) is
//! printed to stdout; logs go to stderr via `RUST_LOG`.

// The driver prints its summary to stdout.
#![allow(clippy::print_stdout)]

mod script;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_app_core::angle::Angle;
use glint_app_core::config_port::{ConfigPort, PrefsConfig};
use glint_app_core::counter::Counter;
use glint_app_core::timer::FrameTimer;
use glint_app_core::toggle::Toggle;
use glint_config_fs::FsConfigStore;
use glint_input::{InputState, PointerEvent};
use glint_math::{Mat4, Vec3};
use glint_scene::{Camera, FrameUniforms, KnotParams, LightToggles, TorusKnot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::script::{events_for_frame, parse_finite, parse_positive, DragVector};

/// Simulated time between frames (~60 Hz).
const FRAME_STEP: Duration = Duration::from_micros(16_667);

#[derive(Parser, Debug)]
#[command(author, version, about = "Glint headless torus-knot scene driver")]
struct Args {
    /// Number of frames to compute
    #[arg(long, default_value_t = 120)]
    frames: u32,
    /// Seed for the knot parameters (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding viewer_prefs.json (platform config dir when omitted)
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Total pointer drag across the run, in pixels
    #[arg(long, value_name = "DX,DY", allow_hyphen_values = true)]
    drag: Option<DragVector>,
    /// Wheel delta applied before the first frame (negative zooms in)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_finite)]
    wheel: Option<f64>,
    /// Viewport width divided by height
    #[arg(long, default_value_t = 16.0 / 9.0, value_parser = parse_positive)]
    aspect: f64,
    /// Spin about the vertical axis, radians per frame
    #[arg(
        long,
        default_value_t = 0.0,
        allow_hyphen_values = true,
        value_parser = parse_finite
    )]
    spin: f64,
    /// Flip a light term for this run (repeatable)
    #[arg(long, value_enum)]
    toggle_light: Vec<Light>,
    /// Do not write the final orientation back to the prefs
    #[arg(long)]
    no_save: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Light {
    Diffuse,
    Ambient,
    Specular,
}

/// Light switches for a run; each flip is logged by its hooks.
struct Lights {
    diffuse: Toggle,
    ambient: Toggle,
    specular: Toggle,
}

impl Lights {
    fn new(initial: LightToggles) -> Self {
        let toggle = |name: &'static str, state: bool| {
            Toggle::new(
                state,
                move || info!(light = name, "light enabled"),
                move || info!(light = name, "light disabled"),
            )
        };
        Self {
            diffuse: toggle("diffuse", initial.diffuse),
            ambient: toggle("ambient", initial.ambient),
            specular: toggle("specular", initial.specular),
        }
    }

    fn flip(&mut self, light: Light) {
        match light {
            Light::Diffuse => self.diffuse.update(None),
            Light::Ambient => self.ambient.update(None),
            Light::Specular => self.specular.update(None),
        }
    }

    fn current(&self) -> LightToggles {
        LightToggles {
            diffuse: self.diffuse.is_enabled(),
            ambient: self.ambient.is_enabled(),
            specular: self.specular.is_enabled(),
        }
    }
}

#[derive(Serialize, Debug)]
struct Summary {
    knot: [u32; 2],
    vertices: usize,
    triangles: usize,
    frames_drawn: u64,
    frames_skipped: u64,
    repeats: u64,
    scale: f64,
    lights: [i32; 3],
    mvp: Vec<f32>,
    orientation: [f64; 4],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let summary = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run(args: &Args) -> Result<Summary> {
    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::at(dir)
            .with_context(|| format!("opening config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("opening platform config dir")?,
    };
    debug!(dir = %store.base().display(), "config store ready");
    let port = PrefsConfig::new(store);
    let mut prefs = port.load_prefs().unwrap_or_default();

    let mut input = InputState::from_prefs(&prefs)?;
    let camera = Camera::from_prefs(&prefs.camera);
    let mut lights = Lights::new(LightToggles::from(&prefs.lights));
    for light in &args.toggle_light {
        lights.flip(*light);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let params = KnotParams::random(&mut rng);
    let mesh = TorusKnot::new(params)
        .build()
        .context("building torus knot mesh")?;
    info!(
        p = params.p,
        q = params.q,
        vertices = mesh.vertices.len(),
        "scene ready"
    );

    let t0 = Instant::now();
    if let Some(delta_y) = args.wheel {
        input.handle(PointerEvent::Wheel { delta_y }, t0)?;
        info!(scale = input.zoom.scale(), "applied wheel");
    }

    let mut drawn = Counter::new();
    let mut skipped = Counter::new();
    let mut repeats = Counter::new();
    let mut spin = Angle::new(args.spin);
    let mut timer = FrameTimer::default();
    timer.start(t0);
    let mut last = None;

    for frame in 0..args.frames {
        let now = t0 + FRAME_STEP * frame;
        if let Some(drag) = args.drag {
            for event in events_for_frame(frame, args.frames, drag) {
                if input.handle(event, now)?.fire {
                    repeats.update();
                }
            }
        }
        for _ in 0..input.repeater.poll(now) {
            repeats.update();
        }

        let rotation = Mat4::rotate(spin.get(), &Vec3::UNIT_Y)?.matmul(&input.rotation.rotation());
        spin.update();
        match FrameUniforms::build(
            &rotation,
            input.zoom.scale(),
            &camera,
            args.aspect,
            lights.current(),
        ) {
            Ok(uniforms) => {
                drawn.update();
                last = Some(uniforms);
            }
            Err(err) => {
                warn!(frame, %err, "skipping degenerate frame");
                skipped.update();
            }
        }

        if let Some(rate) = timer.update(now) {
            info!(frames = rate.frames, fps = rate.fps(), "frame rate");
        }
    }

    input.store_into(&mut prefs);
    if args.no_save {
        debug!("prefs not saved (--no-save)");
    } else {
        port.save_prefs(&prefs);
    }

    Ok(Summary {
        knot: [params.p, params.q],
        vertices: mesh.vertices.len(),
        triangles: mesh.triangle_count(),
        frames_drawn: drawn.get(),
        frames_skipped: skipped.get(),
        repeats: repeats.get(),
        scale: input.zoom.scale(),
        lights: lights.current().as_uniforms(),
        mvp: last.map(|u| u.mvp.as_slice().to_vec()).unwrap_or_default(),
        orientation: prefs.orientation,
    })
}
