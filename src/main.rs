//! Headless demo host: drives the cycle with a real frame loop and logs what
//! a scene would see. `RUST_LOG=info cargo run` to watch a couple of days go
//! by.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use glam::Vec4;
use instant::Instant;

use daycycle::{CycleConfig, CycleController, LightSink, ParticleEmitter, Phase, SceneLight};

/// Target simulation tick rate (seconds per tick).
const TICK_RATE: f64 = 1.0 / 60.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// Seconds per phase, short so a full in-game day fits in a 15s run.
const DEMO_PERIOD_SECS: f32 = 3.0;
/// How many full days to simulate before exiting.
const DEMO_DAYS: u32 = 2;
/// How often to log cycle status (seconds).
const STATUS_LOG_INTERVAL: f64 = 1.0;

/// Shared ambient color cell standing in for the scene's global light.
struct AmbientLight(Rc<Cell<Vec4>>);

impl LightSink for AmbientLight {
    fn set_color(&mut self, color: Vec4) {
        self.0.set(color);
    }
}

/// A named map light that logs state changes and swallows repeats.
struct LampPost {
    name: &'static str,
    lit: Option<bool>,
}

impl LampPost {
    fn new(name: &'static str) -> Self {
        Self { name, lit: None }
    }
}

impl SceneLight for LampPost {
    fn set_active(&mut self, active: bool) {
        if self.lit != Some(active) {
            self.lit = Some(active);
            log::info!("{}: {}", self.name, if active { "lit" } else { "dark" });
        }
    }
}

/// Ambient particle stand-in, idempotent like a real emitter.
struct SunMotes {
    playing: bool,
}

impl ParticleEmitter for SunMotes {
    fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            log::info!("sun motes: playing");
        }
    }

    fn stop(&mut self) {
        if self.playing {
            self.playing = false;
            log::info!("sun motes: stopped");
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let ambient = Rc::new(Cell::new(Vec4::ZERO));

    let mut controller = CycleController::new(
        CycleConfig {
            period: DEMO_PERIOD_SECS,
            ..CycleConfig::default()
        },
        Box::new(AmbientLight(ambient.clone())),
        vec![
            Box::new(LampPost::new("lamp post")),
            Box::new(LampPost::new("tavern window")),
        ],
        Box::new(SunMotes { playing: false }),
    )?;

    log::info!(
        "cycle started: {} phases x {DEMO_PERIOD_SECS}s, simulating {DEMO_DAYS} days",
        Phase::all().len()
    );

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f64;
    let mut last_status = Instant::now();
    let mut last_phase = controller.phase();
    let mut days_done = 0u32;

    while days_done < DEMO_DAYS {
        std::thread::sleep(Duration::from_millis(8));

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        accumulator += dt;
        if accumulator > MAX_ACCUMULATOR {
            accumulator = MAX_ACCUMULATOR;
        }
        while accumulator >= TICK_RATE {
            controller.tick(TICK_RATE as f32);
            accumulator -= TICK_RATE;
        }

        let phase = controller.phase();
        if phase != last_phase {
            log::info!("{} begins", phase.label());
            if phase == Phase::Sunrise {
                days_done += 1;
                log::info!("day {days_done} complete");
            }
            last_phase = phase;
        }

        if last_status.elapsed().as_secs_f64() >= STATUS_LOG_INTERVAL {
            let c = ambient.get();
            log::info!(
                "{} {:>3.0}% | ambient ({:.2}, {:.2}, {:.2})",
                phase.label(),
                controller.progress() * 100.0,
                c.x,
                c.y,
                c.z,
            );
            last_status = Instant::now();
        }
    }

    log::info!("demo finished");
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("daycycle demo starting up");

    if let Err(e) = run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
