use thiserror::Error;

use crate::clock::CycleClock;
use crate::effects::{LightSink, ParticleEmitter, SceneEffectsBinder, SceneLight};
use crate::palette::CyclePalette;
use crate::phase::{Phase, PhaseSequencer};

/// Startup configuration for the cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleConfig {
    /// Seconds per phase.
    pub period: f32,
    pub palette: CyclePalette,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            period: 60.0,
            palette: CyclePalette::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CycleConfigError {
    #[error("cycle period must be a positive number of seconds, got {0}")]
    InvalidPeriod(f32),
}

/// Drives the whole day/night cycle: advances the clock, steps the phase on
/// rollover, blends the global light color, and applies per-phase scene
/// effects.
///
/// One `tick(dt)` per frame from the host update loop; everything here is
/// single-threaded and owned by the controller for its lifetime.
pub struct CycleController {
    sequencer: PhaseSequencer,
    clock: CycleClock,
    palette: CyclePalette,
    global_light: Box<dyn LightSink>,
    effects: SceneEffectsBinder,
    paused: bool,
}

impl CycleController {
    /// Build the controller and push the sunrise start color into the sink
    /// so the scene is lit correctly before the first tick.
    pub fn new(
        config: CycleConfig,
        mut global_light: Box<dyn LightSink>,
        map_lights: Vec<Box<dyn SceneLight>>,
        particles: Box<dyn ParticleEmitter>,
    ) -> Result<Self, CycleConfigError> {
        if !config.period.is_finite() || config.period <= 0.0 {
            return Err(CycleConfigError::InvalidPeriod(config.period));
        }
        let sequencer = PhaseSequencer::new();
        global_light.set_color(config.palette.color(sequencer.current()));
        Ok(Self {
            sequencer,
            clock: CycleClock::new(config.period),
            palette: config.palette,
            global_light,
            effects: SceneEffectsBinder::new(map_lights, particles),
            paused: false,
        })
    }

    /// Advance the cycle by `dt` seconds (non-negative, host-guaranteed).
    ///
    /// A paused controller ignores ticks entirely: no time passes and no
    /// scene object is touched.
    pub fn tick(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        if self.clock.advance(dt) {
            let prev = self.sequencer.current();
            let now = self.sequencer.advance();
            log::debug!("phase {} -> {}", prev.label(), now.label());
        }

        let phase = self.sequencer.current();
        self.effects.apply(phase);
        let color = self.palette.blend(phase, self.clock.progress());
        self.global_light.set_color(color);
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.current()
    }

    /// Seconds into the current phase, in `[0, period)`.
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Normalized progress through the current phase, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Jump to the start of `phase` (debug/tuning control).
    ///
    /// The sink gets the target phase's start color right away; effects
    /// directives follow on the next tick.
    pub fn skip_to(&mut self, phase: Phase) {
        self.sequencer.reset_to(phase);
        self.clock.reset();
        self.global_light.set_color(self.palette.color(phase));
    }
}
