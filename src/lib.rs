//! Phased day/night lighting cycle for 2D scenes.
//!
//! A [`CycleController`] steps through five phases (sunrise, day, sunset,
//! night, midnight) on a fixed period, blends a global ambient color between
//! phase endpoints, and toggles map lights and an ambient particle effect
//! through small trait handles the host scene supplies. The host calls
//! [`CycleController::tick`] once per frame with that frame's delta time;
//! nothing here owns a window, a renderer, or a thread.

mod clock;
mod controller;
mod effects;
mod palette;
mod phase;

pub use clock::CycleClock;
pub use controller::{CycleConfig, CycleConfigError, CycleController};
pub use effects::{
    policy_for, EffectsPolicy, LightSink, ParticleEmitter, SceneEffectsBinder, SceneLight,
};
pub use palette::CyclePalette;
pub use phase::{Phase, PhaseSequencer};
