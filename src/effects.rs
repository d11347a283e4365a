use glam::Vec4;

use crate::phase::Phase;

/// Global light color sink. The host pushes this into whatever lighting
/// pipeline it runs; the cycle just writes the current color every tick.
pub trait LightSink {
    fn set_color(&mut self, color: Vec4);
}

/// Toggle handle for one auxiliary map light (torches, lamp posts, windows).
///
/// `set_active` must tolerate being called with the current state again;
/// the cycle re-issues directives every tick.
pub trait SceneLight {
    fn set_active(&mut self, active: bool);
}

/// Start/stop handle for the ambient particle effect (sun motes, pollen).
///
/// `play` on a running emitter and `stop` on a stopped one must be no-ops.
pub trait ParticleEmitter {
    fn play(&mut self);
    fn stop(&mut self);
}

/// Per-phase side-effect directives.
///
/// `None` means "leave it alone": the object keeps whatever state the last
/// directive put it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectsPolicy {
    pub aux_lights: Option<bool>,
    pub particles: Option<bool>,
}

/// Directive table, one row per phase.
///
/// Map lights are only ever forced off (at sunrise); no phase switches them
/// back on. TODO: issue `aux_lights: Some(true)` on entering Night once the
/// night palette is tuned for lit windows.
pub fn policy_for(phase: Phase) -> EffectsPolicy {
    match phase {
        Phase::Sunrise => EffectsPolicy {
            aux_lights: Some(false),
            particles: Some(true),
        },
        Phase::Day | Phase::Sunset => EffectsPolicy {
            aux_lights: None,
            particles: None,
        },
        Phase::Night | Phase::Midnight => EffectsPolicy {
            aux_lights: None,
            particles: Some(false),
        },
    }
}

/// Applies the policy table against the injected scene handles.
///
/// The handles are cheap proxies; the scene objects behind them stay
/// host-owned. An empty light collection is valid and applies as a no-op.
pub struct SceneEffectsBinder {
    map_lights: Vec<Box<dyn SceneLight>>,
    particles: Box<dyn ParticleEmitter>,
}

impl SceneEffectsBinder {
    pub fn new(map_lights: Vec<Box<dyn SceneLight>>, particles: Box<dyn ParticleEmitter>) -> Self {
        Self {
            map_lights,
            particles,
        }
    }

    /// Issue the directives for `phase` and return the policy that was
    /// applied. Safe to call every tick.
    pub fn apply(&mut self, phase: Phase) -> EffectsPolicy {
        let policy = policy_for(phase);
        if let Some(active) = policy.aux_lights {
            for light in &mut self.map_lights {
                light.set_active(active);
            }
        }
        match policy.particles {
            Some(true) => self.particles.play(),
            Some(false) => self.particles.stop(),
            None => {}
        }
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Command {
        LightActive(bool),
        Play,
        Stop,
    }

    type Log = Rc<RefCell<Vec<Command>>>;

    struct FakeLight(Log);

    impl SceneLight for FakeLight {
        fn set_active(&mut self, active: bool) {
            self.0.borrow_mut().push(Command::LightActive(active));
        }
    }

    struct FakeEmitter(Log);

    impl ParticleEmitter for FakeEmitter {
        fn play(&mut self) {
            self.0.borrow_mut().push(Command::Play);
        }
        fn stop(&mut self) {
            self.0.borrow_mut().push(Command::Stop);
        }
    }

    fn binder_with_log(light_count: usize) -> (SceneEffectsBinder, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let lights: Vec<Box<dyn SceneLight>> = (0..light_count)
            .map(|_| Box::new(FakeLight(log.clone())) as Box<dyn SceneLight>)
            .collect();
        let emitter = Box::new(FakeEmitter(log.clone()));
        (SceneEffectsBinder::new(lights, emitter), log)
    }

    #[test]
    fn sunrise_disables_lights_and_plays_particles() {
        let (mut binder, log) = binder_with_log(2);
        binder.apply(Phase::Sunrise);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Command::LightActive(false),
                Command::LightActive(false),
                Command::Play
            ]
        );
    }

    #[test]
    fn day_and_sunset_issue_nothing() {
        let (mut binder, log) = binder_with_log(2);
        binder.apply(Phase::Day);
        binder.apply(Phase::Sunset);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn night_and_midnight_stop_particles_only() {
        let (mut binder, log) = binder_with_log(2);
        binder.apply(Phase::Night);
        binder.apply(Phase::Midnight);
        assert_eq!(log.borrow().as_slice(), &[Command::Stop, Command::Stop]);
    }

    #[test]
    fn empty_light_collection_is_a_noop() {
        let (mut binder, log) = binder_with_log(0);
        let policy = binder.apply(Phase::Sunrise);
        assert_eq!(policy.aux_lights, Some(false));
        assert_eq!(log.borrow().as_slice(), &[Command::Play]);
    }

    #[test]
    fn particle_policy_matches_phase_groups() {
        for &phase in Phase::all() {
            let expected = match phase {
                Phase::Sunrise => Some(true),
                Phase::Day | Phase::Sunset => None,
                Phase::Night | Phase::Midnight => Some(false),
            };
            assert_eq!(policy_for(phase).particles, expected);
        }
    }

    #[test]
    fn reapplying_a_phase_repeats_the_same_safe_directives() {
        let (mut binder, log) = binder_with_log(1);
        let first = binder.apply(Phase::Night);
        let second = binder.apply(Phase::Night);
        assert_eq!(first, second);
        // Re-issued stop, nothing else. The callee treats it as a no-op.
        assert_eq!(log.borrow().as_slice(), &[Command::Stop, Command::Stop]);
    }
}
