use glam::Vec4;

use crate::phase::Phase;

/// Ambient color per phase (RGBA, normalized channels).
///
/// During a phase the global light blends from that phase's color toward its
/// cyclic successor's color, so the five entries double as the blend
/// endpoints for all five phase boundaries. Configured once at startup; the
/// cycle treats it as read-only.
#[derive(Debug, Clone, Copy)]
pub struct CyclePalette {
    pub sunrise: Vec4,
    pub day: Vec4,
    pub sunset: Vec4,
    pub night: Vec4,
    pub midnight: Vec4,
}

const SUNRISE: Vec4 = Vec4::new(1.0, 0.88, 0.75, 1.0);
const DAY: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
const SUNSET: Vec4 = Vec4::new(1.0, 0.85, 0.72, 1.0);
const NIGHT: Vec4 = Vec4::new(0.65, 0.68, 0.92, 1.0);
const MIDNIGHT: Vec4 = Vec4::new(0.42, 0.45, 0.72, 1.0);

impl Default for CyclePalette {
    fn default() -> Self {
        Self {
            sunrise: SUNRISE,
            day: DAY,
            sunset: SUNSET,
            night: NIGHT,
            midnight: MIDNIGHT,
        }
    }
}

impl CyclePalette {
    /// The configured color for `phase`.
    pub fn color(&self, phase: Phase) -> Vec4 {
        match phase {
            Phase::Sunrise => self.sunrise,
            Phase::Day => self.day,
            Phase::Sunset => self.sunset,
            Phase::Night => self.night,
            Phase::Midnight => self.midnight,
        }
    }

    /// Blend endpoints for `phase`: its own color and its successor's.
    pub fn pair(&self, phase: Phase) -> (Vec4, Vec4) {
        (self.color(phase), self.color(phase.next()))
    }

    /// Interpolated global light color at normalized `progress` through
    /// `phase`.
    ///
    /// The blend factor is the progress value itself, so the color tracks
    /// phase time rather than frame rate.
    pub fn blend(&self, phase: Phase, progress: f32) -> Vec4 {
        let (start, end) = self.pair(phase);
        start.lerp(end, progress.clamp(0.0, 1.0))
    }
}
