//! Control-surface ranges for editing a [`Config`] at runtime
//!
//! These bounds are policy of whatever panel edits the parameters; `reset`
//! itself only enforces the constraints of [`Config::validate`]. `time_step`
//! has no knob and stays fixed.

use super::config::Config;

/// One editable `Config` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    MaxDistance,
    ForceFactor,
    FrictionHalfLife,
    ParticlePopulation,
    ParticleTypes,
    BoxSize,
}

/// Inclusive range and increment of a knob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Knob {
    pub const ALL: [Knob; 6] = [
        Knob::MaxDistance,
        Knob::ForceFactor,
        Knob::FrictionHalfLife,
        Knob::ParticlePopulation,
        Knob::ParticleTypes,
        Knob::BoxSize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Knob::MaxDistance => "Max Distance",
            Knob::ForceFactor => "Force Factor",
            Knob::FrictionHalfLife => "Friction Half Life",
            Knob::ParticlePopulation => "Particle Population",
            Knob::ParticleTypes => "Particle Types",
            Knob::BoxSize => "Box Size",
        }
    }

    pub fn range(self) -> KnobRange {
        let (min, max, step) = match self {
            Knob::MaxDistance => (0.01, 1.0, 0.01),
            Knob::ForceFactor => (0.1, 20.0, 0.1),
            Knob::FrictionHalfLife => (0.01, 1.0, 0.01),
            Knob::ParticlePopulation => (100.0, 5000.0, 100.0),
            Knob::ParticleTypes => (2.0, 20.0, 1.0),
            Knob::BoxSize => (1.0, 10.0, 0.1),
        };
        KnobRange { min, max, step }
    }

    /// The knob after this one, wrapping around
    pub fn next(self) -> Knob {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn get(self, cfg: &Config) -> f64 {
        match self {
            Knob::MaxDistance => cfg.max_distance_fraction,
            Knob::ForceFactor => cfg.force_factor,
            Knob::FrictionHalfLife => cfg.friction_half_life,
            Knob::ParticlePopulation => cfg.particle_count as f64,
            Knob::ParticleTypes => cfg.type_count as f64,
            Knob::BoxSize => cfg.box_size,
        }
    }

    fn set(self, cfg: &mut Config, value: f64) {
        match self {
            Knob::MaxDistance => cfg.max_distance_fraction = value,
            Knob::ForceFactor => cfg.force_factor = value,
            Knob::FrictionHalfLife => cfg.friction_half_life = value,
            Knob::ParticlePopulation => cfg.particle_count = value.round() as u32,
            Knob::ParticleTypes => cfg.type_count = value.round() as u32,
            Knob::BoxSize => cfg.box_size = value,
        }
    }
}

impl Config {
    /// Move one field by `steps` increments of its knob, snapped to a multiple
    /// of the step and clamped to the knob's range
    ///
    /// Returns the new value. A field that starts outside the range is pulled
    /// back into it even with `steps == 0`.
    pub fn nudge(&mut self, knob: Knob, steps: i32) -> f64 {
        let range = knob.range();
        let value = range.snap(knob.get(self) + steps as f64 * range.step);
        knob.set(self, value.clamp(range.min, range.max));
        knob.get(self)
    }
}

impl KnobRange {
    /// Nearest multiple of `step`
    ///
    /// Fractional steps divide by the whole number `1 / step`, so 0.1 + 0.01
    /// lands on the literal 0.11 instead of 0.11000000000000001.
    pub fn snap(&self, value: f64) -> f64 {
        if self.step >= 1.0 {
            (value / self.step).round() * self.step
        } else {
            let per_unit = (1.0 / self.step).round();
            (value * per_unit).round() / per_unit
        }
    }
}
