//! Configuration types for loading particle-life scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`Config`]         – population size, type count and physical constants
//! - [`ParticleConfig`] – optional pinned initial state for one particle
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every field is optional. Missing parameters fall back to [`Config::default`],
//! a missing `matrix` or `particles` list is generated randomly:
//!
//! ```yaml
//! parameters:
//!   particle_count: 2               # number of particles
//!   type_count: 1                   # number of particle types
//!   max_distance_fraction: 1.0      # interaction radius as a fraction of box_size
//!   force_factor: 10.0              # force scale
//!   friction_half_life: 0.04        # seconds for velocity to halve
//!   box_size: 2.0                   # edge length of the cube
//!   time_step: 0.02                 # fixed step size
//!
//! seed: 7                           # optional, repeatable runs on one machine
//! running: true                     # start advancing immediately
//!
//! matrix:                           # type_count x type_count, entries in [-1, 1]
//!   - [ 1.0 ]
//!
//! particles:                        # exactly particle_count entries
//!   - x: [ -0.1, 0.0, 0.0 ]
//!     type_id: 0
//!   - x: [  0.1, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     type_id: 0
//! ```

use serde::Deserialize;

use crate::error::SimError;

/// Population size, type count and physical constants of one generation
///
/// Replaced wholesale on every reset; see [`Config::validate`] for the
/// accepted values.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Config {
    pub particle_count: u32,        // number of particles, >= 1
    pub type_count: u32,            // number of particle types, >= 1
    pub max_distance_fraction: f64, // interaction radius / box size, > 0
    pub force_factor: f64,          // force scale
    pub friction_half_life: f64,    // seconds for velocity to decay to half, > 0
    pub box_size: f64,              // cube edge length, > 0
    pub time_step: f64,             // fixed step size, > 0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            type_count: 6,
            max_distance_fraction: 0.1,
            force_factor: 10.0,
            friction_half_life: 0.04,
            box_size: 2.0,
            time_step: 0.02,
        }
    }
}

impl Config {
    /// Check every field against its constraint
    ///
    /// `force_factor` only has to be finite: zero turns the simulation into
    /// pure friction, negative values invert every interaction.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.particle_count < 1 {
            return Err(invalid("particle_count", "must be at least 1"));
        }
        if self.type_count < 1 {
            return Err(invalid("type_count", "must be at least 1"));
        }
        positive("max_distance_fraction", self.max_distance_fraction)?;
        if !self.force_factor.is_finite() {
            return Err(invalid("force_factor", "must be finite"));
        }
        positive("friction_half_life", self.friction_half_life)?;
        positive("box_size", self.box_size)?;
        positive("time_step", self.time_step)?;

        // Products the integrator multiplies by must not overflow either
        let radius = self.box_size * self.max_distance_fraction;
        if !radius.is_finite() {
            return Err(invalid(
                "max_distance_fraction",
                "box_size * max_distance_fraction overflows",
            ));
        }
        if !(radius * self.time_step * self.force_factor).is_finite() {
            return Err(invalid("force_factor", "force scale overflows"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> SimError {
    SimError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SimError> {
    // NaN fails both comparisons, so it lands here as well
    if !(value > 0.0 && value.is_finite()) {
        return Err(SimError::InvalidConfig {
            field,
            reason: format!("must be positive and finite, got {value}"),
        });
    }
    Ok(())
}

/// Pinned initial state for a single particle
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub x: Vec<f64>,         // initial position, three components inside the box
    pub v: Option<Vec<f64>>, // initial velocity, zero when omitted
    pub type_id: u32,        // particle type, below type_count
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: Config,                    // population and physical constants
    pub seed: Option<u64>,                     // seed for every random draw of the run
    pub running: bool,                         // start in the Running state
    pub matrix: Option<Vec<Vec<f64>>>,         // pinned interaction matrix
    pub particles: Option<Vec<ParticleConfig>>, // pinned initial particle state
}
