//! Derived numerical parameters for the simulation
//!
//! `Parameters` holds the quantities the integrator actually reads,
//! recomputed from a [`Config`] every time a generation is built:
//! - half box extent and interaction radius,
//! - per-step friction factor from the friction half-life,
//! - force scale and step size copied through

use crate::configuration::config::Config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub half_box: f64,           // box_size / 2
    pub interaction_radius: f64, // box_size * max_distance_fraction
    pub friction_factor: f64,    // 0.5^(dt / friction_half_life)
    pub force_factor: f64,       // force scale
    pub dt: f64,                 // step size
}

impl Parameters {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            half_box: cfg.box_size / 2.0,
            interaction_radius: cfg.box_size * cfg.max_distance_fraction,
            friction_factor: 0.5_f64.powf(cfg.time_step / cfg.friction_half_life),
            force_factor: cfg.force_factor,
            dt: cfg.time_step,
        }
    }
}
