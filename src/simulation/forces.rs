//! Force law and all-pairs force accumulation for particle life
//!
//! [`force`] maps a normalized distance and a matrix coefficient to a signed
//! radial magnitude; [`accumulate_forces`] sums it over every ordered pair.

use crate::simulation::matrix::InteractionMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, ParticleState};

/// Normalized radius of the repulsive core
pub const BETA: f64 = 0.3;

/// Signed radial force for normalized distance `r` and coefficient `a`
///
/// - `r < BETA`: repulsion `r / BETA - 1`, ignores `a` entirely
/// - `BETA <= r < 1`: triangular lobe peaking at `(1 + BETA) / 2` with value `a`
/// - `r >= 1`: nothing
///
/// Negative values push the particle away from the other one.
#[inline]
pub fn force(r: f64, a: f64) -> f64 {
    if r < BETA {
        r / BETA - 1.0
    } else if r < 1.0 {
        a * (1.0 - (2.0 * r - 1.0 - BETA).abs() / (1.0 - BETA))
    } else {
        0.0
    }
}

/// Compute the scaled net force on every particle from the current positions
/// - `out[i]` is overwritten with the force on particle `i`, already multiplied
///   by `interaction_radius * dt * force_factor`
///
/// Reads `state` only, so every particle sees the same start-of-step positions.
pub fn accumulate_forces(
    state: &ParticleState,
    matrix: &InteractionMatrix,
    params: &Parameters,
    out: &mut [NVec3],
) {
    let positions = &state.positions;
    let type_ids = &state.type_ids;
    let n = positions.len();
    debug_assert_eq!(out.len(), n);

    let r_max = params.interaction_radius;
    let scale = r_max * params.dt * params.force_factor;

    for i in 0..n {
        let xi = positions[i];
        let ti = type_ids[i];
        let mut f = NVec3::zeros();

        for j in 0..n {
            if i == j {
                continue;
            }
            // delta points from i to j, so positive f pulls i towards j
            let delta = positions[j] - xi;
            let r = delta.norm();

            // coincident or out of range: no contribution
            if r == 0.0 || r >= r_max {
                continue;
            }

            let a = matrix.get(ti, type_ids[j]);
            f += delta * (force(r / r_max, a) / r);
        }

        out[i] = f * scale;
    }
}
