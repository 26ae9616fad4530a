//! Fixed-step integrator for particle life
//!
//! First-order Euler with friction applied once per step:
//! `v = v * friction_factor + F`, then `x += v * dt`, then hard walls.
//! `friction_factor` is derived for exactly this scheme, so swapping in a
//! higher-order method changes what the friction half-life means.

use super::forces::accumulate_forces;
use super::matrix::InteractionMatrix;
use super::params::Parameters;
use super::states::{NVec3, ParticleState};

/// Advance the particle state by one step of `params.dt`
/// All forces are evaluated before any particle moves, then velocities,
/// positions and wall reflections are applied in place.
pub fn step(state: &mut ParticleState, matrix: &InteractionMatrix, params: &Parameters) {
    let n = state.len();
    if n == 0 { // no particles, return
        return;
    }

    // F_n from x_n for every particle
    let mut forces = vec![NVec3::zeros(); n];
    accumulate_forces(state, matrix, params, &mut forces);

    let ParticleState {
        positions,
        velocities,
        ..
    } = state;

    for ((x, v), f) in positions.iter_mut().zip(velocities.iter_mut()).zip(forces.iter()) {
        // Kick with damping: v_n+1 = v_n * friction + F_n
        *v = *v * params.friction_factor + *f;

        // Drift: x_n+1 = x_n + dt * v_n+1
        *x += *v * params.dt;

        reflect_walls(x, v, params.half_box);
    }
}

/// Hard walls: per axis, a coordinate outside `[-half_box, half_box]` is
/// clamped onto the face and its velocity component is negated.
/// Clamp and flip always happen together.
fn reflect_walls(x: &mut NVec3, v: &mut NVec3, half_box: f64) {
    for axis in 0..3 {
        if x[axis] < -half_box || x[axis] > half_box {
            v[axis] = -v[axis];
            x[axis] = x[axis].clamp(-half_box, half_box);
        }
    }
}
