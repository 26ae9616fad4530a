//! Core state types for the particle-life simulation.
//!
//! Particles are stored as a struct of arrays: one `Vec` of positions, one of
//! velocities and one of type ids, all of the same length. The all-pairs force
//! loop walks these arrays directly.

use nalgebra::Vector3;
use rand::Rng;

use crate::error::SimError;
use crate::simulation::params::Parameters;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub(crate) positions: Vec<NVec3>,  // positions inside [-half_box, half_box]^3
    pub(crate) velocities: Vec<NVec3>, // velocities
    pub(crate) type_ids: Vec<u32>,     // row/column into the interaction matrix
}

impl ParticleState {
    /// Fresh random population: uniform positions in the box, zero velocity,
    /// uniform types in `[0, type_count)`
    pub fn random<R: Rng + ?Sized>(
        particle_count: u32,
        type_count: u32,
        params: &Parameters,
        rng: &mut R,
    ) -> Self {
        let n = particle_count as usize;
        let h = params.half_box;

        let mut positions = Vec::with_capacity(n);
        let mut type_ids = Vec::with_capacity(n);
        for _ in 0..n {
            positions.push(NVec3::new(
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
            ));
            type_ids.push(rng.gen_range(0..type_count));
        }

        Self {
            positions,
            velocities: vec![NVec3::zeros(); n],
            type_ids,
        }
    }

    /// Assemble a state from explicit arrays
    ///
    /// Only the lengths are checked here; bounds against a particular box and
    /// type count are checked when the state joins a generation.
    pub fn from_parts(
        positions: Vec<NVec3>,
        velocities: Vec<NVec3>,
        type_ids: Vec<u32>,
    ) -> Result<Self, SimError> {
        if positions.len() != velocities.len() || positions.len() != type_ids.len() {
            return Err(SimError::ArrayLengthMismatch {
                positions: positions.len(),
                velocities: velocities.len(),
                type_ids: type_ids.len(),
            });
        }
        Ok(Self {
            positions,
            velocities,
            type_ids,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.velocities
    }

    pub fn type_ids(&self) -> &[u32] {
        &self.type_ids
    }

    /// Average velocity magnitude, 0 for an empty state
    pub fn mean_speed(&self) -> f64 {
        mean_speed(&self.velocities)
    }
}

pub(crate) fn mean_speed(velocities: &[NVec3]) -> f64 {
    if velocities.is_empty() {
        return 0.0;
    }
    velocities.iter().map(|v| v.norm()).sum::<f64>() / velocities.len() as f64
}
