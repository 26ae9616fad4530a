//! Build fully-initialized simulation generations from configuration
//!
//! A [`Generation`] is the runtime bundle the controller owns:
//! - the `Config` it was built from
//! - derived numerical parameters (`Parameters`)
//! - the interaction matrix for this generation
//! - particle state (`ParticleState`)
//!
//! Every constructor validates before it returns, so a `Generation` value is
//! always internally consistent: array lengths match `particle_count`, every
//! type id is below `type_count`, every position lies inside the box.

use rand::Rng;

use crate::configuration::config::{Config, ParticleConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::integrator;
use crate::simulation::matrix::InteractionMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, ParticleState};

#[derive(Debug, Clone)]
pub struct Generation {
    config: Config,
    params: Parameters,
    matrix: InteractionMatrix,
    state: ParticleState,
    steps: u64,
}

impl Generation {
    /// Fresh random generation: new matrix, random positions and types, zero velocity
    pub fn random<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Result<Self, SimError> {
        config.validate()?;

        let params = Parameters::from_config(&config);
        let matrix = InteractionMatrix::random(config.type_count as usize, rng);
        let state = ParticleState::random(config.particle_count, config.type_count, &params, rng);

        Ok(Self {
            config,
            params,
            matrix,
            state,
            steps: 0,
        })
    }

    /// Generation from caller-provided parts, checked against `config`
    pub fn from_parts(
        config: Config,
        matrix: InteractionMatrix,
        state: ParticleState,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let params = Parameters::from_config(&config);

        let type_count = config.type_count;
        if matrix.size() != type_count as usize {
            return Err(SimError::MatrixRows {
                rows: matrix.size(),
                expected: type_count as usize,
            });
        }
        if state.len() != config.particle_count as usize {
            return Err(SimError::ParticleCountMismatch {
                found: state.len(),
                expected: config.particle_count as usize,
            });
        }

        let h = params.half_box;
        for (index, ((x, v), &type_id)) in state
            .positions
            .iter()
            .zip(state.velocities.iter())
            .zip(state.type_ids.iter())
            .enumerate()
        {
            if type_id >= type_count {
                return Err(SimError::TypeIdOutOfRange {
                    index,
                    type_id,
                    type_count,
                });
            }
            // written so that NaN components are rejected too
            if !x.iter().all(|c| *c >= -h && *c <= h) {
                return Err(SimError::PositionOutsideBox {
                    index,
                    position: [x.x, x.y, x.z],
                    half_box: h,
                });
            }
            if !v.iter().all(|c| c.is_finite()) {
                return Err(SimError::NonFinite { index, field: "v" });
            }
        }

        Ok(Self {
            config,
            params,
            matrix,
            state,
            steps: 0,
        })
    }

    /// Generation described by a scenario file
    ///
    /// A pinned `matrix` or `particles` list is used as given; whatever is
    /// missing is drawn from `rng` the same way [`Generation::random`] does.
    pub fn from_scenario<R: Rng + ?Sized>(
        scenario: &ScenarioConfig,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let config = scenario.parameters;
        config.validate()?;
        let params = Parameters::from_config(&config);

        // Matrix: pinned rows or random
        let matrix = match &scenario.matrix {
            Some(rows) => InteractionMatrix::from_rows(rows)?,
            None => InteractionMatrix::random(config.type_count as usize, rng),
        };

        // Particles: map `ParticleConfig` -> struct-of-arrays state
        let state = match &scenario.particles {
            Some(particles) => state_from_particles(particles)?,
            None => ParticleState::random(config.particle_count, config.type_count, &params, rng),
        };

        Self::from_parts(config, matrix, state)
    }

    /// Advance this generation by one integrator step
    pub fn step(&mut self) {
        integrator::step(&mut self.state, &self.matrix, &self.params);
        self.steps += 1;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn matrix(&self) -> &InteractionMatrix {
        &self.matrix
    }

    pub fn state(&self) -> &ParticleState {
        &self.state
    }

    /// Number of steps performed since this generation was built
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

fn state_from_particles(particles: &[ParticleConfig]) -> Result<ParticleState, SimError> {
    let mut positions = Vec::with_capacity(particles.len());
    let mut velocities = Vec::with_capacity(particles.len());
    let mut type_ids = Vec::with_capacity(particles.len());

    for (index, pc) in particles.iter().enumerate() {
        positions.push(vec3(index, "x", &pc.x)?);
        velocities.push(match &pc.v {
            Some(v) => vec3(index, "v", v)?,
            None => NVec3::zeros(),
        });
        type_ids.push(pc.type_id);
    }

    ParticleState::from_parts(positions, velocities, type_ids)
}

fn vec3(index: usize, field: &'static str, components: &[f64]) -> Result<NVec3, SimError> {
    match components {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::MalformedVector {
            index,
            field,
            len: components.len(),
        }),
    }
}
