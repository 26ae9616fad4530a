//! Run/stop/reset control surface for the simulation
//!
//! [`SimulationController`] owns the current [`Generation`] and the
//! [`RunState`]. All mutation goes through it:
//! - `tick` steps the generation once if running,
//! - `start` / `stop` flip the run state and nothing else,
//! - `reset` / `install` swap in a whole new generation without touching the
//!   run state.
//!
//! Readers get a [`Snapshot`] that borrows the controller, so a view of one
//! generation can never outlive a reset or overlap a step.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::configuration::config::{Config, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::RunState;
use crate::simulation::scenario::Generation;
use crate::simulation::states::{self, NVec3};

pub struct SimulationController {
    generation: Generation,
    number: u64, // 0 for the first generation, +1 per reset/install
    run_state: RunState,
    rng: ChaCha8Rng,
}

impl SimulationController {
    /// Stopped controller with a random first generation
    pub fn new(config: Config) -> Result<Self, SimError> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Like [`SimulationController::new`], but every random draw of this
    /// controller, including later resets, comes from `seed`
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, SimError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, mut rng: ChaCha8Rng) -> Result<Self, SimError> {
        let generation = Generation::random(config, &mut rng)?;
        Ok(Self::assemble(generation, rng))
    }

    /// Controller for a scenario file; starts running if the scenario says so
    pub fn from_scenario(scenario: &ScenarioConfig) -> Result<Self, SimError> {
        let mut rng = match scenario.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let generation = Generation::from_scenario(scenario, &mut rng)?;
        let mut controller = Self::assemble(generation, rng);
        if scenario.running {
            controller.start();
        }
        Ok(controller)
    }

    fn assemble(generation: Generation, rng: ChaCha8Rng) -> Self {
        info!(
            particles = generation.state().len(),
            types = generation.matrix().size(),
            "simulation: initial generation built"
        );
        Self {
            generation,
            number: 0,
            run_state: RunState::Stopped,
            rng,
        }
    }

    pub fn start(&mut self) {
        if self.run_state != RunState::Running {
            debug!("simulation: start");
            self.run_state = RunState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.run_state != RunState::Stopped {
            debug!(steps = self.generation.steps(), "simulation: stop");
            self.run_state = RunState::Stopped;
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    /// One external tick: a full step if running, nothing otherwise.
    /// Returns the state to render either way.
    pub fn tick(&mut self) -> Snapshot<'_> {
        if self.run_state.is_running() {
            self.generation.step();
        }
        self.snapshot()
    }

    /// Replace the current generation with a fresh random one built from `config`
    ///
    /// All-or-nothing: an invalid config is returned as an error and the
    /// current generation keeps running as before. The run state is unchanged.
    pub fn reset(&mut self, config: Config) -> Result<(), SimError> {
        let generation = match Generation::random(config, &mut self.rng) {
            Ok(generation) => generation,
            Err(err) => {
                warn!(%err, "simulation: reset rejected, keeping generation {}", self.number);
                return Err(err);
            }
        };
        self.install(generation);
        Ok(())
    }

    /// Replace the current generation with an already-built one
    pub fn install(&mut self, generation: Generation) {
        self.generation = generation;
        self.number += 1;
        info!(
            generation = self.number,
            particles = self.generation.state().len(),
            types = self.generation.matrix().size(),
            running = self.run_state.is_running(),
            "simulation: new generation"
        );
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let state = self.generation.state();
        let config = self.generation.config();
        Snapshot {
            positions: state.positions(),
            velocities: state.velocities(),
            type_ids: state.type_ids(),
            box_size: config.box_size,
            particle_count: config.particle_count,
            type_count: config.type_count,
            generation: self.number,
            steps: self.generation.steps(),
            run_state: self.run_state,
        }
    }

    pub fn config(&self) -> &Config {
        self.generation.config()
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Steps performed in the current generation
    pub fn steps(&self) -> u64 {
        self.generation.steps()
    }
}

/// Read-only view of the current generation for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub positions: &'a [NVec3],
    pub velocities: &'a [NVec3],
    pub type_ids: &'a [u32],
    pub box_size: f64,
    pub particle_count: u32,
    pub type_count: u32,
    pub generation: u64, // changes whenever the particle arrays were replaced
    pub steps: u64,
    pub run_state: RunState,
}

impl Snapshot<'_> {
    pub fn mean_speed(&self) -> f64 {
        states::mean_speed(self.velocities)
    }
}
