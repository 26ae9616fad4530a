pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{ParticleState, NVec3};
pub use simulation::params::Parameters;
pub use simulation::engine::RunState;
pub use simulation::matrix::InteractionMatrix;
pub use simulation::forces::{force, accumulate_forces, BETA};
pub use simulation::integrator::step;
pub use simulation::scenario::Generation;
pub use simulation::controller::{SimulationController, Snapshot};

pub use configuration::config::{Config, ParticleConfig, ScenarioConfig};
pub use configuration::knobs::{Knob, KnobRange};

pub use error::SimError;

pub use visualization::headless::run_headless;
#[cfg(feature = "viewer")]
pub use visualization::plsim_vis3d::run_3d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
