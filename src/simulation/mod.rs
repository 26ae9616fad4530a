pub mod states;
pub mod params;
pub mod engine;
pub mod matrix;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod controller;
