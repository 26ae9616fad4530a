pub mod config;
pub mod knobs;
