use std::time::Instant;

use crate::configuration::config::Config;
use crate::error::SimError;
use crate::simulation::controller::SimulationController;
use crate::simulation::forces::accumulate_forces;
use crate::simulation::states::NVec3;

/// Helper to build a running controller with `n` particles and the default constants
fn make_controller(n: u32) -> Result<SimulationController, SimError> {
    let config = Config {
        particle_count: n,
        ..Config::default()
    };
    let mut controller = SimulationController::with_seed(config, 42)?;
    controller.start();
    Ok(controller)
}

/// Time the force pass alone against a full tick for a few population sizes
pub fn bench_step() -> Result<(), SimError> {
    // Different population sizes to test, up to the control panel's maximum
    let ns = [200, 400, 800, 1600, 3200, 5000];
    let steps = 3; // ticks per size

    for n in ns {
        let mut controller = make_controller(n)?;

        // Warm up
        controller.tick();

        // Time the all-pairs force pass on its own
        let generation = controller.generation();
        let mut out = vec![NVec3::zeros(); n as usize];
        let t0 = Instant::now();
        accumulate_forces(generation.state(), generation.matrix(), generation.params(), &mut out);
        let dt_forces = t0.elapsed().as_secs_f64();

        // Time full ticks (forces + integration + walls)
        let t1 = Instant::now();
        for _ in 0..steps {
            controller.tick();
        }
        let dt_tick = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, forces = {dt_forces:8.6} s, tick = {dt_tick:8.6} s");
    }

    Ok(())
}

/// Benchmark a full tick for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> Result<(), SimError> {
    println!("N,step_ms");

    // Steps of 200 to give smoother graph
    for n in (200..=5000).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to keep the run short
        let steps = if n <= 1000 { 5 } else { 1 };

        let mut controller = make_controller(n)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            controller.tick();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
