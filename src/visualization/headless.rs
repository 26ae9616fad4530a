//! Window-less driver loop
//!
//! Stands in for the render loop when no display is wanted: ticks the
//! controller a fixed number of times and logs progress instead of drawing.

use std::time::Instant;

use tracing::info;

use crate::simulation::controller::SimulationController;

/// Run `steps` ticks, logging mean speed every `report_every` steps
///
/// The controller is started first, so a scenario that begins stopped still
/// advances. Returns the controller for inspection.
pub fn run_headless(
    mut controller: SimulationController,
    steps: u64,
    report_every: u64,
) -> SimulationController {
    info!(
        "run_headless: {} particles, {} types, {} steps",
        controller.snapshot().particle_count,
        controller.snapshot().type_count,
        steps
    );

    controller.start();
    let t0 = Instant::now();

    for n in 1..=steps {
        let snapshot = controller.tick();
        if report_every > 0 && (n % report_every == 0 || n == steps) {
            info!(
                step = snapshot.steps,
                mean_speed = snapshot.mean_speed(),
                elapsed_s = t0.elapsed().as_secs_f64(),
                "run_headless: progress"
            );
        }
    }

    controller
}
