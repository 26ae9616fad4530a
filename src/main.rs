use plsim::{ScenarioConfig, SimulationController};
use plsim::run_headless;
use plsim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless the path exists as given
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 500)]
    steps: u64,

    /// Log progress every this many ticks in headless mode
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Time the force pass and full ticks for a few population sizes
    #[arg(long)]
    bench: bool,

    /// Print per-tick cost over a range of population sizes as CSV
    #[arg(long)]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

// bevy installs its own subscriber through LogPlugin, so only the window-less paths call this
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench || args.bench_curve {
        init_logging();
        if args.bench {
            bench_step()?;
        }
        if args.bench_curve {
            bench_step_curve()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let controller = SimulationController::from_scenario(&scenario_cfg)
        .with_context(|| format!("invalid scenario {}", args.file_name))?;

    if args.headless || !cfg!(feature = "viewer") {
        init_logging();
        if !args.headless {
            tracing::warn!("built without the `viewer` feature, running headless");
        }
        let controller = run_headless(controller, args.steps, args.report_every);
        tracing::info!(
            steps = controller.steps(),
            mean_speed = controller.snapshot().mean_speed(),
            "done"
        );
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    plsim::run_3d(controller);

    Ok(())
}
