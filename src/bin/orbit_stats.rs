use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use planetary_motion::astro::NEWTON_G;
use planetary_motion::file::read_file;
use planetary_motion::integrator::{CancelToken, DEFAULT_STEP};
use planetary_motion::render::AU;
use planetary_motion::simulation::{simulate, SimulationConfig};

#[derive(Debug, Parser)]
struct Args {
    name: String,

    #[arg(long, default_value = "solar-system.txt")]
    catalog: PathBuf,

    /// Time step, in seconds
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let orrery = read_file(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let body = orrery.find(&args.name)?;
    let initial = match body.state() {
        Some(state) => state,
        None => {
            println!("{} sits at the origin and does not move", body.name());
            return Ok(());
        }
    };

    let config = SimulationConfig {
        step: args.step,
        ..SimulationConfig::default()
    };
    let results = simulate(&orrery, &[body.id], &config, &CancelToken::new())?;
    let trajectory = &results[0].1;
    let gravity = orrery.gravity(NEWTON_G)?;

    println!("Simulated orbit of {}", body.name());
    println!("- Steps: {} x {} s", trajectory.len(), trajectory.step());
    println!("- Duration: {} days", trajectory.duration() / 86400.0);
    println!("- Initial distance: {} AU", initial.radius() / AU);
    if let (Some(min), Some(max)) = (trajectory.min_radius(), trajectory.max_radius()) {
        println!("- Closest approach: {} AU", min / AU);
        println!("- Farthest distance: {} AU", max / AU);
    }
    println!(
        "- Specific orbital energy: {} J/kg",
        initial.specific_energy(&gravity)
    );
    println!(
        "- Max energy drift: {:?}",
        trajectory.max_energy_drift(initial, &gravity)
    );
    println!(
        "- Distance from start at end: {:?}",
        trajectory.closure_error(initial)
    );

    Ok(())
}
