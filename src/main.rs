use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use planetary_motion::file::read_file;
use planetary_motion::integrator::{step_count, CancelToken, DEFAULT_STEP};
use planetary_motion::render::draw_orbits;
use planetary_motion::simulation::{simulate, SimulationConfig};

// The outer planets take decades to go around and dwarf the inner ones, so
// they are left out unless asked for.
const DEFAULT_BODIES: [&str; 4] = ["Mercury", "Venus", "Earth", "Mars"];

/// Integrates planetary orbits around a fixed star and plots them.
#[derive(Debug, Parser)]
struct Args {
    /// Body catalog to load
    #[arg(long, default_value = "solar-system.txt")]
    catalog: PathBuf,

    /// Bodies to plot (defaults to the inner planets)
    #[arg(short, long)]
    bodies: Vec<String>,

    /// Time step, in seconds
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,

    /// Number of steps for every body, instead of each body's own period
    #[arg(long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Where to write the plot
    #[arg(short, long, default_value = "plots/orbits.png")]
    output: PathBuf,

    /// Plot width and height, in pixels
    #[arg(long, default_value_t = 800)]
    size: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let orrery = read_file(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;

    let names: Vec<&str> = if args.bodies.is_empty() {
        DEFAULT_BODIES.to_vec()
    } else {
        args.bodies.iter().map(String::as_str).collect()
    };
    let ids = names
        .iter()
        .map(|name| orrery.find(name).map(|body| body.id))
        .collect::<Result<Vec<_>, _>>()?;

    let config = SimulationConfig {
        step: args.step,
        steps_override: args.steps.map(step_count).transpose()?,
        ..SimulationConfig::default()
    };
    let results = simulate(&orrery, &ids, &config, &CancelToken::new())?;

    if let Some(dir) = args.output.parent() {
        fs::create_dir_all(dir)?;
    }
    let orbits = results
        .iter()
        .map(|(id, trajectory)| orrery.get_body(*id).map(|body| (body.name(), trajectory)))
        .collect::<Result<Vec<_>, _>>()?;
    draw_orbits(&args.output, &orbits, (args.size, args.size))?;

    info!(output = %args.output.display(), "wrote plot");
    Ok(())
}
