use rayon::prelude::*;
use tracing::{debug, info};

use crate::astro::NEWTON_G;
use crate::error::{Error, Result};
use crate::integrator::{CancelToken, Rk4, DEFAULT_STEP};
use crate::orrery::{Body, BodyID, Orrery};
use crate::trajectory::Trajectory;

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Time step in seconds
    pub step: f64,
    /// Number of steps to run every body for. When unset, each body runs for
    /// its own period.
    pub steps_override: Option<usize>,
    pub gravitational_constant: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            step: DEFAULT_STEP,
            steps_override: None,
            gravitational_constant: NEWTON_G,
        }
    }
}

/// Integrates each of `ids` around the orrery's star, in parallel. Results
/// come back in the order requested.
///
/// Bodies don't pull on each other, so the runs are independent. If any run
/// fails, the whole simulation fails.
pub fn simulate(
    orrery: &Orrery,
    ids: &[BodyID],
    config: &SimulationConfig,
    cancel: &CancelToken,
) -> Result<Vec<(BodyID, Trajectory)>> {
    let gravity = orrery.gravity(config.gravitational_constant)?;
    let rk4 = Rk4::new(gravity, config.step)?;

    info!(
        bodies = ids.len(),
        step = config.step,
        star = orrery.star().name(),
        "simulating"
    );

    ids.par_iter()
        .map(|&id| -> Result<(BodyID, Trajectory)> {
            let body = orrery.get_body(id)?;
            let trajectory = simulate_body(&rk4, body, config.steps_override, cancel)?;
            Ok((id, trajectory))
        })
        .collect()
}

fn simulate_body(
    rk4: &Rk4,
    body: &Body,
    steps_override: Option<usize>,
    cancel: &CancelToken,
) -> Result<Trajectory> {
    let initial = body.state().ok_or_else(|| {
        Error::InvalidArgument(format!("{} is fixed at the origin", body.name()))
    })?;
    let num_steps = steps_override.unwrap_or(body.info.period_steps);

    debug!(body = body.name(), num_steps, "integrating");
    let trajectory = rk4.trajectory_with_cancel(initial, num_steps, cancel)?;
    debug!(
        body = body.name(),
        min_radius = ?trajectory.min_radius(),
        max_radius = ?trajectory.max_radius(),
        "done"
    );

    Ok(trajectory)
}
