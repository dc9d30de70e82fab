//! Fixed-step fourth order Runge-Kutta integration of a body's motion around
//! the central mass.

use std::convert::TryFrom;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nalgebra::Vector2;

use crate::astro::{CartesianState, Gravity};
use crate::error::{Error, Result};
use crate::trajectory::Trajectory;

/// One Earth day, in seconds
pub const DEFAULT_STEP: f64 = 86_400.0;

/// Converts a signed step count, as it arrives from a catalog or the command
/// line, into one the integrator accepts.
pub fn step_count(n: i64) -> Result<usize> {
    usize::try_from(n)
        .map_err(|_| Error::InvalidArgument(format!("step count must be non-negative, got {}", n)))
}

/// Shared flag for stopping long integrations early. Clones observe the same
/// flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rk4 {
    gravity: Gravity,
    step: f64,
}

impl Rk4 {
    /// `step` may be negative, which integrates backwards in time.
    pub fn new(gravity: Gravity, step: f64) -> Result<Self> {
        #[allow(clippy::float_cmp)]
        let is_zero = step == 0.0;
        if !step.is_finite() || is_zero {
            return Err(Error::InvalidArgument(format!(
                "time step must be finite and non-zero, got {}",
                step
            )));
        }

        Ok(Rk4 { gravity, step })
    }

    /// Advances `state` by one step.
    ///
    /// The k's are velocity increments and the l's position increments. The
    /// force is sampled at the current state, twice at the midpoint (using the
    /// previous stage's increments), and once at the far end.
    pub fn step(&self, state: &CartesianState) -> Result<CartesianState> {
        let h = self.step;
        let p0 = state.position();
        let v0 = state.velocity();
        let accel = |p: Vector2<f64>| self.gravity.acceleration(&p);

        let k1 = h * accel(p0)?;
        let l1 = h * v0;

        let k2 = h * accel(p0 + l1 * 0.5)?;
        let l2 = h * (v0 + k1 * 0.5);

        let k3 = h * accel(p0 + l2 * 0.5)?;
        let l3 = h * (v0 + k2 * 0.5);

        let k4 = h * accel(p0 + l3)?;
        let l4 = h * (v0 + k3);

        let position = p0 + (l1 + 2.0 * (l2 + l3) + l4) / 6.0;
        let velocity = v0 + (k1 + 2.0 * (k2 + k3) + k4) / 6.0;

        Ok(CartesianState::new(position, velocity))
    }

    /// Integrates `num_steps` steps starting from `initial`. The returned
    /// trajectory holds the state after each step, not the initial state.
    pub fn trajectory(&self, initial: &CartesianState, num_steps: usize) -> Result<Trajectory> {
        self.run(initial, num_steps, None)
    }

    /// Like [Rk4::trajectory], but gives up with [Error::Cancelled] once
    /// `cancel` is set.
    pub fn trajectory_with_cancel(
        &self,
        initial: &CartesianState,
        num_steps: usize,
        cancel: &CancelToken,
    ) -> Result<Trajectory> {
        self.run(initial, num_steps, Some(cancel))
    }

    fn run(
        &self,
        initial: &CartesianState,
        num_steps: usize,
        cancel: Option<&CancelToken>,
    ) -> Result<Trajectory> {
        let mut states = Vec::with_capacity(num_steps);
        let mut state = *initial;

        for i in 0..num_steps {
            if cancel.map_or(false, CancelToken::is_cancelled) {
                return Err(Error::Cancelled { completed: i });
            }

            state = self.step(&state)?;
            if !state.is_finite() {
                return Err(Error::NumericInstability { step: i + 1 });
            }
            states.push(state);
        }

        Ok(Trajectory::new(self.step, states))
    }
}
