use nalgebra::Vector2;

use crate::astro::{CartesianState, Gravity};

/// The states of one body after each of a run of fixed-length steps.
///
/// The initial state is not part of the trajectory; `states()[0]` is the
/// state one step in.
#[derive(Debug, Clone)]
pub struct Trajectory {
    step: f64,
    states: Vec<CartesianState>,
}

impl Trajectory {
    pub(crate) fn new(step: f64, states: Vec<CartesianState>) -> Self {
        Trajectory { step, states }
    }

    /// Time step between consecutive states, in seconds
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn states(&self) -> &[CartesianState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.step * self.states.len() as f64
    }

    pub fn final_state(&self) -> Option<&CartesianState> {
        self.states.last()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.states.iter().map(CartesianState::position)
    }

    /// Positions as plain (x, y) pairs, ready for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.positions().map(|p| (p.x, p.y)).collect()
    }

    pub fn min_radius(&self) -> Option<f64> {
        self.radii().reduce(f64::min)
    }

    pub fn max_radius(&self) -> Option<f64> {
        self.radii().reduce(f64::max)
    }

    /// Distance between the last position and `initial`, relative to the
    /// initial distance from the origin.
    pub fn closure_error(&self, initial: &CartesianState) -> Option<f64> {
        let last = self.final_state()?;
        Some((last.position() - initial.position()).norm() / initial.radius())
    }

    /// Largest relative deviation of the mechanical energy from that of
    /// `initial`, over every state in the trajectory.
    ///
    /// `None` for an empty trajectory, or when `initial` is exactly parabolic
    /// and there is no energy to be relative to.
    #[allow(clippy::float_cmp)]
    pub fn max_energy_drift(&self, initial: &CartesianState, gravity: &Gravity) -> Option<f64> {
        let e0 = initial.specific_energy(gravity);
        if e0 == 0.0 {
            return None;
        }

        self.states
            .iter()
            .map(|s| ((s.specific_energy(gravity) - e0) / e0).abs())
            .reduce(f64::max)
    }

    fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(CartesianState::radius)
    }
}
