use nalgebra::Vector2;

use super::Gravity;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianState {
    position: Vector2<f64>,
    velocity: Vector2<f64>,
}

impl CartesianState {
    pub fn new(position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        CartesianState { position, velocity }
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.position.norm()
    }

    /// Same position, velocity flipped.
    pub fn retrograde(&self) -> Self {
        CartesianState::new(self.position, -self.velocity)
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|c| c.is_finite())
    }

    /// Mechanical energy per unit mass: v^2 / 2 - mu / r
    pub fn specific_energy(&self, gravity: &Gravity) -> f64 {
        self.velocity.norm_squared() / 2.0 + gravity.potential_energy(&self.position, 1.0)
    }

    /// Mechanical energy of a body of mass `mass` in this state
    pub fn energy(&self, gravity: &Gravity, mass: f64) -> f64 {
        mass * self.specific_energy(gravity)
    }
}
