use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::error::{Error, Result};

/// Gravitational field of a central mass fixed at the origin.
///
/// Only the central mass pulls on the test body; the other orbiting bodies
/// contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct Gravity {
    g: f64,
    central_mass: f64,
}

impl Gravity {
    pub fn new(g: f64, central_mass: f64) -> Result<Self> {
        if !(g.is_finite() && g > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "gravitational constant must be positive, got {}",
                g
            )));
        }
        if !(central_mass.is_finite() && central_mass > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "central mass must be positive, got {}",
                central_mass
            )));
        }

        Ok(Gravity { g, central_mass })
    }

    pub fn central_mass(&self) -> f64 {
        self.central_mass
    }

    /// The standard gravitational parameter G M
    pub fn mu(&self) -> f64 {
        self.g * self.central_mass
    }

    /// Acceleration felt by a test body at `position`: -G M r / |r|^3.
    #[allow(clippy::float_cmp)]
    pub fn acceleration(&self, position: &Vector2<f64>) -> Result<Vector2<f64>> {
        let r = position.norm();
        if r == 0.0 {
            return Err(Error::Domain {
                x: position.x,
                y: position.y,
            });
        }

        Ok(-self.mu() / (r * r * r) * *position)
    }

    /// Potential energy of a body of mass `mass` at `position`: -G M m / r.
    pub fn potential_energy(&self, position: &Vector2<f64>, mass: f64) -> f64 {
        -self.mu() * mass / position.norm()
    }

    pub fn circular_velocity(&self, radius: f64) -> f64 {
        (self.mu() / radius).sqrt()
    }

    pub fn circular_period(&self, radius: f64) -> f64 {
        (4.0 * PI * PI * radius.powi(3) / self.mu()).sqrt()
    }
}
