use crate::astro::{CartesianState, HasMass};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    /// How many steps make up one orbit. Zero for the star.
    pub period_steps: usize,
}

#[derive(Debug, Clone)]
pub enum BodyState {
    FixedAtOrigin,
    Orbiting { state: CartesianState },
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub state: BodyState,
}

impl BodyInfo {
    pub fn new(name: &str, mass: f64, radius: f64, period_steps: usize) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "mass of {} must be positive, got {}",
                name, mass
            )));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "radius of {} must be non-negative, got {}",
                name, radius
            )));
        }

        Ok(BodyInfo {
            name: name.to_owned(),
            mass,
            radius,
            period_steps,
        })
    }
}

impl Body {
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.state, BodyState::FixedAtOrigin)
    }

    pub fn state(&self) -> Option<&CartesianState> {
        match &self.state {
            BodyState::FixedAtOrigin => None,
            BodyState::Orbiting { state } => Some(state),
        }
    }
}

impl HasMass for Body {
    fn mass(&self) -> f64 {
        self.info.mass
    }
}
