//! Newtonian physics of a single body orbiting a fixed central mass.
//!
//! The two important structs in this module are:
//! - [Gravity], the force model: acceleration due to the central mass at a
//!   given position.
//! - [CartesianState], which represents a position and velocity in the plane.

mod gravity;
mod state;

// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.67408e-11;

pub use gravity::Gravity;
pub use state::CartesianState;

/// A trait indicating this object can be used in physical computations that
/// require a massive body.
pub trait HasMass {
    /// The mass of this object, in kg
    fn mass(&self) -> f64;
}
