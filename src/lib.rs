pub mod astro;
pub mod error;
pub mod file;
pub mod integrator;
pub mod orrery;
pub mod render;
pub mod simulation;
pub mod trajectory;

#[cfg(test)]
pub mod consts;

pub use error::{Error, Result};
