mod body;
mod orrery;

pub use body::{Body, BodyID, BodyInfo, BodyState};
pub use orrery::Orrery;
