// Literal values from the solar system catalog
pub const SUN_MASS: f64 = 1.989e30;
pub const SUN_RADIUS: f64 = 695_700_000.0;

pub const EARTH_PERIHELION: f64 = 147_095_000_000.0;
pub const EARTH_PERIHELION_SPEED: f64 = 30_300.0;
pub const EARTH_MASS: f64 = 5.972e24;
