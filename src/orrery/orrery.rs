use nalgebra::Vector2;

use super::body::{Body, BodyID, BodyInfo, BodyState};
use crate::astro::{CartesianState, Gravity, HasMass};
use crate::error::{Error, Result};

/// A star fixed at the origin and the bodies orbiting it, in insertion order.
#[derive(Debug, Clone)]
pub struct Orrery {
    bodies: Vec<Body>,
}

impl Orrery {
    pub fn new(star: BodyInfo) -> Self {
        let star = Body {
            id: BodyID(0),
            info: star,
            state: BodyState::FixedAtOrigin,
        };
        Orrery { bodies: vec![star] }
    }

    pub fn add_body(
        &mut self,
        info: BodyInfo,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> BodyID {
        let id = BodyID(self.bodies.len());
        let state = CartesianState::new(position, velocity);
        self.bodies.push(Body {
            id,
            info,
            state: BodyState::Orbiting { state },
        });
        id
    }

    pub fn star(&self) -> &Body {
        &self.bodies[0]
    }

    /// The star's field, using `g` as the gravitational constant.
    pub fn gravity(&self, g: f64) -> Result<Gravity> {
        Gravity::new(g, self.star().mass())
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn planets(&self) -> impl Iterator<Item = &Body> {
        self.bodies().filter(|body| !body.is_fixed())
    }

    pub fn get_body(&self, id: BodyID) -> Result<&Body> {
        self.bodies
            .get(id.0)
            .ok_or_else(|| Error::UnknownBody(format!("#{}", id.0)))
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Result<&Body> {
        self.bodies()
            .find(|body| body.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownBody(name.to_owned()))
    }
}
