use crate::core::{SimulationConfig, World};
use crate::engine::PhysicsEngine;
use crate::integration::{Integrator, SemiImplicitEuler};
use crate::math::Vector2;

/// The circular-wire physics model
///
/// Bodies behave like beads threaded on a circular wire: each tick they
/// integrate freely under gravity and drag, then are projected back onto
/// the wire and lose the radial component of their velocity. Bodies do
/// not collide with each other or the world boundary in this model.
pub struct WireEngine {
    /// Center of the wire circle
    center: Vector2,

    /// Radius of the wire circle
    wire_radius: f32,

    /// The integrator used to advance individual bodies
    integrator: Box<dyn Integrator>,
}

impl WireEngine {
    /// Creates a new wire engine for a circle at `center` with the given radius
    pub fn new(center: Vector2, wire_radius: f32) -> Self {
        Self {
            center,
            wire_radius,
            integrator: Box::new(SemiImplicitEuler::new()),
        }
    }

    /// Returns the center of the wire circle
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Returns the radius of the wire circle
    pub fn wire_radius(&self) -> f32 {
        self.wire_radius
    }
}

impl PhysicsEngine for WireEngine {
    fn step(&mut self, world: &mut World, config: &SimulationConfig) {
        for body in world.bodies_mut() {
            self.integrator.integrate(body, config);

            let delta = body.pos - self.center;
            let d = delta.length();
            if d == 0.0 {
                // No projection direction for a body at the exact center.
                continue;
            }

            let normal = delta / d;
            body.pos = self.center + normal * self.wire_radius;
            // Keep only the tangential velocity so the body stays on the wire.
            body.vel -= normal * body.vel.dot(&normal);
        }
    }

    fn name(&self) -> &str {
        "Wire"
    }
}
