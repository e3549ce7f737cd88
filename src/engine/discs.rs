use crate::collision::CollisionResolver;
use crate::core::{SimulationConfig, World};
use crate::engine::PhysicsEngine;
use crate::integration::{Integrator, SemiImplicitEuler};

/// The disc-collision physics model
///
/// Each tick, every body in insertion order is integrated, resolved
/// against all later bodies (so each unordered pair is handled exactly
/// once), and finally resolved against the world boundary. Wall
/// resolution therefore sees positions and velocities already updated by
/// that body's pair contacts.
pub struct DiscEngine {
    /// The integrator used to advance individual bodies
    integrator: Box<dyn Integrator>,
}

impl DiscEngine {
    /// Creates a new disc engine with the default integrator
    pub fn new() -> Self {
        Self::with_integrator(Box::new(SemiImplicitEuler::new()))
    }

    /// Creates a new disc engine with the given integrator
    pub fn with_integrator(integrator: Box<dyn Integrator>) -> Self {
        Self { integrator }
    }
}

impl Default for DiscEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsEngine for DiscEngine {
    fn step(&mut self, world: &mut World, config: &SimulationConfig) {
        let bounds = world.bounds();
        let bodies = world.bodies_mut();

        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let body = &mut head[i];

            self.integrator.integrate(body, config);

            // Pairs sharing a body within one tick are resolved
            // sequentially and independently; dense clusters can keep some
            // residual overlap until later ticks.
            for other in tail.iter_mut() {
                CollisionResolver::resolve_pair(body, other, config.restitution);
            }

            CollisionResolver::resolve_walls(body, bounds);
        }
    }

    fn name(&self) -> &str {
        "Discs"
    }
}
