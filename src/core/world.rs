use crate::bodies::Body;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

use rand::Rng;
use std::f32::consts::TAU;

/// The set of simulated bodies plus the rectangular world bounds
///
/// The world owns body lifetime: bodies are created by a setup call and
/// destroyed only by the next setup call. Insertion order is significant,
/// as the disc engine resolves body pairs `(i, j)` with `i < j` exactly
/// once per tick.
pub struct World {
    /// Width and height of the world rectangle, anchored at the origin
    bounds: Vector2,

    /// All bodies in the world, in insertion order
    bodies: Vec<Body>,
}

impl World {
    /// Creates a new empty world with the given bounds
    pub fn new(bounds: Vector2) -> Self {
        Self {
            bounds,
            bodies: Vec::new(),
        }
    }

    /// Returns the world bounds
    pub fn bounds(&self) -> Vector2 {
        self.bounds
    }

    /// (Re)populates the world with `count` randomized discs
    ///
    /// Any prior bodies are discarded. Each disc gets a radius in [5, 25]
    /// (mass follows from the radius), a position inside the bounds minus a
    /// radius margin, and velocity components in [-100, 100]. A disc too
    /// large for an axis is centered on that axis instead. Spawn positions
    /// are not checked for overlap; the first ticks separate any
    /// overlapping pairs. The random source is caller-supplied so setups
    /// can be reproduced from a seed.
    pub fn setup<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.bodies.clear();
        let (w, h) = (self.bounds.x, self.bounds.y);
        for _ in 0..count {
            let radius = 5.0 + rng.gen::<f32>() * 20.0;
            let pos = Vector2::new(
                spawn_coord(rng, radius, w),
                spawn_coord(rng, radius, h),
            );
            let vel = Vector2::new(
                rng.gen_range(-100.0..=100.0),
                rng.gen_range(-100.0..=100.0),
            );
            self.bodies.push(Body::new(radius, pos, vel));
        }
    }

    /// (Re)populates the world with `count` discs evenly spaced on a circle
    ///
    /// Used with the wire engine: discs start on the wire with zero
    /// velocity, so the constraint holds from the first tick.
    pub fn setup_ring<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        center: Vector2,
        ring_radius: f32,
        rng: &mut R,
    ) {
        self.bodies.clear();
        for i in 0..count {
            let angle = TAU * i as f32 / count.max(1) as f32;
            let radius = 5.0 + rng.gen::<f32>() * 20.0;
            let pos = center + Vector2::new(angle.cos(), angle.sin()) * ring_radius;
            self.bodies.push(Body::new(radius, pos, Vector2::zero()));
        }
    }

    /// Adds a single body to the world and returns its index
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Removes all bodies from the world
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns all bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns all bodies mutably, in insertion order
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Gets a body by its index, returning an error if out of range
    pub fn body(&self, index: usize) -> Result<&Body> {
        self.bodies
            .get(index)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body at index {} not found", index)))
    }

    /// Gets a mutable reference to a body by its index, returning an error if out of range
    pub fn body_mut(&mut self, index: usize) -> Result<&mut Body> {
        self.bodies
            .get_mut(index)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body at index {} not found", index)))
    }
}

/// Samples a spawn coordinate with a `radius` margin on both sides of
/// `[0, extent]`; falls back to the axis midpoint when the margins leave
/// no room to sample.
fn spawn_coord<R: Rng + ?Sized>(rng: &mut R, radius: f32, extent: f32) -> f32 {
    if extent - radius >= radius {
        rng.gen_range(radius..=extent - radius)
    } else {
        extent * 0.5
    }
}
