use crate::bodies::{Rgb, TagValue};
use crate::math::Vector2;

use std::collections::HashMap;
use std::f32::consts::PI;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A simulated disc: a circular point-mass body with no rotation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// The disc radius, always positive
    radius: f32,

    /// The disc mass, derived from the radius at construction time
    mass: f32,

    /// The body's position in world space
    pub pos: Vector2,

    /// The body's linear velocity
    pub vel: Vector2,

    /// The display color, read only by rendering collaborators
    pub color: Rgb,

    /// Open-ended bag of auxiliary properties for interaction layers
    tags: HashMap<String, TagValue>,
}

impl Body {
    /// Creates a new disc at the given position with the given velocity
    ///
    /// Mass is derived as `π · radius²` (uniform areal density) and cannot
    /// be changed afterwards.
    pub fn new(radius: f32, pos: Vector2, vel: Vector2) -> Self {
        Self {
            radius,
            mass: PI * radius * radius,
            pos,
            vel,
            color: Rgb::default(),
            tags: HashMap::new(),
        }
    }

    /// Creates a new disc with an explicit display color
    pub fn with_color(radius: f32, pos: Vector2, vel: Vector2, color: Rgb) -> Self {
        let mut body = Self::new(radius, pos, vel);
        body.color = color;
        body
    }

    /// Returns the disc radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the disc mass
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Adds the given vector directly to the body's velocity
    ///
    /// No decay or clamping is applied; any magnitude capping is the
    /// caller's policy.
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        self.vel += impulse;
    }

    /// Returns true if the given point lies inside the disc
    pub fn contains(&self, point: Vector2) -> bool {
        self.pos.distance_squared(&point) <= self.radius * self.radius
    }

    /// Sets a tag on the body, replacing any previous value under that key
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Gets a tag by key, if present
    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    /// Removes a tag by key, returning the previous value if present
    pub fn remove_tag(&mut self, key: &str) -> Option<TagValue> {
        self.tags.remove(key)
    }
}
