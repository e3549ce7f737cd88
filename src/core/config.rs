use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
///
/// Created once at startup and mutated in place by external input mapping;
/// the core only reads it. None of the fields are clamped internally:
/// callers are expected to keep `air_friction` and `restitution` in [0, 1].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Uniform gravity applied to every body
    pub gravity: Vector2,

    /// The fixed time step for the simulation
    pub time_step: f32,

    /// Air drag coefficient; drag scales inversely with disc radius
    pub air_friction: f32,

    /// Restitution coefficient for body-body collisions (1 = elastic)
    pub restitution: f32,

    /// Whether the simulation is paused
    pub paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::zero(),
            time_step: 1.0 / 60.0,
            air_friction: 0.0,
            restitution: 1.0,
            paused: false,
        }
    }
}
