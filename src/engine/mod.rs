mod discs;
mod wire;

pub use self::discs::DiscEngine;
pub use self::wire::WireEngine;

use crate::core::{SimulationConfig, World};

/// Trait for interchangeable physics models
///
/// An engine advances the whole body set by one fixed-dt tick under the
/// current configuration. The pause flag is handled by the simulator, not
/// here; an engine's `step` is only called while running.
pub trait PhysicsEngine: Send + Sync {
    /// Advances every body in the world by one tick
    fn step(&mut self, world: &mut World, config: &SimulationConfig);

    /// Returns the name of the engine
    fn name(&self) -> &str;
}
