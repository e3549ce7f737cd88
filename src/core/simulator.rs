use crate::core::{SimulationConfig, World};
use crate::engine::{DiscEngine, PhysicsEngine};
use crate::math::Vector2;

/// The tick orchestrator: owns the configuration and the active physics
/// engine, and advances a world one fixed-dt tick at a time
///
/// External impulses are applied directly to bodies between ticks and do
/// not pass through the simulator.
pub struct Simulator {
    /// Configuration read by the engine every tick
    config: SimulationConfig,

    /// The physics model advancing the bodies
    engine: Box<dyn PhysicsEngine>,
}

impl Simulator {
    /// Creates a new simulator with the default configuration and the
    /// disc-collision engine
    pub fn new() -> Self {
        Self::with_engine(Box::new(DiscEngine::new()))
    }

    /// Creates a new simulator with the given engine and the default
    /// configuration
    pub fn with_engine(engine: Box<dyn PhysicsEngine>) -> Self {
        Self {
            config: SimulationConfig::default(),
            engine,
        }
    }

    /// Creates a new simulator with the given engine and configuration
    pub fn with_config(engine: Box<dyn PhysicsEngine>, config: SimulationConfig) -> Self {
        Self { config, engine }
    }

    /// Advances the world by one fixed-dt tick
    ///
    /// While paused this is a no-op: no integration, no collision checks,
    /// bodies stay frozen in place.
    pub fn step(&mut self, world: &mut World) {
        if self.config.paused {
            return;
        }
        self.engine.step(world, &self.config);
    }

    /// Toggles between the Running and Paused states
    pub fn set_paused(&mut self, paused: bool) {
        self.config.paused = paused;
    }

    /// Returns whether the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    /// Sets the gravity vector
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Sets the air friction coefficient; callers keep it in [0, 1]
    pub fn set_air_friction(&mut self, air_friction: f32) {
        self.config.air_friction = air_friction;
    }

    /// Sets the restitution coefficient; callers keep it in [0, 1]
    pub fn set_restitution(&mut self, restitution: f32) {
        self.config.restitution = restitution;
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Returns the name of the active physics engine
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
