pub mod config;
pub mod world;
pub mod simulator;

pub use self::config::SimulationConfig;
pub use self::world::World;
pub use self::simulator::Simulator;
