use crate::bodies::Body;
use crate::core::SimulationConfig;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances one body in place over the configured fixed time step
    fn integrate(&mut self, body: &mut Body, config: &SimulationConfig);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
