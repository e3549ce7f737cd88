use crate::bodies::Body;
use crate::core::SimulationConfig;
use crate::integration::Integrator;

/// Reference radius for the drag model; discs smaller than this lose
/// velocity faster, larger ones slower
const DRAG_REFERENCE_RADIUS: f32 = 30.0;

/// Semi-implicit Euler integrator with radius-scaled air drag
///
/// Order matters: drag scales the current velocity, gravity is added to
/// the damped velocity, and the position update uses the fully updated
/// velocity.
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Creates a new semi-implicit Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemiImplicitEuler {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for SemiImplicitEuler {
    fn integrate(&mut self, body: &mut Body, config: &SimulationConfig) {
        let dt = config.time_step;

        // Drag scaled inversely with radius; the factor is floored at zero
        // so strong drag stops a disc instead of reversing it.
        let friction_factor =
            1.0 - config.air_friction * (DRAG_REFERENCE_RADIUS / body.radius()) * dt;
        body.vel *= friction_factor.max(0.0);

        body.vel += config.gravity * dt;
        body.pos += body.vel * dt;
    }

    fn name(&self) -> &str {
        "SemiImplicitEuler"
    }
}
