mod integrator;
mod semi_implicit;

pub use self::integrator::Integrator;
pub use self::semi_implicit::SemiImplicitEuler;
