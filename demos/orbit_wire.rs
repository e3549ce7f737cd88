use disc_engine::{SimulationConfig, Simulator, WireEngine, World};
use disc_engine::math::Vector2;

use rand::rngs::StdRng;
use rand::SeedableRng;

const TICKS: usize = 300;
const REPORT_EVERY: usize = 60;

/// Headless run of the wire engine: beads on a circular wire swinging
/// under gravity, positions reported once per simulated second.
fn main() {
    let center = Vector2::new(400.0, 300.0);
    let wire_radius = 150.0;

    let mut rng = StdRng::seed_from_u64(7);
    let mut world = World::new(Vector2::new(800.0, 600.0));
    world.setup_ring(5, center, wire_radius, &mut rng);

    let mut config = SimulationConfig::default();
    config.gravity = Vector2::new(0.0, 98.1);
    let mut simulator = Simulator::with_config(Box::new(WireEngine::new(center, wire_radius)), config);

    println!("engine: {}", simulator.engine_name());

    for tick in 1..=TICKS {
        simulator.step(&mut world);

        if tick % REPORT_EVERY == 0 {
            println!("t = {:.1}s", tick as f32 * simulator.config().time_step);
            for (i, body) in world.bodies().iter().enumerate() {
                println!(
                    "  bead {}: pos {} vel {:.1} off-wire {:+.4}",
                    i,
                    body.pos,
                    body.vel.length(),
                    body.pos.distance(&center) - wire_radius,
                );
            }
        }
    }
}
