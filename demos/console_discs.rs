use disc_engine::{Simulator, World};
use disc_engine::math::Vector2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, size, Clear, ClearType},
};

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
const NUM_DISCS: usize = 20;
const FRAME_DURATION: Duration = Duration::from_millis(16);
const GRAVITY: Vector2 = Vector2 { x: 0.0, y: 98.1 };

/// Maximum impulse magnitude the kick key may apply; capping is the input
/// layer's policy, the core accepts any vector.
const MAX_KICK: f32 = 400.0;

const DISC_COLORS: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
];

/// Everything an input handler may need, passed uniformly; handlers
/// ignore the fields they don't use.
struct SandboxContext {
    world: World,
    simulator: Simulator,
    rng: StdRng,
    gravity_on: bool,
    quit: bool,
}

fn main() -> Result<(), std::io::Error> {
    let mut stdout = stdout();
    enable_raw_mode()?;
    stdout.execute(Hide)?;
    stdout.execute(Clear(ClearType::All))?;

    let mut ctx = SandboxContext {
        world: World::new(Vector2::new(WORLD_WIDTH, WORLD_HEIGHT)),
        simulator: Simulator::new(),
        rng: StdRng::seed_from_u64(0xD15C),
        gravity_on: false,
        quit: false,
    };
    ctx.world.setup(NUM_DISCS, &mut ctx.rng);

    while !ctx.quit {
        let frame_start = Instant::now();

        while poll(Duration::from_millis(0))? {
            if let Event::Key(key) = read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut ctx, key.code);
                }
            }
        }

        ctx.simulator.step(&mut ctx.world);
        render(&mut stdout, &ctx)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
    }

    stdout.execute(Show)?;
    stdout.execute(ResetColor)?;
    disable_raw_mode()?;
    Ok(())
}

fn handle_key(ctx: &mut SandboxContext, code: KeyCode) {
    let config = ctx.simulator.config().clone();
    match code {
        KeyCode::Char('q') | KeyCode::Esc => ctx.quit = true,
        KeyCode::Char('r') => ctx.world.setup(NUM_DISCS, &mut ctx.rng),
        KeyCode::Char(' ') => ctx.simulator.set_paused(!ctx.simulator.is_paused()),
        KeyCode::Up => ctx.simulator.set_restitution((config.restitution + 0.05).min(1.0)),
        KeyCode::Down => ctx.simulator.set_restitution((config.restitution - 0.05).max(0.0)),
        KeyCode::Right => ctx.simulator.set_air_friction((config.air_friction + 0.1).min(1.0)),
        KeyCode::Left => ctx.simulator.set_air_friction((config.air_friction - 0.1).max(0.0)),
        KeyCode::Char('g') => {
            ctx.gravity_on = !ctx.gravity_on;
            let gravity = if ctx.gravity_on { GRAVITY } else { Vector2::zero() };
            ctx.simulator.set_gravity(gravity);
        }
        KeyCode::Char('k') => kick_random_disc(ctx),
        _ => {}
    }
}

/// Kicks a random disc with a random direction and a capped magnitude
fn kick_random_disc(ctx: &mut SandboxContext) {
    if ctx.world.body_count() == 0 {
        return;
    }
    let index = ctx.rng.gen_range(0..ctx.world.body_count());
    let angle = ctx.rng.gen_range(0.0..std::f32::consts::TAU);
    let strength = ctx.rng.gen_range(100.0..1000.0f32).min(MAX_KICK);
    let impulse = Vector2::new(angle.cos(), angle.sin()) * strength;

    if let Ok(body) = ctx.world.body_mut(index) {
        body.apply_impulse(impulse);
    }
}

fn render(stdout: &mut Stdout, ctx: &SandboxContext) -> Result<(), std::io::Error> {
    let (cols, rows) = size()?;
    let cols = cols.max(1);
    let rows = rows.max(2);

    stdout.queue(Clear(ClearType::All))?;

    for (i, body) in ctx.world.bodies().iter().enumerate() {
        let col = (body.pos.x / WORLD_WIDTH * (cols - 1) as f32) as u16;
        let row = 1 + (body.pos.y / WORLD_HEIGHT * (rows - 2) as f32) as u16;
        let glyph = if body.radius() > 15.0 { 'O' } else { 'o' };

        stdout
            .queue(MoveTo(col.min(cols - 1), row.min(rows - 1)))?
            .queue(SetForegroundColor(DISC_COLORS[i % DISC_COLORS.len()]))?
            .queue(Print(glyph))?;
    }

    let config = ctx.simulator.config();
    let hud = format!(
        "discs:{}  paused:{}  restitution:{:.2}  friction:{:.2}  gravity:{}  \
         [r]estart [space]pause [up/down]restitution [left/right]friction [g]ravity [k]ick [q]uit",
        ctx.world.body_count(),
        ctx.simulator.is_paused(),
        config.restitution,
        config.air_friction,
        if ctx.gravity_on { "on" } else { "off" },
    );
    stdout
        .queue(MoveTo(0, 0))?
        .queue(ResetColor)?
        .queue(Print(hud))?;

    stdout.flush()
}
