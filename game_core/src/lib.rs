pub mod aabb;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod sound;
pub mod systems;

pub use aabb::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use sound::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation: player input first, then ball physics.
pub fn step(
    world: &mut World,
    controls: &Controls,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Paddles follow their players
    move_paddles(world, controls, config);

    // 2. Serve from the idle position
    serve_ball(world, controls, config, rng, events);

    events.toggle_fullscreen = controls.toggle_fullscreen;

    // 3. Full restart: fresh court and a zeroed scoreboard
    if controls.reset_match {
        reset_court(world, config);
        score.reset();
        events.match_reset = true;
        log::debug!("Match reset");
    }

    // 4. Top/bottom walls
    check_wall_bounce(world, config, events);

    // 5. Ball left the court. The court is fresh, nothing else moves this tick.
    if check_scoring(world, config, score, events).is_some() {
        return;
    }

    // 6. Paddles
    check_paddle_hits(world, config, rng, events);

    // 7. Integrate
    move_ball(world);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.paddle_spawn_y());
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Re-create both paddles at vertical center and an idle ball at screen center
pub fn reset_court(world: &mut World, config: &Config) {
    world.clear();
    create_paddle(world, Side::Left, config);
    create_paddle(world, Side::Right, config);
    create_ball(
        world,
        Ball::new(
            config.ball_spawn(),
            config.ball_width,
            config.ball_speed_initial,
        ),
    );
}
