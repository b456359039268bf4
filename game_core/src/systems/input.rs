use hecs::World;

use crate::{Ball, Config, Controls, Events, GameRng};

/// Serve the ball if a player asked for it and the ball is waiting at center
pub fn serve_ball(
    world: &mut World,
    controls: &Controls,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if !controls.serve {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.in_play {
            continue;
        }
        ball.serve(config.serve_spread, rng);
        events.ball_served = true;
        log::debug!("Serve: vel=({:.2}, {:.2})", ball.vel.x, ball.vel.y);
    }
}
