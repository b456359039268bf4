use crate::{Ball, Config, Events, GameRng, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn check_wall_bounce(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // No position clamp: a large vy can carry the ball past the wall for a tick
        if ball.pos.y <= 0.0 || ball.pos.y >= config.screen_height - ball.width {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball against both paddles, left first
pub fn check_paddle_hits(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = [Side::Left, Side::Right]
        .iter()
        .filter_map(|side| {
            world
                .query::<&Paddle>()
                .iter()
                .find(|(_e, p)| p.side == *side)
                .map(|(_e, p)| *p)
        })
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config, rng) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Resolve one ball/paddle pair. Returns true if the ball bounced.
///
/// The ball only bounces while its horizontal velocity points at the paddle, so
/// a ball still overlapping the paddle on the next tick is left alone.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    rng: &mut GameRng,
) -> bool {
    if !ball.bounds().intersects(&paddle.bounds()) || !ball.is_moving_toward(paddle.side) {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y += rng.unit() * config.deflect_spread * rng.coin_flip();
    ball.speed = (ball.speed + config.ball_speed_step).min(config.ball_speed_max);
    true
}
