use crate::{Ball, Config, Controls, Paddle};
use hecs::World;

/// Apply paddle movement from player controls, clamped to the screen
pub fn move_paddles(world: &mut World, controls: &Controls, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let control = controls.paddle(paddle.side);
        if control.up {
            paddle.pos.y = (paddle.pos.y - config.paddle_speed).max(0.0);
        }
        if control.down {
            paddle.pos.y =
                (paddle.pos.y + config.paddle_speed).min(config.screen_height - paddle.size.y);
        }
    }
}

/// Move ball one step along its direction, scaled by its speed
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * ball.speed;
    }
}
