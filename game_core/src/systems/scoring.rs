use crate::{reset_court, Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball left the court. Awards the point, resets the court and
/// returns the scoring side.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x)?;

    let scorer = if ball_x <= 0.0 {
        // Past the left paddle: player 2 scores
        Side::Right
    } else if ball_x >= config.screen_width {
        Side::Left
    } else {
        return None;
    };

    score.increment(scorer);
    events.scored = Some(scorer);
    reset_court(world, config);

    log::info!("Player 1: {} Player 2: {}", score.left, score.right);
    Some(scorer)
}
