use hecs::World;

use crate::{reset_court, step, Aabb, Ball, Config, Controls, Events, GameRng, Paddle, Score, Side};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball: Aabb,
    pub score: Score,
    pub ball_in_play: bool,
}

/// Owns the whole match: entities, score and the random source
pub struct PongGame {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub tick: u64,
}

impl PongGame {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut game = Self {
            world: World::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            tick: 0,
        };
        game.reset();
        game.reset_players();
        game
    }

    /// Center both paddles and put an idle ball on the center spot
    pub fn reset(&mut self) {
        reset_court(&mut self.world, &self.config);
    }

    /// Zero the scoreboard
    pub fn reset_players(&mut self) {
        self.score.reset();
    }

    /// Advance one tick and report what happened
    pub fn update(&mut self, controls: &Controls) -> &Events {
        step(
            &mut self.world,
            controls,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn frame(&self) -> Frame {
        let paddle_bounds = |side| {
            self.paddle(side)
                .map(|p| p.bounds())
                .unwrap_or_else(|| Aabb::new(0.0, 0.0, 0.0, 0.0))
        };
        let ball = self.ball();

        Frame {
            left_paddle: paddle_bounds(Side::Left),
            right_paddle: paddle_bounds(Side::Right),
            ball: ball
                .map(|b| b.bounds())
                .unwrap_or_else(|| Aabb::new(0.0, 0.0, 0.0, 0.0)),
            score: self.score,
            ball_in_play: ball.map(|b| b.in_play).unwrap_or(false),
        }
    }
}

impl Default for PongGame {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}
