use glam::Vec2;

use crate::{Aabb, GameRng};

/// Which half of the court a paddle defends. Player 1 is `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// 1-based player number shown to humans
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // constant for the whole match
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,   // top-left corner
    pub width: f32,  // it is a square
    pub vel: Vec2,   // direction, scaled by `speed` when integrating
    pub speed: f32,  // scalar speed multiplier
    pub in_play: bool,
}

impl Ball {
    /// Idle ball waiting for a serve
    pub fn new(pos: Vec2, width: f32, speed: f32) -> Self {
        Self {
            pos,
            width,
            vel: Vec2::ZERO,
            speed,
            in_play: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.width))
    }

    /// Launch the ball in a random direction. Speed is left untouched.
    pub fn serve(&mut self, spread: f32, rng: &mut GameRng) {
        self.in_play = true;
        self.vel.x = rng.coin_flip();
        self.vel.y = rng.unit() * spread * rng.coin_flip();
    }

    /// Whether horizontal velocity points at the paddle on `side`
    pub fn is_moving_toward(&self, side: Side) -> bool {
        match side {
            Side::Left => self.vel.x < 0.0,
            Side::Right => self.vel.x > 0.0,
        }
    }
}
