use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_width: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_step: f32,
    pub ball_speed_max: f32,
    pub serve_spread: f32,
    pub deflect_spread: f32,
    pub dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_width: Params::BALL_WIDTH,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_step: Params::BALL_SPEED_STEP,
            ball_speed_max: Params::BALL_SPEED_MAX,
            serve_spread: Params::SERVE_SPREAD,
            deflect_spread: Params::DEFLECT_SPREAD,
            dead_zone: Params::DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.screen_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Y position that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner of the ball when it waits for a serve
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.screen_width / 2.0 - self.ball_width / 2.0,
            self.screen_height / 2.0 - self.ball_width / 2.0,
        )
    }

    /// Clamp paddle Y to screen bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 5.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right),
            310.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_spawn_positions_are_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 105.0);
        assert_eq!(config.ball_spawn(), Vec2::new(158.0, 118.0));
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(500.0),
            config.screen_height - config.paddle_height
        );
        let valid_y = 100.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }
}
