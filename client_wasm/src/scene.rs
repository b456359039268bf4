//! What goes on screen each frame

use game_core::{Aabb, Config, Frame, Params};

use crate::draw_list::{DrawList, WHITE};

/// Logical screen size, whatever the canvas size is
pub fn layout(_outside_width: u32, _outside_height: u32) -> (u32, u32) {
    (Params::SCREEN_WIDTH as u32, Params::SCREEN_HEIGHT as u32)
}

/// How the ball should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStyle {
    Sprite,
    Solid,
}

/// Fill `list` with the score overlay and paddles. Returns the ball rect when
/// it is left for the sprite pass.
pub fn compose(frame: &Frame, config: &Config, style: BallStyle, list: &mut DrawList) -> Option<Aabb> {
    list.clear();

    list.draw_text(&frame.score.left.to_string(), 40.0, 10.0, WHITE);
    list.draw_text(
        &frame.score.right.to_string(),
        config.screen_width - 40.0,
        10.0,
        WHITE,
    );

    for paddle in [frame.left_paddle, frame.right_paddle] {
        fill(list, &paddle);
    }

    match style {
        BallStyle::Sprite => Some(frame.ball),
        BallStyle::Solid => {
            fill(list, &frame.ball);
            None
        }
    }
}

fn fill(list: &mut DrawList, rect: &Aabb) {
    list.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PongGame;

    #[test]
    fn test_layout_is_fixed() {
        assert_eq!(layout(640, 480), (320, 240));
        assert_eq!(layout(1920, 1080), (320, 240));
    }

    #[test]
    fn test_compose_solid_ball() {
        let game = PongGame::default();
        let mut list = DrawList::new();

        let sprite = compose(&game.frame(), &game.config, BallStyle::Solid, &mut list);

        assert!(sprite.is_none());
        let rects: Vec<[f32; 4]> = list.instances().iter().map(|i| i.rect).collect();
        assert!(rects.contains(&[5.0, 105.0, 5.0, 30.0]));
        assert!(rects.contains(&[310.0, 105.0, 5.0, 30.0]));
        assert!(rects.contains(&[158.0, 118.0, 4.0, 4.0]));
    }

    #[test]
    fn test_compose_sprite_ball_is_left_out() {
        let game = PongGame::default();
        let mut list = DrawList::new();

        let sprite = compose(&game.frame(), &game.config, BallStyle::Sprite, &mut list);

        assert_eq!(sprite, Some(Aabb::new(158.0, 118.0, 4.0, 4.0)));
        let rects: Vec<[f32; 4]> = list.instances().iter().map(|i| i.rect).collect();
        assert!(!rects.contains(&[158.0, 118.0, 4.0, 4.0]));
    }

    #[test]
    fn test_scores_drawn_at_both_sides() {
        let mut game = PongGame::default();
        game.score.left = 1;
        game.score.right = 1;
        let mut list = DrawList::new();

        compose(&game.frame(), &game.config, BallStyle::Solid, &mut list);

        let xs: Vec<f32> = list.instances().iter().map(|i| i.rect[0]).collect();
        assert!(xs.iter().any(|x| (40.0..48.0).contains(x)));
        assert!(xs.iter().any(|x| (280.0..288.0).contains(x)));
    }
}
