//! Collision tests for the ball
//!
//! All checks are discrete: they look at the ball's position after
//! integration and never sweep along its path, so a fast ball can pass
//! through thin geometry in a single frame.

use super::rect::Rect;
use super::state::BlockGrid;

/// Which velocity components a wall contact flips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }
}

/// Check the ball against the side walls and the ceiling
///
/// There is no floor: leaving through the bottom is handled as a loss.
pub fn ball_wall_collision(ball: &Rect, window_width: f32) -> WallHit {
    WallHit {
        flip_x: ball.left() <= 0.0 || ball.right() >= window_width,
        flip_y: ball.top() <= 0.0,
    }
}

/// Check the ball against the paddle
#[inline]
pub fn ball_paddle_collision(ball: &Rect, paddle: &Rect) -> bool {
    ball.overlaps(paddle)
}

/// Storage index of the first live block the ball overlaps, if any
pub fn first_block_hit(ball: &Rect, blocks: &BlockGrid) -> Option<usize> {
    blocks
        .live()
        .find(|(_, block)| ball.overlaps(&block.rect))
        .map(|(index, _)| index)
}
