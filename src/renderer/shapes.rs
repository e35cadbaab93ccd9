//! Shape generation for 2D primitives

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Rect};

/// Generate vertices for a filled axis-aligned rectangle
///
/// Corners are snapped down to whole pixels, as the frame is drawn on an
/// integer pixel grid.
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let x0 = r.left().trunc();
    let y0 = r.top().trunc();
    let x1 = x0 + r.size.x.trunc();
    let y1 = y0 + r.size.y.trunc();

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Build the full frame: paddle, ball, then every block still in play
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((2 + state.blocks.remaining()) * 6);

    vertices.extend(rect(&state.paddle.rect, colors::PADDLE));
    vertices.extend(rect(&state.ball.rect, colors::BALL));
    for (_, block) in state.blocks.live() {
        vertices.extend(rect(&block.rect, colors::BLOCK));
    }

    vertices
}
