//! Game state and core simulation types
//!
//! Everything the update step reads or writes lives in [`GameState`], so a
//! game can be driven headlessly from tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell below the window
    GameOver,
    /// Every block destroyed
    Victory,
    /// Window closed by the player
    Quit,
}

/// Things that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side wall and/or the ceiling
    WallBounce { flip_x: bool, flip_y: bool },
    PaddleHit,
    BlockDestroyed { index: usize, row: usize, col: usize },
    GameOver,
    Victory,
}

impl GameEvent {
    /// True for events that end the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameOver | GameEvent::Victory)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centered horizontally near the bottom of the window
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.window_width / 2.0 - tuning.paddle_width / 2.0,
                tuning.window_height - tuning.paddle_offset_y,
                tuning.paddle_width,
                tuning.paddle_height,
            ),
        }
    }

    /// Largest x the paddle may reach
    pub fn max_x(&self, window_width: f32) -> f32 {
        window_width - self.rect.size.x
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Unitless direction/speed factors, scaled by `Tuning::ball_speed_scale`
    pub vel: Vec2,
}

impl Ball {
    /// Ball centered in the window, heading down-right
    pub fn new(tuning: &Tuning) -> Self {
        let (vx, vy) = tuning.ball_start_vel;
        Self {
            rect: Rect::new(
                tuning.window_width / 2.0 - tuning.ball_size / 2.0,
                tuning.window_height / 2.0 - tuning.ball_size / 2.0,
                tuning.ball_size,
                tuning.ball_size,
            ),
            vel: Vec2::new(vx, vy),
        }
    }
}

/// A block entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Out of play; still stored so indices stay stable
    pub destroyed: bool,
}

/// Fixed-size, row-major block storage
///
/// Blocks are never added or removed after construction; destroying a block
/// only flips its flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    rows: usize,
    cols: usize,
    blocks: Box<[Block]>,
}

impl BlockGrid {
    /// Tile the top of the playfield, top-to-bottom then left-to-right
    pub fn new(tuning: &Tuning) -> Self {
        let column_width = tuning.column_width();
        let row_height = tuning.block_row_height;

        let blocks = (0..tuning.block_rows)
            .flat_map(|row| (0..tuning.block_cols).map(move |col| (row, col)))
            .map(|(row, col)| Block {
                rect: Rect::new(
                    col as f32 * column_width,
                    row as f32 * row_height,
                    column_width - tuning.block_gap,
                    row_height - tuning.block_gap,
                ),
                destroyed: false,
            })
            .collect();

        Self {
            rows: tuning.block_rows,
            cols: tuning.block_cols,
            blocks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Storage index of (row, col)
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// (row, col) of a storage index
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// All blocks in storage order, destroyed ones included
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Blocks still in play, with their storage index
    pub fn live(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks.iter().enumerate().filter(|(_, b)| !b.destroyed)
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// Mark a block destroyed; returns false if it already was
    pub fn destroy(&mut self, index: usize) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) if !block.destroyed => {
                block.destroyed = true;
                true
            }
            _ => false,
        }
    }

    /// Number of blocks still in play
    pub fn remaining(&self) -> usize {
        self.blocks.iter().filter(|b| !b.destroyed).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.blocks.iter().all(|b| b.destroyed)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Number of ticks applied while playing
    pub frame: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: BlockGrid,
    /// Events from the most recent tick (cleared at the start of each tick)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create the starting state for a game
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Playing,
            frame: 0,
            paddle: Paddle::new(&tuning),
            ball: Ball::new(&tuning),
            blocks: BlockGrid::new(&tuning),
            events: Vec::new(),
            tuning,
        }
    }

    /// Like [`GameState::new`], rejecting tunings that cannot make a game
    pub fn try_new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::new(tuning))
    }

    /// Whether the main loop should keep going
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Quit signal from the window system
    pub fn quit(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Quit;
        }
    }

    /// Take this tick's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move to a terminal phase; the first terminal phase of a game sticks
    pub(crate) fn end(&mut self, phase: GamePhase, event: GameEvent) {
        if self.phase == GamePhase::Playing {
            self.phase = phase;
        }
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_entities() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.paddle.rect, Rect::new(350.0, 570.0, 100.0, 20.0));
        assert_eq!(state.ball.rect, Rect::new(390.0, 290.0, 20.0, 20.0));
        assert_eq!(state.ball.vel, Vec2::new(0.2, 0.2));
        assert!(state.is_running());
    }

    #[test]
    fn test_try_new_validates_tuning() {
        let state = GameState::try_new(Tuning::default()).unwrap();
        assert_eq!(state.blocks.len(), 50);

        let tuning = Tuning {
            block_cols: 0,
            ..Tuning::default()
        };
        assert_eq!(
            GameState::try_new(tuning).unwrap_err(),
            TuningError::EmptyGrid { rows: 5, cols: 0 }
        );
    }

    #[test]
    fn test_grid_layout_row_major() {
        let grid = BlockGrid::new(&Tuning::default());
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.remaining(), 50);

        // First block of the second row follows the last block of the first
        let first = &grid.as_slice()[0];
        let last_of_row0 = &grid.as_slice()[9];
        let first_of_row1 = &grid.as_slice()[10];
        assert_eq!(first.rect, Rect::new(0.0, 0.0, 75.0, 25.0));
        assert_eq!(last_of_row0.rect, Rect::new(720.0, 0.0, 75.0, 25.0));
        assert_eq!(first_of_row1.rect, Rect::new(0.0, 30.0, 75.0, 25.0));

        let bottom_right = &grid.as_slice()[grid.index(4, 9)];
        assert_eq!(bottom_right.rect, Rect::new(720.0, 120.0, 75.0, 25.0));
        assert!(grid.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn test_grid_index_position() {
        let grid = BlockGrid::new(&Tuning::default());
        assert_eq!(grid.index(2, 3), 23);
        assert_eq!(grid.position(23), (2, 3));
        assert_eq!(grid.index(4, 9), grid.len() - 1);
    }

    #[test]
    fn test_destroy_keeps_storage() {
        let mut grid = BlockGrid::new(&Tuning::default());
        assert!(grid.destroy(7));
        assert!(!grid.destroy(7));
        assert!(!grid.destroy(500));
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.remaining(), 49);
        assert_eq!(grid.live().count(), 49);
        assert!(grid.live().all(|(i, _)| i != 7));
        assert!(!grid.all_destroyed());
    }

    #[test]
    fn test_quit_only_from_playing() {
        let mut state = GameState::default();
        state.end(GamePhase::GameOver, GameEvent::GameOver);
        state.quit();
        assert_eq!(state.phase, GamePhase::GameOver);

        let mut state = GameState::default();
        state.quit();
        assert_eq!(state.phase, GamePhase::Quit);
        assert!(!state.is_running());
    }

    #[test]
    fn test_first_terminal_phase_sticks() {
        let mut state = GameState::default();
        state.end(GamePhase::GameOver, GameEvent::GameOver);
        state.end(GamePhase::Victory, GameEvent::Victory);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver, GameEvent::Victory]
        );
        assert!(state.events.is_empty());
    }
}
