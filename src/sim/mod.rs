//! Headless simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time comes in as a measured `dt`, input as a held-key snapshot
//! - Stable iteration order (row-major block storage)
//! - No rendering, windowing or console dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallHit, ball_paddle_collision, ball_wall_collision, first_block_hit};
pub use rect::Rect;
pub use state::{Ball, Block, BlockGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
