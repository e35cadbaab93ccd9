//! Breakout - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Headless simulation (paddle, ball, blocks, collisions, end states)
//! - `tuning`: Data-driven game balance
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Keyboard state and frame timing
//! - `ui`: End-of-game console prompts

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{InitError, RunError};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Block grid shape
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLS: usize = 10;
    /// Height of one grid row, including the gap
    pub const BLOCK_ROW_HEIGHT: f32 = 30.0;
    /// Gap subtracted from each block's cell in both dimensions
    pub const BLOCK_GAP: f32 = 5.0;

    /// Paddle defaults - centered horizontally, 30px above the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_OFFSET_Y: f32 = 30.0;
    /// Paddle travel (pixels/s)
    pub const PADDLE_SPEED: f32 = 400.0;

    /// Ball defaults - starts at the window center
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_START_VEL: f32 = 0.2;
    /// Scale applied to the ball's unitless velocity factors
    pub const BALL_SPEED_SCALE: f32 = 400.0;

    /// Horizontal speed-up applied on every paddle hit (multiplicative, uncapped)
    pub const PADDLE_BOOST: f32 = 1.1;
}
