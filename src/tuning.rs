//! Data-driven game balance
//!
//! Every number the simulation uses lives here so that tests can build
//! smaller or faster games without touching the core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a [`Tuning`] cannot drive a game
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("window size must be positive, got {width}x{height}")]
    Window { width: f32, height: f32 },
    #[error("block grid must have at least one row and column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f32 },
    #[error("paddle ({paddle_width}px) is wider than the window ({window_width}px)")]
    PaddleTooWide { paddle_width: f32, window_width: f32 },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub window_width: f32,
    pub window_height: f32,

    pub block_rows: usize,
    pub block_cols: usize,
    pub block_row_height: f32,
    pub block_gap: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the paddle's top edge to the bottom of the window
    pub paddle_offset_y: f32,
    pub paddle_speed: f32,

    pub ball_size: f32,
    /// Initial (velX, velY) factors
    pub ball_start_vel: (f32, f32),
    pub ball_speed_scale: f32,

    pub paddle_boost: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            block_rows: BLOCK_ROWS,
            block_cols: BLOCK_COLS,
            block_row_height: BLOCK_ROW_HEIGHT,
            block_gap: BLOCK_GAP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset_y: PADDLE_OFFSET_Y,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_start_vel: (BALL_START_VEL, BALL_START_VEL),
            ball_speed_scale: BALL_SPEED_SCALE,

            paddle_boost: PADDLE_BOOST,
        }
    }
}

impl Tuning {
    /// Parse a tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Width of one grid column (the block itself is `block_gap` narrower)
    pub fn column_width(&self) -> f32 {
        // Integer division, so odd widths leave a sliver on the right
        ((self.window_width as u32) / (self.block_cols.max(1) as u32)) as f32
    }

    /// Total number of blocks in the grid
    pub fn block_count(&self) -> usize {
        self.block_rows * self.block_cols
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(TuningError::Window {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.block_rows == 0 || self.block_cols == 0 {
            return Err(TuningError::EmptyGrid {
                rows: self.block_rows,
                cols: self.block_cols,
            });
        }
        for (what, value) in [
            ("block_row_height", self.block_row_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed_scale", self.ball_speed_scale),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { what, value });
            }
        }
        if self.paddle_width > self.window_width {
            return Err(TuningError::PaddleTooWide {
                paddle_width: self.paddle_width,
                window_width: self.window_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert_eq!(tuning.validate(), Ok(()));
        assert_eq!(tuning.block_count(), 50);
        assert_eq!(tuning.column_width(), 80.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "block_rows": 1, "block_cols": 2 }"#).unwrap();
        assert_eq!(tuning.block_count(), 2);
        assert_eq!(tuning.column_width(), 400.0);
        assert_eq!(tuning.paddle_boost, PADDLE_BOOST);
        assert_eq!(tuning.window_height, WINDOW_HEIGHT);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let tuning = Tuning {
            block_cols: 0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::EmptyGrid { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_wide_paddle() {
        let tuning = Tuning {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_ball() {
        let tuning = Tuning {
            ball_size: 0.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NonPositive {
                what: "ball_size",
                value: 0.0
            })
        );
    }
}
