//! Platform glue for the native window
//!
//! Handles:
//! - Held keyboard state
//! - Frame timing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::KeyboardState;
