//! Fatal errors
//!
//! Each one ends the process with a non-zero exit code.

use thiserror::Error;

use crate::tuning::TuningError;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Anything that stops the game early
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error initializing graphics: {0}")]
    Init(#[from] InitError),
    #[error("Invalid game tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("Rendering failed: out of GPU memory")]
    OutOfMemory,
}

impl RunError {
    /// Failed before the first frame
    pub fn is_startup(&self) -> bool {
        !matches!(self, RunError::OutOfMemory)
    }
}
