//! wgpu rendering module
//!
//! Draws the frame as a single list of solid-colour triangles.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, SurfaceAction, surface_action};
pub use vertex::Vertex;
