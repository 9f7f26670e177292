//! Shared plumbing for the light simulation
//!
//! This crate provides the window/GPU setup and the software canvas the
//! simulation draws into. The simulation only ever sees the canvas;
//! everything wgpu-specific stays behind `GraphicsContext`.

pub mod canvas;
pub mod graphics;

pub use canvas::*;
pub use graphics::*;
