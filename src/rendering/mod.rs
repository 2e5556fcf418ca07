//! Rendering subsystem for drawing the animated background
//!
//! - Background renderer (gradient blobs, grid, particles, bokeh)

pub mod background_renderer;
