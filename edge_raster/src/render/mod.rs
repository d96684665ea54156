//!
//! # Rendering
//!
//! A render target is a rectangle of `U8ArgbPixel`s that can be written one row at a time. Frames are always supplied
//! by the caller (the renderer never allocates or resizes them), and may have a stride wider than their width so that
//! a region of a larger buffer can be used as a target.
//!
//! `render()` sweeps an edge table and composites each span into the target. Each call is independent: nothing is
//! retained between calls, so rendering the same table into two identical frames always produces identical results.
//!

mod frame_size;
mod render_target_trait;
mod argb_frame;
mod span_compositor;
mod edge_table_renderer;

#[cfg(feature="render_png")]
mod png_output;

pub use frame_size::*;
pub use render_target_trait::*;
pub use argb_frame::*;
pub use span_compositor::*;
pub use edge_table_renderer::*;

#[cfg(feature="render_png")]
pub use png_output::*;
