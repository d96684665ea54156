//!
//! # Pixel window
//!
//! An animated scene drawn with `flo_edge_raster`: a pie slice that opens and closes, a spinning rounded rectangle,
//! a ring, a star and a bezier curve, plus an orbiting circle for every mouse click the host reports.
//!
//! All of the animation state lives in `FrameState`. `DemoScene::paint()` only reads it, so any frame can be redrawn
//! (or drawn on another thread) from a copy of the state.
//!

mod noise;
mod frame_state;
mod scene;
mod args;
mod error;

pub use noise::*;
pub use frame_state::*;
pub use scene::*;
pub use args::*;
pub use error::*;
