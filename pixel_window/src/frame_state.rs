use flo_edge_raster::geometry::*;

use tracing::{debug};

use std::time::{Duration};

/// Microseconds of elapsed time per unit of animation time
pub const DEFAULT_TIME_SCALE: f32 = 200000.0;

///
/// The animation state of the demo: the current time and the places the user has clicked
///
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    /// The animation time (shapes rotate at roughly one radian per unit)
    pub time: f32,

    /// Microseconds of real time per unit of animation time
    pub time_scale: f32,

    /// Anchor points for the orbiting circles, one per click
    pub circles: Vec<Point>,
}

impl Default for FrameState {
    fn default() -> Self {
        FrameState::new()
    }
}

impl FrameState {
    ///
    /// Creates the state for the first frame
    ///
    pub fn new() -> FrameState {
        FrameState {
            time:       0.0,
            time_scale: DEFAULT_TIME_SCALE,
            circles:    vec![],
        }
    }

    ///
    /// Moves the animation forward by an amount of real time
    ///
    pub fn advance(&mut self, elapsed: Duration) {
        self.time += elapsed.as_micros() as f32 / self.time_scale;
    }

    ///
    /// Records a mouse click, which adds a circle orbiting the clicked point
    ///
    pub fn mouse_down(&mut self, x: f32, y: f32) {
        debug!(x, y, circle = self.circles.len(), "Mouse down");

        self.circles.push(Point::new(x, y));
    }
}
