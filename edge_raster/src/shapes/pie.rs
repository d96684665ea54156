use super::arc::*;
use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::render::*;

use std::f32::consts::{PI};

/// Slack allowed when checking that a pie slice is no larger than a half circle
const HALF_CIRCLE_TOLERANCE: f32 = 1e-4;

impl<const MAX_EDGES: usize, const MAX_FILLS: usize> AllEdges<MAX_EDGES, MAX_FILLS> {
    ///
    /// Adds a pie slice, sweeping clockwise from `begin` to `end`
    ///
    /// # Panics
    ///
    /// If the slice covers more than half of the circle. Larger slices can be made from two pies, or from a ring with
    /// an inner radius of 0.
    ///
    pub fn push_pie(&mut self, center: Point, radius: f32, begin: Direction, end: Direction, fill: FillId) {
        let (start_angle, end_angle) = sweep_angles(begin, end);
        assert!(end_angle - start_angle <= PI + HALF_CIRCLE_TOLERANCE, "Pie slices cannot cover more than half a circle (sweep is {} radians)", end_angle - start_angle);

        self.push_ring(center, 0.0, radius, begin, end, fill);
    }
}

///
/// Draws a pie slice with a single fill (it is not anti-aliased, though a radial gradient can be used to fade it out)
///
/// # Panics
///
/// If the slice covers more than half of the circle
///
pub fn blit_pie(target: &mut impl RenderTarget, center: Point, radius: f32, begin: Direction, end: Direction, fill: impl Into<Fill>) {
    let mut edges = AllEdges::<8, 0>::empty();
    edges.push_pie(center, radius, begin, end, FillId::FIRST);

    render_with_fill(target, &edges, &fill.into());
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quarter_pie() {
        let mut edges = AllEdges::new();
        edges.push_pie(Point::new(50.0, 50.0), 20.0, Direction::RIGHT, Direction::from_angle(PI / 2.0), FillId::FIRST);

        // One arc and one cap (the cap along the x axis covers no rows)
        assert!(edges.edge_count() == 2, "{:?}", edges);
    }

    #[test]
    #[should_panic]
    fn pie_larger_than_half_circle() {
        let mut edges = AllEdges::new();
        edges.push_pie(Point::new(50.0, 50.0), 20.0, Direction::RIGHT, Direction::from_angle(PI * 1.5), FillId::FIRST);
    }
}
