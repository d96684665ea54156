use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;

use std::f32::consts::{PI, FRAC_PI_2, TAU};

///
/// Which side of an arc the filled region is on
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub (crate) enum ArcSide {
    /// The region lies between the arc and its centre (the outside boundary of a shape)
    Inside,

    /// The region lies on the far side of the arc from its centre (the boundary of a hole)
    Outside,
}

///
/// The angles swept when moving from `begin` to `end` in the direction of increasing angle (clockwise on screen)
///
/// Returns a start angle and an end angle that is greater than it. Identical directions sweep a full circle.
///
pub (crate) fn sweep_angles(begin: Direction, end: Direction) -> (f32, f32) {
    let start_angle = begin.angle();
    let end_angle   = end.angle();

    if end_angle <= start_angle {
        (start_angle, end_angle + TAU)
    } else {
        (start_angle, end_angle)
    }
}

///
/// Pushes the edges of an arc of a circle between two angles (with `start_angle < end_angle`)
///
/// The arc is split wherever it passes the top or the bottom of the circle, so every edge is either part of the left
/// half or part of the right half of the circle and covers at most 180 degrees.
///
pub (crate) fn push_arc<const MAX_EDGES: usize, const MAX_FILLS: usize>(edges: &mut AllEdges<MAX_EDGES, MAX_FILLS>, center: Point, radius: f32, start_angle: f32, end_angle: f32, side: ArcSide, fill: FillId) {
    if radius <= 0.0 {
        return;
    }

    // The poles are at PI/2 + k*PI
    let pole_angle      = |pole_idx: i32| FRAC_PI_2 + (pole_idx as f32) * PI;
    let mut pole_idx    = ((start_angle - FRAC_PI_2) / PI).floor() as i32;

    let mut angle = start_angle;
    while angle < end_angle {
        // The next pole must be strictly after the current angle (an angle that is on a pole can round either way)
        while pole_angle(pole_idx) <= angle {
            pole_idx += 1;
        }

        let next_pole   = pole_angle(pole_idx);
        let next_angle  = if next_pole < end_angle { next_pole } else { end_angle };

        let mid_angle   = (angle + next_angle) * 0.5;
        let is_right    = mid_angle.cos() > 0.0;

        let y0          = center.y + radius * angle.sin();
        let y1          = center.y + radius * next_angle.sin();

        let (edge, fill_right) = match (is_right, side) {
            (true, ArcSide::Inside)     => (Edge::right_arc(center, radius), FillId::NONE),
            (true, ArcSide::Outside)    => (Edge::right_arc(center, radius), fill),
            (false, ArcSide::Inside)    => (Edge::left_arc(center, radius), fill),
            (false, ArcSide::Outside)   => (Edge::left_arc(center, radius), FillId::NONE),
        };

        edges.push_edge(y0, y1, fill_right, edge);

        angle = next_angle;
    }
}
