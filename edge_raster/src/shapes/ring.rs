use super::arc::*;
use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::render::*;

use std::f32::consts::{FRAC_PI_2, TAU};

impl<const MAX_EDGES: usize, const MAX_FILLS: usize> AllEdges<MAX_EDGES, MAX_FILLS> {
    ///
    /// Adds the edges for a ring segment (the region between two circles, between two angles)
    ///
    /// The segment starts at `begin` and sweeps clockwise (in the direction of increasing angle with y pointing down)
    /// until it reaches `end`. If `begin` and `end` are identical, the ring is closed and has no end caps.
    ///
    /// The outer arc has the fill on its inside and the inner arc has the fill on its outside. The straight caps at
    /// either end join the inner arc to the outer arc. An inner radius of 0 produces a pie slice.
    ///
    pub fn push_ring(&mut self, center: Point, inner_radius: f32, outer_radius: f32, begin: Direction, end: Direction, fill: FillId) {
        if begin == end {
            // Start at the top of the circle so that each circle needs only two arcs
            push_arc(self, center, outer_radius, -FRAC_PI_2, -FRAC_PI_2 + TAU, ArcSide::Inside, fill);
            push_arc(self, center, inner_radius, -FRAC_PI_2, -FRAC_PI_2 + TAU, ArcSide::Outside, fill);
            return;
        }

        let (start_angle, end_angle) = sweep_angles(begin, end);

        push_arc(self, center, outer_radius, start_angle, end_angle, ArcSide::Inside, fill);
        push_arc(self, center, inner_radius, start_angle, end_angle, ArcSide::Outside, fill);

        // Caps: the region lies just clockwise of 'begin', and just anticlockwise of 'end'
        let begin_inner = center + begin * inner_radius;
        let begin_outer = center + begin * outer_radius;
        let begin_fill  = if begin.y < 0.0 { fill } else { FillId::NONE };
        self.push_edge(begin_inner.y, begin_outer.y, begin_fill, Edge::line_between(begin_inner, begin_outer));

        let end_inner   = center + end * inner_radius;
        let end_outer   = center + end * outer_radius;
        let end_fill    = if end.y > 0.0 { fill } else { FillId::NONE };
        self.push_edge(end_inner.y, end_outer.y, end_fill, Edge::line_between(end_inner, end_outer));
    }
}

///
/// Draws an anti-aliased ring segment
///
/// The ring is made from a solid core and two bands one pixel thick that fade out along the inner and outer edges,
/// all of which are rendered from the same edge table. The caps are not anti-aliased.
///
pub fn blit_ring(target: &mut impl RenderTarget, center: Point, inner_radius: f32, outer_radius: f32, begin: Direction, end: Direction, color: U8ArgbPixel) {
    let inner_radius    = inner_radius.max(0.0);

    let mut edges       = AllEdges::<32, 3>::empty();

    if outer_radius - inner_radius < 1.0 {
        // Too thin for the bands to fit without overlapping
        let core = edges.push_fill(color);
        edges.push_ring(center, inner_radius, outer_radius, begin, end, core);
        render(target, &edges);
        return;
    }

    // Outer band: solid at the inside, fading out to nothing one pixel further out
    let outer_band      = edges.push_fill(RadialGradient::new(color, center, outer_radius + 0.5, -1.0));
    edges.push_ring(center, (outer_radius - 0.5).max(0.0), outer_radius + 0.5, begin, end, outer_band);

    // Core
    let core_inner      = if inner_radius > 0.0 { inner_radius + 0.5 } else { 0.0 };
    let core_outer      = outer_radius - 0.5;
    if core_inner < core_outer {
        let core = edges.push_fill(color);
        edges.push_ring(center, core_inner, core_outer, begin, end, core);
    }

    // Inner band: fades out towards the centre of the ring
    if inner_radius > 0.0 {
        let inner_band = edges.push_fill(RadialGradient::new(color, center, inner_radius - 0.5, 1.0));
        edges.push_ring(center, (inner_radius - 0.5).max(0.0), inner_radius + 0.5, begin, end, inner_band);
    }

    render(target, &edges);
}
