use crate::edges::*;
use crate::fill::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::render::*;

use itertools::*;
use smallvec::*;

/// Number of straight segments used to approximate a curve
const CURVE_SEGMENTS: usize = 16;

///
/// Finds the point at `t` along a cubic bezier curve, using de Casteljau's algorithm
///
pub fn de_casteljau(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);

    let d = a.lerp(b, t);
    let e = b.lerp(c, t);

    d.lerp(e, t)
}

///
/// The tangent of a cubic bezier curve at `t` (not normalized, and zero where the control points coincide)
///
fn tangent(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;

    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

///
/// Adds a stroke of a constant width along a cubic bezier curve
///
/// The curve is approximated by straight segments. Each segment becomes a quad, and neighbouring quads share the
/// corners found from the normal at the sample between them, so they tile without gaps. Tight curves can make the
/// quads overlap on the inside of the bend, which will leave a gap in the stroke.
///
pub fn push_bezier_stroke<const MAX_EDGES: usize, const MAX_FILLS: usize>(edges: &mut AllEdges<MAX_EDGES, MAX_FILLS>, p0: Point, p1: Point, p2: Point, p3: Point, width: f32, fill: FillId) {
    let half_width = width * 0.5;

    let samples = (0..=CURVE_SEGMENTS)
        .map(|idx| idx as f32 / CURVE_SEGMENTS as f32)
        .map(|t| (de_casteljau(p0, p1, p2, p3, t), tangent(p0, p1, p2, p3, t)))
        .filter(|(_, tangent)| tangent.abs2() > 0.0)
        .map(|(point, tangent)| {
            let normal = Direction::normalize(tangent).p90();
            (point + normal * half_width, point - normal * half_width)
        })
        .collect::<SmallVec<[_; CURVE_SEGMENTS + 1]>>();

    for ((left0, right0), (left1, right1)) in samples.into_iter().tuple_windows() {
        edges.push_polygon(&[left0, left1, right1, right0], fill);
    }
}

///
/// Draws a solid stroke along a cubic bezier curve
///
pub fn blit_bezier_stroke(target: &mut impl RenderTarget, p0: Point, p1: Point, p2: Point, p3: Point, width: f32, color: U8ArgbPixel) {
    let mut edges   = AllEdges::<{ CURVE_SEGMENTS * 4 }, 1>::empty();
    let stroke      = edges.push_fill(color);

    push_bezier_stroke(&mut edges, p0, p1, p2, p3, width, stroke);

    render(target, &edges);
}
