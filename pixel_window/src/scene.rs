use super::noise::*;
use super::frame_state::*;

use flo_edge_raster::edges::*;
use flo_edge_raster::fill::*;
use flo_edge_raster::geometry::*;
use flo_edge_raster::pixel::*;
use flo_edge_raster::render::*;
use flo_edge_raster::shapes::*;

use tracing::{debug};

use std::f32::consts::{PI, TAU};

/// Number of marker dots drawn along the bezier curve
const CURVE_MARKERS: usize = 32;

/// The edge table used for the animated pie slice (two halves sharing one fill)
pub type PieEdges = AllEdges<16, 1>;

///
/// The shapes drawn by the demo, and the colours they are drawn in
///
/// The scene itself has no animation state: everything that changes from frame to frame is read from a `FrameState`.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoScene {
    pub background:     U8ArgbPixel,
    pub pie_color:      U8ArgbPixel,
    pub rect_color:     U8ArgbPixel,
    pub ring_color:     U8ArgbPixel,
    pub star_color:     U8ArgbPixel,
    pub curve_color:    U8ArgbPixel,
    pub marker_color:   U8ArgbPixel,
}

impl Default for DemoScene {
    fn default() -> Self {
        DemoScene {
            background:     U8ArgbPixel::WHITE,
            pie_color:      U8ArgbPixel::opaque(255, 0, 0),
            rect_color:     U8ArgbPixel::opaque(40, 90, 200),
            ring_color:     U8ArgbPixel::opaque(30, 160, 80),
            star_color:     U8ArgbPixel::opaque(220, 215, 0),
            curve_color:    U8ArgbPixel::BLACK,
            marker_color:   U8ArgbPixel::opaque(255, 0, 0),
        }
    }
}

impl DemoScene {
    ///
    /// Draws a whole frame of the scene
    ///
    pub fn paint(&self, state: &FrameState, target: &mut impl RenderTarget) {
        self.clear(target);
        render(target, &self.pie_edges(state));
        self.paint_overlays(state, target);
    }

    ///
    /// Fills a target with the background colour
    ///
    pub fn clear(&self, target: &mut impl RenderTarget) {
        let size = target.size();

        for y in 0..size.height {
            target.row_mut(y).fill(self.background);
        }
    }

    ///
    /// Builds the edge table for the pie slice, which opens and closes as time passes
    ///
    /// The slice runs clockwise from `time` to `1.3*time + 0.5` radians. Pies can cover at most half a circle, so wider
    /// slices are split into two halves that share a side. The shared side produces identical edges in both halves, so
    /// the join is seamless.
    ///
    pub fn pie_edges(&self, state: &FrameState) -> PieEdges {
        let t           = state.time;
        let center      = Point::new(45.0, 45.0);
        let radius      = 30.0;

        let begin_angle = t;
        let end_angle   = 1.3*t + 0.5;
        let mut sweep   = (end_angle - begin_angle).rem_euclid(TAU);
        if sweep <= 0.0 {
            sweep = TAU;
        }

        let mut edges   = PieEdges::empty();
        let fill        = edges.push_fill(RadialGradient::new(self.pie_color, center, radius, -radius));

        let begin       = Direction::from_angle(begin_angle);
        let end         = Direction::from_angle(begin_angle + sweep);

        if sweep > PI {
            let middle = Direction::from_angle(begin_angle + sweep * 0.5);

            edges.push_pie(center, radius, begin, middle, fill);
            edges.push_pie(center, radius, middle, end, fill);
        } else {
            edges.push_pie(center, radius, begin, end, fill);
        }

        edges
    }

    ///
    /// Draws everything in the scene apart from the background and the pie slice
    ///
    pub fn paint_overlays(&self, state: &FrameState, target: &mut impl RenderTarget) {
        let t       = state.time;
        let size    = target.size();

        // Rounded rectangle spinning about its centre
        let horizontal  = Direction::from_angle(t);
        let rect_size   = Size::new(50.0, 30.0);
        let rect_center = Point::new(150.0, 45.0);
        let position    = rect_center - horizontal * (rect_size.x * 0.5) - horizontal.p90() * (rect_size.y * 0.5);
        blit_round_rect(target, position, rect_size, 10.0, horizontal, self.rect_color);

        // A ring with a gap that travels around it
        blit_ring(target, Point::new(250.0, 45.0), 18.0, 30.0, Direction::from_angle(0.7*t), Direction::from_angle(0.7*t + 4.0), self.ring_color);

        // Star with its top point rotating
        blit_star(target, Point::new(350.0, 48.0), 34.0, 14.0, Direction::from_angle(0.5*t), self.star_color);

        self.paint_curve(t, size, target);
        self.paint_circles(state, target);
    }

    ///
    /// The control points of the bezier curve at a particular time
    ///
    pub fn curve_points(&self, time: f32, size: FrameSize) -> [Point; 4] {
        let w       = size.width as f32;
        let h       = size.height as f32;
        let anchors = [
            Point::new(w / 6.0,         h * 2.0/3.0),
            Point::new(w / 3.0,         h / 3.0),
            Point::new(w * 2.0/3.0,     h * 2.0/3.0 + h / 6.0),
            Point::new(w * 5.0/6.0,     h / 3.0 + h / 6.0),
        ];

        let mut points = anchors;
        for (k, point) in points.iter_mut().enumerate() {
            let angle   = (k + 1) as f32 * 0.1 * time;
            *point      = *point + Point::new(angle.cos(), angle.sin()) * 10.0;
        }

        points
    }

    fn paint_curve(&self, time: f32, size: FrameSize, target: &mut impl RenderTarget) {
        let [p0, p1, p2, p3] = self.curve_points(time, size);

        blit_bezier_stroke(target, p0, p1, p2, p3, 3.0, self.curve_color);

        for idx in 0..=CURVE_MARKERS {
            let pos = idx as f32 / CURVE_MARKERS as f32;
            blit_point(target, de_casteljau(p0, p1, p2, p3, pos), self.curve_color);
        }

        for control_point in [p0, p1, p2, p3] {
            blit_point(target, control_point, self.marker_color);
        }
    }

    fn paint_circles(&self, state: &FrameState, target: &mut impl RenderTarget) {
        for (idx, anchor) in state.circles.iter().enumerate() {
            let circle = orbiting_circle(idx, *anchor, state.time);

            blit_circle(target, circle.center, circle.radius, circle.color);
        }

        if !state.circles.is_empty() {
            debug!(circles = state.circles.len(), "Painted circles");
        }
    }
}

///
/// Where one of the click circles is at a particular time
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitingCircle {
    pub center: Point,
    pub radius: f32,
    pub color:  U8ArgbPixel,
}

///
/// Works out the position, size and colour of the circle added by a click
///
/// Every property is picked by noise from the index of the click, so a circle looks the same on every frame and in
/// every run.
///
pub fn orbiting_circle(idx: usize, anchor: Point, time: f32) -> OrbitingCircle {
    let idx     = idx as i32;
    let radius  = (noise(idx, 0) % 100 + 20) as f32 / 5.0;
    let phase   = (noise(idx, 1) % 628) as f32 / 100.0;
    let speed   = (noise(idx, 2) % 200) as f32 / 100.0;

    let angle   = speed * time + phase;
    let center  = anchor + Point::new(angle.sin(), angle.cos()) * 10.0;

    OrbitingCircle { center, radius, color: color_noise(idx, 5) }
}
