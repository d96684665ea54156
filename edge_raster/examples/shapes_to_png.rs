use flo_edge_raster::geometry::*;
use flo_edge_raster::pixel::*;
use flo_edge_raster::render::*;
use flo_edge_raster::shapes::*;

use std::fs::{File};
use std::f32::consts::{PI};

///
/// Draws one of each of the anti-aliased shapes to shapes.png
///
pub fn main() {
    let mut pixels      = vec![U8ArgbPixel::WHITE; 800 * 400];
    let mut frame       = ArgbFrame::from_pixels(800, 400, 800, &mut pixels).unwrap();

    blit_circle(&mut frame, Point::new(100.0, 100.0), 60.0, U8ArgbPixel::opaque(220, 60, 60));
    blit_ring(&mut frame, Point::new(260.0, 100.0), 40.0, 60.0, Direction::from_angle(-PI * 0.25), Direction::from_angle(PI), U8ArgbPixel::opaque(60, 160, 60));
    blit_pie(&mut frame, Point::new(420.0, 100.0), 60.0, Direction::from_angle(-PI * 0.5), Direction::from_angle(PI * 0.25), U8ArgbPixel::opaque(60, 60, 220));
    blit_star(&mut frame, Point::new(580.0, 100.0), 70.0, 28.0, Direction::RIGHT, U8ArgbPixel::opaque(230, 180, 30));
    blit_round_rect(&mut frame, Point::new(40.0, 240.0), Size::new(200.0, 110.0), 24.0, Direction::from_angle(0.1), U8ArgbPixel::opaque(120, 60, 160));

    // Bezier curve, with its control points marked
    let control_points = [Point::new(320.0, 360.0), Point::new(360.0, 200.0), Point::new(560.0, 400.0), Point::new(740.0, 220.0)];
    blit_bezier_stroke(&mut frame, control_points[0], control_points[1], control_points[2], control_points[3], 6.0, U8ArgbPixel::BLACK);

    for point in control_points {
        blit_point(&mut frame, point, U8ArgbPixel::opaque(255, 0, 0));
    }

    let file = File::create("shapes.png").unwrap();
    write_png(&frame, file).unwrap();
}
