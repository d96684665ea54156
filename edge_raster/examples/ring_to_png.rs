use flo_edge_raster::edges::*;
use flo_edge_raster::fill::*;
use flo_edge_raster::geometry::*;
use flo_edge_raster::pixel::*;
use flo_edge_raster::render::*;

use std::fs::{File};

///
/// Renders a ring with a gradient band around it to ring.png, using an edge table directly
///
pub fn main() {
    let center          = Point::new(256.0, 256.0);
    let mut pixels      = vec![U8ArgbPixel::WHITE; 512 * 512];
    let mut frame       = ArgbFrame::from_pixels(512, 512, 512, &mut pixels).unwrap();

    // A solid ring, with a band around the outside that fades out
    let mut edges       = AllEdges::new();
    let solid           = edges.push_fill(U8ArgbPixel::opaque(40, 80, 200));
    let fade            = edges.push_fill(RadialGradient::new(U8ArgbPixel::opaque(40, 80, 200), center, 200.0, -40.0));
    let shade           = edges.push_fill(LinearGradient::new(U8ArgbPixel::opaque(200, 40, 40), Point::new(0.0, 200.0), Point::new(0.0, 1.0/112.0)));

    edges.push_ring(center, 100.0, 160.0, Direction::RIGHT, Direction::RIGHT, solid);
    edges.push_ring(center, 160.0, 200.0, Direction::RIGHT, Direction::RIGHT, fade);

    // Fills the hole with a gradient (the inner circle shares its edges with the ring)
    edges.push_ring(center, 0.0, 100.0, Direction::RIGHT, Direction::RIGHT, shade);

    render(&mut frame, &edges);

    let file = File::create("ring.png").unwrap();
    write_png(&frame, file).unwrap();
}
