use crate::geometry::*;
use crate::pixel::*;
use crate::render::*;

///
/// Draws a small dot by blending a colour into the 2x2 block of pixels nearest to a point
///
/// Each pixel is blended by how close its centre is to the point, so the dot moves smoothly as the point moves. This
/// doesn't use an edge table: it's used to mark control points and other positions that are smaller than a pixel.
///
pub fn blit_point(target: &mut impl RenderTarget, point: Point, color: U8ArgbPixel) {
    let size    = target.size();
    let x       = point.x - 0.5;
    let y       = point.y - 0.5;
    let left    = x.floor();
    let top     = y.floor();

    for row in [top, top + 1.0] {
        if row < 0.0 || row >= size.height as f32 {
            continue;
        }

        let pixels = target.row_mut(row as usize);

        for col in [left, left + 1.0] {
            if col < 0.0 || col >= size.width as f32 {
                continue;
            }

            let distance    = Point::new(col - x, row - y).len();
            let weight      = (1.0 - distance).max(0.0);
            let pixel       = &mut pixels[col as usize];

            *pixel = pixel.lerp(color, weight);
        }
    }
}
