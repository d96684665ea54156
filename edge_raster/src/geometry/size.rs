use super::point::*;

use std::ops::{Mul, Div};

///
/// A width and height (used for rectangles, which are measured along a direction and its perpendicular)
///
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub x: f32,
    pub y: f32,
}

impl Size {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Size {
        Size { x, y }
    }
}

impl Mul<Point> for Size {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point { Point::new(self.x * rhs.x, self.y * rhs.y) }
}

impl Div<Size> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: Size) -> Point { Point::new(self.x / rhs.x, self.y / rhs.y) }
}

impl Div for Size {
    type Output = Size;

    #[inline]
    fn div(self, rhs: Size) -> Size { Size::new(self.x / rhs.x, self.y / rhs.y) }
}
