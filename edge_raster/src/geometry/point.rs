use std::ops::{Add, Sub, Mul, Div, Neg};

///
/// A 2D position (or offset) in pixel coordinates
///
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// Dot product of two points treated as vectors
    #[inline]
    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// The square of the length of this point treated as a vector
    #[inline]
    pub fn abs2(self) -> f32 {
        self.dot(self)
    }

    /// The length of this point treated as a vector
    #[inline]
    pub fn len(self) -> f32 {
        self.abs2().sqrt()
    }

    ///
    /// Linear interpolation between this point and another (`t = 0` is this point, `t = 1` is `other`)
    ///
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, scale: f32) -> Point { Point::new(self.x * scale, self.y * scale) }
}

impl Div<f32> for Point {
    type Output = Point;

    #[inline]
    fn div(self, scale: f32) -> Point { self * (1.0 / scale) }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point { Point::new(-self.x, -self.y) }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Point { Point::new(x, y) }
}
