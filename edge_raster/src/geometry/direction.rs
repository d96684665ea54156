use super::point::*;

use std::ops::{Add, Sub, Mul, Neg};

///
/// A unit vector
///
/// Directions are normally created through `from_angle()`, `normalize()` or `between()`, which guarantee that the
/// length is 1. Multiplying two directions rotates one by the other.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    pub x: f32,
    pub y: f32,
}

impl Direction {
    /// The direction pointing along the positive x axis (the identity rotation)
    pub const RIGHT: Direction = Direction { x: 1.0, y: 0.0 };

    ///
    /// Creates the direction at an angle (in radians) clockwise from the positive x axis (y points downwards)
    ///
    #[inline]
    pub fn from_angle(theta: f32) -> Direction {
        Direction { x: theta.cos(), y: theta.sin() }
    }

    ///
    /// Creates a direction pointing the same way as a vector (which must not be zero-length)
    ///
    #[inline]
    pub fn normalize(vector: Point) -> Direction {
        let scale = 1.0 / vector.len();
        Direction { x: vector.x * scale, y: vector.y * scale }
    }

    ///
    /// The direction from one point towards another
    ///
    #[inline]
    pub fn between(from: Point, to: Point) -> Direction {
        Direction::normalize(to - from)
    }

    /// The angle of this direction, in radians in the range `-PI..=PI`
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotated 90 degrees (clockwise on screen)
    #[inline]
    pub fn p90(self) -> Direction {
        Direction { x: -self.y, y: self.x }
    }

    /// Rotated -90 degrees (anticlockwise on screen)
    #[inline]
    pub fn m90(self) -> Direction {
        Direction { x: self.y, y: -self.x }
    }

    #[inline]
    pub fn as_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The z component of the cross product of two directions (the sine of the angle from `a` to `b`)
#[inline]
pub fn cross(a: Direction, b: Direction) -> f32 {
    a.x * b.y - a.y * b.x
}

impl Mul for Direction {
    type Output = Direction;

    #[inline]
    fn mul(self, rhs: Direction) -> Direction {
        Direction {
            x: self.x * rhs.x - self.y * rhs.y,
            y: self.x * rhs.y + self.y * rhs.x,
        }
    }
}

impl Mul<Point> for Direction {
    type Output = Point;

    /// Rotates a point by this direction
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x - self.y * rhs.y, self.x * rhs.y + self.y * rhs.x)
    }
}

impl Mul<f32> for Direction {
    type Output = Point;

    #[inline]
    fn mul(self, scale: f32) -> Point {
        Point::new(self.x * scale, self.y * scale)
    }
}

impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Direction { Direction { x: -self.x, y: -self.y } }
}

impl Add for Direction {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Direction) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Direction {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Direction) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl From<Direction> for Point {
    #[inline]
    fn from(direction: Direction) -> Point { direction.as_point() }
}
