use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// Plain two dimensional point generic over its float type.
/// This type only interacts with the rest of the crate through the
/// `Point` trait, any other type implementing it works just as well.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // scaling multiplies both components by the same scalar
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Debug + Default,
{
    type Scalar = T;

    fn from_xy(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}
