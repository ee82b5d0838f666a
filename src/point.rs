use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::{Float, One};

/// Trait defined over generic 2D points which themselves are generic over their `Scalar`.
/// Many libraries already provide point types and the vector operations
/// needed for working with curves, so that implementing this mostly requires wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
pub trait Point: Copy + Debug + Default + PartialEq
where
    Self: Add<Self, Output = Self>,
    Self: Sub<Self, Output = Self>,
    Self: Mul<<Self as Point>::Scalar, Output = Self>,
{
    type Scalar: Float + Debug;

    /// Construct a point from its two coordinates.
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    fn x(&self) -> Self::Scalar;

    fn y(&self) -> Self::Scalar;

    /// Linear interpolation `self * (1 - t) + other * t`.
    ///
    /// The weighted form is exact at both ends: `t = 0` yields `self` and
    /// `t = 1` yields `other` without rounding. Values of `t` outside
    /// `[0, 1]` extrapolate along the line.
    #[inline]
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self * (Self::Scalar::one() - t) + other * t
    }

    /// Returns the squared euclidean distance between `self` and `other`
    fn squared_distance(&self, other: Self) -> Self::Scalar {
        let d = *self - other;
        d.x() * d.x() + d.y() * d.y()
    }
}
