//! Turns curves into straight line segments on a `Canvas`.
//!
//! Available routines:
//! - `draw_control_polygon()`
//! - `draw_uniform_sampled()`
//! - `draw_divided()`
use alloc::vec::Vec;

use num_traits::{Float, NumCast};

use crate::color::Color;
use crate::cubic_bezier::CubicBezier;
use crate::point::Point;

/// Largest recursion depth accepted for `draw_divided()` by the demo.
/// A depth of d draws 2^(d+1) - 1 control polygons.
pub const MAX_DIVIDE_DEPTH: usize = 5;

/// Immediate mode line rasterizer the drawing routines emit into.
/// Implementations are expected to always succeed.
pub trait Canvas<P> {
    fn line(&mut self, from: P, to: P, color: Color);
}

/// A recorded line segment, see the `Canvas` impl for `Vec<Segment<P>>`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<P> {
    pub from: P,
    pub to: P,
    pub color: Color,
}

impl<P> Canvas<P> for Vec<Segment<P>> {
    fn line(&mut self, from: P, to: P, color: Color) {
        self.push(Segment { from, to, color });
    }
}

/// Connect the four control points in order (3 segments).
pub fn draw_control_polygon<P, C>(curve: &CubicBezier<P>, canvas: &mut C, color: Color)
where
    P: Point,
    C: Canvas<P> + ?Sized,
{
    canvas.line(curve.start, curve.ctrl1, color);
    canvas.line(curve.ctrl1, curve.ctrl2, color);
    canvas.line(curve.ctrl2, curve.end, color);
}

/// Approximate the curve by a polyline through `samples` evenly spaced parameters
/// `i / samples` for `i in 0..samples`, closed off with a segment to the end point.
/// Emits `samples` segments, or the single chord from start to end if `samples` is zero.
pub fn draw_uniform_sampled<P, C>(curve: &CubicBezier<P>, samples: usize, canvas: &mut C, color: Color)
where
    P: Point,
    C: Canvas<P> + ?Sized,
{
    // sample(0) is exactly the start point, so the walk begins there
    let mut prev = curve.start;
    if samples > 0 {
        let n: P::Scalar = to_scalar(samples);
        for i in 1..samples {
            let curr = curve.sample(to_scalar::<P::Scalar>(i) / n);
            canvas.line(prev, curr, color);
            prev = curr;
        }
    }
    canvas.line(prev, curve.end, color);
}

/// Draw the control polygon of the curve, then recurse into both halves of `divide()`
/// until `depth` reaches zero. Emits 3 * (2^(depth+1) - 1) segments.
pub fn draw_divided<P, C>(curve: &CubicBezier<P>, depth: usize, canvas: &mut C, color: Color)
where
    P: Point,
    C: Canvas<P> + ?Sized,
{
    draw_control_polygon(curve, canvas, color);
    if depth < 1 {
        return;
    }
    let (left, right) = curve.divide();
    draw_divided(&left, depth - 1, canvas, color);
    draw_divided(&right, depth - 1, canvas, color);
}

#[inline]
fn to_scalar<S: Float>(n: usize) -> S {
    // integer to float casts saturate instead of failing
    <S as NumCast>::from(n).unwrap_or_else(S::max_value)
}
