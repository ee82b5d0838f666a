use num_traits::One;
use super::point::Point;

/// Index of one of the four control points of a `CubicBezier`, in curve order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    First,
    Second,
    Third,
    Fourth,
}

impl ControlPoint {
    pub const ALL: [ControlPoint; 4] = [
        ControlPoint::First,
        ControlPoint::Second,
        ControlPoint::Third,
        ControlPoint::Fourth,
    ];

    /// Maps the digits 1 to 4 onto the control points, anything else yields None.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(ControlPoint::First),
            2 => Some(ControlPoint::Second),
            3 => Some(ControlPoint::Third),
            4 => Some(ControlPoint::Fourth),
            _ => None,
        }
    }

    /// One based position of the control point along the curve
    pub fn number(&self) -> u8 {
        match self {
            ControlPoint::First => 1,
            ControlPoint::Second => 2,
            ControlPoint::Third => 3,
            ControlPoint::Fourth => 4,
        }
    }
}

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    pub fn control_point(&self, which: ControlPoint) -> P {
        match which {
            ControlPoint::First => self.start,
            ControlPoint::Second => self.ctrl1,
            ControlPoint::Third => self.ctrl2,
            ControlPoint::Fourth => self.end,
        }
    }

    pub fn set_control_point(&mut self, which: ControlPoint, point: P) {
        let slot = match which {
            ControlPoint::First => &mut self.start,
            ControlPoint::Second => &mut self.ctrl1,
            ControlPoint::Third => &mut self.ctrl2,
            ControlPoint::Fourth => &mut self.end,
        };
        *slot = point;
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm.
    /// t is not clamped: values outside of [0, 1] extrapolate the curve.
    pub fn sample(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start.lerp(self.ctrl1, t);
        let ctrl_1bc = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl_1cd = self.ctrl2.lerp(self.end, t);
        // second iteration
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);
        let ctrl_2bc = ctrl_1bc.lerp(ctrl_1cd, t);
        // third iteration, final point on the curve
        ctrl_2ab.lerp(ctrl_2bc, t)
    }

    /// Evaluate the curve at t by direct evaluation of the Bernstein polynomial
    /// (less stable than `sample()`, mostly useful as a cross check)
    pub fn eval(&self, t: P::Scalar) -> P {
        let one = P::Scalar::one();
        let three = one + one + one;
        let one_t = one - t;

        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (three * t * one_t * one_t)
            + self.ctrl2 * (three * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Split the curve at its parametric midpoint.
    /// Returns the two halves covering [0, 0.5] and [0.5, 1], computed with the
    /// closed form midpoint subdivision. Both halves share the point `sample(0.5)`.
    pub fn divide(&self) -> (Self, Self) {
        let one = P::Scalar::one();
        let two = one + one;
        let three = two + one;
        let half = one / two;
        let quarter = half * half;
        let eighth = quarter * half;

        let (p1, p2, p3, p4) = (self.start, self.ctrl1, self.ctrl2, self.end);
        let mid = (p1 + (p2 + p3) * three + p4) * eighth;

        (
            CubicBezier {
                start: p1,
                ctrl1: (p1 + p2) * half,
                ctrl2: (p1 + p2 * two + p3) * quarter,
                end: mid,
            },
            CubicBezier {
                start: mid,
                ctrl1: (p2 + p3 * two + p4) * quarter,
                ctrl2: (p3 + p4) * half,
                end: p4,
            },
        )
    }

    /// Split the curve at an arbitrary parameter t into the parts covering [0, t] and [t, 1]
    pub fn split(&self, t: P::Scalar) -> (Self, Self) {
        let ctrl_1ab = self.start.lerp(self.ctrl1, t);
        let ctrl_1bc = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl_1cd = self.ctrl2.lerp(self.end, t);
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);
        let ctrl_2bc = ctrl_1bc.lerp(ctrl_1cd, t);
        let ctrl_3ab = ctrl_2ab.lerp(ctrl_2bc, t);

        (
            CubicBezier {
                start: self.start,
                ctrl1: ctrl_1ab,
                ctrl2: ctrl_2ab,
                end: ctrl_3ab,
            },
            CubicBezier {
                start: ctrl_3ab,
                ctrl1: ctrl_2bc,
                ctrl2: ctrl_1cd,
                end: self.end,
            },
        )
    }

    /// Apply `f` to every control point. Since Bezier curves are affine invariant,
    /// mapping the control points by an affine transform maps the whole curve.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(P) -> P,
    {
        CubicBezier {
            start: f(self.start),
            ctrl1: f(self.ctrl1),
            ctrl2: f(self.ctrl2),
            end: f(self.end),
        }
    }
}
