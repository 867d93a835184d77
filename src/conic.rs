//! Rational quadratic bezier curves and their approximation by integral quadratic ones

use crate::utils::{Point, Vector};
use num_traits::Float;

/// Deepest subdivision level [Conic::quadratics_with_tolerance] will go to.
///
/// Level n produces 2 to the power of n quadratic segments.
pub const MAX_SUBDIVISION: u32 = 5;

/// A rational quadratic bezier curve from `a` to `c`, pulled towards `b` by `weight`.
///
/// A weight of 1 is an ordinary quadratic bezier curve,
/// below 1 an elliptic arc and above 1 a hyperbolic arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conic<F> {
    pub a: Point<F>,
    pub b: Point<F>,
    pub c: Point<F>,
    pub weight: F,
}

impl<F: Float> Conic<F> {
    pub fn new(a: Point<F>, b: Point<F>, c: Point<F>, weight: F) -> Self {
        Self { a, b, c, weight }
    }

    /// Calculates the point at parameter t.
    pub fn point_at(&self, t: F) -> Point<F> {
        let s = F::one() - t;
        let two = F::one() + F::one();
        let wa = s * s;
        let wb = two * s * t * self.weight;
        let wc = t * t;
        ((self.a.to_vector() * wa + self.b.to_vector() * wb + self.c.to_vector() * wc) / (wa + wb + wc)).to_point()
    }

    /// Splits the curve at parameter 1/2 into two halves which together trace the same curve.
    ///
    /// Both halves come out in standard form (end point weights of 1).
    pub fn chop(&self) -> (Self, Self) {
        let one = F::one();
        let two = one + one;
        let scale = one / (one + self.weight);
        let weight = ((one + self.weight) / two).sqrt();
        let weighted: Vector<F> = self.b.to_vector() * self.weight;
        let a = self.a.to_vector();
        let c = self.c.to_vector();
        let middle = ((a + weighted + weighted + c) * scale / two).to_point();
        (
            Self::new(self.a, ((a + weighted) * scale).to_point(), middle, weight),
            Self::new(middle, ((weighted + c) * scale).to_point(), self.c, weight),
        )
    }

    /// Halves the curve recursively `level` times.
    ///
    /// Returns the (control point, end point) pairs of 2 to the power of `level` quadratic segments.
    /// The start point of each segment is the end point of the previous one, starting at `a`.
    pub fn subdivide(&self, level: u32) -> Vec<(Point<F>, Point<F>)> {
        if level == 0 {
            return vec![(self.b, self.c)];
        }
        let (first, second) = self.chop();
        let mut result = first.subdivide(level - 1);
        result.append(&mut second.subdivide(level - 1));
        result
    }

    /// Approximates the curve by two quadratic segments.
    pub fn quadratics(&self) -> Vec<(Point<F>, Point<F>)> {
        self.subdivide(1)
    }

    /// Approximates the curve by as many quadratic segments as needed to stay within `tolerance`,
    /// but no more than 2 to the power of [MAX_SUBDIVISION].
    ///
    /// A tolerance of zero or below does not subdivide at all.
    pub fn quadratics_with_tolerance(&self, tolerance: F) -> Vec<(Point<F>, Point<F>)> {
        let mut level = 0;
        if tolerance > F::zero() {
            let one = F::one();
            let two = one + one;
            let four = two + two;
            let k = (self.weight - one) / (four * (self.weight + one));
            let deviation = self.a.to_vector() - self.b.to_vector() * two + self.c.to_vector();
            let mut error = (deviation * k).length();
            let quarter = one / four;
            while level < MAX_SUBDIVISION && error > tolerance {
                error = error * quarter;
                level += 1;
            }
        }
        self.subdivide(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point<f64>, b: Point<f64>) {
        assert!((a - b).length() < 1.0e-9, "{:?} != {:?}", a, b);
    }

    fn quarter_circle() -> Conic<f64> {
        Conic::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 1.0), std::f64::consts::FRAC_1_SQRT_2)
    }

    #[test]
    fn chop_meets_at_the_curve_midpoint() {
        for weight in &[0.25, 0.5, 1.0, 2.0, 10.0] {
            let conic = Conic::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, -1.0), *weight);
            let (first, second) = conic.chop();
            assert_close(first.c, conic.point_at(0.5));
            assert_eq!(first.c, second.a);
            assert_eq!(first.a, conic.a);
            assert_eq!(second.c, conic.c);
            assert_eq!(first.weight, second.weight);
        }
    }

    #[test]
    fn chop_of_a_circle_stays_on_the_circle() {
        let (first, second) = quarter_circle().chop();
        for half in &[first, second] {
            for t in &[0.1, 0.5, 0.9] {
                assert!((half.point_at(*t).to_vector().length() - 1.0).abs() < 1.0e-9);
            }
        }
    }

    #[test]
    fn chop_of_a_parabola_keeps_the_parametrization() {
        let conic = Conic::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(4.0, 0.0), 1.0);
        let (first, second) = conic.chop();
        assert_eq!(first.weight, 1.0);
        assert_close(first.point_at(0.5), conic.point_at(0.25));
        assert_close(second.point_at(0.5), conic.point_at(0.75));
    }

    #[test]
    fn subdivide_orders_left_before_right() {
        let conic = quarter_circle();
        assert_eq!(conic.subdivide(0), vec![(conic.b, conic.c)]);
        let segments = conic.subdivide(2);
        assert_eq!(segments.len(), 4);
        let (first, second) = conic.chop();
        assert_eq!(&segments[..2], &first.subdivide(1)[..]);
        assert_eq!(&segments[2..], &second.subdivide(1)[..]);
        assert_eq!(segments[3].1, conic.c);
        assert_eq!(conic.quadratics(), conic.subdivide(1));
    }

    #[test]
    fn tolerance_picks_the_subdivision_level() {
        let conic = quarter_circle();
        assert_eq!(conic.quadratics_with_tolerance(0.0).len(), 1);
        assert_eq!(conic.quadratics_with_tolerance(-1.0).len(), 1);
        assert_eq!(conic.quadratics_with_tolerance(1.0).len(), 1);
        assert_eq!(conic.quadratics_with_tolerance(0.01).len(), 4);
        assert_eq!(conic.quadratics_with_tolerance(1.0e-12).len(), 32);
    }

    #[test]
    fn plain_quadratic_needs_no_subdivision() {
        let conic = Conic::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0), 1.0);
        assert_eq!(conic.quadratics_with_tolerance(0.001), vec![(conic.b, conic.c)]);
    }
}
