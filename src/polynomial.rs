//! Solving polynomials up to degree 2
//!
//! Only real roots are reported, which is all the bounding box extrema need.

use crate::error::ERROR_MARGIN;
use num_traits::{Float, NumCast};

fn error_margin<F: Float>() -> F {
    <F as NumCast>::from(ERROR_MARGIN).unwrap_or_else(F::epsilon)
}

/// Finds the real root of a degree 1 polynomial.
///
/// `0 = coefficients[1] * x + coefficients[0]`
///
/// The number of roots is the length of the result, which is empty if the polynomial is degenerate.
pub fn solve_linear<F: Float>(coefficients: [F; 2]) -> Vec<F> {
    if coefficients[1].abs() <= error_margin() {
        vec![]
    } else {
        vec![-coefficients[0] / coefficients[1]]
    }
}

/// Finds the real roots of a degree 2 polynomial.
///
/// `0 = coefficients[2] * x.powi(2) + coefficients[1] * x + coefficients[0]`
///
/// Falls back to [solve_linear] if the leading coefficient vanishes.
/// A double root is reported once, two distinct roots in ascending order of their numerators.
pub fn solve_quadratic<F: Float>(coefficients: [F; 3]) -> Vec<F> {
    if coefficients[2].abs() <= error_margin() {
        return solve_linear([coefficients[0], coefficients[1]]);
    }
    // https://en.wikipedia.org/wiki/Quadratic_formula
    let two = F::one() + F::one();
    let discriminant = coefficients[1].powi(2) - two * two * coefficients[2] * coefficients[0];
    let denominator = two * coefficients[2];
    if discriminant < F::zero() {
        vec![]
    } else if discriminant == F::zero() {
        vec![-coefficients[1] / denominator]
    } else {
        let q = discriminant.sqrt();
        vec![(-coefficients[1] - q) / denominator, (-coefficients[1] + q) / denominator]
    }
}
