use crate::scalar::Scalar;
use num_traits::Float;

/// 2D position, the anchor and control points of commands.
pub type Point<T> = euclid::default::Point2D<T>;

/// 2D displacement.
pub type Vector<T> = euclid::default::Vector2D<T>;

/// Axis aligned bounding box, spanned by its min and max corner (both inclusive).
pub type Bounds<T> = euclid::default::Box2D<T>;

/// Promotes a point to the floating point type of its scalar.
pub fn to_real<T: Scalar>(point: Point<T>) -> Point<T::Real> {
    Point::new(point.x.to_real(), point.y.to_real())
}

/// Demotes a point from the floating point type of its scalar.
pub fn from_real<T: Scalar>(point: Point<T::Real>) -> Point<T> {
    Point::new(T::from_real(point.x), T::from_real(point.y))
}

/// Grows `bounds` so that it contains `point`, creating it if there is none yet.
pub fn include_point<F: Float>(bounds: Option<Bounds<F>>, point: Point<F>) -> Bounds<F> {
    match bounds {
        Some(bounds) => Bounds::new(bounds.min.min(point), bounds.max.max(point)),
        None => Bounds::new(point, point),
    }
}

/// Smallest box containing both boxes.
///
/// Unlike [Box2D::union](euclid::Box2D::union) this keeps degenerate (zero area) boxes.
pub fn include_bounds<F: Float>(bounds: Bounds<F>, other: Bounds<F>) -> Bounds<F> {
    Bounds::new(bounds.min.min(other.min), bounds.max.max(other.max))
}

/// Returns double the signed area of the triangle spanned by the origin and the two given points.
pub fn cross<F: Float>(a: Point<F>, b: Point<F>) -> F {
    a.to_vector().cross(b.to_vector())
}

pub fn midpoint<F: Float>(a: Point<F>, b: Point<F>) -> Point<F> {
    ((a.to_vector() + b.to_vector()) / (F::one() + F::one())).to_point()
}

/// Calculates the point at parameter t of an integral quadratic bezier curve.
pub fn quadratic_point<F: Float>(p0: Point<F>, p1: Point<F>, p2: Point<F>, t: F) -> Point<F> {
    let s = F::one() - t;
    let two = F::one() + F::one();
    (p0.to_vector() * (s * s) + p1.to_vector() * (two * s * t) + p2.to_vector() * (t * t)).to_point()
}

/// Calculates the point at parameter t of an integral cubic bezier curve.
pub fn cubic_point<F: Float>(p0: Point<F>, p1: Point<F>, p2: Point<F>, p3: Point<F>, t: F) -> Point<F> {
    let s = F::one() - t;
    let three = F::one() + F::one() + F::one();
    (p0.to_vector() * (s * s * s) + p1.to_vector() * (three * s * s * t) + p2.to_vector() * (three * s * t * t) + p3.to_vector() * (t * t * t))
        .to_point()
}
