//! Coordinate types which paths and shapes can be built from

use num_traits::{Float, Num, NumCast};

/// Coordinate type of the points stored in [Command](crate::command::Command)s.
///
/// Curve math never runs in the coordinate type itself but in the associated
/// floating point type [Scalar::Real], so integer paths are promoted
/// explicitly instead of silently truncating in between.
pub trait Scalar: Num + NumCast + Copy + PartialOrd + std::fmt::Debug {
    /// Floating point type computations are promoted to
    type Real: Float + std::fmt::Debug;

    /// Promotes a coordinate to [Scalar::Real].
    fn to_real(self) -> Self::Real;

    /// Demotes a value back to the coordinate type.
    ///
    /// Integer types round to the nearest value.
    fn from_real(value: Self::Real) -> Self;
}

macro_rules! implement {
    ($s_type:ty, float) => {
        impl Scalar for $s_type {
            type Real = $s_type;

            fn to_real(self) -> Self::Real {
                self
            }

            fn from_real(value: Self::Real) -> Self {
                value
            }
        }
    };
    ($s_type:ty, $r_type:ty) => {
        impl Scalar for $s_type {
            type Real = $r_type;

            fn to_real(self) -> Self::Real {
                self as $r_type
            }

            fn from_real(value: Self::Real) -> Self {
                value.round() as $s_type
            }
        }
    };
}

implement!(f32, float);
implement!(f64, float);

implement!(i32, f64);
implement!(i64, f64);
