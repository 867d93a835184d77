use crate::{scalar::Scalar, utils::Point};

/// Payload-free tag of a [Command]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandType {
    Move,
    Line,
    Quadratic,
    Conic,
    Cubic,
    Close,
}

/// A single drawing instruction of a [Path](crate::path::Path).
///
/// Every variant carries only the fields it needs. The start point of a segment is implicit:
/// it is the anchor point of the preceding command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command<T: Scalar> {
    /// Starts the contour.
    Move { point: Point<T> },
    /// Straight line to `point`.
    Line { point: Point<T> },
    /// Integral quadratic bezier curve to `point`.
    Quadratic { control: Point<T>, point: Point<T> },
    /// Rational quadratic bezier curve to `point`, see [Conic](crate::conic::Conic).
    Conic { control: Point<T>, point: Point<T>, weight: T::Real },
    /// Integral cubic bezier curve to `point`.
    Cubic {
        control1: Point<T>,
        control2: Point<T>,
        point: Point<T>,
    },
    /// Connects back to the start of the contour.
    Close,
}

impl<T: Scalar> Command<T> {
    pub fn move_to(point: Point<T>) -> Self {
        Self::Move { point }
    }

    pub fn line(point: Point<T>) -> Self {
        Self::Line { point }
    }

    pub fn quadratic(control: Point<T>, point: Point<T>) -> Self {
        Self::Quadratic { control, point }
    }

    pub fn conic(control: Point<T>, point: Point<T>, weight: T::Real) -> Self {
        Self::Conic { control, point, weight }
    }

    pub fn cubic(control1: Point<T>, control2: Point<T>, point: Point<T>) -> Self {
        Self::Cubic { control1, control2, point }
    }

    pub fn command_type(&self) -> CommandType {
        match self {
            Self::Move { .. } => CommandType::Move,
            Self::Line { .. } => CommandType::Line,
            Self::Quadratic { .. } => CommandType::Quadratic,
            Self::Conic { .. } => CommandType::Conic,
            Self::Cubic { .. } => CommandType::Cubic,
            Self::Close => CommandType::Close,
        }
    }

    /// The anchor (end) point, [None] for [Command::Close].
    pub fn anchor(&self) -> Option<Point<T>> {
        match *self {
            Self::Move { point }
            | Self::Line { point }
            | Self::Quadratic { point, .. }
            | Self::Conic { point, .. }
            | Self::Cubic { point, .. } => Some(point),
            Self::Close => None,
        }
    }

    /// The anchor (end) point.
    ///
    /// # Panics
    ///
    /// If this is a [Command::Close].
    pub fn point(&self) -> Point<T> {
        match self.anchor() {
            Some(point) => point,
            None => panic!("Close command has no point"),
        }
    }

    pub fn point_mut(&mut self) -> &mut Point<T> {
        match self {
            Self::Move { point }
            | Self::Line { point }
            | Self::Quadratic { point, .. }
            | Self::Conic { point, .. }
            | Self::Cubic { point, .. } => point,
            Self::Close => panic!("Close command has no point"),
        }
    }

    /// The control point of a [Command::Quadratic] or [Command::Conic].
    ///
    /// # Panics
    ///
    /// For every other variant, including [Command::Cubic] which has two control points.
    pub fn control(&self) -> Point<T> {
        match *self {
            Self::Quadratic { control, .. } | Self::Conic { control, .. } => control,
            _ => panic!("{:?} command has no control point", self.command_type()),
        }
    }

    pub fn control_mut(&mut self) -> &mut Point<T> {
        let command_type = self.command_type();
        match self {
            Self::Quadratic { control, .. } | Self::Conic { control, .. } => control,
            _ => panic!("{:?} command has no control point", command_type),
        }
    }

    /// The first control point of a [Command::Cubic].
    pub fn control1(&self) -> Point<T> {
        match *self {
            Self::Cubic { control1, .. } => control1,
            _ => panic!("{:?} command has no control1", self.command_type()),
        }
    }

    pub fn control1_mut(&mut self) -> &mut Point<T> {
        let command_type = self.command_type();
        match self {
            Self::Cubic { control1, .. } => control1,
            _ => panic!("{:?} command has no control1", command_type),
        }
    }

    /// The second control point of a [Command::Cubic].
    pub fn control2(&self) -> Point<T> {
        match *self {
            Self::Cubic { control2, .. } => control2,
            _ => panic!("{:?} command has no control2", self.command_type()),
        }
    }

    pub fn control2_mut(&mut self) -> &mut Point<T> {
        let command_type = self.command_type();
        match self {
            Self::Cubic { control2, .. } => control2,
            _ => panic!("{:?} command has no control2", command_type),
        }
    }

    /// The weight of a [Command::Conic].
    pub fn weight(&self) -> T::Real {
        match *self {
            Self::Conic { weight, .. } => weight,
            _ => panic!("{:?} command has no weight", self.command_type()),
        }
    }

    pub fn weight_mut(&mut self) -> &mut T::Real {
        let command_type = self.command_type();
        match self {
            Self::Conic { weight, .. } => weight,
            _ => panic!("{:?} command has no weight", command_type),
        }
    }
}
