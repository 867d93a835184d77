//! A single contour of line and curve segments

use crate::{
    command::Command,
    conic::Conic,
    polynomial::{solve_linear, solve_quadratic},
    scalar::Scalar,
    utils::{cross, cubic_point, from_real, include_point, midpoint, quadratic_point, to_real, Bounds, Point, Vector},
};
use num_traits::{Float, One, Zero};

/// Winding orientation of a closed contour, assuming the Y axis points down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathDirection {
    /// The contour is open or encloses no area.
    Undefined,
    Clockwise,
    CounterClockwise,
}

impl std::fmt::Display for PathDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::Undefined => "undefined",
            Self::Clockwise => "clockwise",
            Self::CounterClockwise => "counter clockwise",
        })
    }
}

/// Temporary cell of the payload list which [Path::reverse] shuffles around.
enum Holder<T: Scalar> {
    Point(Point<T>),
    Scalar(T::Real),
}

fn next_point<T: Scalar>(holders: &mut impl Iterator<Item = Holder<T>>) -> Point<T> {
    match holders.next() {
        Some(Holder::Point(point)) => point,
        _ => panic!("reversed payload is out of step: expected a point"),
    }
}

fn next_scalar<T: Scalar>(holders: &mut impl Iterator<Item = Holder<T>>) -> T::Real {
    match holders.next() {
        Some(Holder::Scalar(scalar)) => scalar,
        _ => panic!("reversed payload is out of step: expected a weight"),
    }
}

fn in_open_unit_interval<F: Float>(t: F) -> bool {
    F::zero() < t && t < F::one()
}

fn quadratic_extrema<F: Float>(p0: Point<F>, p1: Point<F>, p2: Point<F>) -> Vec<Point<F>> {
    let two = F::one() + F::one();
    let a = p0.to_vector() - p1.to_vector() * two + p2.to_vector();
    let b = p1 - p0;
    let mut parameters = solve_linear([b.x, a.x]);
    parameters.append(&mut solve_linear([b.y, a.y]));
    parameters
        .into_iter()
        .filter(|t| in_open_unit_interval(*t))
        .map(|t| quadratic_point(p0, p1, p2, t))
        .collect()
}

fn cubic_extrema<F: Float>(p0: Point<F>, p1: Point<F>, p2: Point<F>, p3: Point<F>) -> Vec<Point<F>> {
    let three = F::one() + F::one() + F::one();
    let six = three + three;
    let a = (p3.to_vector() - p2.to_vector() * three + p1.to_vector() * three - p0.to_vector()) * three;
    let b = (p0.to_vector() - p1.to_vector() * (three - F::one()) + p2.to_vector()) * six;
    let c = (p1 - p0) * three;
    let mut parameters = solve_quadratic([c.x, b.x, a.x]);
    parameters.append(&mut solve_quadratic([c.y, b.y, a.y]));
    parameters
        .into_iter()
        .filter(|t| in_open_unit_interval(*t))
        .map(|t| cubic_point(p0, p1, p2, p3, t))
        .collect()
}

/// Checks that `commands` start with a move and contain at most one close, at the end.
fn is_well_formed<T: Scalar>(commands: &[Command<T>]) -> bool {
    let starts_with_move = match commands.first() {
        Some(Command::Move { .. }) | None => true,
        Some(_) => false,
    };
    let closes = commands.iter().filter(|command| matches!(command, Command::Close)).count();
    let ends_with_close = matches!(commands.last(), Some(Command::Close));
    starts_with_move
        && commands.iter().skip(1).all(|command| !matches!(command, Command::Move { .. }))
        && (closes == 0 || (closes == 1 && ends_with_close))
}

/// One contour: a move followed by line and curve segments, optionally closed.
///
/// Multiple contours are represented by multiple paths, see [Shape](crate::shape::Shape).
#[derive(Clone, Debug, PartialEq)]
pub struct Path<T: Scalar> {
    commands: Vec<Command<T>>,
}

impl<T: Scalar> Default for Path<T> {
    fn default() -> Self {
        Self { commands: Vec::new() }
    }
}

impl<T: Scalar> Path<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all commands.
    ///
    /// The commands must start with a [Command::Move] and may only end with a [Command::Close].
    pub fn set(&mut self, commands: Vec<Command<T>>) {
        debug_assert!(is_well_formed(&commands), "malformed contour: {:?}", commands);
        self.commands = commands;
    }

    /// Removes all commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn commands(&self) -> &[Command<T>] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command<T>> {
        self.commands.iter()
    }

    /// Allows editing the payload of commands in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Command<T>> {
        self.commands.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Command<T>> {
        self.commands.get(index)
    }

    /// The leading [Command::Move].
    ///
    /// # Panics
    ///
    /// If the path is empty.
    pub fn front(&self) -> &Command<T> {
        match self.commands.first() {
            Some(command) => command,
            None => panic!("front() called on an empty path"),
        }
    }

    pub fn front_mut(&mut self) -> &mut Command<T> {
        match self.commands.first_mut() {
            Some(command) => command,
            None => panic!("front_mut() called on an empty path"),
        }
    }

    /// The last command.
    ///
    /// # Panics
    ///
    /// If the path is empty.
    pub fn back(&self) -> &Command<T> {
        match self.commands.last() {
            Some(command) => command,
            None => panic!("back() called on an empty path"),
        }
    }

    pub fn back_mut(&mut self) -> &mut Command<T> {
        match self.commands.last_mut() {
            Some(command) => command,
            None => panic!("back_mut() called on an empty path"),
        }
    }

    /// A contour is closed if it has at least three commands
    /// and either ends in a [Command::Close] or returns to its start point.
    pub fn closed(&self) -> bool {
        if self.commands.len() < 3 {
            return false;
        }
        match self.back() {
            Command::Close => true,
            command => command.point() == self.front().point(),
        }
    }

    /// Discards all commands and starts over at `point`.
    pub fn move_to<P: Into<Point<T>>>(&mut self, point: P) {
        self.commands.clear();
        self.commands.push(Command::Move { point: point.into() });
    }

    pub fn line_to<P: Into<Point<T>>>(&mut self, point: P) {
        self.push_segment(Command::Line { point: point.into() });
    }

    pub fn quadratic_to<P: Into<Point<T>>>(&mut self, control: P, point: P) {
        self.push_segment(Command::Quadratic {
            control: control.into(),
            point: point.into(),
        });
    }

    pub fn conic_to<P: Into<Point<T>>>(&mut self, control: P, point: P, weight: T::Real) {
        self.push_segment(Command::Conic {
            control: control.into(),
            point: point.into(),
            weight,
        });
    }

    pub fn cubic_to<P: Into<Point<T>>>(&mut self, control1: P, control2: P, point: P) {
        self.push_segment(Command::Cubic {
            control1: control1.into(),
            control2: control2.into(),
            point: point.into(),
        });
    }

    /// Appends a [Command::Close] unless there already is one.
    pub fn close(&mut self) {
        match self.commands.last() {
            None | Some(Command::Close) => {}
            Some(_) => self.commands.push(Command::Close),
        }
    }

    /// Appends a segment, reopening a closed contour first and
    /// closing it again if the segment ends exactly at the start point.
    fn push_segment(&mut self, command: Command<T>) {
        let point = command.point();
        if self.commands.is_empty() {
            self.move_to(point);
            return;
        }
        if let Some(Command::Close) = self.commands.last() {
            self.commands.pop();
        }
        self.commands.push(command);
        if point == self.front().point() {
            self.close();
        }
    }

    /// Axis aligned bounding box, [None] if the path is empty.
    ///
    /// The approximate box contains all anchor and control points, which is cheap and
    /// guaranteed to contain the curves, but not tight.
    /// The precise box adds the extrema of quadratic and cubic segments instead of their control points.
    /// Conic segments still contribute their control point in precise mode.
    pub fn bounds(&self, precise: bool) -> Option<Bounds<T::Real>> {
        if precise {
            self.precise_bounds()
        } else {
            self.approximate_bounds()
        }
    }

    fn approximate_bounds(&self) -> Option<Bounds<T::Real>> {
        let mut bounds = None;
        for command in &self.commands {
            let points = match *command {
                Command::Move { point } | Command::Line { point } => [Some(point), None, None],
                Command::Quadratic { control, point } | Command::Conic { control, point, .. } => [Some(control), Some(point), None],
                Command::Cubic { control1, control2, point } => [Some(control1), Some(control2), Some(point)],
                Command::Close => [None, None, None],
            };
            for point in points.iter().flatten() {
                bounds = Some(include_point(bounds, to_real(*point)));
            }
        }
        bounds
    }

    fn precise_bounds(&self) -> Option<Bounds<T::Real>> {
        let mut commands = self.commands.iter();
        let mut previous = to_real(commands.next()?.point());
        let mut bounds = include_point(None, previous);
        for command in commands {
            match *command {
                Command::Line { point } => {
                    bounds = include_point(Some(bounds), to_real(point));
                }
                Command::Quadratic { control, point } => {
                    let (control, point) = (to_real(control), to_real(point));
                    bounds = include_point(Some(bounds), point);
                    for extremum in quadratic_extrema(previous, control, point) {
                        bounds = include_point(Some(bounds), extremum);
                    }
                }
                Command::Conic { control, point, .. } => {
                    // TODO: Solve for the extrema of the rational curve instead of taking its control point
                    bounds = include_point(Some(bounds), to_real(control));
                    bounds = include_point(Some(bounds), to_real(point));
                }
                Command::Cubic { control1, control2, point } => {
                    let point = to_real(point);
                    bounds = include_point(Some(bounds), point);
                    for extremum in cubic_extrema(previous, to_real(control1), to_real(control2), point) {
                        bounds = include_point(Some(bounds), extremum);
                    }
                }
                Command::Move { .. } | Command::Close => {}
            }
            if let Some(anchor) = command.anchor() {
                previous = to_real(anchor);
            }
        }
        Some(bounds)
    }

    /// Winding orientation of the anchor points (control points are ignored).
    ///
    /// Open contours and contours without area are [PathDirection::Undefined].
    pub fn direction(&self) -> PathDirection {
        if !self.closed() {
            return PathDirection::Undefined;
        }
        let anchors = self.commands.iter().filter_map(Command::anchor).map(to_real).collect::<Vec<_>>();
        let mut sum = T::Real::zero();
        for (current, next) in anchors.iter().zip(anchors.iter().cycle().skip(1)) {
            sum = sum + cross(*current, *next);
        }
        if sum == T::Real::zero() {
            PathDirection::Undefined
        } else if sum < T::Real::zero() {
            PathDirection::CounterClockwise
        } else {
            PathDirection::Clockwise
        }
    }

    /// Traces the same contour in the opposite direction.
    ///
    /// The leading move and a trailing close stay in place,
    /// the payload of all commands in between flows backwards.
    pub fn reverse(&mut self) -> &mut Self {
        if self.commands.is_empty() {
            return self;
        }
        let mut holders = Vec::with_capacity(self.commands.len() * 3);
        for command in &self.commands {
            match *command {
                Command::Move { point } | Command::Line { point } => {
                    holders.push(Holder::Point(point));
                }
                Command::Quadratic { control, point } => {
                    holders.push(Holder::Point(control));
                    holders.push(Holder::Point(point));
                }
                Command::Conic { control, point, weight } => {
                    holders.push(Holder::Point(control));
                    holders.push(Holder::Scalar(weight));
                    holders.push(Holder::Point(point));
                }
                Command::Cubic { control1, control2, point } => {
                    holders.push(Holder::Point(control1));
                    holders.push(Holder::Point(control2));
                    holders.push(Holder::Point(point));
                }
                Command::Close => {}
            }
        }
        let end = match self.commands.last() {
            Some(Command::Close) => self.commands.len() - 1,
            _ => self.commands.len(),
        };
        if end > 1 {
            self.commands[1..end].reverse();
        }
        let mut holders = holders.into_iter().rev();
        for command in &mut self.commands {
            match command {
                Command::Move { point } | Command::Line { point } => {
                    *point = next_point(&mut holders);
                }
                Command::Quadratic { control, point } => {
                    *control = next_point(&mut holders);
                    *point = next_point(&mut holders);
                }
                Command::Conic { control, point, weight } => {
                    // The weight sat between control and point, so it comes first backwards
                    *weight = next_scalar(&mut holders);
                    *control = next_point(&mut holders);
                    *point = next_point(&mut holders);
                }
                Command::Cubic { control1, control2, point } => {
                    *control1 = next_point(&mut holders);
                    *control2 = next_point(&mut holders);
                    *point = next_point(&mut holders);
                }
                Command::Close => {}
            }
        }
        debug_assert!(holders.next().is_none());
        log::trace!("reversed a path of {} commands", self.commands.len());
        self
    }

    pub fn reversed(&self) -> Self {
        let mut path = self.clone();
        path.reverse();
        path
    }

    /// Moves every anchor and control point by `offset`.
    pub fn translate(&mut self, offset: Vector<T>) {
        for command in &mut self.commands {
            match command {
                Command::Move { point } | Command::Line { point } => {
                    *point += offset;
                }
                Command::Quadratic { control, point } | Command::Conic { control, point, .. } => {
                    *control += offset;
                    *point += offset;
                }
                Command::Cubic { control1, control2, point } => {
                    *control1 += offset;
                    *control2 += offset;
                    *point += offset;
                }
                Command::Close => {}
            }
        }
    }

    /// Replaces every quadratic segment by the cubic segment tracing the same curve (degree elevation).
    ///
    /// Returns whether anything changed.
    pub fn convert_quadratics_to_cubics(&mut self) -> bool {
        let mut converted = 0;
        let mut previous = None;
        for command in &mut self.commands {
            if let (Command::Quadratic { control, point }, Some(start)) = (*command, previous) {
                let (a, b, c) = (to_real(start), to_real(control), to_real(point));
                let two = T::Real::one() + T::Real::one();
                let three = two + T::Real::one();
                let control1 = a + (b - a) * two / three;
                let control2 = c + (b - c) * two / three;
                *command = Command::Cubic {
                    control1: from_real(control1),
                    control2: from_real(control2),
                    point,
                };
                converted += 1;
            }
            if let Some(anchor) = command.anchor() {
                previous = Some(anchor);
            }
        }
        if converted > 0 {
            log::debug!("converted {} quadratic segments to cubics", converted);
        }
        converted > 0
    }

    /// Replaces every conic segment by two quadratic segments.
    ///
    /// Returns whether anything changed.
    pub fn convert_conics_to_quadratics(&mut self) -> bool {
        self.convert_conics(|conic| conic.quadratics())
    }

    /// Replaces every conic segment by as many quadratic segments as needed to stay within `tolerance`.
    ///
    /// Returns whether anything changed.
    pub fn convert_conics_to_quadratics_with_tolerance(&mut self, tolerance: T::Real) -> bool {
        self.convert_conics(|conic| conic.quadratics_with_tolerance(tolerance))
    }

    fn convert_conics<A>(&mut self, approximate: A) -> bool
    where
        A: Fn(&Conic<T::Real>) -> Vec<(Point<T::Real>, Point<T::Real>)>,
    {
        let mut converted = 0;
        let mut commands = Vec::with_capacity(self.commands.len() * 2);
        let mut previous = None;
        for command in self.commands.drain(..) {
            match (command, previous) {
                (Command::Conic { control, point, weight }, Some(start)) => {
                    let conic = Conic::new(to_real(start), to_real(control), to_real(point), weight);
                    for (control, point) in approximate(&conic) {
                        commands.push(Command::Quadratic {
                            control: from_real(control),
                            point: from_real(point),
                        });
                    }
                    converted += 1;
                }
                (command, _) => commands.push(command),
            }
            if let Some(anchor) = command.anchor() {
                previous = Some(anchor);
            }
        }
        self.commands = commands;
        if converted > 0 {
            log::debug!("converted {} conic segments to quadratics", converted);
        }
        converted > 0
    }

    /// Merges runs of consecutive anchor points which are no further than `threshold` apart.
    ///
    /// Each run collapses into its first command, which is moved to the midpoint of the run's first and last point.
    /// Points which are close but not adjacent are left alone.
    /// A merged midpoint can end up within `threshold` of the next anchor, so another pass may merge again.
    /// Returns whether anything changed.
    pub fn remove_duplicates(&mut self, threshold: T::Real) -> bool {
        let anchors = self
            .commands
            .iter()
            .enumerate()
            .filter_map(|(index, command)| command.anchor().map(|anchor| (index, to_real(anchor))))
            .collect::<Vec<_>>();
        let mut runs = Vec::new();
        let mut first = 0;
        while first < anchors.len() {
            let mut last = first;
            while last + 1 < anchors.len() && (anchors[last + 1].1 - anchors[last].1).length() <= threshold {
                last += 1;
            }
            if last > first {
                runs.push((first, last));
            }
            first = last + 1;
        }
        if runs.is_empty() {
            return false;
        }
        let mut removed = vec![false; self.commands.len()];
        for &(first, last) in &runs {
            let (index, start) = anchors[first];
            *self.commands[index].point_mut() = from_real(midpoint(start, anchors[last].1));
            for &(index, _) in &anchors[first + 1..=last] {
                removed[index] = true;
            }
        }
        let mut index = 0;
        self.commands.retain(|_| {
            index += 1;
            !removed[index - 1]
        });
        log::debug!("merged {} runs of duplicate points", runs.len());
        true
    }
}

impl<T: Scalar> From<Vec<Command<T>>> for Path<T> {
    fn from(commands: Vec<Command<T>>) -> Self {
        let mut path = Self::default();
        path.set(commands);
        path
    }
}

impl<T: Scalar> std::ops::Index<usize> for Path<T> {
    type Output = Command<T>;

    fn index(&self, index: usize) -> &Command<T> {
        &self.commands[index]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Path<T> {
    fn index_mut(&mut self, index: usize) -> &mut Command<T> {
        &mut self.commands[index]
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Path<T> {
    type Item = &'a Command<T>;
    type IntoIter = std::slice::Iter<'a, Command<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a mut Path<T> {
    type Item = &'a mut Command<T>;
    type IntoIter = std::slice::IterMut<'a, Command<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path<f64> {
        let mut path = Path::new();
        path.move_to([0.0, 0.0]);
        path.line_to([10.0, 0.0]);
        path.line_to([10.0, 10.0]);
        path.line_to([0.0, 10.0]);
        path.line_to([0.0, 0.0]);
        path
    }

    fn mixed() -> Path<f64> {
        let mut path = Path::new();
        path.move_to([0.0, 0.0]);
        path.line_to([4.0, 0.0]);
        path.quadratic_to([6.0, 2.0], [4.0, 4.0]);
        path.conic_to([2.0, 6.0], [0.0, 4.0], 0.5);
        path.cubic_to([-2.0, 3.0], [-2.0, 1.0], [-1.0, 0.5]);
        path
    }

    fn contains(outer: Bounds<f64>, inner: Bounds<f64>) -> bool {
        outer.min.x <= inner.min.x && outer.min.y <= inner.min.y && outer.max.x >= inner.max.x && outer.max.y >= inner.max.y
    }

    #[test]
    fn move_to_starts_over() {
        let mut path = square();
        path.move_to([3.0, 4.0]);
        assert_eq!(path.commands(), &[Command::move_to(Point::new(3.0, 4.0))]);
    }

    #[test]
    fn segments_on_an_empty_path_only_move() {
        let mut path = Path::<f64>::new();
        path.cubic_to([1.0, 1.0], [2.0, 2.0], [3.0, 3.0]);
        assert_eq!(path.commands(), &[Command::move_to(Point::new(3.0, 3.0))]);
    }

    #[test]
    fn touching_the_start_closes_and_further_segments_reopen() {
        let mut path = square();
        assert_eq!(path.len(), 6);
        assert_eq!(path.back(), &Command::Close);
        assert!(path.closed());
        path.line_to([5.0, -5.0]);
        assert_eq!(path.len(), 6);
        assert_eq!(path.back(), &Command::line(Point::new(5.0, -5.0)));
        assert!(!path.closed());
        path.close();
        path.close();
        assert_eq!(path.len(), 7);
        assert!(path.closed());
    }

    #[test]
    fn close_on_an_empty_path_does_nothing() {
        let mut path = Path::<i32>::new();
        path.close();
        assert!(path.is_empty());
    }

    #[test]
    fn closed_needs_three_commands() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.line_to([1.0, 0.0]);
        assert!(!path.closed());
        path.close();
        assert!(!path.closed());
        path.line_to([1.0, 1.0]);
        assert!(!path.closed());
        path.close();
        assert!(path.closed());
    }

    #[test]
    fn closed_by_returning_to_the_start_without_close_command() {
        let path = Path::<i32>::from(vec![
            Command::move_to(Point::new(0, 0)),
            Command::line(Point::new(5, 0)),
            Command::line(Point::new(0, 0)),
        ]);
        assert!(path.closed());
    }

    #[test]
    fn approximate_bounds_cover_control_points() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.quadratic_to([5.0, 10.0], [10.0, 0.0]);
        assert_eq!(path.bounds(false), Some(Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))));
        assert_eq!(path.bounds(true), Some(Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0))));
    }

    #[test]
    fn precise_bounds_of_a_cubic_arch() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.cubic_to([0.0, 8.0], [8.0, 8.0], [8.0, 0.0]);
        let bounds = path.bounds(true).unwrap();
        assert_eq!(bounds.min, Point::new(0.0, 0.0));
        assert_eq!(bounds.max, Point::new(8.0, 6.0));
    }

    #[test]
    fn precise_bounds_keep_conic_control_points() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.conic_to([5.0, 10.0], [10.0, 0.0], 1.0);
        assert_eq!(path.bounds(true), path.bounds(false));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert_eq!(Path::<f32>::new().bounds(false), None);
        assert_eq!(Path::<f32>::new().bounds(true), None);
    }

    #[test]
    fn approximate_bounds_contain_precise_bounds() {
        let path = mixed();
        assert!(contains(path.bounds(false).unwrap(), path.bounds(true).unwrap()));
        let path = path.reversed();
        assert!(contains(path.bounds(false).unwrap(), path.bounds(true).unwrap()));
    }

    #[test]
    fn direction_follows_the_signed_area() {
        let path = square();
        assert_eq!(path.direction(), PathDirection::Clockwise);
        assert_eq!(path.reversed().direction(), PathDirection::CounterClockwise);
        assert_eq!(path.direction().to_string(), "clockwise");
        assert_eq!(PathDirection::CounterClockwise.to_string(), "counter clockwise");
    }

    #[test]
    fn direction_of_open_or_flat_contours_is_undefined() {
        let mut path = Path::<i32>::new();
        path.move_to([0, 0]);
        path.line_to([10, 0]);
        path.line_to([10, 10]);
        assert_eq!(path.direction(), PathDirection::Undefined);
        let mut path = Path::<i32>::new();
        path.move_to([0, 0]);
        path.line_to([5, 5]);
        path.line_to([10, 10]);
        path.close();
        assert!(path.closed());
        assert_eq!(path.direction(), PathDirection::Undefined);
    }

    #[test]
    fn reverse_keeps_move_and_close_in_place() {
        let mut path = Path::<i32>::new();
        path.move_to([0, 0]);
        path.line_to([1, 0]);
        path.quadratic_to([2, 1], [1, 2]);
        path.close();
        path.reverse();
        assert_eq!(
            path.commands(),
            &[
                Command::move_to(Point::new(1, 2)),
                Command::quadratic(Point::new(2, 1), Point::new(1, 0)),
                Command::line(Point::new(0, 0)),
                Command::Close,
            ]
        );
    }

    #[test]
    fn reverse_moves_weights_with_their_conics() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.conic_to([1.0, 1.0], [2.0, 0.0], 0.5);
        path.cubic_to([3.0, 1.0], [4.0, 1.0], [5.0, 0.0]);
        path.reverse();
        assert_eq!(
            path.commands(),
            &[
                Command::move_to(Point::new(5.0, 0.0)),
                Command::cubic(Point::new(4.0, 1.0), Point::new(3.0, 1.0), Point::new(2.0, 0.0)),
                Command::conic(Point::new(1.0, 1.0), Point::new(0.0, 0.0), 0.5),
            ]
        );
    }

    #[test]
    fn reverse_is_an_involution() {
        for path in &[mixed(), square(), Path::new()] {
            let mut twice = path.clone();
            twice.reverse().reverse();
            assert_eq!(&twice, path);
        }
    }

    #[test]
    fn quadratics_elevate_to_cubics() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.quadratic_to([3.0, 6.0], [6.0, 0.0]);
        assert!(path.convert_quadratics_to_cubics());
        assert_eq!(path[1], Command::cubic(Point::new(2.0, 4.0), Point::new(4.0, 4.0), Point::new(6.0, 0.0)));
        assert!(!path.convert_quadratics_to_cubics());
    }

    #[test]
    fn conics_become_two_quadratics() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.conic_to([1.0, 1.0], [2.0, 0.0], 1.0);
        path.line_to([2.0, -1.0]);
        assert!(path.convert_conics_to_quadratics());
        assert_eq!(
            path.commands(),
            &[
                Command::move_to(Point::new(0.0, 0.0)),
                Command::quadratic(Point::new(0.5, 0.5), Point::new(1.0, 0.5)),
                Command::quadratic(Point::new(1.5, 0.5), Point::new(2.0, 0.0)),
                Command::line(Point::new(2.0, -1.0)),
            ]
        );
        assert!(!path.convert_conics_to_quadratics());
    }

    #[test]
    fn conic_conversion_with_tolerance() {
        let mut path = Path::<f64>::new();
        path.move_to([1.0, 0.0]);
        path.conic_to([1.0, 1.0], [0.0, 1.0], std::f64::consts::FRAC_1_SQRT_2);
        let mut coarse = path.clone();
        assert!(coarse.convert_conics_to_quadratics_with_tolerance(1.0));
        assert_eq!(coarse.len(), 2);
        assert!(path.convert_conics_to_quadratics_with_tolerance(0.01));
        assert_eq!(path.len(), 5);
        assert_eq!(path.back().point(), Point::new(0.0, 1.0));
    }

    #[test]
    fn conic_free_paths_stay_untouched() {
        let mut path = square();
        let original = path.clone();
        assert!(!path.convert_conics_to_quadratics());
        assert!(!path.convert_conics_to_quadratics_with_tolerance(0.01));
        assert_eq!(path, original);
    }

    #[test]
    fn remove_duplicates_merges_adjacent_runs() {
        let mut path = Path::<f64>::new();
        path.move_to([0.0, 0.0]);
        path.line_to([10.0, 0.0]);
        path.line_to([10.125, 0.0]);
        path.line_to([10.25, 0.0]);
        path.line_to([10.0, 10.0]);
        path.line_to([0.0, 10.0]);
        assert!(path.remove_duplicates(0.2));
        assert_eq!(path.len(), 4);
        assert_eq!(path[1].point(), Point::new(10.125, 0.0));
        let once = path.clone();
        assert!(!path.remove_duplicates(0.2));
        assert_eq!(path, once);
    }

    #[test]
    fn merged_midpoint_can_merge_again() {
        let mut path = Path::<f64>::new();
        path.move_to([-8.0, 0.0]);
        path.line_to([0.5, 0.0]);
        path.line_to([0.25, 0.0]);
        path.line_to([0.625, 0.0]);
        path.line_to([8.0, 8.0]);
        assert!(path.remove_duplicates(0.25));
        assert_eq!(path.len(), 4);
        assert_eq!(path[1].point(), Point::new(0.375, 0.0));
        assert_eq!(path[2].point(), Point::new(0.625, 0.0));
        assert!(path.remove_duplicates(0.25));
        assert_eq!(path.len(), 3);
        assert_eq!(path[1].point(), Point::new(0.5, 0.0));
        assert!(!path.remove_duplicates(0.25));
    }

    #[test]
    fn remove_duplicates_skips_the_close_command() {
        let mut path = square();
        path.line_to([0.0, 0.0]);
        path.close();
        assert_eq!(path.len(), 7);
        assert!(path.remove_duplicates(0.0));
        assert_eq!(path.len(), 6);
        assert_eq!(path.back(), &Command::Close);
    }

    #[test]
    fn translate_moves_control_points_too() {
        let mut path = Path::<i32>::new();
        path.move_to([0, 0]);
        path.cubic_to([1, 1], [2, 1], [3, 0]);
        path.translate(Vector::new(10, 20));
        assert_eq!(path[1], Command::cubic(Point::new(11, 21), Point::new(12, 21), Point::new(13, 20)));
    }

    #[test]
    #[should_panic(expected = "front() called on an empty path")]
    fn front_of_an_empty_path() {
        Path::<f32>::new().front();
    }
}
