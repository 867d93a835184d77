//! Multiple contours forming one figure

use crate::{
    command::Command,
    path::Path,
    scalar::Scalar,
    utils::{include_bounds, Bounds, Point, Vector},
};

/// Iterator over the commands of all paths of a [Shape], path after path.
pub type Commands<'a, T> = std::iter::FlatMap<std::slice::Iter<'a, Path<T>>, std::slice::Iter<'a, Command<T>>, fn(&'a Path<T>) -> std::slice::Iter<'a, Command<T>>>;

/// An ordered collection of [Path]s, each one an independent contour.
///
/// The drawing methods delegate to the last path,
/// except for [Shape::move_to] which always begins a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape<T: Scalar> {
    paths: Vec<Path<T>>,
}

impl<T: Scalar> Default for Shape<T> {
    fn default() -> Self {
        Self { paths: Vec::new() }
    }
}

impl<T: Scalar> Shape<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all paths.
    pub fn set(&mut self, paths: Vec<Path<T>>) {
        self.paths = paths;
    }

    /// Removes all paths.
    pub fn reset(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of paths (not commands).
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> &[Path<T>] {
        &self.paths
    }

    pub fn paths_mut(&mut self) -> &mut [Path<T>] {
        &mut self.paths
    }

    pub fn into_paths(self) -> Vec<Path<T>> {
        self.paths
    }

    pub fn push(&mut self, path: Path<T>) {
        self.paths.push(path);
    }

    /// # Panics
    ///
    /// If the shape has no paths.
    pub fn front(&self) -> &Path<T> {
        match self.paths.first() {
            Some(path) => path,
            None => panic!("front() called on an empty shape"),
        }
    }

    /// # Panics
    ///
    /// If the shape has no paths.
    pub fn back(&self) -> &Path<T> {
        match self.paths.last() {
            Some(path) => path,
            None => panic!("back() called on an empty shape"),
        }
    }

    /// All commands of all paths, in path order.
    pub fn iter(&self) -> Commands<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Command<T>> + '_ {
        self.paths.iter_mut().flat_map(|path| path.iter_mut())
    }

    /// The path the drawing methods delegate to, created on first use.
    fn current_path(&mut self) -> &mut Path<T> {
        if self.paths.is_empty() {
            log::trace!("starting the first path of a shape implicitly");
            self.paths.push(Path::default());
        }
        let last = self.paths.len() - 1;
        &mut self.paths[last]
    }

    /// Begins a new path at `point`.
    pub fn move_to<P: Into<Point<T>>>(&mut self, point: P) {
        let mut path = Path::default();
        path.move_to(point);
        self.paths.push(path);
    }

    pub fn line_to<P: Into<Point<T>>>(&mut self, point: P) {
        self.current_path().line_to(point);
    }

    pub fn quadratic_to<P: Into<Point<T>>>(&mut self, control: P, point: P) {
        self.current_path().quadratic_to(control, point);
    }

    pub fn conic_to<P: Into<Point<T>>>(&mut self, control: P, point: P, weight: T::Real) {
        self.current_path().conic_to(control, point, weight);
    }

    pub fn cubic_to<P: Into<Point<T>>>(&mut self, control1: P, control2: P, point: P) {
        self.current_path().cubic_to(control1, control2, point);
    }

    pub fn close(&mut self) {
        self.current_path().close();
    }

    /// Union of the bounds of all non-empty paths, [None] if there are none.
    ///
    /// See [Path::bounds] for the meaning of `precise`.
    pub fn bounds(&self, precise: bool) -> Option<Bounds<T::Real>> {
        self.paths.iter().filter_map(|path| path.bounds(precise)).fold(None, |result, bounds| {
            Some(match result {
                Some(result) => include_bounds(result, bounds),
                None => bounds,
            })
        })
    }

    /// Reverses every path, see [Path::reverse].
    pub fn reverse(&mut self) -> &mut Self {
        for path in &mut self.paths {
            path.reverse();
        }
        self
    }

    pub fn translate(&mut self, offset: Vector<T>) {
        for path in &mut self.paths {
            path.translate(offset);
        }
    }

    /// See [Path::convert_quadratics_to_cubics].
    pub fn convert_quadratics_to_cubics(&mut self) -> bool {
        self.paths.iter_mut().fold(false, |changed, path| path.convert_quadratics_to_cubics() || changed)
    }

    /// See [Path::convert_conics_to_quadratics].
    pub fn convert_conics_to_quadratics(&mut self) -> bool {
        self.paths.iter_mut().fold(false, |changed, path| path.convert_conics_to_quadratics() || changed)
    }

    /// See [Path::convert_conics_to_quadratics_with_tolerance].
    pub fn convert_conics_to_quadratics_with_tolerance(&mut self, tolerance: T::Real) -> bool {
        self.paths
            .iter_mut()
            .fold(false, |changed, path| path.convert_conics_to_quadratics_with_tolerance(tolerance) || changed)
    }

    /// See [Path::remove_duplicates].
    pub fn remove_duplicates(&mut self, threshold: T::Real) -> bool {
        self.paths.iter_mut().fold(false, |changed, path| path.remove_duplicates(threshold) || changed)
    }
}

impl<T: Scalar> From<Path<T>> for Shape<T> {
    fn from(path: Path<T>) -> Self {
        Self { paths: vec![path] }
    }
}

impl<T: Scalar> From<Vec<Path<T>>> for Shape<T> {
    fn from(paths: Vec<Path<T>>) -> Self {
        Self { paths }
    }
}

impl<T: Scalar> std::iter::FromIterator<Path<T>> for Shape<T> {
    fn from_iter<I: IntoIterator<Item = Path<T>>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl<T: Scalar> std::ops::Index<usize> for Shape<T> {
    type Output = Path<T>;

    fn index(&self, index: usize) -> &Path<T> {
        &self.paths[index]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Shape<T> {
    fn index_mut(&mut self, index: usize) -> &mut Path<T> {
        &mut self.paths[index]
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Shape<T> {
    type Item = &'a Command<T>;
    type IntoIter = Commands<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter().flat_map(Path::iter as fn(&'a Path<T>) -> std::slice::Iter<'a, Command<T>>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_begins_a_new_path() {
        let mut shape = Shape::<f64>::new();
        shape.move_to([0.0, 0.0]);
        shape.line_to([1.0, 0.0]);
        shape.move_to([5.0, 5.0]);
        shape.line_to([6.0, 5.0]);
        assert_eq!(shape.len(), 2);
        assert_eq!(shape[0].len(), 2);
        assert_eq!(shape[1].front(), &Command::move_to(Point::new(5.0, 5.0)));
    }

    #[test]
    fn drawing_without_move_starts_a_path() {
        let mut shape = Shape::<i32>::new();
        shape.line_to([3, 4]);
        assert_eq!(shape.len(), 1);
        assert_eq!(shape[0].commands(), &[Command::move_to(Point::new(3, 4))]);
        shape.close();
        assert_eq!(shape.len(), 1);
    }

    #[test]
    fn close_on_an_empty_shape_leaves_an_empty_path() {
        let mut shape = Shape::<f32>::new();
        shape.close();
        assert_eq!(shape.len(), 1);
        assert!(shape[0].is_empty());
        assert_eq!(shape.bounds(false), None);
    }

    #[test]
    fn iteration_is_flat_restartable_and_double_ended() {
        let mut shape = Shape::<i32>::new();
        shape.move_to([0, 0]);
        shape.line_to([1, 0]);
        shape.move_to([7, 7]);
        let points = shape.iter().map(Command::point).collect::<Vec<_>>();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(1, 0), Point::new(7, 7)]);
        assert_eq!(shape.iter().count(), 3);
        assert_eq!(shape.iter().next_back(), Some(&Command::move_to(Point::new(7, 7))));
        for command in shape.iter_mut() {
            *command.point_mut() += Vector::new(1, 1);
        }
        assert_eq!((&shape).into_iter().next(), Some(&Command::move_to(Point::new(1, 1))));
    }

    #[test]
    fn bounds_are_the_union_of_path_bounds() {
        let mut shape = Shape::<f64>::new();
        assert_eq!(shape.bounds(true), None);
        shape.move_to([0.0, 0.0]);
        shape.line_to([1.0, 1.0]);
        shape.move_to([-3.0, 2.0]);
        shape.quadratic_to([0.0, 8.0], [3.0, 2.0]);
        assert_eq!(shape.bounds(false), Some(Bounds::new(Point::new(-3.0, 0.0), Point::new(3.0, 8.0))));
        assert_eq!(shape.bounds(true), Some(Bounds::new(Point::new(-3.0, 0.0), Point::new(3.0, 5.0))));
    }

    #[test]
    fn conversions_report_any_change() {
        let mut shape = Shape::<f64>::new();
        shape.move_to([0.0, 0.0]);
        shape.line_to([1.0, 0.0]);
        shape.move_to([0.0, 0.0]);
        shape.conic_to([1.0, 1.0], [2.0, 0.0], 2.0);
        assert!(!shape.convert_quadratics_to_cubics());
        assert!(shape.convert_conics_to_quadratics_with_tolerance(0.5));
        assert!(shape.convert_quadratics_to_cubics());
        assert!(shape[1].iter().skip(1).all(|command| command.command_type() == crate::command::CommandType::Cubic));
        assert!(!shape.convert_conics_to_quadratics());
        assert!(!shape.remove_duplicates(0.001));
    }

    #[test]
    fn shapes_collect_from_paths() {
        let mut path = Path::<f64>::new();
        path.move_to([1.0, 2.0]);
        let shape = vec![path.clone(), path.clone()].into_iter().collect::<Shape<_>>();
        assert_eq!(shape, Shape::from(vec![path.clone(), path.clone()]));
        assert_eq!(Shape::from(path.clone()).len(), 1);
        assert_eq!(shape.back(), &path);
    }
}
