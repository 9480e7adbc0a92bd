use std::ops::Deref;

use blockpath_core::Point;

/// An ordered walk over grid coordinates, from the search start to its end.
///
/// A path is never empty: a failed search yields the single-point path
/// `[start]`. Use [`reaches`](Path::reaches) to tell the outcomes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// The coordinates, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last coordinate.
    #[inline]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of unit moves along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Whether the path ends at `goal`.
    #[inline]
    pub fn reaches(&self, goal: Point) -> bool {
        self.end() == goal
    }

    /// Consume the path, returning its coordinates.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = &'static str;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            return Err("path must hold at least one point");
        }
        Ok(Self { points })
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.points
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
