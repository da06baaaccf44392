use crate::geo_traits::CurveTrait;
use crate::geometry::Point;

/// An ordered sequence of points joined by straight segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// A line string with exactly two points.
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(vec![start, end])
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl CurveTrait for LineString {
    fn points(&self) -> &[Point] {
        &self.points
    }
}

impl From<Vec<Point>> for LineString {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

impl From<LinearRing> for LineString {
    fn from(value: LinearRing) -> Self {
        Self::new(value.into_points())
    }
}

/// A line string used as a polygon boundary.
///
/// [`LinearRing::new`] stores the points as given. Use [`LinearRing::closed`] to have the
/// ring closed by appending the first point when it differs from the last one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    points: Vec<Point>,
}

impl LinearRing {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a ring, appending the first point if the sequence is not already closed.
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if first != last {
                let first = *first;
                points.push(first);
            }
        }
        Self { points }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl CurveTrait for LinearRing {
    fn points(&self) -> &[Point] {
        &self.points
    }
}

impl From<LineString> for LinearRing {
    fn from(value: LineString) -> Self {
        Self::new(value.into_points())
    }
}
