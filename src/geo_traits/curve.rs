use crate::datatypes::Dimension;
use crate::error::{GeokitError, Result};
use crate::geometry::Point;

use super::CoordTrait;

/// A one-dimensional geometry stored as a sequence of points with linear interpolation.
///
/// Implemented by both [`LineString`](crate::geometry::LineString) and
/// [`LinearRing`](crate::geometry::LinearRing), which share a wire layout.
pub trait CurveTrait {
    /// The vertices of this curve in path order
    fn points(&self) -> &[Point];

    /// The number of points in this curve
    fn num_points(&self) -> usize {
        self.points().len()
    }

    /// Access to a specified point in this curve
    /// Will return None if the provided index is out of bounds
    fn point_n(&self, n: usize) -> Option<&Point> {
        self.points().get(n)
    }

    fn start_point(&self) -> Option<&Point> {
        self.points().first()
    }

    fn end_point(&self) -> Option<&Point> {
        self.points().last()
    }

    /// Whether the start point equals the end point. Empty curves are not closed.
    fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start == end,
            _ => false,
        }
    }

    /// Planar length of this curve, ignoring z and m.
    fn length(&self) -> f64 {
        self.points()
            .windows(2)
            .map(|pair| {
                let (x0, y0) = pair[0].x_y();
                let (x1, y1) = pair[1].x_y();
                (x1 - x0).hypot(y1 - y0)
            })
            .sum()
    }

    /// The single dimension shared by every vertex, or `None` if the curve is empty.
    fn uniform_dimension(&self) -> Result<Option<Dimension>> {
        uniform_dimension(self.points())
    }
}

/// The smallest dimension covering all points, [`Dimension::XY`] when there are none.
pub(crate) fn union_dimension<'a>(points: impl IntoIterator<Item = &'a Point>) -> Dimension {
    points
        .into_iter()
        .fold(Dimension::XY, |dim, point| dim.union(point.dim()))
}

/// Check that all points share one dimension.
pub(crate) fn uniform_dimension<'a>(
    points: impl IntoIterator<Item = &'a Point>,
) -> Result<Option<Dimension>> {
    let mut expected: Option<Dimension> = None;
    for point in points {
        let found = point.dim();
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(GeokitError::MixedDimensions { expected, found })
            }
            Some(_) => {}
        }
    }
    Ok(expected)
}
