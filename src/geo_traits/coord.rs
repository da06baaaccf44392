use crate::datatypes::Dimension;
use crate::geometry::{Coord, Point};

/// A trait for accessing data from a generic Coord.
pub trait CoordTrait {
    /// x component of this coord
    fn x(&self) -> f64;

    /// y component of this coord
    fn y(&self) -> f64;

    /// z component of this coord, if any
    fn z(&self) -> Option<f64>;

    /// m component of this coord, if any
    fn m(&self) -> Option<f64>;

    /// Native dimension of the coordinate tuple
    fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z().is_some(), self.m().is_some())
    }

    /// Access the n'th (0-based) ordinate in x, y, z, m order, skipping absent ordinates.
    /// Returns `None` if `n` is past the native dimension.
    fn nth(&self, n: usize) -> Option<f64> {
        [Some(self.x()), Some(self.y()), self.z(), self.m()]
            .into_iter()
            .flatten()
            .nth(n)
    }

    /// Returns a tuple that contains the x/horizontal & y/vertical component of the coord.
    fn x_y(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

impl CoordTrait for Coord {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        self.z
    }

    fn m(&self) -> Option<f64> {
        self.m
    }
}

impl CoordTrait for Point {
    fn x(&self) -> f64 {
        self.coord().x
    }

    fn y(&self) -> f64 {
        self.coord().y
    }

    fn z(&self) -> Option<f64> {
        self.coord().z
    }

    fn m(&self) -> Option<f64> {
        self.coord().m
    }
}

impl<C: CoordTrait> CoordTrait for &C {
    fn x(&self) -> f64 {
        (*self).x()
    }

    fn y(&self) -> f64 {
        (*self).y()
    }

    fn z(&self) -> Option<f64> {
        (*self).z()
    }

    fn m(&self) -> Option<f64> {
        (*self).m()
    }
}
