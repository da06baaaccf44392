use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// A single location in coordinate space.
///
/// A point always holds exactly one coordinate; there is no empty point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Coord,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_coord(Coord::new(x, y))
    }

    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self::from_coord(Coord::new(x, y).with_z(z))
    }

    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self::from_coord(Coord::new(x, y).with_m(m))
    }

    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::from_coord(Coord::new(x, y).with_z(z).with_m(m))
    }

    pub fn from_coord(coord: Coord) -> Self {
        Self { coord }
    }

    pub fn coord(&self) -> &Coord {
        &self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.z
    }

    pub fn m(&self) -> Option<f64> {
        self.coord.m
    }

    pub fn dimension(&self) -> Dimension {
        self.coord.dimension()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::from_coord(value)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self::from_coord(value.into())
    }
}
