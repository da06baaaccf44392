use crate::datatypes::Dimension;

/// A single position: x and y plus optional z (elevation) and m (measure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn with_z(self, z: f64) -> Self {
        Self { z: Some(z), ..self }
    }

    pub fn with_m(self, m: f64) -> Self {
        Self { m: Some(m), ..self }
    }

    /// The dimension implied by which ordinates are present.
    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coord::new(x, y).with_z(z)
    }
}
