use crate::error::{GeokitError, Result};
use crate::geometry::{LinearRing, Polygon, Triangle};
use crate::io::wkb::reader::{WkbHeader, WkbReader};

/// A ring holds at least its u32 point count.
const MIN_RING_SIZE: usize = 4;

impl WkbReader<'_> {
    /// Rings are always decoded as `LinearRing`, whatever the caller later does with them.
    fn read_rings(&mut self, header: &WkbHeader, what: &str) -> Result<Vec<LinearRing>> {
        let num_rings = self
            .reader
            .read_count(header.endianness, MIN_RING_SIZE, what)?;
        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            let points = self
                .reader
                .read_points(header.endianness, header.dimension, what)?;
            rings.push(LinearRing::new(points));
        }
        Ok(rings)
    }

    pub(super) fn read_polygon(&mut self, header: &WkbHeader) -> Result<Polygon> {
        let rings = self.read_rings(header, "Polygon")?;
        if rings.is_empty() {
            return Err(GeokitError::TruncatedGeometry(
                "Polygon declares no rings".to_string(),
            ));
        }
        Polygon::try_from_rings(rings)
    }

    pub(super) fn read_triangle(&mut self, header: &WkbHeader) -> Result<Triangle> {
        let mut rings = self.read_rings(header, "Triangle")?;
        if rings.len() != 1 {
            return Err(GeokitError::TruncatedGeometry(format!(
                "Triangle declares {} rings",
                rings.len()
            )));
        }
        Triangle::new(rings.remove(0))
    }
}
