use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{GeokitError, Result};
use crate::io::wkb::common::Endianness;

/// A forward-only cursor over an immutable byte slice.
///
/// Every read checks the remaining length first and fails with
/// [`GeokitError::UnexpectedEndOfBuffer`] instead of panicking.
#[derive(Debug, Clone)]
pub(crate) struct ByteReader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(GeokitError::UnexpectedEndOfBuffer { needed, remaining });
        }
        let bytes = &self.buf[self.position..self.position + needed];
        self.position += needed;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self, endianness: Endianness) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(match endianness {
            Endianness::BigEndian => BigEndian::read_u32(bytes),
            Endianness::LittleEndian => LittleEndian::read_u32(bytes),
        })
    }

    pub fn read_f64(&mut self, endianness: Endianness) -> Result<f64> {
        let bytes = self.take(8)?;
        Ok(match endianness {
            Endianness::BigEndian => BigEndian::read_f64(bytes),
            Endianness::LittleEndian => LittleEndian::read_f64(bytes),
        })
    }

    /// Read a u32 element count and check that `count` items of at least `min_item_size`
    /// bytes each can still fit in the buffer.
    ///
    /// This runs before anything is allocated for the elements, so a small buffer declaring a
    /// huge count is rejected up front.
    pub fn read_count(
        &mut self,
        endianness: Endianness,
        min_item_size: usize,
        what: &str,
    ) -> Result<usize> {
        let count = self.read_u32(endianness)? as usize;
        let remaining = self.remaining();
        let fits = count
            .checked_mul(min_item_size)
            .is_some_and(|needed| needed <= remaining);
        if !fits {
            return Err(GeokitError::TruncatedGeometry(format!(
                "{what} declares {count} elements but only {remaining} bytes remain"
            )));
        }
        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_both_byte_orders() {
        let buf = [0x00, 0x00, 0x00, 0x2a, 0x2a, 0x00, 0x00, 0x00];
        let mut reader = ByteReader::new(&buf);
        assert_eq!(reader.read_u32(Endianness::BigEndian).unwrap(), 42);
        assert_eq!(reader.read_u32(Endianness::LittleEndian).unwrap(), 42);
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn reads_f64() {
        let mut buf = 1.5f64.to_le_bytes().to_vec();
        buf.extend_from_slice(&(-2.25f64).to_be_bytes());
        let mut reader = ByteReader::new(&buf);
        assert_eq!(reader.read_f64(Endianness::LittleEndian).unwrap(), 1.5);
        assert_eq!(reader.read_f64(Endianness::BigEndian).unwrap(), -2.25);
    }

    #[test]
    fn end_of_buffer() {
        let buf = [0x01, 0x02, 0x03];
        let mut reader = ByteReader::new(&buf);
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(
            reader.read_u32(Endianness::LittleEndian).unwrap_err(),
            GeokitError::UnexpectedEndOfBuffer {
                needed: 4,
                remaining: 2
            }
        );
        // A failed read does not move the cursor
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn count_guard() {
        let mut buf = u32::MAX.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0; 16]);
        let mut reader = ByteReader::new(&buf);
        assert!(matches!(
            reader.read_count(Endianness::LittleEndian, 16, "LineString"),
            Err(GeokitError::TruncatedGeometry(_))
        ));

        let mut buf = 1u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0; 16]);
        let mut reader = ByteReader::new(&buf);
        assert_eq!(
            reader
                .read_count(Endianness::LittleEndian, 16, "LineString")
                .unwrap(),
            1
        );
    }
}
