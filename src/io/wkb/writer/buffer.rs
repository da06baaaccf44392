use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::io::wkb::common::Endianness;

/// An append-only byte buffer writing every multi-byte value in one fixed byte order.
#[derive(Debug, Clone)]
pub(crate) struct ByteWriter {
    buf: Vec<u8>,
    endianness: Endianness,
}

impl ByteWriter {
    pub fn with_capacity(endianness: Endianness, capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            endianness,
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0; 4];
        match self.endianness {
            Endianness::BigEndian => BigEndian::write_u32(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_u32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_f64(&mut self, value: f64) {
        let mut bytes = [0; 8];
        match self.endianness {
            Endianness::BigEndian => BigEndian::write_f64(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_f64(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
