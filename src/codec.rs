use crate::{AlphaLevel, Canvas};
use image::RgbaImage;
use thiserror::Error;

mod decode;
pub use decode::{decode, decode_with};

mod encode;
pub use encode::{encode, encode_with};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Raster is {}x{} but the canvas is {expected}", .found.0, .found.1)]
pub struct ShapeError {
    pub expected: Canvas,
    pub found: (u32, u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Packed stream is {found} bytes long, expected {expected}")]
pub struct LengthError {
    pub expected: usize,
    pub found: usize,
}

/// A 2bpp alpha stream together with the canvas it was packed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedAlpha {
    canvas: Canvas,
    data: Vec<u8>,
}

impl PackedAlpha {
    /// Wrap raw bytes, checking that the length matches the canvas.
    pub fn from_bytes(data: Vec<u8>, canvas: Canvas) -> Result<Self, LengthError> {
        if data.len() != canvas.packed_len() {
            return Err(LengthError {
                expected: canvas.packed_len(),
                found: data.len(),
            });
        }

        Ok(PackedAlpha { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn crc(&self) -> u32 {
        crc32fast::hash(&self.data)
    }

    /// Bytes making up row `y`.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.canvas.height() {
            return None;
        }

        let row_bytes = self.canvas.row_bytes();
        let start = y as usize * row_bytes;
        Some(&self.data[start..start + row_bytes])
    }

    /// Level of the single pixel at (x, y), or `None` outside the canvas.
    pub fn level_at(&self, x: u32, y: u32) -> Option<AlphaLevel> {
        if !self.canvas.contains(x, y) {
            return None;
        }

        let byte = self.data[self.canvas.offset(x, y)];
        Some(unpack_byte(byte)[(x % 4) as usize])
    }

    /// Rebuild the white raster carrying the decoded alpha.
    pub fn to_image(&self) -> RgbaImage {
        decode::unpack(self)
    }
}

impl AsRef<[u8]> for PackedAlpha {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Pack four levels, leftmost pixel in the most significant bits.
pub const fn pack_byte(levels: [AlphaLevel; 4]) -> u8 {
    (levels[0].as_u8() << 6)
        | (levels[1].as_u8() << 4)
        | (levels[2].as_u8() << 2)
        | levels[3].as_u8()
}

pub const fn unpack_byte(byte: u8) -> [AlphaLevel; 4] {
    [
        AlphaLevel::from_bits(byte >> 6),
        AlphaLevel::from_bits(byte >> 4),
        AlphaLevel::from_bits(byte >> 2),
        AlphaLevel::from_bits(byte),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_is_big_endian() {
        let levels = [
            AlphaLevel::new(3),
            AlphaLevel::new(0),
            AlphaLevel::new(1),
            AlphaLevel::new(2),
        ];

        assert_eq!(pack_byte(levels), 0b11_00_01_10);
        assert_eq!(unpack_byte(0b11_00_01_10), levels);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = PackedAlpha::from_bytes(vec![0; 100], Canvas::SCREEN).unwrap_err();
        assert_eq!(
            err,
            LengthError {
                expected: 19_200,
                found: 100
            }
        );
    }

    #[test]
    fn level_lookup() {
        let canvas = Canvas::new(8, 2);
        let packed =
            PackedAlpha::from_bytes(vec![0x00, 0x00, 0b00_00_10_00, 0b00_00_00_11], canvas)
                .unwrap();

        assert_eq!(packed.level_at(2, 1), Some(AlphaLevel::new(2)));
        assert_eq!(packed.level_at(7, 1), Some(AlphaLevel::OPAQUE));
        assert_eq!(packed.level_at(0, 0), Some(AlphaLevel::TRANSPARENT));
        assert_eq!(packed.level_at(8, 0), None);
        assert_eq!(packed.level_at(0, 2), None);
        assert_eq!(packed.row(1), Some(&[0b00_00_10_00, 0b00_00_00_11][..]));
    }
}
