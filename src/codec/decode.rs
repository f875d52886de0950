use super::{unpack_byte, LengthError, PackedAlpha};
use crate::{canvas::PIXELS_PER_BYTE, Canvas};
use image::RgbaImage;
use rayon::prelude::*;

const WHITE: [u8; 3] = [255, 255, 255];

/// Rebuild a screen sized raster from a raw packed stream.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, LengthError> {
    decode_with(bytes, Canvas::SCREEN)
}

/// Rebuild a raster from a raw packed stream. The stream must be exactly
/// `canvas.packed_len()` bytes long; nothing is decoded otherwise.
pub fn decode_with(bytes: &[u8], canvas: Canvas) -> Result<RgbaImage, LengthError> {
    if bytes.len() != canvas.packed_len() {
        return Err(LengthError {
            expected: canvas.packed_len(),
            found: bytes.len(),
        });
    }

    Ok(unpack_slice(bytes, canvas))
}

pub(super) fn unpack(packed: &PackedAlpha) -> RgbaImage {
    unpack_slice(&packed.data, packed.canvas)
}

fn unpack_slice(bytes: &[u8], canvas: Canvas) -> RgbaImage {
    let mut image = RgbaImage::new(canvas.width(), canvas.height());
    let stride = canvas.width() as usize * 4;

    (*image)
        .par_chunks_mut(stride)
        .zip(bytes.par_chunks(canvas.row_bytes()))
        .for_each(|(pixels, packed)| unpack_row(packed, pixels));

    image
}

fn unpack_row(packed: &[u8], pixels: &mut [u8]) {
    let group_stride = PIXELS_PER_BYTE as usize * 4;

    // the last chunk is short when the width is not a multiple of 4,
    // which drops the padding levels
    for (&byte, group) in packed.iter().zip(pixels.chunks_mut(group_stride)) {
        for (level, pixel) in unpack_byte(byte).iter().zip(group.chunks_exact_mut(4)) {
            pixel[..3].copy_from_slice(&WHITE);
            pixel[3] = level.alpha();
        }
    }
}
