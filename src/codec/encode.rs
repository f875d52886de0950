use super::{pack_byte, PackedAlpha, ShapeError};
use crate::{canvas::PIXELS_PER_BYTE, classify, AlphaLevel, Canvas};
use image::RgbaImage;
use rayon::prelude::*;

/// Pack the alpha channel of a screen sized raster.
pub fn encode(raster: &RgbaImage) -> Result<PackedAlpha, ShapeError> {
    encode_with(raster, Canvas::SCREEN)
}

/// Pack the alpha channel of `raster`, which must already match `canvas`.
/// Color channels are dropped.
pub fn encode_with(raster: &RgbaImage, canvas: Canvas) -> Result<PackedAlpha, ShapeError> {
    if raster.dimensions() != canvas.dimensions() {
        return Err(ShapeError {
            expected: canvas,
            found: raster.dimensions(),
        });
    }

    let mut data = vec![0u8; canvas.packed_len()];
    data.par_chunks_mut(canvas.row_bytes())
        .enumerate()
        .for_each(|(y, row)| pack_row(raster, y as u32, row));

    Ok(PackedAlpha { canvas, data })
}

fn pack_row(raster: &RgbaImage, y: u32, row: &mut [u8]) {
    let width = raster.width();

    for (group, byte) in row.iter_mut().enumerate() {
        let start = group as u32 * PIXELS_PER_BYTE;

        // pixels past the right edge stay transparent
        let mut levels = [AlphaLevel::TRANSPARENT; 4];
        for (i, level) in levels.iter_mut().enumerate() {
            let x = start + i as u32;
            if x < width {
                *level = classify(raster.get_pixel(x, y)[3]);
            }
        }

        *byte = pack_byte(levels);
    }
}
