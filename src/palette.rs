use crate::{codec::unpack_byte, AlphaLevel, PackedAlpha};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use serde::Deserialize;
use std::{
    fs,
    path::Path,
    sync::{Arc, LazyLock},
};
use thiserror::Error;

static INBUILT_PALETTES: LazyLock<Vec<Arc<DisplayPalette>>> = LazyLock::new(|| {
    const INBUILT_PALETTE_SRC: &[&str] = &[include_str!("palette/ti84.toml")];
    INBUILT_PALETTE_SRC
        .iter()
        .map(|&src| Arc::new(DisplayPalette::parse(src).expect("Failed to parse inbuilt palette")))
        .collect()
});

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse palette")]
    Parse(#[from] toml::de::Error),
}

/// Colors a device uses to draw each alpha level, as 8-bit RGB332 values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayPalette {
    pub name: String,
    pub colors: [u8; 4],
}

impl DisplayPalette {
    pub fn parse(src: &str) -> Result<DisplayPalette, toml::de::Error> {
        toml::de::from_str(src)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<DisplayPalette, PaletteError> {
        let src = fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&src)?)
    }

    pub fn inbuilt(name: &str) -> Option<Arc<DisplayPalette>> {
        INBUILT_PALETTES
            .iter()
            .find(|palette| palette.name == name)
            .cloned()
    }

    /// The palette of the calculator the format was made for.
    pub fn device() -> Arc<DisplayPalette> {
        INBUILT_PALETTES[0].clone()
    }

    pub const fn color(&self, level: AlphaLevel) -> u8 {
        self.colors[level.as_u8() as usize]
    }

    /// Draw the stream into an 8bpp framebuffer, one byte per pixel, row-major.
    pub fn render_rgb332(&self, packed: &PackedAlpha) -> Vec<u8> {
        let canvas = packed.canvas();
        let mut framebuffer = vec![0u8; canvas.pixel_count()];

        framebuffer
            .par_chunks_mut(canvas.width() as usize)
            .zip(packed.as_bytes().par_chunks(canvas.row_bytes()))
            .for_each(|(pixels, row)| {
                for (&byte, group) in row.iter().zip(pixels.chunks_mut(4)) {
                    for (level, pixel) in unpack_byte(byte).iter().zip(group.iter_mut()) {
                        *pixel = self.color(*level);
                    }
                }
            });

        framebuffer
    }

    /// Opaque true color approximation of what the device shows.
    pub fn preview(&self, packed: &PackedAlpha) -> RgbaImage {
        let canvas = packed.canvas();
        let framebuffer = self.render_rgb332(packed);

        RgbaImage::from_fn(canvas.width(), canvas.height(), |x, y| {
            let index = (y * canvas.width() + x) as usize;
            rgb332_to_rgba(framebuffer[index])
        })
    }
}

pub const fn rgb332_to_rgba(color: u8) -> Rgba<u8> {
    let r = (color >> 5) & 0x07;
    let g = (color >> 2) & 0x07;
    let b = color & 0x03;

    Rgba([
        (r as u16 * 255 / 7) as u8,
        (g as u16 * 255 / 7) as u8,
        (b as u16 * 255 / 3) as u8,
        255,
    ])
}
