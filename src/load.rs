use crate::Canvas;
use image::{imageops::FilterType, ImageError, RgbaImage};
use std::path::Path;

/// Open an image and bring it to the size of `canvas`.
///
/// Images of a different size are resampled with Lanczos3, ignoring their
/// aspect ratio.
pub fn load_raster<P: AsRef<Path>>(path: P, canvas: Canvas) -> Result<RgbaImage, ImageError> {
    let image = image::open(path.as_ref())?.to_rgba8();
    log::info!(
        "Loaded '{}' ({}x{})",
        path.as_ref().display(),
        image.width(),
        image.height()
    );

    Ok(fit_to_canvas(image, canvas))
}

pub fn fit_to_canvas(image: RgbaImage, canvas: Canvas) -> RgbaImage {
    if image.dimensions() == canvas.dimensions() {
        return image;
    }

    log::warn!(
        "Resizing {}x{} image to {}",
        image.width(),
        image.height(),
        canvas
    );

    image::imageops::resize(
        &image,
        canvas.width(),
        canvas.height(),
        FilterType::Lanczos3,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn matching_image_is_untouched() {
        let image = RgbaImage::from_pixel(320, 240, Rgba([1, 2, 3, 4]));
        let fitted = fit_to_canvas(image.clone(), Canvas::SCREEN);

        assert_eq!(fitted, image);
    }

    #[test]
    fn other_sizes_are_resized() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        let fitted = fit_to_canvas(image, Canvas::SCREEN);

        assert_eq!(fitted.dimensions(), (320, 240));
    }
}
