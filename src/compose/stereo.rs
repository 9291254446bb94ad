use image::{imageops, DynamicImage, RgbaImage};

use crate::error::ComposeError;

/// Place images left to right on one canvas.
///
/// The canvas is as wide as all images together and as tall as the
/// tallest; shorter images are top-aligned and the remainder stays
/// transparent.
pub fn stereo(images: &[DynamicImage]) -> Result<RgbaImage, ComposeError> {
    if images.is_empty() {
        return Err(ComposeError::NoImages);
    }

    let width = images.iter().map(|i| i.width()).sum();
    let height = images.iter().map(|i| i.height()).max().unwrap_or(0);
    let mut canvas = RgbaImage::new(width, height);

    let mut x = 0i64;
    for image in images {
        imageops::replace(&mut canvas, &image.to_rgba8(), x, 0);
        x += i64::from(image.width());
    }

    Ok(canvas)
}
