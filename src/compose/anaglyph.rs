//! Anaglyph composition.
//!
//! One eye gets a gray version of its image in one channel, the other eye
//! keeps color in the complementary channels (red/cyan) or also turns gray
//! (red/green, with blue fixed at half intensity).

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::ComposeError;

/// Channel weights for the gray conversion.
const GRAY_WEIGHTS: [f32; 3] = [0.229, 0.587, 0.144];

/// Blue level for the red/green schemes.
const HALF: u8 = u8::MAX / 2;

/// Filter color assignment, named left eye first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Red on the left eye, cyan on the right
    RedCyan,
    /// Cyan on the left eye, red on the right
    CyanRed,
    /// Red on the left eye, green on the right
    RedGreen,
    /// Green on the left eye, red on the right
    GreenRed,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::RedCyan,
        ColorScheme::CyanRed,
        ColorScheme::RedGreen,
        ColorScheme::GreenRed,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ColorScheme::RedCyan => "red-cyan",
            ColorScheme::CyanRed => "cyan-red",
            ColorScheme::RedGreen => "red-green",
            ColorScheme::GreenRed => "green-red",
        }
    }

    fn combine(self, left: Rgba<u8>, right: Rgba<u8>) -> Rgba<u8> {
        let [_, lg, lb, _] = left.0;
        let [_, rg, rb, _] = right.0;
        let (left_gray, right_gray) = (gray(left), gray(right));

        let [r, g, b] = match self {
            ColorScheme::RedCyan => [left_gray, rg, rb],
            ColorScheme::CyanRed => [right_gray, lg, lb],
            ColorScheme::RedGreen => [left_gray, right_gray, HALF],
            ColorScheme::GreenRed => [right_gray, left_gray, HALF],
        };
        Rgba([r, g, b, u8::MAX])
    }
}

fn gray(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let value = f32::from(r) * GRAY_WEIGHTS[0]
        + f32::from(g) * GRAY_WEIGHTS[1]
        + f32::from(b) * GRAY_WEIGHTS[2];
    value.clamp(0.0, f32::from(u8::MAX)) as u8
}

/// Merge a left/right pair into an anaglyph.
///
/// # Errors
/// `InconsistentBounds` if the two images differ in size.
pub fn anaglyph(
    left: &DynamicImage,
    right: &DynamicImage,
    scheme: ColorScheme,
) -> Result<RgbaImage, ComposeError> {
    let bounds = (size(left), size(right));
    if bounds.0 != bounds.1 {
        return Err(ComposeError::InconsistentBounds {
            left: bounds.0,
            right: bounds.1,
        });
    }

    let left = left.to_rgba8();
    let right = right.to_rgba8();

    Ok(RgbaImage::from_fn(left.width(), left.height(), |x, y| {
        scheme.combine(*left.get_pixel(x, y), *right.get_pixel(x, y))
    }))
}

fn size(image: &DynamicImage) -> (u32, u32) {
    (image.width(), image.height())
}
