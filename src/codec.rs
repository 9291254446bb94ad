//! JPEG codec adapter.
//!
//! The container code never touches entropy-coded data itself. Frames go
//! through a [`JpegCodec`]: bytes in, pixels out, and back. The default
//! implementation is backed by the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::{JpegDecoder, JpegEncoder};
use image::{ColorType, DynamicImage, ImageDecoder, ImageReader};

/// Default JPEG quality (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Minimum allowed JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum allowed JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// =============================================================================
// FrameInfo
// =============================================================================

/// Header-level description of a frame, read without decoding pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
}

// =============================================================================
// JpegCodec
// =============================================================================

/// Baseline JPEG codec consumed by the container pipelines.
///
/// Errors are reported as messages; the caller attaches the frame index.
pub trait JpegCodec {
    /// Decode one complete JPEG stream.
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, String>;

    /// Encode an image as a complete JPEG stream at `quality` (1-100).
    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, String>;

    /// Read dimensions and color type from the stream headers only.
    fn probe(&self, data: &[u8]) -> Result<FrameInfo, String>;
}

/// [`JpegCodec`] backed by the `image` crate.
///
/// # Example
///
/// ```
/// use mpo_rs::codec::{ImageJpegCodec, JpegCodec};
/// use image::{DynamicImage, RgbImage};
///
/// let codec = ImageJpegCodec::new();
/// let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
/// let jpeg = codec.encode(&image, 85).unwrap();
/// assert_eq!(codec.probe(&jpeg).unwrap().width, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegCodec;

impl ImageJpegCodec {
    pub fn new() -> Self {
        Self
    }
}

impl JpegCodec for ImageJpegCodec {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, String> {
        let reader = ImageReader::with_format(Cursor::new(data), image::ImageFormat::Jpeg);
        reader.decode().map_err(|e| e.to_string())
    }

    fn encode(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, String> {
        let quality = clamp_quality(quality);

        let mut output = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut output, quality);

        // Baseline JPEG carries no alpha and at most 8 bits per channel
        let result = match image {
            DynamicImage::ImageLuma8(gray) => encoder.encode_image(gray),
            DynamicImage::ImageRgb8(rgb) => encoder.encode_image(rgb),
            DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => encoder.encode_image(&image.to_luma8()),
            _ => encoder.encode_image(&image.to_rgb8()),
        };
        result.map_err(|e| e.to_string())?;

        Ok(output)
    }

    fn probe(&self, data: &[u8]) -> Result<FrameInfo, String> {
        let decoder = JpegDecoder::new(Cursor::new(data)).map_err(|e| e.to_string())?;
        let (width, height) = decoder.dimensions();

        Ok(FrameInfo {
            width,
            height,
            color_type: decoder.color_type(),
        })
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Validate JPEG quality parameter.
///
/// Returns `true` if quality is in the valid range (1-100).
#[inline]
pub fn is_valid_quality(quality: u8) -> bool {
    (MIN_JPEG_QUALITY..=MAX_JPEG_QUALITY).contains(&quality)
}

/// Clamp quality to valid range.
///
/// Values below 1 become 1, values above 100 become 100.
#[inline]
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}

// =============================================================================
// Tests
// =============================================================================
