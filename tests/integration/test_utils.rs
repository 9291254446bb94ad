//! Test utilities for integration tests.
//!
//! Helpers for building images, JPEG frames and camera-style MPO buffers.

use image::{DynamicImage, Rgba, RgbaImage};

use mpo_rs::codec::{ImageJpegCodec, JpegCodec};
use mpo_rs::format::jpeg::jfif_segment_len;

// =============================================================================
// Images
// =============================================================================

/// Solid-color RGBA image.
pub fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
}

pub fn red(width: u32, height: u32) -> DynamicImage {
    solid(width, height, [255, 0, 0, 255])
}

pub fn green(width: u32, height: u32) -> DynamicImage {
    solid(width, height, [0, 255, 0, 255])
}

/// Encode a single image as a plain JPEG stream.
pub fn jpeg(image: &DynamicImage, quality: u8) -> Vec<u8> {
    ImageJpegCodec::new().encode(image, quality).unwrap()
}

/// Assert two channel values are within JPEG rounding distance.
pub fn assert_close(actual: u8, expected: u8, tolerance: u8) {
    let diff = actual.abs_diff(expected);
    assert!(
        diff <= tolerance,
        "channel value {} not within {} of {}",
        actual,
        tolerance,
        expected
    );
}

// =============================================================================
// Camera-Style Buffers
// =============================================================================

/// APP2 segment with a 4-byte tag, as cameras write vendor blocks.
pub fn tagged_app2(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let length = (2 + tag.len() + payload.len()) as u16;
    let mut segment = vec![0xFF, 0xE2];
    segment.extend_from_slice(&length.to_be_bytes());
    segment.extend_from_slice(tag);
    segment.extend_from_slice(payload);
    segment
}

/// Insert `segment` into a JPEG stream right after SOI and any JFIF APP0.
pub fn insert_after_header(frame: &[u8], segment: &[u8]) -> Vec<u8> {
    let at = 2 + jfif_segment_len(frame);
    let mut out = Vec::with_capacity(frame.len() + segment.len());
    out.extend_from_slice(&frame[..at]);
    out.extend_from_slice(segment);
    out.extend_from_slice(&frame[at..]);
    out
}

/// Two concatenated JPEG frames with a `NINT` block in the first one, the
/// way a Nintendo 3DS lays out its files.
pub fn nintendo_style_mpo(payload: &[u8]) -> Vec<u8> {
    let left = jpeg(&red(10, 10), 90);
    let right = jpeg(&green(10, 10), 90);

    let mut buffer = insert_after_header(&left, &tagged_app2(b"NINT", payload));
    buffer.extend_from_slice(&right);
    buffer
}
