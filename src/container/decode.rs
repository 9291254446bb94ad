//! Decode pipeline: scan, decode each frame, collect metadata.

use image::DynamicImage;
use tracing::debug;

use crate::codec::{FrameInfo, ImageJpegCodec, JpegCodec};
use crate::error::MpoError;
use crate::format::mpf::find_mpf_index;
use crate::format::scanner::{scan_frames, ByteRange};
use crate::format::vendor::{extract_vendor_metadata, NINTENDO_TAG};

use super::Container;

/// Decode every frame of an MPO buffer.
///
/// Frames are located by [`scan_frames`]; the Nintendo vendor block and
/// the MPF index of the first frame are attached when present.
///
/// # Errors
/// - `NoImages` if the buffer holds no complete frame
/// - `Decode` for the first frame the codec rejects; no partial container
///   is returned
pub fn decode_all(buffer: &[u8]) -> Result<Container, MpoError> {
    decode_all_with(&ImageJpegCodec, buffer)
}

/// [`decode_all`] with a caller-provided codec.
pub fn decode_all_with<C: JpegCodec + ?Sized>(
    codec: &C,
    buffer: &[u8],
) -> Result<Container, MpoError> {
    let ranges = scan_frames(buffer);
    let first = *ranges.first().ok_or(MpoError::NoImages)?;

    let images = decode_frames(codec, buffer, &ranges)?;

    let mpf_index = find_mpf_index(&buffer[first.start..first.end]).map(|mut index| {
        index.base_offset += first.start;
        index
    });

    let mut container = Container::new(images).with_mpf_index(mpf_index);
    if let Some(vendor) = extract_vendor_metadata(buffer, NINTENDO_TAG) {
        container = container.with_vendor_metadata(vendor);
    }

    debug!(
        images = container.len(),
        vendor = container.has_vendor_metadata(),
        mpf = container.mpf_index().is_some(),
        "Decoded MPO container"
    );

    Ok(container)
}

/// Decode the frames at `ranges`, in order.
///
/// Stops at the first frame that fails to decode.
pub fn decode_frames<C: JpegCodec + ?Sized>(
    codec: &C,
    buffer: &[u8],
    ranges: &[ByteRange],
) -> Result<Vec<DynamicImage>, MpoError> {
    ranges
        .iter()
        .enumerate()
        .map(|(frame, range)| {
            let data = range.slice(buffer).ok_or_else(|| MpoError::Decode {
                frame,
                message: format!(
                    "range {}..{} outside buffer of {} bytes",
                    range.start,
                    range.end,
                    buffer.len()
                ),
            })?;
            codec
                .decode(data)
                .map_err(|message| MpoError::Decode { frame, message })
        })
        .collect()
}

/// Decode only the representative (first) image.
pub fn decode(buffer: &[u8]) -> Result<DynamicImage, MpoError> {
    decode_with(&ImageJpegCodec, buffer)
}

/// [`decode`] with a caller-provided codec.
pub fn decode_with<C: JpegCodec + ?Sized>(
    codec: &C,
    buffer: &[u8],
) -> Result<DynamicImage, MpoError> {
    let first = first_frame(buffer)?;
    decode_frames(codec, buffer, &[first])?
        .pop()
        .ok_or(MpoError::NoImages)
}

/// Dimensions and color type of the representative image, read from its
/// headers without decoding pixel data.
pub fn decode_config(buffer: &[u8]) -> Result<FrameInfo, MpoError> {
    decode_config_with(&ImageJpegCodec, buffer)
}

/// [`decode_config`] with a caller-provided codec.
pub fn decode_config_with<C: JpegCodec + ?Sized>(
    codec: &C,
    buffer: &[u8],
) -> Result<FrameInfo, MpoError> {
    let first = first_frame(buffer)?;
    codec
        .probe(&buffer[first.start..first.end])
        .map_err(|message| MpoError::Decode { frame: 0, message })
}

fn first_frame(buffer: &[u8]) -> Result<ByteRange, MpoError> {
    scan_frames(buffer).first().copied().ok_or(MpoError::NoImages)
}

// =============================================================================
// Tests
// =============================================================================
