//! Encode pipeline: JPEG-encode each image and splice in the MPF index.
//!
//! # Output Layout
//!
//! ```text
//! SOI | JFIF APP0 (if the codec wrote one) | APP2/MPF | rest of frame 1 | frame 2 | ... | frame N
//! ```
//!
//! # Offsets
//!
//! MP entry offsets are measured from the byte order marker inside the MPF
//! segment, so they depend on where that segment lands and on its size.
//! The segment size is a function of the frame count alone
//! ([`segment_len`]), which lets every offset be computed before the
//! segment is built. The first entry's offset is 0 by convention.
//!
//! Every entry's size is the length of the frame as the codec produced it.
//! For the first frame that excludes the inserted MPF segment.

use image::DynamicImage;
use tracing::debug;

use crate::codec::{ImageJpegCodec, JpegCodec};
use crate::error::MpoError;
use crate::format::jpeg::{jfif_segment_len, starts_with_soi, SOI};
use crate::format::mpf::{build_segment, segment_len, ENDIAN_MARKER_OFFSET};

use super::Container;

/// Encode every image of `container` into a Baseline-MP MPO stream.
///
/// # Errors
/// - `NoImages` if the container is empty
/// - `Encode` if the codec fails on an image
/// - `MalformedFirstFrame` if the first encoded frame lacks an SOI marker
/// - `FrameTooLarge` / `SegmentTooLarge` if the result cannot be described
///   by MPF's 32-bit fields or 16-bit segment length
pub fn encode_all(container: &Container, quality: u8) -> Result<Vec<u8>, MpoError> {
    encode_all_with(&ImageJpegCodec, container.images(), quality)
}

/// [`encode_all`] with a caller-provided codec, over a slice of images.
pub fn encode_all_with<C: JpegCodec + ?Sized>(
    codec: &C,
    images: &[DynamicImage],
    quality: u8,
) -> Result<Vec<u8>, MpoError> {
    if images.is_empty() {
        return Err(MpoError::NoImages);
    }

    let frames = images
        .iter()
        .enumerate()
        .map(|(frame, image)| {
            codec
                .encode(image, quality)
                .map_err(|message| MpoError::Encode { frame, message })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let first = &frames[0];
    if !starts_with_soi(first) {
        return Err(MpoError::MalformedFirstFrame);
    }

    let mpf_len = segment_len(frames.len());
    let jfif_len = jfif_segment_len(first);
    let insert_at = SOI.len() + jfif_len;
    let endian_marker = insert_at + ENDIAN_MARKER_OFFSET;

    let mut sizes = Vec::with_capacity(frames.len());
    let mut offsets = Vec::with_capacity(frames.len());
    let mut file_pos = 0usize;

    for (frame, data) in frames.iter().enumerate() {
        let offset = if frame == 0 {
            0
        } else {
            to_u32(frame, file_pos - endian_marker)?
        };
        offsets.push(offset);
        sizes.push(to_u32(frame, data.len())?);

        file_pos += data.len();
        if frame == 0 {
            file_pos += mpf_len;
        }
    }

    let segment = build_segment(&offsets, &sizes)?;
    debug_assert_eq!(segment.len(), mpf_len);

    debug!(
        frames = frames.len(),
        jfif_len,
        endian_marker,
        total = file_pos,
        "Assembling MPO stream"
    );

    let mut output = Vec::with_capacity(file_pos);
    output.extend_from_slice(&first[..insert_at]);
    output.extend_from_slice(&segment);
    output.extend_from_slice(&first[insert_at..]);
    for data in &frames[1..] {
        output.extend_from_slice(data);
    }

    Ok(output)
}

fn to_u32(frame: usize, value: usize) -> Result<u32, MpoError> {
    u32::try_from(value).map_err(|_| MpoError::FrameTooLarge {
        frame,
        size: value as u64,
    })
}

// =============================================================================
// Tests
// =============================================================================
