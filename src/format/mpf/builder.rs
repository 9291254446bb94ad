//! MPF segment serialization.
//!
//! # Segment Layout
//!
//! ```text
//! FF E2                 APP2 marker
//! LL LL                 segment length, big-endian, excludes the marker
//! 4D 50 46 00           "MPF\0"
//! 49 49 2A 00           "II", magic 42 (little-endian from here on)
//! 08 00 00 00           first IFD offset
//! 03 00                 IFD entry count
//! B000 0007 00000004 "0100"        version
//! B001 0004 00000001 <n>           number of images
//! B002 0007 <16 * n> <offset 50>   MP entry array
//! 00 00 00 00           next IFD offset
//! <16 bytes per image>  MP entries
//! ```

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::error::MpoError;
use crate::format::jpeg::{APP2, SEGMENT_HEADER_SIZE};

use super::entry::MpfEntry;
use super::tags::{
    FieldType, MpfTag, IFD_ENTRY_COUNT, IMAGE_LIST_OFFSET, MPF_IDENTIFIER, MPF_VERSION,
    MP_ENTRY_SIZE, TIFF_HEADER_SIZE, TIFF_MAGIC,
};

/// Byte order marker written by the builder ("II").
const LITTLE_ENDIAN_MARKER: &[u8; 2] = b"II";

/// Largest value the big-endian segment length field can hold.
const MAX_SEGMENT_LENGTH: usize = u16::MAX as usize;

/// Offset of the byte order marker from the start of the segment.
///
/// APP2 marker, length field and the `MPF\0` identifier come first.
pub const ENDIAN_MARKER_OFFSET: usize = SEGMENT_HEADER_SIZE + MPF_IDENTIFIER.len();

/// Serialized size of an MPF segment describing `frame_count` frames.
///
/// The IFD never changes shape, so the size depends on the frame count
/// alone.
#[inline]
pub const fn segment_len(frame_count: usize) -> usize {
    ENDIAN_MARKER_OFFSET + IMAGE_LIST_OFFSET as usize + frame_count * MP_ENTRY_SIZE
}

/// Build a complete APP2/MPF segment.
///
/// `offsets` and `sizes` are indexed by frame. Offsets are taken as given,
/// the caller decides the convention for frame 0.
///
/// # Errors
/// - `LengthMismatch` if the two sequences differ in length
/// - `SegmentTooLarge` if the segment would not fit its 16-bit length field
pub fn build_segment(offsets: &[u32], sizes: &[u32]) -> Result<Bytes, MpoError> {
    if offsets.len() != sizes.len() {
        return Err(MpoError::LengthMismatch {
            offsets: offsets.len(),
            sizes: sizes.len(),
        });
    }

    let frame_count = offsets.len();
    let total = segment_len(frame_count);
    if total - 2 > MAX_SEGMENT_LENGTH {
        return Err(MpoError::SegmentTooLarge {
            frames: frame_count,
        });
    }
    // Bounded by MAX_SEGMENT_LENGTH above
    let image_count = frame_count as u32;

    let mut buf = BytesMut::with_capacity(total);

    // APP2 marker, length placeholder, identifier
    buf.put_slice(&APP2);
    buf.put_u16(0);
    buf.put_slice(MPF_IDENTIFIER);

    // TIFF header
    buf.put_slice(LITTLE_ENDIAN_MARKER);
    buf.put_u16_le(TIFF_MAGIC);
    buf.put_u32_le(TIFF_HEADER_SIZE as u32);

    // MP Index IFD
    buf.put_u16_le(IFD_ENTRY_COUNT);
    put_ifd_entry(&mut buf, MpfTag::Version, FieldType::Undefined, 4, *MPF_VERSION);
    put_ifd_entry(
        &mut buf,
        MpfTag::NumberOfImages,
        FieldType::Long,
        1,
        image_count.to_le_bytes(),
    );
    put_ifd_entry(
        &mut buf,
        MpfTag::ImageList,
        FieldType::Undefined,
        image_count * MP_ENTRY_SIZE as u32,
        IMAGE_LIST_OFFSET.to_le_bytes(),
    );
    buf.put_u32_le(0);

    debug_assert_eq!(buf.len(), ENDIAN_MARKER_OFFSET + IMAGE_LIST_OFFSET as usize);

    for (index, (&offset, &size)) in offsets.iter().zip(sizes).enumerate() {
        MpfEntry::baseline(index, size, offset).put_le(&mut buf);
    }

    debug_assert_eq!(buf.len(), total);

    // Length covers everything after the marker, including itself
    let length = (buf.len() - 2) as u16;
    buf[2..4].copy_from_slice(&length.to_be_bytes());

    debug!(frames = frame_count, bytes = buf.len(), "Built MPF segment");

    Ok(buf.freeze())
}

/// Append one 12-byte IFD entry with an inline 4-byte value.
fn put_ifd_entry(
    buf: &mut BytesMut,
    tag: MpfTag,
    field_type: FieldType,
    count: u32,
    value: [u8; 4],
) {
    buf.put_u16_le(tag.as_u16());
    buf.put_u16_le(field_type as u16);
    buf.put_u32_le(count);
    buf.put_slice(&value);
}

// =============================================================================
// Tests
// =============================================================================
