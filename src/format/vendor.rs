//! Vendor metadata extraction.
//!
//! Some cameras store a private block in an APP2 segment of the first
//! frame, identified by a 4-byte ASCII tag (Nintendo 3DS files use `NINT`).
//! The extractor is a plain linear scan over the whole buffer and does not
//! depend on the frame scanner.
//!
//! # Segment Layout
//!
//! ```text
//! FF E2 LL LL T T T T <LLLL - 6 bytes of payload>
//! ```

use bytes::Bytes;
use tracing::debug;

use crate::io::u16_be_at;

use super::jpeg::{APP2, SEGMENT_HEADER_SIZE};

/// Tag of the Nintendo 3DS vendor block.
pub const NINTENDO_TAG: [u8; 4] = *b"NINT";

/// Length field + tag: the smallest declared length that can carry a tag.
const MIN_TAGGED_LENGTH: usize = 2 + 4;

/// Raw payload of a tagged vendor segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorMetadata {
    /// 4-byte ASCII tag that identified the segment
    pub tag: [u8; 4],
    /// Bytes between the tag and the declared end of the segment
    pub payload: Bytes,
}

impl VendorMetadata {
    pub fn new(tag: [u8; 4], payload: impl Into<Bytes>) -> Self {
        Self {
            tag,
            payload: payload.into(),
        }
    }

    /// Tag as a string, for display.
    pub fn tag_str(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}

/// Find the first APP2 segment tagged `tag` and return its payload.
///
/// A declared length running past the end of the buffer is clipped on a
/// match. Segments with other tags are skipped whole when their length is
/// usable, otherwise the scan advances by one byte.
pub fn extract_vendor_metadata(buffer: &[u8], tag: [u8; 4]) -> Option<VendorMetadata> {
    let header = SEGMENT_HEADER_SIZE + tag.len();
    let mut pos = 0;

    while pos + header <= buffer.len() {
        if buffer[pos..pos + 2] != APP2 {
            pos += 1;
            continue;
        }

        let length = u16_be_at(buffer, pos + 2).map_or(0, usize::from);
        let segment_end = pos + 2 + length;

        if length >= MIN_TAGGED_LENGTH && buffer[pos + SEGMENT_HEADER_SIZE..pos + header] == tag {
            let end = segment_end.min(buffer.len());
            debug!(
                tag = %String::from_utf8_lossy(&tag),
                offset = pos,
                bytes = end - (pos + header),
                "Found vendor metadata segment"
            );
            return Some(VendorMetadata::new(
                tag,
                Bytes::copy_from_slice(&buffer[pos + header..end]),
            ));
        }

        if length >= 2 && segment_end <= buffer.len() {
            pos = segment_end;
        } else {
            pos += 1;
        }
    }

    None
}

// =============================================================================
// Tests
// =============================================================================
