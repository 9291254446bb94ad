//! JPEG marker vocabulary and segment walking.
//!
//! Each frame of an MPO container is a complete JPEG stream. The container
//! tooling only needs a thin view of that stream: where the markers are,
//! and how long the APPn segments that precede the image data are.
//!
//! # Marker Segments
//!
//! ```text
//! FF D8                       SOI, no length
//! FF En LL LL <LLLL-2 bytes>  APPn, big-endian length includes itself
//! FF DA LL LL ...             SOS, entropy-coded data follows
//! FF D9                       EOI, no length
//! ```

// =============================================================================
// JPEG Markers
// =============================================================================

/// Prefix byte that introduces every marker.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Second byte of the Start Of Image marker.
pub const SOI_CODE: u8 = 0xD8;

/// Second byte of the End Of Image marker.
pub const EOI_CODE: u8 = 0xD9;

/// Start Of Image marker
pub const SOI: [u8; 2] = [MARKER_PREFIX, SOI_CODE];

/// End Of Image marker
pub const EOI: [u8; 2] = [MARKER_PREFIX, EOI_CODE];

/// Start Of Scan marker
pub const SOS: [u8; 2] = [0xFF, 0xDA];

/// Application segment 0 (JFIF) marker
pub const APP0: [u8; 2] = [0xFF, 0xE0];

/// Application segment 2 (MPF, vendor extensions) marker
pub const APP2: [u8; 2] = [0xFF, 0xE2];

/// Size of a marker plus its big-endian length field.
pub const SEGMENT_HEADER_SIZE: usize = 4;

// =============================================================================
// Stream Checks
// =============================================================================

/// Check whether `data` begins with an SOI marker.
#[inline]
pub fn starts_with_soi(data: &[u8]) -> bool {
    data.starts_with(&SOI)
}

/// Total size of an APP0 (JFIF) segment sitting immediately after SOI.
///
/// `frame` is a complete JPEG stream starting with SOI. The returned size
/// covers the marker, the length field and the payload, so the segment
/// occupies `frame[2..2 + len]`. Returns 0 when there is no APP0 segment in
/// that position or its declared length is unusable.
pub fn jfif_segment_len(frame: &[u8]) -> usize {
    if !starts_with_soi(frame) {
        return 0;
    }
    let after_soi = &frame[SOI.len()..];
    if after_soi.len() < SEGMENT_HEADER_SIZE || after_soi[0..2] != APP0 {
        return 0;
    }

    let declared = u16::from_be_bytes([after_soi[2], after_soi[3]]) as usize;
    let total = declared + 2;
    if declared >= 2 && after_soi.len() >= total {
        total
    } else {
        0
    }
}

// =============================================================================
// Segment Walking
// =============================================================================

/// A length-prefixed marker segment located inside a JPEG stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Marker code (the byte after 0xFF)
    pub marker: u8,
    /// Offset of the 0xFF prefix within the stream
    pub offset: usize,
    /// Segment payload, excluding marker and length field
    pub payload: &'a [u8],
}

/// Iterator over the header segments of a JPEG stream.
///
/// Starts after SOI and stops at SOS, EOI, or the first structure that does
/// not parse; never reads past the end of the slice.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    data: &'a [u8],
    pos: usize,
}

/// Walk the marker segments that precede the image data.
pub fn segments(data: &[u8]) -> Segments<'_> {
    let pos = if starts_with_soi(data) { SOI.len() } else { data.len() };
    Segments { data, pos }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        let pos = self.pos;

        if pos + SEGMENT_HEADER_SIZE > data.len() || data[pos] != MARKER_PREFIX {
            self.pos = data.len();
            return None;
        }

        let marker = data[pos + 1];
        if marker == SOS[1] || marker == EOI_CODE {
            self.pos = data.len();
            return None;
        }

        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let end = pos + 2 + length;
        if length < 2 || end > data.len() {
            self.pos = data.len();
            return None;
        }

        self.pos = end;
        Some(Segment {
            marker,
            offset: pos,
            payload: &data[pos + SEGMENT_HEADER_SIZE..end],
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
