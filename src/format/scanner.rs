//! Frame boundary scanner.
//!
//! An MPO container is a run of complete JPEG streams laid end to end. The
//! scanner finds each stream by matching SOI/EOI marker pairs, without
//! consulting the optional MPF index.
//!
//! Frames may carry nested JPEG streams of their own (EXIF thumbnails, for
//! instance), so the scanner keeps a nesting depth rather than a toggle: a
//! frame opens on an SOI seen at depth 0 and closes on the EOI that brings
//! the depth back to 0.
//!
//! # Truncation
//!
//! A frame still open when the buffer ends is dropped with a warning.
//! Callers see fewer frames, never an error or a partial range.

use std::ops::Range;

use tracing::{debug, warn};

use super::jpeg::{EOI_CODE, MARKER_PREFIX, SOI_CODE};

// =============================================================================
// ByteRange
// =============================================================================

/// Byte span of one complete JPEG frame, `[start, end)`.
///
/// The span includes the frame's own SOI and EOI markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Create a new range. `start` must not exceed `end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the frame's bytes from the buffer the range was scanned from.
    ///
    /// Returns `None` if the range does not fit `buffer`.
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        buffer.get(self.start..self.end)
    }
}

impl From<ByteRange> for Range<usize> {
    fn from(range: ByteRange) -> Self {
        range.start..range.end
    }
}

// =============================================================================
// Scanning
// =============================================================================

/// Locate every complete JPEG frame in `buffer`.
///
/// Single forward pass with constant auxiliary state. A marker prefix that
/// is not followed by SOI or EOI is skipped together with the byte after
/// it. An EOI with no open frame is ignored.
pub fn scan_frames(buffer: &[u8]) -> Vec<ByteRange> {
    let mut ranges = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    let mut pos = 0;

    while pos + 1 < buffer.len() {
        if buffer[pos] != MARKER_PREFIX {
            pos += 1;
            continue;
        }

        let code = buffer[pos + 1];
        pos += 2;

        match code {
            SOI_CODE => {
                if depth == 0 {
                    start = pos - 2;
                }
                depth += 1;
            }
            EOI_CODE if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    ranges.push(ByteRange::new(start, pos));
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        warn!(
            start,
            depth,
            "Buffer ends inside an unterminated frame, dropping it"
        );
    }
    debug!(frames = ranges.len(), bytes = buffer.len(), "Scanned MPO frames");

    ranges
}

// =============================================================================
// Tests
// =============================================================================
