//! Byte-level parsers and builders for the MPO container.
//!
//! An MPO file is a sequence of JPEG frames. Nothing in this module decodes
//! pixels: it only deals with marker structure.
//!
//! - [`jpeg`] - Marker constants and a segment walker
//! - [`scanner`] - Frame boundary detection by SOI/EOI nesting
//! - [`mpf`] - The APP2 Multi-Picture Format index segment
//! - [`vendor`] - Tagged vendor APP2 blocks

pub mod jpeg;
pub mod mpf;
pub mod scanner;
pub mod vendor;

pub use mpf::{
    build_segment, find_mpf_index, segment_len, ByteOrder, MpfEntry, MpfIndex,
    ENDIAN_MARKER_OFFSET, IMAGE_LIST_OFFSET,
};
pub use scanner::{scan_frames, ByteRange};
pub use vendor::{extract_vendor_metadata, VendorMetadata, NINTENDO_TAG};
