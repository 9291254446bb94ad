//! Multi-Picture Format (MPF) segment support.
//!
//! MPF is defined by CIPA DC-007. An MPF segment is an APP2 marker segment
//! placed in the first frame of an MPO file. It records the size, offset and
//! role of every frame in the container.
//!
//! # Key Concepts
//!
//! - **Mixed endianness**: the APP2 length field is big-endian like every
//!   JPEG marker segment, while the TIFF structure inside declares its own
//!   byte order. This crate always writes little-endian.
//!
//! - **Endian marker**: the byte order bytes at the start of the TIFF
//!   structure. Every offset in the index, IFD and MP entries alike, is
//!   measured from here.
//!
//! - **Fixed IFD shape**: the builder writes exactly three tags, so the
//!   segment size is a function of the frame count alone.

mod builder;
mod entry;
mod parser;
mod tags;

pub use builder::{build_segment, segment_len, ENDIAN_MARKER_OFFSET};
pub use entry::MpfEntry;
pub use parser::{find_mpf_index, ByteOrder, MpfIndex};
pub use tags::{
    FieldType, MpfTag, BASELINE_MP_PRIMARY, IMAGE_LIST_OFFSET, MPF_IDENTIFIER, MPF_VERSION,
    REPRESENTATIVE_FLAG,
};
