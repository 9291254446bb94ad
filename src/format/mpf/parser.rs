//! MPF index parsing.
//!
//! Reads the MP Index IFD back out of an APP2/MPF segment. Writers in the
//! wild use both byte orders, so unlike the builder the parser accepts
//! `II` and `MM`.
//!
//! The frame scanner stays the source of truth for frame boundaries; the
//! index is informational and a malformed one never fails a decode.

use tracing::debug;

use crate::error::MpfError;
use crate::format::jpeg::{segments, APP2};
use crate::format::scanner::ByteRange;
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};

use super::builder::ENDIAN_MARKER_OFFSET;
use super::entry::MpfEntry;
use super::tags::{
    FieldType, MpfTag, IFD_ENTRY_SIZE, MPF_IDENTIFIER, MP_ENTRY_SIZE, TIFF_HEADER_SIZE, TIFF_MAGIC,
};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order of the TIFF structure inside an MPF segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }
}

// =============================================================================
// MpfIndex
// =============================================================================

/// Parsed MP Index IFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpfIndex {
    /// Byte order declared by the segment
    pub byte_order: ByteOrder,

    /// MPF version bytes, `b"0100"` for files this crate writes
    pub version: [u8; 4],

    /// One entry per image, in stream order
    pub entries: Vec<MpfEntry>,

    /// Absolute position of the byte order marker in the scanned buffer,
    /// or 0 when parsed from a bare payload.
    pub base_offset: usize,
}

impl MpfIndex {
    /// Parse the payload that follows the `MPF\0` identifier.
    ///
    /// `data` must start at the byte order marker.
    ///
    /// # Errors
    /// - `TooShort` if a structure runs past the end of `data`
    /// - `InvalidByteOrder` if the first two bytes are not II or MM
    /// - `InvalidMagic` if the magic number is not 42
    /// - `InvalidIfdOffset` if the IFD lies outside `data`
    /// - `MissingTag` if version, image count or image list is absent
    /// - `InvalidTagValue` if a tag has an unexpected type or count
    pub fn parse(data: &[u8]) -> Result<Self, MpfError> {
        if data.len() < TIFF_HEADER_SIZE {
            return Err(MpfError::TooShort {
                required: TIFF_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let magic = u16::from_le_bytes([data[0], data[1]]);
        let byte_order = match magic {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(MpfError::InvalidByteOrder(magic)),
        };

        let version_magic = byte_order.read_u16(&data[2..4]);
        if version_magic != TIFF_MAGIC {
            return Err(MpfError::InvalidMagic(version_magic));
        }

        let ifd_offset = byte_order.read_u32(&data[4..8]);
        let ifd = ifd_offset as usize;
        if ifd < TIFF_HEADER_SIZE || ifd.saturating_add(2) > data.len() {
            return Err(MpfError::InvalidIfdOffset(ifd_offset));
        }

        let entry_count = byte_order.read_u16(&data[ifd..ifd + 2]) as usize;
        let entries_end = ifd + 2 + entry_count * IFD_ENTRY_SIZE;
        if entries_end > data.len() {
            return Err(MpfError::TooShort {
                required: entries_end,
                actual: data.len(),
            });
        }

        let mut version = None;
        let mut image_count = None;
        let mut image_list = None;

        for i in 0..entry_count {
            let pos = ifd + 2 + i * IFD_ENTRY_SIZE;
            let raw = &data[pos..pos + IFD_ENTRY_SIZE];

            let Some(tag) = MpfTag::from_u16(byte_order.read_u16(&raw[0..2])) else {
                continue;
            };
            let field_type = FieldType::from_u16(byte_order.read_u16(&raw[2..4]));
            let count = byte_order.read_u32(&raw[4..8]);
            let value = &raw[8..12];

            match tag {
                MpfTag::Version => {
                    expect_field(tag, field_type, FieldType::Undefined, count, Some(4))?;
                    version = Some([value[0], value[1], value[2], value[3]]);
                }
                MpfTag::NumberOfImages => {
                    expect_field(tag, field_type, FieldType::Long, count, Some(1))?;
                    image_count = Some(byte_order.read_u32(value));
                }
                MpfTag::ImageList => {
                    expect_field(tag, field_type, FieldType::Undefined, count, None)?;
                    image_list = Some((count, byte_order.read_u32(value)));
                }
            }
        }

        let version = version.ok_or(MpfError::MissingTag(MpfTag::Version.name()))?;
        let image_count =
            image_count.ok_or(MpfError::MissingTag(MpfTag::NumberOfImages.name()))?;
        let (list_len, list_offset) =
            image_list.ok_or(MpfError::MissingTag(MpfTag::ImageList.name()))?;

        if list_len as u64 != image_count as u64 * MP_ENTRY_SIZE as u64 {
            return Err(MpfError::InvalidTagValue {
                tag: MpfTag::ImageList.name(),
                message: format!(
                    "{} bytes cannot hold {} entries of {} bytes",
                    list_len, image_count, MP_ENTRY_SIZE
                ),
            });
        }

        let list_start = list_offset as usize;
        let list_end = list_start.saturating_add(list_len as usize);
        let list = data.get(list_start..list_end).ok_or(MpfError::TooShort {
            required: list_end,
            actual: data.len(),
        })?;

        let entries = list
            .chunks_exact(MP_ENTRY_SIZE)
            .filter_map(|chunk| MpfEntry::read(chunk, byte_order))
            .collect();

        Ok(Self {
            byte_order,
            version,
            entries,
            base_offset: 0,
        })
    }

    /// Number of images the index describes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute byte ranges the index claims for each image.
    ///
    /// The first image starts at the beginning of the buffer; every other
    /// entry is relative to [`base_offset`](Self::base_offset).
    ///
    /// Writers record the first frame's size before the MPF segment is
    /// inserted into it, so the first range usually ends short of that
    /// frame's EOI by the segment length. The other ranges are exact.
    pub fn frame_ranges(&self) -> Vec<ByteRange> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let start = if i == 0 {
                    0
                } else {
                    self.base_offset + entry.offset as usize
                };
                ByteRange::new(start, start + entry.size as usize)
            })
            .collect()
    }
}

/// Check the type and count of an IFD entry.
fn expect_field(
    tag: MpfTag,
    actual: Option<FieldType>,
    expected: FieldType,
    count: u32,
    expected_count: Option<u32>,
) -> Result<(), MpfError> {
    if actual != Some(expected) {
        return Err(MpfError::InvalidTagValue {
            tag: tag.name(),
            message: format!("expected field type {:?}, got {:?}", expected, actual),
        });
    }
    if let Some(expected_count) = expected_count {
        if count != expected_count {
            return Err(MpfError::InvalidTagValue {
                tag: tag.name(),
                message: format!("expected count {}, got {}", expected_count, count),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Locating the Index
// =============================================================================

/// Find and parse the MPF index of the first frame in `buffer`.
///
/// Walks the header segments of the stream at the start of `buffer` and
/// parses the first APP2 segment carrying the `MPF\0` identifier. A missing
/// or malformed index yields `None`.
pub fn find_mpf_index(buffer: &[u8]) -> Option<MpfIndex> {
    let segment = segments(buffer)
        .find(|s| s.marker == APP2[1] && s.payload.starts_with(MPF_IDENTIFIER))?;

    let payload = &segment.payload[MPF_IDENTIFIER.len()..];
    match MpfIndex::parse(payload) {
        Ok(mut index) => {
            index.base_offset = segment.offset + ENDIAN_MARKER_OFFSET;
            debug!(
                images = index.len(),
                base_offset = index.base_offset,
                "Found MPF index"
            );
            Some(index)
        }
        Err(e) => {
            debug!(error = %e, "Ignoring malformed MPF segment");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
