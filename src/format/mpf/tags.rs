//! MPF tag, field type and attribute definitions.
//!
//! The MPF segment embeds a minimal TIFF structure: one IFD with the three
//! tags a Baseline-MP file needs, followed by the MP entry array.

// =============================================================================
// Field Types
// =============================================================================

/// TIFF field types used by the MPF index IFD.
///
/// Only the two types the Baseline-MP tags use are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Undefined byte data (1 byte per element)
    Undefined = 7,
}

impl FieldType {
    /// Create a FieldType from its numeric value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            4 => Some(FieldType::Long),
            7 => Some(FieldType::Undefined),
            _ => None,
        }
    }
}

// =============================================================================
// MPF Tags
// =============================================================================

/// Tags of the MP Index IFD.
///
/// Other MP Index tags (unique IDs, total frames) are ignored when parsing
/// and never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MpfTag {
    /// MPF format version, 4 ASCII bytes stored inline
    Version = 0xB000,

    /// Number of images in the container
    NumberOfImages = 0xB001,

    /// Offset of the MP entry array, 16 bytes per image
    ImageList = 0xB002,
}

impl MpfTag {
    /// Create an MpfTag from its numeric value.
    ///
    /// Returns `None` for tags outside the Baseline-MP subset.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0xB000 => Some(MpfTag::Version),
            0xB001 => Some(MpfTag::NumberOfImages),
            0xB002 => Some(MpfTag::ImageList),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Human-readable tag name for error messages.
    pub const fn name(self) -> &'static str {
        match self {
            MpfTag::Version => "MPFVersion",
            MpfTag::NumberOfImages => "NumberOfImages",
            MpfTag::ImageList => "MPEntry",
        }
    }
}

// =============================================================================
// Layout Constants
// =============================================================================

/// Identifier that opens the APP2 payload of an MPF segment.
pub const MPF_IDENTIFIER: &[u8; 4] = b"MPF\0";

/// MPF version written by the builder.
pub const MPF_VERSION: &[u8; 4] = b"0100";

/// TIFF magic number following the byte order marker.
pub const TIFF_MAGIC: u16 = 42;

/// Byte order marker + magic + first IFD offset.
pub const TIFF_HEADER_SIZE: usize = 8;

/// Size of one IFD entry.
pub const IFD_ENTRY_SIZE: usize = 12;

/// Number of entries in the MP Index IFD.
pub const IFD_ENTRY_COUNT: u16 = 3;

/// Size of one MP entry in the image list.
pub const MP_ENTRY_SIZE: usize = 16;

/// Offset of the MP entry array from the byte order marker.
///
/// Header, entry count, three IFD entries, next-IFD pointer. The IFD shape
/// never varies, so neither does this.
pub const IMAGE_LIST_OFFSET: u32 =
    (TIFF_HEADER_SIZE + 2 + IFD_ENTRY_COUNT as usize * IFD_ENTRY_SIZE + 4) as u32;

// =============================================================================
// MP Entry Attributes
// =============================================================================

/// Attribute bit marking the representative image.
pub const REPRESENTATIVE_FLAG: u32 = 0x2000_0000;

/// Image type code for a Baseline MP primary image.
pub const BASELINE_MP_PRIMARY: u32 = 0x0003_0000;

/// Mask selecting the image type code from an attribute word.
pub const IMAGE_TYPE_MASK: u32 = 0x00FF_FFFF;
