use bytes::BufMut;

use super::parser::ByteOrder;
use super::tags::{BASELINE_MP_PRIMARY, IMAGE_TYPE_MASK, MP_ENTRY_SIZE, REPRESENTATIVE_FLAG};

/// One record of the MP entry array.
///
/// `offset` is measured from the byte order marker of the MPF segment,
/// except for the first entry, whose offset is 0 by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpfEntry {
    /// Image type code OR'd with attribute flags
    pub attribute: u32,
    /// Encoded size of the frame in bytes
    pub size: u32,
    /// Offset of the frame's SOI from the byte order marker
    pub offset: u32,
    /// First dependent image entry number (0 = none)
    pub dependent_1: u16,
    /// Second dependent image entry number (0 = none)
    pub dependent_2: u16,
}

impl MpfEntry {
    /// Baseline MP entry for the frame at `index`. Frame 0 is flagged as
    /// the representative image.
    pub fn baseline(index: usize, size: u32, offset: u32) -> Self {
        let mut attribute = BASELINE_MP_PRIMARY;
        if index == 0 {
            attribute |= REPRESENTATIVE_FLAG;
        }
        Self {
            attribute,
            size,
            offset,
            dependent_1: 0,
            dependent_2: 0,
        }
    }

    #[inline]
    pub fn is_representative(&self) -> bool {
        self.attribute & REPRESENTATIVE_FLAG != 0
    }

    /// Image type code without the flag bits.
    #[inline]
    pub fn image_type(&self) -> u32 {
        self.attribute & IMAGE_TYPE_MASK
    }

    /// Append the 16-byte little-endian encoding.
    pub(crate) fn put_le(&self, buf: &mut impl BufMut) {
        buf.put_u32_le(self.attribute);
        buf.put_u32_le(self.size);
        buf.put_u32_le(self.offset);
        buf.put_u16_le(self.dependent_1);
        buf.put_u16_le(self.dependent_2);
    }

    /// Read an entry from the first 16 bytes of `bytes`.
    ///
    /// Returns `None` if fewer than 16 bytes are available.
    pub(crate) fn read(bytes: &[u8], order: ByteOrder) -> Option<Self> {
        let bytes = bytes.get(..MP_ENTRY_SIZE)?;
        Some(Self {
            attribute: order.read_u32(&bytes[0..4]),
            size: order.read_u32(&bytes[4..8]),
            offset: order.read_u32(&bytes[8..12]),
            dependent_1: order.read_u16(&bytes[12..14]),
            dependent_2: order.read_u16(&bytes[14..16]),
        })
    }
}
