// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// MPO files mix byte orders: JPEG marker segment lengths are always
// big-endian, while the TIFF structure inside an MPF segment declares its
// own order. These helpers are used by the vendor extractor and the MPF
// parser.

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Bounds-checked big-endian u16 at `pos`.
///
/// Returns `None` when fewer than 2 bytes remain.
#[inline]
pub fn u16_be_at(bytes: &[u8], pos: usize) -> Option<u16> {
    let end = pos.checked_add(2)?;
    bytes.get(pos..end).map(read_u16_be)
}
