//! Byte-level helpers shared by the format parsers.

mod endian;

pub use endian::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, u16_be_at};
