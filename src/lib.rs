//! # mpo-rs
//!
//! Reader and writer for Multi-Picture Object (MPO) files, the container
//! used by stereoscopic cameras such as the Nintendo 3DS and Fujifilm
//! FinePix Real 3D.
//!
//! An MPO file is a concatenation of complete JPEG streams. The first
//! stream carries an APP2 "MPF" segment whose index lists the size and
//! position of every image in the file.
//!
//! ## Features
//!
//! - **Frame scanning**: Locates every JPEG stream by SOI/EOI nesting
//! - **MPF index**: Builds and parses the Baseline-MP index segment
//! - **Vendor metadata**: Extracts tagged APP2 blocks (Nintendo `NINT`)
//! - **Stereo output**: Side-by-side and anaglyph composition
//!
//! ## Architecture
//!
//! - [`io`] - Endian helpers for the binary parsers
//! - [`mod@format`] - JPEG markers, frame scanner, MPF segment, vendor blocks
//! - [`codec`] - JPEG codec seam backed by the `image` crate
//! - [`container`] - [`Container`] model and the decode/encode pipelines
//! - [`compose`] - Stereo and anaglyph rendering
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust
//! use mpo_rs::{decode_all, Container};
//! use image::{DynamicImage, Rgba, RgbaImage};
//!
//! let left = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
//! let right = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([0, 255, 0, 255])));
//!
//! let bytes = Container::new(vec![left, right]).encode(90).unwrap();
//! let decoded = decode_all(&bytes).unwrap();
//! assert_eq!(decoded.len(), 2);
//! ```

pub mod codec;
pub mod compose;
pub mod config;
pub mod container;
pub mod error;
pub mod format;
pub mod io;

pub use image;

// Re-export commonly used types
pub use codec::{
    clamp_quality, is_valid_quality, FrameInfo, ImageJpegCodec, JpegCodec, DEFAULT_JPEG_QUALITY,
    MAX_JPEG_QUALITY, MIN_JPEG_QUALITY,
};
pub use compose::{anaglyph, stereo, ColorScheme};
pub use config::{Cli, Command, DecodeConfig, EncodeConfig, InfoConfig, OutputFormat};
pub use container::{
    decode, decode_all, decode_all_with, decode_config, decode_config_with, decode_frames,
    decode_with, encode_all, encode_all_with, Container,
};
pub use error::{ComposeError, MpfError, MpoError};
pub use format::{
    build_segment, extract_vendor_metadata, find_mpf_index, scan_frames, segment_len, ByteOrder,
    ByteRange, MpfEntry, MpfIndex, VendorMetadata, IMAGE_LIST_OFFSET, NINTENDO_TAG,
};
