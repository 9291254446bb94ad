//! MPO container model and the decode/encode pipelines.
//!
//! - [`decode_all`] scans a buffer for frames, decodes each through the
//!   JPEG codec and returns a [`Container`].
//! - [`encode_all`] encodes every image of a container and assembles a
//!   Baseline-MP stream with an MPF index in the first frame.
//!
//! Both pipelines are synchronous and operate on fully buffered input.

mod decode;
mod encode;

use image::{DynamicImage, RgbaImage};

use crate::compose::{self, ColorScheme};
use crate::error::{ComposeError, MpoError};
use crate::format::mpf::MpfIndex;
use crate::format::vendor::VendorMetadata;

pub use decode::{
    decode, decode_all, decode_all_with, decode_config, decode_config_with, decode_frames,
    decode_with,
};
pub use encode::{encode_all, encode_all_with};

// =============================================================================
// Container
// =============================================================================

/// Ordered images of an MPO file plus optional metadata.
///
/// Image order is stream order; the first image is the representative
/// image.
#[derive(Debug, Clone, Default)]
pub struct Container {
    images: Vec<DynamicImage>,
    vendor: Option<VendorMetadata>,
    mpf_index: Option<MpfIndex>,
}

impl Container {
    /// Create a container from images, in the order they should be written.
    pub fn new(images: Vec<DynamicImage>) -> Self {
        Self {
            images,
            vendor: None,
            mpf_index: None,
        }
    }

    /// Attach a vendor metadata block.
    pub fn with_vendor_metadata(mut self, vendor: VendorMetadata) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub(crate) fn with_mpf_index(mut self, index: Option<MpfIndex>) -> Self {
        self.mpf_index = index;
        self
    }

    pub fn images(&self) -> &[DynamicImage] {
        &self.images
    }

    pub fn into_images(self) -> Vec<DynamicImage> {
        self.images
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The representative (first) image.
    pub fn representative(&self) -> Option<&DynamicImage> {
        self.images.first()
    }

    /// Vendor block found while decoding, if any.
    pub fn vendor_metadata(&self) -> Option<&VendorMetadata> {
        self.vendor.as_ref()
    }

    /// Whether a vendor block with a non-empty payload was found.
    pub fn has_vendor_metadata(&self) -> bool {
        self.vendor
            .as_ref()
            .is_some_and(|vendor| !vendor.payload.is_empty())
    }

    /// MPF index read from the first frame while decoding, if any.
    ///
    /// Always `None` for containers built with [`Container::new`].
    pub fn mpf_index(&self) -> Option<&MpfIndex> {
        self.mpf_index.as_ref()
    }

    /// Encode as an MPO byte stream. See [`encode_all`].
    pub fn encode(&self, quality: u8) -> Result<Vec<u8>, MpoError> {
        encode_all(self, quality)
    }

    /// Place all images side by side. See [`compose::stereo`].
    pub fn to_stereo(&self) -> Result<RgbaImage, ComposeError> {
        compose::stereo(&self.images)
    }

    /// Combine a left/right pair into an anaglyph. See [`compose::anaglyph`].
    pub fn to_anaglyph(&self, scheme: ColorScheme) -> Result<RgbaImage, ComposeError> {
        match self.images.as_slice() {
            [left, right] => compose::anaglyph(left, right, scheme),
            images => Err(ComposeError::InvalidImageCount {
                expected: 2,
                actual: images.len(),
            }),
        }
    }
}

impl From<Vec<DynamicImage>> for Container {
    fn from(images: Vec<DynamicImage>) -> Self {
        Self::new(images)
    }
}

// =============================================================================
// Tests
// =============================================================================
