use thiserror::Error;

/// Errors produced by the MPO decode and encode pipelines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MpoError {
    /// No complete frame was found in the input, or the encoder was given no images
    #[error("No images found in MPO container")]
    NoImages,

    /// The JPEG codec rejected a frame's bytes
    #[error("Failed to decode frame {frame}: {message}")]
    Decode { frame: usize, message: String },

    /// The JPEG codec failed to encode an image
    #[error("Failed to encode image {frame}: {message}")]
    Encode { frame: usize, message: String },

    /// Offset and size sequences handed to the MPF builder differ in length
    #[error("MPF offset/size count mismatch: {offsets} offsets, {sizes} sizes")]
    LengthMismatch { offsets: usize, sizes: usize },

    /// The first encoded frame does not start with an SOI marker
    #[error("First encoded frame is missing its SOI marker")]
    MalformedFirstFrame,

    /// Too many frames for the MPF segment's 16-bit length field
    #[error("MPF segment for {frames} frames exceeds the 65535-byte marker segment limit")]
    SegmentTooLarge { frames: usize },

    /// A frame size or offset does not fit in a 32-bit MPF field
    #[error("Frame {frame} does not fit in MPF 32-bit fields ({size} bytes)")]
    FrameTooLarge { frame: usize, size: u64 },
}

/// Errors from composing stereo or anaglyph output images
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// Nothing to compose
    #[error("No images to compose")]
    NoImages,

    /// Wrong number of images for the requested composition
    #[error("Invalid image count: expected {expected}, got {actual}")]
    InvalidImageCount { expected: usize, actual: usize },

    /// Images do not share the same dimensions
    #[error("Inconsistent bounds: left is {}x{}, right is {}x{}", left.0, left.1, right.0, right.1)]
    InconsistentBounds { left: (u32, u32), right: (u32, u32) },
}

/// Errors that can occur when parsing an MPF segment payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MpfError {
    /// Payload is too small to contain the structure being read
    #[error("MPF data too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Invalid byte order marker (not II or MM)
    #[error("Invalid MPF byte order: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// Invalid TIFF magic number
    #[error("Invalid MPF magic: expected 42, got {0}")]
    InvalidMagic(u16),

    /// IFD offset points outside the payload
    #[error("Invalid IFD offset: {0}")]
    InvalidIfdOffset(u32),

    /// Required tag is missing from the IFD
    #[error("Missing required tag: {0}")]
    MissingTag(&'static str),

    /// Tag has unexpected type or count
    #[error("Invalid tag value for {tag}: {message}")]
    InvalidTagValue { tag: &'static str, message: String },
}
