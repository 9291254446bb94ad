//! Command-line configuration for the `mpo` tool.
//!
//! Three subcommands share one binary:
//!
//! - `decode` converts an MPO file to a side-by-side stereo or anaglyph JPEG
//! - `encode` bundles one or more images into an MPO file
//! - `info` prints the frame layout and metadata of an MPO file
//!
//! # Example
//!
//! ```text
//! mpo decode photo.mpo --format red-cyan --outfile photo.jpg
//! mpo encode left.png right.png --outfile pair.mpo --quality 85
//! mpo info pair.mpo
//! ```
//!
//! # Environment Variables
//!
//! - `MPO_FORMAT` - Decode output format (default: stereo)
//! - `MPO_OUTFILE` - Output path (default: output.jpg / output.mpo)
//! - `MPO_QUALITY` - JPEG quality (default: 90)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::codec::{is_valid_quality, DEFAULT_JPEG_QUALITY};
use crate::compose::ColorScheme;

// =============================================================================
// Default Values
// =============================================================================

/// Default output path for `decode`.
pub const DEFAULT_DECODE_OUTFILE: &str = "output.jpg";

/// Default output path for `encode`.
pub const DEFAULT_ENCODE_OUTFILE: &str = "output.mpo";

// =============================================================================
// CLI Arguments
// =============================================================================

/// mpo - Read and write Multi-Picture Object stereo images.
#[derive(Parser, Debug, Clone)]
#[command(name = "mpo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert an MPO file into a stereo or anaglyph JPEG.
    Decode(DecodeConfig),

    /// Bundle images into an MPO file.
    Encode(EncodeConfig),

    /// Show frames, MPF index and vendor metadata of an MPO file.
    Info(InfoConfig),
}

/// Output layout for `decode`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// All frames side by side
    Stereo,
    /// Red on the left eye, cyan on the right
    RedCyan,
    /// Cyan on the left eye, red on the right
    CyanRed,
    /// Red on the left eye, green on the right
    RedGreen,
    /// Green on the left eye, red on the right
    GreenRed,
}

impl OutputFormat {
    /// Anaglyph scheme, or `None` for side-by-side output.
    pub fn color_scheme(self) -> Option<ColorScheme> {
        match self {
            OutputFormat::Stereo => None,
            OutputFormat::RedCyan => Some(ColorScheme::RedCyan),
            OutputFormat::CyanRed => Some(ColorScheme::CyanRed),
            OutputFormat::RedGreen => Some(ColorScheme::RedGreen),
            OutputFormat::GreenRed => Some(ColorScheme::GreenRed),
        }
    }
}

// =============================================================================
// Decode
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct DecodeConfig {
    /// MPO file to read.
    pub input: PathBuf,

    /// Output layout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Stereo, env = "MPO_FORMAT")]
    pub format: OutputFormat,

    /// Output JPEG path.
    #[arg(short, long, default_value = DEFAULT_DECODE_OUTFILE, env = "MPO_OUTFILE")]
    pub outfile: PathBuf,

    /// JPEG quality of the output image (1-100).
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY, env = "MPO_QUALITY")]
    pub quality: u8,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl DecodeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_quality(self.quality)?;
        validate_path("outfile", &self.outfile)?;
        validate_path("input", &self.input)
    }
}

// =============================================================================
// Encode
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct EncodeConfig {
    /// Images to bundle, representative image first.
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output MPO path.
    #[arg(short, long, default_value = DEFAULT_ENCODE_OUTFILE, env = "MPO_OUTFILE")]
    pub outfile: PathBuf,

    /// JPEG quality of every frame (1-100).
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY, env = "MPO_QUALITY")]
    pub quality: u8,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl EncodeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.inputs.is_empty() {
            return Err("At least one input image is required - ideally two".to_string());
        }
        validate_quality(self.quality)?;
        validate_path("outfile", &self.outfile)?;
        for input in &self.inputs {
            validate_path("input", input)?;
        }
        Ok(())
    }
}

// =============================================================================
// Info
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoConfig {
    /// MPO file to inspect.
    pub input: PathBuf,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl InfoConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_path("input", &self.input)
    }
}

fn validate_quality(quality: u8) -> Result<(), String> {
    if is_valid_quality(quality) {
        Ok(())
    } else {
        Err(format!("quality must be between 1 and 100, got {}", quality))
    }
}

fn validate_path(name: &str, path: &std::path::Path) -> Result<(), String> {
    if path.as_os_str().is_empty() {
        Err(format!("{} path must not be empty", name))
    } else {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
