//! mpo - Convert between MPO stereo files and plain images.
//!
//! This binary wires the CLI configuration to the library pipelines.

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mpo_rs::{
    codec::{ImageJpegCodec, JpegCodec},
    config::{Cli, Command, DecodeConfig, EncodeConfig, InfoConfig},
    container::{decode_all, decode_config},
    format::{extract_vendor_metadata, find_mpf_index, scan_frames, NINTENDO_TAG},
    image::DynamicImage,
    Container,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Decode(config) => run_decode(config),
        Command::Encode(config) => run_encode(config),
        Command::Info(config) => run_info(config),
    }
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so stdout stays clean for `info` output.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "mpo_rs=debug,mpo=debug"
    } else {
        "mpo_rs=info,mpo=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(path: &Path) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), String> {
    std::fs::write(path, data).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

// =============================================================================
// Decode Command
// =============================================================================

fn run_decode(config: DecodeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    match decode_file(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn decode_file(config: &DecodeConfig) -> Result<(), String> {
    let data = read_input(&config.input)?;
    let container = decode_all(&data).map_err(|e| e.to_string())?;

    info!(
        "Decoded {} image(s) from {}",
        container.len(),
        config.input.display()
    );
    if container.len() != 2 {
        warn!("Stereo content usually has 2 images, found {}", container.len());
    }

    let composed = match config.format.color_scheme() {
        Some(scheme) => container.to_anaglyph(scheme),
        None => container.to_stereo(),
    }
    .map_err(|e| e.to_string())?;

    let jpeg = ImageJpegCodec::new()
        .encode(&DynamicImage::ImageRgba8(composed), config.quality)
        .map_err(|e| format!("Failed to encode output: {}", e))?;

    write_output(&config.outfile, &jpeg)?;
    info!("Wrote {} ({} bytes)", config.outfile.display(), jpeg.len());

    Ok(())
}

// =============================================================================
// Encode Command
// =============================================================================

fn run_encode(config: EncodeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    match encode_files(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn encode_files(config: &EncodeConfig) -> Result<(), String> {
    let mut images = Vec::with_capacity(config.inputs.len());
    for path in &config.inputs {
        let image = mpo_rs::image::open(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Loaded input image"
        );
        images.push(image);
    }

    if images.len() == 1 {
        warn!("Only one input image; the MPO will not be stereoscopic");
    }

    let container = Container::new(images);
    let mpo = container.encode(config.quality).map_err(|e| e.to_string())?;

    write_output(&config.outfile, &mpo)?;
    info!(
        "Wrote {} image(s) to {} ({} bytes)",
        container.len(),
        config.outfile.display(),
        mpo.len()
    );

    Ok(())
}

// =============================================================================
// Info Command
// =============================================================================

fn run_info(config: InfoConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let data = match read_input(&config.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", config.input.display());
    println!("  Size: {} bytes", data.len());

    let frames = scan_frames(&data);
    println!("  Frames: {}", frames.len());
    for (i, range) in frames.iter().enumerate() {
        println!(
            "    [{}] bytes {}..{} ({} bytes)",
            i,
            range.start,
            range.end,
            range.len()
        );
    }

    if frames.is_empty() {
        eprintln!("Error: no JPEG frames found");
        return ExitCode::FAILURE;
    }

    match decode_config(&data) {
        Ok(frame) => println!(
            "  First frame: {}x{} {:?}",
            frame.width, frame.height, frame.color_type
        ),
        Err(e) => println!("  First frame: unreadable ({})", e),
    }

    match find_mpf_index(&data[frames[0].start..frames[0].end]) {
        Some(index) => {
            println!(
                "  MPF: version {}, {:?}, {} entr{}",
                String::from_utf8_lossy(&index.version),
                index.byte_order,
                index.len(),
                if index.len() == 1 { "y" } else { "ies" }
            );
            for (i, entry) in index.entries.iter().enumerate() {
                let role = if entry.is_representative() {
                    " (representative)"
                } else {
                    ""
                };
                println!(
                    "    [{}] attribute 0x{:08X}, size {}, offset {}{}",
                    i, entry.attribute, entry.size, entry.offset, role
                );
            }
        }
        None => println!("  MPF: none"),
    }

    match extract_vendor_metadata(&data, NINTENDO_TAG) {
        Some(vendor) => println!(
            "  Vendor: {} ({} bytes)",
            vendor.tag_str(),
            vendor.payload.len()
        ),
        None => println!("  Vendor: none"),
    }

    ExitCode::SUCCESS
}
