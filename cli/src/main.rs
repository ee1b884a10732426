//! attach-header
//!
//! Prepends the 64-byte firmware header to a binary, with metadata from a
//! JSON config and size/CRC computed from the payload. `--verify` checks an
//! already-packed image instead.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use fwheader_core::constants::RESERVED_LEN;
use fwheader_core::{
    compute_checksum, encode_header_be, verify_image, FirmwareHeader, FirmwareMetadata, HeaderError,
    ImageError, PackReport,
};

const DEFAULT_INPUT: &str = "input/firmware.bin";
const DEFAULT_CONFIG: &str = "configs/header_config.json";
const DEFAULT_OUTPUT: &str = "output/firmware_with_header.bin";

const EXIT_IO: u8 = 1;
const EXIT_INVALID_HEADER: u8 = 2;
const EXIT_BAD_IMAGE: u8 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "attach-header",
    version,
    about = "Attach a 64-byte header to a binary file, with parameters from JSON and automatically computed size/CRC."
)]
struct Args {
    /// Path to the input binary file
    #[arg(long = "bin", value_name = "PATH", default_value = DEFAULT_INPUT)]
    bin: PathBuf,

    /// Path to the JSON header config
    #[arg(long = "json", value_name = "PATH", default_value = DEFAULT_CONFIG)]
    json: PathBuf,

    /// Path to the output file
    #[arg(long = "out", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Verify an already-packed image instead of attaching a header
    #[arg(long, value_name = "IMAGE")]
    verify: Option<PathBuf>,

    /// Print a JSON summary of the header to stdout
    #[arg(long)]
    report: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

macro_rules! trace {
    ($args:expr, $($fmt:tt)*) => {
        if $args.verbose {
            eprintln!($($fmt)*);
        }
    };
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match &args.verify {
        Some(image) => run_verify(&args, image),
        None => run_attach(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Core errors map to their own codes; everything else is I/O or config.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<HeaderError>().is_some() {
        EXIT_INVALID_HEADER
    } else if err.downcast_ref::<ImageError>().is_some() {
        EXIT_BAD_IMAGE
    } else {
        EXIT_IO
    }
}

fn run_attach(args: &Args) -> Result<()> {
    trace!(args, "[ATTACH] Reading binary {}", args.bin.display());
    let firmware = fs::read(&args.bin)
        .with_context(|| format!("Error reading binary file {}", args.bin.display()))?;

    let expected_size = firmware.len() as u64;
    let expected_crc = compute_checksum(&firmware);
    trace!(args, "[ATTACH] Payload size={} crc=0x{:08X}", expected_size, expected_crc);

    trace!(args, "[ATTACH] Reading config {}", args.json.display());
    let config = fs::read(&args.json)
        .with_context(|| format!("Error reading JSON file {}", args.json.display()))?;
    let metadata = FirmwareMetadata::from_json_slice(&config)
        .with_context(|| format!("Error parsing JSON file {}", args.json.display()))?;

    let dropped = metadata.reserved_overflow();
    if dropped > 0 {
        eprintln!(
            "[ATTACH] Warning: Reserved has {} entries, only the first {} are kept ({} dropped)",
            metadata.reserved.len(),
            RESERVED_LEN,
            dropped
        );
    }

    let header = FirmwareHeader::from_metadata(expected_size, expected_crc, &metadata)
        .with_context(|| format!("Invalid header config {}", args.json.display()))?;
    let header_bytes = encode_header_be(&header);
    trace!(
        args,
        "[ATTACH] Header device_type={} data_type={} protocol_type={}",
        header.device_type,
        header.data_type,
        header.protocol_type
    );

    write_image(&args.out, &header_bytes, &firmware)
        .with_context(|| format!("Error writing output file {}", args.out.display()))?;
    println!("Successfully wrote file: {}", args.out.display());

    if args.report {
        print_report(&PackReport::from_header(&header, metadata.reserved.len()))?;
    }
    Ok(())
}

fn run_verify(args: &Args, image_path: &Path) -> Result<()> {
    trace!(args, "[VERIFY] Reading image {}", image_path.display());
    let image = fs::read(image_path)
        .with_context(|| format!("Error reading image file {}", image_path.display()))?;

    let header = verify_image(&image)
        .with_context(|| format!("Image verification failed for {}", image_path.display()))?;

    if args.report {
        print_report(&PackReport::from_header(&header, RESERVED_LEN))?;
    } else {
        println!("Image OK: {}", image_path.display());
        println!("  expected_size = {}", header.expected_size);
        println!("  expected_crc  = 0x{:08X}", header.expected_crc);
        println!("  device_type   = {}", header.device_type);
        println!("  data_type     = {}", header.data_type);
        println!("  protocol_type = {}", header.protocol_type);
    }
    Ok(())
}

fn write_image(out: &Path, header: &[u8], payload: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating output directory {}", parent.display()))?;
    }
    let mut file = File::create(out)?;
    file.write_all(header)?;
    file.write_all(payload)?;
    file.flush()?;
    Ok(())
}

fn print_report(report: &PackReport) -> Result<()> {
    println!("{}", report.to_json_pretty().context("Error serializing report")?);
    Ok(())
}
