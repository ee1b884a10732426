//! image.rs
//! Header + payload assembly, and the integrity check a bootloader runs
//! before consuming the payload.

use thiserror::Error;

use crate::checksum::compute_checksum;
use crate::constants::HEADER_LEN;
use crate::headers::{build_header, decode_header_be, FirmwareHeader, HeaderError};
use crate::metadata::FirmwareMetadata;

/// Build the header for `payload` and return `header || payload`.
pub fn attach_header(payload: &[u8], metadata: &FirmwareMetadata) -> Result<Vec<u8>, HeaderError> {
    let header = build_header(payload.len() as u64, compute_checksum(payload), metadata)?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Split a packed image into its decoded header and payload.
pub fn split_image(image: &[u8]) -> Result<(FirmwareHeader, &[u8]), ImageError> {
    let header = decode_header_be(image)?;
    Ok((header, &image[HEADER_LEN..]))
}

/// Decode the header and check it against the payload that follows.
///
/// Size is checked before the checksum.
pub fn verify_image(image: &[u8]) -> Result<FirmwareHeader, ImageError> {
    let (header, payload) = split_image(image)?;

    let actual = payload.len() as u64;
    if header.expected_size != actual {
        return Err(ImageError::SizeMismatch { expected: header.expected_size, actual });
    }

    let actual = compute_checksum(payload);
    if header.expected_crc != actual {
        return Err(ImageError::CrcMismatch { expected: header.expected_crc, actual });
    }

    Ok(header)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("image too short for header: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    #[error("payload size mismatch: header says {expected}, found {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("payload checksum mismatch: header says {expected:#010X}, computed {actual:#010X}")]
    CrcMismatch { expected: u32, actual: u32 },
}
