//! fwheader-core
//!
//! Firmware header builder: MSB-first CRC-32 over the payload and a fixed
//! 64-byte big-endian header carrying size, checksum and config metadata.
//! No I/O; the driver owns files and exit codes.

#![forbid(unsafe_code)]

pub mod constants;
pub mod checksum;
pub mod metadata;
pub mod headers;
pub mod image;
pub mod report;

pub use checksum::compute_checksum;
pub use headers::{build_header, decode_header_be, encode_header_be, FirmwareHeader, HeaderError, HeaderField};
pub use image::{attach_header, split_image, verify_image, ImageError};
pub use metadata::{FirmwareMetadata, MetadataError};
pub use report::PackReport;
