//! report.rs
//! Immutable summary of one packed (or verified) image.
//!
//! Serialized as JSON by the driver for pipeline logs. CRC is rendered as a
//! fixed-width hex string so it diffs cleanly against bootloader output.

use serde::{Deserialize, Serialize};

use crate::constants::{HEADER_LEN, RESERVED_LEN};
use crate::headers::FirmwareHeader;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackReport {
    pub expected_size: u64,
    pub expected_crc: String,
    pub device_type: u16,
    pub data_type: u8,
    pub protocol_type: u16,
    pub header_len: usize,
    pub image_len: u64,
    pub reserved_supplied: usize,
    pub reserved_truncated: usize,
}

impl PackReport {
    /// `reserved_supplied` is the config's element count; use
    /// `RESERVED_LEN` when reporting on an already-packed image.
    pub fn from_header(header: &FirmwareHeader, reserved_supplied: usize) -> Self {
        Self {
            expected_size: header.expected_size,
            expected_crc: format!("0x{:08X}", header.expected_crc),
            device_type: header.device_type,
            data_type: header.data_type,
            protocol_type: header.protocol_type,
            header_len: HEADER_LEN,
            image_len: header.expected_size.saturating_add(HEADER_LEN as u64),
            reserved_supplied,
            reserved_truncated: reserved_supplied.saturating_sub(RESERVED_LEN),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
