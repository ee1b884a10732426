//! headers/types.rs
//! Firmware header struct, field registry and validation errors.
//!
//! Notes:
//! - The header is 64 bytes, fixed length, big-endian.
//! - Fields are typed at their wire width; construction from metadata is the
//!   only place range checks happen.

use std::fmt;
use thiserror::Error;

use crate::constants::RESERVED_LEN;
use crate::metadata::FirmwareMetadata;

/// Scalar metadata fields subject to range checks, in check order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeaderField {
    DeviceType,
    DataType,
    ProtocolType,
}

impl HeaderField {
    /// Config key as it appears in the header JSON.
    pub const fn key(self) -> &'static str {
        match self {
            HeaderField::DeviceType   => "Device_type",
            HeaderField::DataType     => "Data_type",
            HeaderField::ProtocolType => "Protocol_type",
        }
    }

    /// Inclusive upper bound; the lower bound is always 0.
    pub const fn max(self) -> u64 {
        match self {
            HeaderField::DeviceType   => u16::MAX as u64,
            HeaderField::DataType     => u8::MAX as u64,
            HeaderField::ProtocolType => u16::MAX as u64,
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Decoded / to-be-encoded firmware header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareHeader {
    pub expected_size: u64,           // payload length in bytes
    pub expected_crc: u32,            // checksum of payload
    pub device_type: u16,
    pub data_type: u8,
    pub protocol_type: u16,
    pub reserved: [u8; RESERVED_LEN], // zero-padded / truncated
}

impl FirmwareHeader {
    /// Resolve defaults, range-check and normalize `metadata`.
    ///
    /// Checks run in layout order and stop at the first violation. Every
    /// reserved element is checked, including ones that truncation will drop.
    pub fn from_metadata(
        expected_size: u64,
        expected_crc: u32,
        metadata: &FirmwareMetadata,
    ) -> Result<Self, HeaderError> {
        let device_type = check_field(HeaderField::DeviceType, metadata.resolved_device_type())?;
        let data_type = check_field(HeaderField::DataType, metadata.resolved_data_type())?;
        let protocol_type = check_field(HeaderField::ProtocolType, metadata.resolved_protocol_type())?;

        let mut reserved = [0u8; RESERVED_LEN];
        for (index, &value) in metadata.reserved.iter().enumerate() {
            let byte = u8::try_from(value)
                .map_err(|_| HeaderError::OutOfRangeReservedElement { index, value })?;
            if let Some(slot) = reserved.get_mut(index) {
                *slot = byte;
            }
        }

        Ok(Self {
            expected_size,
            expected_crc,
            device_type,
            data_type,
            protocol_type,
            reserved,
        })
    }
}

fn check_field<T: TryFrom<i128>>(field: HeaderField, value: i128) -> Result<T, HeaderError> {
    T::try_from(value).map_err(|_| HeaderError::OutOfRangeField {
        field,
        value,
        max: field.max(),
    })
}

/// Header validation failures. A failed build yields no header bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Scalar field does not fit its wire width.
    #[error("{field} out of range: {value} (allowed 0..={max})")]
    OutOfRangeField { field: HeaderField, value: i128, max: u64 },

    /// Reserved element does not fit in a byte.
    #[error("Reserved[{index}] out of range: {value} (allowed 0..=255)")]
    OutOfRangeReservedElement { index: usize, value: i128 },
}
