//! metadata.rs
//! Header metadata as supplied by the packaging config.
//!
//! Design notes:
//! - Scalar keys are `Option<i128>`: an absent key resolves to its default
//!   (0xFFFF / 0xFF / 0xFFFF), an explicit `0` stays `0`.
//! - Values are kept wide so out-of-range input reaches header validation
//!   instead of being rejected (or wrapped) by the parser.
//! - Unknown keys are ignored. An explicit `null` counts as absent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_DATA_TYPE, DEFAULT_DEVICE_TYPE, DEFAULT_PROTOCOL_TYPE, RESERVED_LEN};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareMetadata {
    #[serde(rename = "Device_type", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<i128>,

    #[serde(rename = "Data_type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<i128>,

    #[serde(rename = "Protocol_type", default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<i128>,

    #[serde(rename = "Reserved", default, deserialize_with = "null_as_empty")]
    pub reserved: Vec<i128>,
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<i128>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<i128>>::deserialize(de)?.unwrap_or_default())
}

impl FirmwareMetadata {
    pub fn from_json_str(s: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, MetadataError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn resolved_device_type(&self) -> i128 {
        self.device_type.unwrap_or(DEFAULT_DEVICE_TYPE as i128)
    }

    pub fn resolved_data_type(&self) -> i128 {
        self.data_type.unwrap_or(DEFAULT_DATA_TYPE as i128)
    }

    pub fn resolved_protocol_type(&self) -> i128 {
        self.protocol_type.unwrap_or(DEFAULT_PROTOCOL_TYPE as i128)
    }

    /// Number of reserved elements dropped when normalizing to the fixed
    /// reserved region. Zero unless the config supplies too many.
    pub fn reserved_overflow(&self) -> usize {
        self.reserved.len().saturating_sub(RESERVED_LEN)
    }
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid header config: {0}")]
    Json(#[from] serde_json::Error),
}
