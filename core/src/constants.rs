//! constants.rs
//! Header layout, field defaults and checksum parameters.

/// Total size of the firmware header in bytes.
pub const HEADER_LEN: usize = 64;

/// Size of the trailing reserved region.
pub const RESERVED_LEN: usize = 47;

/// Byte offsets of each header field (big-endian layout).
pub mod offsets {
    pub const EXPECTED_SIZE: usize = 0;
    pub const EXPECTED_CRC: usize = 8;
    pub const DEVICE_TYPE: usize = 12;
    pub const DATA_TYPE: usize = 14;
    pub const PROTOCOL_TYPE: usize = 15;
    pub const RESERVED: usize = 17;
}

/// Defaults applied when a metadata key is absent.
pub const DEFAULT_DEVICE_TYPE: u16 = 0xFFFF;
pub const DEFAULT_DATA_TYPE: u8 = 0xFF;
pub const DEFAULT_PROTOCOL_TYPE: u16 = 0xFFFF;

/// Checksum parameters (MSB-first, non-reflected, a.k.a. CRC-32/BZIP2).
pub const CRC_POLYNOMIAL: u32 = 0x04C1_1DB7;
pub const CRC_INIT: u32 = 0xFFFF_FFFF;
