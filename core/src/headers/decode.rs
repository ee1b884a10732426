//! headers/decode.rs
//!
//! Header decoding. Field order must match `encode.rs`.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{offsets, HEADER_LEN, RESERVED_LEN};
use crate::headers::types::FirmwareHeader;
use crate::image::ImageError;

/// Parse the leading 64 bytes of `buf` into a `FirmwareHeader`.
/// Trailing bytes (the payload) are ignored.
pub fn decode_header_be(buf: &[u8]) -> Result<FirmwareHeader, ImageError> {
    if buf.len() < HEADER_LEN {
        return Err(ImageError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let mut reserved = [0u8; RESERVED_LEN];
    reserved.copy_from_slice(&buf[offsets::RESERVED..HEADER_LEN]);

    Ok(FirmwareHeader {
        expected_size: BigEndian::read_u64(&buf[offsets::EXPECTED_SIZE..offsets::EXPECTED_CRC]),
        expected_crc: BigEndian::read_u32(&buf[offsets::EXPECTED_CRC..offsets::DEVICE_TYPE]),
        device_type: BigEndian::read_u16(&buf[offsets::DEVICE_TYPE..offsets::DATA_TYPE]),
        data_type: buf[offsets::DATA_TYPE],
        protocol_type: BigEndian::read_u16(&buf[offsets::PROTOCOL_TYPE..offsets::RESERVED]),
        reserved,
    })
}
