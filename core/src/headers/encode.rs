//! headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Each field is written explicitly in big-endian order; no struct packing.
//! - Field order must match `decode.rs` exactly.
//! - Validation lives in `FirmwareHeader::from_metadata`; encoding a typed
//!   header cannot fail.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::HEADER_LEN;
use crate::headers::types::{FirmwareHeader, HeaderError};
use crate::metadata::FirmwareMetadata;

/// Serialize a `FirmwareHeader` into its 64-byte big-endian form.
#[inline]
pub fn encode_header_be(h: &FirmwareHeader) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    let mut i = 0usize;

    fn put_u8(out: &mut [u8], i: &mut usize, v: u8) {
        out[*i] = v;
        *i += 1;
    }
    fn put_u16(out: &mut [u8], i: &mut usize, v: u16) {
        BigEndian::write_u16(&mut out[*i..*i + 2], v);
        *i += 2;
    }
    fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
        BigEndian::write_u32(&mut out[*i..*i + 4], v);
        *i += 4;
    }
    fn put_u64(out: &mut [u8], i: &mut usize, v: u64) {
        BigEndian::write_u64(&mut out[*i..*i + 8], v);
        *i += 8;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_u64(&mut out, &mut i, h.expected_size);  // 0..8   payload length
    put_u32(&mut out, &mut i, h.expected_crc);   // 8..12  payload checksum
    put_u16(&mut out, &mut i, h.device_type);    // 12..14 device type
    put_u8(&mut out, &mut i, h.data_type);       // 14     data type
    put_u16(&mut out, &mut i, h.protocol_type);  // 15..17 protocol type
    put_bytes(&mut out, &mut i, &h.reserved);    // 17..64 reserved

    assert_eq!(i, HEADER_LEN, "header encoding wrote incorrect length");

    out
}

/// Validate `metadata` and build the header bytes for a payload of
/// `payload_length` bytes with checksum `crc`.
///
/// # Returns
/// - `Ok([u8; 64])` on success.
/// - `Err(HeaderError)` on the first out-of-range field or reserved element.
pub fn build_header(
    payload_length: u64,
    crc: u32,
    metadata: &FirmwareMetadata,
) -> Result<[u8; HEADER_LEN], HeaderError> {
    let header = FirmwareHeader::from_metadata(payload_length, crc, metadata)?;
    Ok(encode_header_be(&header))
}
