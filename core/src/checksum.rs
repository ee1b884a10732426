//! checksum.rs
//! Payload checksum used in the firmware header.
//!
//! The algorithm is CRC-32 over polynomial `0x04C11DB7`, processed MSB-first
//! with no input/output reflection, init `0xFFFFFFFF` and a final complement
//! (catalogued as CRC-32/BZIP2). It is NOT the reflected CRC-32/ISO-HDLC
//! computed by `crc32fast` and most "crc32" helpers; the bootloader side
//! validates with this exact bit ordering.

use crate::constants::{CRC_INIT, CRC_POLYNOMIAL};

/// MSB-first lookup table: `TABLE[i]` is the remainder of `i << 24` after
/// eight shift/xor rounds.
const TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    table[1] = CRC_POLYNOMIAL;
    let mut pos = 2;
    while pos < 256 {
        let prev = table[pos >> 1];
        let curr = (prev << 1) ^ if prev & 0x8000_0000 != 0 { CRC_POLYNOMIAL } else { 0 };
        table[pos] = curr;
        table[pos + 1] = curr ^ CRC_POLYNOMIAL;
        pos += 2;
    }
    table
};

/// Compute the firmware checksum over `data`.
///
/// Total over any input; the empty slice yields `0x0000_0000`.
#[inline]
pub fn compute_checksum(data: &[u8]) -> u32 {
    let crc = data.iter().fold(CRC_INIT, |crc, &b| {
        (crc << 8) ^ TABLE[((crc >> 24) as u8 ^ b) as usize]
    });
    !crc
}
