//! headers/mod.rs
//! Fixed 64-byte firmware header: typed value, validation, big-endian codec.
//!
//! Layout:
//!
//! ```text
//! [ expected_size (8) ][ expected_crc (4) ][ device_type (2) ]
//! [ data_type (1) ][ protocol_type (2) ][ reserved (47) ]
//! ```

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
