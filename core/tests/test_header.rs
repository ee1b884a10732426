// ## Full test suite for the firmware header builder
//
// Catches:
// * range-check regressions and check ordering
// * default-vs-explicit-zero mixups
// * reserved padding / truncation drift
// * byte-layout drift

#[cfg(test)]
mod tests {
    use fwheader_core::constants::{HEADER_LEN, RESERVED_LEN};
    use fwheader_core::{
        build_header, decode_header_be, encode_header_be, FirmwareHeader, FirmwareMetadata, HeaderError,
        HeaderField, ImageError,
    };
    use proptest::prelude::*;

    fn metadata(device: Option<i128>, data: Option<i128>, protocol: Option<i128>, reserved: Vec<i128>) -> FirmwareMetadata {
        FirmwareMetadata { device_type: device, data_type: data, protocol_type: protocol, reserved }
    }

    fn be_u64(b: &[u8]) -> u64 { u64::from_be_bytes(b.try_into().unwrap()) }
    fn be_u32(b: &[u8]) -> u32 { u32::from_be_bytes(b.try_into().unwrap()) }
    fn be_u16(b: &[u8]) -> u16 { u16::from_be_bytes(b.try_into().unwrap()) }

// ## 1️⃣ Layout

    #[test]
    fn defaults_only_layout() {
        let out = build_header(5, 0x1D70_B47C, &FirmwareMetadata::default()).unwrap();
        assert_eq!(out.len(), HEADER_LEN);
        assert_eq!(be_u64(&out[0..8]), 5);
        assert_eq!(be_u32(&out[8..12]), 0x1D70_B47C);
        assert_eq!(be_u16(&out[12..14]), 0xFFFF);
        assert_eq!(out[14], 0xFF);
        assert_eq!(be_u16(&out[15..17]), 0xFFFF);
        assert!(out[17..].iter().all(|&b| b == 0));
    }

    #[test]
    fn exact_bytes_for_explicit_fields() {
        let md = metadata(Some(0x1234), Some(0x56), Some(0x789A), vec![0xAB, 0xCD]);
        let out = build_header(0x0102_0304_0506_0708, 0xDEAD_BEEF, &md).unwrap();
        let mut expected = [0u8; HEADER_LEN];
        expected[..19].copy_from_slice(&[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
            0xDE, 0xAD, 0xBE, 0xEF,
            0x12, 0x34,
            0x56,
            0x78, 0x9A,
            0xAB, 0xCD,
        ]);
        assert_eq!(out, expected);
    }

    #[test]
    fn explicit_zero_is_not_default() {
        let out = build_header(0, 0, &metadata(Some(0), Some(0), Some(0), vec![])).unwrap();
        assert!(out.iter().all(|&b| b == 0));
    }

// ## 2️⃣ Reserved normalization

    #[test]
    fn reserved_46_is_zero_padded() {
        let out = build_header(1, 1, &metadata(None, None, None, vec![7; 46])).unwrap();
        assert!(out[17..63].iter().all(|&b| b == 7));
        assert_eq!(out[63], 0);
    }

    #[test]
    fn reserved_47_fills_region() {
        let reserved: Vec<i128> = (1..=47).collect();
        let out = build_header(1, 1, &metadata(None, None, None, reserved)).unwrap();
        let expected: Vec<u8> = (1..=47).collect();
        assert_eq!(&out[17..], expected.as_slice());
    }

    #[test]
    fn reserved_48_is_truncated() {
        let reserved: Vec<i128> = (1..=48).collect();
        let md = metadata(None, None, None, reserved);
        assert_eq!(md.reserved_overflow(), 1);
        let out = build_header(1, 1, &md).unwrap();
        assert_eq!(out.len(), HEADER_LEN);
        assert_eq!(out[63], 47);
    }

// ## 3️⃣ Range checks

    #[test]
    fn device_type_bounds() {
        build_header(0, 0, &metadata(Some(65535), None, None, vec![])).unwrap();
        let err = build_header(0, 0, &metadata(Some(65536), None, None, vec![])).unwrap_err();
        assert_eq!(
            err,
            HeaderError::OutOfRangeField { field: HeaderField::DeviceType, value: 65536, max: 65535 }
        );
    }

    #[test]
    fn data_type_bounds() {
        build_header(0, 0, &metadata(None, Some(255), None, vec![])).unwrap();
        let err = build_header(0, 0, &metadata(None, Some(256), None, vec![])).unwrap_err();
        assert!(matches!(err, HeaderError::OutOfRangeField { field: HeaderField::DataType, max: 255, .. }));
    }

    #[test]
    fn protocol_type_rejects_negative() {
        let err = build_header(0, 0, &metadata(None, None, Some(-1), vec![])).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::OutOfRangeField { field: HeaderField::ProtocolType, value: -1, max: 65535 }
        ));
    }

    #[test]
    fn reserved_reports_first_bad_index() {
        let err = build_header(0, 0, &metadata(None, None, None, vec![10, 300, 20])).unwrap_err();
        assert_eq!(err, HeaderError::OutOfRangeReservedElement { index: 1, value: 300 });
    }

    #[test]
    fn first_violation_wins() {
        let md = metadata(Some(70000), Some(999), Some(-5), vec![-1]);
        match build_header(0, 0, &md).unwrap_err() {
            HeaderError::OutOfRangeField { field: HeaderField::DeviceType, .. } => {}
            other => panic!("unexpected error: {other:?}"),
        }

        let md = metadata(None, Some(999), Some(-5), vec![-1]);
        match build_header(0, 0, &md).unwrap_err() {
            HeaderError::OutOfRangeField { field: HeaderField::DataType, .. } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reserved_beyond_region_is_still_checked() {
        let mut reserved = vec![0i128; 60];
        reserved[50] = 256;
        let err = build_header(0, 0, &metadata(None, None, None, reserved)).unwrap_err();
        assert_eq!(err, HeaderError::OutOfRangeReservedElement { index: 50, value: 256 });
    }

    #[test]
    fn error_messages_name_field_and_range() {
        let err = HeaderError::OutOfRangeField { field: HeaderField::DeviceType, value: 65536, max: 65535 };
        assert_eq!(err.to_string(), "Device_type out of range: 65536 (allowed 0..=65535)");
        let err = HeaderError::OutOfRangeReservedElement { index: 1, value: 300 };
        assert_eq!(err.to_string(), "Reserved[1] out of range: 300 (allowed 0..=255)");
    }

// ## 4️⃣ Decoding

    #[test]
    fn decode_rejects_short_buffer() {
        let err = decode_header_be(&[0u8; HEADER_LEN - 1]).unwrap_err();
        assert_eq!(err, ImageError::BufferTooShort { have: HEADER_LEN - 1, need: HEADER_LEN });
    }

    #[test]
    fn encode_decode_typed_header() {
        let header = FirmwareHeader {
            expected_size: 42,
            expected_crc: 0xCAFE_F00D,
            device_type: 3,
            data_type: 4,
            protocol_type: 5,
            reserved: [0x11; RESERVED_LEN],
        };
        let bytes = encode_header_be(&header);
        assert_eq!(decode_header_be(&bytes).unwrap(), header);
    }

    proptest! {
        #[test]
        fn prop_valid_metadata_builds_and_round_trips(
            size in any::<u64>(),
            crc in any::<u32>(),
            device in 0i128..=65535,
            data in 0i128..=255,
            protocol in 0i128..=65535,
            reserved in proptest::collection::vec(0i128..=255, 0..80),
        ) {
            let md = metadata(Some(device), Some(data), Some(protocol), reserved.clone());
            let out = build_header(size, crc, &md).unwrap();
            prop_assert_eq!(out.len(), HEADER_LEN);

            let h = decode_header_be(&out).unwrap();
            prop_assert_eq!(h.expected_size, size);
            prop_assert_eq!(h.expected_crc, crc);
            prop_assert_eq!(h.device_type as i128, device);
            prop_assert_eq!(h.data_type as i128, data);
            prop_assert_eq!(h.protocol_type as i128, protocol);
            for (i, &b) in h.reserved.iter().enumerate() {
                prop_assert_eq!(b as i128, reserved.get(i).copied().unwrap_or(0));
            }
        }
    }
}
