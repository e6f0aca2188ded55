// Header codec: layout, registries, and every rejection path.
//
// Mutated headers are re-sealed through `build_header` so each case reaches
// the check it targets instead of tripping the self-hash first.

#[cfg(test)]
mod tests {
    use vault_envelope::constants::{flags, offsets, HEADER_LEN, MAGIC_VE, MAX_ITERATIONS, MIN_ITERATIONS};
    use vault_envelope::headers::{
        build_header, enum_name_or_hex, fmt_bytes, parse_header, CipherSuite, EnvelopeHeader,
        HeaderError, KdfAlgorithm, Purpose,
    };
    use vault_envelope::FailureKind;

    fn sealed(edit: impl FnOnce(&mut EnvelopeHeader)) -> [u8; HEADER_LEN] {
        let mut h = EnvelopeHeader::new(MIN_ITERATIONS);
        edit(&mut h);
        build_header(&h)
    }

    // ## Layout

    #[test]
    fn layout_is_big_endian_and_fixed() {
        let bytes = build_header(&EnvelopeHeader::new(0x0003_3450));
        assert_eq!(bytes.len(), 45);
        assert_eq!(&bytes[offsets::MAGIC..offsets::VERSION], &MAGIC_VE);
        assert_eq!(bytes[offsets::VERSION], 1);
        assert_eq!(bytes[offsets::PURPOSE], 1);
        assert_eq!(bytes[offsets::KDF_ID], 1);
        assert_eq!(bytes[offsets::CIPHER_ID], 1);
        assert_eq!(bytes[offsets::FLAGS], flags::COMPRESSED);
        assert_eq!(&bytes[offsets::ITERATIONS..offsets::RESERVED], &[0x00, 0x03, 0x34, 0x50]);
        assert_eq!(&bytes[offsets::RESERVED..offsets::HEADER_HASH], &[0, 0]);
    }

    #[test]
    fn build_then_parse_returns_fields() {
        let h = EnvelopeHeader::new(210_000);
        assert_eq!(parse_header(&build_header(&h)).unwrap(), h);
        assert!(h.is_compressed());
    }

    #[test]
    fn parse_ignores_trailing_bytes() {
        let mut buf = build_header(&EnvelopeHeader::default()).to_vec();
        buf.extend_from_slice(&[0xAA; 64]);
        assert_eq!(parse_header(&buf).unwrap(), EnvelopeHeader::default());
    }

    #[test]
    fn iteration_bounds_are_inclusive() {
        for it in [MIN_ITERATIONS, MAX_ITERATIONS] {
            assert_eq!(parse_header(&sealed(|h| h.iterations = it)).unwrap().iterations, it);
        }
    }

    #[test]
    fn uncompressed_flag_is_accepted() {
        let h = parse_header(&sealed(|h| h.flags = 0)).unwrap();
        assert!(!h.is_compressed());
    }

    // ## Rejections

    #[test]
    fn short_buffer() {
        let bytes = build_header(&EnvelopeHeader::default());
        assert_eq!(
            parse_header(&bytes[..44]),
            Err(HeaderError::BufferTooShort { have: 44, need: 45 })
        );
    }

    #[test]
    fn bad_magic() {
        let err = parse_header(&sealed(|h| h.magic = *b"XX")).unwrap_err();
        assert_eq!(err, HeaderError::InvalidMagic { have: *b"XX", need: MAGIC_VE });
        assert_eq!(err.kind(), FailureKind::Format);
    }

    #[test]
    fn version_gate() {
        for v in [0u8, 2, 0xFF] {
            assert_eq!(
                parse_header(&sealed(|h| h.version = v)),
                Err(HeaderError::UnsupportedVersion { have: v })
            );
        }
    }

    #[test]
    fn self_hash_detects_any_field_flip() {
        let good = build_header(&EnvelopeHeader::new(MIN_ITERATIONS));
        // Magic and version are checked before the hash; everything after is hash-gated.
        for idx in offsets::PURPOSE..HEADER_LEN {
            let mut bad = good;
            bad[idx] ^= 0x10;
            let err = parse_header(&bad).unwrap_err();
            assert_eq!(err, HeaderError::HeaderHashMismatch, "byte {idx}");
            assert_eq!(err.kind(), FailureKind::Integrity);
        }
    }

    #[test]
    fn reserved_must_be_zero() {
        assert_eq!(
            parse_header(&sealed(|h| h.reserved = [0, 1])),
            Err(HeaderError::ReservedBytesNonZero { reserved: [0, 1] })
        );
    }

    #[test]
    fn iterations_below_floor() {
        let err = parse_header(&sealed(|h| h.iterations = MIN_ITERATIONS - 1)).unwrap_err();
        assert_eq!(
            err,
            HeaderError::IterationsOutOfRange { have: 9_999, min: MIN_ITERATIONS, max: MAX_ITERATIONS }
        );
        assert_eq!(err.kind(), FailureKind::Format);
    }

    #[test]
    fn iterations_above_ceiling() {
        assert!(matches!(
            parse_header(&sealed(|h| h.iterations = MAX_ITERATIONS + 1)),
            Err(HeaderError::IterationsOutOfRange { have: 1_000_001, .. })
        ));
        assert!(matches!(
            parse_header(&sealed(|h| h.iterations = u32::MAX)),
            Err(HeaderError::IterationsOutOfRange { .. })
        ));
    }

    #[test]
    fn unknown_algorithms() {
        let kdf = parse_header(&sealed(|h| h.kdf_id = 2)).unwrap_err();
        assert_eq!(kdf, HeaderError::UnknownKdf { raw: 2 });
        assert_eq!(kdf.kind(), FailureKind::UnsupportedAlgorithm);

        let cipher = parse_header(&sealed(|h| h.cipher_id = 0)).unwrap_err();
        assert_eq!(cipher, HeaderError::UnknownCipherSuite { raw: 0 });
        assert_eq!(cipher.kind(), FailureKind::UnsupportedAlgorithm);
    }

    #[test]
    fn unknown_flag_bits() {
        assert_eq!(
            parse_header(&sealed(|h| h.flags = 0x81)),
            Err(HeaderError::UnknownFlags { raw: 0x81 })
        );
    }

    #[test]
    fn unknown_purpose() {
        assert_eq!(
            parse_header(&sealed(|h| h.purpose = 9)),
            Err(HeaderError::UnknownPurpose { raw: 9 })
        );
    }

    #[test]
    fn first_failure_wins() {
        // Bad iterations and bad kdf together: iterations is checked first.
        let err = parse_header(&sealed(|h| {
            h.iterations = 1;
            h.kdf_id = 7;
        }))
        .unwrap_err();
        assert!(matches!(err, HeaderError::IterationsOutOfRange { have: 1, .. }));
    }

    // ## Registries and formatting

    #[test]
    fn registries_reject_unknown_ids() {
        Purpose::verify(1).unwrap();
        KdfAlgorithm::verify(1).unwrap();
        CipherSuite::verify(1).unwrap();
        assert!(Purpose::verify(0).is_err());
        assert!(KdfAlgorithm::verify(0xFF).is_err());
        assert!(CipherSuite::verify(2).is_err());
    }

    #[test]
    fn error_messages_name_values() {
        assert_eq!(enum_name_or_hex::<KdfAlgorithm>(1), "Pbkdf2Sha512");
        assert_eq!(enum_name_or_hex::<KdfAlgorithm>(0x2a), "0x2a");
        assert_eq!(fmt_bytes(b"VE"), "b\"VE\"");
        assert_eq!(fmt_bytes(&[0, 1]), "0x0001");

        let msg = HeaderError::UnknownCipherSuite { raw: 0x10 }.to_string();
        assert_eq!(msg, "unknown cipher suite: 0x10");
    }
}
