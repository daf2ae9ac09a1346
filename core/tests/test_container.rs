// Container layer: outer object -> inflate -> inner object, each step strict.

#[cfg(test)]
mod tests {
    use bytewords_core::container::{
        decode_object, encode_object, inflate, outer_bytes, unwrap, wrap, Compression,
        ContainerError, Step, ValueTree,
    };

    const LIMIT: usize = 1024 * 1024;

    fn sample_tree() -> ValueTree {
        ValueTree::Array(vec![
            ValueTree::Integer(1i64.into()),
            ValueTree::Array(vec![ValueTree::Text("abc".into()), ValueTree::Bool(true)]),
        ])
    }

    #[test]
    fn wrap_then_unwrap_is_identity_gzip() {
        let tree = sample_tree();
        let body = wrap(&tree, Compression::Gzip, 6).unwrap();
        assert_eq!(unwrap(&body, Compression::Gzip, LIMIT).unwrap(), tree);
    }

    #[test]
    fn wrap_then_unwrap_is_identity_zlib() {
        let tree = sample_tree();
        let body = wrap(&tree, Compression::Zlib, 9).unwrap();
        assert_eq!(unwrap(&body, Compression::Zlib, LIMIT).unwrap(), tree);
    }

    #[test]
    fn out_of_range_level_uses_default() {
        let tree = sample_tree();
        let body = wrap(&tree, Compression::Gzip, 42).unwrap();
        assert_eq!(unwrap(&body, Compression::Gzip, LIMIT).unwrap(), tree);
    }

    #[test]
    fn codec_mismatch_fails_inflate() {
        let body = wrap(&sample_tree(), Compression::Gzip, 6).unwrap();
        let err = unwrap(&body, Compression::Zlib, LIMIT).unwrap_err();
        assert!(matches!(err, ContainerError::Inflate { codec: "zlib", .. }));
    }

    #[test]
    fn outer_must_be_byte_string() {
        let body = encode_object(&ValueTree::Text("not bytes".into()), Step::Outer).unwrap();
        let err = outer_bytes(&body).unwrap_err();
        assert!(matches!(err, ContainerError::NotByteString { found: "text" }));
    }

    #[test]
    fn tagged_outer_byte_string_is_accepted() {
        let tagged = ValueTree::Tag(24, Box::new(ValueTree::Bytes(vec![1, 2, 3])));
        let body = encode_object(&tagged, Step::Outer).unwrap();
        assert_eq!(outer_bytes(&body).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn truncated_outer_is_malformed() {
        // Byte string header announcing 8 bytes, only 2 present.
        let err = outer_bytes(&[0x48, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, ContainerError::Malformed { step: Step::Outer, .. }));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut body = encode_object(&ValueTree::Bytes(vec![9]), Step::Outer).unwrap();
        body.extend_from_slice(&[0x00, 0x00]);
        let err = decode_object(&body, Step::Outer).unwrap_err();
        assert!(matches!(err, ContainerError::TrailingBytes { step: Step::Outer, count: 2 }));
    }

    #[test]
    fn garbage_compressed_stream_fails_inflate() {
        let body = encode_object(&ValueTree::Bytes(b"definitely not gzip".to_vec()), Step::Outer).unwrap();
        let err = unwrap(&body, Compression::Gzip, LIMIT).unwrap_err();
        assert!(matches!(err, ContainerError::Inflate { codec: "gzip", .. }));
    }

    #[test]
    fn inflate_cap_is_enforced() {
        let big = ValueTree::Bytes(vec![0u8; 64 * 1024]);
        let body = wrap(&big, Compression::Gzip, 6).unwrap();
        let err = unwrap(&body, Compression::Gzip, 1024).unwrap_err();
        assert!(matches!(err, ContainerError::InflatedTooLarge { limit: 1024 }));
    }

    #[test]
    fn inflate_exactly_at_cap_is_accepted() {
        let data = vec![7u8; 4096];
        let compressed = bytewords_core::container::deflate(&data, Compression::Zlib, 6).unwrap();
        assert_eq!(inflate(&compressed, Compression::Zlib, 4096).unwrap(), data);
        assert!(matches!(
            inflate(&compressed, Compression::Zlib, 4095).unwrap_err(),
            ContainerError::InflatedTooLarge { limit: 4095 }
        ));
    }

    #[test]
    fn inner_must_be_valid_object() {
        let compressed = bytewords_core::container::deflate(&[0xFF, 0xFF], Compression::Gzip, 6).unwrap();
        let body = encode_object(&ValueTree::Bytes(compressed), Step::Outer).unwrap();
        let err = unwrap(&body, Compression::Gzip, LIMIT).unwrap_err();
        assert!(matches!(err, ContainerError::Malformed { step: Step::Inner, .. }));
    }

    #[test]
    fn error_display_names_the_step() {
        let err = outer_bytes(&[0x48, 0x01]).unwrap_err();
        assert!(err.to_string().starts_with("outer object decode failed"));
    }
}
