// Declared text encodings: name resolution, base ranges, byte lengths.

#[cfg(test)]
mod tests {
    use lzw_text_core::encoding::{EncodingError, TextEncoding};

    #[test]
    fn names_and_aliases_resolve() {
        assert_eq!(TextEncoding::from_name("utf-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::from_name("UTF8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::from_name(" utf-16 ").unwrap(), TextEncoding::Utf16);
        assert_eq!(TextEncoding::from_name("ISO-8859-1").unwrap(), TextEncoding::Latin1);
        assert_eq!("latin1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);

        for enc in TextEncoding::ALL {
            assert_eq!(TextEncoding::from_name(enc.name()).unwrap(), enc);
            assert_eq!(enc.to_string(), enc.name());
        }
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = TextEncoding::from_name("ebcdic").unwrap_err();
        assert_eq!(err, EncodingError::UnsupportedEncoding { name: "ebcdic".into() });
    }

    #[test]
    fn ids_are_stable() {
        assert_eq!(TextEncoding::try_from(1u8).unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::try_from(2u8).unwrap(), TextEncoding::Utf16);
        assert_eq!(TextEncoding::try_from(3u8).unwrap(), TextEncoding::Latin1);
        assert!(TextEncoding::try_from(9u8).is_err());
    }

    #[test]
    fn utf8_base_has_holes_above_ascii() {
        let present = (0..=255u8).filter(|&b| TextEncoding::Utf8.base_symbol(b).is_some()).count();
        assert_eq!(present, 128);
        assert_eq!(TextEncoding::Latin1.base_symbol(0xE9), Some('é'));
        assert_eq!(TextEncoding::Utf16.base_symbol(0xE9), Some('é'));
    }

    #[test]
    fn encoded_len_counts_bytes_not_symbols() {
        let text = "aé的😀";
        assert_eq!(TextEncoding::Utf8.encoded_len(text), 1 + 2 + 3 + 4);
        assert_eq!(TextEncoding::Utf16.encoded_len(text), 2 + 2 + 2 + 4);
        assert_eq!(TextEncoding::Latin1.encoded_len("aé"), 2);
    }

    #[test]
    fn latin1_rejects_wide_symbols() {
        assert!(TextEncoding::Latin1.ensure_encodable("café").is_ok());
        let err = TextEncoding::Latin1.ensure_encodable("caféж").unwrap_err();
        assert_eq!(err, EncodingError::Unencodable { symbol: 'ж', encoding: TextEncoding::Latin1 });
        assert!(TextEncoding::Utf16.ensure_encodable("ж😀").is_ok());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&TextEncoding::Utf16).unwrap();
        assert_eq!(json, "\"utf-16\"");
        let back: TextEncoding = serde_json::from_str("\"latin-1\"").unwrap();
        assert_eq!(back, TextEncoding::Latin1);
        assert!(serde_json::from_str::<TextEncoding>("\"koi8-r\"").is_err());
    }
}
