// Encoder/decoder over raw code streams (no preprocessing, no framing).

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use lzw_text_core::constants::LITERAL_ESCAPE;
    use lzw_text_core::dictionary::SeedSet;
    use lzw_text_core::encoding::TextEncoding;
    use lzw_text_core::engine::{DictionaryEngine, EngineError};

    fn plain(max: u32) -> DictionaryEngine {
        DictionaryEngine::new(TextEncoding::Utf8, SeedSet::empty(), max)
    }

    fn hybrid(max: u32) -> DictionaryEngine {
        DictionaryEngine::new(TextEncoding::Utf8, SeedSet::multilingual(), max)
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn roundtrip(engine: &mut DictionaryEngine, text: &str) -> Vec<u16> {
        let out = engine.encode(text).unwrap();
        let back = engine.decode(&out.codes).unwrap();
        assert_eq!(back, text);
        out.codes
    }

    #[test]
    fn classic_sequences() {
        let mut e = plain(65536);
        assert_eq!(roundtrip(&mut e, "abcabcabc"), vec![97, 98, 99, 256, 258, 257]);
        assert_eq!(roundtrip(&mut e, "ababab"), vec![97, 98, 256, 256]);
    }

    #[test]
    fn self_referential_code_is_decoded() {
        // Code 256 is emitted while it is being defined ("aa").
        let mut e = plain(65536);
        assert_eq!(roundtrip(&mut e, "aaaaaaaaaa"), vec![97, 256, 257, 258]);
    }

    #[test]
    fn no_hits_emit_one_code_per_symbol() {
        let mut e = hybrid(65536);
        let out = e.encode("vwxyz").unwrap();
        assert_eq!(out.codes, vec![118, 119, 120, 121, 122]);
        assert_eq!(out.learned, 4);
        assert_eq!(out.generations, 1);
        assert_eq!(out.literals, 0);
    }

    #[test]
    fn unknown_symbols_travel_as_literals() {
        let mut e = plain(65536);
        let out = e.encode("aж").unwrap();
        assert_eq!(out.codes, vec![97, LITERAL_ESCAPE, 0, 0x0436, 257]);
        assert_eq!(out.literals, 1);
        assert_eq!(e.decode(&out.codes).unwrap(), "aж");
    }

    #[test]
    fn seeded_symbols_skip_literals() {
        let mut e = hybrid(65536);
        let out = e.encode("é的").unwrap();
        assert_eq!(out.literals, 0);
        assert!(out.codes.iter().all(|&c| c >= 256 && c != LITERAL_ESCAPE));
    }

    #[test]
    fn empty_text_is_empty_stream() {
        let mut e = hybrid(65536);
        let out = e.encode("").unwrap();
        assert!(out.codes.is_empty());
        assert_eq!(e.decode(&[]).unwrap(), "");
    }

    #[test]
    fn overflow_resets_identically_on_both_sides() {
        init_logger();
        let text: String = (0..5000u32)
            .map(|i| char::from_u32(0x4E00 + (i * 7919) % 2000).unwrap())
            .collect();
        let mut enc = plain(512);
        let out = enc.encode(&text).unwrap();
        assert!(out.generations > 1);
        assert_eq!(enc.state().resets() + 1, out.generations);

        let mut dec = plain(512);
        assert_eq!(dec.decode(&out.codes).unwrap(), text);
        assert_eq!(dec.state().resets(), enc.state().resets());
        assert_eq!(dec.state().next_code(), enc.state().next_code());
        assert_eq!(dec.state().generation(), enc.state().generation());
    }

    #[test]
    fn unknown_code_is_rejected() {
        let mut e = plain(65536);
        assert_eq!(e.decode(&[97, 300]), Err(EngineError::InvalidCode { code: 300, position: 1 }));
        // Nothing pending yet: the self-referential case cannot apply.
        assert_eq!(e.decode(&[256]), Err(EngineError::InvalidCode { code: 256, position: 0 }));
        // Hole in the UTF-8 base range.
        assert_eq!(e.decode(&[0xC3]), Err(EngineError::InvalidCode { code: 0xC3, position: 0 }));
    }

    #[test]
    fn redundant_literal_is_rejected() {
        let mut e = plain(65536);
        let codes = [98, LITERAL_ESCAPE, 0, 97];
        assert_eq!(
            e.decode(&codes),
            Err(EngineError::InvalidCode { code: LITERAL_ESCAPE, position: 1 })
        );
    }

    #[test]
    fn reset_discards_adaptive_state() {
        let mut e = plain(65536);
        e.encode("abababab").unwrap();
        assert!(e.state().next_code() > 256);
        assert_eq!(e.reset().next_code(), 256);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_roundtrip_any_text(text in "\\PC{0,300}") {
            let mut e = hybrid(65536);
            let out = e.encode(&text).unwrap();
            prop_assert_eq!(e.decode(&out.codes).unwrap(), text);
        }

        #[test]
        fn prop_roundtrip_tiny_dictionary(text in "[a-d\u{4e00}-\u{4eff} ]{0,1500}") {
            for mut e in [plain(512), hybrid(512)] {
                let out = e.encode(&text).unwrap();
                prop_assert_eq!(e.decode(&out.codes).unwrap(), text.clone());
            }
        }
    }
}
