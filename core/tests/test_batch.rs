#[cfg(test)]
mod tests {
    use lzw_text_core::compression::{
        compress_batch, decompress_batch, resolve_workers, Codec, CodecVariant, TextCodec,
    };
    use lzw_text_core::config::CodecConfig;
    use lzw_text_core::encoding::TextEncoding;
    use lzw_text_core::types::CodecError;

    fn docs() -> Vec<String> {
        (0..17)
            .map(|i| format!("Document {i}: the cat and the dog. Le chat et le chien. {}", "ab".repeat(i)))
            .collect()
    }

    #[test]
    fn worker_count_is_bounded() {
        assert_eq!(resolve_workers(Some(0), 5), 1);
        assert_eq!(resolve_workers(Some(8), 3), 3);
        assert_eq!(resolve_workers(Some(2), 10), 2);
        assert!(resolve_workers(None, 100) >= 1);
        assert_eq!(resolve_workers(None, 0), 1);
    }

    #[test]
    fn results_keep_input_order() {
        let codec = TextCodec::new(CodecConfig::default()).unwrap();
        let docs = docs();

        for workers in [Some(1), Some(4), None] {
            let outcome = compress_batch(&codec, &docs, workers);
            assert_eq!(outcome.items.len(), docs.len());
            assert_eq!(outcome.failed(), 0);

            for (doc, item) in docs.iter().zip(&outcome.items) {
                let bytes = item.as_ref().unwrap();
                assert_eq!(bytes, &codec.compress(doc).unwrap());
            }
        }
    }

    #[test]
    fn aggregate_matches_sum_of_documents() {
        let codec = TextCodec::new(CodecConfig::default()).unwrap();
        let docs = docs();
        let outcome = compress_batch(&codec, &docs, Some(3));

        let original: u64 = docs.iter().map(|d| d.len() as u64).sum();
        let compressed: u64 = outcome.items.iter().map(|r| r.as_ref().unwrap().len() as u64).sum();
        assert_eq!(outcome.aggregate.original_size, original);
        assert_eq!(outcome.aggregate.compressed_size, compressed);
        assert_eq!(outcome.telemetry.counters.documents, docs.len() as u64);
        assert_eq!(outcome.telemetry.stats, outcome.aggregate);
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = CodecConfig::default().with_encoding(TextEncoding::Latin1);
        let codec = TextCodec::new(config).unwrap();
        let docs = ["abc", "жжж", "def"];

        let outcome = compress_batch(&codec, &docs[..], Some(2));
        assert!(outcome.items[0].is_ok());
        assert!(matches!(outcome.items[1], Err(CodecError::Compression(_))));
        assert!(outcome.items[2].is_ok());
        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.telemetry.counters.failures, 1);
        assert_eq!(outcome.aggregate.original_size, 6);
    }

    #[test]
    fn decompress_batch_roundtrips_and_isolates_corruption() {
        let codec = TextCodec::new(CodecConfig::default().with_variant(CodecVariant::Plain)).unwrap();
        let docs = docs();
        let mut frames: Vec<Vec<u8>> = compress_batch(&codec, &docs, None)
            .items
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        frames[5].pop();

        let outcome = decompress_batch(&codec, &frames, Some(4));
        for (i, (doc, item)) in docs.iter().zip(&outcome.items).enumerate() {
            match item {
                Ok(text) => assert_eq!(text, doc),
                Err(e) => {
                    assert_eq!(i, 5);
                    assert!(e.is_malformed_frame());
                }
            }
        }
        assert_eq!(outcome.failed(), 1);
        assert_eq!(outcome.telemetry.counters.documents, docs.len() as u64 - 1);
    }

    #[test]
    fn decompress_aggregate_counts_canonical_text() {
        let codec = TextCodec::new(CodecConfig::default()).unwrap();
        let docs = ["  spaced \n\n out  ", "tabs\t\tand\nlines"];
        let frames: Vec<Vec<u8>> = docs.iter().map(|d| codec.compress(d).unwrap()).collect();

        let outcome = decompress_batch(&codec, &frames, Some(2));
        let canonical: u64 = docs.iter().map(|d| codec.preprocess(d).len() as u64).sum();
        let original: u64 = docs.iter().map(|d| d.len() as u64).sum();
        assert_eq!(outcome.aggregate.original_size, canonical);
        assert!(canonical < original);
        assert_eq!(outcome.items[0].as_deref().unwrap(), "spaced out");
    }

    #[test]
    fn empty_batch() {
        let codec = TextCodec::new(CodecConfig::default()).unwrap();
        let outcome = compress_batch(&codec, &Vec::<String>::new(), None);
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.aggregate.original_size, 0);
        assert_eq!(outcome.aggregate.ratio_percent, 0.0);
    }
}
