#[cfg(test)]
mod tests {
    use lzw_text_core::dictionary::{SeedSet, SEED_VERSION};

    #[test]
    fn multilingual_table_shape() {
        let seeds = SeedSet::multilingual();
        assert_eq!(SEED_VERSION, 1);
        assert_eq!(seeds.words().len(), 135);
        assert_eq!(seeds.patterns().len(), 19);
        assert_eq!(seeds.len(), 154);
        assert_eq!(seeds.iter().next(), Some("the"));
        assert_eq!(seeds.iter().last(), Some(" / "));
    }

    #[test]
    fn covers_every_script() {
        let seeds = SeedSet::multilingual();
        for token in ["the", "que", "être", "für", "não", "essere", "быть", "的", "التي", "\r\n", "..."] {
            assert!(seeds.contains(token), "missing seed {token:?}");
        }
        assert!(!seeds.contains("zzz"));
    }

    #[test]
    fn shared_not_copied() {
        assert!(std::ptr::eq(SeedSet::multilingual(), SeedSet::multilingual()));
        assert!(SeedSet::empty().is_empty());
        assert_eq!(SeedSet::empty().iter().count(), 0);
    }
}
