use crate::domain::models::FrequencyTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Any run of characters outside `[A-Za-z0-9_]` separates two words.
static WORD_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Splits `text` into words and counts each lowercased word.
pub fn count_words(text: &str) -> FrequencyTable {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for word in WORD_DELIMITER.split(text).filter(|w| !w.is_empty()) {
        *counts.entry(word.to_ascii_lowercase()).or_insert(0) += 1;
    }
    FrequencyTable::from_normalized(counts)
}

#[cfg(test)]
mod tests {
    use super::count_words;

    #[test]
    fn empty_text_gives_empty_table() {
        assert!(count_words("").is_empty());
        assert!(count_words("  ,;--!! ").is_empty());
    }

    #[test]
    fn counts_are_case_insensitive() {
        let t = count_words("The the THE");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("the"), Some(3));
    }

    #[test]
    fn punctuation_runs_split_words() {
        let t = count_words("a, b-b; c_c!");
        assert_eq!(t.len(), 3);
        assert_eq!(t.get("a"), Some(1));
        assert_eq!(t.get("b"), Some(2));
        assert_eq!(t.get("c_c"), Some(1));
        assert_eq!(t.get("b-b"), None);
    }

    #[test]
    fn digits_and_underscores_are_words() {
        let t = count_words("2023 __ 2023 x1");
        assert_eq!(t.get("2023"), Some(2));
        assert_eq!(t.get("__"), Some(1));
        assert_eq!(t.get("x1"), Some(1));
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn non_ascii_letters_act_as_delimiters() {
        let t = count_words("caf\u{e9} na\u{ef}ve");
        assert_eq!(t.get("caf"), Some(1));
        assert_eq!(t.get("na"), Some(1));
        assert_eq!(t.get("ve"), Some(1));
    }

    #[test]
    fn keys_are_lowercase_and_counts_positive() {
        let t = count_words("Hello, World!\nhello\tWORLD? Rust_Lang 42 rust_lang");
        for (word, count) in t.iter() {
            assert!(!word.is_empty());
            assert_eq!(word, word.to_lowercase());
            assert!(count >= 1);
        }
        assert_eq!(t.get("hello"), Some(2));
        assert_eq!(t.get("rust_lang"), Some(2));
    }
}
