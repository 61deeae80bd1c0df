use crate::domain::models::{FrequencyTable, RankedEntry};
use crate::error::TallyError;
use std::cmp::Ordering;

/// Count descending, then word ascending so equal counts have a stable order.
fn by_rank(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Every entry of `table` in rank order.
pub fn ranked_entries(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(word, count)| RankedEntry {
            word: word.to_string(),
            count,
        })
        .collect();
    entries.sort_by(by_rank);
    entries
}

/// The `limit` most frequent words. A negative limit is rejected.
pub fn rank_top(table: &FrequencyTable, limit: i64) -> Result<Vec<RankedEntry>, TallyError> {
    let limit = usize::try_from(limit).map_err(|_| {
        TallyError::InvalidArgument(format!("rank limit must be >= 0, got {limit}"))
    })?;
    let mut entries = ranked_entries(table);
    entries.truncate(limit);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::counter::count_words;

    fn table(pairs: &[(&str, u64)]) -> FrequencyTable {
        FrequencyTable::from_counts(pairs.iter().map(|(w, c)| (*w, *c))).unwrap()
    }

    #[test]
    fn length_is_min_of_limit_and_size() {
        let t = table(&[("a", 3), ("b", 2), ("c", 1)]);
        for limit in 0..6 {
            let ranked = rank_top(&t, limit).unwrap();
            assert_eq!(ranked.len(), (limit as usize).min(t.len()));
        }
    }

    #[test]
    fn counts_are_non_increasing() {
        let t = count_words("x y y z z z w w w w v v v v v u");
        let ranked = rank_top(&t, 20).unwrap();
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(ranked[0].word, "v");
    }

    #[test]
    fn ties_break_on_word_ascending() {
        let t = table(&[("pear", 2), ("apple", 2), ("fig", 5), ("kiwi", 2)]);
        let words: Vec<String> = rank_top(&t, 10)
            .unwrap()
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, vec!["fig", "apple", "kiwi", "pear"]);
    }

    #[test]
    fn zero_limit_is_empty() {
        let t = table(&[("a", 1)]);
        assert!(rank_top(&t, 0).unwrap().is_empty());
    }

    #[test]
    fn negative_limit_is_invalid_argument() {
        let t = table(&[("a", 1)]);
        let err = rank_top(&t, -1).unwrap_err();
        assert!(matches!(err, TallyError::InvalidArgument(_)));
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn empty_table_ranks_to_nothing() {
        assert!(rank_top(&FrequencyTable::default(), 20).unwrap().is_empty());
    }
}
