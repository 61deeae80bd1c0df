use crate::domain::models::FrequencyTable;
use crate::services::ranking::ranked_entries;

/// One `word,count` row per table entry, newline-joined, no header.
///
/// Rows follow rank order. Words are written as-is: a word holding a comma
/// or newline yields an ambiguous row.
pub fn to_csv(table: &FrequencyTable) -> String {
    ranked_entries(table)
        .iter()
        .map(|e| format!("{},{}", e.word, e.count))
        .collect::<Vec<_>>()
        .join("\n")
}
