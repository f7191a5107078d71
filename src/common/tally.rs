//! Frequency counting and ASCII table formatting for categorical analysis
//!
//! This module provides shared functionality for frequency-based analysis:
//! - Splitting comma-separated multi-valued fields into record-occurrences
//! - Counting occurrences and selecting the top-K most frequent entries
//! - [`CountEntry`] type for representing a labelled count with its share
//! - ASCII table formatting using the [`tabled`] crate
//!
//! Per-dimension aggregation logic is located in the respective analysis modules

use std::collections::HashMap;
use tabled::{Table, Tabled};

/// Splits a comma-separated multi-valued field into its individual values
///
/// Values are trimmed of surrounding whitespace; empty segments (including a
/// fully empty field) are dropped. A title listed under three genres yields
/// three occurrences.
///
/// # Arguments
/// * `field` - The raw field text, e.g. "United States, India"
///
/// # Returns
/// An iterator over the trimmed, non-empty values
pub fn split_multi_valued(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|value| !value.is_empty())
}

/// Counts how often each value occurs in the given sequence
pub fn count_occurrences<'a>(values: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_default() += 1;
    }
    counts
}

/// Selects the `k` most frequent entries from a frequency map
///
/// Entries are ordered by descending count; equal counts are broken by
/// ascending label so the selection is deterministic.
///
/// # Arguments
/// * `counts` - Frequency map produced by [`count_occurrences`]
/// * `k` - Maximum number of entries to return
///
/// # Returns
/// At most `k` (label, count) pairs, most frequent first
pub fn top_k(counts: HashMap<String, usize>, k: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}

/// Represents a single labelled count with its share of the total
#[derive(Debug, Clone, Tabled)]
pub struct CountEntry {
    /// The counted value (e.g. a country, genre, or actor name)
    #[tabled(rename = "Value")]
    pub label: String,
    /// Number of record-occurrences with this value
    #[tabled(rename = "Titles")]
    pub count: usize,
    /// Share of all record-occurrences with this value
    #[tabled(rename = "Share")]
    pub share: String,
}

impl CountEntry {
    /// Creates a new count entry with formatted share percentage
    pub fn new(label: String, count: usize, total: usize) -> Self {
        let share = if total == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            label,
            count,
            share,
        }
    }
}

/// Formats count entries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `entries` - A slice of [`CountEntry`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_count_table(entries: &[CountEntry], title: Option<&str>) -> String {
    if entries.is_empty() {
        return "No data available for counting".to_string();
    }

    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multi_valued() {
        let values: Vec<&str> = split_multi_valued("United States, India,  France").collect();
        assert_eq!(values, vec!["United States", "India", "France"]);

        // Empty segments and empty fields yield nothing
        let values: Vec<&str> = split_multi_valued("Dramas, ,Comedies").collect();
        assert_eq!(values, vec!["Dramas", "Comedies"]);
        assert_eq!(split_multi_valued("").count(), 0);
    }

    #[test]
    fn test_count_occurrences() {
        let values = vec!["Dramas", "Comedies", "Dramas", "Dramas"];
        let counts = count_occurrences(values.into_iter());

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Dramas"], 3);
        assert_eq!(counts["Comedies"], 1);
    }

    #[test]
    fn test_top_k_limit_and_order() {
        let values = vec![
            "a", "a", "a", "b", "b", "c", "c", "c", "c", "d", "e", "e",
        ];
        let top = top_k(count_occurrences(values.into_iter()), 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0], ("c".to_string(), 4));
        assert_eq!(top[1], ("a".to_string(), 3));
        assert_eq!(top[2], ("b".to_string(), 2));

        // Counts are monotonically non-increasing across the sequence
        for window in top.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn test_top_k_ties_break_lexicographically() {
        let values = vec!["beta", "alpha", "gamma", "alpha", "beta", "gamma"];
        let top = top_k(count_occurrences(values.into_iter()), 10);

        assert_eq!(
            top,
            vec![
                ("alpha".to_string(), 2),
                ("beta".to_string(), 2),
                ("gamma".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_count_entry_new() {
        let entry = CountEntry::new("Dramas".to_string(), 25, 100);
        assert_eq!(entry.label, "Dramas");
        assert_eq!(entry.count, 25);
        assert_eq!(entry.share, "25.00%");

        // Test zero total
        let entry_zero = CountEntry::new("Dramas".to_string(), 10, 0);
        assert_eq!(entry_zero.share, "0.00%");
    }

    #[test]
    fn test_format_count_table() {
        let entries = vec![
            CountEntry::new("United States".to_string(), 10, 100),
            CountEntry::new("India".to_string(), 20, 100),
        ];

        let table = format_count_table(&entries, Some("Test Table"));
        assert!(table.contains("Test Table"));
        assert!(table.contains("Value"));
        assert!(table.contains("Titles"));
        assert!(table.contains("Share"));
        assert!(table.contains("United States"));
        assert!(table.contains("10.00%"));

        // Test without title
        let table_no_title = format_count_table(&entries, None);
        assert!(!table_no_title.contains("Test Table"));
        assert!(table_no_title.contains("Value"));
    }
}
