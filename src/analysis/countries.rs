//! Producing country analysis functionality
//!
//! This module provides functions for analyzing which countries produce the
//! most titles. The country column is a multi-valued field; a co-production
//! counts once for every listed country.

use super::constants::TOP_K;
use crate::common::plots::create_top_counts_plot;
use crate::common::tally::{
    count_occurrences, format_count_table, split_multi_valued, top_k, CountEntry,
};
use crate::common::{PlotError, TitleRecord};
use std::fs;
use std::path::Path;

/// Errors that can occur during country analysis
#[derive(Debug)]
pub enum CountryError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for CountryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            CountryError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for CountryError {}

impl From<std::io::Error> for CountryError {
    fn from(err: std::io::Error) -> Self {
        CountryError::FileWrite(err)
    }
}

impl From<PlotError> for CountryError {
    fn from(err: PlotError) -> Self {
        CountryError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, CountryError>;

/// Returns the top producing countries by record-occurrence count
///
/// Titles without country information are skipped. The country field is
/// flattened, so one title may contribute several occurrences.
pub fn top_countries(titles: &[TitleRecord]) -> Vec<(String, usize)> {
    let occurrences = titles
        .iter()
        .filter_map(|title| title.country.as_deref())
        .flat_map(split_multi_valued);

    top_k(count_occurrences(occurrences), TOP_K)
}

/// Generate complete producing country analysis
///
/// Flattens the country field across the catalog, writes the top-country
/// frequency table and summary statistics to countries.txt.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the analysis file should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(CountryError)` - If file operations failed
pub fn generate_country_analysis(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let top = top_countries(titles);

    if top.is_empty() {
        return Ok(());
    }

    let total_occurrences: usize = titles
        .iter()
        .filter_map(|title| title.country.as_deref())
        .flat_map(split_multi_valued)
        .count();
    let titles_with_country = titles.iter().filter(|title| title.country.is_some()).count();

    let entries: Vec<CountEntry> = top
        .iter()
        .map(|(label, count)| CountEntry::new(label.clone(), *count, total_occurrences))
        .collect();
    let country_table = format_count_table(
        &entries,
        Some("Top 10 Countries Producing Catalog Content"),
    );

    let summary = format!(
        "Summary\n{}\nTitles with country information: {} of {}\nCountry occurrences counted: {}",
        "=".repeat(7),
        titles_with_country,
        titles.len(),
        total_occurrences
    );

    let output_file = output_dir.join("countries.txt");
    let output = format!(
        "Producing Country Analysis\n{}\n\n{}\n\n{}",
        "=".repeat(26),
        country_table,
        summary
    );

    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the top country chart
///
/// Draws the top-country counts as a horizontal bar chart and saves it as
/// top_countries.png.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully generated
/// * `Err(CountryError)` - If plot generation failed
pub fn generate_country_plots(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let top = top_countries(titles);

    if top.is_empty() {
        return Ok(());
    }

    create_top_counts_plot(
        &top,
        "Top 10 Countries Producing Catalog Content",
        "Number of Titles",
        &output_dir.join("top_countries.png"),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ContentType;

    fn title_from_country(country: Option<&str>) -> TitleRecord {
        TitleRecord {
            content_type: ContentType::Movie,
            release_year: 2020,
            country: country.map(str::to_string),
            listed_in: "Dramas".to_string(),
            duration: "90 min".to_string(),
            cast: None,
            director: None,
        }
    }

    #[test]
    fn test_top_countries_flattens_and_counts() {
        let titles = vec![
            title_from_country(Some("United States, India")),
            title_from_country(Some("India")),
            title_from_country(Some("United States")),
            title_from_country(Some("United States")),
        ];

        let top = top_countries(&titles);
        assert_eq!(
            top,
            vec![("United States".to_string(), 3), ("India".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_countries_skips_missing_values() {
        // Records without a country must contribute no occurrences at all
        let titles = vec![
            title_from_country(None),
            title_from_country(Some("France")),
            title_from_country(None),
        ];

        let top = top_countries(&titles);
        assert_eq!(top, vec![("France".to_string(), 1)]);
    }

    #[test]
    fn test_top_countries_caps_at_ten() {
        let names = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ];
        let titles: Vec<TitleRecord> = names
            .iter()
            .map(|name| title_from_country(Some(name)))
            .collect();

        let top = top_countries(&titles);
        assert_eq!(top.len(), 10);

        // Counts must be monotonically non-increasing across the sequence
        for window in top.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }
}
