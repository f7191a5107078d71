//! Genre analysis functionality
//!
//! This module provides functions for analyzing which genres the catalog
//! lists titles under. The genre column is a multi-valued field; a title
//! listed under three genres contributes three occurrences.

use super::constants::TOP_K;
use crate::common::plots::create_top_counts_plot;
use crate::common::tally::{
    count_occurrences, format_count_table, split_multi_valued, top_k, CountEntry,
};
use crate::common::{PlotError, TitleRecord};
use std::fs;
use std::path::Path;

/// Errors that can occur during genre analysis
#[derive(Debug)]
pub enum GenreError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for GenreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenreError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            GenreError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for GenreError {}

impl From<std::io::Error> for GenreError {
    fn from(err: std::io::Error) -> Self {
        GenreError::FileWrite(err)
    }
}

impl From<PlotError> for GenreError {
    fn from(err: PlotError) -> Self {
        GenreError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, GenreError>;

/// Returns the most common genres by record-occurrence count
pub fn top_genres(titles: &[TitleRecord]) -> Vec<(String, usize)> {
    let occurrences = titles
        .iter()
        .flat_map(|title| split_multi_valued(&title.listed_in));

    top_k(count_occurrences(occurrences), TOP_K)
}

/// Generate complete genre analysis
///
/// Flattens the genre listings across the catalog, writes the top-genre
/// frequency table and summary statistics to genres.txt.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the analysis file should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(GenreError)` - If file operations failed
pub fn generate_genre_analysis(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let top = top_genres(titles);

    if top.is_empty() {
        return Ok(());
    }

    let total_occurrences: usize = titles
        .iter()
        .flat_map(|title| split_multi_valued(&title.listed_in))
        .count();

    let entries: Vec<CountEntry> = top
        .iter()
        .map(|(label, count)| CountEntry::new(label.clone(), *count, total_occurrences))
        .collect();
    let genre_table = format_count_table(&entries, Some("Top 10 Most Common Genres"));

    let summary = format!(
        "Summary\n{}\nTotal titles: {}\nGenre occurrences counted: {}",
        "=".repeat(7),
        titles.len(),
        total_occurrences
    );

    let output_file = output_dir.join("genres.txt");
    let output = format!(
        "Genre Analysis\n{}\n\n{}\n\n{}",
        "=".repeat(14),
        genre_table,
        summary
    );

    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the top genre chart
///
/// Draws the top-genre counts as a horizontal bar chart and saves it as
/// top_genres.png.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully generated
/// * `Err(GenreError)` - If plot generation failed
pub fn generate_genre_plots(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let top = top_genres(titles);

    if top.is_empty() {
        return Ok(());
    }

    create_top_counts_plot(
        &top,
        "Top 10 Most Common Genres",
        "Number of Titles",
        &output_dir.join("top_genres.png"),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ContentType;

    fn title_with_genres(listed_in: &str) -> TitleRecord {
        TitleRecord {
            content_type: ContentType::Movie,
            release_year: 2020,
            country: None,
            listed_in: listed_in.to_string(),
            duration: "90 min".to_string(),
            cast: None,
            director: None,
        }
    }

    #[test]
    fn test_top_genres_flattens_and_counts() {
        let titles = vec![
            title_with_genres("Dramas, International Movies"),
            title_with_genres("Dramas, Comedies"),
            title_with_genres("Dramas"),
        ];

        let top = top_genres(&titles);
        assert_eq!(top[0], ("Dramas".to_string(), 3));
        assert_eq!(top.len(), 3);

        // Equal counts fall back to lexicographic order
        assert_eq!(top[1], ("Comedies".to_string(), 1));
        assert_eq!(top[2], ("International Movies".to_string(), 1));
    }

    #[test]
    fn test_top_genres_empty_catalog() {
        let top = top_genres(&[]);
        assert!(top.is_empty());
    }
}
