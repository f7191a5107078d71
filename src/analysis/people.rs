//! Cast and director analysis functionality
//!
//! This module provides functions for finding the most frequently featured
//! actors and directors. Both columns are nullable multi-valued fields; a
//! person counts once per title they appear on.

use super::constants::TOP_K;
use crate::common::plots::create_top_counts_plot;
use crate::common::tally::{
    count_occurrences, format_count_table, split_multi_valued, top_k, CountEntry,
};
use crate::common::{PlotError, TitleRecord};
use std::fs;
use std::path::Path;

/// Errors that can occur during cast and director analysis
#[derive(Debug)]
pub enum PeopleError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for PeopleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeopleError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            PeopleError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for PeopleError {}

impl From<std::io::Error> for PeopleError {
    fn from(err: std::io::Error) -> Self {
        PeopleError::FileWrite(err)
    }
}

impl From<PlotError> for PeopleError {
    fn from(err: PlotError) -> Self {
        PeopleError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, PeopleError>;

/// Returns the most featured actors by record-occurrence count
///
/// Titles without cast information are skipped.
pub fn top_actors(titles: &[TitleRecord]) -> Vec<(String, usize)> {
    let occurrences = titles
        .iter()
        .filter_map(|title| title.cast.as_deref())
        .flat_map(split_multi_valued);

    top_k(count_occurrences(occurrences), TOP_K)
}

/// Returns the most featured directors by record-occurrence count
///
/// Titles without director information are skipped.
pub fn top_directors(titles: &[TitleRecord]) -> Vec<(String, usize)> {
    let occurrences = titles
        .iter()
        .filter_map(|title| title.director.as_deref())
        .flat_map(split_multi_valued);

    top_k(count_occurrences(occurrences), TOP_K)
}

/// Generate complete cast and director analysis
///
/// Flattens the cast and director fields across the catalog and writes both
/// top-ten frequency tables with summary statistics to people.txt.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the analysis file should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(PeopleError)` - If file operations failed
pub fn generate_people_analysis(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let actors = top_actors(titles);
    let directors = top_directors(titles);

    if actors.is_empty() && directors.is_empty() {
        return Ok(());
    }

    let actor_occurrences: usize = titles
        .iter()
        .filter_map(|title| title.cast.as_deref())
        .flat_map(split_multi_valued)
        .count();
    let director_occurrences: usize = titles
        .iter()
        .filter_map(|title| title.director.as_deref())
        .flat_map(split_multi_valued)
        .count();

    let actor_entries: Vec<CountEntry> = actors
        .iter()
        .map(|(label, count)| CountEntry::new(label.clone(), *count, actor_occurrences))
        .collect();
    let actor_table = format_count_table(&actor_entries, Some("Top 10 Most Featured Actors"));

    let director_entries: Vec<CountEntry> = directors
        .iter()
        .map(|(label, count)| CountEntry::new(label.clone(), *count, director_occurrences))
        .collect();
    let director_table =
        format_count_table(&director_entries, Some("Top 10 Most Featured Directors"));

    let titles_with_cast = titles.iter().filter(|title| title.cast.is_some()).count();
    let titles_with_director = titles
        .iter()
        .filter(|title| title.director.is_some())
        .count();

    let summary = format!(
        "Summary\n{}\nTitles with cast information: {} of {}\nTitles with director information: {} of {}",
        "=".repeat(7),
        titles_with_cast,
        titles.len(),
        titles_with_director,
        titles.len()
    );

    let output_file = output_dir.join("people.txt");
    let output = format!(
        "Cast and Director Analysis\n{}\n\nACTORS\n{}\n\nDIRECTORS\n{}\n\n{}",
        "=".repeat(26),
        actor_table,
        director_table,
        summary
    );

    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the cast and director charts
///
/// Draws the top-actor and top-director counts as horizontal bar charts,
/// saved as top_actors.png and top_directors.png.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the PNG files should be saved
///
/// # Returns
/// * `Ok(())` - If the plots were successfully generated
/// * `Err(PeopleError)` - If plot generation failed
pub fn generate_people_plots(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let actors = top_actors(titles);
    if !actors.is_empty() {
        create_top_counts_plot(
            &actors,
            "Top 10 Most Featured Actors",
            "Number of Titles",
            &output_dir.join("top_actors.png"),
        )?;
    }

    let directors = top_directors(titles);
    if !directors.is_empty() {
        create_top_counts_plot(
            &directors,
            "Top 10 Most Featured Directors",
            "Number of Titles",
            &output_dir.join("top_directors.png"),
        )?;
    }

    Ok(())
}
