//! Content type analysis functionality
//!
//! This module provides functions for analyzing the Movie vs TV Show split
//! of the catalog.

use crate::common::plots::create_category_count_plot;
use crate::common::tally::{format_count_table, CountEntry};
use crate::common::{ContentType, PlotError, TitleRecord};
use std::fs;
use std::path::Path;

/// Errors that can occur during content type analysis
#[derive(Debug)]
pub enum ContentTypeError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for ContentTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentTypeError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            ContentTypeError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for ContentTypeError {}

impl From<std::io::Error> for ContentTypeError {
    fn from(err: std::io::Error) -> Self {
        ContentTypeError::FileWrite(err)
    }
}

impl From<PlotError> for ContentTypeError {
    fn from(err: PlotError) -> Self {
        ContentTypeError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, ContentTypeError>;

/// Counts titles per content type, movies first
pub fn count_by_content_type(titles: &[TitleRecord]) -> Vec<(String, usize)> {
    let movies = titles
        .iter()
        .filter(|title| title.content_type == ContentType::Movie)
        .count();
    let shows = titles.len() - movies;

    vec![
        (ContentType::Movie.to_string(), movies),
        (ContentType::TvShow.to_string(), shows),
    ]
}

/// Generate complete content type analysis
///
/// Counts movies and TV shows and writes the distribution table, the
/// dominant-format insight, and summary statistics to content-type.txt.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the analysis file should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(ContentTypeError)` - If file operations failed
pub fn generate_content_type_analysis(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    if titles.is_empty() {
        return Ok(());
    }

    let counts = count_by_content_type(titles);
    let total_titles = titles.len();

    let entries: Vec<CountEntry> = counts
        .iter()
        .map(|(label, count)| CountEntry::new(label.clone(), *count, total_titles))
        .collect();
    let type_table = format_count_table(&entries, Some("Movies vs TV Shows"));

    // The format with the larger share leads the insight line
    let (dominant, dominant_count) = counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .cloned()
        .unwrap_or_default();

    let insights = format!(
        "Format Insights\n{}\nDominant format: {} ({} titles, {:.2}% of catalog)",
        "=".repeat(15),
        dominant,
        dominant_count,
        (dominant_count as f64 / total_titles as f64) * 100.0
    );

    let summary = format!(
        "Summary\n{}\nTotal titles: {}",
        "=".repeat(7),
        total_titles
    );

    let output_file = output_dir.join("content-type.txt");
    let output = format!(
        "Content Type Analysis\n{}\n\n{}\n\n{}\n\n{}",
        "=".repeat(21),
        type_table,
        insights,
        summary
    );

    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the content type distribution chart
///
/// Draws the Movie vs TV Show counts as a vertical bar chart and saves it
/// as content_type_counts.png.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully generated
/// * `Err(ContentTypeError)` - If plot generation failed
pub fn generate_content_type_plots(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    if titles.is_empty() {
        return Ok(());
    }

    let counts = count_by_content_type(titles);

    create_category_count_plot(
        &counts,
        "Distribution of Movies vs TV Shows",
        "Count",
        &output_dir.join("content_type_counts.png"),
    )?;

    Ok(())
}
