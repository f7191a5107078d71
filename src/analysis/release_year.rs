//! Release year analysis functionality
//!
//! This module provides functions for analyzing how titles are distributed
//! across release years.

use crate::common::plots::create_year_trend_plot;
use crate::common::tally::{format_count_table, CountEntry};
use crate::common::{PlotError, TitleRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Errors that can occur during release year analysis
#[derive(Debug)]
pub enum ReleaseYearError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for ReleaseYearError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseYearError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            ReleaseYearError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for ReleaseYearError {}

impl From<std::io::Error> for ReleaseYearError {
    fn from(err: std::io::Error) -> Self {
        ReleaseYearError::FileWrite(err)
    }
}

impl From<PlotError> for ReleaseYearError {
    fn from(err: PlotError) -> Self {
        ReleaseYearError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, ReleaseYearError>;

/// Counts titles per release year, in ascending year order
pub fn count_by_release_year(titles: &[TitleRecord]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for title in titles {
        *counts.entry(title.release_year).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Finds the consecutive five-year window holding the most titles
///
/// Returns (first year of the window, number of titles in it). Windows are
/// slid over the full year span of the data, so sparse years count as zero.
fn busiest_five_year_window(counts: &[(i32, usize)]) -> Option<(i32, usize)> {
    let first_year = counts.first()?.0;
    let last_year = counts.last()?.0;

    let mut best: Option<(i32, usize)> = None;
    for window_start in first_year..=(last_year - 4).max(first_year) {
        let window_total: usize = counts
            .iter()
            .filter(|(year, _)| (window_start..window_start + 5).contains(year))
            .map(|(_, count)| *count)
            .sum();

        match best {
            Some((_, best_total)) if window_total <= best_total => {}
            _ => best = Some((window_start, window_total)),
        }
    }

    best
}

/// Generate complete release year analysis
///
/// Counts titles per release year and writes the per-year frequency table,
/// release window insights, and summary statistics to release-year.txt.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the analysis file should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(ReleaseYearError)` - If file operations failed
pub fn generate_release_year_analysis(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let counts = count_by_release_year(titles);

    if counts.is_empty() {
        return Ok(());
    }

    let total_titles = titles.len();

    // Per-year frequency table
    let entries: Vec<CountEntry> = counts
        .iter()
        .map(|(year, count)| CountEntry::new(year.to_string(), *count, total_titles))
        .collect();
    let year_table = format_count_table(&entries, Some("Titles per Release Year"));

    // Release window insights
    let (peak_year, peak_count) = counts
        .iter()
        .copied()
        .max_by_key(|(_, count)| *count)
        .unwrap_or((0, 0));

    let mut insights = format!(
        "Release Window Insights\n{}\nPeak release year: {} ({} titles, {:.2}% of catalog)",
        "=".repeat(23),
        peak_year,
        peak_count,
        (peak_count as f64 / total_titles as f64) * 100.0
    );

    if let Some((window_start, window_total)) = busiest_five_year_window(&counts) {
        insights.push_str(&format!(
            "\nBusiest five-year window: {}-{} ({} titles, {:.2}% of catalog)",
            window_start,
            window_start + 4,
            window_total,
            (window_total as f64 / total_titles as f64) * 100.0
        ));
    }

    // Build summary section
    let first_year = counts.first().map(|(year, _)| *year).unwrap_or(0);
    let last_year = counts.last().map(|(year, _)| *year).unwrap_or(0);
    let summary = format!(
        "Summary\n{}\nTotal titles: {}\nYear span: {}-{}",
        "=".repeat(7),
        total_titles,
        first_year,
        last_year
    );

    // Write complete output to file
    let output_file = output_dir.join("release-year.txt");
    let output = format!(
        "Release Year Analysis\n{}\n\n{}\n\n{}\n\n{}",
        "=".repeat(21),
        year_table,
        insights,
        summary
    );

    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the release year trend chart
///
/// Draws the per-year title counts as a line chart with point markers and
/// saves it as release_year_trend.png.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully generated
/// * `Err(ReleaseYearError)` - If plot generation failed
pub fn generate_release_year_plots(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let counts = count_by_release_year(titles);

    if counts.is_empty() {
        return Ok(());
    }

    let series: Vec<(i32, f64)> = counts
        .iter()
        .map(|(year, count)| (*year, *count as f64))
        .collect();

    create_year_trend_plot(
        &series,
        "Distribution of Titles by Release Year",
        "Number of Titles",
        &output_dir.join("release_year_trend.png"),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ContentType;

    fn title(content_type: ContentType, release_year: i32, duration: &str) -> TitleRecord {
        TitleRecord {
            content_type,
            release_year,
            country: None,
            listed_in: "Dramas".to_string(),
            duration: duration.to_string(),
            cast: None,
            director: None,
        }
    }

    #[test]
    fn test_count_by_release_year() {
        let titles = vec![
            title(ContentType::Movie, 2020, "90 min"),
            title(ContentType::Movie, 2020, "120 min"),
            title(ContentType::Movie, 2021, "100 min"),
            title(ContentType::TvShow, 2019, "1 Season"),
        ];

        let counts = count_by_release_year(&titles);
        assert_eq!(counts, vec![(2019, 1), (2020, 2), (2021, 1)]);
    }

    #[test]
    fn test_movie_counts_by_year() {
        // 3 movies in 2020/2020/2021 plus 2 shows in 2021; counting only the
        // movies must yield {2020: 2, 2021: 1}
        let titles = vec![
            title(ContentType::Movie, 2020, "90 min"),
            title(ContentType::Movie, 2020, "120 min"),
            title(ContentType::Movie, 2021, "100 min"),
            title(ContentType::TvShow, 2021, "1 Season"),
            title(ContentType::TvShow, 2021, "2 Seasons"),
        ];

        let movies: Vec<TitleRecord> = titles
            .iter()
            .filter(|t| t.content_type == ContentType::Movie)
            .cloned()
            .collect();

        let counts = count_by_release_year(&movies);
        assert_eq!(counts, vec![(2020, 2), (2021, 1)]);
    }

    #[test]
    fn test_busiest_five_year_window() {
        let counts = vec![(2000, 1), (2017, 10), (2018, 12), (2020, 8), (2021, 5)];
        let window = busiest_five_year_window(&counts);

        assert_eq!(window, Some((2017, 35)));
    }

    #[test]
    fn test_busiest_window_with_short_span() {
        let counts = vec![(2020, 3), (2021, 4)];
        let window = busiest_five_year_window(&counts);

        assert_eq!(window, Some((2020, 7)));
    }
}
