//! Duration trend analysis functionality
//!
//! This module provides functions for analyzing how title length develops
//! over release years: average movie runtime in minutes and average TV show
//! length in seasons. The unit lives in free text ("90 min", "2 Seasons"),
//! so only the leading number is extracted.

use crate::common::plots::create_year_trend_plot;
use crate::common::{ContentType, PlotError, TitleRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Errors that can occur during duration analysis
#[derive(Debug)]
pub enum DurationError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for DurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            DurationError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for DurationError {}

impl From<std::io::Error> for DurationError {
    fn from(err: std::io::Error) -> Self {
        DurationError::FileWrite(err)
    }
}

impl From<PlotError> for DurationError {
    fn from(err: PlotError) -> Self {
        DurationError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, DurationError>;

/// Extracts the leading run of decimal digits from a duration text
///
/// "90 min" yields 90.0 and "3 Seasons" yields 3.0. Text without leading
/// digits has no extractable duration and yields `None`; such records are
/// excluded from the means.
pub fn extract_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Computes the mean extracted duration per release year for one content type
///
/// Records of other content types and records whose duration text has no
/// leading number are dropped before averaging. Results are in ascending
/// year order.
pub fn mean_duration_by_year(
    titles: &[TitleRecord],
    content_type: ContentType,
) -> Vec<(i32, f64)> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();

    for title in titles {
        if title.content_type != content_type {
            continue;
        }
        if let Some(value) = extract_leading_number(&title.duration) {
            let entry = sums.entry(title.release_year).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(year, (sum, count))| (year, sum / count as f64))
        .collect()
}

/// Formats a per-year mean series as an aligned text table
fn format_mean_table(series: &[(i32, f64)], title: &str, unit: &str) -> String {
    let mut output = format!("{}\n{}\n", title, "=".repeat(title.len()));
    output.push_str(&format!("{:<6} {}\n", "Year", unit));
    for (year, mean) in series {
        output.push_str(&format!("{:<6} {:.1}\n", year, mean));
    }
    output
}

/// Generate complete duration trend analysis
///
/// Extracts numeric durations, averages them per release year for movies
/// (minutes) and TV shows (seasons), and writes both trend tables with
/// summary statistics to duration-trends.txt.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the analysis file should be saved
///
/// # Returns
/// * `Ok(())` - If analysis generation was successful
/// * `Err(DurationError)` - If file operations failed
pub fn generate_duration_analysis(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let movie_means = mean_duration_by_year(titles, ContentType::Movie);
    let show_means = mean_duration_by_year(titles, ContentType::TvShow);

    if movie_means.is_empty() && show_means.is_empty() {
        return Ok(());
    }

    let movie_table = format_mean_table(
        &movie_means,
        "Average Movie Duration by Release Year",
        "Minutes",
    );
    let show_table = format_mean_table(
        &show_means,
        "Average TV Show Length by Release Year",
        "Seasons",
    );

    // Records without an extractable duration are excluded from the means
    let usable = titles
        .iter()
        .filter(|title| extract_leading_number(&title.duration).is_some())
        .count();

    let summary = format!(
        "Summary\n{}\nTotal titles: {}\nTitles with extractable duration: {}\nMovie years covered: {}\nTV show years covered: {}",
        "=".repeat(7),
        titles.len(),
        usable,
        movie_means.len(),
        show_means.len()
    );

    let output_file = output_dir.join("duration-trends.txt");
    let output = format!(
        "Duration Trend Analysis\n{}\n\nMOVIES\n{}\n\nTV SHOWS\n{}\n\n{}",
        "=".repeat(23),
        movie_table,
        show_table,
        summary
    );

    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the duration trend charts
///
/// Draws the average movie runtime per year and the average TV show seasons
/// per year as separate line charts, saved as movie_duration_trend.png and
/// tv_season_trend.png.
///
/// # Arguments
/// * `titles` - The loaded catalog records
/// * `output_dir` - Directory where the PNG files should be saved
///
/// # Returns
/// * `Ok(())` - If the plots were successfully generated
/// * `Err(DurationError)` - If plot generation failed
pub fn generate_duration_plots(titles: &[TitleRecord], output_dir: &Path) -> Result<()> {
    let movie_means = mean_duration_by_year(titles, ContentType::Movie);
    if !movie_means.is_empty() {
        create_year_trend_plot(
            &movie_means,
            "Average Movie Duration by Release Year",
            "Duration (minutes)",
            &output_dir.join("movie_duration_trend.png"),
        )?;
    }

    let show_means = mean_duration_by_year(titles, ContentType::TvShow);
    if !show_means.is_empty() {
        create_year_trend_plot(
            &show_means,
            "Average Number of Seasons in TV Shows by Release Year",
            "Number of Seasons",
            &output_dir.join("tv_season_trend.png"),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_extract_leading_number() {
        assert_eq!(extract_leading_number("90 min"), Some(90.0));
        assert_eq!(extract_leading_number("3 Seasons"), Some(3.0));
        assert_eq!(extract_leading_number("1 Season"), Some(1.0));
        assert_eq!(extract_leading_number("  120 min"), Some(120.0));
    }

    #[test]
    fn test_extract_leading_number_malformed() {
        assert_eq!(extract_leading_number(""), None);
        assert_eq!(extract_leading_number("Unrated"), None);
        assert_eq!(extract_leading_number("min 90"), None);
    }

    #[test]
    fn test_mean_duration_by_year() {
        // 3 movies ("90 min"/2020, "120 min"/2020, "100 min"/2021) and
        // 2 shows ("1 Season"/2021, "2 Seasons"/2021)
        let titles = vec![
            title(ContentType::Movie, 2020, "90 min"),
            title(ContentType::Movie, 2020, "120 min"),
            title(ContentType::Movie, 2021, "100 min"),
            title(ContentType::TvShow, 2021, "1 Season"),
            title(ContentType::TvShow, 2021, "2 Seasons"),
        ];

        let movie_means = mean_duration_by_year(&titles, ContentType::Movie);
        assert_eq!(movie_means, vec![(2020, 105.0), (2021, 100.0)]);

        let show_means = mean_duration_by_year(&titles, ContentType::TvShow);
        assert_eq!(show_means, vec![(2021, 1.5)]);
    }

    #[test]
    fn test_mean_excludes_unextractable_durations() {
        let titles = vec![
            title(ContentType::Movie, 2020, "90 min"),
            title(ContentType::Movie, 2020, "Unrated"),
            title(ContentType::Movie, 2020, ""),
        ];

        // The malformed records must not drag the mean towards zero
        let movie_means = mean_duration_by_year(&titles, ContentType::Movie);
        assert_eq!(movie_means, vec![(2020, 90.0)]);
    }

    #[test]
    fn test_format_mean_table() {
        let series = vec![(2020, 105.0), (2021, 100.0)];
        let table = format_mean_table(&series, "Average Movie Duration", "Minutes");

        assert!(table.contains("Average Movie Duration"));
        assert!(table.contains("2020"));
        assert!(table.contains("105.0"));
        assert!(table.contains("Minutes"));
    }
}
