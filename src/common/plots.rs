//! Plotting infrastructure for trend and frequency charts
//!
//! This module provides functionality to create line and bar charts using the
//! [`plotters`] crate. Charts are saved as PNG files with fixed 1200x800 resolution.

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates a line chart of a per-year series and saves it as a PNG file
///
/// The function takes (release year, value) pairs and draws a line through
/// them with a circular marker at each data point. The Y-axis starts at zero
/// so per-year counts and means are comparable across charts.
///
/// # Arguments
/// * `data` - Vector of (year, value) tuples in ascending year order
/// * `title` - Chart title displayed at the top of the plot
/// * `y_label` - Label for the Y-axis
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * X-axis: release years, plain integer labels
/// * Y-axis: zero-based, linear scaling
/// * Line style: line chart with per-point circular markers
/// * Font rendering: uses the bitmap backend's default fonts (works in headless environments)
pub fn create_year_trend_plot(
    data: &[(i32, f64)],
    title: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    // Validate input data
    if data.is_empty() {
        return Err(PlotError::InvalidData("Data cannot be empty".to_string()));
    }

    // Create the drawing area (1200x800 PNG)
    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Calculate axis ranges
    let x_min = data.iter().map(|(year, _)| *year).min().unwrap_or(0);
    let mut x_max = data.iter().map(|(year, _)| *year).max().unwrap_or(0);
    let y_max = data
        .iter()
        .map(|(_, value)| *value)
        .fold(f64::NEG_INFINITY, f64::max);

    // Fix edge case: a single year still needs a non-degenerate range
    if x_min >= x_max {
        x_max = x_min + 1;
    }

    // Leave 10% headroom above the highest value
    let y_max = if y_max <= 0.0 { 1.0 } else { y_max * 1.1 };

    // Build the chart context with proper label areas
    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Configure mesh with axis labels and plain year formatting
    chart_context
        .configure_mesh()
        .x_desc("Release Year")
        .x_label_style(("sans-serif", 35))
        .y_desc(y_label)
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|year| year.to_string())
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Draw the trend line and a marker on each data point
    chart_context
        .draw_series(LineSeries::new(data.iter().cloned(), &BLUE))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(
            data.iter()
                .map(|(year, value)| Circle::new((*year, *value), 3, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates a horizontal bar chart of top-K frequency counts
///
/// Entries are drawn most frequent at the top, with the entry labels on the
/// Y-axis and the occurrence counts on the X-axis. Intended for top-K tables
/// produced by [`crate::common::tally::top_k`].
///
/// # Arguments
/// * `entries` - (label, count) pairs, most frequent first
/// * `title` - Chart title displayed at the top of the plot
/// * `x_label` - Label for the X-axis
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn create_top_counts_plot(
    entries: &[(String, usize)],
    title: &str,
    x_label: &str,
    output_path: &Path,
) -> Result<()> {
    // Validate input data
    if entries.is_empty() {
        return Err(PlotError::InvalidData(
            "Entries cannot be empty".to_string(),
        ));
    }

    let entry_count = entries.len() as i32;
    let max_count = entries
        .iter()
        .map(|(_, count)| *count as u32)
        .max()
        .unwrap_or(1)
        .max(1);

    // Leave 10% headroom to the right of the longest bar
    let x_max = max_count + (max_count / 10).max(1);

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Wide Y-label area so full names fit next to their bars
    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(320)
        .build_cartesian_2d(0u32..x_max, (0..entry_count).into_segmented())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Segment i holds entry (entry_count - 1 - i) so the top entry draws topmost
    chart_context
        .configure_mesh()
        .x_desc(x_label)
        .x_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 20))
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => entries
                .get((entry_count - 1 - index) as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(entries.iter().enumerate().map(|(index, (_, count))| {
            let segment = entry_count - 1 - index as i32;
            Rectangle::new(
                [
                    (0, SegmentValue::Exact(segment)),
                    (*count as u32, SegmentValue::Exact(segment + 1)),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates a vertical bar chart of per-category counts
///
/// Used for small categorical distributions such as the Movie vs TV Show
/// split, with category labels on the X-axis and counts on the Y-axis.
///
/// # Arguments
/// * `entries` - (label, count) pairs in display order
/// * `title` - Chart title displayed at the top of the plot
/// * `y_label` - Label for the Y-axis
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn create_category_count_plot(
    entries: &[(String, usize)],
    title: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    // Validate input data
    if entries.is_empty() {
        return Err(PlotError::InvalidData(
            "Entries cannot be empty".to_string(),
        ));
    }

    let entry_count = entries.len() as i32;
    let max_count = entries
        .iter()
        .map(|(_, count)| *count as u32)
        .max()
        .unwrap_or(1)
        .max(1);
    let y_max = max_count + (max_count / 10).max(1);

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((0..entry_count).into_segmented(), 0u32..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .y_desc(y_label)
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => entries
                .get(*index as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(entries.iter().enumerate().map(|(index, (_, count))| {
            let segment = index as i32;
            Rectangle::new(
                [
                    (SegmentValue::Exact(segment), 0),
                    (SegmentValue::Exact(segment + 1), *count as u32),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_create_year_trend_plot_validation() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("test_trend_plot.png");

        // Test empty data
        let result = create_year_trend_plot(&[], "Test", "Y-axis", &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_create_bar_plot_validation() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("test_bar_plot.png");

        let result = create_top_counts_plot(&[], "Test", "X-axis", &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        let result = create_category_count_plot(&[], "Test", "Y-axis", &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_year_trend_plot_success() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("test_year_trend_plot.png");

        // Clean up any existing test file
        let _ = fs::remove_file(&output_path);

        let data = vec![
            (2017, 10.0),
            (2018, 25.0),
            (2019, 50.0),
            (2020, 40.0),
            (2021, 30.0),
        ];
        let result =
            create_year_trend_plot(&data, "Test Year Trend", "Number of Titles", &output_path);

        assert!(result.is_ok());
        assert!(output_path.exists());

        // Clean up test file
        let _ = fs::remove_file(&output_path);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_bar_plots_success() {
        let temp_dir = std::env::temp_dir().join("bar_plot_tests");
        fs::create_dir_all(&temp_dir).unwrap();

        let entries = vec![
            ("United States".to_string(), 300),
            ("India".to_string(), 120),
            ("United Kingdom".to_string(), 80),
        ];

        let horizontal = temp_dir.join("top_counts.png");
        let result = create_top_counts_plot(&entries, "Top Countries", "Titles", &horizontal);
        assert!(result.is_ok());
        assert!(horizontal.exists());

        let vertical = temp_dir.join("category_counts.png");
        let categories = vec![("Movie".to_string(), 600), ("TV Show".to_string(), 250)];
        let result =
            create_category_count_plot(&categories, "Movies vs TV Shows", "Count", &vertical);
        assert!(result.is_ok());
        assert!(vertical.exists());

        // Clean up test directory
        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_single_year_range_is_non_degenerate() {
        // A single data point must not produce an empty axis range
        let data = vec![(2020, 5.0)];
        let x_min = data.iter().map(|(year, _)| *year).min().unwrap();
        let mut x_max = data.iter().map(|(year, _)| *year).max().unwrap();
        if x_min >= x_max {
            x_max = x_min + 1;
        }
        assert!(x_max > x_min);
    }
}
