//! Console overview of the loaded dataset
//!
//! Prints the schema with per-column non-null counts and a preview of the
//! first rows before the analysis steps run.

use crate::common::TitleRecord;
use tabled::{Table, Tabled};

/// Number of records shown in the preview table
const PREVIEW_ROWS: usize = 5;

/// Preview cells are clipped so multi-valued fields stay on one line
const PREVIEW_CELL_WIDTH: usize = 40;

#[derive(Tabled)]
struct ColumnInfo {
    #[tabled(rename = "Column")]
    column: &'static str,
    #[tabled(rename = "Type")]
    dtype: &'static str,
    #[tabled(rename = "Non-Null")]
    non_null: usize,
}

#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "Type")]
    content_type: String,
    #[tabled(rename = "Year")]
    release_year: i32,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Listed In")]
    listed_in: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Cast")]
    cast: String,
    #[tabled(rename = "Director")]
    director: String,
}

fn clip(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CELL_WIDTH {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(PREVIEW_CELL_WIDTH - 3).collect();
        format!("{}...", clipped)
    }
}

fn clip_optional(text: Option<&str>) -> String {
    clip(text.unwrap_or(""))
}

/// Prints record count, schema information, and the first rows of the table
pub fn print_dataset_overview(titles: &[TitleRecord]) {
    let total = titles.len();
    println!("Loaded {} title records", total);

    let schema = vec![
        ColumnInfo {
            column: "type",
            dtype: "ContentType",
            non_null: total,
        },
        ColumnInfo {
            column: "release_year",
            dtype: "i32",
            non_null: total,
        },
        ColumnInfo {
            column: "country",
            dtype: "Option<String>",
            non_null: titles.iter().filter(|t| t.country.is_some()).count(),
        },
        ColumnInfo {
            column: "listed_in",
            dtype: "String",
            non_null: total,
        },
        ColumnInfo {
            column: "duration",
            dtype: "String",
            non_null: total,
        },
        ColumnInfo {
            column: "cast",
            dtype: "Option<String>",
            non_null: titles.iter().filter(|t| t.cast.is_some()).count(),
        },
        ColumnInfo {
            column: "director",
            dtype: "Option<String>",
            non_null: titles.iter().filter(|t| t.director.is_some()).count(),
        },
    ];

    println!("\nSchema:");
    println!("{}", Table::new(schema));

    let preview: Vec<PreviewRow> = titles
        .iter()
        .take(PREVIEW_ROWS)
        .map(|title| PreviewRow {
            content_type: title.content_type.to_string(),
            release_year: title.release_year,
            country: clip_optional(title.country.as_deref()),
            listed_in: clip(&title.listed_in),
            duration: title.duration.clone(),
            cast: clip_optional(title.cast.as_deref()),
            director: clip_optional(title.director.as_deref()),
        })
        .collect();

    if !preview.is_empty() {
        println!("\nFirst {} records:", preview.len());
        println!("{}", Table::new(preview));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_text_is_unchanged() {
        assert_eq!(clip("Dramas"), "Dramas");
    }

    #[test]
    fn test_clip_long_text_is_shortened() {
        let long = "a".repeat(100);
        let clipped = clip(&long);

        assert_eq!(clipped.chars().count(), PREVIEW_CELL_WIDTH);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn test_clip_optional_none_is_empty() {
        assert_eq!(clip_optional(None), "");
    }
}
