mod analysis;
mod common;
mod parsing;

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

// Import analysis functions
use analysis::{
    generate_content_type_analysis, generate_content_type_plots, generate_country_analysis,
    generate_country_plots, generate_duration_analysis, generate_duration_plots,
    generate_genre_analysis, generate_genre_plots, generate_people_analysis,
    generate_people_plots, generate_recommendations, generate_release_year_analysis,
    generate_release_year_plots, print_dataset_overview,
};

// Import parsing functionality
use parsing::parse_title_records;

/// File name of the catalog dataset, resolved relative to the manifest directory
const INPUT_FILE_NAME: &str = "netflix_titles.csv";

/// Directory name for generated reports and charts
const OUTPUT_DIR_NAME: &str = "analysis-output";

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Release year analysis error: {0}")]
    ReleaseYear(#[from] analysis::release_year::ReleaseYearError),

    #[error("Content type analysis error: {0}")]
    ContentType(#[from] analysis::content_type::ContentTypeError),

    #[error("Country analysis error: {0}")]
    Country(#[from] analysis::countries::CountryError),

    #[error("Genre analysis error: {0}")]
    Genre(#[from] analysis::genres::GenreError),

    #[error("Duration analysis error: {0}")]
    Duration(#[from] analysis::duration::DurationError),

    #[error("Cast and director analysis error: {0}")]
    People(#[from] analysis::people::PeopleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    // Get the input file path relative to manifest directory
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let input_file = manifest_dir.join(INPUT_FILE_NAME);

    // Check if input file exists
    if !input_file.exists() {
        eprintln!("Error: Input file does not exist: {}", input_file.display());
        std::process::exit(1);
    }

    // Parse the catalog file
    let titles = parse_title_records(&input_file)?;

    // Print schema and first-rows preview
    print_dataset_overview(&titles);

    let output_dir = manifest_dir.join(OUTPUT_DIR_NAME);
    fs::create_dir_all(&output_dir)?;

    let progress = ProgressBar::new(7);
    progress.set_style(ProgressStyle::with_template("[{pos}/{len}] {msg}").unwrap());

    // Generate release year analysis and plot
    progress.set_message("release years");
    generate_release_year_analysis(&titles, &output_dir)?;
    generate_release_year_plots(&titles, &output_dir)?;
    progress.inc(1);

    // Generate content type analysis and plot
    progress.set_message("content types");
    generate_content_type_analysis(&titles, &output_dir)?;
    generate_content_type_plots(&titles, &output_dir)?;
    progress.inc(1);

    // Generate producing country analysis and plot
    progress.set_message("countries");
    generate_country_analysis(&titles, &output_dir)?;
    generate_country_plots(&titles, &output_dir)?;
    progress.inc(1);

    // Generate genre analysis and plot
    progress.set_message("genres");
    generate_genre_analysis(&titles, &output_dir)?;
    generate_genre_plots(&titles, &output_dir)?;
    progress.inc(1);

    // Generate duration trend analysis and plots
    progress.set_message("duration trends");
    generate_duration_analysis(&titles, &output_dir)?;
    generate_duration_plots(&titles, &output_dir)?;
    progress.inc(1);

    // Generate cast and director analysis and plots
    progress.set_message("actors and directors");
    generate_people_analysis(&titles, &output_dir)?;
    generate_people_plots(&titles, &output_dir)?;
    progress.inc(1);

    // Write the static viewer recommendations
    progress.set_message("recommendations");
    generate_recommendations(&output_dir)?;
    progress.inc(1);

    progress.finish_with_message("analysis complete");
    println!("Reports and charts written to {}", output_dir.display());

    Ok(())
}
