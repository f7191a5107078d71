//! Domain-specific analysis modules
//!
//! This module contains one analysis module per catalog dimension:
//! - Release year distribution
//! - Movie vs TV Show split
//! - Producing countries
//! - Genres
//! - Duration trends
//! - Frequent actors and directors
//! - Static viewer recommendations

pub mod constants;
pub mod content_type;
pub mod countries;
pub mod duration;
pub mod genres;
pub mod overview;
pub mod people;
pub mod recommendations;
pub mod release_year;

// Re-export analysis functions for convenience
pub use content_type::{generate_content_type_analysis, generate_content_type_plots};
pub use countries::{generate_country_analysis, generate_country_plots};
pub use duration::{generate_duration_analysis, generate_duration_plots};
pub use genres::{generate_genre_analysis, generate_genre_plots};
pub use overview::print_dataset_overview;
pub use people::{generate_people_analysis, generate_people_plots};
pub use recommendations::generate_recommendations;
pub use release_year::{generate_release_year_analysis, generate_release_year_plots};
