use serde::Deserialize;
use std::fmt;

/// Whether a title is a film or an episodic series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ContentType {
    /// Standalone film, duration given in minutes
    Movie,
    /// Episodic series, duration given in seasons
    #[serde(rename = "TV Show")]
    TvShow,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movie => write!(f, "Movie"),
            ContentType::TvShow => write!(f, "TV Show"),
        }
    }
}

/// One row of the catalog dataset
///
/// Columns not listed here (title, date added, rating, ...) are present in
/// the source file but ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRecord {
    /// Movie or TV Show
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Year the title was released
    pub release_year: i32,
    /// Comma-separated list of producing countries, if known
    pub country: Option<String>,
    /// Comma-separated list of genres the title is listed under
    pub listed_in: String,
    /// Free-text duration ("90 min" for movies, "2 Seasons" for shows)
    pub duration: String,
    /// Comma-separated list of credited actors, if known
    pub cast: Option<String>,
    /// Comma-separated list of directors, if known
    pub director: Option<String>,
}
