//! Static viewer recommendations
//!
//! Authored narrative notes distilled from the analysis; not derived from
//! computation.

use std::fs;
use std::io;
use std::path::Path;

const RECOMMENDATIONS: &str = "\
Recommendations for Viewers
===========================

- Explore Dramas, International Movies, and Comedies for diverse content.
- Most content was released between 2017 and 2021, a good window for
  modern storytelling.
- For regional content:
  - USA, UK, and Canada for mainstream English shows
  - India for Bollywood or local shows
  - France, Japan, and South Korea for global hits
";

/// Writes the authored viewer recommendations to recommendations.txt
///
/// # Arguments
/// * `output_dir` - Directory where the recommendations file should be saved
pub fn generate_recommendations(output_dir: &Path) -> io::Result<()> {
    fs::write(output_dir.join("recommendations.txt"), RECOMMENDATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_recommendations() {
        let temp_dir = std::env::temp_dir().join("recommendations_test");
        fs::create_dir_all(&temp_dir).unwrap();

        generate_recommendations(&temp_dir).unwrap();

        let written = fs::read_to_string(temp_dir.join("recommendations.txt")).unwrap();
        assert!(written.contains("Recommendations for Viewers"));
        assert!(written.contains("Dramas"));

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
