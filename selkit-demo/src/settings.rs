//! Form settings, optionally loaded from a JSON file.
//!
//! The file mirrors the vocabulary endpoint of a prediction service: the
//! allowed content ratings and the genre vocabulary, plus widget settings.
//!
//! ```json
//! {
//!   "allowed_content_ratings": ["G", "PG", "PG-13", "R"],
//!   "genres_vocab": ["Action", "Drama"],
//!   "rating": { "placeholder": "Content rating", "prefer_up": true },
//!   "genres": { "max": 3 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use selkit::config::validate_options;
use selkit::{SelectConfig, TagInputConfig};

use crate::error::DemoError;

const CONTENT_RATINGS: &[&str] = &["G", "PG", "PG-13", "R", "NC-17", "Not Rated"];

const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Sport",
    "Thriller",
    "War",
    "Western",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub allowed_content_ratings: Vec<String>,
    pub genres_vocab: Vec<String>,
    pub rating: SelectConfig,
    pub genres: TagInputConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_content_ratings: CONTENT_RATINGS.iter().map(|s| s.to_string()).collect(),
            genres_vocab: GENRES.iter().map(|s| s.to_string()).collect(),
            rating: SelectConfig::new().placeholder("Content rating"),
            genres: TagInputConfig::new().placeholder("Add genres..."),
        }
    }
}

impl Settings {
    /// Read settings from `path`; fields missing from the file keep defaults.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        log::info!(
            "Loaded settings from {}: {} ratings, {} genres",
            path.display(),
            settings.allowed_content_ratings.len(),
            settings.genres_vocab.len()
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        validate_options(&self.allowed_content_ratings)?;
        validate_options(&self.genres_vocab)?;
        self.rating.validate()?;
        self.genres.validate()?;
        Ok(())
    }
}
