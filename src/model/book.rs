use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

/// A single catalog entry. Immutable once the dataset is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Author id, resolved through [`crate::model::Dataset::author_name`].
    pub author: String,
    /// Cover image URI.
    pub image: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_published")]
    pub published: NaiveDate,
    #[serde(default)]
    pub genres: BTreeSet<String>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }
}

/// Parse a publication date given either as an RFC 3339 timestamp
/// (`2021-06-01T00:00:00.000Z`) or as a plain `YYYY-MM-DD` date.
pub fn parse_published(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid published date: {}", raw))
}

fn deserialize_published<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published(&raw).map_err(serde::de::Error::custom)
}
