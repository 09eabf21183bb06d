//! Song entity and the genre enumeration.
//!
//! A [`Song`] is an immutable value record built once by the loader from one
//! row of the songs table. It carries Spotify-style audio features alongside
//! basic metadata. Songs are never mutated after construction and are only
//! consumed by the recommendation engine and the CLI listing commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse musical category assigned to a song.
///
/// The known set is closed: the engine's rule table enumerates every
/// (genre, use case) combination explicitly, so adding a variant here
/// requires extending the table as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum Genre {
    Pop,
    Rock,
    #[value(name = "edm")]
    Edm,
    Rap,
    Latin,
}

impl Genre {
    /// All known genres, in canonical display order.
    pub const ALL: [Genre; 5] = [
        Genre::Pop,
        Genre::Rock,
        Genre::Edm,
        Genre::Rap,
        Genre::Latin,
    ];
}

impl FromStr for Genre {
    type Err = UnknownLabel;

    /// Case-insensitive: the source dataset uses lowercase labels ("pop"),
    /// the UI capitalized ones ("Pop").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pop" => Ok(Genre::Pop),
            "rock" => Ok(Genre::Rock),
            "edm" => Ok(Genre::Edm),
            "rap" => Ok(Genre::Rap),
            "latin" => Ok(Genre::Latin),
            _ => Err(UnknownLabel::new("genre", s)),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::Edm => "EDM",
            Genre::Rap => "Rap",
            Genre::Latin => "Latin",
        };
        write!(f, "{label}")
    }
}

/// Error for a string that is not a member of a closed enumeration.
///
/// Carries the enumeration name and the offending label so loader warnings
/// can say exactly what was wrong with a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    pub field: &'static str,
    pub label: String,
}

impl UnknownLabel {
    pub(crate) fn new(field: &'static str, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
        }
    }
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} label: {:?}", self.field, self.label)
    }
}

impl std::error::Error for UnknownLabel {}

/// One song with its metadata and audio features.
///
/// Field names follow the crate's data model; serde renames map them onto
/// the column names of the songs table (`track_id`, `track_name`, ...).
/// Columns not listed here are tolerated and ignored by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique, non-empty identifier. Validated by the loader.
    #[serde(rename = "track_id")]
    pub id: String,
    #[serde(rename = "track_name")]
    pub title: String,
    #[serde(rename = "track_artist")]
    pub artist: String,
    /// Popularity on Spotify's 0-100 scale.
    #[serde(rename = "track_popularity")]
    pub popularity: u8,
    #[serde(rename = "playlist_genre", with = "crate::loader::label")]
    pub genre: Genre,
    #[serde(rename = "playlist_subgenre")]
    pub subgenre: String,
    /// 0.0-1.0
    pub danceability: f64,
    /// 0.0-1.0
    pub energy: f64,
    /// 0.0-1.0
    pub valence: f64,
    /// Beats per minute, positive.
    pub tempo: f64,
    /// 0.0-1.0
    pub acousticness: f64,
    /// Decibels, typically negative.
    pub loudness: f64,
}

impl Song {
    /// Row-level invariants the table schema cannot express.
    /// The loader skips (with a warning) any row that violates one.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("empty track_id".to_string());
        }
        if self.popularity > 100 {
            return Err(format!("popularity {} out of 0-100", self.popularity));
        }
        if self.tempo <= 0.0 {
            return Err(format!("non-positive tempo {}", self.tempo));
        }
        Ok(())
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.artist, self.genre)
    }
}
