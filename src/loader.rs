//! Record loader for the two tabular datasets.
//!
//! Parses the songs and headphones CSV tables into in-memory entity vectors,
//! preserving source row order. Failure policy:
//!
//! - Missing file, unreadable file, or a header lacking a required column is
//!   fatal and surfaces as a [`DataLoadError`].
//! - An individual malformed row (wrong field count, non-numeric value in a
//!   numeric column, unknown enum label, violated row invariant) is skipped
//!   with a `log::warn!` and recorded in the returned [`TableLoad`], so the
//!   caller can report it. Loading continues with the surrounding rows.
//! - A table whose rows are *all* malformed is fatal: an accidentally empty
//!   catalog would make every recommendation silently empty.
//!
//! Input files are only ever read, never written.

use crate::headphone::Headphone;
use crate::song::Song;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns the songs table must carry. Extra columns are tolerated.
pub const SONG_COLUMNS: [&str; 12] = [
    "track_id",
    "track_name",
    "track_artist",
    "track_popularity",
    "playlist_genre",
    "playlist_subgenre",
    "danceability",
    "energy",
    "valence",
    "tempo",
    "acousticness",
    "loudness",
];

/// Columns the headphones table must carry.
pub const HEADPHONE_COLUMNS: [&str; 9] = [
    "headphone_id",
    "brand",
    "model",
    "price",
    "type",
    "use_case",
    "bass_level",
    "sound_profile",
    "noise_cancellation",
];

/// Errors that abort loading a dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The dataset file does not exist. Fatal; never downgraded to a warning.
    #[error("dataset not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read header of {}: {source}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks required columns. A whole-table schema violation,
    /// not a row-level one, so skip-and-warn does not apply.
    #[error("{} is missing required column(s): {columns}", .path.display())]
    MissingColumns { path: PathBuf, columns: String },

    /// Rows were present but none survived parsing and validation.
    #[error("no valid rows in {} ({skipped} rows skipped)", .path.display())]
    NoValidRows { path: PathBuf, skipped: usize },
}

/// One skipped row: 1-based line number in the file plus the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    pub line: usize,
    pub reason: String,
}

/// Result of loading one table: the parsed records in source row order,
/// plus the recorded warnings for any skipped rows.
#[derive(Debug, Clone)]
pub struct TableLoad<T> {
    pub records: Vec<T>,
    pub skipped: Vec<RowSkip>,
}

impl<T> TableLoad<T> {
    /// True when every row of the source table parsed cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Load the songs table.
///
/// # Errors
///
/// See [`DataLoadError`]; individual malformed rows are skipped and recorded
/// rather than raised.
///
/// # Examples
///
/// ```no_run
/// use cans::loader::load_songs;
///
/// let load = load_songs("data/spotify_songs.csv".as_ref())?;
/// println!("{} songs, {} rows skipped", load.records.len(), load.skipped.len());
/// # Ok::<(), cans::loader::DataLoadError>(())
/// ```
pub fn load_songs(path: &Path) -> Result<TableLoad<Song>, DataLoadError> {
    load_table(path, &SONG_COLUMNS, "songs", |song: &Song| song.validate())
}

/// Load the headphones table. Same contract as [`load_songs`].
pub fn load_headphones(path: &Path) -> Result<TableLoad<Headphone>, DataLoadError> {
    load_table(path, &HEADPHONE_COLUMNS, "headphones", |hp: &Headphone| {
        hp.validate()
    })
}

/// Shared loading routine for both tables.
fn load_table<T, V>(
    path: &Path,
    required: &[&str],
    table: &str,
    validate: V,
) -> Result<TableLoad<T>, DataLoadError>
where
    T: DeserializeOwned,
    V: Fn(&T) -> Result<(), String>,
{
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound(path.to_path_buf()),
        _ => DataLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|err| DataLoadError::Header {
        path: path.to_path_buf(),
        source: err,
    })?;
    let header_names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|col| !header_names.iter().any(|h| h == col))
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing.join(", "),
        });
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut rows_seen = 0usize;
    for (index, row) in reader.deserialize::<T>().enumerate() {
        rows_seen += 1;
        // Header is line 1, so the first data row is line 2.
        let line = index + 2;
        match row {
            Ok(record) => match validate(&record) {
                Ok(()) => records.push(record),
                Err(reason) => {
                    warn!("{table} row at line {line} skipped: {reason}");
                    skipped.push(RowSkip { line, reason });
                }
            },
            Err(err) => {
                let reason = err.to_string();
                warn!("{table} row at line {line} skipped: {reason}");
                skipped.push(RowSkip { line, reason });
            }
        }
    }

    if records.is_empty() && rows_seen > 0 {
        return Err(DataLoadError::NoValidRows {
            path: path.to_path_buf(),
            skipped: skipped.len(),
        });
    }

    debug!(
        "loaded {} {table} records from {} ({} skipped)",
        records.len(),
        path.display(),
        skipped.len()
    );
    Ok(TableLoad { records, skipped })
}

/// Serde adaptor for enum fields stored as text labels.
///
/// Deserializes through `FromStr` (case-insensitive) and serializes through
/// `Display` (canonical label), so JSON output shows the same labels the
/// source tables use.
pub mod label {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        serializer.collect_str(value)
    }
}

/// Deserialize the "Yes"/"No" convention of the headphones table into a bool.
/// Also accepts "true"/"false" for hand-edited files.
pub(crate) fn de_yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected Yes/No, got {other:?}"
        ))),
    }
}
