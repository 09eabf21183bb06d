//! Dataset location resolution.
//!
//! The two input tables can live wherever the user likes; resolution order:
//!
//! 1. An explicit path (CLI flag or environment variable).
//! 2. `./data/<file>` relative to the working directory, matching the layout
//!    the datasets ship in.
//! 3. The platform data directory (`~/.local/share/cans/<file>` on Linux,
//!    `~/Library/Application Support/cans/<file>` on macOS, `%APPDATA%\cans\`
//!    on Windows).
//!
//! An explicit path is passed through untouched even if the file does not
//! exist, so the loader can report the missing file itself.

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Default file name of the songs table.
pub const SONGS_FILE: &str = "spotify_songs.csv";
/// Default file name of the headphones table.
pub const HEADPHONES_FILE: &str = "headphones.csv";

/// Resolve the songs table path.
pub fn songs_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_data_file(explicit, SONGS_FILE)
}

/// Resolve the headphones table path.
pub fn headphones_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_data_file(explicit, HEADPHONES_FILE)
}

/// Resolution routine shared by both tables.
///
/// # Errors
///
/// Fails only when no explicit path was given and `file_name` exists in none
/// of the searched locations; the error lists everything that was tried.
pub fn resolve_data_file(explicit: Option<PathBuf>, file_name: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let mut tried = Vec::new();

    let local = PathBuf::from("data").join(file_name);
    if local.is_file() {
        return Ok(local);
    }
    tried.push(local);

    if let Some(data_dir) = dirs::data_dir() {
        let installed = data_dir.join("cans").join(file_name);
        if installed.is_file() {
            return Ok(installed);
        }
        tried.push(installed);
    }

    let tried: Vec<String> = tried.iter().map(|p| p.display().to_string()).collect();
    bail!(
        "could not find {file_name}; tried {}. Pass an explicit path or set the matching environment variable.",
        tried.join(", ")
    )
}
