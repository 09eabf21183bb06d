//! Command-line interface definitions.
//!
//! Clap derive structures only; routing lives in `main.rs`. The genre and
//! use-case arguments reuse the entity enums directly, so clap validates the
//! selection against the fixed enumerations before the engine ever sees it.
//!
//! ## Examples
//!
//! ```bash
//! cans recommend rock workout
//! cans recommend edm studio --full --json
//! cans songs pop --limit 10
//! cans genres
//! cans check
//! ```

use crate::headphone::UseCase;
use crate::song::Genre;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main application arguments structure.
#[derive(Parser)]
#[command(name = "cans")]
#[command(about = "Cans: matching headphones to your music taste - offline, rule-based")]
#[command(version)]
pub struct Args {
    /// Path to the songs table (CSV)
    ///
    /// Defaults to ./data/spotify_songs.csv, falling back to the platform
    /// data directory.
    #[arg(long, global = true, env = "CANS_SONGS", value_name = "FILE")]
    pub songs_file: Option<PathBuf>,

    /// Path to the headphones table (CSV)
    ///
    /// Defaults to ./data/headphones.csv, falling back to the platform
    /// data directory.
    #[arg(long, global = true, env = "CANS_HEADPHONES", value_name = "FILE")]
    pub headphones_file: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Recommend headphones for a genre and use case
    ///
    /// Scores every catalog entry against the fixed rule table for the
    /// selection and prints the ranking, best match first. By default only
    /// the top-5 shortlist is shown.
    Recommend {
        /// Favorite genre
        #[arg(value_enum)]
        genre: Genre,

        /// Intended use case
        #[arg(value_enum)]
        use_case: UseCase,

        /// Print the full ranking instead of the shortlist
        #[arg(long)]
        full: bool,

        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// Browse songs of one genre
    ///
    /// Pure filter over the songs table, preserving its row order.
    Songs {
        /// Genre to filter by
        #[arg(value_enum)]
        genre: Genre,

        /// Maximum number of songs to show
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Emit JSON instead of a human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// List the known genres with their song counts
    Genres,

    /// Validate both datasets
    ///
    /// Loads the songs and headphones tables, reports how many rows were
    /// loaded and lists every skipped row with its line number and reason.
    Check,

    /// Generate shell completions
    ///
    /// Usage: cans completion bash > ~/.local/share/bash-completion/completions/cans
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
