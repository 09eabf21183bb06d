//! Cans - headphone recommendations from your music taste.
//!
//! Thin presentation layer over the library: parses arguments, loads the
//! catalogs, calls the engine and prints the results. All real behavior
//! lives in the library modules; this file only routes and formats.
//!
//! ## Usage
//!
//! ```bash
//! # Recommend a shortlist for rock listened to while working out
//! cans recommend rock workout
//!
//! # Full ranking as JSON
//! cans recommend edm studio --full --json
//!
//! # Browse pop songs, list genres, validate the datasets
//! cans songs pop --limit 10
//! cans genres
//! cans check
//! ```

use anyhow::{Context, Result};
use cans::cli::{Args, Command};
use cans::engine::{self, ScoringWeights, SHORTLIST_LEN};
use cans::headphone::Headphone;
use cans::loader::{self, TableLoad};
use cans::song::{Genre, Song};
use cans::{config, loader::RowSkip};
use clap::{CommandFactory, Parser};
use log::info;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Recommend {
            genre,
            use_case,
            full,
            json,
        } => {
            let catalog = load_headphone_catalog(args.headphones_file)?;
            info!("recommending for {genre} / {use_case} over {} headphones", catalog.len());

            let mut ranked = engine::rank(genre, use_case, &catalog, &ScoringWeights::default());
            if !full {
                ranked.truncate(SHORTLIST_LEN);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else if ranked.is_empty() {
                println!("No matching headphones for {genre} / {use_case}.");
            } else {
                for (index, scored) in ranked.iter().enumerate() {
                    print_scored(index, scored);
                }
            }
        }

        Command::Songs { genre, limit, json } => {
            let songs = load_song_catalog(args.songs_file)?;
            let genre_label = genre.to_string();
            let matches = engine::filter_songs_by_genre(&genre_label, &songs);

            if json {
                let shown: Vec<&Song> = matches.iter().take(limit).copied().collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if matches.is_empty() {
                println!("No {genre} songs in the catalog.");
            } else {
                for song in matches.iter().take(limit) {
                    println!("{song}");
                }
                if matches.len() > limit {
                    println!("... and {} more (use --limit)", matches.len() - limit);
                }
            }
        }

        Command::Genres => {
            let songs = load_song_catalog(args.songs_file)?;
            for genre in Genre::ALL {
                let count = songs.iter().filter(|song| song.genre == genre).count();
                println!("{:<6} {count:>6}", genre.to_string());
            }
        }

        Command::Check => {
            let songs_path = config::songs_path(args.songs_file)?;
            let headphones_path = config::headphones_path(args.headphones_file)?;

            let songs = loader::load_songs(&songs_path)
                .with_context(|| format!("checking songs table {}", songs_path.display()))?;
            report_check("songs", &songs_path, songs.records.len(), &songs.skipped);

            let headphones = loader::load_headphones(&headphones_path).with_context(|| {
                format!("checking headphones table {}", headphones_path.display())
            })?;
            report_check(
                "headphones",
                &headphones_path,
                headphones.records.len(),
                &headphones.skipped,
            );
        }

        Command::Completion { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(shell, &mut cmd, "cans", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load the headphones table, surfacing skipped rows as warnings only.
fn load_headphone_catalog(explicit: Option<PathBuf>) -> Result<Vec<Headphone>> {
    let path = config::headphones_path(explicit)?;
    let load: TableLoad<Headphone> = loader::load_headphones(&path)
        .with_context(|| format!("loading headphones table {}", path.display()))?;
    if !load.is_clean() {
        eprintln!("note: {} headphone row(s) skipped; run `cans check` for details", load.skipped.len());
    }
    Ok(load.records)
}

/// Load the songs table, surfacing skipped rows as warnings only.
fn load_song_catalog(explicit: Option<PathBuf>) -> Result<Vec<Song>> {
    let path = config::songs_path(explicit)?;
    let load: TableLoad<Song> = loader::load_songs(&path)
        .with_context(|| format!("loading songs table {}", path.display()))?;
    if !load.is_clean() {
        eprintln!("note: {} song row(s) skipped; run `cans check` for details", load.skipped.len());
    }
    Ok(load.records)
}

fn print_scored(index: usize, scored: &engine::Scored<'_>) {
    let hp = scored.headphone;
    println!("{:>2}. [{}] {}", index + 1, scored.score, hp);
    println!(
        "      {} | {} bass | {}{}",
        hp.kind,
        hp.bass_level,
        hp.sound_profile,
        if hp.noise_cancellation {
            " | noise cancelling"
        } else {
            ""
        }
    );
}

fn report_check(table: &str, path: &std::path::Path, loaded: usize, skipped: &[RowSkip]) {
    println!("{table}: {loaded} rows loaded from {}", path.display());
    if skipped.is_empty() {
        println!("  OK");
    } else {
        for skip in skipped {
            println!("  line {}: {}", skip.line, skip.reason);
        }
    }
}
