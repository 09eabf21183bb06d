//! Cans matches headphone products to a music-listening profile.
//!
//! Given a favorite genre and an intended use case, the engine scores every
//! headphone in a catalog against a fixed rule table and returns a ranked
//! list of matches. Both catalogs (songs with Spotify-style audio features,
//! headphones with their specs) are loaded once per run from CSV tables and
//! treated as read-only from then on.
//!
//! Core modules:
//! - [`song`] / [`headphone`] - Immutable entity records and their typed
//!   attribute enums
//! - [`loader`] - CSV parsing with row-level skip-and-warn error policy
//! - [`engine`] - The rule table, scoring and ranking
//!
//! ### Supporting Modules
//!
//! - [`config`] - Dataset path resolution
//! - [`cli`] - Command-line interface definitions with clap integration
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use cans::{engine, loader};
//!
//! let headphones = loader::load_headphones("data/headphones.csv".as_ref())?;
//! let ranked = engine::shortlist("Rock", "Workout", &headphones.records);
//! for scored in &ranked {
//!     println!("[{}] {}", scored.score, scored.headphone);
//! }
//! # Ok::<(), cans::loader::DataLoadError>(())
//! ```
//!
//! ## Scoring
//!
//! The rule table maps each of the fifteen (genre, use case) combinations to
//! a preferred bass level and sound profile. A headphone earns the primary
//! weight for matching the selected use case exactly and secondary weights
//! for matching the preferred tuning; ties keep catalog order, so identical
//! inputs always produce identical rankings. "Nothing matched" is an empty
//! result, never an error.
//!
//! ## Error Handling
//!
//! The loader reports dataset-level problems (missing file, missing columns,
//! all rows invalid) as [`loader::DataLoadError`]; individual malformed rows
//! are skipped with a warning and recorded in the returned
//! [`loader::TableLoad`]. The engine itself is infallible. The binary wraps
//! everything in `anyhow::Result` and logs through `env_logger`, controlled
//! via `RUST_LOG`.

pub mod cli;
pub mod config;
pub mod engine;
pub mod headphone;
pub mod loader;
pub mod song;
