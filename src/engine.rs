//! Recommendation engine: scores headphones against a listening profile.
//!
//! The engine is a pure, stateless function of its inputs plus a fixed rule
//! table. The table maps every (genre, use case) combination to the preferred
//! bass level and sound profile for that combination; a headphone's score is
//! the weighted count of attribute predicates it matches. An exact use-case
//! match carries the highest weight, the bass and profile preferences carry
//! secondary weight.
//!
//! The engine performs no I/O and never fails: an unknown selection or a
//! catalog where nothing matches both yield an empty result, which the
//! presentation layer renders as "no recommendation".

use crate::headphone::{BassLevel, Headphone, SoundProfile, UseCase};
use crate::song::{Genre, Song};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// How many headphones a shortlist holds.
pub const SHORTLIST_LEN: usize = 5;

/// Preferred headphone attributes for one (genre, use case) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference {
    pub bass_level: BassLevel,
    pub sound_profile: SoundProfile,
}

/// Weights for the scored-attribute rule.
///
/// Only the relative ordering matters: `use_case_match` must dominate the
/// two secondary weights so that a headphone built for the selected use case
/// always outranks one that merely shares a tuning preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub use_case_match: u32,
    pub bass_match: u32,
    pub profile_match: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            use_case_match: 4,
            bass_match: 2,
            profile_match: 2,
        }
    }
}

/// The fixed rule table, one row per (genre, use case) combination.
///
/// Profile preference follows the use case alone: workouts want punch
/// (Bass-heavy), casual listening wants a Balanced tuning, studio work wants
/// a Flat reference tuning regardless of genre. Bass preference blends both:
/// workouts always favor High bass, studio monitoring leans Low except for
/// the bass-centric genres, and casual listening follows the genre.
const RULES: [(Genre, UseCase, BassLevel, SoundProfile); 15] = [
    (Genre::Pop, UseCase::Workout, BassLevel::High, SoundProfile::BassHeavy),
    (Genre::Rock, UseCase::Workout, BassLevel::High, SoundProfile::BassHeavy),
    (Genre::Edm, UseCase::Workout, BassLevel::High, SoundProfile::BassHeavy),
    (Genre::Rap, UseCase::Workout, BassLevel::High, SoundProfile::BassHeavy),
    (Genre::Latin, UseCase::Workout, BassLevel::High, SoundProfile::BassHeavy),
    (Genre::Pop, UseCase::Casual, BassLevel::Medium, SoundProfile::Balanced),
    (Genre::Rock, UseCase::Casual, BassLevel::Medium, SoundProfile::Balanced),
    (Genre::Edm, UseCase::Casual, BassLevel::High, SoundProfile::Balanced),
    (Genre::Rap, UseCase::Casual, BassLevel::High, SoundProfile::Balanced),
    (Genre::Latin, UseCase::Casual, BassLevel::Medium, SoundProfile::Balanced),
    (Genre::Pop, UseCase::Studio, BassLevel::Low, SoundProfile::Flat),
    (Genre::Rock, UseCase::Studio, BassLevel::Low, SoundProfile::Flat),
    (Genre::Edm, UseCase::Studio, BassLevel::Medium, SoundProfile::Flat),
    (Genre::Rap, UseCase::Studio, BassLevel::Medium, SoundProfile::Flat),
    (Genre::Latin, UseCase::Studio, BassLevel::Low, SoundProfile::Flat),
];

lazy_static! {
    /// [`RULES`] as a lookup map. Total over `Genre::ALL` x `UseCase::ALL`;
    /// completeness is asserted by tests.
    static ref RULE_TABLE: HashMap<(Genre, UseCase), Preference> = RULES
        .iter()
        .map(|&(genre, use_case, bass_level, sound_profile)| {
            ((genre, use_case), Preference { bass_level, sound_profile })
        })
        .collect();
}

/// Look up the preferred attributes for a (genre, use case) combination.
#[must_use]
pub fn preference_for(genre: Genre, use_case: UseCase) -> Preference {
    // The table covers every combination of the two closed enums.
    RULE_TABLE[&(genre, use_case)]
}

/// One catalog entry together with the score it earned for a query.
#[derive(Debug, Clone, Serialize)]
pub struct Scored<'a> {
    #[serde(flatten)]
    pub headphone: &'a Headphone,
    pub score: u32,
}

fn score_one(hp: &Headphone, use_case: UseCase, pref: Preference, weights: &ScoringWeights) -> u32 {
    let mut score = 0;
    if hp.matches_use_case(use_case) {
        score += weights.use_case_match;
    }
    if hp.bass_level == pref.bass_level {
        score += weights.bass_match;
    }
    if hp.sound_profile == pref.sound_profile {
        score += weights.profile_match;
    }
    score
}

/// Score and rank the whole catalog for a typed selection.
///
/// The sort is stable and descending, so equal scores keep catalog order and
/// identical inputs always produce identical output. Returns an empty vector
/// when not a single headphone matched any predicate; zero-scored entries are
/// kept at the tail otherwise, as a ranking that has real matches is still
/// complete information for the caller.
#[must_use]
pub fn rank<'a>(
    genre: Genre,
    use_case: UseCase,
    catalog: &'a [Headphone],
    weights: &ScoringWeights,
) -> Vec<Scored<'a>> {
    let pref = preference_for(genre, use_case);
    let mut ranked: Vec<Scored<'a>> = catalog
        .iter()
        .map(|hp| Scored {
            headphone: hp,
            score: score_one(hp, use_case, pref, weights),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    if ranked.first().map_or(true, |top| top.score == 0) {
        return Vec::new();
    }
    ranked
}

/// Score and rank the catalog for a string selection.
///
/// This is the seam the presentation layer calls: genre and use case arrive
/// as text. A selection outside the known enumerations is not an error, it
/// is simply a query nothing can match, so the result is empty.
///
/// # Examples
///
/// ```
/// use cans::engine::recommend;
/// use cans::headphone::{BassLevel, Headphone, HeadphoneType, SoundProfile, UseCase};
///
/// let catalog = vec![
///     Headphone {
///         id: "H1".into(),
///         brand: "AKG".into(),
///         model: "K371".into(),
///         price: 179.0,
///         kind: HeadphoneType::OverEar,
///         use_case: UseCase::Studio,
///         bass_level: BassLevel::Low,
///         sound_profile: SoundProfile::Flat,
///         noise_cancellation: false,
///     },
///     Headphone {
///         id: "H2".into(),
///         brand: "JBL".into(),
///         model: "Endurance".into(),
///         price: 49.95,
///         kind: HeadphoneType::InEar,
///         use_case: UseCase::Workout,
///         bass_level: BassLevel::High,
///         sound_profile: SoundProfile::BassHeavy,
///         noise_cancellation: false,
///     },
/// ];
///
/// let ranked = recommend("Rock", "Workout", &catalog);
/// assert_eq!(ranked[0].headphone.id, "H2");
/// ```
#[must_use]
pub fn recommend<'a>(genre: &str, use_case: &str, catalog: &'a [Headphone]) -> Vec<Scored<'a>> {
    let (Ok(genre), Ok(use_case)) = (genre.parse::<Genre>(), use_case.parse::<UseCase>()) else {
        return Vec::new();
    };
    rank(genre, use_case, catalog, &ScoringWeights::default())
}

/// Like [`recommend`], truncated to the top [`SHORTLIST_LEN`] entries.
#[must_use]
pub fn shortlist<'a>(genre: &str, use_case: &str, catalog: &'a [Headphone]) -> Vec<Scored<'a>> {
    let mut ranked = recommend(genre, use_case, catalog);
    ranked.truncate(SHORTLIST_LEN);
    ranked
}

/// Pure order-preserving filter of songs by genre.
///
/// An unknown genre label matches nothing and yields an empty vector.
#[must_use]
pub fn filter_songs_by_genre<'a>(genre: &str, songs: &'a [Song]) -> Vec<&'a Song> {
    match genre.parse::<Genre>() {
        Ok(genre) => songs.iter().filter(|song| song.genre == genre).collect(),
        Err(_) => Vec::new(),
    }
}
