//! Headphone entity and its attribute enumerations.
//!
//! A [`Headphone`] is an immutable value record built once by the loader from
//! one row of the headphones table. The attribute enums here are the
//! vocabulary the engine's rule table speaks: a recommendation is nothing but
//! a comparison between a headphone's attributes and the preferred attributes
//! for the user's (genre, use case) selection.

use crate::song::UnknownLabel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Intended usage context for a headphone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum UseCase {
    Workout,
    Casual,
    Studio,
}

impl UseCase {
    /// All known use cases, in canonical display order.
    pub const ALL: [UseCase; 3] = [UseCase::Workout, UseCase::Casual, UseCase::Studio];
}

impl FromStr for UseCase {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workout" => Ok(UseCase::Workout),
            "casual" => Ok(UseCase::Casual),
            "studio" => Ok(UseCase::Studio),
            _ => Err(UnknownLabel::new("use_case", s)),
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UseCase::Workout => "Workout",
            UseCase::Casual => "Casual",
            UseCase::Studio => "Studio",
        };
        write!(f, "{label}")
    }
}

/// Physical headphone form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeadphoneType {
    OverEar,
    OnEar,
    InEar,
}

impl FromStr for HeadphoneType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "over-ear" => Ok(HeadphoneType::OverEar),
            "on-ear" => Ok(HeadphoneType::OnEar),
            "in-ear" => Ok(HeadphoneType::InEar),
            _ => Err(UnknownLabel::new("type", s)),
        }
    }
}

impl fmt::Display for HeadphoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HeadphoneType::OverEar => "Over-ear",
            HeadphoneType::OnEar => "On-ear",
            HeadphoneType::InEar => "In-ear",
        };
        write!(f, "{label}")
    }
}

/// Ordinal bass response level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BassLevel {
    Low,
    Medium,
    High,
}

impl FromStr for BassLevel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(BassLevel::Low),
            "medium" => Ok(BassLevel::Medium),
            "high" => Ok(BassLevel::High),
            _ => Err(UnknownLabel::new("bass_level", s)),
        }
    }
}

impl fmt::Display for BassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BassLevel::Low => "Low",
            BassLevel::Medium => "Medium",
            BassLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// Overall tuning of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SoundProfile {
    Balanced,
    BassHeavy,
    Flat,
}

impl FromStr for SoundProfile {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Ok(SoundProfile::Balanced),
            "bass-heavy" => Ok(SoundProfile::BassHeavy),
            "flat" => Ok(SoundProfile::Flat),
            _ => Err(UnknownLabel::new("sound_profile", s)),
        }
    }
}

impl fmt::Display for SoundProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SoundProfile::Balanced => "Balanced",
            SoundProfile::BassHeavy => "Bass-heavy",
            SoundProfile::Flat => "Flat",
        };
        write!(f, "{label}")
    }
}

/// One headphone model with its specifications.
///
/// Serde renames map onto the headphones table header; `noise_cancellation`
/// is stored as "Yes"/"No" in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headphone {
    /// Unique, non-empty identifier. Validated by the loader.
    #[serde(rename = "headphone_id")]
    pub id: String,
    pub brand: String,
    pub model: String,
    /// USD, non-negative.
    pub price: f64,
    #[serde(rename = "type", with = "crate::loader::label")]
    pub kind: HeadphoneType,
    #[serde(with = "crate::loader::label")]
    pub use_case: UseCase,
    #[serde(with = "crate::loader::label")]
    pub bass_level: BassLevel,
    #[serde(with = "crate::loader::label")]
    pub sound_profile: SoundProfile,
    #[serde(deserialize_with = "crate::loader::de_yes_no")]
    pub noise_cancellation: bool,
}

impl Headphone {
    /// Whether this headphone is built for the given use case.
    #[must_use]
    pub fn matches_use_case(&self, use_case: UseCase) -> bool {
        self.use_case == use_case
    }

    /// Row-level invariants the table schema cannot express.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("empty headphone_id".to_string());
        }
        if self.price < 0.0 {
            return Err(format!("negative price {}", self.price));
        }
        Ok(())
    }
}

impl fmt::Display for Headphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - ${:.2} ({})",
            self.brand, self.model, self.price, self.use_case
        )
    }
}
