//! Shot records and the categorical vocabulary of the source dataset.

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// A single attempt on goal. The xG probability is trusted to be strictly
/// positive; rows that fail that bar are dropped at the loading boundary and
/// never reach the analytics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub player: String,
    pub xg: f64,
    pub outcome: Outcome,
    pub situation: Situation,
    pub shot_type: ShotType,
    pub location: Location,
}

/// Normalised pitch coordinates in [0, 1], carried through for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// Closed set of shot results. String forms match the dataset labels, so
/// `"SavedShot".parse::<Outcome>()` works alongside the short names.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Ordinal,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Outcome {
    Goal,
    #[strum(to_string = "Saved", serialize = "SavedShot")]
    #[serde(rename = "SavedShot")]
    Saved,
    #[strum(to_string = "Blocked", serialize = "BlockedShot")]
    #[serde(rename = "BlockedShot")]
    Blocked,
    #[strum(to_string = "Missed", serialize = "MissedShots")]
    #[serde(rename = "MissedShots")]
    Missed,
    #[strum(to_string = "Hit post", serialize = "ShotOnPost")]
    #[serde(rename = "ShotOnPost")]
    OnPost,
}
impl Outcome {
    pub fn is_goal(&self) -> bool {
        matches!(self, Outcome::Goal)
    }

    /// Goal or stopped by the keeper; excludes wide and blocked attempts.
    pub fn is_on_target(&self) -> bool {
        matches!(self, Outcome::Goal | Outcome::Saved)
    }
}

/// Play situation leading to the shot. Declaration order is the display order
/// used by the situation breakdown.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Ordinal,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Situation {
    FromCorner,
    SetPiece,
    OpenPlay,
    DirectFreekick,
    Penalty,
}

/// Body part used. Declaration order is the display order used by the
/// shot-type breakdown.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Ordinal,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum ShotType {
    Head,
    RightFoot,
    LeftFoot,
    OtherBodyPart,
}
