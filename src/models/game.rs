//! Match, Stage, Side, and SetScore for best-of-3 tennis matches.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a match (assigned by the engine, monotonically).
pub type MatchId = u32;

/// Which side of the match won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// Phase of the tournament this match belongs to.
///
/// The Qualifier is a round-robin pool; Semifinal and Final are
/// single-elimination knockout rounds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Qualifier,
    Semifinal,
    Final,
}

impl Stage {
    /// True for the round-robin pool stage (advancement ranks all participants).
    pub fn is_round_robin(self) -> bool {
        matches!(self, Stage::Qualifier)
    }

    /// The stage that follows this one, or None after the Final.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Qualifier => Some(Stage::Semifinal),
            Stage::Semifinal => Some(Stage::Final),
            Stage::Final => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Qualifier => write!(f, "Qualifier"),
            Stage::Semifinal => write!(f, "Semifinal"),
            Stage::Final => write!(f, "Final"),
        }
    }
}

/// Whether a match has been played yet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Completed,
}

/// Sets won by each side. Only 2-0, 2-1, 0-2, 1-2 are legal final tallies
/// in a best-of-3 match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub player1: u8,
    pub player2: u8,
}

impl SetScore {
    pub fn new(player1: u8, player2: u8) -> Self {
        Self { player1, player2 }
    }

    /// The winning side, or None if the tally is not a valid best-of-3 result.
    pub fn winner(self) -> Option<Side> {
        match (self.player1, self.player2) {
            (2, 0) | (2, 1) => Some(Side::One),
            (0, 2) | (1, 2) => Some(Side::Two),
            _ => None,
        }
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.player1, self.player2)
    }
}

/// A single match: two players, a stage, and (once played) a result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TennisMatch {
    pub id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub stage: Stage,
    /// None until the match has been played.
    pub score: Option<SetScore>,
    /// Always one of player1/player2 once set.
    pub winner: Option<PlayerId>,
    pub status: MatchStatus,
    /// When the result was recorded.
    pub played_at: Option<DateTime<Utc>>,
}

impl TennisMatch {
    pub fn new(id: MatchId, player1: PlayerId, player2: PlayerId, stage: Stage) -> Self {
        Self {
            id,
            player1,
            player2,
            stage,
            score: None,
            winner: None,
            status: MatchStatus::Upcoming,
            played_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Score as text for display and archival ("2-1", or "NOT AVAILABLE"
    /// before the match is played).
    pub fn score_display(&self) -> String {
        match self.score {
            Some(s) => s.to_string(),
            None => "NOT AVAILABLE".to_string(),
        }
    }
}
