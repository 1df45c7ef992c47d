//! Player and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = u32;

/// Statistics view of a player (for display / standings).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    /// Winning percentage in [0, 100]; 0.0 when no matches have been played.
    pub win_rate: f64,
}

impl PlayerStats {
    pub fn from_player(p: &Player) -> Self {
        Self {
            wins: p.matches_won,
            losses: p.matches_lost,
            points: p.total_points_scored,
            win_rate: p.win_rate(),
        }
    }
}

/// A player in the tournament roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Login credentials are pass-through from the roster collaborator; the
    /// engine never inspects them.
    pub username: String,
    pub password: String,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub total_points_scored: u32,
}

impl Player {
    /// Create a new player with zeroed counters.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            password: password.into(),
            matches_won: 0,
            matches_lost: 0,
            total_points_scored: 0,
        }
    }

    /// Current stats as a separate struct (for display).
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_player(self)
    }

    /// Record a win for this player.
    pub fn add_win(&mut self) {
        self.matches_won += 1;
    }

    /// Record a loss for this player.
    pub fn add_loss(&mut self) {
        self.matches_lost += 1;
    }

    /// Add to the running points total (sets won, in a best-of-3 format).
    pub fn add_points(&mut self, points: u32) {
        self.total_points_scored += points;
    }

    /// Winning percentage: wins / (wins + losses) * 100, or 0.0 with no matches.
    pub fn win_rate(&self) -> f64 {
        let played = self.matches_won + self.matches_lost;
        if played == 0 {
            return 0.0;
        }
        f64::from(self.matches_won) / f64::from(played) * 100.0
    }
}
