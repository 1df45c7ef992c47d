//! Tournament and TournamentState.

use crate::models::game::{MatchId, Stage, TennisMatch};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Not enough players to generate matches (need at least 2).
    NotEnoughPlayers,
    /// Two roster players share an id (ids must be unique).
    DuplicatePlayerId(PlayerId),
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
    /// Match id does not exist.
    MatchNotFound(MatchId),
    /// The match already has a result; results are recorded at most once.
    MatchAlreadyCompleted(MatchId),
    /// Not a legal best-of-3 tally (one side must win exactly 2 sets).
    InvalidScore { player1: u8, player2: u8 },
    /// Fewer than 2 advancers; no knockout matches can be generated.
    NotEnoughAdvancers { count: usize },
    /// Ranking queue is full (capacity is sized to the roster).
    RankingCapacity { capacity: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NotEnoughPlayers => {
                write!(f, "Need at least 2 players to generate matches")
            }
            TournamentError::DuplicatePlayerId(id) => {
                write!(f, "Duplicate player id {} in roster", id)
            }
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::MatchAlreadyCompleted(id) => {
                write!(f, "Match {} already has a result", id)
            }
            TournamentError::InvalidScore { player1, player2 } => {
                write!(
                    f,
                    "{}-{} is not a valid best-of-3 score (one side must win 2 sets)",
                    player1, player2
                )
            }
            TournamentError::NotEnoughAdvancers { count } => {
                write!(f, "Not enough advancers ({}) to generate matches", count)
            }
            TournamentError::RankingCapacity { capacity } => {
                write!(f, "Ranking queue is full (capacity {})", capacity)
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament. Transitions are driven by match
/// completions only; Pending states mean the prior stage is done but the
/// next stage's matches have not been generated yet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Roster loaded; no matches generated.
    #[default]
    NotStarted,
    /// Round-robin qualifier matches being played.
    QualifierInProgress,
    /// Qualifier done; semifinal not yet generated (stalls here on too few advancers).
    SemifinalPending,
    SemifinalInProgress,
    /// Semifinal done; final not yet generated.
    FinalPending,
    FinalInProgress,
    /// Final played; champion decided. Terminal.
    Completed,
}

impl TournamentState {
    /// The stage whose matches are currently being played, if any.
    pub fn current_stage(self) -> Option<Stage> {
        match self {
            TournamentState::QualifierInProgress => Some(Stage::Qualifier),
            TournamentState::SemifinalInProgress => Some(Stage::Semifinal),
            TournamentState::FinalInProgress => Some(Stage::Final),
            _ => None,
        }
    }
}

/// Full tournament state: roster, matches, phase, and progression bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Fixed roster for the run (from the roster collaborator). Never shrinks.
    pub players: Vec<Player>,
    /// All matches generated so far, across stages. Never removed.
    pub matches: Vec<TennisMatch>,
    pub state: TournamentState,
    /// Next match id to assign (engine-owned, not global).
    pub next_match_id: MatchId,
    /// Player who advanced on a bye from the last knockout generation; fed
    /// into the next stage's advancer pool.
    pub pending_bye: Option<PlayerId>,
    /// Winner of the Final, once the tournament completes.
    pub champion: Option<PlayerId>,
}

impl Tournament {
    /// Create a tournament from a fixed roster. Player ids must be unique.
    pub fn new(players: Vec<Player>) -> Result<Self, TournamentError> {
        let mut seen = std::collections::HashSet::new();
        for p in &players {
            if !seen.insert(p.id) {
                return Err(TournamentError::DuplicatePlayerId(p.id));
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            players,
            matches: Vec::new(),
            state: TournamentState::NotStarted,
            next_match_id: 1,
            pending_bye: None,
            champion: None,
        })
    }

    /// Reference to a roster player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Mutable reference to a roster player by id.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Reference to a match by id.
    pub fn match_by_id(&self, id: MatchId) -> Option<&TennisMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// All matches belonging to one stage.
    pub fn matches_in_stage(&self, stage: Stage) -> impl Iterator<Item = &TennisMatch> {
        self.matches.iter().filter(move |m| m.stage == stage)
    }

    /// Number of matches generated for a stage.
    pub fn stage_match_count(&self, stage: Stage) -> usize {
        self.matches_in_stage(stage).count()
    }

    /// Matches not yet played, in generation order (these always belong to
    /// the current stage).
    pub fn upcoming_matches(&self) -> impl Iterator<Item = &TennisMatch> {
        self.matches.iter().filter(|m| !m.is_completed())
    }

    /// Allocate the next match id.
    pub(crate) fn allocate_match_id(&mut self) -> MatchId {
        let id = self.next_match_id;
        self.next_match_id += 1;
        id
    }
}
