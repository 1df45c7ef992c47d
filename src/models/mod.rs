//! Data structures for the tennis tournament: players, matches, tournament state.

mod game;
mod player;
mod tournament;

pub use game::{MatchId, MatchStatus, SetScore, Side, Stage, TennisMatch};
pub use player::{Player, PlayerId, PlayerStats};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};
