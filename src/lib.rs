//! Tennis tournament engine: round-robin qualifier into a knockout bracket.

pub mod history;
pub mod logic;
pub mod models;

pub use history::{CsvMatchArchive, MatchSummary};
pub use logic::{
    auto_simulate_full_tournament, collect_advancing_players, generate_knockout_matches,
    generate_round_robin_matches, is_stage_complete, record_match_result, run_stage_progression,
    SimulationReport, WinnerRankingQueue, FINAL_ADVANCERS, SEMIFINAL_ADVANCERS,
};
pub use models::{
    MatchId, MatchStatus, Player, PlayerId, PlayerStats, SetScore, Side, Stage, TennisMatch,
    Tournament, TournamentError, TournamentId, TournamentState,
};
