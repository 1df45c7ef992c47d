//! Tournament business logic: scheduling, ranking, progression, simulation.

mod knockout;
mod progression;
mod ranking;
mod round_robin;
mod simulate;

pub use knockout::{collect_advancing_players, generate_knockout_matches};
pub use progression::{
    record_match_result, run_stage_progression, FINAL_ADVANCERS, SEMIFINAL_ADVANCERS,
};
pub use ranking::WinnerRankingQueue;
pub use round_robin::{generate_round_robin_matches, is_stage_complete};
pub use simulate::{auto_simulate_full_tournament, SimulationReport};
