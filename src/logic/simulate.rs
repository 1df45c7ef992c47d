//! Auto-simulation: play out the whole tournament with random valid results.
//!
//! Exists for demos and testing; goes through the exact same recording and
//! progression path as manual score entry, so every simulated result is a
//! legal best-of-3 outcome.

use crate::history::MatchSummary;
use crate::logic::progression::{record_match_result, run_stage_progression};
use crate::models::{PlayerId, SetScore, Tournament, TournamentError, TournamentState};
use rand::Rng;

/// Outcome of a full simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    /// The champion, unless the tournament stalled (too few advancers).
    pub champion: Option<PlayerId>,
    /// Summaries of every match played, in play order.
    pub summaries: Vec<MatchSummary>,
}

/// A random legal best-of-3 score: winner side uniform, loser takes 0 or 1 sets.
fn random_score(rng: &mut impl Rng) -> SetScore {
    let loser_sets: u8 = rng.gen_range(0..2);
    if rng.gen_bool(0.5) {
        SetScore::new(2, loser_sets)
    } else {
        SetScore::new(loser_sets, 2)
    }
}

/// Play every remaining match with random results until the tournament
/// completes (or stalls for lack of advancers).
pub fn auto_simulate_full_tournament(
    tournament: &mut Tournament,
) -> Result<SimulationReport, TournamentError> {
    let mut rng = rand::thread_rng();
    let mut summaries = Vec::new();

    loop {
        let upcoming: Vec<_> = tournament.upcoming_matches().map(|m| m.id).collect();
        for match_id in upcoming {
            let summary = record_match_result(tournament, match_id, random_score(&mut rng))?;
            summaries.push(summary);
            run_stage_progression(tournament)?;
        }

        if tournament.state == TournamentState::Completed {
            return Ok(SimulationReport {
                champion: tournament.champion,
                summaries,
            });
        }
        // No new matches appeared: stalled (e.g. 2-player roster reaching a
        // 1-winner semifinal). Not fatal; report what was played.
        if tournament.upcoming_matches().next().is_none() {
            log::warn!(
                "Simulation stalled in state {:?}; no further matches to play",
                tournament.state
            );
            return Ok(SimulationReport {
                champion: None,
                summaries,
            });
        }
    }
}
