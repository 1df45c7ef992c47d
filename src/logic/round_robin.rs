//! Qualifier stage: round-robin match generation and stage-completion checks.

use crate::models::{Stage, TennisMatch, Tournament, TournamentError, TournamentState};

/// Generate the full round-robin schedule for the Qualifier stage.
///
/// Every unordered pair (i < j) of the roster gets one match, so n players
/// produce n*(n-1)/2 matches. Only valid from NotStarted; the tournament
/// moves to QualifierInProgress.
pub fn generate_round_robin_matches(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::NotStarted {
        return Err(TournamentError::InvalidState);
    }
    if tournament.players.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers);
    }

    let ids: Vec<_> = tournament.players.iter().map(|p| p.id).collect();
    for (i, &p1) in ids.iter().enumerate() {
        for &p2 in &ids[i + 1..] {
            let match_id = tournament.allocate_match_id();
            tournament
                .matches
                .push(TennisMatch::new(match_id, p1, p2, Stage::Qualifier));
        }
    }

    log::info!(
        "Generated {} Qualifier matches for {} players",
        tournament.stage_match_count(Stage::Qualifier),
        ids.len()
    );
    tournament.state = TournamentState::QualifierInProgress;
    Ok(())
}

/// True iff every match in the stage is completed.
///
/// Vacuously true for a stage with no matches; callers that act on
/// completion must check `stage_match_count > 0` first.
pub fn is_stage_complete(tournament: &Tournament, stage: Stage) -> bool {
    tournament.matches_in_stage(stage).all(|m| m.is_completed())
}
