//! Result recording and stage progression (the tournament state machine).

use crate::history::MatchSummary;
use crate::logic::knockout::{collect_advancing_players, generate_knockout_matches};
use crate::logic::round_robin::is_stage_complete;
use crate::models::{
    MatchId, MatchStatus, PlayerId, SetScore, Side, Stage, Tournament, TournamentError,
    TournamentState,
};
use chrono::Utc;

/// At most this many players advance out of the Qualifier pool.
pub const SEMIFINAL_ADVANCERS: usize = 4;
/// At most this many players advance out of the Semifinal.
pub const FINAL_ADVANCERS: usize = 2;

/// Record the result of an upcoming match.
///
/// The score must be a legal best-of-3 tally. On success the match's score,
/// winner, status, and timestamp are all set and both players' counters are
/// updated, in one step; callers never observe a partially-updated match.
/// Recording a second result for the same match is rejected so a match can
/// contribute to the win/loss tallies at most once.
///
/// Returns a [`MatchSummary`] the caller may hand to the match-history
/// collaborator; dropping it is fine.
pub fn record_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    score: SetScore,
) -> Result<MatchSummary, TournamentError> {
    let idx = tournament
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if tournament.matches[idx].is_completed() {
        return Err(TournamentError::MatchAlreadyCompleted(match_id));
    }
    let side = score.winner().ok_or(TournamentError::InvalidScore {
        player1: score.player1,
        player2: score.player2,
    })?;

    let (p1, p2) = (tournament.matches[idx].player1, tournament.matches[idx].player2);
    let (winner, loser) = match side {
        Side::One => (p1, p2),
        Side::Two => (p2, p1),
    };

    tournament
        .player_mut(winner)
        .ok_or(TournamentError::PlayerNotFound(winner))?
        .add_win();
    tournament
        .player_mut(loser)
        .ok_or(TournamentError::PlayerNotFound(loser))?
        .add_loss();
    if let Some(p) = tournament.player_mut(p1) {
        p.add_points(u32::from(score.player1));
    }
    if let Some(p) = tournament.player_mut(p2) {
        p.add_points(u32::from(score.player2));
    }

    let played_at = Utc::now();
    let m = &mut tournament.matches[idx];
    m.score = Some(score);
    m.winner = Some(winner);
    m.status = MatchStatus::Completed;
    m.played_at = Some(played_at);

    let name = |id: PlayerId| {
        tournament
            .player(id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    };
    Ok(MatchSummary {
        match_id,
        player1: name(p1),
        player2: name(p2),
        winner: name(winner),
        score: score.to_string(),
        stage: tournament.matches[idx].stage,
        played_at,
    })
}

/// Advance the tournament state machine after match completions.
///
/// When the current stage's matches are all completed (and the stage was
/// actually generated), collects the advancers and generates the next
/// stage's matches. With fewer than 2 advancers the tournament stays in the
/// Pending state; a later call retries, so substitutes fed into the roster
/// can unstall it. When the Final completes, its winner becomes the
/// champion and the state machine reaches Completed.
///
/// Returns the champion's id when this call completed the tournament.
pub fn run_stage_progression(
    tournament: &mut Tournament,
) -> Result<Option<PlayerId>, TournamentError> {
    // First flip InProgress -> Pending if the current stage just finished.
    if let Some(stage) = tournament.state.current_stage() {
        if tournament.stage_match_count(stage) > 0 && is_stage_complete(tournament, stage) {
            match stage {
                Stage::Qualifier => tournament.state = TournamentState::SemifinalPending,
                Stage::Semifinal => tournament.state = TournamentState::FinalPending,
                Stage::Final => {
                    let champion = tournament
                        .matches_in_stage(Stage::Final)
                        .find_map(|m| m.winner)
                        .ok_or(TournamentError::InvalidState)?;
                    tournament.champion = Some(champion);
                    tournament.state = TournamentState::Completed;
                    if let Some(p) = tournament.player(champion) {
                        log::info!("Tournament champion: {}!", p.name);
                    }
                    return Ok(Some(champion));
                }
            }
        }
    }

    // Then try to generate the next stage from a Pending state.
    match tournament.state {
        TournamentState::SemifinalPending => {
            try_generate_next_stage(tournament, Stage::Qualifier, Stage::Semifinal, SEMIFINAL_ADVANCERS)?;
        }
        TournamentState::FinalPending => {
            try_generate_next_stage(tournament, Stage::Semifinal, Stage::Final, FINAL_ADVANCERS)?;
        }
        _ => {}
    }
    Ok(None)
}

/// Collect advancers from `completed` (plus any pending bye) and generate
/// `next`. Too few advancers leaves the state Pending.
fn try_generate_next_stage(
    tournament: &mut Tournament,
    completed: Stage,
    next: Stage,
    max_advancers: usize,
) -> Result<(), TournamentError> {
    let mut advancers = collect_advancing_players(tournament, completed, max_advancers)?;
    let bye = tournament.pending_bye.take();
    if let Some(b) = bye {
        if !advancers.contains(&b) {
            advancers.insert(0, b);
        }
    }
    log::info!(
        "Collected {} advancer(s) from the {} stage",
        advancers.len(),
        completed
    );

    match generate_knockout_matches(tournament, &advancers, next) {
        Ok(()) => {
            tournament.state = match next {
                Stage::Semifinal => TournamentState::SemifinalInProgress,
                _ => TournamentState::FinalInProgress,
            };
            Ok(())
        }
        Err(TournamentError::NotEnoughAdvancers { count }) => {
            // Stalled: stay Pending so a retry (e.g. after a substitute
            // player is fed in) can pick up from here. Keep the bye too.
            tournament.pending_bye = bye;
            log::warn!(
                "Only {} advancer(s) available; {} stage not generated",
                count,
                next
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}
