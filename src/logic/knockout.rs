//! Advancer collection and knockout-round match generation.

use crate::logic::ranking::WinnerRankingQueue;
use crate::models::{PlayerId, Stage, TennisMatch, Tournament, TournamentError};
use std::collections::HashMap;

/// Collect the players advancing out of a completed stage, best first.
///
/// Round-robin stage: every distinct participant is ranked by wins within
/// the stage (points scored as tie-break) and the top
/// `min(participants, 4, max_advancers)` advance.
///
/// Knockout stages: each completed match already has exactly one winner, so
/// winners are collected directly (deduplicated, bounded by `max_advancers`).
pub fn collect_advancing_players(
    tournament: &Tournament,
    stage: Stage,
    max_advancers: usize,
) -> Result<Vec<PlayerId>, TournamentError> {
    if stage.is_round_robin() {
        collect_from_round_robin(tournament, stage, max_advancers)
    } else {
        Ok(collect_from_knockout(tournament, stage, max_advancers))
    }
}

fn collect_from_round_robin(
    tournament: &Tournament,
    stage: Stage,
    max_advancers: usize,
) -> Result<Vec<PlayerId>, TournamentError> {
    let mut participants: Vec<PlayerId> = Vec::new();
    for m in tournament.matches_in_stage(stage) {
        if !participants.contains(&m.player1) {
            participants.push(m.player1);
        }
        if !participants.contains(&m.player2) {
            participants.push(m.player2);
        }
    }

    // Wins within this stage only; career totals stay out of the ranking key.
    let mut stage_wins: HashMap<PlayerId, u32> = HashMap::new();
    for m in tournament.matches_in_stage(stage) {
        if let Some(winner) = m.winner.filter(|_| m.is_completed()) {
            *stage_wins.entry(winner).or_insert(0) += 1;
        }
    }

    let mut queue = WinnerRankingQueue::with_capacity(tournament.players.len());
    for &pid in &participants {
        let points = tournament
            .player(pid)
            .ok_or(TournamentError::PlayerNotFound(pid))?
            .total_points_scored;
        queue.enqueue(pid, stage_wins.get(&pid).copied().unwrap_or(0), points)?;
    }

    // Top 4 of the pool advance, at most.
    let limit = participants.len().min(4).min(max_advancers);
    let mut advancers = Vec::with_capacity(limit);
    while advancers.len() < limit {
        match queue.dequeue() {
            Some(pid) => advancers.push(pid),
            None => break,
        }
    }
    Ok(advancers)
}

fn collect_from_knockout(
    tournament: &Tournament,
    stage: Stage,
    max_advancers: usize,
) -> Vec<PlayerId> {
    let mut advancers: Vec<PlayerId> = Vec::new();
    for m in tournament.matches_in_stage(stage) {
        if advancers.len() >= max_advancers {
            break;
        }
        if let Some(winner) = m.winner.filter(|_| m.is_completed()) {
            if !advancers.contains(&winner) {
                advancers.push(winner);
            }
        }
    }
    advancers
}

/// Generate knockout matches by pairing advancers sequentially
/// (advancers[0] vs advancers[1], advancers[2] vs advancers[3], ...).
///
/// An odd advancer count leaves the last player on a bye: no match is
/// generated for them and they are recorded on the tournament so the next
/// stage's advancer pool picks them up. Fewer than 2 advancers is an error
/// and generates nothing.
pub fn generate_knockout_matches(
    tournament: &mut Tournament,
    advancers: &[PlayerId],
    stage: Stage,
) -> Result<(), TournamentError> {
    if advancers.len() < 2 {
        return Err(TournamentError::NotEnoughAdvancers {
            count: advancers.len(),
        });
    }

    let mut pairs = advancers.chunks_exact(2);
    for pair in &mut pairs {
        let match_id = tournament.allocate_match_id();
        tournament
            .matches
            .push(TennisMatch::new(match_id, pair[0], pair[1], stage));
    }
    if let [bye] = *pairs.remainder() {
        tournament.pending_bye = Some(bye);
        let name = tournament
            .player(bye)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        log::info!(
            "Odd number of advancers; {} receives a bye past the {} stage",
            name,
            stage
        );
    }

    log::info!(
        "Generated {} {} matches from {} advancers",
        tournament.stage_match_count(stage),
        stage,
        advancers.len()
    );
    Ok(())
}
