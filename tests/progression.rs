//! Integration tests for result recording, stage progression, knockout
//! generation, and the auto-simulation driver.

use tennis_tournament::{
    auto_simulate_full_tournament, collect_advancing_players, generate_knockout_matches,
    generate_round_robin_matches, record_match_result, run_stage_progression, MatchStatus, Player,
    SetScore, Stage, Tournament, TournamentError, TournamentState,
};

fn roster(n: usize) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(i as u32, format!("P{i}"), format!("u{i}"), format!("pw{i}")))
        .collect()
}

fn started_tournament(n: usize) -> Tournament {
    let mut t = Tournament::new(roster(n)).unwrap();
    generate_round_robin_matches(&mut t).unwrap();
    t
}

/// Record every upcoming match so that the lower player id always wins 2-0,
/// running progression after each result (as a driver would).
fn play_out_stage_lower_id_wins(t: &mut Tournament) {
    let upcoming: Vec<_> = t
        .upcoming_matches()
        .map(|m| (m.id, m.player1, m.player2))
        .collect();
    for (id, p1, p2) in upcoming {
        let score = if p1 < p2 {
            SetScore::new(2, 0)
        } else {
            SetScore::new(0, 2)
        };
        record_match_result(t, id, score).unwrap();
        run_stage_progression(t).unwrap();
    }
}

#[test]
fn recording_updates_match_and_both_players() {
    let mut t = started_tournament(2);
    let m = t.matches[0].clone();

    let summary = record_match_result(&mut t, m.id, SetScore::new(2, 1)).unwrap();

    let played = t.match_by_id(m.id).unwrap();
    assert_eq!(played.status, MatchStatus::Completed);
    assert_eq!(played.winner, Some(m.player1));
    assert_eq!(played.score, Some(SetScore::new(2, 1)));
    assert!(played.played_at.is_some());

    let winner = t.player(m.player1).unwrap();
    let loser = t.player(m.player2).unwrap();
    assert_eq!((winner.matches_won, winner.matches_lost), (1, 0));
    assert_eq!((loser.matches_won, loser.matches_lost), (0, 1));
    // Points accumulate sets won, for both sides.
    assert_eq!(winner.total_points_scored, 2);
    assert_eq!(loser.total_points_scored, 1);
    assert_eq!(winner.win_rate(), 100.0);
    assert_eq!(loser.win_rate(), 0.0);

    assert_eq!(summary.player1, "P1");
    assert_eq!(summary.player2, "P2");
    assert_eq!(summary.winner, "P1");
    assert_eq!(summary.score, "2-1");
    assert_eq!(summary.stage, Stage::Qualifier);
}

#[test]
fn degenerate_scores_are_rejected() {
    let mut t = started_tournament(2);
    let id = t.matches[0].id;
    for (a, b) in [(2, 2), (0, 0), (1, 1), (3, 0), (0, 3), (1, 0), (0, 1)] {
        assert_eq!(
            record_match_result(&mut t, id, SetScore::new(a, b)),
            Err(TournamentError::InvalidScore {
                player1: a,
                player2: b
            })
        );
    }
    // Nothing was mutated by the rejected attempts.
    assert!(!t.matches[0].is_completed());
    assert!(t.players.iter().all(|p| p.matches_won == 0 && p.matches_lost == 0));
}

#[test]
fn recording_twice_is_rejected_and_counts_once() {
    let mut t = started_tournament(2);
    let id = t.matches[0].id;
    record_match_result(&mut t, id, SetScore::new(2, 0)).unwrap();
    let before: Vec<_> = t
        .players
        .iter()
        .map(|p| (p.matches_won, p.matches_lost, p.total_points_scored))
        .collect();

    assert_eq!(
        record_match_result(&mut t, id, SetScore::new(0, 2)),
        Err(TournamentError::MatchAlreadyCompleted(id))
    );

    let after: Vec<_> = t
        .players
        .iter()
        .map(|p| (p.matches_won, p.matches_lost, p.total_points_scored))
        .collect();
    assert_eq!(before, after);
    assert_eq!(t.match_by_id(id).unwrap().winner, Some(1));
}

#[test]
fn unknown_match_id_is_rejected() {
    let mut t = started_tournament(2);
    assert_eq!(
        record_match_result(&mut t, 999, SetScore::new(2, 0)),
        Err(TournamentError::MatchNotFound(999))
    );
}

#[test]
fn six_player_tournament_runs_to_a_champion() {
    let mut t = started_tournament(6);
    assert_eq!(t.stage_match_count(Stage::Qualifier), 15);

    // Qualifier: lower ids win everything, so wins are P1=5 .. P6=0.
    play_out_stage_lower_id_wins(&mut t);

    // Top 4 advanced and were paired in rank order: (P1 v P2), (P3 v P4).
    assert_eq!(t.state, TournamentState::SemifinalInProgress);
    let semis: Vec<_> = t.matches_in_stage(Stage::Semifinal).cloned().collect();
    assert_eq!(semis.len(), 2);
    assert_eq!((semis[0].player1, semis[0].player2), (1, 2));
    assert_eq!((semis[1].player1, semis[1].player2), (3, 4));

    play_out_stage_lower_id_wins(&mut t);

    // Semifinal winners P1 and P3 meet in a single Final.
    assert_eq!(t.state, TournamentState::FinalInProgress);
    let finals: Vec<_> = t.matches_in_stage(Stage::Final).cloned().collect();
    assert_eq!(finals.len(), 1);
    assert_eq!((finals[0].player1, finals[0].player2), (1, 3));

    record_match_result(&mut t, finals[0].id, SetScore::new(2, 1)).unwrap();
    let champion = run_stage_progression(&mut t).unwrap();
    assert_eq!(champion, Some(1));
    assert_eq!(t.champion, Some(1));
    assert_eq!(t.state, TournamentState::Completed);

    // Terminal: further progression calls change nothing.
    assert_eq!(run_stage_progression(&mut t), Ok(None));
    assert_eq!(t.state, TournamentState::Completed);

    let p1 = t.player(1).unwrap();
    assert_eq!((p1.matches_won, p1.matches_lost), (7, 0));
}

#[test]
fn odd_advancers_get_a_bye_that_carries_forward() {
    let mut t = started_tournament(3);
    play_out_stage_lower_id_wins(&mut t);

    // All 3 pool players advance: P1 and P2 play, P3 sits on a bye.
    assert_eq!(t.state, TournamentState::SemifinalInProgress);
    assert_eq!(t.stage_match_count(Stage::Semifinal), 1);
    assert_eq!(t.pending_bye, Some(3));

    play_out_stage_lower_id_wins(&mut t);

    // The bye player re-enters the Final pool alongside the semifinal winner.
    assert_eq!(t.state, TournamentState::FinalInProgress);
    assert_eq!(t.pending_bye, None);
    let finals: Vec<_> = t.matches_in_stage(Stage::Final).cloned().collect();
    assert_eq!(finals.len(), 1);
    assert_eq!((finals[0].player1, finals[0].player2), (3, 1));

    play_out_stage_lower_id_wins(&mut t);
    assert_eq!(t.state, TournamentState::Completed);
    assert_eq!(t.champion, Some(1));
}

#[test]
fn too_few_advancers_stalls_without_failing() {
    let mut t = started_tournament(2);
    play_out_stage_lower_id_wins(&mut t);

    // Both pool players advance (top 4 of a 2-player pool) into one semifinal.
    assert_eq!(t.state, TournamentState::SemifinalInProgress);
    assert_eq!(t.stage_match_count(Stage::Semifinal), 1);

    play_out_stage_lower_id_wins(&mut t);

    // One semifinal winner cannot form a Final: stalled, not an error.
    assert_eq!(t.state, TournamentState::FinalPending);
    assert_eq!(t.stage_match_count(Stage::Final), 0);
    assert_eq!(t.champion, None);
    assert_eq!(run_stage_progression(&mut t), Ok(None));
    assert_eq!(t.state, TournamentState::FinalPending);
}

#[test]
fn qualifier_collection_ranks_and_bounds_advancers() {
    let mut t = started_tournament(5);
    play_out_stage_lower_id_wins(&mut t);

    let top_two = collect_advancing_players(&t, Stage::Qualifier, 2).unwrap();
    assert_eq!(top_two, vec![1, 2]);

    // Never more than the top 4 of a pool, whatever the cap.
    let top = collect_advancing_players(&t, Stage::Qualifier, 10).unwrap();
    assert_eq!(top, vec![1, 2, 3, 4]);
}

#[test]
fn knockout_generation_pairs_sequentially() {
    let mut t = Tournament::new(roster(6)).unwrap();
    generate_knockout_matches(&mut t, &[5, 2, 4, 1, 6], Stage::Semifinal).unwrap();

    let semis: Vec<_> = t.matches_in_stage(Stage::Semifinal).cloned().collect();
    assert_eq!(semis.len(), 2);
    assert_eq!((semis[0].player1, semis[0].player2), (5, 2));
    assert_eq!((semis[1].player1, semis[1].player2), (4, 1));
    assert_eq!(t.pending_bye, Some(6));
}

#[test]
fn knockout_generation_needs_two_advancers() {
    let mut t = Tournament::new(roster(4)).unwrap();
    assert_eq!(
        generate_knockout_matches(&mut t, &[1], Stage::Semifinal),
        Err(TournamentError::NotEnoughAdvancers { count: 1 })
    );
    assert!(t.matches.is_empty());
}

#[test]
fn simulation_completes_a_six_player_tournament() {
    let mut t = started_tournament(6);
    let report = auto_simulate_full_tournament(&mut t).unwrap();

    assert_eq!(t.state, TournamentState::Completed);
    assert!(report.champion.is_some());
    assert_eq!(t.champion, report.champion);
    assert!(t.player(report.champion.unwrap()).is_some());

    // 15 qualifier + 2 semifinal + 1 final.
    assert_eq!(report.summaries.len(), 18);
    assert_eq!(t.matches.len(), 18);
    for m in &t.matches {
        assert!(m.is_completed());
        let score = m.score.unwrap();
        assert!(score.winner().is_some(), "invalid simulated score {score}");
        let w = m.winner.unwrap();
        assert!(w == m.player1 || w == m.player2);
    }
}

#[test]
fn simulation_handles_a_bye_roster() {
    let mut t = started_tournament(3);
    let report = auto_simulate_full_tournament(&mut t).unwrap();

    // 3 qualifier + 1 semifinal + 1 final (bye player re-enters the Final).
    assert_eq!(t.state, TournamentState::Completed);
    assert!(report.champion.is_some());
    assert_eq!(t.matches.len(), 5);
}
