//! Demo driver: seed a roster, auto-simulate a full tournament, print
//! standings and the champion.
//! Run with: cargo run --bin simulate
//! Override with env: HISTORY_FILE (CSV path for the match archive),
//! RUST_LOG (e.g. info).

use std::env;
use std::process::ExitCode;
use tennis_tournament::{
    auto_simulate_full_tournament, generate_round_robin_matches, CsvMatchArchive, Player,
    Tournament,
};

fn demo_roster() -> Vec<Player> {
    ["Amara", "Bennett", "Carla", "Dmitri", "Elif", "Farid"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n = i + 1;
            Player::new(n as u32, *name, format!("p{n}"), format!("s{n}"))
        })
        .collect()
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut tournament = match Tournament::new(demo_roster()) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Could not set up tournament: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = generate_round_robin_matches(&mut tournament) {
        log::error!("Could not generate the qualifier: {}", e);
        return ExitCode::FAILURE;
    }

    let report = match auto_simulate_full_tournament(&mut tournament) {
        Ok(r) => r,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Archive the completed matches if a history file was requested. The
    // tournament outcome stands even if archival fails.
    if let Ok(path) = env::var("HISTORY_FILE") {
        match CsvMatchArchive::create(&path) {
            Ok(mut archive) => {
                for summary in &report.summaries {
                    if let Err(e) = archive.record(summary) {
                        log::warn!("Could not archive match {}: {}", summary.match_id, e);
                    }
                }
                log::info!("Wrote {} match record(s) to {}", report.summaries.len(), path);
            }
            Err(e) => log::warn!("Could not open history file {}: {}", path, e),
        }
    }

    println!("=== Final standings ===");
    let mut standings = tournament.players.clone();
    standings.sort_by(|a, b| {
        (b.matches_won, b.total_points_scored).cmp(&(a.matches_won, a.total_points_scored))
    });
    for p in &standings {
        let s = p.stats();
        println!(
            "{:<10} wins: {:<2} losses: {:<2} points: {:<3} win rate: {:.2}%",
            p.name, s.wins, s.losses, s.points, s.win_rate
        );
    }

    match report.champion.and_then(|id| tournament.player(id)) {
        Some(champion) => {
            println!("Tournament champion: {}!", champion.name);
            ExitCode::SUCCESS
        }
        None => {
            println!("Tournament did not finish (stalled waiting for advancers).");
            ExitCode::FAILURE
        }
    }
}
