//! Winner ranking queue: bounded max-priority queue over (wins, points).
//!
//! Used once per stage transition to pick the advancers from a completed
//! round-robin pool. A fresh queue is built for every transition so entries
//! never carry over between stages.

use crate::models::{PlayerId, TournamentError};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One enqueued player with the keys used for ranking.
#[derive(Clone, Debug, Eq, PartialEq)]
struct RankedWinner {
    /// Wins within the stage being ranked, at enqueue time.
    wins: u32,
    /// Total points scored, as the tie-break.
    points: u32,
    /// Enqueue sequence number; earlier entries win full ties so dequeue
    /// order is deterministic.
    seq: u64,
    player: PlayerId,
}

impl Ord for RankedWinner {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wins
            .cmp(&other.wins)
            .then(self.points.cmp(&other.points))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for RankedWinner {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue ordering players by wins, then points scored.
///
/// Capacity-bounded; `enqueue` past capacity is an explicit error rather
/// than a silent drop, and callers size the queue to the roster so it never
/// fires in normal operation.
#[derive(Debug)]
pub struct WinnerRankingQueue {
    heap: BinaryHeap<RankedWinner>,
    capacity: usize,
    next_seq: u64,
}

impl WinnerRankingQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    /// Insert a player with their win count (within the stage being ranked)
    /// and points total.
    pub fn enqueue(
        &mut self,
        player: PlayerId,
        wins: u32,
        points: u32,
    ) -> Result<(), TournamentError> {
        if self.heap.len() >= self.capacity {
            return Err(TournamentError::RankingCapacity {
                capacity: self.capacity,
            });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(RankedWinner {
            wins,
            points,
            seq,
            player,
        });
        Ok(())
    }

    /// Remove and return the highest-ranked player, or None when empty.
    pub fn dequeue(&mut self) -> Option<PlayerId> {
        self.heap.pop().map(|w| w.player)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
