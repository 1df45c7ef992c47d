//! Match-history collaborator boundary: normalized completed-match records
//! and a CSV archive writer.
//!
//! The engine emits a [`MatchSummary`] for every completed match; whether and
//! where it is archived is the caller's concern. Archival failure never
//! affects tournament state.

use crate::models::{MatchId, Stage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Normalized record of one completed match, for external archival.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub player1: String,
    pub player2: String,
    pub winner: String,
    /// Set score as text, e.g. "2-1".
    pub score: String,
    pub stage: Stage,
    pub played_at: DateTime<Utc>,
}

/// Appends match summaries to a CSV file, one row per completed match.
pub struct CsvMatchArchive {
    writer: csv::Writer<File>,
}

impl CsvMatchArchive {
    /// Create (or truncate) the archive file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, csv::Error> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }

    /// Write one summary row and flush.
    pub fn record(&mut self, summary: &MatchSummary) -> Result<(), csv::Error> {
        self.writer.serialize(summary)?;
        self.writer.flush()?;
        Ok(())
    }
}
