//! End-of-run tally.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::dispatch::{DeliveryOutcome, Outcome};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::{self, Write};

/// Aggregate counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub sent: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[DeliveryOutcome]) -> Self {
        let sent = outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Sent)
            .count();
        Self {
            sent,
            failed: outcomes.len() - sent,
            total: outcomes.len(),
        }
    }
}

/// Everything known about a finished run, for human or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub outcomes: Vec<DeliveryOutcome>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl RunReport {
    pub fn new(outcomes: Vec<DeliveryOutcome>, started_at: DateTime<Local>) -> Self {
        Self {
            summary: RunSummary::from_outcomes(&outcomes),
            outcomes,
            started_at,
            finished_at: Local::now(),
        }
    }

    /// Print the summary block.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{:^60}", "SUMMARY")?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "✅ Messages sent successfully: {}", self.summary.sent)?;
        writeln!(out, "❌ Messages failed: {}", self.summary.failed)?;
        writeln!(out, "📊 Total contacts: {}", self.summary.total)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;
        writeln!(out, "🎉 Process completed!")
    }
}
