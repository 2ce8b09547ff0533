//! Optional selection observability.
//!
//! The pipeline itself is side-effect-free; callers who want per-entry
//! score traces pass an observer instead of the engine logging directly.

use tracing::debug;

use crate::entry::CodexEntry;
use crate::scoring::RelevanceScore;
use crate::SelectionSummary;

pub trait SelectionObserver {
    /// Called once per non-global entry, after scoring.
    fn entry_scored(&mut self, entry: &CodexEntry, score: &RelevanceScore) {
        let _ = (entry, score);
    }

    /// Called once per pipeline run with the final summary.
    fn selection_complete(&mut self, summary: &SelectionSummary) {
        let _ = summary;
    }
}

/// Default observer: does nothing.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {}

/// Forwards selection decisions to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn entry_scored(&mut self, entry: &CodexEntry, score: &RelevanceScore) {
        debug!(
            entry = entry.id.as_str(),
            title = %entry.title,
            score = score.score,
            reasons = ?score.reasons,
            "entry scored"
        );
    }

    fn selection_complete(&mut self, summary: &SelectionSummary) {
        debug!(
            budget = summary.budget,
            tokens_used = summary.tokens_used,
            considered = summary.entries_considered,
            selected = summary.entries_selected,
            excluded_by_budget = summary.entries_excluded_by_budget,
            "context selection complete"
        );
    }
}
