//! Relevance-ranked context selection for AI-assisted story writing.
//!
//! `codex-relevance` decides which codex (worldbuilding) entries —
//! characters, locations, objects, lore — are relevant enough at the
//! current point of a story to inject into a generation prompt, under a
//! hard token budget. It provides heuristic relevance scoring with
//! human-readable rationales, category-capped top-k selection, greedy
//! budget packing, post-generation mention tracking, and a prompt block
//! formatter.
//!
//! All operations are pure and deterministic: identical inputs always
//! produce identical outputs, no state is retained across invocations, and
//! caller-owned entries are never mutated (updates are copy-on-write).

pub mod entry;
pub mod format;
pub mod matching;
pub mod mentions;
pub mod observer;
pub mod scoring;
pub mod selection;

use serde::{Deserialize, Serialize};

pub use entry::{Category, CodexEntry, EntryError, EntryId, Importance};
pub use format::format_entries;
pub use mentions::update_mentions;
pub use observer::{NoopObserver, SelectionObserver, TracingObserver};
pub use scoring::{
    context_tail, Locale, LocalePatterns, PromptPatternMatcher, RelevanceScore, RelevanceScorer,
    ScoreWeights, CONTEXT_WINDOW_SIZE,
};
pub use selection::{
    apply_budget, select_by_category, ApproxTokenCounter, BudgetResult, CategoryQuotas,
    ScoredEntry, TokenCounter,
};

/// Token budget used when the caller does not specify one.
pub const DEFAULT_TOKEN_BUDGET: usize = 1000;

/// Outcome summary for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub budget: usize,
    pub tokens_used: f32,
    /// All entries in the snapshot, global or not.
    pub entries_considered: usize,
    pub entries_selected: usize,
    pub entries_excluded_by_budget: usize,
}

/// The final result of one context selection: packed entries in prompt
/// order, the rationale for every quota-admitted candidate, and a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSelection {
    pub entries: Vec<CodexEntry>,
    pub scores: Vec<RelevanceScore>,
    pub summary: SelectionSummary,
}

/// The full selection pipeline: score → category caps → budget packing.
///
/// Holds no mutable state; a single engine can serve any number of
/// concurrent selections.
pub struct ContextEngine<P, T> {
    scorer: RelevanceScorer<P>,
    quotas: CategoryQuotas,
    counter: T,
}

impl Default for ContextEngine<LocalePatterns, ApproxTokenCounter> {
    fn default() -> Self {
        ContextEngine {
            scorer: RelevanceScorer::default(),
            quotas: CategoryQuotas::default(),
            counter: ApproxTokenCounter,
        }
    }
}

impl<P, T> ContextEngine<P, T>
where
    P: PromptPatternMatcher,
    T: TokenCounter,
{
    pub fn new(scorer: RelevanceScorer<P>, quotas: CategoryQuotas, counter: T) -> Self {
        ContextEngine {
            scorer,
            quotas,
            counter,
        }
    }

    /// Select the entries to inject for the next generation step.
    ///
    /// `recent_text` may be the full manuscript; only the trailing context
    /// window is used as scoring evidence. Global entries bypass scoring
    /// and quotas and go straight to the budget walk.
    pub fn select_context(
        &self,
        entries: &[CodexEntry],
        recent_text: &str,
        beat_prompt: &str,
        max_tokens: usize,
    ) -> ContextSelection {
        self.select_context_observed(
            entries,
            recent_text,
            beat_prompt,
            max_tokens,
            &mut NoopObserver,
        )
    }

    /// Same as [`select_context`](Self::select_context), reporting
    /// per-entry scoring decisions to `observer`.
    pub fn select_context_observed(
        &self,
        entries: &[CodexEntry],
        recent_text: &str,
        beat_prompt: &str,
        max_tokens: usize,
        observer: &mut dyn SelectionObserver,
    ) -> ContextSelection {
        let window = context_tail(recent_text, self.scorer.weights().context_window_size);

        let globals: Vec<&CodexEntry> = entries.iter().filter(|e| e.global_include).collect();

        // 1. Scoring phase: non-global entries only, zero scores dropped.
        let candidates: Vec<ScoredEntry> = entries
            .iter()
            .filter(|e| !e.global_include)
            .map(|entry| {
                let score = self.scorer.score(entry, window, beat_prompt);
                observer.entry_scored(entry, &score);
                ScoredEntry { entry, score }
            })
            .filter(|scored| scored.score.score > 0.0)
            .collect();

        // 2. Ranking phase: stable score order under per-category caps.
        let admitted = select_by_category(candidates, &self.quotas);
        let scores: Vec<RelevanceScore> = admitted.iter().map(|s| s.score.clone()).collect();
        let selected: Vec<&CodexEntry> = admitted.iter().map(|s| s.entry).collect();

        // 3. Budgeting phase.
        let BudgetResult {
            packed,
            tokens_used,
            excluded_by_budget,
        } = apply_budget(
            globals.iter().copied(),
            selected.iter().copied(),
            max_tokens,
            &self.counter,
        );

        let summary = SelectionSummary {
            budget: max_tokens,
            tokens_used,
            entries_considered: entries.len(),
            entries_selected: packed.len(),
            entries_excluded_by_budget: excluded_by_budget,
        };
        observer.selection_complete(&summary);

        ContextSelection {
            entries: packed,
            scores,
            summary,
        }
    }
}
