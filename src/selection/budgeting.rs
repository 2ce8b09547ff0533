use std::cmp::Reverse;

use crate::entry::CodexEntry;

pub trait TokenCounter {
    fn estimate(&self, content: &str) -> f32;
}

/// Fixed chars-per-token approximation: tokens(content) := len(content) * 0.25.
#[derive(Debug, Default)]
pub struct ApproxTokenCounter;

const TOKENS_PER_CHAR: f32 = 0.25;

impl TokenCounter for ApproxTokenCounter {
    fn estimate(&self, content: &str) -> f32 {
        content.len() as f32 * TOKENS_PER_CHAR
    }
}

pub struct BudgetResult {
    /// Admitted entries in packed order, cloned out of the snapshot.
    pub packed: Vec<CodexEntry>,
    pub tokens_used: f32,
    pub excluded_by_budget: usize,
}

/// Greedily pack global and selected entries into the token budget.
///
/// Ordering: global entries before non-global, then importance priority
/// descending; ties preserve the incoming relative order. The walk skips
/// entries that would overflow the running total but never stops early, so
/// cheaper entries further down may still be admitted. Content is never
/// truncated.
///
/// Global entries are not budget-exempt: they are sorted first but subject
/// to the same running-total check as everything else. A zero budget is
/// treated as exhausted, not an error, and yields an empty result even when
/// globals are present.
///
/// No deduplication by id is performed; duplicates are the caller's
/// responsibility.
pub fn apply_budget<'a>(
    globals: impl IntoIterator<Item = &'a CodexEntry>,
    selected: impl IntoIterator<Item = &'a CodexEntry>,
    max_tokens: usize,
    counter: &impl TokenCounter,
) -> BudgetResult {
    let mut candidates: Vec<&CodexEntry> = globals.into_iter().chain(selected).collect();
    candidates.sort_by_key(|e| (!e.global_include, Reverse(e.importance.priority())));

    if max_tokens == 0 {
        return BudgetResult {
            packed: Vec::new(),
            tokens_used: 0.0,
            excluded_by_budget: candidates.len(),
        };
    }

    let budget = max_tokens as f32;
    let mut packed = Vec::new();
    let mut tokens_used = 0.0f32;
    let mut excluded_by_budget = 0;

    for entry in candidates {
        let cost = counter.estimate(&entry.content);
        if tokens_used + cost <= budget {
            tokens_used += cost;
            packed.push(entry.clone());
        } else {
            excluded_by_budget += 1;
        }
    }

    BudgetResult {
        packed,
        tokens_used,
        excluded_by_budget,
    }
}
