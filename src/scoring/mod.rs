pub mod patterns;

use serde::{Deserialize, Serialize};

use crate::entry::{Category, CodexEntry, EntryId};
use crate::matching::WordMatcher;
pub use patterns::{Locale, LocalePatterns, PromptPatternMatcher};

/// Default size of the trailing context window, in characters.
///
/// Strictly positive: it is the divisor in the recency-bonus normalization.
pub const CONTEXT_WINDOW_SIZE: usize = 2000;

/// Scoring constants. `Default` matches the reference behavior; callers may
/// tune individual weights without touching the algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Per-occurrence weight for whole-word title and keyword matches.
    pub keyword_weight: f32,
    /// Per-occurrence weight for whole-word alias matches.
    pub alias_weight: f32,
    /// Base weight for partial (substring) keyword matches; the flat bonus
    /// awarded is half of this value.
    pub semantic_weight: f32,
    /// Peak recency bonus, decaying exponentially with distance.
    pub recency_decay: f32,
    /// Normalization divisor for recency distance. Must be positive.
    pub context_window_size: usize,
    /// Flat bonus when the beat prompt foregrounds a character by name.
    pub character_prompt_bonus: f32,
    /// Flat bonus when the beat prompt sets a scene at a named location.
    pub location_prompt_bonus: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            keyword_weight: 1.0,
            alias_weight: 0.9,
            semantic_weight: 0.7,
            recency_decay: 0.8,
            context_window_size: CONTEXT_WINDOW_SIZE,
            character_prompt_bonus: 2.0,
            location_prompt_bonus: 1.5,
        }
    }
}

/// The relevance verdict for one entry. Ephemeral: recomputed from scratch
/// on every invocation and never cached as entry state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub entry_id: EntryId,
    pub score: f32,
    /// Human-readable rationale, in the order contributions were applied.
    pub reasons: Vec<String>,
}

/// Trailing window of at most `max_chars` characters of `text`, cut on a
/// char boundary so callers may pass the full manuscript.
pub fn context_tail(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match text.char_indices().rev().nth(max_chars - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Computes a relevance score and rationale for one non-global entry given
/// the current context window and beat prompt.
///
/// Never fails: an entry with no matches scores 0.0 with empty reasons.
#[derive(Debug)]
pub struct RelevanceScorer<P> {
    weights: ScoreWeights,
    patterns: P,
}

impl Default for RelevanceScorer<LocalePatterns> {
    fn default() -> Self {
        RelevanceScorer {
            weights: ScoreWeights::default(),
            patterns: LocalePatterns::english(),
        }
    }
}

impl<P> RelevanceScorer<P>
where
    P: PromptPatternMatcher,
{
    pub fn new(weights: ScoreWeights, patterns: P) -> Self {
        RelevanceScorer { weights, patterns }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn score(
        &self,
        entry: &CodexEntry,
        context_window: &str,
        beat_prompt: &str,
    ) -> RelevanceScore {
        let search_text = format!(
            "{} {}",
            context_window.to_lowercase(),
            beat_prompt.to_lowercase()
        );

        let mut score = 0.0f32;
        let mut reasons = Vec::new();

        if let Some(matcher) = WordMatcher::new(&entry.title) {
            let count = matcher.count(&search_text);
            if count > 0 {
                score += count as f32 * self.weights.keyword_weight;
                reasons.push(format!("title '{}' appears {count}x", entry.title));
            }
        }

        for alias in &entry.aliases {
            if let Some(matcher) = WordMatcher::new(alias) {
                let count = matcher.count(&search_text);
                if count > 0 {
                    score += count as f32 * self.weights.alias_weight;
                    reasons.push(format!("alias '{alias}' appears {count}x"));
                }
            }
        }

        for keyword in &entry.keywords {
            let Some(matcher) = WordMatcher::new(keyword) else {
                continue;
            };
            let count = matcher.count(&search_text);
            if count > 0 {
                score += count as f32 * self.weights.keyword_weight;
                reasons.push(format!("keyword '{keyword}' appears {count}x"));
            } else if search_text.contains(&keyword.to_lowercase()) {
                // Partial matches earn one flat bonus, not a per-occurrence
                // one. Whole-word and partial scoring are intentionally
                // asymmetric.
                score += self.weights.semantic_weight * 0.5;
                reasons.push(format!("keyword '{keyword}' appears inside a word"));
            }
        }

        if let Some(last_mentioned) = entry.last_mentioned {
            let distance = context_window.len().saturating_sub(last_mentioned);
            let normalized = distance as f32 / self.weights.context_window_size as f32;
            let bonus = (self.weights.recency_decay * (-normalized).exp()).max(0.0);
            if bonus > 0.0 {
                score += bonus;
                reasons.push(format!("mentioned {distance} chars before the cursor"));
            }
        }

        // Importance scales everything accumulated so far. The prompt bonus
        // below is added afterwards, unscaled.
        score *= entry.importance.multiplier();

        let prompt_bonus = match entry.category {
            Category::Character => self.weights.character_prompt_bonus,
            Category::Location => self.weights.location_prompt_bonus,
            _ => 0.0,
        };
        if prompt_bonus > 0.0
            && self.patterns.matches(entry.category, beat_prompt)
            && beat_prompt
                .to_lowercase()
                .contains(&entry.title.to_lowercase())
        {
            score += prompt_bonus;
            let kind = match entry.category {
                Category::Character => "character",
                _ => "location",
            };
            reasons.push(format!("beat prompt focuses on this {kind}"));
        }

        RelevanceScore {
            entry_id: entry.id.clone(),
            score,
            reasons,
        }
    }
}
