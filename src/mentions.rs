//! Post-generation mention bookkeeping.

use std::iter;

use crate::entry::CodexEntry;
use crate::matching::WordMatcher;

/// Re-scan freshly generated text and update each entry's mention state.
///
/// For every entry, counts whole-word occurrences of the title plus every
/// alias in `generated_text`. Matched entries come back with
/// `last_mentioned = text_position` and their mention count raised by the
/// number of matches; unmatched entries come back structurally equal, so
/// callers can cheaply detect which entries actually changed.
///
/// Pure: the input snapshot is never mutated, a new list is returned for
/// the caller to persist.
pub fn update_mentions(
    entries: &[CodexEntry],
    generated_text: &str,
    text_position: usize,
) -> Vec<CodexEntry> {
    entries
        .iter()
        .map(|entry| {
            let total_mentions: u32 = iter::once(&entry.title)
                .chain(entry.aliases.iter())
                .filter_map(|term| WordMatcher::new(term))
                .map(|matcher| matcher.count(generated_text) as u32)
                .sum();

            if total_mentions == 0 {
                return entry.clone();
            }

            let mut updated = entry.clone();
            updated.last_mentioned = Some(text_position);
            updated.mention_count = Some(entry.mention_count.unwrap_or(0) + total_mentions);
            updated
        })
        .collect()
}
