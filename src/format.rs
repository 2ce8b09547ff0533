//! Serialization of a packed entry list into a prompt context block.

use crate::entry::{Category, CodexEntry};

/// Render entries as a grouped textual block for prompt assembly.
///
/// Entries are grouped by category in first-seen order; each group gets a
/// fixed heading, each entry its bold title followed by its full content.
/// Returns an empty string for empty input. No truncation happens here:
/// staying inside the token budget is the budget optimizer's job, upstream.
pub fn format_entries(entries: &[CodexEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut groups: Vec<(Category, Vec<&CodexEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, group)) => group.push(entry),
            None => groups.push((entry.category, vec![entry])),
        }
    }

    let mut out = String::new();
    for (category, group) in groups {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("## ");
        out.push_str(category.heading());
        out.push('\n');
        for entry in group {
            out.push('\n');
            out.push_str("**");
            out.push_str(&entry.title);
            out.push_str("**\n");
            out.push_str(&entry.content);
            out.push('\n');
        }
    }
    out
}
