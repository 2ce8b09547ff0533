use codex_relevance::{update_mentions, Category, CodexEntry};
use pretty_assertions::assert_eq;

fn entry(id: &str, title: &str) -> CodexEntry {
    CodexEntry::new(id, title, Category::Character, "content").unwrap()
}

#[test]
fn counts_title_and_alias_mentions_case_insensitively() {
    let alice = entry("e1", "Alice").with_aliases(["Ali"]);
    let text = "Alice met Ali at the gate. Later, alice smiled.";

    let updated = update_mentions(&[alice], text, 500);

    assert_eq!(updated[0].mention_count, Some(3));
    assert_eq!(updated[0].last_mentioned, Some(500));
}

#[test]
fn whole_word_matching_ignores_embedded_names() {
    let castle = entry("e1", "Castle");
    let updated = update_mentions(&[castle], "they reached Newcastle", 100);

    assert_eq!(updated[0].mention_count, None);
    assert_eq!(updated[0].last_mentioned, None);
}

#[test]
fn unmatched_entries_come_back_structurally_equal() {
    let bob = entry("e1", "Bob").with_last_mentioned(42).with_mention_count(7);
    let updated = update_mentions(std::slice::from_ref(&bob), "no names here", 900);

    assert_eq!(updated[0], bob);
}

#[test]
fn mention_counts_accumulate_across_calls() {
    let alice = entry("e1", "Alice");
    let text = "Alice waved. Alice left.";

    let first = update_mentions(&[alice], text, 100);
    assert_eq!(first[0].mention_count, Some(2));
    assert_eq!(first[0].last_mentioned, Some(100));

    let second = update_mentions(&first, text, 200);
    assert_eq!(second[0].mention_count, Some(4));
    assert_eq!(second[0].last_mentioned, Some(200));
}

#[test]
fn input_snapshot_is_never_mutated() {
    let entries = vec![entry("e1", "Alice"), entry("e2", "Bob")];
    let before = entries.clone();

    let _ = update_mentions(&entries, "Alice and Bob argued", 50);

    assert_eq!(entries, before);
}

#[test]
fn empty_text_changes_nothing() {
    let entries = vec![entry("e1", "Alice")];
    let updated = update_mentions(&entries, "", 0);

    assert_eq!(updated, entries);
}
