use std::iter;

use codex_relevance::{apply_budget, ApproxTokenCounter, Category, CodexEntry, Importance};

fn entry(id: &str, content_len: usize) -> CodexEntry {
    CodexEntry::new(id, format!("Title {id}"), Category::Lore, "x".repeat(content_len)).unwrap()
}

fn ids(entries: &[CodexEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn packed_cost_never_exceeds_the_budget() {
    // Costs: 25, 500, 750 tokens.
    let entries = [entry("a", 100), entry("b", 2000), entry("c", 3000)];
    let result = apply_budget(iter::empty(), entries.iter(), 1000, &ApproxTokenCounter);

    assert_eq!(ids(&result.packed), vec!["a", "b"]);
    assert!((result.tokens_used - 525.0).abs() < 1e-3);
    assert!(result.tokens_used <= 1000.0);
    assert_eq!(result.excluded_by_budget, 1);
}

#[test]
fn skipping_an_entry_does_not_stop_the_walk() {
    // 750 fits, 500 would overflow, the cheap 25 after it still fits.
    let entries = [entry("big", 3000), entry("mid", 2000), entry("small", 100)];
    let result = apply_budget(iter::empty(), entries.iter(), 800, &ApproxTokenCounter);

    assert_eq!(ids(&result.packed), vec!["big", "small"]);
    assert_eq!(result.excluded_by_budget, 1);
}

#[test]
fn globals_sort_before_higher_importance_non_globals() {
    let global = entry("global", 40)
        .with_importance(Importance::Background)
        .global();
    let major = entry("major", 40).with_importance(Importance::Major);

    let result = apply_budget([&global], [&major], 1000, &ApproxTokenCounter);

    assert_eq!(ids(&result.packed), vec!["global", "major"]);
}

#[test]
fn importance_orders_entries_within_the_same_globalness() {
    let background = entry("background", 40).with_importance(Importance::Background);
    let major = entry("major", 40).with_importance(Importance::Major);
    let minor = entry("minor", 40).with_importance(Importance::Minor);

    let result = apply_budget(
        iter::empty(),
        [&background, &major, &minor],
        1000,
        &ApproxTokenCounter,
    );

    assert_eq!(ids(&result.packed), vec!["major", "minor", "background"]);
}

#[test]
fn equal_priority_preserves_incoming_order() {
    let first = entry("first", 40);
    let second = entry("second", 40);
    let third = entry("third", 40);

    let result = apply_budget(iter::empty(), [&first, &second, &third], 1000, &ApproxTokenCounter);

    assert_eq!(ids(&result.packed), vec!["first", "second", "third"]);
}

#[test]
fn zero_budget_yields_nothing_even_with_globals() {
    let global = entry("global", 0).global();
    let result = apply_budget([&global], iter::empty(), 0, &ApproxTokenCounter);

    assert!(result.packed.is_empty());
    assert_eq!(result.tokens_used, 0.0);
    assert_eq!(result.excluded_by_budget, 1);
}

#[test]
fn oversized_global_is_not_budget_exempt() {
    // A 20k-char global estimates at 5000 tokens. Globals sort first but go
    // through the same running-total check as everything else, so a budget
    // of 1000 excludes it.
    let global = entry("global", 20_000).global();
    let small = entry("small", 100);

    let result = apply_budget([&global], [&small], 1000, &ApproxTokenCounter);

    assert_eq!(ids(&result.packed), vec!["small"]);
    assert_eq!(result.excluded_by_budget, 1);
}

#[test]
fn empty_input_yields_empty_output() {
    let result = apply_budget(iter::empty(), iter::empty(), 1000, &ApproxTokenCounter);
    assert!(result.packed.is_empty());
    assert_eq!(result.tokens_used, 0.0);
    assert_eq!(result.excluded_by_budget, 0);
}
