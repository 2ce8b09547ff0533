use regex::Regex;

use crate::entry::Category;

/// Strategy deciding whether a beat prompt reads like an instruction that
/// foregrounds a given category (e.g. "describe X", "dialog with X" for
/// characters, scene-setting phrasing for locations).
///
/// Pattern sets are locale-specific heuristics, so they live behind this
/// trait instead of being hardcoded into the scoring path.
pub trait PromptPatternMatcher {
    fn matches(&self, category: Category, beat_prompt: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    German,
}

/// Built-in pattern sets for the supported locales. Regexes are compiled
/// once at construction; only `character` and `location` carry patterns,
/// the other categories never earn a prompt bonus.
#[derive(Debug)]
pub struct LocalePatterns {
    character: Vec<Regex>,
    location: Vec<Regex>,
}

impl LocalePatterns {
    pub fn new(locale: Locale) -> Self {
        let (character, location): (&[&str], &[&str]) = match locale {
            Locale::English => (
                &[
                    r"(?i)\bdescribe\b",
                    r"(?i)\bdialog(?:ue)?\b",
                    r"(?i)\bconversation\b",
                    r"(?i)\b(?:says?|said|speaks?|spoke|talks?|asks?|asked|tells?|told|repl(?:y|ies|ied)|whispers?|shouts?)\b",
                ],
                &[
                    r"(?i)\bdescribe\b",
                    r"(?i)\b(?:arrives?|arrived|enters?|entered|travels?|travelled|returns?|returned|reach(?:es|ed)?)\b",
                    r"(?i)\b(?:in|at|into|inside|near|through|toward|towards)\b",
                    r"(?i)\b(?:scene|setting)\b",
                ],
            ),
            Locale::German => (
                &[
                    r"(?i)\bbeschreib(?:e|t|en)?\b",
                    r"(?i)\bdialog\b",
                    r"(?i)\bgespr(?:ä|ae?)ch\b",
                    r"(?i)\b(?:sagt?|sagen|sprich(?:t)?|sprechen|sprach|fragt?|fragen|antwortet?|antworten|flüstert?|ruft|erzähl(?:t|en)?)\b",
                ],
                &[
                    r"(?i)\bbeschreib(?:e|t|en)?\b",
                    r"(?i)\b(?:ankomm(?:t|en)?|kommt\s+an|betritt|betreten|erreich(?:t|en)?|reis(?:t|en))\b",
                    r"(?i)\b(?:in|im|am|an|auf|bei|nach|zum|zur|durch)\b",
                    r"(?i)\b(?:szene|schauplatz)\b",
                ],
            ),
        };

        let compile = |patterns: &[&str]| {
            patterns
                .iter()
                .map(|p| Regex::new(p).expect("built-in pattern must compile"))
                .collect()
        };

        LocalePatterns {
            character: compile(character),
            location: compile(location),
        }
    }

    pub fn english() -> Self {
        LocalePatterns::new(Locale::English)
    }

    pub fn german() -> Self {
        LocalePatterns::new(Locale::German)
    }
}

impl PromptPatternMatcher for LocalePatterns {
    fn matches(&self, category: Category, beat_prompt: &str) -> bool {
        let patterns = match category {
            Category::Character => &self.character,
            Category::Location => &self.location,
            _ => return false,
        };
        patterns.iter().any(|re| re.is_match(beat_prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_patterns_match_speech_prompts() {
        let patterns = LocalePatterns::english();
        assert!(patterns.matches(Category::Character, "Alice says goodbye"));
        assert!(patterns.matches(Category::Character, "describe Alice"));
        assert!(!patterns.matches(Category::Character, "a quiet morning"));
    }

    #[test]
    fn location_patterns_match_scene_setting_prompts() {
        let patterns = LocalePatterns::english();
        assert!(patterns.matches(Category::Location, "they arrive at the castle"));
        assert!(!patterns.matches(Category::Location, "sword fight"));
    }

    #[test]
    fn other_categories_never_match() {
        let patterns = LocalePatterns::english();
        assert!(!patterns.matches(Category::Lore, "describe the prophecy"));
        assert!(!patterns.matches(Category::Object, "describe the sword"));
    }

    #[test]
    fn german_patterns_cover_both_categories() {
        let patterns = LocalePatterns::german();
        assert!(patterns.matches(Category::Character, "Alice sagt leise Lebewohl"));
        assert!(patterns.matches(Category::Location, "sie kommen im Schloss an"));
    }
}
