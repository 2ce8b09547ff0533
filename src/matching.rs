use regex::Regex;

/// Case-insensitive whole-word matcher for a single user-authored term.
///
/// Every regex metacharacter in the term is escaped before the pattern is
/// compiled, so adversarial input like a title of `"(.*"` can never produce
/// a pattern error at match time.
#[derive(Debug)]
pub struct WordMatcher {
    re: Regex,
}

impl WordMatcher {
    /// Compile a matcher for `term`. Returns `None` for empty or
    /// whitespace-only terms, which would otherwise match everywhere.
    pub fn new(term: &str) -> Option<Self> {
        if term.trim().is_empty() {
            return None;
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        // Escaped input cannot produce an invalid pattern, but degrade to
        // "no matcher" rather than panic if it somehow does.
        Regex::new(&pattern).ok().map(|re| WordMatcher { re })
    }

    /// Number of whole-word occurrences of the term in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.re.find_iter(text).count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}
