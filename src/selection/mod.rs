pub mod budgeting;
pub mod quota;

use crate::entry::CodexEntry;
use crate::scoring::RelevanceScore;

pub use budgeting::{apply_budget, ApproxTokenCounter, BudgetResult, TokenCounter};
pub use quota::{select_by_category, CategoryQuotas};

/// Internal: an entry paired with its relevance verdict, borrowed to avoid
/// cloning content before the budget walk decides admission.
#[derive(Debug, Clone)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CodexEntry,
    pub score: RelevanceScore,
}
