use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entry::Category;
use crate::selection::ScoredEntry;

/// Per-category admission caps, indexed by [`Category::index`]. The category
/// set is closed, so every category has an explicit quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuotas([usize; Category::COUNT]);

impl Default for CategoryQuotas {
    fn default() -> Self {
        let mut quotas = [0; Category::COUNT];
        quotas[Category::Character.index()] = 5;
        quotas[Category::Location.index()] = 3;
        quotas[Category::Object.index()] = 3;
        quotas[Category::Lore.index()] = 2;
        quotas[Category::Other.index()] = 2;
        CategoryQuotas(quotas)
    }
}

impl CategoryQuotas {
    pub fn new(quotas: [usize; Category::COUNT]) -> Self {
        CategoryQuotas(quotas)
    }

    pub fn get(&self, category: Category) -> usize {
        self.0[category.index()]
    }
}

/// Rank scored candidates and admit them under per-category quotas.
///
/// Candidates must exclude global entries and entries with score <= 0; the
/// pipeline enforces this before calling. The sort is stable, so equal
/// scores keep their incoming relative order, and admitted entries come
/// back in score order with category interleaving preserved.
pub fn select_by_category<'a>(
    mut candidates: Vec<ScoredEntry<'a>>,
    quotas: &CategoryQuotas,
) -> Vec<ScoredEntry<'a>> {
    candidates.sort_by(|a, b| {
        b.score
            .score
            .partial_cmp(&a.score.score)
            .unwrap_or(Ordering::Equal)
    });

    let mut counts = [0usize; Category::COUNT];
    let mut admitted = Vec::new();
    for candidate in candidates {
        let idx = candidate.entry.category.index();
        if counts[idx] < quotas.get(candidate.entry.category) {
            counts[idx] += 1;
            admitted.push(candidate);
        }
    }
    admitted
}
