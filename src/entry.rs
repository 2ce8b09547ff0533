use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Entry id must not be empty")]
    EmptyId,
    #[error("Entry title must not be empty")]
    EmptyTitle,
}

/// Stable identifier assigned by the entry store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Closed category set. Quota counters index into a fixed array via
/// [`Category::index`], so there is no "unknown category" fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Character,
    Location,
    Object,
    Lore,
    Other,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Character,
        Category::Location,
        Category::Object,
        Category::Lore,
        Category::Other,
    ];

    /// Dense index into per-category arrays.
    pub fn index(self) -> usize {
        match self {
            Category::Character => 0,
            Category::Location => 1,
            Category::Object => 2,
            Category::Lore => 3,
            Category::Other => 4,
        }
    }

    /// Heading used by the prompt formatter.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Character => "Characters",
            Category::Location => "Locations",
            Category::Object => "Objects",
            Category::Lore => "Background",
            Category::Other => "Other",
        }
    }
}

/// Coarse priority tier. Multiplies the accumulated relevance score and
/// orders entries inside the token budget walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Major,
    #[default]
    Minor,
    Background,
}

impl Importance {
    /// Multiplier applied to the entire accumulated score.
    pub fn multiplier(self) -> f32 {
        match self {
            Importance::Major => 1.5,
            Importance::Minor => 1.0,
            Importance::Background => 0.5,
        }
    }

    /// Budget ordering rank: major(3) > minor(2) > background(1).
    pub fn priority(self) -> u8 {
        match self {
            Importance::Major => 3,
            Importance::Minor => 2,
            Importance::Background => 1,
        }
    }
}

/// A worldbuilding fact that may be injected into a generation prompt.
///
/// Entries are logically immutable: the engine never mutates a caller-owned
/// entry. The mention tracker is the only component that produces updated
/// entries, and it does so copy-on-write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodexEntry {
    pub id: EntryId,
    pub title: String,
    pub category: Category,
    /// Free text injected into prompts when the entry is selected.
    pub content: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub importance: Importance,
    /// When true the entry bypasses scoring and category caps and is always
    /// a budget-optimizer candidate.
    #[serde(default)]
    pub global_include: bool,
    /// Offset into generated text where the entry was last detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mentioned: Option<usize>,
    /// Cumulative mention count, monotonically non-decreasing once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_count: Option<u32>,
}

impl CodexEntry {
    /// Construct a validated entry. Empty ids and titles are rejected here
    /// so the matching layer never sees a degenerate search term.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        content: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EntryError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EntryError::EmptyTitle);
        }

        Ok(CodexEntry {
            id: EntryId::new(id),
            title,
            category,
            content: content.into(),
            aliases: Vec::new(),
            keywords: Vec::new(),
            importance: Importance::default(),
            global_include: false,
            last_mentioned: None,
            mention_count: None,
        })
    }

    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    pub fn global(mut self) -> Self {
        self.global_include = true;
        self
    }

    pub fn with_last_mentioned(mut self, offset: usize) -> Self {
        self.last_mentioned = Some(offset);
        self
    }

    pub fn with_mention_count(mut self, count: u32) -> Self {
        self.mention_count = Some(count);
        self
    }
}
