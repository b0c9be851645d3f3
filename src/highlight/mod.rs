//! @acp:module "Highlighter"
//! @acp:summary "Heuristic lexical tagging of C source text into highlight categories"
//! @acp:domain highlight
//! @acp:layer core
//!
//! # Highlighting
//!
//! The tagger is delimiter based, not a real lexer. Text is split once into
//! words and once into lines, then each enabled category runs its own scanner:
//!
//! - **Keyword**, **Type**, **Number** classify split words
//! - **Macro** classifies whole lines starting with `#`
//! - **String** and **Comment** scan raw characters with small state machines
//!
//! Tags are concatenated in the order categories were enabled in the
//! [`CategoryConfig`]. That order is also the paint order: when spans overlap
//! (a keyword inside a comment), the category enabled later wins.
//!
//! ```rust,ignore
//! use doxcheck::highlight::{tag, Category, CategoryConfig};
//!
//! let config = CategoryConfig::new()
//!     .with(Category::Keyword)
//!     .with(Category::Number);
//! let tags = tag("int x = 5;", &config);
//! assert_eq!(tags.len(), 2);
//! ```

pub mod palette;
pub mod scanners;
pub mod split;

pub use palette::{render_ansi, Colour, Palette};
pub use split::{split_lines, split_words, Word};

use serde::{Deserialize, Serialize};

use crate::error::DoxError;

/// @acp:summary "Highlight category of a tagged span"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keyword,
    Type,
    Macro,
    String,
    Number,
    Comment,
}

impl Category {
    /// Every category, in the default registration order.
    pub const ALL: [Category; 6] = [
        Category::Keyword,
        Category::Type,
        Category::Number,
        Category::String,
        Category::Macro,
        Category::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Macro => "macro",
            Category::String => "string",
            Category::Number => "number",
            Category::Comment => "comment",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = DoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(Category::Keyword),
            "type" => Ok(Category::Type),
            "macro" => Ok(Category::Macro),
            "string" => Ok(Category::String),
            "number" => Ok(Category::Number),
            "comment" => Ok(Category::Comment),
            _ => Err(DoxError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "A classified, offset-bounded region of source text"
/// Offsets are character indices, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Tag {
    pub fn new(category: Category, start: usize, end: usize) -> Self {
        Self {
            category,
            start,
            end,
        }
    }
}

/// @acp:summary "Ordered set of enabled highlight categories"
/// Registration order decides both scanner order and paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryConfig {
    categories: Vec<Category>,
}

impl CategoryConfig {
    /// An empty configuration; nothing is tagged.
    pub fn new() -> Self {
        Self::default()
    }

    /// All categories in the default order.
    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    /// Builder form of [`enable`](Self::enable).
    pub fn with(mut self, category: Category) -> Self {
        self.enable(category);
        self
    }

    /// Enable a category. Re-enabling keeps its original position.
    pub fn enable(&mut self, category: Category) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Parse category names, keeping first-seen order.
    pub fn from_names<I, S>(names: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::new();
        for name in names {
            config.enable(name.as_ref().parse()?);
        }
        Ok(config)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<Category> for CategoryConfig {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        let mut config = Self::new();
        for category in iter {
            config.enable(category);
        }
        config
    }
}

/// @acp:summary "Run the enabled scanners and concatenate their tags"
/// Tags are grouped by category in registration order and are not sorted by
/// position.
pub fn generate_tags(text: &str, config: &CategoryConfig) -> Vec<Tag> {
    let words = split_words(text);
    let lines = split_lines(text);

    let mut tags = Vec::new();
    for category in config.iter() {
        let found = match category {
            Category::Keyword => scanners::keywords(&words),
            Category::Type => scanners::types(&words),
            Category::Number => scanners::numbers(&words),
            Category::String => scanners::strings(text),
            Category::Macro => scanners::macros(&lines),
            Category::Comment => scanners::comments(text),
        };
        tags.extend(found);
    }
    tags
}

/// Caller-facing alias of [`generate_tags`].
pub fn tag(text: &str, config: &CategoryConfig) -> Vec<Tag> {
    generate_tags(text, config)
}
