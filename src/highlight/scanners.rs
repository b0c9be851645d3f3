//! @acp:module "Category Scanners"
//! @acp:summary "Independent classifiers producing tags for each highlight category"
//! @acp:domain highlight
//! @acp:layer core

use std::collections::HashSet;
use std::sync::LazyLock;

use super::split::Word;
use super::{Category, Tag};

/// C keywords, exact match.
pub static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "alignas", "alignof", "auto", "bool", "break", "case", "char", "const", "constexpr",
        "continue", "default", "do", "double", "else", "enum", "extern", "false", "float", "for",
        "goto", "if", "inline", "int", "long", "nullptr", "register", "restrict", "return",
        "short", "signed", "sizeof", "static", "static_assert", "struct", "switch",
        "thread_local", "true", "typedef", "typeof", "typeof_unqual", "union", "unsigned", "void",
        "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// Type names, matched after stripping pointer stars.
pub static TYPES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bool", "char", "flag", "short", "int", "float", "long", "double", "unsigned", "vec3",
        "vec4", "mat3", "mat4",
    ]
    .into_iter()
    .collect()
});

fn tag_words<F>(words: &[Word], category: Category, matches: F) -> Vec<Tag>
where
    F: Fn(&str) -> bool,
{
    words
        .iter()
        .filter(|w| matches(&w.text))
        .map(|w| Tag::new(category, w.start, w.end))
        .collect()
}

/// @acp:summary "Tag words that are C keywords"
pub fn keywords(words: &[Word]) -> Vec<Tag> {
    tag_words(words, Category::Keyword, |w| KEYWORDS.contains(w))
}

/// @acp:summary "Tag words naming a type, including pointer forms like `*int` or `char**`"
pub fn types(words: &[Word]) -> Vec<Tag> {
    tag_words(words, Category::Type, |w| TYPES.contains(w.trim_matches('*')))
}

/// @acp:summary "Tag whole lines starting with `#`"
/// Indented directives are not matched.
pub fn macros(lines: &[Word]) -> Vec<Tag> {
    tag_words(lines, Category::Macro, |l| l.starts_with('#'))
}

/// @acp:summary "Tag words that parse as floating-point literals"
/// One trailing `f` suffix is tolerated; the tag still covers it.
pub fn numbers(words: &[Word]) -> Vec<Tag> {
    tag_words(words, Category::Number, is_number)
}

fn is_number(word: &str) -> bool {
    let literal = word.strip_suffix('f').unwrap_or(word);
    literal.parse::<f64>().is_ok()
}

/// @acp:summary "Tag double-quoted string literals"
/// Every `"` toggles the in-string state; escapes are not understood, so
/// `\"` ends the literal early.
pub fn strings(text: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut open: Option<usize> = None;

    for (i, ch) in text.chars().enumerate() {
        if ch != '"' {
            continue;
        }
        match open.take() {
            Some(start) => tags.push(Tag::new(Category::String, start, i + 1)),
            None => open = Some(i),
        }
    }

    tags
}

/// States of the comment scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentMode {
    None,
    AwaitNext,
    SingleLine,
    MultiLine,
    AwaitFinal,
}

/// @acp:summary "Tag `//` and `/* */` comments"
///
/// `opener` remembers the index of the second opener character, so tags start
/// at `opener - 1`. Inside a block comment, `*` followed by anything but `/`
/// drops back to the block state, which means `**/` does not close a comment.
/// A line comment still open at end of text is tagged to the end.
/// Unterminated block comments produce no tag.
pub fn comments(text: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut mode = CommentMode::None;
    let mut opener = 0;
    let mut len = 0;

    for (i, ch) in text.chars().enumerate() {
        len = i + 1;
        mode = match (mode, ch) {
            (CommentMode::None, '/') => CommentMode::AwaitNext,
            (CommentMode::None, _) => CommentMode::None,
            (CommentMode::AwaitNext, '/') => {
                opener = i;
                CommentMode::SingleLine
            }
            (CommentMode::AwaitNext, '*') => {
                opener = i;
                CommentMode::MultiLine
            }
            (CommentMode::AwaitNext, _) => CommentMode::None,
            (CommentMode::SingleLine, '\r' | '\n') => {
                tags.push(Tag::new(Category::Comment, opener - 1, i));
                CommentMode::None
            }
            (CommentMode::SingleLine, _) => CommentMode::SingleLine,
            (CommentMode::MultiLine, '*') => CommentMode::AwaitFinal,
            (CommentMode::MultiLine, _) => CommentMode::MultiLine,
            (CommentMode::AwaitFinal, '/') => {
                tags.push(Tag::new(Category::Comment, opener - 1, i + 1));
                CommentMode::None
            }
            (CommentMode::AwaitFinal, _) => CommentMode::MultiLine,
        };
    }

    if mode == CommentMode::SingleLine {
        tags.push(Tag::new(Category::Comment, opener - 1, len));
    }

    tags
}
