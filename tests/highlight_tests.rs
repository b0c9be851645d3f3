//! Highlighting integration tests
//!
//! Tagging of C snippets through the public API.

use doxcheck::highlight::split::WORD_DELIMITERS;
use doxcheck::highlight::{render_ansi, split_words, Palette};
use doxcheck::{tag, Category, CategoryConfig, Tag};

/// Characters `start..end` of `text`.
fn slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

fn comment_only() -> CategoryConfig {
    CategoryConfig::new().with(Category::Comment)
}

// =============================================================================
// Tag generation
// =============================================================================

mod tag_generation_tests {
    use super::*;

    #[test]
    fn test_keyword_and_number_in_declaration() {
        let text = "int x = 5;";
        let config = CategoryConfig::new()
            .with(Category::Keyword)
            .with(Category::Number);
        let tags = tag(text, &config);

        assert_eq!(
            tags,
            vec![
                Tag::new(Category::Keyword, 0, 3),
                Tag::new(Category::Number, 8, 9),
            ]
        );
        // `x` and `=` stay untagged
        assert!(!tags.iter().any(|t| t.start <= 4 && 4 < t.end));
        assert!(!tags.iter().any(|t| t.start <= 6 && 6 < t.end));
    }

    #[test]
    fn test_full_configuration_on_a_function() {
        let text = "#include <stdio.h>\nstatic float scale(vec3 *v) {\n    printf(\"%f\", 2.5f); // log\n}\n";
        let tags = tag(text, &CategoryConfig::all());

        let of = |category: Category| -> Vec<String> {
            tags.iter()
                .filter(|t| t.category == category)
                .map(|t| slice(text, t.start, t.end))
                .collect()
        };

        assert_eq!(of(Category::Keyword), vec!["static", "float"]);
        assert_eq!(of(Category::Type), vec!["float", "vec3"]);
        assert_eq!(of(Category::Number), vec!["2.5f"]);
        assert_eq!(of(Category::String), vec!["\"%f\""]);
        assert_eq!(of(Category::Macro), vec!["#include <stdio.h>"]);
        assert_eq!(of(Category::Comment), vec!["// log"]);
    }

    #[test]
    fn test_tags_follow_registration_order() {
        let text = "/* note */ int n = 1;";
        let config = CategoryConfig::new()
            .with(Category::Number)
            .with(Category::Comment)
            .with(Category::Keyword);
        let categories: Vec<Category> = tag(text, &config).iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![Category::Number, Category::Comment, Category::Keyword]
        );
    }

    #[test]
    fn test_tagging_twice_is_identical() {
        let text = "typedef struct { float x; } p; /* a */ char *s = \"q\"; // z";
        let config = CategoryConfig::all();
        assert_eq!(tag(text, &config), tag(text, &config));
    }

    #[test]
    fn test_empty_config_tags_nothing() {
        assert!(tag("int x = 5;", &CategoryConfig::new()).is_empty());
    }
}

// =============================================================================
// Splitting
// =============================================================================

mod split_tests {
    use super::*;

    #[test]
    fn test_words_never_contain_delimiters_and_match_source() {
        let samples = [
            "",
            "int main(void) { return 0; }",
            "a;;b,,c\n\rd",
            "  é ü  x",
            "\0x\0",
            "(((",
            "foo(bar, baz);\r\n",
        ];

        for text in samples {
            for word in split_words(text) {
                assert!(!word.text.is_empty(), "empty word in {:?}", text);
                assert!(
                    !word.text.chars().any(|c| WORD_DELIMITERS.contains(&c)),
                    "delimiter inside {:?}",
                    word.text
                );
                assert_eq!(slice(text, word.start, word.end), word.text);
            }
        }
    }
}

// =============================================================================
// Comment spans
// =============================================================================

mod comment_tests {
    use super::*;

    #[test]
    fn test_block_comment_spans_both_delimiters() {
        let cases = [
            ("int x; ", "/* hello */", " y"),
            ("", "/**/", ""),
            ("a = b * c; ", "/* multi\n * line */", "\nreturn;"),
            ("", "/* a * b */", ";"),
        ];

        for (prefix, block, suffix) in cases {
            let text = format!("{}{}{}", prefix, block, suffix);
            let start = prefix.chars().count();
            let end = start + block.chars().count();
            assert_eq!(
                tag(&text, &comment_only()),
                vec![Tag::new(Category::Comment, start, end)],
                "text {:?}",
                text
            );
        }
    }

    #[test]
    fn test_line_comment_stops_before_terminator() {
        let cases = [
            ("x; ", "// note", "\ny"),
            ("a / b; ", "// c", "\r\n"),
            ("", "// done", ""),
        ];

        for (prefix, comment, suffix) in cases {
            let text = format!("{}{}{}", prefix, comment, suffix);
            let start = prefix.chars().count();
            let end = start + comment.chars().count();
            assert_eq!(
                tag(&text, &comment_only()),
                vec![Tag::new(Category::Comment, start, end)],
                "text {:?}",
                text
            );
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_render_keeps_text_and_adds_styling() {
        let text = "int x = 5; // five";
        let tags = tag(text, &CategoryConfig::all());
        let rendered = render_ansi(text, &tags, &Palette::default());

        assert!(rendered.contains('\u{1b}'));
        assert!(rendered.contains("int"));
        assert!(rendered.contains("// five"));
    }

    #[test]
    fn test_render_without_tags_is_plain() {
        let text = "x = y;";
        assert_eq!(render_ansi(text, &[], &Palette::default()), text);
    }
}
