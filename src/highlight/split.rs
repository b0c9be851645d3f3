//! @acp:module "Span Splitter"
//! @acp:summary "Breaks raw text into delimiter-bounded words or lines with character offsets"
//! @acp:domain highlight
//! @acp:layer core

/// Delimiters that end a word. An embedded NUL also ends a word.
pub const WORD_DELIMITERS: &[char] = &[' ', '\r', '\n', ';', ',', '(', ')', '{', '}', '\0'];

/// Delimiters that end a line.
pub const LINE_DELIMITERS: &[char] = &['\r', '\n'];

/// @acp:summary "A delimiter-bounded span of source text"
/// Offsets are character indices into the source, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Word {
    fn new(text: String, start: usize, end: usize) -> Self {
        Self { text, start, end }
    }
}

/// @acp:summary "Split text on the word delimiter set"
pub fn split_words(text: &str) -> Vec<Word> {
    split_on(text, WORD_DELIMITERS)
}

/// @acp:summary "Split text into lines, one word per line"
/// Empty lines produce no word.
pub fn split_lines(text: &str) -> Vec<Word> {
    split_on(text, LINE_DELIMITERS)
}

/// Single linear pass. A trailing `None` acts as the end-of-text sentinel so a
/// word touching the end of the text is still flushed.
fn split_on(text: &str, delimiters: &[char]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (i, ch) in text.chars().map(Some).chain(std::iter::once(None)).enumerate() {
        let Some(ch) = ch.filter(|c| !delimiters.contains(c)) else {
            if !current.is_empty() {
                words.push(Word::new(std::mem::take(&mut current), start, i));
            }
            continue;
        };
        if current.is_empty() {
            start = i;
        }
        current.push(ch);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_split_words_basic() {
        let words = split_words("int x = 5;");
        assert_eq!(texts(&words), vec!["int", "x", "=", "5"]);
        assert_eq!((words[0].start, words[0].end), (0, 3));
        assert_eq!((words[3].start, words[3].end), (8, 9));
    }

    #[test]
    fn test_consecutive_delimiters_produce_no_empty_words() {
        let words = split_words("f(a,  b);;\n\n{ }");
        assert_eq!(texts(&words), vec!["f", "a", "b"]);
    }

    #[test]
    fn test_word_at_end_of_text_is_emitted() {
        let words = split_words("return value");
        assert_eq!(words.last().unwrap().text, "value");
        assert_eq!(words.last().unwrap().end, 12);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_words("").is_empty());
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_offsets_are_character_indices() {
        let text = "é ü x";
        let words = split_words(text);
        assert_eq!(texts(&words), vec!["é", "ü", "x"]);
        assert_eq!((words[2].start, words[2].end), (4, 5));
    }

    #[test]
    fn test_spans_match_source_text() {
        let text = "static void tick(float dt) {\r\n    count += 1;\n}";
        let chars: Vec<char> = text.chars().collect();
        for word in split_words(text) {
            let slice: String = chars[word.start..word.end].iter().collect();
            assert_eq!(slice, word.text);
            assert!(!word.text.contains(WORD_DELIMITERS));
        }
    }

    #[test]
    fn test_split_lines_keeps_line_text() {
        let words = split_lines("#include <stdio.h>\r\nint main(void) {\n}");
        assert_eq!(
            texts(&words),
            vec!["#include <stdio.h>", "int main(void) {", "}"]
        );
        assert_eq!(words[1].start, 20);
    }
}
