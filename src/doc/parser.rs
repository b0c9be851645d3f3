//! @acp:module "Documentation Parser"
//! @acp:summary "Turns raw doxygen comment lines into a DocumentationBlock"
//! @acp:domain documentation
//! @acp:layer core
//!
//! Parsing never fails. Non-empty lines that match no tag are folded into the
//! description verbatim, a bare ` *` included, so malformed or absent
//! comments just yield an empty block.

use super::model::{DocumentationBlock, SignatureRecord};

const OPEN_MARKER: &str = "/**";
const CLOSE_MARKER: &str = " */";
const LINE_MARKER: &str = " * ";

/// Tried in order; the first matching prefix is stripped.
const PARAM_PREFIXES: [&str; 4] = ["@param ", "@param[in] ", "@param[out] ", "@param[in/out] "];

/// @acp:summary "Parse the record's own doxygen comment"
/// A record without a comment parses to an empty block.
pub fn parse_record(record: &SignatureRecord) -> DocumentationBlock {
    match &record.doxygen_comment {
        Some(lines) => parse_documentation(lines, record),
        None => DocumentationBlock::default(),
    }
}

/// @acp:summary "Parse raw comment lines into structured fields"
/// The record is accepted for symmetry with the rest of the pipeline; parsing
/// itself only looks at the lines.
pub fn parse_documentation<S: AsRef<str>>(
    lines: &[S],
    _record: &SignatureRecord,
) -> DocumentationBlock {
    parse_lines(lines)
}

/// @acp:summary "Parse comment lines without an owning record"
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> DocumentationBlock {
    let mut block = DocumentationBlock::default();

    for raw in lines {
        let raw = raw.as_ref();
        if raw.starts_with(OPEN_MARKER) || raw.starts_with(CLOSE_MARKER) {
            continue;
        }
        let line = raw.strip_prefix(LINE_MARKER).unwrap_or(raw);

        if let Some(rest) = line.strip_prefix("@brief") {
            block.description.push_str(rest);
        } else if let Some(rest) = line.strip_prefix("@note") {
            block.description.push_str(" NOTE:");
            block.description.push_str(rest);
        } else if line.starts_with("@param") {
            block.param_lines.push(strip_param_prefix(line).to_string());
        } else if line.starts_with("@throws") {
            let rest = line.strip_prefix("@throws ").unwrap_or(line);
            block.throws_lines.push(rest.to_string());
        } else if line.starts_with("@return") {
            block.return_text = Some(return_remainder(line).to_string());
        } else if !line.is_empty() {
            block.description.push(' ');
            block.description.push_str(line);
        }
    }

    block.description = block.description.trim().to_string();
    block
}

fn strip_param_prefix(line: &str) -> &str {
    PARAM_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .unwrap_or(line)
}

fn return_remainder(line: &str) -> &str {
    let rest = line
        .strip_prefix("@return ")
        .or_else(|| line.strip_prefix("@returns "))
        .unwrap_or(line);
    let rest = rest.strip_suffix('.').unwrap_or(rest);
    rest.strip_suffix(". ").unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_brief_and_params() {
        let block = parse_lines(&[
            "/**",
            " * @brief Does a thing.",
            " * @param a the first value",
            " * @param[in] b the second",
            " * @param[out] c output",
            " * @param[in/out] d both ways",
            " */",
        ]);
        assert_eq!(block.description, "Does a thing.");
        assert_eq!(
            block.param_lines,
            vec!["a the first value", "b the second", "c output", "d both ways"]
        );
        assert!(block.return_text.is_none());
    }

    #[test]
    fn test_note_and_continuation() {
        let block = parse_lines(&[
            " * @brief Steps the world.",
            " * Runs every frame.",
            " * @note not thread safe",
        ]);
        assert_eq!(
            block.description,
            "Steps the world. Runs every frame. NOTE: not thread safe"
        );

        let block = parse_lines(&[
            " * @brief Steps the world.",
            " *",
            " * @note not thread safe",
        ]);
        assert_eq!(block.description, "Steps the world.  * NOTE: not thread safe");
    }

    #[test]
    fn test_return_variants_last_wins() {
        let block = parse_lines(&[" * @return the count.", " * @returns total length. "]);
        assert_eq!(block.return_text.as_deref(), Some("total length"));

        let block = parse_lines(&[" * @return the count."]);
        assert_eq!(block.return_text.as_deref(), Some("the count"));
    }

    #[test]
    fn test_throws_lines_collected() {
        let block = parse_lines(&[" * @throws MEMORY_EXCEPTION if allocation fails", " * @throws"]);
        assert_eq!(
            block.throws_lines,
            vec!["MEMORY_EXCEPTION if allocation fails", "@throws"]
        );
    }

    #[test]
    fn test_empty_lines_are_ignored() {
        let block = parse_lines(&["/**", " * ", "", " */"]);
        assert!(block.is_empty());
    }

    #[test]
    fn test_bare_star_is_continuation_text() {
        let block = parse_lines(&[
            "/**",
            " * @brief Steps.",
            " *",
            " * Runs each frame.",
            " */",
        ]);
        assert_eq!(block.description, "Steps.  * Runs each frame.");

        let block = parse_lines(&[" * @brief Steps.", "   "]);
        assert_eq!(block.description, "Steps.");
    }

    #[test]
    fn test_unrecognised_param_prefix_kept_whole() {
        let block = parse_lines(&[" * @params x y"]);
        assert_eq!(block.param_lines, vec!["@params x y"]);
    }

    #[test]
    fn test_lines_without_marker() {
        let block = parse_lines(&["@brief Bare", "@param x value"]);
        assert_eq!(block.description, "Bare");
        assert_eq!(block.param_lines, vec!["x value"]);
    }
}
