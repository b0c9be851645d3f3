//! @acp:module "Documentation Validator"
//! @acp:summary "Completeness checks for a record's doxygen block and comment density"
//! @acp:domain documentation
//! @acp:layer core
//!
//! A block is valid when every named parameter appears on some `@param` line
//! and, depending on the return classification, a `@throws` or `@return` tag
//! carries text. Parameter matching is substring containment on the whole
//! line, so a parameter `x` is satisfied by `@param max ...`.

use super::model::{SignatureRecord, ValidationResult};

/// Comment density must be strictly above this to be acceptable.
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.1;

/// @acp:summary "Check a record's doxygen block for completeness"
pub fn is_valid(record: &SignatureRecord) -> bool {
    let Some(comment) = &record.doxygen_comment else {
        return false;
    };

    let param_lines: Vec<&str> = comment
        .iter()
        .map(String::as_str)
        .filter(|line| line.contains("@param"))
        .collect();

    let params_documented = record
        .known_params()
        .all(|param| param_lines.iter().any(|line| line.contains(param.name.as_str())));
    if !params_documented {
        return false;
    }

    match record.returns.as_str() {
        "exception" => has_tag_text(comment, "@throws"),
        "void" => true,
        _ => has_tag_text(comment, "@return"),
    }
}

/// Some line holds `tag` followed by non-blank text. `@returns` counts as
/// `@return`.
fn has_tag_text(lines: &[String], tag: &str) -> bool {
    lines.iter().any(|line| {
        let Some(idx) = line.find(tag) else {
            return false;
        };
        let rest = &line[idx + tag.len()..];
        let rest = if tag == "@return" {
            rest.strip_prefix('s').unwrap_or(rest)
        } else {
            rest
        };
        !rest.trim().is_empty()
    })
}

/// @acp:summary "Ratio of comment lines to total lines"
/// Undefined for an empty function body.
pub fn comment_ratio(record: &SignatureRecord) -> Option<f64> {
    if record.num_lines == 0 {
        return None;
    }
    Some(record.num_comments as f64 / record.num_lines as f64)
}

/// @acp:summary "Whether a comment ratio is above the density threshold"
pub fn density_ok(ratio: f64, threshold: f64) -> bool {
    ratio > threshold
}

/// @acp:summary "Validate documentation and measure comment density"
/// An undefined ratio is reported as `0.0`.
pub fn validate(record: &SignatureRecord) -> ValidationResult {
    ValidationResult {
        doxygen_valid: is_valid(record),
        comment_ratio: comment_ratio(record).unwrap_or(0.0),
    }
}
