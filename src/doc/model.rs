//! @acp:module "Documentation Model"
//! @acp:summary "Signature records, parsed blocks and canonical descriptions"
//! @acp:domain documentation
//! @acp:layer model

use serde::{Deserialize, Serialize};

/// Name the analyzer uses for a parameter it could not identify.
pub const UNKNOWN_PARAM: &str = "<unknown>";

/// Type used for parameters that only appear in documentation.
pub const UNKNOWN_TYPE: &str = "?";

/// Constructor-like return classification used by default.
pub const DEFAULT_CONSTRUCTOR_MARKER: &str = "tek_init";

/// @acp:summary "A function parameter"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
        }
    }

    /// Whether the analyzer resolved this parameter's name.
    pub fn is_known(&self) -> bool {
        self.name != UNKNOWN_PARAM
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.r#type)
    }
}

/// @acp:summary "Function signature as reported by the external analyzer"
/// Consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Return classification: `void`, `exception`, a type name, or an
    /// analyzer-internal marker.
    #[serde(default)]
    pub returns: String,
    #[serde(default)]
    pub doxygen_comment: Option<Vec<String>>,
    pub file: String,
    #[serde(default)]
    pub start_line: usize,
    #[serde(default)]
    pub num_lines: usize,
    #[serde(default)]
    pub num_comments: usize,
    /// Content hash supplied by the analyzer, used by skip-sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl SignatureRecord {
    /// Parameters the analyzer managed to name.
    pub fn known_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.is_known())
    }
}

/// @acp:summary "Coarse return classification of a record"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Void,
    Exception,
    /// Empty classification string.
    Unspecified,
    Constructor,
    Value(&'a str),
}

impl<'a> Classification<'a> {
    /// Classify a `returns` string. Anything unrecognised is a value type.
    pub fn of<S: AsRef<str>>(returns: &'a str, constructor_markers: &[S]) -> Self {
        match returns {
            "void" => Classification::Void,
            "exception" => Classification::Exception,
            "" => Classification::Unspecified,
            r if constructor_markers.iter().any(|m| m.as_ref() == r) => {
                Classification::Constructor
            }
            r => Classification::Value(r),
        }
    }

    /// Whether a written return description is meaningful for this
    /// classification.
    pub fn has_return_value(&self) -> bool {
        matches!(self, Classification::Value(_))
    }
}

/// @acp:summary "Structured fields of a parsed documentation comment"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentationBlock {
    pub description: String,
    /// `@param` remainders: name followed by free text.
    pub param_lines: Vec<String>,
    pub throws_lines: Vec<String>,
    pub return_text: Option<String>,
}

impl DocumentationBlock {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.param_lines.is_empty()
            && self.throws_lines.is_empty()
            && self.return_text.is_none()
    }
}

/// @acp:summary "Reconciled documentation of one function"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalDescription {
    pub name: String,
    pub description: String,
    /// Never empty when present; names are unique.
    pub params: Option<Vec<Parameter>>,
    pub returns: Option<String>,
    pub file: String,
}

/// @acp:summary "Documentation verdict for one record"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub doxygen_valid: bool,
    pub comment_ratio: f64,
}
