//! @acp:module "Signature Reconciler"
//! @acp:summary "Merges documented parameters with analyzer-extracted parameters"
//! @acp:domain documentation
//! @acp:layer service
//!
//! # Parameter reconciliation
//!
//! The analyzer and the comment each describe the parameter list, and either
//! can be incomplete. The analyzer marks names it could not resolve with
//! [`UNKNOWN_PARAM`](super::model::UNKNOWN_PARAM).
//!
//! 1. No `@param` lines: there is no parameter list.
//! 2. Counts agree: the analyzer's named parameters are used as they are.
//! 3. Counts differ: each documented name not already known is appended with
//!    type `?`, after the analyzer's parameters and in documentation order.
//!
//! Documented names are the first whitespace-delimited token of the `@param`
//! remainder; a remainder with no token names nothing. Throws descriptions
//! are collected by the parser but are not carried into the canonical
//! description.

use super::model::{
    CanonicalDescription, Classification, DocumentationBlock, Parameter, SignatureRecord,
    DEFAULT_CONSTRUCTOR_MARKER, UNKNOWN_TYPE,
};

/// @acp:summary "Produces canonical descriptions from parsed blocks and records"
#[derive(Debug, Clone)]
pub struct Reconciler {
    constructor_markers: Vec<String>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self {
            constructor_markers: vec![DEFAULT_CONSTRUCTOR_MARKER.to_string()],
        }
    }
}

impl Reconciler {
    /// @acp:summary "Create a reconciler with custom constructor markers"
    pub fn new<I, S>(constructor_markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            constructor_markers: constructor_markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn constructor_markers(&self) -> &[String] {
        &self.constructor_markers
    }

    /// @acp:summary "Reconcile a parsed block against its signature record"
    pub fn reconcile(
        &self,
        block: &DocumentationBlock,
        record: &SignatureRecord,
    ) -> CanonicalDescription {
        CanonicalDescription {
            name: record.name.clone(),
            description: block.description.clone(),
            params: reconcile_params(&block.param_lines, &record.params),
            returns: self.reconcile_returns(block.return_text.as_deref(), &record.returns),
            file: record.file.clone(),
        }
    }

    /// Return text is `"<written>: <classification>"`, dropped entirely for
    /// classifications without a return value, even when text was written.
    fn reconcile_returns(&self, written: Option<&str>, returns: &str) -> Option<String> {
        if !Classification::of(returns, self.constructor_markers.as_slice()).has_return_value() {
            return None;
        }
        Some(format!("{}: {}", written.unwrap_or(""), returns))
    }
}

/// @acp:summary "Reconcile with the default constructor markers"
pub fn reconcile(block: &DocumentationBlock, record: &SignatureRecord) -> CanonicalDescription {
    Reconciler::default().reconcile(block, record)
}

/// @acp:summary "Merge documented parameter lines with analyzer parameters"
pub fn reconcile_params(param_lines: &[String], analyzed: &[Parameter]) -> Option<Vec<Parameter>> {
    if param_lines.is_empty() {
        return None;
    }

    let mut params: Vec<Parameter> = analyzed.iter().filter(|p| p.is_known()).cloned().collect();

    if params.len() != param_lines.len() {
        for line in param_lines {
            let Some(name) = line.split_whitespace().next() else {
                continue;
            };
            if params.iter().any(|p| p.name == name) {
                continue;
            }
            params.push(Parameter::new(name, UNKNOWN_TYPE));
        }
    }

    if params.is_empty() {
        None
    } else {
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::model::UNKNOWN_PARAM;
    use pretty_assertions::assert_eq;

    fn record(params: Vec<Parameter>, returns: &str) -> SignatureRecord {
        SignatureRecord {
            name: "tekStep".to_string(),
            params,
            returns: returns.to_string(),
            doxygen_comment: None,
            file: "src/step.c".to_string(),
            start_line: 10,
            num_lines: 20,
            num_comments: 3,
            hash: None,
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_param_lines_gives_none() {
        let params = vec![Parameter::new("a", "int")];
        assert_eq!(reconcile_params(&[], &params), None);
    }

    #[test]
    fn test_matching_counts_use_analyzer_params() {
        let params = vec![Parameter::new("a", "int"), Parameter::new("b", "float")];
        let result = reconcile_params(&lines(&["x one", "y two"]), &params);
        assert_eq!(result, Some(params));
    }

    #[test]
    fn test_unknown_name_is_recovered_from_docs() {
        let params = vec![Parameter::new(UNKNOWN_PARAM, "int")];
        let result = reconcile_params(&lines(&["count the count"]), &params);
        assert_eq!(result, Some(vec![Parameter::new("count", "?")]));
    }

    #[test]
    fn test_name_is_first_whitespace_token() {
        let params = vec![Parameter::new(UNKNOWN_PARAM, "int")];
        for line in ["  count the count", "\tcount\tthe count", "count"] {
            let result = reconcile_params(&lines(&[line]), &params);
            assert_eq!(result, Some(vec![Parameter::new("count", "?")]), "line {:?}", line);
        }
    }

    #[test]
    fn test_mismatch_keeps_analyzer_order_then_doc_order() {
        let params = vec![
            Parameter::new("a", "int"),
            Parameter::new(UNKNOWN_PARAM, "char *"),
            Parameter::new("c", "float"),
        ];
        let result = reconcile_params(&lines(&["c third", "b second", "a first", "b again"]), &params);
        assert_eq!(
            result,
            Some(vec![
                Parameter::new("a", "int"),
                Parameter::new("c", "float"),
                Parameter::new("b", "?"),
            ])
        );
    }

    #[test]
    fn test_returns_for_value_type() {
        let block = DocumentationBlock {
            return_text: Some("the sum".to_string()),
            ..Default::default()
        };
        let desc = reconcile(&block, &record(vec![], "int"));
        assert_eq!(desc.returns.as_deref(), Some("the sum: int"));

        let desc = reconcile(&DocumentationBlock::default(), &record(vec![], "float"));
        assert_eq!(desc.returns.as_deref(), Some(": float"));
    }

    #[test]
    fn test_returns_suppressed_for_non_value_classifications() {
        let block = DocumentationBlock {
            return_text: Some("written anyway".to_string()),
            ..Default::default()
        };
        for returns in ["void", "exception", "", "tek_init"] {
            assert_eq!(reconcile(&block, &record(vec![], returns)).returns, None);
        }
    }

    #[test]
    fn test_custom_constructor_markers() {
        let reconciler = Reconciler::new(["ctor"]);
        let block = DocumentationBlock::default();
        assert_eq!(reconciler.reconcile(&block, &record(vec![], "ctor")).returns, None);
        assert!(reconciler.reconcile(&block, &record(vec![], "tek_init")).returns.is_some());
    }

    #[test]
    fn test_throws_are_not_carried_over() {
        let block = DocumentationBlock {
            description: "Allocates.".to_string(),
            throws_lines: vec!["MEMORY_EXCEPTION always".to_string()],
            ..Default::default()
        };
        let desc = reconcile(&block, &record(vec![], "exception"));
        assert_eq!(desc.description, "Allocates.");
        assert_eq!(desc.params, None);
        assert_eq!(desc.returns, None);
        assert_eq!(desc.name, "tekStep");
        assert_eq!(desc.file, "src/step.c");
    }
}
