//! @acp:module "Documentation"
//! @acp:summary "Parse, reconcile, validate and synthesize doxygen blocks"
//! @acp:domain documentation
//! @acp:layer service
//!
//! # Documentation pipeline
//!
//! Data flows one way, from an external [`SignatureRecord`] to either a
//! canonical description or a validity verdict:
//!
//! - [`parse_documentation`]: raw comment lines to a [`DocumentationBlock`]
//! - [`reconcile`]: block plus record to a [`CanonicalDescription`]
//! - [`validate`]: record to a [`ValidationResult`]
//! - [`synthesize`]: record to a skeleton block for missing documentation
//!
//! Every stage is a pure function of its input.

pub mod model;
pub mod parser;
pub mod reconcile;
pub mod synthesize;
pub mod validate;

pub use model::{
    CanonicalDescription, Classification, DocumentationBlock, Parameter, SignatureRecord,
    ValidationResult, DEFAULT_CONSTRUCTOR_MARKER, UNKNOWN_PARAM, UNKNOWN_TYPE,
};
pub use parser::{parse_documentation, parse_lines, parse_record};
pub use reconcile::{reconcile, reconcile_params, Reconciler};
pub use synthesize::{splice_block, synthesize};
pub use validate::{comment_ratio, density_ok, is_valid, validate, DEFAULT_DENSITY_THRESHOLD};

/// @acp:summary "Parse and reconcile a record's own documentation"
pub fn describe(record: &SignatureRecord, reconciler: &Reconciler) -> CanonicalDescription {
    reconciler.reconcile(&parse_record(record), record)
}
