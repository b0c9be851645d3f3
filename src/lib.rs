#![forbid(unsafe_code)]

//! @acp:module "Doxcheck Library"
//! @acp:summary "Doc-comment hygiene for C codebases: highlighting, parsing, validation"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # doxcheck
//!
//! Keeps doxygen comments on C functions honest. An external analyzer supplies
//! one [`SignatureRecord`] per function; this crate works from those records.
//!
//! ## Features
//!
//! - **Highlighting**: heuristic tagging of C text into keyword, type, macro,
//!   string, number and comment spans
//! - **Parsing**: doxygen comment lines to structured fields
//! - **Reconciliation**: documented parameters merged with analyzed ones
//! - **Validation**: completeness and comment density checks
//! - **Synthesis**: skeleton blocks for undocumented functions
//!
//! ## Example
//!
//! ```rust,no_run
//! use doxcheck::{config::load_records, describe, validate, Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let records = load_records(&["records".into()], &config)?;
//!
//!     let reconciler = config.reconciler();
//!     for record in &records {
//!         let verdict = validate(record);
//!         let description = describe(record, &reconciler);
//!         println!("{} valid={} {}", record.name, verdict.doxygen_valid, description.description);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod doc;
pub mod error;
pub mod highlight;
pub mod report;

// Re-exports
pub use config::Config;
pub use doc::{
    describe, is_valid, parse_documentation, reconcile, synthesize, validate,
    CanonicalDescription, DocumentationBlock, Parameter, Reconciler, SignatureRecord,
    ValidationResult,
};
pub use error::{DoxError, Result};
pub use highlight::{generate_tags, tag, Category, CategoryConfig, Palette, Tag};
pub use report::{DescriptionTable, Progress, SkipSet, Worklist};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
