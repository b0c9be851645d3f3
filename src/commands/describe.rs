//! @acp:module "Describe Command"
//! @acp:summary "Print reconciled function descriptions grouped by file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::{load_records, Config};
use crate::doc::{describe, CanonicalDescription};
use crate::report::{DescriptionTable, SkipSet};

/// Options for the describe command
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Record files or directories
    pub inputs: Vec<PathBuf>,
    /// Output as JSON
    pub json: bool,
    /// Skip-set file overriding the configured one
    pub ignore: Option<PathBuf>,
}

/// Execute the describe command
pub fn execute_describe(options: DescribeOptions, config: Config) -> Result<()> {
    let records = load_records(&options.inputs, &config)?;

    let skip = match &options.ignore {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            SkipSet::parse(&content)
        }
        None => config.skip_set()?,
    };

    let reconciler = config.reconciler();
    let mut skipped = 0;
    let descriptions: Vec<CanonicalDescription> = records
        .iter()
        .filter(|record| {
            let ignored = skip.skips(record);
            if ignored {
                skipped += 1;
            }
            !ignored
        })
        .filter(|record| record.doxygen_comment.is_some())
        .map(|record| describe(record, &reconciler))
        .collect();
    tracing::debug!("Skipped {} ignored records", skipped);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&descriptions)?);
        return Ok(());
    }

    let table = DescriptionTable::build(&descriptions);
    if table.is_empty() {
        println!("{} No documented functions found", style("•").dim());
        return Ok(());
    }

    for file_table in &table.files {
        println!("{}", file_table.render());
    }
    println!(
        "{} {} functions in {} files",
        style("✓").green(),
        table.row_count(),
        table.files.len()
    );

    Ok(())
}
