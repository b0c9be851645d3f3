//! @acp:module "Check Command"
//! @acp:summary "Report documentation validity and comment density per function"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::{load_records, Config};
use crate::doc::validate;
use crate::report::{needs_attention, Worklist};

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Record files or directories
    pub inputs: Vec<PathBuf>,
    /// Output as JSON
    pub json: bool,
    /// Exit with status 1 when any function needs attention
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct CheckEntry<'a> {
    name: &'a str,
    file: &'a str,
    start_line: usize,
    doxygen_valid: bool,
    comment_ratio: f64,
    needs_attention: bool,
}

/// Execute the check command
pub fn execute_check(options: CheckOptions, config: Config) -> Result<()> {
    let records = load_records(&options.inputs, &config)?;
    if records.is_empty() {
        println!("{} No records found", style("•").dim());
        return Ok(());
    }

    let threshold = config.density_threshold;
    let entries: Vec<CheckEntry> = records
        .iter()
        .map(|record| {
            let result = validate(record);
            CheckEntry {
                name: &record.name,
                file: &record.file,
                start_line: record.start_line,
                doxygen_valid: result.doxygen_valid,
                comment_ratio: result.comment_ratio,
                needs_attention: needs_attention(record, threshold),
            }
        })
        .collect();

    let worklist = Worklist::build(&records, threshold);
    tracing::debug!(
        "{} of {} functions need attention",
        worklist.records.len(),
        worklist.total
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_entries(&entries);
        println!();
        let marker = if worklist.is_empty() {
            style("✓").green()
        } else {
            style("→").cyan()
        };
        println!("{} {}", marker, worklist.progress());
    }

    if options.strict && !worklist.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_entries(entries: &[CheckEntry]) {
    let mut current_file = None;
    for entry in entries {
        if current_file != Some(entry.file) {
            println!("{} {}", style("→").cyan(), style(entry.file).bold());
            current_file = Some(entry.file);
        }

        let marker = if entry.needs_attention {
            style("✗").red()
        } else {
            style("✓").green()
        };
        let doxygen = if entry.doxygen_valid {
            style("OK").green()
        } else {
            style("Invalid").red()
        };
        println!(
            "  {} {} {}  Doxygen: {}  Comment: {:.0}%",
            marker,
            entry.name,
            style(format!("(line {})", entry.start_line)).dim(),
            doxygen,
            entry.comment_ratio * 100.0
        );
    }
}
