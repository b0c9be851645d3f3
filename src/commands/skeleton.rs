//! @acp:module "Skeleton Command"
//! @acp:summary "Insert skeleton doxygen blocks above undocumented functions"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Without `--apply` the changes are only previewed as a diff. Functions that
//! already carry a doxygen block are left alone unless `--all` is given.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use similar::{Algorithm, ChangeTag, TextDiff};

use crate::config::{load_records, Config};
use crate::doc::{is_valid, splice_block, synthesize, SignatureRecord};

/// Options for the skeleton command
#[derive(Debug, Clone)]
pub struct SkeletonOptions {
    /// Record files or directories
    pub inputs: Vec<PathBuf>,
    /// Write the changes back to the source files
    pub apply: bool,
    /// Generate for every function, even those that already have a block
    pub all: bool,
}

/// Records chosen for a skeleton block.
#[derive(Debug, Default)]
struct Selection<'a> {
    targets: Vec<&'a SignatureRecord>,
    /// Records that already carry a block: skipped by default, stacked on
    /// with `--all`.
    with_block: Vec<&'a SignatureRecord>,
}

/// Without `all`, only invalid records with no block at all are targeted.
fn select(records: &[SignatureRecord], all: bool) -> Selection<'_> {
    let mut selection = Selection::default();
    for record in records {
        let has_block = record.doxygen_comment.is_some();
        if all {
            selection.targets.push(record);
            if has_block {
                selection.with_block.push(record);
            }
        } else if !is_valid(record) {
            if has_block {
                selection.with_block.push(record);
            } else {
                selection.targets.push(record);
            }
        }
    }
    selection
}

/// Execute the skeleton command
pub fn execute_skeleton(options: SkeletonOptions, config: Config) -> Result<()> {
    let records = load_records(&options.inputs, &config)?;
    let selection = select(&records, options.all);

    for record in &selection.with_block {
        if options.all {
            tracing::warn!(
                "{} ({}:{}) already has a doxygen block; a second one will be added above it",
                record.name,
                record.file,
                record.start_line
            );
        } else {
            println!(
                "{} {} ({}:{}) has an incomplete doxygen block, left unchanged",
                style("•").dim(),
                record.name,
                record.file,
                record.start_line
            );
        }
    }

    let mut by_file: BTreeMap<&str, Vec<&SignatureRecord>> = BTreeMap::new();
    for record in selection.targets {
        by_file.entry(record.file.as_str()).or_default().push(record);
    }

    if by_file.is_empty() {
        println!("{} No function is missing a doxygen block", style("✓").green());
        return Ok(());
    }

    let mut inserted = 0;
    for (file, mut targets) in by_file {
        let source = match std::fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", file, e);
                eprintln!("{} Could not read {}", style("✗").red(), file);
                continue;
            }
        };

        // Bottom-up so earlier start lines stay valid.
        targets.sort_by(|a, b| b.start_line.cmp(&a.start_line));
        let updated = targets.iter().fold(source.clone(), |text, record| {
            splice_block(&text, record.start_line, &synthesize(record))
        });
        inserted += targets.len();

        if options.apply {
            std::fs::write(file, &updated).with_context(|| format!("Failed to write {}", file))?;
            println!(
                "{} {} ({} blocks)",
                style("✓").green(),
                file,
                targets.len()
            );
        } else {
            print_diff(file, &source, &updated);
        }
    }

    let verb = if options.apply { "Inserted" } else { "Would insert" };
    println!("{} {} {} skeleton blocks", style("→").cyan(), verb, inserted);

    Ok(())
}

fn print_diff(file: &str, old: &str, new: &str) {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(old, new);

    println!("{}", style(format!("--- {}", file)).bold());
    println!("{}", style(format!("+++ {}", file)).bold());
    for group in diff.grouped_ops(3) {
        for op in group {
            for change in diff.iter_changes(&op) {
                let line = change.value().trim_end_matches('\n');
                match change.tag() {
                    ChangeTag::Delete => println!("{}", style(format!("-{}", line)).red()),
                    ChangeTag::Insert => println!("{}", style(format!("+{}", line)).green()),
                    ChangeTag::Equal => println!("{}", style(format!(" {}", line)).dim()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, comment: Option<&[&str]>) -> SignatureRecord {
        SignatureRecord {
            name: name.to_string(),
            params: vec![],
            returns: "int".to_string(),
            doxygen_comment: comment.map(|c| c.iter().map(|s| s.to_string()).collect()),
            file: "src/math.c".to_string(),
            start_line: 0,
            num_lines: 5,
            num_comments: 1,
            hash: None,
        }
    }

    fn names(records: &[&SignatureRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn sample() -> Vec<SignatureRecord> {
        let valid = ["/**", " * @return the value", " */"];
        let incomplete = ["/**", " * @return ", " */"];
        vec![
            record("bare", None),
            record("valid", Some(&valid[..])),
            record("incomplete", Some(&incomplete[..])),
        ]
    }

    #[test]
    fn test_default_skips_existing_blocks() {
        let records = sample();
        let selection = select(&records, false);
        assert_eq!(names(&selection.targets), vec!["bare"]);
        assert_eq!(names(&selection.with_block), vec!["incomplete"]);
    }

    #[test]
    fn test_all_flags_blocks_that_will_stack() {
        let records = sample();
        let selection = select(&records, true);
        assert_eq!(names(&selection.targets), vec!["bare", "valid", "incomplete"]);
        assert_eq!(names(&selection.with_block), vec!["valid", "incomplete"]);
    }
}
