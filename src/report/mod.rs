//! @acp:module "Report"
//! @acp:summary "Triage worklists, completion progress, skip-sets and description tables"
//! @acp:domain report
//! @acp:layer service
//!
//! # Reporting
//!
//! Everything here is derived from records and canonical descriptions and
//! does no I/O. Command handlers decide how the results are printed.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::doc::{comment_ratio, density_ok, is_valid, CanonicalDescription, SignatureRecord};

/// Placeholder for missing table cells.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column headings of a description table.
pub const TABLE_HEADER: [&str; 4] = ["Name", "Parameters", "Return", "Description"];

/// @acp:summary "Whether a record still needs documentation work"
/// A record is done only when its comment density is above `threshold` and
/// its doxygen block is valid. An empty body never passes the density check.
pub fn needs_attention(record: &SignatureRecord, threshold: f64) -> bool {
    let dense = comment_ratio(record).is_some_and(|ratio| density_ok(ratio, threshold));
    !(dense && is_valid(record))
}

/// @acp:summary "Records that need attention, out of every record seen"
#[derive(Debug, Clone)]
pub struct Worklist<'a> {
    pub total: usize,
    pub records: Vec<&'a SignatureRecord>,
}

impl<'a> Worklist<'a> {
    /// @acp:summary "Collect records that fail the density or validity checks"
    pub fn build(records: &'a [SignatureRecord], threshold: f64) -> Self {
        Self {
            total: records.len(),
            records: records
                .iter()
                .filter(|record| needs_attention(record, threshold))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.total, self.records.len())
    }
}

/// @acp:summary "How much of the worklist has been completed"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub remaining: usize,
}

impl Progress {
    pub fn new(total: usize, remaining: usize) -> Self {
        Self {
            total,
            remaining: remaining.min(total),
        }
    }

    pub fn completed(&self) -> usize {
        self.total - self.remaining
    }

    /// Completed fraction in `[0, 1]`; `0.0` when there is nothing to do.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed() as f64 / self.total as f64
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3}% Complete ({} of {} remaining)",
            self.ratio() * 100.0,
            self.remaining,
            self.total
        )
    }
}

/// @acp:summary "Record hashes to leave out of reports"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    hashes: HashSet<String>,
}

impl SkipSet {
    /// Parse one hash per line. Blank lines and surrounding whitespace are
    /// ignored.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    /// A record without a hash is never skipped.
    pub fn skips(&self, record: &SignatureRecord) -> bool {
        record.hash.as_deref().is_some_and(|hash| self.contains(hash))
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl FromIterator<String> for SkipSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            hashes: iter.into_iter().collect(),
        }
    }
}

/// @acp:summary "One printable row of a description table"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionRow {
    pub name: String,
    pub parameters: String,
    #[serde(rename = "return")]
    pub returns: String,
    pub description: String,
}

impl From<&CanonicalDescription> for DescriptionRow {
    fn from(desc: &CanonicalDescription) -> Self {
        let parameters = match &desc.params {
            Some(params) => params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            None => NOT_AVAILABLE.to_string(),
        };
        Self {
            name: desc.name.clone(),
            parameters,
            returns: desc
                .returns
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            description: desc.description.clone(),
        }
    }
}

impl DescriptionRow {
    fn cells(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.parameters.as_str(),
            self.returns.as_str(),
            self.description.as_str(),
        ]
    }
}

/// @acp:summary "Description rows for a single source file"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTable {
    pub file: String,
    /// Base name of the file without its extension.
    pub title: String,
    pub rows: Vec<DescriptionRow>,
}

impl FileTable {
    fn new(file: &str) -> Self {
        let title = Path::new(file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.to_string());
        Self {
            file: file.to_string(),
            title,
            rows: Vec::new(),
        }
    }

    /// @acp:summary "Render as a plain, column-aligned text table"
    pub fn render(&self) -> String {
        let mut widths = TABLE_HEADER.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = format!("{}\n", self.title);
        out.push_str(&render_row(&TABLE_HEADER, &widths));
        let rule = widths.map(|w| "-".repeat(w));
        out.push_str(&render_row(&rule.each_ref().map(String::as_str), &widths));
        for row in &self.rows {
            out.push_str(&render_row(&row.cells(), &widths));
        }
        out
    }
}

fn render_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

/// @acp:summary "Canonical descriptions grouped by file"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptionTable {
    pub files: Vec<FileTable>,
}

impl DescriptionTable {
    /// @acp:summary "Group descriptions by file, in first-seen order"
    pub fn build<'a, I>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = &'a CanonicalDescription>,
    {
        let mut files: Vec<FileTable> = Vec::new();
        for desc in descriptions {
            let idx = match files.iter().position(|t| t.file == desc.file) {
                Some(idx) => idx,
                None => {
                    files.push(FileTable::new(&desc.file));
                    files.len() - 1
                }
            };
            files[idx].rows.push(DescriptionRow::from(desc));
        }
        Self { files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.files.iter().map(|t| t.rows.len()).sum()
    }
}
