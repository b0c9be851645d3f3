//! @acp:module "Record Loading"
//! @acp:summary "Finds and reads analyzer signature records from JSON files"
//! @acp:domain cli
//! @acp:layer config

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::Config;
use crate::doc::SignatureRecord;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// @acp:summary "Read one file holding a JSON array of records"
pub fn read_records<P: AsRef<Path>>(path: P) -> crate::Result<Vec<SignatureRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// @acp:summary "Expand inputs into record files"
/// Files are taken as given. Directories are walked and filtered by the
/// configured include and exclude globs, matched against the path relative
/// to that directory.
pub fn find_record_files(inputs: &[PathBuf], config: &Config) -> crate::Result<Vec<PathBuf>> {
    let include = compile(&config.include)?;
    let exclude = compile(&config.exclude)?;

    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(input)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let relative = e.path().strip_prefix(input).unwrap_or(e.path());
                let relative = relative.to_string_lossy();
                let included = include.is_empty()
                    || include.iter().any(|p| p.matches_with(&relative, MATCH_OPTIONS));
                included && !exclude.iter().any(|p| p.matches_with(&relative, MATCH_OPTIONS))
            })
            .map(|e| e.into_path())
            .collect();
        found.sort();
        tracing::debug!("{} record files under {}", found.len(), input.display());
        files.extend(found);
    }
    Ok(files)
}

fn compile(patterns: &[String]) -> crate::Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(Into::into))
        .collect()
}

/// @acp:summary "Load every record reachable from the inputs"
/// Files are read in parallel; the result is sorted by file then start line.
pub fn load_records(inputs: &[PathBuf], config: &Config) -> crate::Result<Vec<SignatureRecord>> {
    let files = find_record_files(inputs, config)?;

    let batches: Vec<Vec<SignatureRecord>> = files
        .par_iter()
        .map(|path| {
            read_records(path).inspect_err(|e| {
                tracing::warn!("Failed to read records from {}: {}", path.display(), e);
            })
        })
        .collect::<crate::Result<_>>()?;

    let mut records: Vec<SignatureRecord> = batches.into_iter().flatten().collect();
    records.sort_by(|a, b| (&a.file, a.start_line).cmp(&(&b.file, b.start_line)));
    tracing::debug!("Loaded {} records from {} files", records.len(), files.len());
    Ok(records)
}
