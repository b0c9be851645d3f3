//! @acp:module "Highlight Command"
//! @acp:summary "Tag C source text and print it coloured or as spans"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::highlight::{generate_tags, render_ansi, CategoryConfig};

/// Options for the highlight command
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Source file, or `-` for stdin
    pub file: PathBuf,
    /// Category names overriding the configured rules
    pub rules: Option<Vec<String>>,
    /// Print `category start end` per tag instead of coloured text
    pub spans: bool,
}

/// Execute the highlight command
pub fn execute_highlight(options: HighlightOptions, config: Config) -> Result<()> {
    let text = read_source(&options.file)?;

    let categories = match &options.rules {
        Some(rules) => CategoryConfig::from_names(rules)?,
        None => config.category_config()?,
    };
    let tags = generate_tags(&text, &categories);
    tracing::debug!(
        "{} tags from {} categories in {}",
        tags.len(),
        categories.len(),
        options.file.display()
    );

    if options.spans {
        for tag in &tags {
            println!("{} {} {}", tag.category, tag.start, tag.end);
        }
    } else {
        print!("{}", render_ansi(&text, &tags, &config.palette()));
    }

    Ok(())
}

fn read_source(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
