//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

pub mod records;

pub use records::{find_record_files, load_records, read_records};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::doc::{Reconciler, DEFAULT_CONSTRUCTOR_MARKER, DEFAULT_DENSITY_THRESHOLD};
use crate::highlight::{Category, CategoryConfig, Colour, Palette};
use crate::report::SkipSet;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".doxcheck.json";

fn default_density_threshold() -> f64 {
    DEFAULT_DENSITY_THRESHOLD
}

fn default_constructor_markers() -> Vec<String> {
    vec![DEFAULT_CONSTRUCTOR_MARKER.to_string()]
}

fn default_include() -> Vec<String> {
    vec!["**/*.json".to_string()]
}

fn default_rules() -> Vec<String> {
    Category::ALL.iter().map(|c| c.as_str().to_string()).collect()
}

/// @acp:summary "Main doxcheck configuration structure"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Highlighting rules and colours
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Comment density must be strictly above this
    #[serde(default = "default_density_threshold")]
    pub density_threshold: f64,

    /// Return classifications treated as constructors
    #[serde(default = "default_constructor_markers")]
    pub constructor_markers: Vec<String>,

    /// Record file patterns to include when walking directories (glob syntax)
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Record file patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude: Vec<String>,

    /// File of record hashes to leave out of reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight: HighlightConfig::default(),
            density_threshold: default_density_threshold(),
            constructor_markers: default_constructor_markers(),
            include: default_include(),
            exclude: Vec::new(),
            ignore_file: None,
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a .doxcheck.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load a config file, falling back to defaults when it is absent"
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        tracing::debug!("Loading config from {}", path.display());
        Self::load(path)
    }

    fn check(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.density_threshold) {
            return Err(crate::DoxError::Config(format!(
                "density_threshold must be between 0 and 1, got {}",
                self.density_threshold
            )));
        }
        self.category_config()?;
        Ok(())
    }

    /// @acp:summary "Enabled highlight categories in rule order"
    pub fn category_config(&self) -> crate::Result<CategoryConfig> {
        CategoryConfig::from_names(&self.highlight.rules)
    }

    /// @acp:summary "Default palette with configured overrides applied"
    pub fn palette(&self) -> Palette {
        self.highlight
            .palette
            .iter()
            .fold(Palette::default(), |mut palette, (category, colour)| {
                palette.set(*category, *colour);
                palette
            })
    }

    /// @acp:summary "Reconciler using the configured constructor markers"
    pub fn reconciler(&self) -> Reconciler {
        Reconciler::new(self.constructor_markers.iter().cloned())
    }

    /// @acp:summary "Read the configured skip-set, empty when none is set"
    pub fn skip_set(&self) -> crate::Result<SkipSet> {
        match &self.ignore_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(SkipSet::parse(&content))
            }
            None => Ok(SkipSet::default()),
        }
    }
}

/// @acp:summary "Highlighting rule order and colour overrides"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Category names, in registration order
    #[serde(default = "default_rules")]
    pub rules: Vec<String>,

    /// Per-category colour overrides
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub palette: HashMap<Category, Colour>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            palette: HashMap::new(),
        }
    }
}
