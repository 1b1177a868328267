//! Configuration
//!
//! `defaults/tagchunk.default.toml` is embedded into the crate so the documented
//! defaults and the runtime defaults cannot drift. [`Loader`] stacks user files
//! and single-key overrides on top, deserializes the result into
//! [`TagchunkConfig`] and compiles the configured grammar in the same step, so a
//! broken rule is reported as a configuration error.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::constituents::{builtin_rules, Grammar, GrammarError, GrammarRule};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/tagchunk.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct TagchunkConfig {
    pub output: OutputConfig,
    pub matching: MatchingConfig,
    pub grammar: GrammarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_labels: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Compile through the process-wide pattern cache.
    pub use_cache: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarConfig {
    pub include_builtin: bool,
    #[serde(default)]
    pub rules: Vec<GrammarRule>,
}

impl GrammarConfig {
    /// Configured rules merged with the built-in table (when enabled), by priority.
    pub fn build_grammar(&self) -> Result<Grammar, GrammarError> {
        let mut rules = self.rules.clone();
        if self.include_builtin {
            rules.extend(builtin_rules());
        }
        Grammar::from_rules(rules)
    }
}

/// Settings together with the grammar they describe.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: TagchunkConfig,
    pub grammar: Grammar,
}

/// Either layer of loading can fail: reading the settings, or compiling the
/// grammar rules they name.
#[derive(Debug)]
pub enum LoadError {
    Config(ConfigError),
    Grammar(GrammarError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Config(e) => write!(f, "configuration: {}", e),
            LoadError::Grammar(e) => write!(f, "configured {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Config(e) => Some(e),
            LoadError::Grammar(e) => Some(e),
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Config(e)
    }
}

impl From<GrammarError> for LoadError {
    fn from(e: GrammarError) -> Self {
        LoadError::Grammar(e)
    }
}

/// Builds settings from the embedded defaults, TOML files layered in order, and
/// single-key overrides (the CLI's `--format`). Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file. With `required` unset a missing file is skipped.
    pub fn layer(self, path: impl AsRef<Path>, required: bool) -> Self {
        let file = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        Self {
            builder: self.builder.add_source(file),
        }
    }

    /// Override one dotted key, e.g. `output.format`.
    pub fn set<V: Into<ValueKind>>(self, key: &str, value: V) -> Result<Self, ConfigError> {
        Ok(Self {
            builder: self.builder.set_override(key, value)?,
        })
    }

    /// Deserialize the layered settings without touching the grammar.
    pub fn settings(self) -> Result<TagchunkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// Settings plus their compiled grammar. A bad configured rule fails here,
    /// before any input is read.
    pub fn load(self) -> Result<Loaded, LoadError> {
        let config = self.settings()?;
        let grammar = config.grammar.build_grammar()?;
        debug!(
            format = ?config.output.format,
            rules = grammar.len(),
            "loaded configuration"
        );
        Ok(Loaded { config, grammar })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
