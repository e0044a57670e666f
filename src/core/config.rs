use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::table::Table;
use crate::encoders::algorithms::errors::{CodecError, find_closest_table};

/// Errors raised while loading or resolving table configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid table configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("table '{name}': {reason}")]
    Range { name: String, reason: String },
    #[error("table '{name}' not found")]
    UnknownTable {
        name: String,
        suggestion: Option<String>,
    },
    #[error("table '{name}': {source}")]
    Table {
        name: String,
        #[source]
        source: CodecError,
    },
}

/// Configuration for a single named table.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    /// The symbols comprising the table (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting character for a range-based table
    /// Use with `length` to define sequential Unicode ranges
    #[serde(default)]
    pub start: Option<String>,
    /// Number of characters in a range-based table
    #[serde(default)]
    pub length: Option<usize>,
    /// Free-form note shown by `rhakimi tables`
    #[serde(default)]
    pub description: Option<String>,
}

impl TableConfig {
    /// Returns the effective symbol string, generating it from a range if needed.
    ///
    /// Explicit `chars` take priority over `start` + `length`.
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;
            return Self::generate_range(start_char as u32, length);
        }

        Err("table needs either `chars` or `start` + `length`".to_string())
    }

    /// Generate a string of sequential Unicode characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, String> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        if length == 0 {
            return Err("length must be greater than 0".to_string());
        }

        let end = u32::try_from(length - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or("range exceeds maximum Unicode codepoint")?;

        if end > MAX_UNICODE {
            return Err(format!(
                "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                end, MAX_UNICODE
            ));
        }

        let crosses_surrogates = start <= SURROGATE_END && end >= SURROGATE_START;
        if crosses_surrogates {
            return Err(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            ));
        }

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint).ok_or_else(|| format!("invalid codepoint U+{:X}", codepoint))
            })
            .collect()
    }

    /// Number of symbols the table will hold before deduplication.
    pub fn declared_size(&self) -> usize {
        if self.chars.is_empty() {
            self.length.unwrap_or(0)
        } else {
            self.chars.chars().count()
        }
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Table used when the command line names none
    #[serde(default)]
    pub default_table: Option<String>,
}

/// Collection of named tables loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct TableRegistry {
    /// Map of table names to their configurations
    #[serde(default)]
    pub tables: HashMap<String, TableConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl TableRegistry {
    /// Parses table configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the built-in tables bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../tables.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in tables (from library)
    /// 2. `~/.config/rhakimi/tables.toml` (user overrides)
    /// 3. `./tables.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching table names.
    /// An override file that fails to load is logged and skipped.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("rhakimi").join("tables.toml"));
        }
        candidates.push(PathBuf::from("tables.toml"));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    tracing::debug!(path = %path.display(), "loaded table overrides");
                    config.merge(overrides);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load table overrides");
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Tables from `other` override tables with the same name in `self`; a
    /// default table set in `other` replaces this one.
    pub fn merge(&mut self, other: TableRegistry) {
        self.tables.extend(other.tables);
        if other.settings.default_table.is_some() {
            self.settings.default_table = other.settings.default_table;
        }
    }

    /// Retrieves a table configuration by name.
    pub fn get_table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.get(name)
    }

    /// Builds the named table.
    pub fn table(&self, name: &str) -> Result<Table, ConfigError> {
        let config = self.get_table(name).ok_or_else(|| ConfigError::UnknownTable {
            name: name.to_string(),
            suggestion: find_closest_table(name, self.tables.keys()),
        })?;

        let chars = config.effective_chars().map_err(|reason| ConfigError::Range {
            name: name.to_string(),
            reason,
        })?;

        chars.parse().map_err(|source| ConfigError::Table {
            name: name.to_string(),
            source,
        })
    }

    /// Table names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
