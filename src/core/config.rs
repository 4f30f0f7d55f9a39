use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::table::{ALPHABET_LEN, Table};
use crate::encoders::algorithms::errors::{
    AlphabetError, AlphabetNotFoundError, find_closest_alphabet,
};

/// Name of the alphabet used when neither the caller nor the settings pick one.
pub const FALLBACK_ALPHABET: &str = "url";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 64 symbols in value order (each must be a single byte)
    #[serde(default)]
    pub symbols: String,
    /// First byte of a contiguous 64-byte range, used when `symbols` is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u8>,
    /// The byte that brackets non-ASCII runs
    pub delimiter: String,
    /// Free-form description shown by `config show`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective symbol bytes, generating them from `start` if needed.
    ///
    /// Explicit `symbols` take priority over a `start` range.
    pub fn effective_symbols(&self) -> Result<Vec<u8>, AlphabetError> {
        if !self.symbols.is_empty() {
            return Ok(self.symbols.as_bytes().to_vec());
        }

        match self.start {
            Some(start) => {
                let start = start as usize;
                let available = 256 - start;
                if available < ALPHABET_LEN {
                    return Err(AlphabetError::InvalidLength { actual: available });
                }
                Ok((start..start + ALPHABET_LEN).map(|b| b as u8).collect())
            }
            None => Err(AlphabetError::InvalidLength { actual: 0 }),
        }
    }

    /// Returns the delimiter as a single byte.
    pub fn delimiter_byte(&self) -> Result<u8, AlphabetError> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(AlphabetError::InvalidDelimiter {
                value: self.delimiter.clone(),
            }),
        }
    }

    /// Builds and validates the lookup table described by this entry.
    pub fn build_table(&self) -> Result<Table, AlphabetError> {
        Table::new(&self.effective_symbols()?, self.delimiter_byte()?)
    }
}

/// Global settings for nb64.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is given on the command line
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/nb64/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// A file that fails to parse is logged and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("nb64").join("alphabets.toml"));
        }
        candidates.push(std::path::PathBuf::from("alphabets.toml"));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    log::debug!(
                        "loaded {} alphabet(s) from {}",
                        overrides.alphabets.len(),
                        path.display()
                    );
                    config.merge(overrides);
                }
                Err(e) => {
                    log::warn!("failed to load alphabets from {}: {}", path.display(), e);
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`,
    /// and a default alphabet set in `other` replaces the current one.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Returns the configured default alphabet name, or `url`.
    pub fn default_alphabet(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(FALLBACK_ALPHABET)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the table for a named alphabet.
    ///
    /// Fails with [`AlphabetNotFoundError`] (carrying a spelling suggestion)
    /// for unknown names, or [`AlphabetError`] for invalid definitions.
    pub fn table(&self, name: &str) -> Result<Table, Box<dyn std::error::Error>> {
        let alphabet = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        log::debug!("building table for alphabet '{}'", name);
        Ok(alphabet.build_table()?)
    }
}
