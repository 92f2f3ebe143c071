use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PasstableError, Result};
use crate::generator::{PasswordGenerator, Requirements};

/// Project-level configuration, loaded from `.passtable.toml`.
///
/// Every field has a sensible default so Passtable works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file used when `--file` is not given.
    #[serde(default = "default_vault")]
    pub default_vault: String,

    /// Password generator defaults.
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_length")]
    pub length: usize,

    #[serde(default = "default_min")]
    pub min_lowercase: usize,

    #[serde(default = "default_min")]
    pub min_uppercase: usize,

    #[serde(default = "default_min")]
    pub min_numbers: usize,

    #[serde(default = "default_min")]
    pub min_symbols: usize,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default = "default_true")]
    pub numbers: bool,

    #[serde(default = "default_true")]
    pub symbols: bool,

    /// Restrict symbols to the easy-to-type subset.
    #[serde(default = "default_true")]
    pub easy_symbols: bool,

    /// Characters the generator must never use (e.g. "0O1lI").
    #[serde(default)]
    pub blocked_chars: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault() -> String {
    "vault.passtable".to_string()
}

fn default_length() -> usize {
    16
}

fn default_min() -> usize {
    1
}

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: default_length(),
            min_lowercase: default_min(),
            min_uppercase: default_min(),
            min_numbers: default_min(),
            min_symbols: default_min(),
            lowercase: default_true(),
            uppercase: default_true(),
            numbers: default_true(),
            symbols: default_true(),
            easy_symbols: default_true(),
            blocked_chars: String::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_vault: default_vault(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passtable.toml";

    /// Load settings from `<dir>/.passtable.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PasstableError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the default vault path against `dir` (absolute paths win).
    pub fn vault_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.default_vault)
    }

    /// A generator configured from the `[generator]` table.
    pub fn password_generator(&self) -> PasswordGenerator {
        let g = &self.generator;
        let mut generator = PasswordGenerator::new();
        generator.lowercase = g.lowercase;
        generator.uppercase = g.uppercase;
        generator.numbers = g.numbers;
        generator.symbols = g.symbols;
        generator.easy_symbols = g.easy_symbols;
        generator.block_chars(&g.blocked_chars);
        generator
    }

    /// Length and minimums from the `[generator]` table.
    pub fn requirements(&self) -> Requirements {
        let g = &self.generator;
        Requirements {
            length: g.length,
            min_lowercase: g.min_lowercase,
            min_symbols: g.min_symbols,
            min_uppercase: g.min_uppercase,
            min_numbers: g.min_numbers,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
