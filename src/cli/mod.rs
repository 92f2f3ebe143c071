//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PasstableError, Result};
use crate::validator::verify_primary_passphrase;
use crate::vault::{read_vault_file, DiskWriter, SaveOutcome, VaultStore};

/// Environment variable that supplies the primary passphrase non-interactively.
pub const PASSWORD_ENV: &str = "PASSTABLE_PASSWORD";

/// Environment variable that supplies the replacement passphrase for `passwd`.
pub const NEW_PASSWORD_ENV: &str = "PASSTABLE_NEW_PASSWORD";

/// Passtable CLI: encrypted password table.
#[derive(Parser)]
#[command(
    name = "passtable",
    about = "Encrypted password table in a single file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: `default_vault` from .passtable.toml)
    #[arg(long, global = true)]
    pub file: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty vault file
    Init,

    /// List all records (passwords hidden)
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a record
    Add {
        /// Colour tag: 0 (none) to 5, or a colour name
        #[arg(short, long, default_value = "0")]
        tag: String,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Username or login
        #[arg(short, long, default_value = "")]
        username: String,
        /// Password (omit for interactive prompt)
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate the password using the configured generator
        #[arg(short, long)]
        generate: bool,
    },

    /// Show one record
    Show {
        /// Record number as shown by `list`
        number: usize,
        /// Print the password too
        #[arg(long)]
        reveal: bool,
    },

    /// Change fields of a record
    Edit {
        /// Record number as shown by `list`
        number: usize,
        #[arg(short, long)]
        tag: Option<String>,
        #[arg(short, long)]
        note: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Delete a record
    Delete {
        /// Record number as shown by `list`
        number: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Search records by text, tag symbol or colours
    Search {
        /// Text matched against notes and usernames (case-insensitive)
        query: Option<String>,
        /// Match tag symbols containing this text
        #[arg(long, conflicts_with = "query")]
        tag: Option<String>,
        /// Comma-separated colours (red,green,blue,yellow,purple)
        #[arg(long, value_delimiter = ',', conflicts_with_all = ["query", "tag"])]
        color: Vec<String>,
    },

    /// Move a record to a new position
    Move {
        from: usize,
        to: usize,
    },

    /// Swap two records
    Swap {
        a: usize,
        b: usize,
    },

    /// Copy a record's password to the clipboard
    Copy {
        /// Record number as shown by `list`
        number: usize,
    },

    /// Generate a random password
    Generate {
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(long)]
        min_lower: Option<usize>,
        #[arg(long)]
        min_upper: Option<usize>,
        #[arg(long)]
        min_numbers: Option<usize>,
        #[arg(long)]
        min_symbols: Option<usize>,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_numbers: bool,
        #[arg(long)]
        no_symbols: bool,
        /// Use every ASCII punctuation character, not just easy-to-type ones
        #[arg(long)]
        full_symbols: bool,
        /// Characters that must not appear
        #[arg(short, long)]
        block: Option<String>,
    },

    /// Change the vault's primary passphrase
    Passwd,

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the primary passphrase, trying in order:
/// 1. `PASSTABLE_PASSWORD` env var (CI/scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter primary passphrase")
        .interact()
        .map_err(|e| PasstableError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new primary passphrase with confirmation.
///
/// Also respects `PASSTABLE_PASSWORD` for scripted usage, in which case an
/// unacceptable passphrase is an error instead of a retry.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    prompt_new_password_from(PASSWORD_ENV)
}

/// Like [`prompt_new_password`], but reads the scripted value from `env`.
pub fn prompt_new_password_from(env: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env) {
        if !pw.is_empty() {
            let status = verify_primary_passphrase(&pw);
            if !status.is_ok() {
                return Err(PasstableError::CommandFailed(status.to_string()));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose primary passphrase")
            .with_confirmation(
                "Confirm primary passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| PasstableError::CommandFailed(format!("password prompt: {e}")))?;

        let status = verify_primary_passphrase(&password);
        if !status.is_ok() {
            output::warning(&format!("Invalid passphrase: {status}. Try again."));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the vault file from `--file` or the configured default.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    match &cli.file {
        Some(file) => Ok(cwd.join(file)),
        None => Ok(Settings::load(&cwd)?.vault_path(&cwd)),
    }
}

/// Read, decrypt and fill the vault named on the command line.
pub fn open_vault(cli: &Cli) -> Result<VaultStore> {
    let path = vault_path(cli)?;
    let ciphertext = read_vault_file(&path)?;
    let password = prompt_password()?;

    let mut store = VaultStore::open(&path, &password, ciphertext);
    store.fill()?;
    Ok(store)
}

/// Save to disk, telling the user if the file had to be relocated.
pub fn save_vault(store: &mut VaultStore, new_password: Option<&str>) -> Result<()> {
    match store.save(&DiskWriter, None, new_password)? {
        SaveOutcome::Saved => {}
        SaveOutcome::SavedToFallbackLocation(fallback) => {
            output::warning(&format!(
                "Could not write the original file; the vault was saved to {}",
                fallback.display()
            ));
        }
    }
    Ok(())
}

/// Convert a 1-based record number from the command line into an index.
pub fn record_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| PasstableError::CommandFailed("record numbers start at 1".into()))
}

/// Accept a tag as either its digit (`"3"`) or colour name (`"blue"`).
///
/// Anything else is passed through unchanged so the vault reports it.
pub fn normalize_tag(tag: &str) -> String {
    match crate::vault::Tag::from_name(tag) {
        Some(t) => t.symbol().to_string(),
        None => tag.to_string(),
    }
}
