//! Vault module: encrypted record storage.
//!
//! This module provides:
//! - `Record`, `RecordView`, `Tag` and `Field` types (`record`)
//! - Version tag and plaintext payload codec (`format`)
//! - `VaultStore` with record CRUD, searches and the save/fill cycle (`store`)
//! - Atomic filesystem writer and reader for the CLI host (`disk`)

pub mod disk;
pub mod format;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use disk::{read_vault_file, DiskWriter};
pub use format::{FileVersion, CURRENT_VERSION, EMPTY_COLLECTION};
pub use record::{Field, Record, RecordView, Tag};
pub use store::{SaveOutcome, VaultStore, VaultWriter};
