//! Filesystem adapter for vault files.
//!
//! `DiskWriter` is the `VaultWriter` the CLI hands to `VaultStore::save`.
//! Writes are atomic: the blob goes to a temp file in the target
//! directory, which is then renamed over the target path, so readers
//! never see a half-written vault.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::{PasstableError, Result};

use super::store::VaultWriter;

/// Writes vault blobs to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskWriter;

impl VaultWriter for DiskWriter {
    fn write_to_file(&self, path: &Path, content: &str) -> io::Result<()> {
        // The temp file sits next to the target so the rename stays on
        // one filesystem.
        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }
}

/// Read the raw (still encrypted) contents of a vault file.
pub fn read_vault_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PasstableError::VaultNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            PasstableError::CorruptData("vault file is not valid text".into())
        }
        _ => PasstableError::Io(e),
    })
}
