//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the ordered record list together with the file
//! metadata (path, primary passphrase, last written blob) and the saved
//! flag.  Writing to storage is delegated to a host-supplied
//! `VaultWriter`, so the store itself never touches the filesystem.

use std::io;
use std::path::{Path, PathBuf};

use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::{decrypt, encrypt};
use crate::errors::{PasstableError, Result};
use crate::validator::{verify_data, verify_item};

use super::format;
use super::record::{Field, Record, RecordView, Tag};

/// Host side of a save: persist `content` at `path`.
///
/// `save` calls this at most twice (primary path, then fallback).
pub trait VaultWriter {
    fn write_to_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

impl<F> VaultWriter for F
where
    F: Fn(&Path, &str) -> io::Result<()>,
{
    fn write_to_file(&self, path: &Path, content: &str) -> io::Result<()> {
        self(path, content)
    }
}

/// Successful result of `VaultStore::save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written at the requested path.
    Saved,
    /// The requested path failed; the vault now lives at this path instead.
    SavedToFallbackLocation(PathBuf),
}

/// The main vault handle.  Create one with `VaultStore::new` for a vault
/// that has never been saved, or `VaultStore::open` for an existing file,
/// then call `fill` to decrypt it.
pub struct VaultStore {
    /// Ordered records; the order is user-visible.
    records: Vec<Record>,

    /// `true` while the in-memory records match the last save or fill.
    saved: bool,

    /// Vault file location; `None` until the first save.
    path: Option<PathBuf>,

    /// Primary passphrase (zeroized on drop).
    passphrase: Option<Zeroizing<String>>,

    /// Version-tagged blob last read or written.
    ciphertext: String,

    /// Directory for the fallback file; defaults to the executable's.
    fallback_dir: Option<PathBuf>,
}

impl Default for VaultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// A new, never-saved vault with no records.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            saved: true,
            path: None,
            passphrase: None,
            ciphertext: String::new(),
            fallback_dir: None,
        }
    }

    /// A vault backed by an existing file whose contents are `ciphertext`.
    ///
    /// Nothing is decrypted until `fill` is called.
    pub fn open(path: &Path, passphrase: &str, ciphertext: String) -> Self {
        Self {
            records: Vec::new(),
            saved: true,
            path: Some(path.to_path_buf()),
            passphrase: Some(Zeroizing::new(passphrase.to_string())),
            ciphertext,
            fallback_dir: None,
        }
    }

    /// Override where the fallback file goes when the primary write fails.
    pub fn with_fallback_dir(mut self, dir: &Path) -> Self {
        self.fallback_dir = Some(dir.to_path_buf());
        self
    }

    // ------------------------------------------------------------------
    // Record mutation
    // ------------------------------------------------------------------

    /// Append a record.
    pub fn add(&mut self, tag: &str, note: &str, username: &str, password: &str) -> Result<()> {
        Self::check_fields(note, username, password)?;
        let tag = Self::parse_tag(tag)?;

        self.records.push(Record::new(tag, note, username, password));
        self.saved = false;
        Ok(())
    }

    /// Remove the record at `index`.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.records.remove(index);
        self.saved = false;
        Ok(())
    }

    pub fn set_tag(&mut self, index: usize, tag: &str) -> Result<()> {
        let tag = Self::parse_tag(tag)?;
        self.record_mut(index)?.tag = tag;
        self.saved = false;
        Ok(())
    }

    pub fn set_note(&mut self, index: usize, note: &str) -> Result<()> {
        Self::check_data(Field::Note, note)?;
        let record = self.record_mut(index)?;
        if !verify_item(note, &record.username, &record.password) {
            return Err(PasstableError::IncompleteRecord);
        }
        record.note = note.to_string();
        self.saved = false;
        Ok(())
    }

    pub fn set_username(&mut self, index: usize, username: &str) -> Result<()> {
        Self::check_data(Field::Username, username)?;
        let record = self.record_mut(index)?;
        if !verify_item(&record.note, username, &record.password) {
            return Err(PasstableError::IncompleteRecord);
        }
        record.username = username.to_string();
        self.saved = false;
        Ok(())
    }

    pub fn set_password(&mut self, index: usize, password: &str) -> Result<()> {
        Self::check_data(Field::Password, password)?;
        let record = self.record_mut(index)?;
        if !verify_item(&record.note, &record.username, password) {
            return Err(PasstableError::IncompleteRecord);
        }
        record.password = password.to_string();
        self.saved = false;
        Ok(())
    }

    /// Replace every field of the record at `index` at once.
    pub fn set_data(
        &mut self,
        index: usize,
        tag: &str,
        note: &str,
        username: &str,
        password: &str,
    ) -> Result<()> {
        Self::check_fields(note, username, password)?;
        let tag = Self::parse_tag(tag)?;

        let record = self.record_mut(index)?;
        *record = Record::new(tag, note, username, password);
        self.saved = false;
        Ok(())
    }

    /// Exchange the records at `a` and `b`.
    pub fn swap_items(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.records.swap(a, b);
        self.saved = false;
        Ok(())
    }

    /// Move the record at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let record = self.records.remove(from);
        self.records.insert(to, record);
        self.saved = false;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Read one field of the record at `index`.
    ///
    /// Only ask for `Field::Password` when it is about to be shown.
    pub fn get_field(&self, index: usize, field: Field) -> Result<Zeroizing<String>> {
        let record = self.record(index)?;
        let value = match field {
            Field::Tag => record.tag.symbol().to_string(),
            Field::Note => record.note.clone(),
            Field::Username => record.username.clone(),
            Field::Password => record.password.clone(),
        };
        Ok(Zeroizing::new(value))
    }

    /// All records, passwords masked, in collection order.
    pub fn get_all(&self) -> Vec<RecordView> {
        self.records.iter().map(|r| r.view(None)).collect()
    }

    /// Records whose note or username contains `query`, ignoring case.
    pub fn search_by_text(&self, query: &str) -> Vec<RecordView> {
        let query = query.to_lowercase();
        self.search(|r| {
            r.note.to_lowercase().contains(&query) || r.username.to_lowercase().contains(&query)
        })
    }

    /// Records whose tag symbol contains `query`.
    pub fn search_by_tag(&self, query: &str) -> Vec<RecordView> {
        self.search(|r| r.tag.symbol().to_string().contains(query))
    }

    /// Records tagged with any of the given colours. `Tag::None` never matches.
    pub fn search_by_tag_colors(&self, colors: &[Tag]) -> Vec<RecordView> {
        self.search(|r| r.tag != Tag::None && colors.contains(&r.tag))
    }

    fn search<P: Fn(&Record) -> bool>(&self, matches: P) -> Vec<RecordView> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| matches(r))
            .map(|(i, r)| r.view(Some(i)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Decrypt the stored blob and replace the records with its contents.
    ///
    /// A vault that was never saved has nothing to decrypt and fills as
    /// empty.
    pub fn fill(&mut self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            self.records.clear();
            self.saved = true;
            return Ok(());
        };

        if self.ciphertext.is_empty() {
            return Err(PasstableError::MissingCiphertext);
        }
        let passphrase = match self.passphrase.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(PasstableError::MissingPassphrase),
        };

        let (version, body) = format::split_version(&self.ciphertext)?;
        debug!(path = %path.display(), ?version, "filling vault");

        let plaintext = decrypt(body, passphrase).map_err(|e| match e {
            PasstableError::DecryptionFailed | PasstableError::InvalidKeyLength(_) => {
                PasstableError::InvalidPassphrase
            }
            PasstableError::EmptyInput => {
                PasstableError::CorruptData("ciphertext is too short".into())
            }
            other => other,
        })?;
        let payload =
            std::str::from_utf8(&plaintext).map_err(|_| PasstableError::InvalidPassphrase)?;

        let records = format::parse_records(payload)?;
        debug!(records = records.len(), "vault filled");

        self.records = records;
        self.saved = true;
        Ok(())
    }

    /// Encrypt the records and hand them to `writer`.
    ///
    /// `new_path` / `new_passphrase` take precedence over the current ones
    /// and are adopted once a write succeeds.  The encrypted payload is
    /// decrypted again and compared with the plaintext before anything is
    /// written.  If the primary write fails, one retry goes to
    /// `<fallback dir>/<stem>.passtable`.
    pub fn save(
        &mut self,
        writer: &dyn VaultWriter,
        new_path: Option<&Path>,
        new_passphrase: Option<&str>,
    ) -> Result<SaveOutcome> {
        let path = new_path
            .map(Path::to_path_buf)
            .or_else(|| self.path.clone())
            .ok_or(PasstableError::NoPath)?;
        let passphrase = match new_passphrase {
            Some(p) => Zeroizing::new(p.to_string()),
            None => self.passphrase.clone().ok_or(PasstableError::NoPassphrase)?,
        };

        let payload = format::serialize_records(&self.records);
        let encrypted = encrypt(payload.as_bytes(), &passphrase)?;

        let verified = match decrypt(&encrypted, &passphrase) {
            Ok(check) => bool::from(check.as_slice().ct_eq(payload.as_bytes())),
            Err(_) => false,
        };
        if !verified {
            warn!(path = %path.display(), "encrypted vault did not decrypt to the same data");
            return Err(PasstableError::EncryptionVerificationFailed);
        }

        let blob = format::attach_version(&encrypted);

        let (written_to, outcome) = match writer.write_to_file(&path, &blob) {
            Ok(()) => (path, SaveOutcome::Saved),
            Err(primary_err) => {
                let fallback = format::fallback_path(&path, &self.fallback_dir());
                warn!(
                    path = %path.display(),
                    fallback = %fallback.display(),
                    error = %primary_err,
                    "write failed, retrying at fallback location"
                );
                if let Err(fallback_err) = writer.write_to_file(&fallback, &blob) {
                    warn!(fallback = %fallback.display(), error = %fallback_err, "fallback write failed");
                    return Err(PasstableError::WriteFailed { path, fallback });
                }
                (
                    fallback.clone(),
                    SaveOutcome::SavedToFallbackLocation(fallback),
                )
            }
        };

        debug!(path = %written_to.display(), records = self.records.len(), "vault saved");

        self.path = Some(written_to);
        self.passphrase = Some(passphrase);
        self.ciphertext = blob;
        self.saved = true;
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the vault file path, if the vault has one yet.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// `false` when there are changes not yet written by `save`.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Returns the number of records in the vault.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The version-tagged blob last read or written.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    fn check_data(field: Field, value: &str) -> Result<()> {
        if verify_data(value) {
            Ok(())
        } else {
            Err(PasstableError::InvalidField(field))
        }
    }

    /// Content checks shared by `add` and `set_data`.
    fn check_fields(note: &str, username: &str, password: &str) -> Result<()> {
        Self::check_data(Field::Note, note)?;
        Self::check_data(Field::Username, username)?;
        Self::check_data(Field::Password, password)?;
        if !verify_item(note, username, password) {
            return Err(PasstableError::IncompleteRecord);
        }
        Ok(())
    }

    fn parse_tag(tag: &str) -> Result<Tag> {
        Tag::from_symbol(tag).ok_or_else(|| PasstableError::InvalidTag(tag.to_string()))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(PasstableError::OutOfBounds {
                index,
                len: self.records.len(),
            })
        }
    }

    fn record(&self, index: usize) -> Result<&Record> {
        self.check_index(index)?;
        Ok(&self.records[index])
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut Record> {
        self.check_index(index)?;
        Ok(&mut self.records[index])
    }

    fn fallback_dir(&self) -> PathBuf {
        self.fallback_dir.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_default()
        })
    }
}
