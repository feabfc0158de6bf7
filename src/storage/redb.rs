//! ReDB storage implementation for guestbook signatures.
//!
//! Documents are JSON-serialized `{name, message?}` bodies keyed by the
//! canonical hyphenated UUID of the signature.
//!
//! Create and update commit their write transaction and then re-read the
//! record in a fresh read transaction, so callers always see what was
//! durably stored. The two steps are not atomic as a unit: a concurrent
//! delete in between surfaces as `None`.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use uuid::Uuid;

use crate::error::{GuestbookError, GuestbookResult};
use crate::signature::{NewSignature, Signature, SignatureDocument, SignaturePatch};

const SIGNATURES: TableDefinition<&str, &[u8]> = TableDefinition::new("signatures");

/// Handle to the signature collection.
///
/// Thread-safe via internal Arc. Clone is cheap; the database is closed
/// when the last clone is dropped.
#[derive(Clone)]
pub struct SignatureStore {
    db: Arc<Database>,
}

/// Length of the hyphenated UUID form, the only form ids are issued in.
const HYPHENATED_ID_LEN: usize = 36;

/// Normalize a client-supplied id. Only the hyphenated form matches (hex
/// case is ignored); the simple, braced and urn forms never do.
fn canonical_id(id: &str) -> Option<String> {
    if id.len() != HYPHENATED_ID_LEN {
        return None;
    }
    Uuid::try_parse(id).ok().map(|uuid| uuid.to_string())
}

impl SignatureStore {
    /// Open or create a database at the given path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn open(path: &Path) -> GuestbookResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        let store = Self::init(db)?;

        tracing::info!(path = %path.display(), "Opened signature database");
        Ok(store)
    }

    /// Open a database that lives only as long as this handle.
    pub fn open_in_memory() -> GuestbookResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> GuestbookResult<Self> {
        let write_txn = db.begin_write()?;
        {
            // Opening the table creates it if it doesn't exist
            let _ = write_txn.open_table(SIGNATURES)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Persist a new signature under a freshly generated id.
    pub fn create(&self, data: NewSignature) -> GuestbookResult<Signature> {
        let id = Uuid::new_v4().to_string();
        let value = serde_json::to_vec(&SignatureDocument::from(data))?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SIGNATURES)?;
            table.insert(id.as_str(), value.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(id = %id, "Stored signature");

        self.read(&id)?
            .ok_or_else(|| GuestbookError::Storage("Failed to create a signature".to_string()))
    }

    /// Get a signature by id.
    pub fn get_by_id(&self, id: &str) -> GuestbookResult<Option<Signature>> {
        match canonical_id(id) {
            Some(key) => self.read(&key),
            None => Ok(None),
        }
    }

    /// All signatures, in key order.
    pub fn get_all(&self) -> GuestbookResult<Vec<Signature>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SIGNATURES)?;

        let signatures = table
            .iter()?
            .map(|entry| -> GuestbookResult<Signature> {
                let (key, value) = entry?;
                let document: SignatureDocument = serde_json::from_slice(value.value())?;
                Ok(document.into_signature(key.value().to_string()))
            })
            .collect::<GuestbookResult<Vec<_>>>()?;

        Ok(signatures)
    }

    /// Apply a partial update and return the record as stored afterwards.
    ///
    /// Returns `None` without writing anything if no record matches.
    pub fn update_by_id(
        &self,
        id: &str,
        patch: SignaturePatch,
    ) -> GuestbookResult<Option<Signature>> {
        let Some(key) = canonical_id(id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return self.read(&key);
        }

        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut table = write_txn.open_table(SIGNATURES)?;
            let current = table.get(key.as_str())?.map(|value| value.value().to_vec());
            match current {
                Some(bytes) => {
                    let mut document: SignatureDocument = serde_json::from_slice(&bytes)?;
                    document.apply(patch);
                    let value = serde_json::to_vec(&document)?;
                    table.insert(key.as_str(), value.as_slice())?;
                    true
                }
                None => false,
            }
        };

        if !updated {
            write_txn.abort()?;
            return Ok(None);
        }
        write_txn.commit()?;
        tracing::debug!(id = %key, "Updated signature");

        self.read(&key)
    }

    /// Remove a signature, returning it as it was just before removal.
    pub fn delete_by_id(&self, id: &str) -> GuestbookResult<Option<Signature>> {
        let Some(key) = canonical_id(id) else {
            return Ok(None);
        };

        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(SIGNATURES)?;
            let removed = table
                .remove(key.as_str())?
                .map(|value| value.value().to_vec());
            removed
        };

        let Some(bytes) = removed else {
            write_txn.abort()?;
            return Ok(None);
        };
        write_txn.commit()?;
        tracing::debug!(id = %key, "Deleted signature");

        let document: SignatureDocument = serde_json::from_slice(&bytes)?;
        Ok(Some(document.into_signature(key)))
    }

    fn read(&self, key: &str) -> GuestbookResult<Option<Signature>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SIGNATURES)?;

        let bytes = table.get(key)?.map(|value| value.value().to_vec());
        match bytes {
            Some(bytes) => {
                let document: SignatureDocument = serde_json::from_slice(&bytes)?;
                Ok(Some(document.into_signature(key.to_string())))
            }
            None => Ok(None),
        }
    }
}
