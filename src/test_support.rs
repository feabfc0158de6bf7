//! Test-only helpers that keep production modules lean.

use std::path::Path;

use crate::error::GuestbookResult;
use crate::signature::{NewSignature, Signature};
use crate::storage::SignatureStore;

pub mod store {
    use super::*;

    /// A fresh store backed by memory, isolated from every other test.
    pub fn in_memory_store() -> SignatureStore {
        SignatureStore::open_in_memory().expect("in-memory redb should always open")
    }

    /// A store backed by a file, for reopen/persistence tests.
    pub fn file_store(path: &Path) -> GuestbookResult<SignatureStore> {
        SignatureStore::open(path)
    }

    /// Insert a signature directly, bypassing HTTP.
    pub fn insert(store: &SignatureStore, name: &str, message: Option<&str>) -> Signature {
        store
            .create(NewSignature::new(name, message.map(str::to_string)))
            .expect("insert test signature")
    }
}
