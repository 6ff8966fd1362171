use std::{collections::HashMap, sync::{Mutex, MutexGuard, PoisonError}};

use serde_json::Value;

use crate::backend::{CollectionStore, Document, Result};

/// Keeps documents in memory. Used in place of `JsonStore` in tests.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Document>>
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Current contents of a document, empty if it was never saved.
    pub fn document(&self, name: &str) -> Document {
        self.documents().get(name).cloned().unwrap_or_default()
    }

    fn documents(&self) -> MutexGuard<'_, HashMap<String, Document>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Document> {
        Ok(self.document(name))
    }

    fn save(&self, name: &str, records: &[Value]) -> Result<()> {
        self.documents().insert(name.to_owned(), records.to_vec());
        Ok(())
    }
}
