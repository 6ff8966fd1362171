use serde_json::Value;
use thiserror::Error;

use crate::core::Record;

/// Contents of one document: a flat array of records.
pub type Document = Vec<Value>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to access document {name}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error
    },
    /// The document exists but does not hold a JSON array.
    #[error("document {name} is not a valid JSON array")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error
    },
    /// A record of the document does not have the shape of its collection.
    #[error("malformed record in document {name}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error
    },
    #[error("storage task did not complete")]
    Task(#[from] tokio::task::JoinError)
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Loads and saves whole documents by name.
/// A document that was never saved loads as empty.
pub trait CollectionStore: Send + Sync {
    fn load(&self, name: &str) -> Result<Document>;
    fn save(&self, name: &str, records: &[Value]) -> Result<()>;
}

pub fn read_records<T: Record>(store: &dyn CollectionStore) -> Result<Vec<T>> {
    return store.load(T::COLLECTION)?
        .into_iter()
        .map(|value| serde_json::from_value(value)
            .map_err(|source| BackendError::Malformed { name: T::COLLECTION.to_owned(), source }))
        .collect();
}

pub fn write_records<T: Record>(store: &dyn CollectionStore, records: &[T]) -> Result<()> {
    let document = records.iter()
        .map(|record| serde_json::to_value(record)
            .map_err(|source| BackendError::Malformed { name: T::COLLECTION.to_owned(), source }))
        .collect::<Result<Document>>()?;
    return store.save(T::COLLECTION, &document);
}
