mod interface;
mod json_store;
mod memory_store;
mod collection;

pub use interface::{CollectionStore, Document, Result, BackendError, read_records, write_records};
pub use json_store::JsonStore;
pub use memory_store::MemoryStore;
pub use collection::{Collection, Locked};
