use std::{marker::PhantomData, ops::{Deref, DerefMut}, sync::Arc};

use tokio::{sync::{Mutex, OwnedMutexGuard}, task};

use crate::backend::{CollectionStore, Result, read_records, write_records};
use crate::core::Record;

/// Typed access to one collection of a store.
///
/// Every read-modify-write goes through [`Collection::lock`], which holds a
/// per-collection mutex until the changes are committed or dropped. Two
/// concurrent creates therefore never see the same last id.
pub struct Collection<T> {
    store: Arc<dyn CollectionStore>,
    writer: Arc<Mutex<()>>,
    _records: PhantomData<fn() -> T>
}

impl<T: Record> Collection<T> {
    pub fn new(store: Arc<dyn CollectionStore>) -> Collection<T> {
        Collection { store, writer: Arc::new(Mutex::new(())), _records: PhantomData }
    }

    /// Snapshot of the records as currently stored.
    pub async fn all(&self) -> Result<Vec<T>> {
        let _writer = self.writer.lock().await;
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || read_records::<T>(store.as_ref())).await?
    }

    /// Loads the records for modification, keeping other writers out
    /// until the returned handle is committed or dropped.
    pub async fn lock(&self) -> Result<Locked<T>> {
        let writer = Arc::clone(&self.writer).lock_owned().await;
        let store = Arc::clone(&self.store);
        let records = task::spawn_blocking({
            let store = Arc::clone(&store);
            move || read_records::<T>(store.as_ref())
        }).await??;
        return Ok(Locked { store, writer, records });
    }
}

/// Records of a collection held under its writer lock.
pub struct Locked<T: Record> {
    store: Arc<dyn CollectionStore>,
    writer: OwnedMutexGuard<()>,
    records: Vec<T>
}

impl<T: Record> Locked<T> {
    /// Persists the records, replacing the whole document, and releases the lock.
    ///
    /// The lock travels with the write itself, so it is only released once the
    /// document is saved, even if the caller stops waiting for the result.
    pub async fn commit(self) -> Result<()> {
        let Locked { store, writer, records } = self;
        task::spawn_blocking(move || {
            let _writer = writer;
            write_records(store.as_ref(), &records)
        }).await?
    }
}

impl<T: Record> Deref for Locked<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.records
    }
}

impl<T: Record> DerefMut for Locked<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.records
    }
}
