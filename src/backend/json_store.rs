use std::{fs, io, path::{Path, PathBuf}};

use log::debug;
use serde_json::Value;

use crate::backend::{CollectionStore, Document, Result, BackendError};

/// Keeps each collection in `<dir>/<name>.json`.
pub struct JsonStore {
    dir: PathBuf
}

impl JsonStore {
    pub fn new(dir: impl AsRef<Path>) -> JsonStore {
        JsonStore { dir: dir.as_ref().to_owned() }
    }

    pub fn document_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    fn io_error(name: &str) -> impl FnOnce(io::Error) -> BackendError + '_ {
        move |source| BackendError::Io { name: name.to_owned(), source }
    }
}

impl CollectionStore for JsonStore {
    fn load(&self, name: &str) -> Result<Document> {
        let path = self.document_path(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", path.display());
                return Ok(Document::new());
            },
            Err(err) => return Err(Self::io_error(name)(err))
        };

        if content.trim().is_empty() {
            return Ok(Document::new());
        }

        let document: Document = serde_json::from_str(&content)
            .map_err(|source| BackendError::Parse { name: name.to_owned(), source })?;
        debug!("loaded {} records from {}", document.len(), path.display());
        return Ok(document);
    }

    /// Rewrites the whole document. The content goes to a temporary sibling
    /// first and is renamed into place, so a reader sees either version in full.
    fn save(&self, name: &str, records: &[Value]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(Self::io_error(name))?;

        let content = serde_json::to_string_pretty(records)
            .map_err(|source| BackendError::Malformed { name: name.to_owned(), source })?;

        let path = self.document_path(name);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, content).map_err(Self::io_error(name))?;
        fs::rename(&staging, &path).map_err(Self::io_error(name))?;

        debug!("saved {} records to {}", records.len(), path.display());
        return Ok(());
    }
}
