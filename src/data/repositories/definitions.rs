use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::data::models::{DictionaryError, Result, Table};

/// JSON file holding the whole dictionary table.
#[derive(Debug, Clone)]
pub struct DefinitionsStore {
    path: PathBuf,
}

impl DefinitionsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the table from disk, or returns the seed table when the file does
    /// not exist yet. The seed is only written on the first mutation.
    pub fn load(&self) -> Result<Table> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "No definitions file at {:?}, starting from the seed dictionary",
                    self.path
                );
                return Ok(Table::seed());
            }
            Err(e) => {
                return Err(DictionaryError::Persistence(format!(
                    "Failed to read {:?}: {}",
                    self.path, e
                )));
            }
        };

        let table: Table =
            serde_json::from_str(&content).map_err(|source| DictionaryError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        log::info!("Loaded {} words from {:?}", table.len(), self.path);
        Ok(table)
    }

    /// Overwrites the file with `table` via a sibling temp file that is
    /// persisted over the target, so readers never see a half-written document.
    /// The temp file is removed on every failure path when it is dropped.
    pub fn flush(&self, table: &Table) -> Result<()> {
        log::debug!("Flushing {} words to {:?}", table.len(), self.path);

        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)
                    .map_err(|e| DictionaryError::Persistence(e.to_string()))?;
                parent
            }
            None => Path::new("."),
        };

        let content = Self::render(table)?;

        let mut file = NamedTempFile::new_in(parent).map_err(|e| {
            DictionaryError::Persistence(format!("Failed to create temp file: {}", e))
        })?;
        file.write_all(&content).map_err(|e| {
            DictionaryError::Persistence(format!("Failed to write: {}", e))
        })?;
        file.as_file().sync_all().map_err(|e| {
            DictionaryError::Persistence(format!("Failed to sync: {}", e))
        })?;

        file.persist(&self.path).map_err(|e| {
            DictionaryError::Persistence(format!("Failed to rename: {}", e.error))
        })?;

        Ok(())
    }

    // Four-space indent, same as the files this service has always written.
    fn render(table: &Table) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        table
            .serialize(&mut serializer)
            .map_err(|e| DictionaryError::Persistence(e.to_string()))?;
        buf.push(b'\n');
        Ok(buf)
    }
}
