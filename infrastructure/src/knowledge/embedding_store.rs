//! Persisted knowledge base embeddings.
//!
//! A JSON file holding one vector per entry id, tagged with the embedding
//! model. A vector is reused only when the model and the embedded text both
//! match, so edited entries are re-embedded.

use super::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredEmbedding {
    text: String,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingFile {
    model: String,
    entries: BTreeMap<String, StoredEmbedding>,
}

#[derive(Serialize)]
struct EmbeddingFileRef<'a> {
    model: &'a str,
    entries: &'a BTreeMap<String, StoredEmbedding>,
}

pub struct EmbeddingStore {
    path: PathBuf,
    model: String,
    entries: BTreeMap<String, StoredEmbedding>,
    dirty: bool,
}

impl EmbeddingStore {
    /// Load the store at `path` for `model`.
    ///
    /// A missing or unreadable file, or one written for another model,
    /// starts empty.
    pub fn open(path: impl Into<PathBuf>, model: impl Into<String>) -> Self {
        let path = path.into();
        let model = model.into();

        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<EmbeddingFile>(&content) {
                Ok(file) if file.model == model => file.entries,
                Ok(file) => {
                    debug!(
                        "Embedding store {} was built with {}, starting over",
                        path.display(),
                        file.model
                    );
                    BTreeMap::new()
                }
                Err(e) => {
                    warn!("Ignoring unreadable embedding store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            path,
            model,
            entries,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored vector for `id`, if it was computed from the same `text`.
    pub fn get(&self, id: &str, text: &str) -> Option<&[f32]> {
        self.entries
            .get(id)
            .filter(|stored| stored.text == text)
            .map(|stored| stored.embedding.as_slice())
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>, embedding: Vec<f32>) {
        self.entries.insert(
            id.into(),
            StoredEmbedding {
                text: text.into(),
                embedding,
            },
        );
        self.dirty = true;
    }

    /// Drop vectors of entries that are no longer in the knowledge base.
    pub fn retain_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = ids.into_iter().collect();
        let before = self.entries.len();
        self.entries.retain(|id, _| keep.contains(id.as_str()));
        if self.entries.len() != before {
            self.dirty = true;
        }
    }

    /// Write the store if anything changed since it was opened.
    pub fn save(&mut self) -> Result<(), IndexError> {
        if !self.dirty {
            return Ok(());
        }
        let io_error = |source| IndexError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string(&EmbeddingFileRef {
            model: &self.model,
            entries: &self.entries,
        })
        .map_err(|e| IndexError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        // Write then rename so a crash never leaves a half-written store
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_error)?;
        std::fs::rename(&tmp, &self.path).map_err(io_error)?;

        self.dirty = false;
        debug!("Saved {} embeddings to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}
