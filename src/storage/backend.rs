use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::bookmark::Bookmark;
use crate::types::category::Category;
use crate::types::errors::StorageError;

/// Envelope for the bookmarks document: `{ "bookmarks": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarkDocument {
    bookmarks: Vec<Bookmark>,
}

/// Envelope for the categories document: `{ "categories": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryDocument {
    categories: Vec<Category>,
}

/// Abstract interface for whole-document collection I/O.
///
/// The trait covers the "how" of storage (filesystem vs memory) while the
/// store covers the "what" (validation, ordering, cascades). Every load
/// returns the entire collection; every save replaces it.
pub trait StorageBackend: Send + Sync {
    /// Create the medium's structures if absent. Called once when the
    /// store opens; afterwards a missing document is a hard error.
    fn ensure_initialized(&self) -> Result<(), StorageError>;

    /// Load the full bookmarks collection.
    fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StorageError>;

    /// Replace the full bookmarks collection.
    fn save_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<(), StorageError>;

    /// Load the full categories collection.
    fn load_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Replace the full categories collection.
    fn save_categories(&self, categories: &[Category]) -> Result<(), StorageError>;
}

// === FileBackend ===

/// Stores each collection as a pretty-printed JSON file under a data
/// directory: `bookmarks.json` and `categories.json`.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        FileBackend {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn bookmarks_path(&self) -> PathBuf {
        self.data_dir.join("bookmarks.json")
    }

    fn categories_path(&self) -> PathBuf {
        self.data_dir.join("categories.json")
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StorageError> {
        let content = fs::read_to_string(path).map_err(|e| {
            StorageError::Unavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            StorageError::Corrupt(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn write_document<T: Serialize>(&self, path: &Path, document: &T) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(document).map_err(|e| {
            StorageError::Unavailable(format!("Failed to encode {}: {}", path.display(), e))
        })?;

        // Temp file lives next to the target so the rename stays on one
        // filesystem; readers only ever see the old or the new document.
        let tmp_file = self
            .data_dir
            .join(format!(".document-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(|e| {
            StorageError::Unavailable(format!("Failed to write {}: {}", tmp_file.display(), e))
        })?;
        fs::rename(&tmp_file, path).map_err(|e| {
            StorageError::Unavailable(format!("Failed to replace {}: {}", path.display(), e))
        })
    }
}

impl StorageBackend for FileBackend {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            StorageError::Unavailable(format!(
                "Failed to create {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;
        if !self.bookmarks_path().exists() {
            self.write_document(&self.bookmarks_path(), &BookmarkDocument::default())?;
        }
        if !self.categories_path().exists() {
            self.write_document(&self.categories_path(), &CategoryDocument::default())?;
        }
        Ok(())
    }

    fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StorageError> {
        let document: BookmarkDocument = self.read_document(&self.bookmarks_path())?;
        Ok(document.bookmarks)
    }

    fn save_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
        let document = BookmarkDocument {
            bookmarks: bookmarks.to_vec(),
        };
        self.write_document(&self.bookmarks_path(), &document)
    }

    fn load_categories(&self) -> Result<Vec<Category>, StorageError> {
        let document: CategoryDocument = self.read_document(&self.categories_path())?;
        Ok(document.categories)
    }

    fn save_categories(&self, categories: &[Category]) -> Result<(), StorageError> {
        let document = CategoryDocument {
            categories: categories.to_vec(),
        };
        self.write_document(&self.categories_path(), &document)
    }
}

// === MemoryBackend ===

/// Keeps both collections in process memory. Loads return a copy, saves
/// replace the whole collection.
#[derive(Default)]
pub struct MemoryBackend {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    bookmarks: Vec<Bookmark>,
    categories: Vec<Category>,
}

impl MemoryBackend {
    /// Backend pre-seeded with both collections, so tests can stage
    /// legacy documents (dangling references, odd order values).
    pub fn with_data(bookmarks: Vec<Bookmark>, categories: Vec<Category>) -> Self {
        MemoryBackend {
            inner: Mutex::new(MemoryState {
                bookmarks,
                categories,
            }),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, MemoryState>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Unavailable("Memory state lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StorageError> {
        Ok(self.state()?.bookmarks.clone())
    }

    fn save_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
        self.state()?.bookmarks = bookmarks.to_vec();
        Ok(())
    }

    fn load_categories(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.state()?.categories.clone())
    }

    fn save_categories(&self, categories: &[Category]) -> Result<(), StorageError> {
        self.state()?.categories = categories.to_vec();
        Ok(())
    }
}
