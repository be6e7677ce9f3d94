use std::fmt;

// === StorageError ===

/// Errors raised by the persistence layer.
#[derive(Debug)]
pub enum StorageError {
    /// The storage medium could not be read or written.
    Unavailable(String),
    /// A stored document exists but could not be parsed.
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Stored document corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === StoreError ===

/// Errors raised by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Required input was missing or empty.
    Validation(String),
    /// A category with the given name already exists.
    Conflict(String),
    /// The operation is not allowed on the built-in category.
    Forbidden(String),
    /// Bookmark with the given ID was not found.
    NotFound(i64),
    /// The named category does not exist.
    UnknownCategory(String),
    /// The persistence layer failed.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            StoreError::Conflict(name) => write!(f, "Category already exists: {}", name),
            StoreError::Forbidden(msg) => write!(f, "Operation not allowed: {}", msg),
            StoreError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            StoreError::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err.to_string())
    }
}
