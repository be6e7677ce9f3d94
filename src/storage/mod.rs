//! Linkshelf persistence layer.
//!
//! Each collection lives in its own JSON document that is loaded and
//! saved whole. The `StorageBackend` trait hides the medium: the file
//! backend is production, the memory backend backs tests.
//!
//! # Usage
//!
//! ```no_run
//! use linkshelf::storage::{FileBackend, MemoryBackend};
//!
//! // Documents live under a data directory
//! let backend = FileBackend::new("./data");
//!
//! // Or keep everything in memory for testing
//! let backend = MemoryBackend::default();
//! ```

pub mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
