//! Linkshelf — self-hosted bookmark organizer with named, colored,
//! orderable categories.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod api;
pub mod config;
pub mod storage;
pub mod store;
pub mod types;
