//! Bookmark store for Linkshelf.
//!
//! Implements the domain operations over a `StorageBackend`: every
//! mutation loads a whole collection, modifies it, and saves it back
//! while holding that collection's lock. Reads take no lock; saves are
//! atomic at the backend, so a read always sees a complete document.

pub mod ordering;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;

use crate::storage::StorageBackend;
use crate::types::bookmark::Bookmark;
use crate::types::category::{Category, UNCATEGORIZED};
use crate::types::errors::StoreError;

/// Handle to the bookmark store. Cheap to clone; clones share the same
/// backend and locks.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    bookmarks_lock: Arc<Mutex<()>>,
    categories_lock: Arc<Mutex<()>>,
}

impl Store {
    /// Opens the store over the given backend.
    ///
    /// Initializes the medium, guarantees the built-in category exists,
    /// and reassigns any bookmark whose category no longer does. Opening
    /// an already-initialized store changes nothing.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        backend.ensure_initialized()?;

        let mut categories = backend.load_categories()?;
        if !categories.iter().any(|c| c.is_uncategorized()) {
            categories.push(Category::uncategorized());
            backend.save_categories(&categories)?;
            tracing::info!("Created built-in category \"{}\"", UNCATEGORIZED);
        }

        let known: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        let mut bookmarks = backend.load_bookmarks()?;
        let mut repaired = 0usize;
        for bookmark in &mut bookmarks {
            if !known.contains(bookmark.category.as_str()) {
                bookmark.category = UNCATEGORIZED.to_string();
                repaired += 1;
            }
        }
        if repaired > 0 {
            backend.save_bookmarks(&bookmarks)?;
            tracing::warn!(
                "Reassigned {} bookmarks with missing categories to \"{}\"",
                repaired,
                UNCATEGORIZED
            );
        }

        Ok(Store {
            backend,
            bookmarks_lock: Arc::new(Mutex::new(())),
            categories_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Computes the id for a new bookmark: the current millisecond
    /// timestamp, bumped past the highest existing id when two creations
    /// land in the same millisecond.
    fn next_bookmark_id(bookmarks: &[Bookmark]) -> i64 {
        let candidate = Self::now_millis();
        match bookmarks.iter().map(|b| b.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }

    /// Whether a category with this exact name exists.
    fn category_exists(&self, name: &str) -> Result<bool, StoreError> {
        let categories = self.backend.load_categories()?;
        Ok(categories.iter().any(|c| c.name == name))
    }

    // === Bookmarks ===

    /// Lists all bookmarks in document order.
    pub async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.backend.load_bookmarks()?)
    }

    /// Adds a bookmark. An empty or omitted category means the built-in
    /// one; an explicit category must exist.
    pub async fn add_bookmark(
        &self,
        title: &str,
        url: &str,
        category: Option<&str>,
    ) -> Result<Bookmark, StoreError> {
        if title.trim().is_empty() || url.trim().is_empty() {
            return Err(StoreError::Validation(
                "Title and URL are required".to_string(),
            ));
        }
        let category = match category {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNCATEGORIZED.to_string(),
        };

        let _guard = self.bookmarks_lock.lock().await;

        // A cascade delete needs the bookmarks lock too, so the category
        // cannot vanish between this check and the save below.
        if !self.category_exists(&category)? {
            return Err(StoreError::UnknownCategory(category));
        }

        let mut bookmarks = self.backend.load_bookmarks()?;
        let bookmark = Bookmark {
            id: Self::next_bookmark_id(&bookmarks),
            title: title.to_string(),
            url: url.to_string(),
            category,
        };
        bookmarks.push(bookmark.clone());
        self.backend.save_bookmarks(&bookmarks)?;
        Ok(bookmark)
    }

    /// Deletes a bookmark by id. Deleting an id that is not present
    /// still succeeds; the document is saved either way.
    pub async fn delete_bookmark(&self, id: i64) -> Result<(), StoreError> {
        let _guard = self.bookmarks_lock.lock().await;
        let mut bookmarks = self.backend.load_bookmarks()?;
        bookmarks.retain(|b| b.id != id);
        self.backend.save_bookmarks(&bookmarks)?;
        Ok(())
    }

    /// Updates any subset of a bookmark's title, url and category. The
    /// id never changes. Returns the updated bookmark.
    pub async fn update_bookmark(
        &self,
        id: i64,
        title: Option<&str>,
        url: Option<&str>,
        category: Option<&str>,
    ) -> Result<Bookmark, StoreError> {
        if matches!(title, Some(t) if t.trim().is_empty()) {
            return Err(StoreError::Validation("Title cannot be empty".to_string()));
        }
        if matches!(url, Some(u) if u.trim().is_empty()) {
            return Err(StoreError::Validation("URL cannot be empty".to_string()));
        }
        // An empty category means the built-in one, same as on creation
        let category = category.map(|name| if name.is_empty() { UNCATEGORIZED } else { name });

        let _guard = self.bookmarks_lock.lock().await;

        if let Some(name) = category {
            if !self.category_exists(name)? {
                return Err(StoreError::UnknownCategory(name.to_string()));
            }
        }

        let mut bookmarks = self.backend.load_bookmarks()?;
        let bookmark = bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if let Some(t) = title {
            bookmark.title = t.to_string();
        }
        if let Some(u) = url {
            bookmark.url = u.to_string();
        }
        if let Some(c) = category {
            bookmark.category = c.to_string();
        }
        let updated = bookmark.clone();
        self.backend.save_bookmarks(&bookmarks)?;
        Ok(updated)
    }

    /// Moves a bookmark to a different category.
    pub async fn update_bookmark_category(
        &self,
        id: i64,
        category: &str,
    ) -> Result<Bookmark, StoreError> {
        self.update_bookmark(id, None, None, Some(category)).await
    }

    // === Categories ===

    /// Lists all categories in display order.
    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.backend.load_categories()?;
        ordering::sort_for_display(&mut categories);
        Ok(categories)
    }

    /// Adds a category at the end of the user-defined order.
    pub async fn add_category(&self, name: &str, color: &str) -> Result<Category, StoreError> {
        if name.trim().is_empty() || color.trim().is_empty() {
            return Err(StoreError::Validation(
                "Name and color are required".to_string(),
            ));
        }

        let _guard = self.categories_lock.lock().await;

        let mut categories = self.backend.load_categories()?;
        if categories.iter().any(|c| c.name == name) {
            return Err(StoreError::Conflict(name.to_string()));
        }
        let category = Category {
            name: name.to_string(),
            color: color.to_string(),
            order: ordering::next_order(&categories),
        };
        categories.push(category.clone());
        self.backend.save_categories(&categories)?;
        Ok(category)
    }

    /// Deletes a category, first moving its bookmarks to the built-in
    /// one. Deleting the built-in category is forbidden; deleting a name
    /// that does not exist succeeds without changes.
    pub async fn delete_category(&self, name: &str) -> Result<(), StoreError> {
        if name == UNCATEGORIZED {
            return Err(StoreError::Forbidden(format!(
                "The \"{}\" category cannot be deleted",
                UNCATEGORIZED
            )));
        }

        // Lock order is fixed: categories, then bookmarks. Concurrent
        // cascades queue up here instead of deadlocking.
        let _categories_guard = self.categories_lock.lock().await;
        let _bookmarks_guard = self.bookmarks_lock.lock().await;

        let mut categories = self.backend.load_categories()?;
        if !categories.iter().any(|c| c.name == name) {
            return Ok(());
        }

        // Bookmarks are rewritten first: a failure between the two saves
        // leaves an empty category behind, never a dangling reference.
        let mut bookmarks = self.backend.load_bookmarks()?;
        let mut moved = 0usize;
        for bookmark in &mut bookmarks {
            if bookmark.category == name {
                bookmark.category = UNCATEGORIZED.to_string();
                moved += 1;
            }
        }
        if moved > 0 {
            self.backend.save_bookmarks(&bookmarks)?;
        }

        categories.retain(|c| c.name != name);
        self.backend.save_categories(&categories)?;
        tracing::info!("Deleted category \"{}\" ({} bookmarks moved)", name, moved);
        Ok(())
    }

    /// Applies an explicit display order and returns the reordered
    /// collection.
    pub async fn reorder_categories(
        &self,
        desired: &[String],
    ) -> Result<Vec<Category>, StoreError> {
        let _guard = self.categories_lock.lock().await;
        let mut categories = self.backend.load_categories()?;
        ordering::apply_reorder(&mut categories, desired);
        self.backend.save_categories(&categories)?;
        Ok(categories)
    }
}
