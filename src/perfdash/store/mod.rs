//! # Bookmark Storage
//!
//! Bookmarks are session state: a set of employee ids the user has marked.
//! They are independent of any particular employee snapshot, so a bookmark
//! may outlive the employee it points at. Consumers simply skip ids that no
//! longer resolve.
//!
//! The store is an explicitly owned object handed to the API layer. Nothing
//! here touches the filesystem; bookmarks end with the process.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryBookmarks`]: single-owner set, the default
//! - [`shared::SharedBookmarks`]: cloneable handle serializing every
//!   operation through a mutex, for embedding in multi-threaded hosts

use crate::model::EmployeeId;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod memory;
pub mod shared;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub id: EmployeeId,
    pub added_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(id: EmployeeId) -> Self {
        Self {
            id,
            added_at: Utc::now(),
        }
    }
}

/// Abstract interface for bookmark state.
///
/// None of the operations can fail. `add` is idempotent and `remove` of an
/// absent id is a no-op.
pub trait BookmarkStore {
    /// Mark an employee. Re-adding keeps the original entry.
    fn add(&mut self, id: EmployeeId);

    /// Unmark an employee.
    fn remove(&mut self, id: EmployeeId);

    fn is_bookmarked(&self, id: EmployeeId) -> bool;

    /// All bookmarks, oldest first.
    fn entries(&self) -> Vec<Bookmark>;

    /// Drop every bookmark.
    fn clear(&mut self);

    /// Bookmarked ids, oldest first.
    fn list(&self) -> Vec<EmployeeId> {
        self.entries().into_iter().map(|b| b.id).collect()
    }

    /// Flip membership and return the new state.
    fn toggle(&mut self, id: EmployeeId) -> bool {
        if self.is_bookmarked(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
