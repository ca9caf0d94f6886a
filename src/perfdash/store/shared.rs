use super::memory::InMemoryBookmarks;
use super::{Bookmark, BookmarkStore};
use crate::model::EmployeeId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable bookmark handle. Every clone sees the same set, and each
/// operation holds the lock for its whole duration.
#[derive(Debug, Default, Clone)]
pub struct SharedBookmarks {
    inner: Arc<Mutex<InMemoryBookmarks>>,
}

impl SharedBookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryBookmarks> {
        // The inner set has no partial-write states, so a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookmarkStore for SharedBookmarks {
    fn add(&mut self, id: EmployeeId) {
        self.lock().add(id);
    }

    fn remove(&mut self, id: EmployeeId) {
        self.lock().remove(id);
    }

    fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.lock().is_bookmarked(id)
    }

    fn entries(&self) -> Vec<Bookmark> {
        self.lock().entries()
    }

    fn clear(&mut self) {
        self.lock().clear();
    }

    fn toggle(&mut self, id: EmployeeId) -> bool {
        self.lock().toggle(id)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let mut a = SharedBookmarks::new();
        let b = a.clone();
        a.add(EmployeeId(4));
        assert!(b.is_bookmarked(EmployeeId(4)));
    }

    #[test]
    fn concurrent_adds_are_serialized() {
        let store = SharedBookmarks::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let mut handle = store.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        // Every thread adds the shared ids plus its own
                        handle.add(EmployeeId(i));
                        handle.add(EmployeeId(1000 + t));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.len(), 50 + 8);
    }

    #[test]
    fn toggle_is_atomic_read_your_writes() {
        let mut store = SharedBookmarks::new();
        assert!(store.toggle(EmployeeId(1)));
        assert!(store.is_bookmarked(EmployeeId(1)));
        assert!(!store.toggle(EmployeeId(1)));
        assert!(!store.is_bookmarked(EmployeeId(1)));
    }
}
