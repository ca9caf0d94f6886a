use super::{Bookmark, BookmarkStore};
use crate::model::EmployeeId;

#[derive(Debug, Default, Clone)]
pub struct InMemoryBookmarks {
    entries: Vec<Bookmark>,
}

impl InMemoryBookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.entries.iter().position(|b| b.id == id)
    }
}

impl BookmarkStore for InMemoryBookmarks {
    fn add(&mut self, id: EmployeeId) {
        if self.position(id).is_none() {
            self.entries.push(Bookmark::new(id));
        }
    }

    fn remove(&mut self, id: EmployeeId) {
        self.entries.retain(|b| b.id != id);
    }

    fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.position(id).is_some()
    }

    fn entries(&self) -> Vec<Bookmark> {
        self.entries.clone()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_lifecycle() {
        let mut store = InMemoryBookmarks::new();
        let id = EmployeeId(7);

        assert!(!store.is_bookmarked(id));
        store.add(id);
        assert!(store.is_bookmarked(id));
        store.remove(id);
        assert!(!store.is_bookmarked(id));
    }

    #[test]
    fn add_is_idempotent() {
        let mut store = InMemoryBookmarks::new();
        store.add(EmployeeId(1));
        let first = store.entries()[0].added_at;

        store.add(EmployeeId(1));
        store.add(EmployeeId(1));

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].added_at, first);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = InMemoryBookmarks::new();
        store.add(EmployeeId(1));
        store.remove(EmployeeId(2));
        assert_eq!(store.list(), vec![EmployeeId(1)]);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut store = InMemoryBookmarks::new();
        for id in [5, 2, 9] {
            store.add(EmployeeId(id));
        }
        store.remove(EmployeeId(2));
        store.add(EmployeeId(2));
        assert_eq!(
            store.list(),
            vec![EmployeeId(5), EmployeeId(9), EmployeeId(2)]
        );
    }

    #[test]
    fn toggle_flips_state() {
        let mut store = InMemoryBookmarks::new();
        assert!(store.toggle(EmployeeId(3)));
        assert!(store.is_bookmarked(EmployeeId(3)));
        assert!(!store.toggle(EmployeeId(3)));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut store = InMemoryBookmarks::new();
        store.add(EmployeeId(1));
        store.add(EmployeeId(2));
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn instances_are_independent() {
        let mut a = InMemoryBookmarks::new();
        let b = InMemoryBookmarks::new();
        a.add(EmployeeId(1));
        assert!(!b.is_bookmarked(EmployeeId(1)));
    }
}
