//! Hierarchy navigation over a validated entry store
//!
//! Relations are derived on demand from the codes stored on each entry;
//! nothing is cached, so a [`Hierarchy`] is just a borrowed view and can be
//! created freely from any thread.

use crate::EntryStore;
use std::collections::{HashSet, VecDeque};
use wz_domain::Entry;

/// Read-only navigator for one edition's hierarchy
#[derive(Debug, Clone, Copy)]
pub struct Hierarchy<'a> {
    store: &'a EntryStore,
}

impl<'a> Hierarchy<'a> {
    /// Create a navigator over `store`
    pub fn new(store: &'a EntryStore) -> Self {
        Self { store }
    }

    /// Parent entry, or `None` for top-level entries
    pub fn parent_of(&self, entry: &Entry) -> Option<&'a Entry> {
        entry
            .parent_code
            .as_deref()
            .and_then(|code| self.store.lookup(code))
    }

    /// Direct children, ordered by code and de-duplicated
    pub fn children_of(&self, entry: &Entry) -> Vec<&'a Entry> {
        let mut children: Vec<&'a Entry> = entry
            .child_codes
            .iter()
            .filter_map(|code| self.store.lookup(code))
            .collect();
        children.sort_unstable_by(|a, b| a.code.cmp(&b.code));
        children.dedup_by(|a, b| a.code == b.code);
        children
    }

    /// Ancestors from the immediate parent up to the top-level entry
    ///
    /// The result has exactly `level - 1` elements for any stored entry.
    pub fn ancestors_of(&self, entry: &Entry) -> Vec<&'a Entry> {
        let mut ancestors = Vec::with_capacity(usize::from(entry.level.saturating_sub(1)));
        let mut current = self.parent_of(entry);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent_of(parent);
        }
        ancestors
    }

    /// All entries transitively below `entry`, breadth-first, without duplicates
    pub fn descendants_of(&self, entry: &Entry) -> Vec<&'a Entry> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(entry.code.as_str());

        let mut descendants = Vec::new();
        let mut queue: VecDeque<&'a Entry> = self.children_of(entry).into();

        while let Some(next) = queue.pop_front() {
            if !visited.insert(next.code.as_str()) {
                continue;
            }
            descendants.push(next);
            queue.extend(self.children_of(next));
        }
        descendants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wz_domain::Edition;

    fn store() -> EntryStore {
        EntryStore::build(
            Edition::Wz2008,
            vec![
                Entry::new("A", "Land- und Forstwirtschaft, Fischerei", 1)
                    .with_children(["02", "01"]),
                Entry::new("01", "Landwirtschaft", 2)
                    .with_parent("A")
                    .with_children(["01.1"]),
                Entry::new("01.1", "Anbau einjähriger Pflanzen", 3)
                    .with_parent("01")
                    .with_children(["01.11"]),
                Entry::new("01.11", "Anbau von Getreide", 4)
                    .with_parent("01.1")
                    .with_children(["01.11.0"]),
                Entry::new("01.11.0", "Anbau von Getreide", 5).with_parent("01.11"),
                Entry::new("02", "Forstwirtschaft und Holzeinschlag", 2).with_parent("A"),
            ],
        )
        .unwrap()
    }

    fn codes(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.code.clone()).collect()
    }

    #[test]
    fn test_parent_of() {
        let store = store();
        let nav = Hierarchy::new(&store);

        let subclass = store.lookup("01.11.0").unwrap();
        assert_eq!(nav.parent_of(subclass).unwrap().code, "01.11");

        let section = store.lookup("A").unwrap();
        assert!(nav.parent_of(section).is_none());
    }

    #[test]
    fn test_children_sorted_by_code() {
        let store = store();
        let nav = Hierarchy::new(&store);

        let section = store.lookup("A").unwrap();
        assert_eq!(codes(&nav.children_of(section)), vec!["01", "02"]);

        let leaf = store.lookup("02").unwrap();
        assert!(nav.children_of(leaf).is_empty());
    }

    #[test]
    fn test_ancestors_of() {
        let store = store();
        let nav = Hierarchy::new(&store);

        let subclass = store.lookup("01.11.0").unwrap();
        let ancestors = nav.ancestors_of(subclass);
        assert_eq!(codes(&ancestors), vec!["01.11", "01.1", "01", "A"]);
        assert_eq!(ancestors.len(), usize::from(subclass.level - 1));
    }

    #[test]
    fn test_ancestors_length_matches_level() {
        let store = store();
        let nav = Hierarchy::new(&store);

        for entry in store.iter() {
            let ancestors = nav.ancestors_of(entry);
            assert_eq!(ancestors.len(), usize::from(entry.level - 1), "{}", entry.code);
            if let Some(last) = ancestors.last() {
                assert_eq!(last.level, 1);
            }
        }
    }

    #[test]
    fn test_descendants_of() {
        let store = store();
        let nav = Hierarchy::new(&store);

        let section = store.lookup("A").unwrap();
        let mut found = codes(&nav.descendants_of(section));
        found.sort();
        assert_eq!(found, vec!["01", "01.1", "01.11", "01.11.0", "02"]);

        let leaf = store.lookup("01.11.0").unwrap();
        assert!(nav.descendants_of(leaf).is_empty());
    }

    #[test]
    fn test_descendants_skip_repeated_child_links() {
        let store = EntryStore::build(
            Edition::Wz2025,
            vec![
                Entry::new("A", "a", 1).with_children(["01", "01"]),
                Entry::new("01", "b", 2).with_parent("A"),
            ],
        )
        .unwrap();
        let nav = Hierarchy::new(&store);

        let section = store.lookup("A").unwrap();
        assert_eq!(codes(&nav.children_of(section)), vec!["01"]);
        assert_eq!(codes(&nav.descendants_of(section)), vec!["01"]);
    }
}
