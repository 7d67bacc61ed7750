//! Per-edition entry store
//!
//! Maps codes to entries and owns the structural validation of one edition's
//! hierarchy. Everything is checked once in [`EntryStore::build`]; afterwards
//! the store is read-only and navigation code may rely on every parent and
//! child reference resolving.

use crate::error::IntegrityError;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use wz_domain::{Edition, Entry, MAX_LEVEL};

/// Validated, immutable set of entries for one edition
#[derive(Debug)]
pub struct EntryStore {
    edition: Edition,
    entries: HashMap<String, Entry>,
    sorted_codes: Vec<String>,
}

impl EntryStore {
    /// Build a store from raw entries, validating the hierarchy
    ///
    /// Checks run in a fixed order (per-entry shape, references, cycles,
    /// levels) over codes in lexicographic order, so a given defect is always
    /// reported the same way.
    pub fn build(edition: Edition, entries: Vec<Entry>) -> Result<Self, IntegrityError> {
        let mut map = HashMap::with_capacity(entries.len());

        for entry in entries {
            check_shape(edition, &entry)?;
            if map.contains_key(&entry.code) {
                return Err(IntegrityError::DuplicateCode {
                    edition,
                    code: entry.code,
                });
            }
            map.insert(entry.code.clone(), entry);
        }

        let mut sorted_codes: Vec<String> = map.keys().cloned().collect();
        sorted_codes.sort_unstable();

        let store = Self {
            edition,
            entries: map,
            sorted_codes,
        };
        store.check_links()?;
        store.check_acyclic()?;
        store.check_levels()?;

        debug!(
            edition = %edition,
            entries = store.len(),
            top_level = store.top_level().len(),
            "Entry store built"
        );

        Ok(store)
    }

    /// Edition this store holds
    pub fn edition(&self) -> Edition {
        self.edition
    }

    /// Look up an entry by exact, case-sensitive code
    pub fn lookup(&self, code: &str) -> Option<&Entry> {
        self.entries.get(code)
    }

    /// Whether the code exists in this edition
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// All codes in lexicographic order
    pub fn all_codes(&self) -> &[String] {
        &self.sorted_codes
    }

    /// Level-1 entries in code order
    pub fn top_level(&self) -> Vec<&Entry> {
        self.iter().filter(|entry| entry.is_top_level()).collect()
    }

    /// All entries in code order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.sorted_codes
            .iter()
            .filter_map(move |code| self.entries.get(code))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the edition has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every parent and child reference resolves and is mirrored
    fn check_links(&self) -> Result<(), IntegrityError> {
        for entry in self.iter() {
            if let Some(parent_code) = &entry.parent_code {
                let parent = self.lookup(parent_code).ok_or_else(|| {
                    IntegrityError::DanglingParent {
                        edition: self.edition,
                        code: entry.code.clone(),
                        parent: parent_code.clone(),
                    }
                })?;
                if !parent.child_codes.contains(&entry.code) {
                    return Err(IntegrityError::AsymmetricParent {
                        edition: self.edition,
                        code: entry.code.clone(),
                        parent: parent_code.clone(),
                    });
                }
            }

            for child_code in &entry.child_codes {
                let child = self.lookup(child_code).ok_or_else(|| {
                    IntegrityError::DanglingChild {
                        edition: self.edition,
                        code: entry.code.clone(),
                        child: child_code.clone(),
                    }
                })?;
                if child.parent_code.as_deref() != Some(entry.code.as_str()) {
                    return Err(IntegrityError::AsymmetricChild {
                        edition: self.edition,
                        code: entry.code.clone(),
                        child: child_code.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// No code reaches itself by following parents
    fn check_acyclic(&self) -> Result<(), IntegrityError> {
        // Codes whose parent chain is already known to end at a root.
        let mut rooted: HashSet<&str> = HashSet::with_capacity(self.len());

        for start in &self.sorted_codes {
            let mut path: Vec<&str> = Vec::new();
            let mut on_path: HashSet<&str> = HashSet::new();
            let mut current = Some(start.as_str());

            while let Some(code) = current {
                if rooted.contains(code) {
                    break;
                }
                if !on_path.insert(code) {
                    return Err(IntegrityError::Cycle {
                        edition: self.edition,
                        code: code.to_string(),
                    });
                }
                path.push(code);
                current = self
                    .entries
                    .get(code)
                    .and_then(|entry| entry.parent_code.as_deref());
            }

            rooted.extend(path);
        }
        Ok(())
    }

    /// Each entry sits exactly one level below its parent
    fn check_levels(&self) -> Result<(), IntegrityError> {
        for entry in self.iter() {
            let Some(parent_code) = &entry.parent_code else {
                continue;
            };
            let Some(parent) = self.lookup(parent_code) else {
                continue;
            };
            if parent.level + 1 != entry.level {
                return Err(IntegrityError::LevelMismatch {
                    edition: self.edition,
                    code: entry.code.clone(),
                    level: entry.level,
                    parent: parent_code.clone(),
                    parent_level: parent.level,
                });
            }
        }
        Ok(())
    }
}

/// Level range and parent presence of a single entry
fn check_shape(edition: Edition, entry: &Entry) -> Result<(), IntegrityError> {
    if entry.level == 0 || entry.level > MAX_LEVEL {
        return Err(IntegrityError::InvalidLevel {
            edition,
            code: entry.code.clone(),
            level: entry.level,
        });
    }

    match (&entry.parent_code, entry.level) {
        (Some(parent), 1) => Err(IntegrityError::UnexpectedParent {
            edition,
            code: entry.code.clone(),
            parent: parent.clone(),
        }),
        (None, level) if level > 1 => Err(IntegrityError::MissingParent {
            edition,
            code: entry.code.clone(),
            level,
        }),
        _ => Ok(()),
    }
}
