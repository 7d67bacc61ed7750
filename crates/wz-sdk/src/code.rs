//! Public view of a single classification code.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use wz_domain::{Correspondence, Edition, Entry};
use wz_store::Catalog;

/// A classification code of one edition
///
/// Borrowed from the registry's catalog and cheap to copy. Two values are
/// equal when code and edition match, regardless of which lookup produced
/// them. Relations (`parent`, `children`, ...) are computed on each call.
#[derive(Clone, Copy)]
pub struct WzCode<'a> {
    catalog: &'a Catalog,
    edition: Edition,
    entry: &'a Entry,
}

impl<'a> WzCode<'a> {
    pub(crate) fn new(catalog: &'a Catalog, edition: Edition, entry: &'a Entry) -> Self {
        Self {
            catalog,
            edition,
            entry,
        }
    }

    /// The code, e.g. "01.11"
    pub fn code(&self) -> &'a str {
        &self.entry.code
    }

    /// German description
    pub fn title(&self) -> &'a str {
        &self.entry.title
    }

    /// Hierarchy level, 1 through 5
    pub fn level(&self) -> u8 {
        self.entry.level
    }

    /// Edition this code belongs to
    pub fn version(&self) -> Edition {
        self.edition
    }

    /// Parent code, or `None` at level 1
    pub fn parent(&self) -> Option<WzCode<'a>> {
        self.catalog
            .hierarchy(self.edition)
            .parent_of(self.entry)
            .map(|entry| self.sibling(entry))
    }

    /// Direct children, ordered by code
    pub fn children(&self) -> Vec<WzCode<'a>> {
        self.catalog
            .hierarchy(self.edition)
            .children_of(self.entry)
            .into_iter()
            .map(|entry| self.sibling(entry))
            .collect()
    }

    /// Ancestors from the immediate parent up to the top level
    pub fn ancestors(&self) -> Vec<WzCode<'a>> {
        self.catalog
            .hierarchy(self.edition)
            .ancestors_of(self.entry)
            .into_iter()
            .map(|entry| self.sibling(entry))
            .collect()
    }

    /// Every code below this one
    pub fn descendants(&self) -> HashSet<WzCode<'a>> {
        self.catalog
            .hierarchy(self.edition)
            .descendants_of(self.entry)
            .into_iter()
            .map(|entry| self.sibling(entry))
            .collect()
    }

    /// Counterparts in the other edition, in concordance order
    pub fn correspondences(&self) -> &'a [Correspondence] {
        self.catalog
            .correspondences()
            .correspondences_of(self.edition, &self.entry.code)
    }

    /// Owned, serializable snapshot of the code's attributes
    pub fn to_data(&self) -> CodeData {
        CodeData {
            code: self.entry.code.clone(),
            title: self.entry.title.clone(),
            level: self.entry.level,
            version: self.edition.as_str().to_string(),
        }
    }

    fn sibling(&self, entry: &'a Entry) -> WzCode<'a> {
        WzCode::new(self.catalog, self.edition, entry)
    }
}

impl PartialEq for WzCode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.edition == other.edition && self.entry.code == other.entry.code
    }
}

impl Eq for WzCode<'_> {}

impl Hash for WzCode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entry.code.hash(state);
        self.edition.hash(state);
    }
}

impl fmt::Display for WzCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entry.code, self.entry.title)
    }
}

impl fmt::Debug for WzCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WzCode")
            .field("code", &self.entry.code)
            .field("title", &self.entry.title)
            .field("level", &self.entry.level)
            .field("version", &self.edition.as_str())
            .finish()
    }
}

/// Plain data form of a code (for JSON output and other surfaces)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeData {
    /// The code
    pub code: String,
    /// German description
    pub title: String,
    /// Hierarchy level
    pub level: u8,
    /// Edition identifier ("2008" or "2025")
    pub version: String,
}
