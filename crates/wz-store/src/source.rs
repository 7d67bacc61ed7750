//! Classification data sources
//!
//! [`JsonSource`] reads the generated data files; [`MemorySource`] holds data
//! that is already in memory (tests, embedded data).
//!
//! # File layout
//!
//! ```text
//! <dir>/wz2008.json       {"A": {"l": 1, "t": "...", "c": ["01", ...]}, "01": {"l": 2, "t": "...", "p": "A", ...}}
//! <dir>/wz2025.json       same shape
//! <dir>/concordance.json  {"source": "2025", "rows": [{"source": "01.13.1", "target": "01.13.1", "partial": false, "title": "..."}]}
//! ```
//!
//! Entry files use single-letter keys to keep the shipped data small; they
//! are mapped onto [`Entry`] right after parsing.

use crate::error::SourceError;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use wz_domain::{ClassificationSource, Concordance, ConcordanceRow, Edition, Entry};

/// Name of the concordance file inside a data directory
pub const CONCORDANCE_FILE: &str = "concordance.json";

/// Name of the entry file for `edition` inside a data directory
pub fn entries_file(edition: Edition) -> String {
    format!("wz{}.json", edition.as_str())
}

/// Compact on-disk entry
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "l")]
    level: u8,
    #[serde(rename = "t")]
    title: String,
    #[serde(rename = "p", default)]
    parent: Option<String>,
    #[serde(rename = "c", default)]
    children: Option<Vec<String>>,
}

/// Top-level object of an entry file, in file order
///
/// Repeated codes are kept rather than collapsed so that the entry store
/// can reject them.
struct RawEntries(Vec<(String, RawEntry)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping codes to entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((code, entry)) = map.next_entry::<String, RawEntry>()? {
                    entries.push((code, entry));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// On-disk concordance
#[derive(Debug, Deserialize)]
struct RawConcordance {
    source: String,
    #[serde(default)]
    rows: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    source: String,
    target: String,
    #[serde(default)]
    partial: bool,
    title: String,
}

/// Data source backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct JsonSource {
    dir: PathBuf,
}

impl JsonSource {
    /// Create a source reading from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this source reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, SourceError> {
        let path = self.dir.join(file);
        debug!(path = %path.display(), "Reading classification data");

        let contents = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SourceError::Json { path, source })
    }
}

impl ClassificationSource for JsonSource {
    type Error = SourceError;

    fn entries(&self, edition: Edition) -> Result<Vec<Entry>, Self::Error> {
        let RawEntries(raw) = self.read(&entries_file(edition))?;

        Ok(raw
            .into_iter()
            .map(|(code, raw)| Entry {
                code,
                title: raw.title,
                level: raw.level,
                parent_code: raw.parent,
                child_codes: raw.children.unwrap_or_default(),
            })
            .collect())
    }

    fn concordance(&self) -> Result<Concordance, Self::Error> {
        let raw: RawConcordance = self.read(CONCORDANCE_FILE)?;

        Ok(Concordance {
            source: Edition::parse(&raw.source)?,
            rows: raw
                .rows
                .into_iter()
                .map(|row| ConcordanceRow {
                    source_code: row.source,
                    target_code: row.target,
                    is_partial: row.partial,
                    target_title: row.title,
                })
                .collect(),
        })
    }
}

/// Data source holding entries and concordance in memory
///
/// Editions without entries are reported as [`SourceError::MissingEdition`];
/// a missing concordance reads as an empty one.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<Edition, Vec<Entry>>,
    concordance: Option<Concordance>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entries of `edition`
    pub fn with_entries(mut self, edition: Edition, entries: Vec<Entry>) -> Self {
        self.entries.insert(edition, entries);
        self
    }

    /// Set the concordance
    pub fn with_concordance(mut self, concordance: Concordance) -> Self {
        self.concordance = Some(concordance);
        self
    }
}

impl ClassificationSource for MemorySource {
    type Error = SourceError;

    fn entries(&self, edition: Edition) -> Result<Vec<Entry>, Self::Error> {
        self.entries
            .get(&edition)
            .cloned()
            .ok_or(SourceError::MissingEdition(edition))
    }

    fn concordance(&self) -> Result<Concordance, Self::Error> {
        Ok(self
            .concordance
            .clone()
            .unwrap_or_else(|| Concordance::new(Edition::Wz2025)))
    }
}
