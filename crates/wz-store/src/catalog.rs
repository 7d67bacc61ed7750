//! Catalog: both editions plus the concordance, validated and frozen

use crate::correspondence::CorrespondenceEngine;
use crate::entry_store::EntryStore;
use crate::error::{IntegrityError, StoreError};
use crate::hierarchy::Hierarchy;
use std::time::Instant;
use tracing::{debug, info};
use wz_domain::{ClassificationSource, Concordance, Edition, Entry};

/// Immutable registry data for both editions
///
/// A catalog is built once and then only read. It holds no interior
/// mutability, so it can be shared between threads behind an `Arc`.
#[derive(Debug)]
pub struct Catalog {
    wz2008: EntryStore,
    wz2025: EntryStore,
    correspondences: CorrespondenceEngine,
}

impl Catalog {
    /// Read everything from `source` and build the catalog
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wz_store::{Catalog, JsonSource};
    ///
    /// let catalog = Catalog::load(&JsonSource::new("data")).unwrap();
    /// ```
    pub fn load<S>(source: &S) -> Result<Self, StoreError>
    where
        S: ClassificationSource,
        S::Error: std::error::Error + Send + Sync + 'static,
    {
        let started = Instant::now();

        let wz2008 = source
            .entries(Edition::Wz2008)
            .map_err(|e| StoreError::Source(Box::new(e)))?;
        let wz2025 = source
            .entries(Edition::Wz2025)
            .map_err(|e| StoreError::Source(Box::new(e)))?;
        let concordance = source
            .concordance()
            .map_err(|e| StoreError::Source(Box::new(e)))?;
        debug!(elapsed = ?started.elapsed(), "Classification source read");

        let catalog = Self::from_parts(wz2008, wz2025, &concordance)?;

        info!(
            wz2008 = catalog.wz2008.len(),
            wz2025 = catalog.wz2025.len(),
            concordance_rows = concordance.rows.len(),
            elapsed = ?started.elapsed(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-materialized data
    pub fn from_parts(
        wz2008: Vec<Entry>,
        wz2025: Vec<Entry>,
        concordance: &Concordance,
    ) -> Result<Self, IntegrityError> {
        let wz2008 = EntryStore::build(Edition::Wz2008, wz2008)?;
        let wz2025 = EntryStore::build(Edition::Wz2025, wz2025)?;
        let correspondences = CorrespondenceEngine::build(concordance, &wz2008, &wz2025)?;

        Ok(Self {
            wz2008,
            wz2025,
            correspondences,
        })
    }

    /// Entry store of `edition`
    pub fn store(&self, edition: Edition) -> &EntryStore {
        match edition {
            Edition::Wz2008 => &self.wz2008,
            Edition::Wz2025 => &self.wz2025,
        }
    }

    /// Hierarchy navigator for `edition`
    pub fn hierarchy(&self, edition: Edition) -> Hierarchy<'_> {
        Hierarchy::new(self.store(edition))
    }

    /// Correspondence engine shared by both editions
    pub fn correspondences(&self) -> &CorrespondenceEngine {
        &self.correspondences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySource;
    use wz_domain::ConcordanceRow;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_entries(
                Edition::Wz2008,
                vec![Entry::new("A", "Land- und Forstwirtschaft, Fischerei", 1)],
            )
            .with_entries(
                Edition::Wz2025,
                vec![
                    Entry::new("A", "Land- und Forstwirtschaft, Fischerei", 1),
                    Entry::new("B", "Bergbau und Gewinnung von Steinen und Erden", 1),
                ],
            )
            .with_concordance(Concordance::new(Edition::Wz2025).with_row(ConcordanceRow::new(
                "A",
                "A",
                false,
                "Land- und Forstwirtschaft, Fischerei",
            )))
    }

    #[test]
    fn test_load_from_source() {
        let catalog = Catalog::load(&source()).unwrap();

        assert_eq!(catalog.store(Edition::Wz2008).len(), 1);
        assert_eq!(catalog.store(Edition::Wz2025).len(), 2);
        assert_eq!(catalog.store(Edition::Wz2025).edition(), Edition::Wz2025);
        assert_eq!(
            catalog
                .correspondences()
                .correspondences_of(Edition::Wz2008, "A")
                .len(),
            1
        );
    }

    #[test]
    fn test_missing_edition_is_source_error() {
        let source = MemorySource::new().with_entries(Edition::Wz2008, Vec::new());
        let result = Catalog::load(&source);
        assert!(matches!(result, Err(StoreError::Source(ref e)) if e.to_string().contains("2025")));
    }

    #[test]
    fn test_integrity_fault_propagates() {
        let source = MemorySource::new()
            .with_entries(Edition::Wz2008, vec![Entry::new("01", "orphan", 2)])
            .with_entries(Edition::Wz2025, Vec::new());
        let result = Catalog::load(&source);
        assert!(matches!(
            result,
            Err(StoreError::Integrity(IntegrityError::MissingParent { .. }))
        ));
    }

    #[test]
    fn test_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
