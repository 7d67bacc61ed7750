//! The per-edition registry facade.

use crate::code::WzCode;
use crate::error::WzError;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use wz_domain::{ClassificationSource, Correspondence, Edition, IntoEdition};
use wz_store::{Catalog, EntryStore};

/// Entry point for one WZ edition
///
/// All data lives in a shared, immutable [`Catalog`]; cloning a `Wz` or
/// creating the facade for the other edition via [`Wz::for_edition`] does not
/// copy or reload anything. A `Wz` can be shared freely between threads.
#[derive(Clone)]
pub struct Wz {
    edition: Edition,
    catalog: Arc<Catalog>,
}

impl Wz {
    /// Build a registry for `version` from a data source
    ///
    /// The version is validated before the source is touched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wz_sdk::Wz;
    /// use wz_store::JsonSource;
    ///
    /// let wz = Wz::new("2025", &JsonSource::new("data")).unwrap();
    /// let agriculture = wz.get("A").unwrap();
    /// println!("{}", agriculture);
    /// ```
    pub fn new<V, S>(version: V, source: &S) -> Result<Self, WzError>
    where
        V: IntoEdition,
        S: ClassificationSource,
        S::Error: std::error::Error + Send + Sync + 'static,
    {
        let edition = version.into_edition()?;
        let catalog = Catalog::load(source)?;
        debug!(edition = %edition, codes = catalog.store(edition).len(), "WZ registry ready");

        Ok(Self {
            edition,
            catalog: Arc::new(catalog),
        })
    }

    /// Create a registry for `version` over an already-loaded catalog
    pub fn from_catalog<V: IntoEdition>(version: V, catalog: Arc<Catalog>) -> Result<Self, WzError> {
        Ok(Self {
            edition: version.into_edition()?,
            catalog,
        })
    }

    /// Registry for another edition sharing this registry's catalog
    pub fn for_edition<V: IntoEdition>(&self, version: V) -> Result<Self, WzError> {
        Self::from_catalog(version, Arc::clone(&self.catalog))
    }

    /// Edition served by this registry
    pub fn edition(&self) -> Edition {
        self.edition
    }

    /// Edition identifier ("2008" or "2025")
    pub fn version(&self) -> &'static str {
        self.edition.as_str()
    }

    /// Underlying catalog
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Number of codes in this edition
    pub fn len(&self) -> usize {
        self.store().len()
    }

    /// True if this edition has no codes
    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// Look up a code
    ///
    /// Fails with [`WzError::CodeNotFound`] if the code does not exist in this
    /// edition. Lookup is exact and case-sensitive.
    pub fn get(&self, code: &str) -> Result<WzCode<'_>, WzError> {
        self.store()
            .lookup(code)
            .map(|entry| WzCode::new(&self.catalog, self.edition, entry))
            .ok_or_else(|| WzError::CodeNotFound {
                code: code.to_string(),
                edition: self.edition,
            })
    }

    /// Whether the code exists in this edition
    pub fn exists(&self, code: &str) -> bool {
        self.store().contains(code)
    }

    /// All codes, sorted ascending
    pub fn get_all_codes(&self) -> &[String] {
        self.store().all_codes()
    }

    /// Level-1 codes, sorted by code
    pub fn get_top_level_codes(&self) -> Vec<WzCode<'_>> {
        self.store()
            .top_level()
            .into_iter()
            .map(|entry| WzCode::new(&self.catalog, self.edition, entry))
            .collect()
    }

    /// All codes of this edition in code order
    pub fn iter(&self) -> impl Iterator<Item = WzCode<'_>> + '_ {
        self.store()
            .iter()
            .map(move |entry| WzCode::new(&self.catalog, self.edition, entry))
    }

    /// Codes whose title contains `query`
    ///
    /// Without `case_sensitive`, query and titles are both lower-cased before
    /// comparison. Results are in code order.
    pub fn search_in_titles(&self, query: &str, case_sensitive: bool) -> Vec<WzCode<'_>> {
        if case_sensitive {
            self.iter().filter(|code| code.title().contains(query)).collect()
        } else {
            let needle = query.to_lowercase();
            self.iter()
                .filter(|code| code.title().to_lowercase().contains(&needle))
                .collect()
        }
    }

    /// Counterparts of `code` in the other edition
    ///
    /// Empty both when the code has no recorded correspondence and when the
    /// code does not exist.
    pub fn get_correspondences(&self, code: &str) -> &[Correspondence] {
        self.catalog
            .correspondences()
            .correspondences_of(self.edition, code)
    }

    /// Codes of `target_version` equivalent to `code`
    ///
    /// Fails with [`WzError::Version`] for an unsupported target. Returns an
    /// empty list when the target is this registry's own edition. Order is
    /// the concordance order, full and partial matches interleaved.
    pub fn find_equivalent<V: IntoEdition>(
        &self,
        code: &str,
        target_version: V,
    ) -> Result<Vec<WzCode<'_>>, WzError> {
        let target = target_version.into_edition()?;
        if target == self.edition {
            return Ok(Vec::new());
        }

        let target_store = self.catalog.store(target);
        Ok(self
            .get_correspondences(code)
            .iter()
            .filter_map(|corr| target_store.lookup(corr.code()))
            .map(|entry| WzCode::new(&self.catalog, target, entry))
            .collect())
    }

    fn store(&self) -> &EntryStore {
        self.catalog.store(self.edition)
    }
}

impl fmt::Debug for Wz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wz")
            .field("version", &self.edition.as_str())
            .field("codes", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wz_domain::{Concordance, ConcordanceRow, Entry};
    use wz_store::MemorySource;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_entries(
                Edition::Wz2008,
                vec![
                    Entry::new("A", "Land- und Forstwirtschaft, Fischerei", 1)
                        .with_children(["01"]),
                    Entry::new("01", "Landwirtschaft, Jagd", 2).with_parent("A"),
                ],
            )
            .with_entries(
                Edition::Wz2025,
                vec![
                    Entry::new("A", "Land- und Forstwirtschaft, Fischerei", 1)
                        .with_children(["01"]),
                    Entry::new("01", "Landwirtschaft, Jagd", 2).with_parent("A"),
                    Entry::new("B", "Bergbau", 1),
                ],
            )
            .with_concordance(Concordance::new(Edition::Wz2025).with_row(ConcordanceRow::new(
                "01",
                "01",
                false,
                "Landwirtschaft, Jagd",
            )))
    }

    #[test]
    fn test_version_checked_before_source() {
        // An empty source would fail to load; the version error must come first.
        let result = Wz::new("2020", &MemorySource::new());
        assert!(matches!(result, Err(WzError::Version(_))));
    }

    #[test]
    fn test_source_failure_surfaces() {
        let err = Wz::new("2025", &MemorySource::new()).unwrap_err();
        assert!(matches!(err, WzError::Source(_)));

        let cause = std::error::Error::source(&err).unwrap();
        assert!(matches!(
            cause.downcast_ref::<wz_store::SourceError>(),
            Some(wz_store::SourceError::MissingEdition(_))
        ));
    }

    #[test]
    fn test_for_edition_shares_catalog() {
        let wz2025 = Wz::new(Edition::Wz2025, &source()).unwrap();
        let wz2008 = wz2025.for_edition("2008").unwrap();

        assert!(Arc::ptr_eq(wz2025.catalog(), wz2008.catalog()));
        assert_eq!(wz2025.len(), 3);
        assert_eq!(wz2008.len(), 2);
        assert_eq!(wz2008.version(), "2008");
    }

    #[test]
    fn test_find_equivalent_resolves_target_codes() {
        let wz = Wz::new("2025", &source()).unwrap();

        let equivalents = wz.find_equivalent("01", Edition::Wz2008).unwrap();
        assert_eq!(equivalents.len(), 1);
        assert_eq!(equivalents[0].code(), "01");
        assert_eq!(equivalents[0].version(), Edition::Wz2008);
        assert_ne!(equivalents[0], wz.get("01").unwrap());
    }

    #[test]
    fn test_debug_output() {
        let wz = Wz::new("2025", &source()).unwrap();
        let repr = format!("{:?}", wz);
        assert!(repr.contains("2025"));
        assert!(repr.contains("codes: 3"));
    }
}
