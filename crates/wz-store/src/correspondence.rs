//! Correspondence engine
//!
//! Materializes both directions of the concordance at construction time.
//! Each direction is a plain code → correspondences map; queries never
//! derive one direction from the other.

use crate::error::IntegrityError;
use crate::EntryStore;
use std::collections::HashMap;
use tracing::debug;
use wz_domain::{Concordance, Correspondence, Edition};

/// Correspondences keyed by code of one edition
#[derive(Debug, Default)]
struct CorrespondenceTable {
    by_code: HashMap<String, Vec<Correspondence>>,
}

impl CorrespondenceTable {
    fn push(&mut self, code: &str, correspondence: Correspondence) {
        self.by_code
            .entry(code.to_string())
            .or_default()
            .push(correspondence);
    }

    fn get(&self, code: &str) -> &[Correspondence] {
        self.by_code.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Bidirectional correspondence lookup between the two editions
#[derive(Debug)]
pub struct CorrespondenceEngine {
    from_2008: CorrespondenceTable,
    from_2025: CorrespondenceTable,
}

impl CorrespondenceEngine {
    /// Build both directions from the concordance
    ///
    /// Every code the concordance mentions must exist in its edition's store.
    /// The forward direction carries the titles listed in the concordance;
    /// the reverse direction takes titles from the source edition's store.
    pub fn build(
        concordance: &Concordance,
        wz2008: &EntryStore,
        wz2025: &EntryStore,
    ) -> Result<Self, IntegrityError> {
        let store_for = |edition: Edition| match edition {
            Edition::Wz2008 => wz2008,
            Edition::Wz2025 => wz2025,
        };
        let source_edition = concordance.source;
        let target_edition = concordance.target();
        let source_store = store_for(source_edition);
        let target_store = store_for(target_edition);

        let mut forward = CorrespondenceTable::default();
        let mut reverse = CorrespondenceTable::default();

        for row in &concordance.rows {
            let source_entry = source_store.lookup(&row.source_code).ok_or_else(|| {
                IntegrityError::UnknownConcordanceCode {
                    edition: source_edition,
                    code: row.source_code.clone(),
                }
            })?;
            if !target_store.contains(&row.target_code) {
                return Err(IntegrityError::UnknownConcordanceCode {
                    edition: target_edition,
                    code: row.target_code.clone(),
                });
            }

            forward.push(
                &row.source_code,
                Correspondence::new(
                    row.target_code.clone(),
                    row.target_title.clone(),
                    row.is_partial,
                    target_edition,
                ),
            );
            reverse.push(
                &row.target_code,
                Correspondence::new(
                    row.source_code.clone(),
                    source_entry.title.clone(),
                    row.is_partial,
                    source_edition,
                ),
            );
        }

        debug!(
            rows = concordance.rows.len(),
            source = %source_edition,
            forward_codes = forward.by_code.len(),
            reverse_codes = reverse.by_code.len(),
            "Correspondence tables built"
        );

        let (from_2008, from_2025) = match source_edition {
            Edition::Wz2008 => (forward, reverse),
            Edition::Wz2025 => (reverse, forward),
        };

        Ok(Self {
            from_2008,
            from_2025,
        })
    }

    /// Counterparts of `code` (a code of `edition`) in the other edition
    ///
    /// Returns an empty slice both for codes without correspondences and for
    /// codes that do not exist. Order is the concordance's row order.
    pub fn correspondences_of(&self, edition: Edition, code: &str) -> &[Correspondence] {
        match edition {
            Edition::Wz2008 => self.from_2008.get(code),
            Edition::Wz2025 => self.from_2025.get(code),
        }
    }

    /// Number of codes of `edition` that have at least one correspondence
    pub fn mapped_codes(&self, edition: Edition) -> usize {
        match edition {
            Edition::Wz2008 => self.from_2008.by_code.len(),
            Edition::Wz2025 => self.from_2025.by_code.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wz_domain::{ConcordanceRow, Entry};

    fn stores() -> (EntryStore, EntryStore) {
        let wz2008 = EntryStore::build(
            Edition::Wz2008,
            vec![
                Entry::new("01.13.1", "Anbau von Gemüse (2008)", 1),
                Entry::new("01.19.9", "Anbau sonstiger Pflanzen a. n. g.", 1),
            ],
        )
        .unwrap();
        let wz2025 = EntryStore::build(
            Edition::Wz2025,
            vec![
                Entry::new("01.13.1", "Anbau von Gemüse (2025)", 1),
                Entry::new("01.19.2", "Anbau von Zierpflanzen", 1),
            ],
        )
        .unwrap();
        (wz2008, wz2025)
    }

    fn concordance() -> Concordance {
        Concordance::new(Edition::Wz2025)
            .with_row(ConcordanceRow::new(
                "01.13.1",
                "01.19.9",
                true,
                "Anbau sonstiger Pflanzen a. n. g.",
            ))
            .with_row(ConcordanceRow::new(
                "01.13.1",
                "01.13.1",
                false,
                "Anbau von Gemüse (2008)",
            ))
            .with_row(ConcordanceRow::new(
                "01.19.2",
                "01.19.9",
                true,
                "Anbau sonstiger Pflanzen a. n. g.",
            ))
    }

    #[test]
    fn test_forward_direction_keeps_row_order() {
        let (wz2008, wz2025) = stores();
        let engine = CorrespondenceEngine::build(&concordance(), &wz2008, &wz2025).unwrap();

        let found = engine.correspondences_of(Edition::Wz2025, "01.13.1");
        let codes: Vec<&str> = found.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["01.19.9", "01.13.1"]);
        assert!(found[0].is_partial());
        assert!(!found[1].is_partial());
        assert!(found.iter().all(|c| c.version() == Edition::Wz2008));
    }

    #[test]
    fn test_reverse_direction_uses_source_titles() {
        let (wz2008, wz2025) = stores();
        let engine = CorrespondenceEngine::build(&concordance(), &wz2008, &wz2025).unwrap();

        let found = engine.correspondences_of(Edition::Wz2008, "01.19.9");
        let codes: Vec<&str> = found.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["01.13.1", "01.19.2"]);
        assert_eq!(found[0].title(), "Anbau von Gemüse (2025)");
        assert!(found.iter().all(|c| c.version() == Edition::Wz2025));
    }

    #[test]
    fn test_unknown_code_yields_empty() {
        let (wz2008, wz2025) = stores();
        let engine = CorrespondenceEngine::build(&concordance(), &wz2008, &wz2025).unwrap();

        assert!(engine.correspondences_of(Edition::Wz2025, "INVALID").is_empty());
        assert!(engine.correspondences_of(Edition::Wz2008, "01.13.2").is_empty());
    }

    #[test]
    fn test_mapped_codes() {
        let (wz2008, wz2025) = stores();
        let engine = CorrespondenceEngine::build(&concordance(), &wz2008, &wz2025).unwrap();

        assert_eq!(engine.mapped_codes(Edition::Wz2025), 2);
        assert_eq!(engine.mapped_codes(Edition::Wz2008), 2);
    }

    #[test]
    fn test_concordance_keyed_by_2008() {
        let (wz2008, wz2025) = stores();
        let concordance = Concordance::new(Edition::Wz2008).with_row(ConcordanceRow::new(
            "01.19.9",
            "01.19.2",
            true,
            "Anbau von Zierpflanzen",
        ));
        let engine = CorrespondenceEngine::build(&concordance, &wz2008, &wz2025).unwrap();

        let forward = engine.correspondences_of(Edition::Wz2008, "01.19.9");
        assert_eq!(forward[0].code(), "01.19.2");
        assert_eq!(forward[0].version(), Edition::Wz2025);

        let reverse = engine.correspondences_of(Edition::Wz2025, "01.19.2");
        assert_eq!(reverse[0].code(), "01.19.9");
        assert_eq!(reverse[0].version(), Edition::Wz2008);
    }

    #[test]
    fn test_unknown_source_code_rejected() {
        let (wz2008, wz2025) = stores();
        let concordance = Concordance::new(Edition::Wz2025)
            .with_row(ConcordanceRow::new("99.99.9", "01.13.1", false, "x"));

        let result = CorrespondenceEngine::build(&concordance, &wz2008, &wz2025);
        assert_eq!(
            result.unwrap_err(),
            IntegrityError::UnknownConcordanceCode {
                edition: Edition::Wz2025,
                code: "99.99.9".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_target_code_rejected() {
        let (wz2008, wz2025) = stores();
        let concordance = Concordance::new(Edition::Wz2025)
            .with_row(ConcordanceRow::new("01.13.1", "99.99.9", false, "x"));

        let result = CorrespondenceEngine::build(&concordance, &wz2008, &wz2025);
        assert!(matches!(
            result,
            Err(IntegrityError::UnknownConcordanceCode { edition: Edition::Wz2008, .. })
        ));
    }
}
