//! Concordance records (the official correspondence table between editions)

use crate::Edition;

/// One row of the concordance table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceRow {
    /// Code in the concordance's source edition
    pub source_code: String,

    /// Code in the target edition
    pub target_code: String,

    /// True if the two codes only overlap in scope
    pub is_partial: bool,

    /// Title of the target entry
    pub target_title: String,
}

impl ConcordanceRow {
    /// Create a new row
    pub fn new(
        source_code: impl Into<String>,
        target_code: impl Into<String>,
        is_partial: bool,
        target_title: impl Into<String>,
    ) -> Self {
        Self {
            source_code: source_code.into(),
            target_code: target_code.into(),
            is_partial,
            target_title: target_title.into(),
        }
    }
}

/// The concordance between the two editions
///
/// Rows are kept in the order the table lists them; that order is the only
/// ordering correspondences carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concordance {
    /// Edition the rows are keyed by
    pub source: Edition,

    /// Rows in table order
    pub rows: Vec<ConcordanceRow>,
}

impl Concordance {
    /// Create an empty concordance keyed by `source`
    pub fn new(source: Edition) -> Self {
        Self {
            source,
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn with_row(mut self, row: ConcordanceRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Edition the rows point into
    pub fn target(&self) -> Edition {
        self.source.other()
    }
}
