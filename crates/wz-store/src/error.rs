//! Error types for the storage layer

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error reported by a classification source
pub type BoxedSourceError = Box<dyn std::error::Error + Send + Sync + 'static>;
use wz_domain::{Edition, EditionError};

/// Errors that can occur while building a catalog
#[derive(Error, Debug)]
pub enum StoreError {
    /// The data source could not deliver its data
    #[error("Source error: {0}")]
    Source(#[source] BoxedSourceError),

    /// The delivered data violates a structural invariant
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),
}

/// Structural faults in classification data
///
/// Any of these makes an edition unusable; a catalog is never produced from
/// data that trips one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Level outside 1..=5
    #[error("WZ {edition}: code '{code}' has invalid level {level}")]
    InvalidLevel {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Level found in the data
        level: u8,
    },

    /// The same code appears twice
    #[error("WZ {edition}: duplicate code '{code}'")]
    DuplicateCode {
        /// Edition being built
        edition: Edition,
        /// Duplicated code
        code: String,
    },

    /// A top-level entry names a parent
    #[error("WZ {edition}: top-level code '{code}' must not have a parent (found '{parent}')")]
    UnexpectedParent {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Parent named by the entry
        parent: String,
    },

    /// A nested entry has no parent
    #[error("WZ {edition}: code '{code}' at level {level} has no parent")]
    MissingParent {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Level of the entry
        level: u8,
    },

    /// The parent code does not exist
    #[error("WZ {edition}: code '{code}' references unknown parent '{parent}'")]
    DanglingParent {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Missing parent code
        parent: String,
    },

    /// A child code does not exist
    #[error("WZ {edition}: code '{code}' references unknown child '{child}'")]
    DanglingChild {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Missing child code
        child: String,
    },

    /// The parent does not list the entry among its children
    #[error("WZ {edition}: parent '{parent}' does not list '{code}' as a child")]
    AsymmetricParent {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Parent that omits it
        parent: String,
    },

    /// A listed child names a different parent
    #[error("WZ {edition}: child '{child}' of '{code}' names a different parent")]
    AsymmetricChild {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Child with a mismatching parent
        child: String,
    },

    /// A code is reachable from itself through the parent chain
    #[error("WZ {edition}: parent chain of '{code}' forms a cycle")]
    Cycle {
        /// Edition being built
        edition: Edition,
        /// First code found on the cycle
        code: String,
    },

    /// Parent level is not exactly one above the entry's level
    #[error("WZ {edition}: code '{code}' at level {level} has parent '{parent}' at level {parent_level}")]
    LevelMismatch {
        /// Edition being built
        edition: Edition,
        /// Offending code
        code: String,
        /// Level of the entry
        level: u8,
        /// Parent code
        parent: String,
        /// Level of the parent
        parent_level: u8,
    },

    /// A concordance row references a code missing from its edition
    #[error("concordance references unknown WZ {edition} code '{code}'")]
    UnknownConcordanceCode {
        /// Edition the code should belong to
        edition: Edition,
        /// Missing code
        code: String,
    },
}

/// Errors raised by the bundled data sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// A data file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its schema
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        /// File that failed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A data file names an unsupported edition
    #[error(transparent)]
    Edition(#[from] EditionError),

    /// An in-memory source was not given entries for an edition
    #[error("No entries provided for WZ {0}")]
    MissingEdition(Edition),
}
