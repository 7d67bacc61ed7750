//! Error types for the WZ SDK.

use thiserror::Error;
use wz_domain::{Edition, EditionError};
use wz_store::{BoxedSourceError, IntegrityError, StoreError};

/// Registry operation errors
#[derive(Debug, Error)]
pub enum WzError {
    /// Edition identifier is not one of the supported values
    #[error(transparent)]
    Version(#[from] EditionError),

    /// Code does not exist in the queried edition
    #[error("WZ code '{code}' not found in WZ {edition}")]
    CodeNotFound {
        /// Requested code
        code: String,
        /// Edition that was searched
        edition: Edition,
    },

    /// Classification data is structurally broken; no registry can be built
    #[error("Data integrity error: {0}")]
    Integrity(IntegrityError),

    /// Classification data could not be read
    #[error("Source error: {0}")]
    Source(#[source] BoxedSourceError),
}

impl From<StoreError> for WzError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Source(source) => WzError::Source(source),
            StoreError::Integrity(fault) => WzError::Integrity(fault),
        }
    }
}
