//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain and the places
//! classification data comes from. Implementations live in other crates.

use crate::{Concordance, Edition, Entry};

/// Supplier of raw classification data
///
/// Implemented by the infrastructure layer (wz-store). A source must be able
/// to deliver everything up front; the registry never reads it again after
/// construction.
pub trait ClassificationSource {
    /// Error type for source operations
    type Error;

    /// All entries of one edition, in any order
    fn entries(&self, edition: Edition) -> Result<Vec<Entry>, Self::Error>;

    /// The concordance between the two editions
    fn concordance(&self) -> Result<Concordance, Self::Error>;
}

impl<S: ClassificationSource + ?Sized> ClassificationSource for &S {
    type Error = S::Error;

    fn entries(&self, edition: Edition) -> Result<Vec<Entry>, Self::Error> {
        (**self).entries(edition)
    }

    fn concordance(&self) -> Result<Concordance, Self::Error> {
        (**self).concordance()
    }
}
