//! WZ Domain Layer
//!
//! This crate contains the domain model of the WZ classification registry.
//! It defines the value types and the data-source trait every other layer
//! depends upon, and nothing else.
//!
//! ## Key Concepts
//!
//! - **Edition**: one of the two supported releases, 2008 or 2025
//! - **Entry**: a classification code with title, level and hierarchy links
//! - **Concordance**: the official table linking codes across editions
//! - **Correspondence**: one counterpart of a code in the other edition
//!
//! ## Architecture
//!
//! - No I/O
//! - Pure value types only
//! - Validation and navigation live in wz-store
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod concordance;
pub mod correspondence;
pub mod edition;
pub mod entry;
pub mod traits;

// Re-exports for convenience
pub use concordance::{Concordance, ConcordanceRow};
pub use correspondence::Correspondence;
pub use edition::{Edition, EditionError, IntoEdition};
pub use entry::{Entry, MAX_LEVEL};
pub use traits::ClassificationSource;
