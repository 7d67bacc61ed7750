//! WZ Storage Layer
//!
//! Validated in-memory storage for both WZ editions and the concordance
//! between them.
//!
//! # Architecture
//!
//! - [`EntryStore`]: per-edition code → entry map, validated on build
//! - [`Hierarchy`]: parent/children/ancestors/descendants derived from a store
//! - [`CorrespondenceEngine`]: both concordance directions, precomputed
//! - [`Catalog`]: the three above for both editions, frozen after load
//! - [`JsonSource`] / [`MemorySource`]: where the raw data comes from
//!
//! # Examples
//!
//! ```no_run
//! use wz_domain::Edition;
//! use wz_store::{Catalog, JsonSource};
//!
//! let catalog = Catalog::load(&JsonSource::new("data")).unwrap();
//! let store = catalog.store(Edition::Wz2025);
//! assert!(store.contains("A"));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod correspondence;
pub mod entry_store;
pub mod error;
pub mod hierarchy;
pub mod source;

pub use catalog::Catalog;
pub use correspondence::CorrespondenceEngine;
pub use entry_store::EntryStore;
pub use error::{BoxedSourceError, IntegrityError, SourceError, StoreError};
pub use hierarchy::Hierarchy;
pub use source::{JsonSource, MemorySource};
