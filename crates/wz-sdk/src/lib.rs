//! WZ Rust SDK
//!
//! Lookup, hierarchy navigation and cross-edition equivalence for the WZ
//! classification of economic activities (editions 2008 and 2025).
//!
//! # Example
//!
//! ```no_run
//! use wz_sdk::Wz;
//! use wz_store::JsonSource;
//!
//! let wz = Wz::new("2025", &JsonSource::new("data")).expect("Failed to load WZ data");
//!
//! let code = wz.get("01.11").expect("Unknown code");
//! for ancestor in code.ancestors() {
//!     println!("{}", ancestor);
//! }
//!
//! for equivalent in wz.find_equivalent("01.13.1", "2008").expect("Invalid edition") {
//!     println!("WZ 2008: {}", equivalent);
//! }
//! ```

#![warn(missing_docs)]

mod code;
mod error;
mod registry;

pub use code::{CodeData, WzCode};
pub use error::WzError;
pub use registry::Wz;

pub use wz_domain::{Correspondence, Edition};
