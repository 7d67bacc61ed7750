//! Command implementations.
//!
//! Each command renders its result to a string; `main` prints it.

pub mod browse;
pub mod correspondence;
pub mod lookup;

pub use self::browse::{execute_list, execute_search, execute_top};
pub use self::correspondence::{execute_correspondences, execute_equivalent};
pub use self::lookup::{execute_ancestors, execute_children, execute_descendants, execute_get};
