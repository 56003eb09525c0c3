//! Transaction module: consensus types live in `types`, re-exported here

pub mod types;

pub use types::*;
