//! Extraction abstraction
//!
//! Sources of records implement [`Extractor`]; the CLI consumes them without
//! knowing whether the data came from the network or from memory.

mod extract;

pub use extract::Extractor;
