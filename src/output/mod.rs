//! Terminal output for command results.

mod table;

pub use table::{COLUMNS, WorkflowTable};
