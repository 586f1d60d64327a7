//! REANA Workflows API
//!
//! Provides the response schema, run-name parsing and the extractor for the
//! workflow listing endpoint.

mod extractor;
mod model;
mod name;

pub use extractor::{WORKFLOWS_PATH, WorkflowsExtractor};
pub use model::{Progress, Size, WorkflowList, WorkflowSummary};
pub use name::WorkflowName;
