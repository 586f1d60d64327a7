//! REANA Client
//!
//! A minimal client that lists the workflows on a REANA server as a table

pub mod cli;
pub mod client;
pub mod error;
pub mod etl;
pub mod output;
pub mod reana;

// Re-exports for convenience
pub use client::{ClientOptions, Credentials, ReanaClient};
pub use error::ReanaError;
pub use etl::Extractor;
pub use output::WorkflowTable;
pub use reana::workflows::{WorkflowList, WorkflowName, WorkflowSummary, WorkflowsExtractor};
