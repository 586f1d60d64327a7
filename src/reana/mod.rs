//! REANA API implementations

pub mod workflows;

pub use workflows::WorkflowsExtractor;
