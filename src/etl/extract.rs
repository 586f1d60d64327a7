//! Extractor trait for pulling records from a source

use crate::error::ReanaError;

/// Extractor trait for extracting records from a source
///
/// The list command renders whatever an extractor yields, so tests can swap
/// the REANA API for an in-memory source.
///
/// # Example
/// ```no_run
/// use reana_client::ReanaError;
/// use reana_client::etl::Extractor;
/// use reana_client::reana::workflows::WorkflowSummary;
///
/// struct FixedExtractor {
///     items: Vec<WorkflowSummary>,
/// }
///
/// impl Extractor for FixedExtractor {
///     type Item = WorkflowSummary;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>, ReanaError> {
///         Ok(self.items.clone())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract items from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (network, read, decoding)
    fn extract(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Self::Item>, ReanaError>> + Send;
}
