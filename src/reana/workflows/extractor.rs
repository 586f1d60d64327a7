//! Workflows API extractor
//!
//! Fetches the workflow list from REANA via GET /api/workflows?type=workflow

use super::{WorkflowList, WorkflowSummary};
use crate::client::ReanaClient;
use crate::error::ReanaError;
use crate::etl::Extractor;

/// API path of the workflow listing, without the access token.
pub const WORKFLOWS_PATH: &str = "/api/workflows?type=workflow";

/// Extractor for REANA workflows
///
/// Only the first page the server returns is extracted; `has_next` is
/// reported in the log but never followed.
///
/// # Example
/// ```no_run
/// use reana_client::client::{ClientOptions, Credentials, ReanaClient};
/// use reana_client::etl::Extractor;
/// use reana_client::reana::workflows::WorkflowsExtractor;
///
/// # async fn example() -> Result<(), reana_client::ReanaError> {
/// let credentials = Credentials::new("https://localhost:30443", "my-token");
/// let client = ReanaClient::try_new(credentials, ClientOptions::default())?;
///
/// let extractor = WorkflowsExtractor::new(client);
/// let workflows = extractor.extract().await?;
/// # Ok(())
/// # }
/// ```
pub struct WorkflowsExtractor {
    client: ReanaClient,
}

impl WorkflowsExtractor {
    pub fn new(client: ReanaClient) -> Self {
        Self { client }
    }

    /// Fetch and decode one page of the workflow list
    pub async fn fetch_page(&self) -> Result<WorkflowList, ReanaError> {
        log::debug!("Fetching workflows from {}", self.client);

        let body = self.client.get(WORKFLOWS_PATH).await?;
        let list = WorkflowList::from_slice(&body)?;

        log::debug!(
            "Decoded page {} with {} workflow(s), total {}",
            list.page,
            list.items.len(),
            list.total
        );

        Ok(list)
    }
}

impl Extractor for WorkflowsExtractor {
    type Item = WorkflowSummary;

    async fn extract(&self) -> Result<Vec<Self::Item>, ReanaError> {
        let list = self.fetch_page().await?;

        if list.has_next {
            log::info!(
                "Showing page {} only ({} of {} workflow(s)), further pages are not fetched",
                list.page,
                list.items.len(),
                list.total
            );
        }

        Ok(list.items)
    }
}
