//! Workflow list response schema
//!
//! Mirrors the body of `GET /api/workflows?type=workflow`:
//! ```json
//! {
//!   "has_next": false,
//!   "has_prev": false,
//!   "items": [
//!     {
//!       "created": "2023-01-01T00:00:00",
//!       "id": "0b4a2d1c-...",
//!       "name": "myflow.3",
//!       "progress": {"run_started_at": "...", "run_finished_at": "..."},
//!       "size": {"human_readable": "12 KiB", "raw": 12288},
//!       "status": "finished",
//!       "user": "00000000-..."
//!     }
//!   ],
//!   "page": 1,
//!   "total": 1,
//!   "user_has_workflows": true
//! }
//! ```
//!
//! Missing fields decode to their zero value and unknown fields are ignored.

use crate::error::ReanaError;
use serde::{Deserialize, Deserializer, Serialize};

/// One page of workflows as returned by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkflowList {
    #[serde(deserialize_with = "null_as_default")]
    pub has_next: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_prev: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<WorkflowSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_has_workflows: bool,
}

impl WorkflowList {
    /// Decode a response body.
    ///
    /// # Errors
    /// Returns `ReanaError::Decode` if the body is not valid JSON or a field
    /// has an incompatible type
    pub fn from_slice(body: &[u8]) -> Result<Self, ReanaError> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkflowSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// `<basename>.<run_number>`
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub progress: Progress,
    #[serde(deserialize_with = "null_as_default")]
    pub size: Size,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Progress {
    #[serde(deserialize_with = "null_as_default")]
    pub run_started_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub run_finished_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Size {
    #[serde(deserialize_with = "null_as_default")]
    pub human_readable: String,
    #[serde(deserialize_with = "null_as_default")]
    pub raw: i64,
}

// REANA sends `null` for timestamps of runs that have not started or finished,
// and a null of any type reads as its zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
