//! REANA API client and credentials.
//!
//! This module provides the [`ReanaClient`] for talking to a REANA server,
//! along with the [`Credentials`] it authenticates with.

mod credentials;
mod reana;

pub use credentials::{ACCESS_TOKEN_VAR, Credentials, SERVER_URL_VAR};
pub use reana::{ClientOptions, ReanaClient};
