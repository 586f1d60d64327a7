//! Error taxonomy for the client.
//!
//! Every failure the CLI can hit is a [`ReanaError`] variant, and every
//! variant maps to a process exit code through [`ReanaError::exit_code`].

use thiserror::Error;

/// Missing configuration or a failure writing output.
pub const EXIT_CONFIG: u8 = 1;
/// Missing or unknown command.
pub const EXIT_USAGE: u8 = 2;
/// Invalid URL, client construction or transport failure.
pub const EXIT_TRANSPORT: u8 = 3;
/// The response body could not be read.
pub const EXIT_READ: u8 = 4;
/// The response body was not valid JSON.
pub const EXIT_DECODE: u8 = 5;
/// The server answered with a non-success status.
pub const EXIT_STATUS: u8 = 6;

#[derive(Debug, Error)]
pub enum ReanaError {
    /// A required environment variable is unset or empty.
    #[error("Please set {0} environment variable.")]
    MissingEnv(&'static str),

    /// No command argument was given.
    #[error("Usage: reana-client <command>\nExample: reana-client list")]
    NoCommand,

    #[error("ERROR: Unknown command {0}")]
    UnknownCommand(String),

    /// The request URL built from `REANA_SERVER_URL` does not parse.
    #[error("Invalid request URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built or the request never completed.
    #[error(transparent)]
    Transport(reqwest::Error),

    /// Reading the response body failed part way.
    #[error(transparent)]
    BodyRead(reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Failed to decode workflow list")]
    Decode(#[from] serde_json::Error),

    /// Writing the table to the output stream failed.
    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

impl ReanaError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingEnv(_) | Self::Output(_) => EXIT_CONFIG,
            Self::NoCommand | Self::UnknownCommand(_) => EXIT_USAGE,
            Self::InvalidUrl(_) | Self::Transport(_) => EXIT_TRANSPORT,
            Self::BodyRead(_) => EXIT_READ,
            Self::Decode(_) => EXIT_DECODE,
            Self::Status { .. } => EXIT_STATUS,
        }
    }
}
