//! CLI helper functions

use crate::{
    client::{ClientOptions, Credentials, ReanaClient},
    error::ReanaError,
    etl::Extractor,
    output::WorkflowTable,
    reana::workflows::{WorkflowSummary, WorkflowsExtractor},
};
use std::io::Write;
use std::str::FromStr;

/// Commands understood by the client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// List workflows on the server
    List,
}

impl FromStr for Command {
    type Err = ReanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            other => Err(ReanaError::UnknownCommand(other.to_string())),
        }
    }
}

/// Render every workflow an extractor yields as a table on `out`
///
/// Nothing is written unless extraction succeeds.
pub async fn list_workflows<E, W>(extractor: &E, out: W) -> Result<usize, ReanaError>
where
    E: Extractor<Item = WorkflowSummary>,
    W: Write,
{
    let workflows = extractor.extract().await?;
    let count = WorkflowTable::new(out).render(&workflows)?;
    log::debug!("Rendered {} workflow(s)", count);
    Ok(count)
}

/// Validate configuration, parse the command and run it
///
/// Credentials are checked before the command so a missing variable is
/// reported even when no command was given.
pub async fn run<W: Write>(command: Option<&str>, out: W) -> Result<(), ReanaError> {
    let credentials = Credentials::from_env()?;
    let command: Command = command.ok_or(ReanaError::NoCommand)?.parse()?;

    match command {
        Command::List => {
            let client = ReanaClient::try_new(credentials, ClientOptions::default())?;
            log::debug!("Listing workflows on {}", client);
            list_workflows(&WorkflowsExtractor::new(client), out).await?;
        }
    }

    Ok(())
}
