use clap::{Parser, builder::styling, error::ErrorKind};
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use reana_client::ReanaError;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// List the workflows on a REANA server.
///
/// Reads REANA_SERVER_URL and REANA_ACCESS_TOKEN from the environment.
#[derive(Parser)]
#[command(name = "reana-client", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source credentials from, skipped when absent
    #[arg(short, long, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long)]
    debug: bool,

    /// Command to execute (supported: list)
    command: Option<String>,

    /// Extra arguments, ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // An unrecognized leading flag is an unknown command, still
            // reported after the configuration check
            init_logging(false);
            log::debug!("{}", err);
            let command = std::env::args_os()
                .nth(1)
                .map(|arg| arg.to_string_lossy().into_owned());
            let result = reana_client::cli::run(command.as_deref(), io::stdout().lock()).await;
            return Ok(exit_code(result));
        }
    };

    if Path::new(&cli.env).is_file() {
        dotenvy::from_filename(&cli.env)
            .with_context(|| format!("Failed to load env file {}", cli.env))?;
    }

    init_logging(cli.debug);

    if !cli.ignored.is_empty() {
        log::debug!(
            "Ignoring extra arguments: {}",
            cli.ignored.join(" ").bright_black()
        );
    }

    let result = reana_client::cli::run(cli.command.as_deref(), io::stdout().lock()).await;
    Ok(exit_code(result))
}

fn init_logging(debug: bool) {
    let log_level = match debug {
        true => "debug",
        false => "warn",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();
}

/// Print a failure and pick the exit status.
///
/// The message goes to stdout, or to stderr when stdout itself is the thing
/// that failed.
fn exit_code(result: Result<(), ReanaError>) -> ExitCode {
    let err = match result {
        Ok(()) => return ExitCode::SUCCESS,
        Err(err) => err,
    };

    let code = err.exit_code();
    log::debug!("Exiting with status {}", code);

    let report = eyre::Report::new(err);
    if writeln!(io::stdout(), "{:#}", report).is_err() {
        let _ = writeln!(io::stderr(), "{:#}", report);
    }
    ExitCode::from(code)
}
