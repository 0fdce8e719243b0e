//! gdm - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gdm::config::DEFAULT_MODEL;
use gdm::{GenerateOptions, GitCli, Settings, generate_commit_message};

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "GDM_LOG";

/// Generate a commit message for the working tree diff.
#[derive(Parser, Debug)]
#[command(name = "gdm")]
#[command(about = "Generate a commit message for the working tree diff")]
#[command(version)]
struct Cli {
    /// The model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Extra context for the message, e.g. an issue number or the intent of the change
    #[arg(trailing_var_arg = true)]
    context: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::from_env();
    let options = GenerateOptions {
        model: cli.model,
        context: cli.context.join(" "),
    };

    match generate_commit_message(&options, &settings, &GitCli::new()).await {
        // The message itself, or the note for an empty diff / empty reply.
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            if e.is_fatal() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Log to stderr so stdout only carries the commit message.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("gdm={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
