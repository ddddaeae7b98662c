mod commands;
mod data;
mod error;
mod render;
mod telemetry;
mod timeline;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::check::CheckArgs;
use commands::render::RenderArgs;

#[derive(Debug, Parser)]
#[command(
    name = "daymap",
    version,
    about = "Render a day-summary dashboard from a JSON activity log"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the HTML dashboard from a day data file
    Render(RenderArgs),
    /// Validate a day data file and report what would be rendered
    Check(CheckArgs),
    /// Print the JSON Schema for the day data file
    Schema,
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Render(_) => "render",
            Self::Check(_) => "check",
            Self::Schema => "schema",
        }
    }
}

fn main() -> ExitCode {
    telemetry::init();

    let cli = Cli::parse();

    let _span = tracing::info_span!("command", name = cli.command.name()).entered();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Schema => commands::schema::run_schema(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(exit_err) = e.downcast_ref::<error::ExitError>() {
                eprintln!("error: {exit_err}");
                exit_err.exit_code()
            } else {
                eprintln!("error: {e:#}");
                ExitCode::FAILURE
            }
        }
    }
}
