use clap::{Args, Parser, Subcommand};
use resume_screen::error::AppError;

use crate::screen::{run_roles, run_screen, ScreenArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Resume Screening Service",
    about = "Evaluate resumes against role skill profiles from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Screen a single resume and print the evaluation report
    Screen(ScreenArgs),
    /// List the roles in the built-in catalog with their required skills
    Roles,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Screen(args) => run_screen(args),
        Command::Roles => run_roles(),
    }
}
