use crate::demo::{run_compare, run_demo, CompareArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use qap_compare::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "QAP Comparison Service",
    about = "Score and compare LIHTC projects under the California and Ohio QAP rubrics",
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
    /// Score two sample projects and print the full report as JSON
    Compare(CompareArgs),
    /// Run the canned side-by-side comparison and print a readable summary
    Demo(DemoArgs),
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
        Command::Compare(args) => run_compare(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
