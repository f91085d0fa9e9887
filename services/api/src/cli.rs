use crate::server;
use crate::terminal::{run_catalog, run_diagnose, run_play, run_questions, CatalogArgs, DiagnoseArgs};
use clap::{Args, Parser, Subcommand};
use sweets_quiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sweets Quiz",
    about = "Answer a few questions and get the sweet that suits your mood",
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
    /// Print the question sequence and its options
    Questions,
    /// List the catalog or show a single sweet
    Catalog(CatalogArgs),
    /// Score a scripted session, e.g. --answer 1=relax --answer 5=bitter
    Diagnose(DiagnoseArgs),
    /// Take the quiz interactively in the terminal
    Play,
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
        Command::Questions => run_questions(),
        Command::Catalog(args) => run_catalog(args),
        Command::Diagnose(args) => run_diagnose(args),
        Command::Play => run_play(),
    }
}
