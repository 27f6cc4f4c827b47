use crate::quote::{run_credit, run_offers, CreditArgs, OffersArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_calculator::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Calculator",
    about = "Quote loan offers and calculate credits from the command line or over HTTP",
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
    /// Print the four preliminary offers for an amount and term
    Offers(OffersArgs),
    /// Score an applicant from a JSON file and print the resulting credit
    Credit(CreditArgs),
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
        Command::Offers(args) => run_offers(args),
        Command::Credit(args) => run_credit(args),
    }
}
