use crate::demo::{
    run_contact, run_demo, run_listing_options, run_listing_search, ContactArgs, DemoArgs,
    OptionsArgs, SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ror_stay::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ROR STAY",
    about = "Browse, filter and serve the ROR STAY rental listings",
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
    /// Filter listings and inspect the allowed filter values
    Listings {
        #[command(subcommand)]
        command: ListingsCommand,
    },
    /// Walk through a scripted landing page session
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ListingsCommand {
    /// Print the listing grid for a filter selection
    Search(SearchArgs),
    /// Print the allowed values for every filter dimension
    Options(OptionsArgs),
    /// Show the contact prompt for one listing
    Contact(ContactArgs),
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
        Command::Listings { command } => match command {
            ListingsCommand::Search(args) => run_listing_search(args),
            ListingsCommand::Options(args) => run_listing_options(args),
            ListingsCommand::Contact(args) => run_contact(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "ror-stay",
            "listings",
            "search",
            "--location",
            "Koramangala",
            "--price-range",
            "under_5000",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Listings {
                command: ListingsCommand::Search(args),
            }) => {
                assert_eq!(args.location.as_deref(), Some("Koramangala"));
                assert_eq!(args.price_range.as_deref(), Some("under_5000"));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["ror-stay"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
