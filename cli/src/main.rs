//! Command-line client for the book catalog service.
//!
//! Commands:
//! - list: Show every book in the catalog
//! - get: Show a single book
//! - add: Add a book
//! - update: Replace a book's title, author and description
//! - delete: Remove a book
//!
//! Configuration via environment:
//! - CATALOG_URL: Base URL of the catalog server (default: http://127.0.0.1:8000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, update::UpdateArgs,
};

/// Book catalog CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Catalog server URL
    #[arg(
        long,
        env = "CATALOG_URL",
        default_value = "http://127.0.0.1:8000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every book in the catalog
    List(ListArgs),

    /// Show a single book
    Get(GetArgs),

    /// Add a book
    Add(AddArgs),

    /// Replace a book's title, author and description
    Update(UpdateArgs),

    /// Remove a book
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, &cli.url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, &cli.url, cli.human, args).await,
        Commands::Update(args) => {
            commands::update::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from([
            "catalog", "add", "--title", "Dune", "--author", "Herbert", "--id", "6",
        ]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.title, "Dune");
                assert_eq!(args.id, Some(6));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_delete_with_global_flags() {
        let cli = Cli::parse_from([
            "catalog", "delete", "6", "-y", "--human", "--url", "http://books:8000",
        ]);
        assert!(cli.human);
        assert_eq!(cli.url, "http://books:8000");
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.id, 6);
                assert!(args.yes);
            }
            _ => panic!("expected delete"),
        }
    }
}
