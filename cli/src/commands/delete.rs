//! DELETE command - Remove a book from the catalog.

use anyhow::Result;
use catalog_core::Book;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::{HumanReadable, book_url, make_request, output, print_book};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Book ID to delete
    pub id: i64,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Response from deleting a book: the removed record.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct DeletedBook(pub Book);

impl HumanReadable for DeletedBook {
    fn print_human(&self) {
        println!("{}", "Book deleted successfully!".green().bold());
        println!();
        print_book(&self.0);
    }
}

/// Execute the delete command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete book {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let removed: Book = make_request(client.delete(book_url(base_url, args.id))).await?;

    output(&DeletedBook(removed), human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{build_client, spawn_catalog};

    #[tokio::test]
    async fn test_delete_against_server() {
        let base = spawn_catalog().await;
        let client = build_client().unwrap();
        let args = || DeleteArgs { id: 4, yes: false };

        execute(&client, &base, false, args()).await.unwrap();

        let err = make_request::<Book>(client.get(book_url(&base, 4)))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("404"));

        let err = execute(&client, &base, false, args()).await.unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found: Book not found.");
    }
}
