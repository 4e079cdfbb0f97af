//! LIST command - List every book in the catalog.

use anyhow::Result;
use catalog_core::Book;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::{HumanReadable, books_url, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// The catalog as returned by the server.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BookList(pub Vec<Book>);

impl HumanReadable for BookList {
    fn print_human(&self) {
        println!("{}", "Book Catalog".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "No books available. Add a new book!".dimmed());
            return;
        }

        for book in &self.0 {
            println!(
                "  {} {} {}",
                format!("[{}]", book.id).yellow(),
                book.title.bold(),
                format!("by {}", book.author).cyan()
            );
            if let Some(description) = &book.description {
                println!("      {}", truncate(description, 72).dimmed());
            }
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(client: &Client, base_url: &str, human: bool, _args: ListArgs) -> Result<()> {
    let books: Vec<Book> = make_request(client.get(books_url(base_url))).await?;

    output(&BookList(books), human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{build_client, spawn_catalog};

    #[tokio::test]
    async fn test_list_against_server() {
        let base = spawn_catalog().await;
        let client = build_client().unwrap();

        assert!(execute(&client, &base, false, ListArgs {}).await.is_ok());
        assert!(execute(&client, &base, true, ListArgs {}).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_unreachable_server() {
        let client = build_client().unwrap();
        let err = execute(&client, "http://127.0.0.1:1", false, ListArgs {})
            .await
            .unwrap_err();
        assert!(err.to_string().contains("request failed"));
    }
}
