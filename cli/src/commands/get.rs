//! GET command - Show a single book.

use anyhow::Result;
use catalog_core::Book;
use clap::Args;
use reqwest::Client;

use super::{book_url, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Book ID to show
    pub id: i64,
}

/// Execute the get command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: GetArgs) -> Result<()> {
    let book: Book = make_request(client.get(book_url(base_url, args.id))).await?;

    output(&book, human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{build_client, spawn_catalog};

    #[tokio::test]
    async fn test_get_against_server() {
        let base = spawn_catalog().await;
        let client = build_client().unwrap();

        assert!(execute(&client, &base, false, GetArgs { id: 1 }).await.is_ok());

        let err = execute(&client, &base, false, GetArgs { id: 99 })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found: Book not found.");
    }
}
