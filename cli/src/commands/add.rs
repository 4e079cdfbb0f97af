//! ADD command - Add a book to the catalog.

use anyhow::Result;
use catalog_core::{Book, BookId};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::{
    HumanReadable, books_url, make_request, normalize_description, output, print_book,
    require_fields,
};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(short, long)]
    pub title: String,

    /// Book author
    #[arg(short, long)]
    pub author: String,

    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Explicit book ID (default: current Unix time in milliseconds)
    #[arg(long)]
    pub id: Option<i64>,
}

/// Response from adding a book.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddedBook(pub Book);

impl HumanReadable for AddedBook {
    fn print_human(&self) {
        println!("{}", "Book added successfully!".green().bold());
        println!();
        print_book(&self.0);
    }
}

/// Id for a new book when none is given.
fn generate_id() -> i64 {
    Utc::now().timestamp_millis()
}

/// Validate the arguments and build the request body.
pub fn build_book(args: AddArgs) -> Result<Book> {
    require_fields(&args.title, &args.author)?;

    Ok(Book {
        id: BookId(args.id.unwrap_or_else(generate_id)),
        title: args.title.trim().to_string(),
        author: args.author.trim().to_string(),
        description: normalize_description(args.description),
    })
}

/// Execute the add command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: AddArgs) -> Result<()> {
    let book = build_book(args)?;

    let created: Book = make_request(client.post(books_url(base_url)).json(&book)).await?;

    output(&AddedBook(created), human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{book_url, build_client, spawn_catalog};

    fn args(title: &str, author: &str) -> AddArgs {
        AddArgs {
            title: title.to_string(),
            author: author.to_string(),
            description: None,
            id: None,
        }
    }

    #[test]
    fn test_build_book_with_explicit_id() {
        let book = build_book(AddArgs {
            id: Some(6),
            description: Some("".to_string()),
            ..args(" Dune ", "Herbert")
        })
        .unwrap();

        assert_eq!(book, Book::new(6, "Dune", "Herbert"));
    }

    #[test]
    fn test_build_book_generates_time_based_id() {
        let before = Utc::now().timestamp_millis();
        let book = build_book(args("Dune", "Herbert")).unwrap();
        let after = Utc::now().timestamp_millis();

        assert!(book.id.get() >= before && book.id.get() <= after);
    }

    #[test]
    fn test_build_book_requires_title_and_author() {
        assert!(build_book(args("", "Herbert")).is_err());
        assert!(build_book(args("Dune", "  ")).is_err());
    }

    #[tokio::test]
    async fn test_add_against_server() {
        let base = spawn_catalog().await;
        let client = build_client().unwrap();

        let dune = || AddArgs {
            id: Some(6),
            ..args("Dune", "Herbert")
        };
        execute(&client, &base, false, dune()).await.unwrap();

        let stored: Book = make_request(client.get(book_url(&base, 6))).await.unwrap();
        assert_eq!(stored, Book::new(6, "Dune", "Herbert"));

        let err = execute(&client, &base, false, dune()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "400 Bad Request: Book with this ID already exists."
        );
    }
}
