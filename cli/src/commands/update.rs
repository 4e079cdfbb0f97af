//! UPDATE command - Replace a book's title, author and description.

use anyhow::Result;
use catalog_core::{Book, BookId};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::{
    HumanReadable, book_url, make_request, normalize_description, output, print_book,
    require_fields,
};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Book ID to update
    pub id: i64,

    /// New title
    #[arg(short, long)]
    pub title: String,

    /// New author
    #[arg(short, long)]
    pub author: String,

    /// New description (omit to clear it)
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Response from updating a book.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdatedBook(pub Book);

impl HumanReadable for UpdatedBook {
    fn print_human(&self) {
        println!("{}", "Book updated successfully!".green().bold());
        println!();
        print_book(&self.0);
    }
}

/// Validate the arguments and build the full replacement record.
pub fn build_replacement(args: UpdateArgs) -> Result<Book> {
    require_fields(&args.title, &args.author)?;

    Ok(Book {
        id: BookId(args.id),
        title: args.title.trim().to_string(),
        author: args.author.trim().to_string(),
        description: normalize_description(args.description),
    })
}

/// Execute the update command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: UpdateArgs) -> Result<()> {
    let url = book_url(base_url, args.id);
    let replacement = build_replacement(args)?;

    let updated: Book = make_request(client.put(&url).json(&replacement)).await?;

    output(&UpdatedBook(updated), human)
}
