//! Subcommands and the helpers they share.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use catalog_core::Book;
use colored::Colorize;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

/// Output that can be printed for humans as well as JSON.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Book {
    fn print_human(&self) {
        print_book(self);
    }
}

/// Build the HTTP client used by every command.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("catalog-cli/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .context("failed to build HTTP client")
}

/// URL of the books collection.
pub fn books_url(base_url: &str) -> String {
    format!("{}/books/", base_url.trim_end_matches('/'))
}

/// URL of a single book.
pub fn book_url(base_url: &str, id: i64) -> String {
    format!("{}{}", books_url(base_url), id)
}

/// Send a request and decode a JSON response, turning error bodies into errors.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await.context("request failed")?;
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .await
            .context("failed to decode response");
    }

    let body = response.text().await.unwrap_or_default();
    Err(anyhow!(error_message(status, &body)))
}

/// Message for a failed response: the server's `error.message` when present,
/// otherwise the raw body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, message)
    }
}

/// Print as pretty JSON, or as formatted text with `--human`.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Title and author must be present after trimming.
pub fn require_fields(title: &str, author: &str) -> Result<()> {
    if title.trim().is_empty() || author.trim().is_empty() {
        bail!("Please fill in the required fields: Title and Author.");
    }
    Ok(())
}

/// An empty description is sent as no description.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Truncate text to a maximum number of characters, appending "...".
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

pub(crate) fn print_book(book: &Book) {
    println!("  {} {}", "ID:".cyan(), book.id);
    println!("  {} {}", "Title:".cyan(), book.title.bold());
    println!("  {} {}", "Author:".cyan(), book.author);
    match &book.description {
        Some(description) => println!("  {} {}", "Description:".cyan(), description),
        None => println!("  {} {}", "Description:".cyan(), "(none)".dimmed()),
    }
}

/// Start a seeded catalog server on an ephemeral port and return its base URL.
#[cfg(test)]
pub(crate) async fn spawn_catalog() -> String {
    use catalog_server::{AppState, ServerConfig, build_app};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");
    let app =
        build_app(AppState::from_config(ServerConfig::default())).expect("Failed to build app");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(books_url("http://127.0.0.1:8000"), "http://127.0.0.1:8000/books/");
        assert_eq!(books_url("http://127.0.0.1:8000/"), "http://127.0.0.1:8000/books/");
        assert_eq!(book_url("http://h", 6), "http://h/books/6");
    }

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"Book not found."}}"#;
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, body),
            "404 Not Found: Book not found."
        );
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "502 Bad Gateway: upstream down"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_make_request_decodes_books() {
        let base = spawn_catalog().await;
        let client = build_client().unwrap();

        let books: Vec<Book> = make_request(client.get(books_url(&base))).await.unwrap();
        assert_eq!(books.len(), 5);
        assert_eq!(books[1].title, "1984");
    }

    #[tokio::test]
    async fn test_make_request_surfaces_server_error() {
        let base = spawn_catalog().await;
        let client = build_client().unwrap();

        let err = make_request::<Book>(client.get(book_url(&base, 99)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found: Book not found.");
    }

    #[test]
    fn test_require_fields() {
        assert!(require_fields("Dune", "Herbert").is_ok());
        assert!(require_fields("   ", "Herbert").is_err());
        assert!(require_fields("Dune", "").is_err());
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("  ".to_string())), None);
        assert_eq!(
            normalize_description(Some(" Spice ".to_string())),
            Some("Spice".to_string())
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 10), "a long ...");
    }
}
