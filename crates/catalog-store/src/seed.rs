//! Records loaded into a freshly started catalog.

use catalog_core::Book;

/// The five books every seeded catalog starts with, ids 1 through 5.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "To Kill a Mockingbird", "Harper Lee").with_description(
            "A novel about the serious issues of rape and racial inequality told through the eyes of a child.",
        ),
        Book::new(2, "1984", "George Orwell").with_description(
            "A dystopian social science fiction novel and cautionary tale about the dangers of totalitarianism.",
        ),
        Book::new(3, "Pride and Prejudice", "Jane Austen").with_description(
            "A romantic novel that critiques the British landed gentry at the end of the 18th century.",
        ),
        Book::new(4, "The Great Gatsby", "F. Scott Fitzgerald").with_description(
            "A novel that explores themes of wealth, love, and the American Dream in 1920s America.",
        ),
        Book::new(5, "Moby Dick", "Herman Melville").with_description(
            "A story of obsession and revenge as Captain Ahab hunts the white whale, Moby Dick.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::BookId;

    #[test]
    fn test_seed_ids_are_one_through_five() {
        let ids: Vec<BookId> = seed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=5).map(BookId).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_books_have_descriptions() {
        assert!(seed_books().iter().all(|b| b.description.is_some()));
    }
}
