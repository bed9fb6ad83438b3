use crate::datamodel::{Author, Book};

use super::ListController;

pub const AUTHOR_SEPARATOR: &str = ", ";

/// Owns the books panel's collection.
pub type BookListController = ListController<Book>;

impl ListController<Book> {
    /// Renders a book's authors as `"First Last, First Last"`.
    pub fn format_authors(authors: &[Author]) -> String {
        let mut formatted = String::new();
        for (i, author) in authors.iter().enumerate() {
            if i > 0 {
                formatted.push_str(AUTHOR_SEPARATOR);
            }
            formatted.push_str(&author.firstname);
            formatted.push(' ');
            formatted.push_str(&author.lastname);
        }
        formatted
    }
}
