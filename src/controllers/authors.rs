use crate::datamodel::{Author, Book};

use super::ListController;

/// Markup placed between titles; the terminal view turns it back into lines.
pub const LINE_BREAK: &str = "<br>";

/// Owns the authors panel's collection.
pub type AuthorListController = ListController<Author>;

impl ListController<Author> {
    /// Renders an author's book titles separated by [`LINE_BREAK`].
    pub fn format_books(books: &[Book]) -> String {
        books
            .iter()
            .map(|book| book.title.as_str())
            .collect::<Vec<_>>()
            .join(LINE_BREAK)
    }
}
