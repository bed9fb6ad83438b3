use crate::controllers::{AuthorListController, BookListController};
use crate::datamodel::{Author, Book};

#[test]
fn format_authors_joins_full_names() {
    assert_eq!(BookListController::format_authors(&[]), "");
    assert_eq!(
        BookListController::format_authors(&[Author::named("Ada", "Lovelace")]),
        "Ada Lovelace"
    );
    assert_eq!(
        BookListController::format_authors(&[Author::named("A", "B"), Author::named("C", "D")]),
        "A B, C D"
    );
}

#[test]
fn format_authors_keeps_input_order() {
    let authors = [
        Author::named("Thomas", "Mann"),
        Author::named("Hermann", "Hesse"),
        Author::named("Ada", "Lovelace"),
    ];
    assert_eq!(
        BookListController::format_authors(&authors),
        "Thomas Mann, Hermann Hesse, Ada Lovelace"
    );
}

/// Titles are separated by `<br>`. An earlier front end dropped the
/// separator and produced `"XY"`; that behavior is intentionally not kept.
#[test]
fn format_books_separates_titles_with_line_breaks() {
    assert_eq!(AuthorListController::format_books(&[]), "");
    assert_eq!(AuthorListController::format_books(&[Book::titled("X")]), "X");
    assert_eq!(
        AuthorListController::format_books(&[Book::titled("X"), Book::titled("Y")]),
        "X<br>Y"
    );
    assert_ne!(
        AuthorListController::format_books(&[Book::titled("X"), Book::titled("Y")]),
        "XY"
    );
}

#[test]
fn format_books_has_no_trailing_separator() {
    let books = [
        Book::titled("Siddhartha"),
        Book::titled("Demian"),
        Book::titled("Steppenwolf"),
    ];
    let formatted = AuthorListController::format_books(&books);
    assert_eq!(formatted, "Siddhartha<br>Demian<br>Steppenwolf");
    assert!(!formatted.ends_with("<br>"));
}

#[test]
fn format_books_leaves_markup_in_titles_alone() {
    assert_eq!(
        AuthorListController::format_books(&[Book::titled("Fish<br>Chips"), Book::titled("Peas")]),
        "Fish<br>Chips<br>Peas"
    );
}
