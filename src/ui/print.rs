use std::borrow::Cow;
use std::io::{self, Write};

use crate::controllers::{AuthorListController, BookListController, ListController, LoadStatus};
use crate::view_state::Panel;

use super::App;

/// Writes one panel as tab-separated text, for `--print`.
pub fn write_panel<W: Write>(out: &mut W, app: &App, panel: Panel) -> io::Result<()> {
    match panel {
        Panel::Books => write_books(out, app.books()),
        Panel::Authors => write_authors(out, app.authors()),
    }
}

/// Replaces the characters that would split a row or a field with spaces.
fn field(value: &str) -> Cow<'_, str> {
    if value.contains(['\t', '\r', '\n']) {
        Cow::Owned(value.replace(['\t', '\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// Writes the heading, or the reason there is nothing to list. Returns
/// `false` if the list is not loaded.
fn write_heading<W: Write, T>(
    out: &mut W,
    list: &ListController<T>,
    panel: Panel,
) -> io::Result<bool> {
    match list.status() {
        LoadStatus::Loaded => {
            writeln!(out, "{} ({})", panel.title(), list.items().len())?;
            Ok(true)
        }
        LoadStatus::Pending => {
            writeln!(out, "{}: still loading", panel.title())?;
            Ok(false)
        }
        LoadStatus::Failed(err) => {
            let reason = err.to_string();
            writeln!(out, "{}: failed to load: {}", panel.title(), field(&reason))?;
            Ok(false)
        }
    }
}

fn write_books<W: Write>(out: &mut W, books: &BookListController) -> io::Result<()> {
    if !write_heading(out, books, Panel::Books)? {
        return Ok(());
    }

    writeln!(out, "Title\tAuthors\tYear\tISBN")?;
    for book in books.items() {
        let year = book.year.map(|y| y.to_string()).unwrap_or_default();
        let isbn = book.isbn.map(|i| i.to_string()).unwrap_or_default();
        let authors = BookListController::format_authors(&book.authors);
        writeln!(
            out,
            "{}\t{}\t{year}\t{isbn}",
            field(&book.title),
            field(&authors),
        )?;
    }
    Ok(())
}

fn write_authors<W: Write>(out: &mut W, authors: &AuthorListController) -> io::Result<()> {
    if !write_heading(out, authors, Panel::Authors)? {
        return Ok(());
    }

    writeln!(out, "Name\tBooks")?;
    for author in authors.items() {
        let mut titles = author.books.iter().map(|book| field(&book.title));
        let name = author.full_name();
        let first = titles.next().unwrap_or_default();
        writeln!(out, "{}\t{first}", field(&name))?;
        for title in titles {
            writeln!(out, "\t{title}")?;
        }
    }
    Ok(())
}
