use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, Tabs};

use crate::controllers::{AuthorListController, BookListController, ListController, LoadStatus};
use crate::view_state::Panel;

use super::App;

const HELP: &str = " b/1 books · a/2 authors · tab switch · q quit ";

pub fn draw(frame: &mut Frame, app: &App) {
    let [tabs_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_tabs(frame, app, tabs_area);

    if app.view().is_books_active() {
        draw_books(frame, app.books(), body_area);
    } else {
        draw_authors(frame, app.authors(), body_area);
    }

    frame.render_widget(Line::from(HELP).dark_gray(), help_area);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let titles: Vec<Line> = Panel::ALL
        .iter()
        .map(|&panel| {
            let title = format!(" {} ", panel.title());
            if view.status(panel).is_empty() {
                Line::from(title)
            } else {
                Line::from(title).bold()
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::bordered().title(" booktabs "))
        .select(view.active().index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED),
        );
    frame.render_widget(tabs, area);
}

/// Renders the placeholder for a list that has nothing to show yet.
/// Returns `false` once the list is loaded.
fn draw_status<T>(frame: &mut Frame, list: &ListController<T>, noun: &str, area: Rect) -> bool {
    let line = match list.status() {
        LoadStatus::Loaded => return false,
        LoadStatus::Pending => Line::from(format!("Loading {noun}…")).italic(),
        LoadStatus::Failed(err) => Line::from(format!("Failed to load {noun}: {err}")).red(),
    };
    let block = Block::bordered().title(format!(" {} ", capitalize(noun)));
    frame.render_widget(Paragraph::new(line).block(block), area);
    true
}

fn draw_books(frame: &mut Frame, books: &BookListController, area: Rect) {
    if draw_status(frame, books, "books", area) {
        return;
    }

    let header = Row::new(["Title", "Authors", "Year", "ISBN"]).style(header_style());
    let rows = books.items().iter().map(|book| {
        Row::new([
            Cell::from(book.title.as_str()),
            Cell::from(BookListController::format_authors(&book.authors)),
            Cell::from(book.year.map(|y| y.to_string()).unwrap_or_default()),
            Cell::from(book.isbn.map(|i| i.to_string()).unwrap_or_default()),
        ])
    });

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(6),
        Constraint::Length(15),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().title(format!(" Books ({}) ", books.items().len())));
    frame.render_widget(table, area);
}

fn draw_authors(frame: &mut Frame, authors: &AuthorListController, area: Rect) {
    if draw_status(frame, authors, "authors", area) {
        return;
    }

    let header = Row::new(["Name", "Books"]).style(header_style());
    let rows = authors.items().iter().map(|author| {
        let lines: Vec<Line> = author
            .books
            .iter()
            .map(|book| Line::from(book.title.as_str()))
            .collect();
        let height = u16::try_from(lines.len().max(1)).unwrap_or(u16::MAX);
        Row::new([Cell::from(author.full_name()), Cell::from(Text::from(lines))])
            .height(height)
    });

    let widths = [Constraint::Percentage(35), Constraint::Fill(1)];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().title(format!(" Authors ({}) ", authors.items().len())));
    frame.render_widget(table, area);
}

fn header_style() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
