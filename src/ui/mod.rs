//! Terminal front end: a tab bar over the two list panels.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::controllers::{AuthorListController, BookListController};
use crate::view_state::ViewState;

mod print;
mod render;

pub use print::write_panel;
pub use render::draw;

pub struct App {
    view: ViewState,
    books: BookListController,
    authors: AuthorListController,
    should_quit: bool,
}

impl App {
    pub fn new(books: BookListController, authors: AuthorListController) -> Self {
        Self {
            view: ViewState::new(),
            books,
            authors,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn books(&self) -> &BookListController {
        &self.books
    }

    pub fn authors(&self) -> &AuthorListController {
        &self.authors
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies any fetch results that arrived since the last tick. Returns
    /// `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let books = self.books.poll();
        let authors = self.authors.poll();
        books || authors
    }

    /// Waits for both fetches to finish.
    pub async fn settle(&mut self) {
        self.books.settle().await;
        self.authors.settle().await;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('b') | KeyCode::Char('1') => self.view.show_books(),
            KeyCode::Char('a') | KeyCode::Char('2') => self.view.show_authors(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => self.view.toggle(),
            _ => {}
        }
    }

    /// Runs the interactive loop until the user quits. Fetch results are
    /// picked up every `tick_rate`.
    pub fn run(&mut self, tick_rate: Duration) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal, tick_rate);
        let restored = restore_terminal(&mut terminal);
        result.and(restored)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        tick_rate: Duration,
    ) -> anyhow::Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| draw(frame, &*self)).context("draw")?;

        while !self.should_quit {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            let mut dirty = false;

            if event::poll(timeout).context("poll terminal events")? {
                match event::read().context("read terminal event")? {
                    Event::Key(key) => {
                        self.handle_key(key);
                        dirty = true;
                    }
                    Event::Resize(..) => dirty = true,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                dirty |= self.tick();
                last_tick = Instant::now();
            }

            if dirty && !self.should_quit {
                terminal.draw(|frame| draw(frame, &*self)).context("draw")?;
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).context("enter alt screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    terminal::disable_raw_mode().context("disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("leave alt screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
