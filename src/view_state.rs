/// One of the two mutually exclusive display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Books,
    Authors,
}

impl Panel {
    /// Tab order.
    pub const ALL: [Panel; 2] = [Panel::Books, Panel::Authors];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Books => "Books",
            Panel::Authors => "Authors",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Panel::Books => 0,
            Panel::Authors => 1,
        }
    }

    pub fn other(self) -> Panel {
        match self {
            Panel::Books => Panel::Authors,
            Panel::Authors => Panel::Books,
        }
    }
}

const ACTIVE: &str = " active";
const INACTIVE: &str = "";

/// Which panel is visible. Exactly one is active at any time; the status
/// flags are derived from `active` on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Panel,
}

impl ViewState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.initialize();
        state
    }

    pub fn initialize(&mut self) {
        self.show_books();
    }

    pub fn show_books(&mut self) {
        self.active = Panel::Books;
    }

    pub fn show_authors(&mut self) {
        self.active = Panel::Authors;
    }

    pub fn show(&mut self, panel: Panel) {
        match panel {
            Panel::Books => self.show_books(),
            Panel::Authors => self.show_authors(),
        }
    }

    pub fn toggle(&mut self) {
        self.show(self.active.other());
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_books_active(&self) -> bool {
        self.active == Panel::Books
    }

    pub fn is_authors_active(&self) -> bool {
        self.active == Panel::Authors
    }

    pub fn status_books(&self) -> &'static str {
        if self.is_books_active() { ACTIVE } else { INACTIVE }
    }

    pub fn status_authors(&self) -> &'static str {
        if self.is_authors_active() { ACTIVE } else { INACTIVE }
    }

    pub fn status(&self, panel: Panel) -> &'static str {
        match panel {
            Panel::Books => self.status_books(),
            Panel::Authors => self.status_authors(),
        }
    }
}
