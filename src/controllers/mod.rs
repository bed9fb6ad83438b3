mod authors;
mod books;
mod list;

pub use authors::{AuthorListController, LINE_BREAK};
pub use books::{AUTHOR_SEPARATOR, BookListController};
pub use list::{ListController, LoadStatus};
