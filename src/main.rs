use std::fs::File;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use booktabs::client::Client;
use booktabs::config::{Overrides, load_settings};
use booktabs::controllers::{AuthorListController, BookListController};
use booktabs::ui::{App, write_panel};
use booktabs::view_state::Panel;

#[derive(Parser, Debug)]
#[command(version, about = "Browse the books and authors of a library API")]
struct Args {
    /// TOML settings file (defaults to ./booktabs.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// API root; the books and authors endpoints are resolved below it
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    books_url: Option<String>,
    #[arg(long)]
    authors_url: Option<String>,
    /// Print one panel to stdout instead of opening the terminal UI
    #[arg(long, value_enum)]
    print: Option<PanelArg>,
    /// Write logs here while the terminal UI is open
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PanelArg {
    Books,
    Authors,
}

impl From<PanelArg> for Panel {
    fn from(value: PanelArg) -> Self {
        match value {
            PanelArg::Books => Panel::Books,
            PanelArg::Authors => Panel::Authors,
        }
    }
}

fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref(), args.print.is_some())?;

    let overrides = Overrides {
        base_url: args.base_url,
        books_url: args.books_url,
        authors_url: args.authors_url,
    };
    let settings = load_settings(args.config.as_deref(), &overrides)?;

    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    let _guard = runtime.enter();

    let client = Client::new(settings.request_timeout()).context("build http client")?;
    let books = BookListController::spawn(&client, settings.books_url.clone());
    let authors = AuthorListController::spawn(&client, settings.authors_url.clone());
    let mut app = App::new(books, authors);

    match args.print {
        Some(panel) => {
            runtime.block_on(app.settle());
            let mut stdout = io::stdout().lock();
            write_panel(&mut stdout, &app, panel.into()).context("write panel")?;
            stdout.flush().context("flush stdout")?;
        }
        None => app.run(settings.tick_rate())?,
    }
    Ok(())
}
