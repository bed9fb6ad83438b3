use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use reqwest::Url;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/v1/";
pub const DEFAULT_CONFIG_FILE: &str = "booktabs.toml";

const BOOKS_PATH: &str = "books/";
const AUTHORS_PATH: &str = "authors/";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub books_url: Url,
    pub authors_url: Url,
    pub request_timeout_secs: u64,
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base url is valid");
        Self::from_base(&base).expect("default endpoints are valid")
    }
}

/// Keys accepted in the TOML file. Everything is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub base_url: Option<String>,
    pub books_url: Option<String>,
    pub authors_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub tick_rate_ms: Option<u64>,
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub books_url: Option<String>,
    pub authors_url: Option<String>,
}

impl Settings {
    pub fn from_base(base: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            books_url: base.join(BOOKS_PATH).context("join books path")?,
            authors_url: base.join(AUTHORS_PATH).context("join authors path")?,
            request_timeout_secs: 30,
            tick_rate_ms: 100,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    fn apply_base(&mut self, raw: &str) -> anyhow::Result<()> {
        let base = parse_base_url(raw)?;
        let Settings {
            books_url,
            authors_url,
            ..
        } = Settings::from_base(&base)?;
        self.books_url = books_url;
        self.authors_url = authors_url;
        Ok(())
    }

    fn apply_file(&mut self, file: FileSettings) -> anyhow::Result<()> {
        if let Some(v) = file.base_url {
            self.apply_base(&v)?;
        }
        if let Some(v) = file.books_url {
            self.books_url = parse_url(&v)?;
        }
        if let Some(v) = file.authors_url {
            self.authors_url = parse_url(&v)?;
        }
        if let Some(v) = file.request_timeout_secs {
            self.request_timeout_secs = non_zero("request_timeout_secs", v)?;
        }
        if let Some(v) = file.tick_rate_ms {
            self.tick_rate_ms = non_zero("tick_rate_ms", v)?;
        }
        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(v) = var("BOOKTABS_BASE_URL") {
            self.apply_base(&v)?;
        }
        if let Some(v) = var("BOOKTABS_BOOKS_URL") {
            self.books_url = parse_url(&v)?;
        }
        if let Some(v) = var("BOOKTABS_AUTHORS_URL") {
            self.authors_url = parse_url(&v)?;
        }
        if let Some(v) = var("BOOKTABS_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_non_zero("BOOKTABS_REQUEST_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = var("BOOKTABS_TICK_RATE_MS") {
            self.tick_rate_ms = parse_non_zero("BOOKTABS_TICK_RATE_MS", &v)?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &Overrides) -> anyhow::Result<()> {
        if let Some(v) = &overrides.base_url {
            self.apply_base(v)?;
        }
        if let Some(v) = &overrides.books_url {
            self.books_url = parse_url(v)?;
        }
        if let Some(v) = &overrides.authors_url {
            self.authors_url = parse_url(v)?;
        }
        Ok(())
    }
}

/// Builds settings from defaults, then the config file, then the process
/// environment, then `overrides`.
///
/// An explicitly named file must exist; the default `booktabs.toml` is
/// optional.
pub fn load_settings(config_file: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Settings> {
    load_settings_with(config_file, overrides, |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    config_file: Option<&Path>,
    overrides: &Overrides,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(file) = read_file_settings(config_file)? {
        settings.apply_file(file)?;
    }
    settings.apply_env(var)?;
    settings.apply_overrides(overrides)?;

    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

fn read_file_settings(config_file: Option<&Path>) -> anyhow::Result<Option<FileSettings>> {
    let (path, required) = match config_file {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("read config file {}", path.display()));
        }
    };

    let file = toml::from_str(&raw)
        .with_context(|| format!("parse config file {}", path.display()))?;
    Ok(Some(file))
}

/// Timeouts and tick rates must be positive.
fn non_zero(name: &str, value: u64) -> anyhow::Result<u64> {
    anyhow::ensure!(value > 0, "{name} must be greater than zero");
    Ok(value)
}

fn parse_non_zero(name: &str, raw: &str) -> anyhow::Result<u64> {
    let value = raw
        .trim()
        .parse()
        .with_context(|| format!("{name}={raw:?}"))?;
    non_zero(name, value).with_context(|| format!("{name}={raw:?}"))
}

fn parse_url(raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw.trim()).with_context(|| format!("invalid url {raw:?}"))
}

/// Base URLs are joined with relative paths, so they need a trailing slash to
/// keep their last segment.
fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        parse_url(raw)
    } else {
        parse_url(&format!("{raw}/"))
    }
}
