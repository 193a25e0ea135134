//! Input sources: web page fetch with HTML text extraction, CSV flattening.
//!
//! Every failure here degrades to an empty document. The pipeline treats
//! an empty document as valid input, so nothing in this module is fatal.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, info};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Upper bound for the one network call this tool makes.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Some outlets answer bare library user agents with consent walls.
const USER_AGENT: &str = "Mozilla/5.0";

/// Elements whose text makes up the article body.
static TEXT_BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, h1, h2, h3, article, div").expect("static selector"));

/// One input source per run: a web page or a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Web(String),
    Csv(PathBuf),
}

impl Source {
    /// A `http://`/`https://` prefix selects the web reader, anything
    /// else is treated as a CSV path.
    pub fn detect(raw: &str) -> Source {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Web(raw.to_string())
        } else {
            Source::Csv(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Web(url) => write!(f, "{url}"),
            Source::Csv(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the raw document text for a source. Failures are logged and
/// yield an empty document.
pub fn fetch_raw_text(source: &Source) -> String {
    let fetched = match source {
        Source::Web(url) => fetch_web_text(url),
        Source::Csv(path) => read_csv_text(path),
    };
    match fetched {
        Ok(text) => text,
        Err(e) => {
            error!("loading {source} failed: {e:#}");
            String::new()
        }
    }
}

fn fetch_web_text(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("build HTTP client")?;
    let html = client
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()?
        .text()
        .context("read response body")?;
    let text = extract_text(&html);
    info!("extracted {} characters from {url}", text.chars().count());
    Ok(text)
}

/// Collects the text of all body-level elements, whitespace-normalized
/// and joined with single spaces. Nested matches contribute their text
/// more than once; the downstream frequency analysis tolerates that the
/// same way the upstream scrape always has.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    for element in document.select(&TEXT_BLOCKS) {
        let joined = element.text().collect::<Vec<_>>().join(" ");
        let normalized = joined.split_whitespace().collect::<Vec<_>>().join(" ");
        if !normalized.is_empty() {
            parts.push(normalized);
        }
    }
    parts.join(" ")
}

/// Flattens every field of every record into one space-separated blob.
/// No header interpretation, ragged rows allowed, UTF-8 BOM tolerated.
fn read_csv_text(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());
    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record.context("parse CSV record")?;
        cells.extend(record.iter().map(str::to_string));
    }
    let text = cells.join(" ");
    info!("read {} characters from {}", text.chars().count(), path.display());
    Ok(text)
}
