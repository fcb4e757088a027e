//! Headless Chrome row source for the agent listing page.
//!
//! Each [`BrowserRowSource`] owns its own Chrome process. Rows are read one
//! at a time from the first `<table>` on the rendered page, and the process
//! is killed when the source is dropped.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use extractors::CELL_DELIMITER;
use headless_chrome::{Browser, LaunchOptions, Tab};
use shared_types::{ExtractionError, RowSource, RowSourceProvider};
use tracing::debug;

use crate::config::BrowserConfig;

/// Opens a fresh browser session per extraction call.
pub struct BrowserRowSourceProvider {
    config: BrowserConfig,
}

impl BrowserRowSourceProvider {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }
}

impl RowSourceProvider for BrowserRowSourceProvider {
    fn open(&self, limit: usize) -> Result<Box<dyn RowSource>, ExtractionError> {
        let source = BrowserRowSource::open(&self.config, limit)
            .map_err(|e| ExtractionError::Source(format!("{:#}", e)))?;
        Ok(Box::new(source))
    }
}

pub struct BrowserRowSource {
    tab: Arc<Tab>,
    // Dropped after the tab; kills the Chrome process
    _browser: Browser,
    walker: RowWalker,
}

impl BrowserRowSource {
    /// Launch Chrome, load the listing and wait for it to render.
    pub fn open(config: &BrowserConfig, limit: usize) -> anyhow::Result<Self> {
        let browser = launch_browser(config)?;

        let tab = browser
            .new_tab()
            .map_err(|e| anyhow::anyhow!("Failed to create tab: {}", e))?;

        debug!("Navigating to {}", config.source_url);
        tab.navigate_to(&config.source_url)
            .map_err(|e| anyhow::anyhow!("Navigation failed: {}", e))?;
        tab.wait_until_navigated()
            .map_err(|e| anyhow::anyhow!("Page load failed: {}", e))?;

        // The table is filled in by scripts after load
        std::thread::sleep(Duration::from_secs(config.page_wait_secs));

        Ok(Self {
            tab,
            _browser: browser,
            walker: RowWalker::new(limit),
        })
    }
}

impl RowSource for BrowserRowSource {
    fn next_row(&mut self) -> Result<Option<String>, ExtractionError> {
        let tab = &self.tab;
        self.walker.next_row(|index| read_cells(tab, index))
    }
}

/// Walks table rows by index. Row 0 is the header, so rows `1..=limit` are
/// visited; a row without cells is skipped but still uses up one index.
struct RowWalker {
    next_index: usize,
    last_index: usize,
}

impl RowWalker {
    fn new(limit: usize) -> Self {
        Self {
            next_index: 1,
            last_index: limit,
        }
    }

    /// `read` yields the cell texts at an index, or `None` past the last row.
    fn next_row<F>(&mut self, mut read: F) -> Result<Option<String>, ExtractionError>
    where
        F: FnMut(usize) -> anyhow::Result<Option<Vec<String>>>,
    {
        while self.next_index <= self.last_index {
            let index = self.next_index;
            self.next_index += 1;

            let cells = read(index).map_err(|e| ExtractionError::Source(format!("{:#}", e)))?;

            match cells {
                None => {
                    self.next_index = self.last_index + 1;
                    return Ok(None);
                }
                Some(cells) if cells.is_empty() => continue,
                Some(cells) => return Ok(Some(cells.join(CELL_DELIMITER))),
            }
        }

        Ok(None)
    }
}

/// Cell texts of the row at `index`, or `None` past the last row.
fn read_cells(tab: &Tab, index: usize) -> anyhow::Result<Option<Vec<String>>> {
    let result = tab
        .evaluate(&row_script(index), false)
        .map_err(|e| anyhow::anyhow!("Failed to read table row {}: {}", index, e))?;

    let payload = match result.value {
        Some(serde_json::Value::String(payload)) => payload,
        other => anyhow::bail!("Unexpected value for table row {}: {:?}", index, other),
    };

    serde_json::from_str(&payload)
        .with_context(|| format!("Malformed cells for table row {}", index))
}

/// Serializes the `<td>` texts of one row as JSON. Yields `null` when the
/// page has no table or the row does not exist.
fn row_script(index: usize) -> String {
    format!(
        r#"(() => {{
    const table = document.querySelector("table");
    if (!table) {{ return JSON.stringify(null); }}
    const row = table.querySelectorAll("tr")[{index}];
    if (!row) {{ return JSON.stringify(null); }}
    return JSON.stringify(Array.from(row.querySelectorAll("td"), (cell) => cell.innerText));
}})()"#
    )
}

/// Create a headless Chrome browser instance.
/// Disables the sandbox when running inside a container
/// (detected via /.dockerenv or DATA_HARVEST_CONTAINER env var).
fn launch_browser(config: &BrowserConfig) -> anyhow::Result<Browser> {
    let is_container = std::env::var("DATA_HARVEST_CONTAINER").is_ok()
        || std::path::Path::new("/.dockerenv").exists();

    let chrome_path = config
        .chrome_path
        .clone()
        .or_else(|| std::env::var("CHROME_PATH").ok())
        .map(PathBuf::from);

    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(config.sandbox && !is_container)
        .path(chrome_path)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build Chrome launch options: {}", e))?;

    Browser::new(options).map_err(|e| anyhow::anyhow!("Failed to launch headless Chrome: {}", e))
}
