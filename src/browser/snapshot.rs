use super::Browser;
use crate::error::BrowserError;
use crate::utils::normalize_text;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Attribute that turns an element into a link to another page of the same URL
pub const PAGE_ATTR: &str = "data-snapshot-page";

const BLANK_DOCUMENT: &str = "<html><head></head><body></body></html>";

/// Handle to an element of a [`SnapshotBrowser`] document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotElement {
    selector: String,
    index: usize,
    generation: u64,
}

#[derive(Debug, Default)]
struct Site {
    pages: Vec<String>,
    unready_loads: usize,
}

#[derive(Debug, Default)]
struct Cursor {
    url: Option<String>,
    page: usize,
    /// Bumped on every load or page turn; older handles are stale
    generation: u64,
    ready: bool,
    loads: usize,
    loads_by_url: HashMap<String, usize>,
}

/// Offline [`Browser`] serving HTML documents held in memory.
///
/// Each URL maps to one or more documents, one per page of results. Clicking
/// an element that carries `data-snapshot-page="N"` shows page `N` (0-based)
/// and makes every element handed out before the click stale. A URL can be
/// set to serve blank documents for its first few loads (navigation or
/// reload), which looks like a page whose content never arrived.
#[derive(Debug, Default)]
pub struct SnapshotBrowser {
    sites: HashMap<String, Site>,
    cursor: Mutex<Cursor>,
}

impl SnapshotBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single-page document for `url`
    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.with_pages(url, vec![html.to_string()])
    }

    /// Register the result pages for `url`, in order
    pub fn with_pages(mut self, url: &str, pages: Vec<String>) -> Self {
        self.sites.entry(url.to_string()).or_default().pages = pages;
        self
    }

    /// Serve a blank document for the first `loads` loads of `url`
    pub fn with_unready_loads(mut self, url: &str, loads: usize) -> Self {
        self.sites.entry(url.to_string()).or_default().unready_loads = loads;
        self
    }

    /// Number of navigations and reloads performed so far
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }

    /// 0-based page currently shown
    pub fn current_page(&self) -> usize {
        self.lock().page
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cursor> {
        // The cursor holds plain values, so a poisoned lock is still usable
        self.cursor.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load(&self, url: &str, page: usize) -> Result<(), BrowserError> {
        let site = self
            .sites
            .get(url)
            .ok_or_else(|| BrowserError::Command(format!("no snapshot for {url}")))?;

        let mut cursor = self.lock();
        cursor.loads += 1;
        let loads_of_url = cursor.loads_by_url.entry(url.to_string()).or_insert(0);
        *loads_of_url += 1;
        let ready = *loads_of_url > site.unready_loads;

        cursor.url = Some(url.to_string());
        cursor.page = page;
        cursor.generation += 1;
        cursor.ready = ready;
        Ok(())
    }

    /// Run `f` against the document currently shown
    fn with_document<T>(&self, f: impl FnOnce(&Html, u64) -> T) -> Result<T, BrowserError> {
        let (html, generation) = {
            let cursor = self.lock();
            let url = cursor
                .url
                .as_deref()
                .ok_or_else(|| BrowserError::Command("no page loaded".to_string()))?;
            let html = if cursor.ready {
                self.sites
                    .get(url)
                    .and_then(|site| site.pages.get(cursor.page))
                    .map(String::as_str)
                    .unwrap_or(BLANK_DOCUMENT)
            } else {
                BLANK_DOCUMENT
            };
            (html, cursor.generation)
        };

        let document = Html::parse_document(html);
        Ok(f(&document, generation))
    }

    /// Resolve a handle to its element in the current document
    fn resolve<T>(
        &self,
        element: &SnapshotElement,
        f: impl FnOnce(ElementRef<'_>) -> T,
    ) -> Result<T, BrowserError> {
        let selector = parse_selector(&element.selector)?;
        self.with_document(|doc, generation| {
            if generation != element.generation {
                return Err(BrowserError::Stale);
            }
            doc.select(&selector)
                .nth(element.index)
                .map(f)
                .ok_or(BrowserError::Stale)
        })?
    }

    fn select_all(&self, selector: &str) -> Result<Vec<SnapshotElement>, BrowserError> {
        let parsed = parse_selector(selector)?;
        self.with_document(|doc, generation| {
            (0..doc.select(&parsed).count())
                .map(|index| SnapshotElement {
                    selector: selector.to_string(),
                    index,
                    generation,
                })
                .collect()
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, BrowserError> {
    Selector::parse(selector)
        .map_err(|e| BrowserError::Command(format!("invalid selector `{selector}`: {e:?}")))
}

impl Browser for SnapshotBrowser {
    type Element = SnapshotElement;

    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        ::log::trace!("Snapshot navigating to {}", url);
        self.load(url, 0)
    }

    async fn refresh(&self) -> Result<(), BrowserError> {
        let (url, page) = {
            let cursor = self.lock();
            let url = cursor
                .url
                .clone()
                .ok_or_else(|| BrowserError::Command("no page loaded".to_string()))?;
            (url, cursor.page)
        };
        self.load(&url, page)
    }

    async fn current_url(&self) -> Result<String, BrowserError> {
        self.lock()
            .url
            .clone()
            .ok_or_else(|| BrowserError::Command("no page loaded".to_string()))
    }

    async fn set_window_size(&self, _width: u32, _height: u32) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn execute(&self, _script: &str) -> Result<Value, BrowserError> {
        Ok(Value::Null)
    }

    async fn wait_for(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<SnapshotElement, BrowserError> {
        // Documents never change on their own, so one look is enough
        self.select_all(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::Timeout {
                selector: selector.to_string(),
                waited_ms: timeout.as_millis(),
            })
    }

    async fn find(&self, selector: &str) -> Result<SnapshotElement, BrowserError> {
        self.select_all(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::NotFound(selector.to_string()))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<SnapshotElement>, BrowserError> {
        self.select_all(selector)
    }

    async fn text(&self, element: &SnapshotElement) -> Result<String, BrowserError> {
        self.resolve(element, |el| {
            normalize_text(&el.text().collect::<Vec<_>>().join(" "))
        })
    }

    async fn click(&self, element: &SnapshotElement) -> Result<(), BrowserError> {
        let target = self.resolve(element, |el| {
            el.value()
                .attr(PAGE_ATTR)
                .and_then(|page| page.trim().parse::<usize>().ok())
        })?;

        if let Some(page) = target {
            let mut cursor = self.lock();
            ::log::trace!("Snapshot turning to page {}", page);
            cursor.page = page;
            cursor.generation += 1;
        }
        Ok(())
    }

    async fn is_stale(&self, element: &SnapshotElement) -> Result<bool, BrowserError> {
        Ok(self.lock().generation != element.generation)
    }

    async fn close(&self) -> Result<(), BrowserError> {
        let mut cursor = self.lock();
        cursor.url = None;
        cursor.generation += 1;
        Ok(())
    }
}
