//! The browser operations the scraper consumes.
//!
//! The scraper never talks to a backend directly; it is generic over
//! [`Browser`]. [`webdriver::WebDriverBrowser`] drives a real browser through
//! a WebDriver server and [`snapshot::SnapshotBrowser`] serves HTML documents
//! held in memory.

pub mod snapshot;
pub mod webdriver;

use crate::error::BrowserError;
use std::time::Duration;

pub use snapshot::SnapshotBrowser;
pub use webdriver::WebDriverBrowser;

/// Browser automation capability. All selectors are CSS.
#[allow(async_fn_in_trait)]
pub trait Browser {
    /// Handle to an element found on the current page
    type Element;

    /// Navigate to a URL
    async fn goto(&self, url: &str) -> Result<(), BrowserError>;

    /// Reload the current page
    async fn refresh(&self) -> Result<(), BrowserError>;

    async fn current_url(&self) -> Result<String, BrowserError>;

    async fn set_window_size(&self, width: u32, height: u32) -> Result<(), BrowserError>;

    /// Evaluate a script in the page and return its JSON result
    async fn execute(&self, script: &str) -> Result<serde_json::Value, BrowserError>;

    /// Wait up to `timeout` for an element matching `selector` to be present
    async fn wait_for(&self, selector: &str, timeout: Duration)
    -> Result<Self::Element, BrowserError>;

    /// First element matching `selector`, without waiting
    async fn find(&self, selector: &str) -> Result<Self::Element, BrowserError>;

    /// Every element matching `selector`, possibly none
    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, BrowserError>;

    /// Rendered text of an element
    async fn text(&self, element: &Self::Element) -> Result<String, BrowserError>;

    async fn click(&self, element: &Self::Element) -> Result<(), BrowserError>;

    /// True once the element is detached from the live document
    async fn is_stale(&self, element: &Self::Element) -> Result<bool, BrowserError>;

    /// End the browser session
    async fn close(&self) -> Result<(), BrowserError>;
}
