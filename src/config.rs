use crate::error::ScrapeError;
use crate::retry::RetryPolicy;
use crate::targets;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`ScraperConfig::webdriver_url`]
pub const WEBDRIVER_URL_VAR: &str = "WEBDRIVER_URL";

/// CSS selectors for the nodes the scraper reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Product name links
    #[serde(default = "default_product_selector")]
    pub product: String,

    /// Product node waited on before reading a page; `product` when unset
    #[serde(default = "default_ready_selector")]
    pub ready: Option<String>,

    /// Price labels
    #[serde(default = "default_price_selector")]
    pub price: String,

    /// Pagination controls
    #[serde(default = "default_pager_selector")]
    pub pager: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            product: default_product_selector(),
            ready: default_ready_selector(),
            price: default_price_selector(),
            pager: default_pager_selector(),
        }
    }
}

impl SelectorConfig {
    /// Selector that marks the product grid as rendered
    pub fn ready_selector(&self) -> &str {
        self.ready
            .as_deref()
            .filter(|selector| !selector.trim().is_empty())
            .unwrap_or(&self.product)
    }
}

/// One step in the category label fallback chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CategoryStrategy {
    /// Text of the first element matching the selector
    Heading { selector: String },
    /// Last non-empty crumb among the elements matching the selector
    Breadcrumb { selector: String },
    /// Derived from the current page URL
    UrlSlug,
}

/// How pager control text is compared with the next label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagerMatch {
    Exact,
    Substring,
}

impl PagerMatch {
    pub fn matches(&self, text: &str, label: &str) -> bool {
        let text = text.trim();
        match self {
            PagerMatch::Exact => text == label,
            PagerMatch::Substring => text.contains(label),
        }
    }
}

/// Configuration for a catalog scraping run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default = "default_headless")]
    pub headless: bool,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Storefront page opened once before the category walk
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Category pages to scrape, in order
    #[serde(default = "targets::default_targets")]
    pub targets: Vec<String>,

    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Ordered category fallback chain; "unknown" when every step fails
    #[serde(default = "default_category_strategies")]
    pub category_strategies: Vec<CategoryStrategy>,

    /// Text that identifies the "next page" control
    #[serde(default = "default_next_label")]
    pub next_label: String,

    #[serde(default = "default_pager_match")]
    pub pager_match: PagerMatch,

    /// Pause before checking a freshly loaded page
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// How long to wait for each key element to appear
    #[serde(default = "default_element_timeout_ms")]
    pub element_timeout_ms: u64,

    /// Pause right after clicking the next control
    #[serde(default = "default_page_turn_delay_ms")]
    pub page_turn_delay_ms: u64,

    /// Upper bound on waiting for the previous page to go stale
    #[serde(default = "default_stale_timeout_ms")]
    pub stale_timeout_ms: u64,

    #[serde(default = "default_stale_poll_ms")]
    pub stale_poll_ms: u64,

    /// Retries for the initial navigation to a URL
    #[serde(default = "default_navigation_policy")]
    pub navigation: RetryPolicy,

    /// Attempts for the key element check; a reload happens before each retry
    #[serde(default = "default_page_load_policy")]
    pub page_load: RetryPolicy,

    /// Retries for reading the text of a single element
    #[serde(default = "default_text_read_policy")]
    pub text_read: RetryPolicy,

    /// Stop paginating after this many pages of one category
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// Skip failing categories instead of aborting the run
    #[serde(default)]
    pub continue_on_error: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name prefix; the run date is appended
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            base_url: default_base_url(),
            targets: targets::default_targets(),
            selectors: SelectorConfig::default(),
            category_strategies: default_category_strategies(),
            next_label: default_next_label(),
            pager_match: default_pager_match(),
            settle_delay_ms: default_settle_delay_ms(),
            element_timeout_ms: default_element_timeout_ms(),
            page_turn_delay_ms: default_page_turn_delay_ms(),
            stale_timeout_ms: default_stale_timeout_ms(),
            stale_poll_ms: default_stale_poll_ms(),
            navigation: default_navigation_policy(),
            page_load: default_page_load_policy(),
            text_read: default_text_read_policy(),
            max_pages: None,
            continue_on_error: false,
            output_dir: default_output_dir(),
            output_prefix: default_output_prefix(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the WEBDRIVER_URL environment variable if it is set
    pub fn apply_env(&mut self) {
        self.apply_webdriver_override(std::env::var(WEBDRIVER_URL_VAR).ok());
    }

    /// Replace the WebDriver URL with `value` unless it is missing or empty
    pub fn apply_webdriver_override(&mut self, value: Option<String>) {
        if let Some(webdriver_url) = value.filter(|url| !url.is_empty()) {
            self.webdriver_url = webdriver_url;
        }
    }

    /// Reject configurations the scraper cannot run with
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.selectors.product.trim().is_empty() || self.selectors.price.trim().is_empty() {
            return Err(ScrapeError::Config(
                "product and price selectors must not be empty".to_string(),
            ));
        }
        if self.next_label.is_empty() {
            return Err(ScrapeError::Config("next_label must not be empty".to_string()));
        }
        for target in &self.targets {
            url::Url::parse(target)
                .map_err(|e| ScrapeError::Config(format!("invalid target URL {target}: {e}")))?;
        }
        if self.max_pages == Some(0) {
            return Err(ScrapeError::Config("max_pages must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn element_timeout(&self) -> Duration {
        Duration::from_millis(self.element_timeout_ms)
    }

    pub fn page_turn_delay(&self) -> Duration {
        Duration::from_millis(self.page_turn_delay_ms)
    }

    pub fn stale_timeout(&self) -> Duration {
        Duration::from_millis(self.stale_timeout_ms)
    }

    pub fn stale_poll(&self) -> Duration {
        Duration::from_millis(self.stale_poll_ms)
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1200
}

fn default_base_url() -> String {
    targets::BASE_URL.to_string()
}

fn default_product_selector() -> String {
    "a.h-12.text-black.mb-2".to_string()
}

fn default_ready_selector() -> Option<String> {
    Some("a.h-12.text-black.line-clamp-2".to_string())
}

fn default_price_selector() -> String {
    r"span.text-base.leading-\[1\.5\].-tracking-\[0\.48px\]".to_string()
}

fn default_pager_selector() -> String {
    "a.cursor-pointer.px-2.text-xs".to_string()
}

fn default_category_strategies() -> Vec<CategoryStrategy> {
    vec![
        CategoryStrategy::Heading {
            selector: ".text-lg.font-bold.text-black".to_string(),
        },
        CategoryStrategy::Breadcrumb {
            selector: r#"nav[aria-label="breadcrumb"] li"#.to_string(),
        },
        CategoryStrategy::UrlSlug,
    ]
}

fn default_next_label() -> String {
    ">".to_string()
}

fn default_pager_match() -> PagerMatch {
    PagerMatch::Exact
}

fn default_settle_delay_ms() -> u64 {
    2000
}

fn default_element_timeout_ms() -> u64 {
    30_000
}

fn default_page_turn_delay_ms() -> u64 {
    2000
}

fn default_stale_timeout_ms() -> u64 {
    10_000
}

fn default_stale_poll_ms() -> u64 {
    250
}

fn default_navigation_policy() -> RetryPolicy {
    RetryPolicy::fixed(4, Duration::from_secs(2))
}

fn default_page_load_policy() -> RetryPolicy {
    RetryPolicy::fixed(2, Duration::from_secs(10))
}

fn default_text_read_policy() -> RetryPolicy {
    RetryPolicy::fixed(3, Duration::from_millis(500))
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_prefix() -> String {
    "products".to_string()
}
