pub mod browser;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod export;
pub mod results;
pub mod retry;
pub mod targets;
pub mod utils;

// Re-export commonly used types for convenience
pub use browser::{Browser, SnapshotBrowser, WebDriverBrowser};
pub use config::ScraperConfig;
pub use error::{BrowserError, ScrapeError};
pub use results::{Catalog, CatalogEntry, HarvestReport};

use std::path::{Path, PathBuf};

/// Builder for a catalog scraping run
pub struct Harvest {
    config: ScraperConfig,
    export: bool,
}

impl Harvest {
    /// Create a new Harvest builder with the given configuration
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            export: true,
        }
    }

    /// Load configuration from a file
    pub fn with_config_file(path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        Ok(Self::new(ScraperConfig::from_file(path)?))
    }

    /// Override the WebDriver URL
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.webdriver_url = webdriver_url.to_string();
        self
    }

    /// Replace the target list
    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.config.targets = targets;
        self
    }

    /// Set the directory the dated export is written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Cap the number of pages read per category
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Keep going when a category fails instead of aborting the run
    pub fn continue_on_error(mut self, enabled: bool) -> Self {
        self.config.continue_on_error = enabled;
        self
    }

    /// Skip writing the CSV export
    pub fn without_export(mut self) -> Self {
        self.export = false;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Connect to WebDriver and run the scrape
    pub async fn run(self) -> Result<HarvestReport, ScrapeError> {
        self.config.validate()?;
        let browser =
            WebDriverBrowser::connect(&self.config.webdriver_url, self.config.headless).await?;

        let result = self.run_with(&browser).await;

        if let Err(e) = browser.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }
        result
    }

    /// Run the scrape against an already connected browser
    pub async fn run_with<B: Browser>(&self, browser: &B) -> Result<HarvestReport, ScrapeError> {
        let (catalog, failed_targets) = crawlers::crawl_all(browser, &self.config).await?;

        ::log::info!(
            "Collected {} products and {} prices from {} pages",
            catalog.product_names().len(),
            catalog.prices().len(),
            catalog.pages().len()
        );

        let export_path = if self.export {
            Some(export::export_today(
                &catalog,
                &self.config.output_dir,
                &self.config.output_prefix,
            )?)
        } else {
            None
        };

        Ok(HarvestReport {
            catalog,
            failed_targets,
            export_path,
        })
    }
}
