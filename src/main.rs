use catalog_harvest::{Harvest, ScrapeError, ScraperConfig};
use clap::Parser;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let harvest = match build_harvest(args) {
        Ok(harvest) => harvest,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL or --webdriver-url if not using {}",
        harvest.config().webdriver_url
    );
    ::log::info!(
        "Starting scrape of {} category pages",
        harvest.config().targets.len()
    );

    let start_time = std::time::Instant::now();
    let report = match harvest.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = &report.catalog;
    ::log::info!(
        "Scraping complete - {} products in {:.2} seconds",
        catalog.len(),
        start_time.elapsed().as_secs_f64()
    );
    for page in catalog.misaligned_pages() {
        ::log::warn!(
            "Count mismatch on page {} of {}: {} products, {} prices",
            page.page_index + 1,
            page.url,
            page.product_count,
            page.price_count
        );
    }
    for url in &report.failed_targets {
        ::log::warn!("Not scraped: {}", url);
    }
    if let Some(path) = &report.export_path {
        println!("Saved {} rows to {}", catalog.len(), path.display());
    }
}

/// Merge the config file, environment and command-line overrides
fn build_harvest(args: Args) -> Result<Harvest, ScrapeError> {
    let mut config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    config.apply_env();

    let mut harvest = Harvest::new(config);

    if args.headful {
        harvest = harvest.with_headless(false);
    }
    if args.continue_on_error {
        harvest = harvest.continue_on_error(true);
    }
    if let Some(webdriver_url) = &args.webdriver_url {
        harvest = harvest.with_webdriver_url(webdriver_url);
    }
    if let Some(dir) = args.output_dir {
        harvest = harvest.with_output_dir(dir);
    }
    if let Some(max_pages) = args.max_pages {
        harvest = harvest.with_max_pages(max_pages as usize);
    }
    if !args.urls.is_empty() {
        harvest = harvest.with_targets(args.urls);
    }

    harvest.config().validate()?;
    Ok(harvest)
}
