use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-harvest")]
#[command(about = "Scrapes product names, prices and categories from paginated category pages")]
#[command(version)]
pub struct Args {
    /// Category page URLs to scrape (defaults to the built-in list)
    pub urls: Vec<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver server URL (overrides config and WEBDRIVER_URL)
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// Directory for the dated CSV export
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headful: bool,

    /// Stop after this many pages per category
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: Option<u64>,

    /// Skip categories that fail instead of aborting the run
    #[arg(long)]
    pub continue_on_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "catalog-harvest",
            "--max-pages",
            "2",
            "--headful",
            "https://shop.example/snacks/",
        ]);
        assert_eq!(args.urls, vec!["https://shop.example/snacks/"]);
        assert_eq!(args.max_pages, Some(2));
        assert!(args.headful);
        assert!(!args.continue_on_error);
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        assert!(Args::try_parse_from(["catalog-harvest", "--max-pages", "0"]).is_err());
    }
}
