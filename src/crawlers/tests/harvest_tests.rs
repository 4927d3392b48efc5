use super::fixtures::{Listing, SNACKS_URL, TEA_URL, fast_config};
use crate::Harvest;
use crate::browser::SnapshotBrowser;
use crate::crawlers::crawl_all;
use crate::error::ScrapeError;

#[cfg(test)]
mod harvest_tests {
    use super::*;

    fn two_categories() -> SnapshotBrowser {
        SnapshotBrowser::new()
            .with_pages(
                SNACKS_URL,
                vec![
                    Listing::new()
                        .heading("Snacks")
                        .products(&["Chips", "Pretzels"])
                        .prices(&["4.50", "6.25"])
                        .control(">", Some(1))
                        .html(),
                    Listing::new()
                        .heading("Snacks")
                        .products(&["Popcorn"])
                        .prices(&["3.00"])
                        .html(),
                ],
            )
            .with_page(
                TEA_URL,
                &Listing::new()
                    .crumbs(&["Home", "Beverage", "Tea"])
                    .products(&["Green Tea"])
                    .prices(&["12.00"])
                    .html(),
            )
    }

    #[tokio::test]
    async fn test_targets_scraped_in_order() {
        let config = fast_config(&[SNACKS_URL, TEA_URL]);
        let (catalog, failed) = crawl_all(&two_categories(), &config).await.unwrap();

        assert!(failed.is_empty());
        assert_eq!(catalog.product_names().len(), catalog.categories().len());
        assert_eq!(
            catalog.categories(),
            &["Snacks", "Snacks", "Snacks", "Tea"].map(String::from)[..]
        );
        assert_eq!(catalog.entries()[3].product_name, "Green Tea");
        assert_eq!(catalog.entries()[3].price, "12.00");
    }

    #[tokio::test]
    async fn test_rerun_is_identical() {
        let config = fast_config(&[SNACKS_URL, TEA_URL]);
        let browser = two_categories();

        let (first, _) = crawl_all(&browser, &config).await.unwrap();
        let (second, _) = crawl_all(&browser, &config).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_failing_target_aborts_by_default() {
        let config = fast_config(&[SNACKS_URL, TEA_URL]);
        let browser = two_categories().with_unready_loads(SNACKS_URL, 2);

        let result = crawl_all(&browser, &config).await;
        assert!(matches!(result, Err(ScrapeError::PageLoad { .. })));
    }

    #[tokio::test]
    async fn test_continue_on_error_skips_target() {
        let mut config = fast_config(&[SNACKS_URL, TEA_URL]);
        config.continue_on_error = true;
        let browser = two_categories().with_unready_loads(SNACKS_URL, 2);

        let (catalog, failed) = crawl_all(&browser, &config).await.unwrap();
        assert_eq!(failed, vec![SNACKS_URL.to_string()]);
        assert_eq!(catalog.product_names(), &["Green Tea".to_string()][..]);
    }

    #[tokio::test]
    async fn test_base_url_opened_first() {
        let mut config = fast_config(&[TEA_URL]);
        config.base_url = "https://shop.example/en-ae".to_string();
        let browser = two_categories().with_page(&config.base_url, "<html><body></body></html>");

        let (catalog, _) = crawl_all(&browser, &config).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(browser.load_count(), 2);
    }

    #[tokio::test]
    async fn test_run_writes_dated_export() {
        let dir = tempfile::tempdir().unwrap();
        let harvest = Harvest::new(fast_config(&[SNACKS_URL, TEA_URL])).with_output_dir(dir.path());

        let report = harvest.run_with(&two_categories()).await.unwrap();

        let path = report.export_path.expect("export written");
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("products_{today}.csv")
        );

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "product_name,price,category");
        assert_eq!(lines[1], "Chips,4.50,Snacks");
        assert_eq!(lines.len(), 5);
    }

    #[tokio::test]
    async fn test_without_export() {
        let harvest = Harvest::new(fast_config(&[TEA_URL])).without_export();
        let report = harvest.run_with(&two_categories()).await.unwrap();
        assert!(report.export_path.is_none());
        assert_eq!(report.catalog.len(), 1);
    }
}
