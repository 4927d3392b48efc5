use super::fixtures::{Flaky, Listing, TEA_URL, fast_config};
use crate::browser::{Browser, SnapshotBrowser};
use crate::crawlers::{crawl_category, loader};
use crate::error::{BrowserError, ScrapeError};
use crate::results::Catalog;
use crate::retry::RetryPolicy;
use std::time::Duration;

#[cfg(test)]
mod loading_tests {
    use super::*;

    fn tea_page() -> SnapshotBrowser {
        SnapshotBrowser::new().with_page(
            TEA_URL,
            &Listing::new()
                .heading("Tea")
                .products(&["Green Tea"])
                .prices(&["12.00"])
                .html(),
        )
    }

    #[tokio::test]
    async fn test_navigation_retried_until_it_succeeds() {
        let mut config = fast_config(&[TEA_URL]);
        config.navigation = RetryPolicy::fixed(3, Duration::ZERO);
        let browser = Flaky::new(tea_page()).failing_gotos(2);

        let mut catalog = Catalog::new();
        let pages = crawl_category(&browser, TEA_URL, &config, &mut catalog)
            .await
            .unwrap();

        assert_eq!(pages, 1);
        assert_eq!(browser.count("goto"), 3);
        assert_eq!(catalog.product_names(), &["Green Tea".to_string()][..]);
    }

    #[tokio::test]
    async fn test_navigation_gives_up_when_attempts_run_out() {
        let mut config = fast_config(&[TEA_URL]);
        config.navigation = RetryPolicy::fixed(3, Duration::ZERO);
        let browser = Flaky::new(tea_page()).failing_gotos(3);

        let result = loader::open(&browser, TEA_URL, &config).await;

        assert!(matches!(
            result,
            Err(ScrapeError::PageLoad { ref url, source: BrowserError::Command(_) }) if url == TEA_URL
        ));
        assert_eq!(browser.count("goto"), 3);
        assert_eq!(browser.inner().load_count(), 0);
    }

    #[tokio::test]
    async fn test_single_navigation_attempt_by_policy() {
        let config = fast_config(&[TEA_URL]);
        let browser = Flaky::new(tea_page()).failing_gotos(1);

        let mut catalog = Catalog::new();
        let result = crawl_category(&browser, TEA_URL, &config, &mut catalog).await;

        assert!(matches!(result, Err(ScrapeError::PageLoad { .. })));
        assert_eq!(browser.count("goto"), 1);
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_reload_settles_before_looking_again() {
        let settle = Duration::from_millis(30);
        let mut config = fast_config(&[TEA_URL]);
        config.page_load = RetryPolicy::fixed(2, settle);
        let browser = Flaky::new(tea_page().with_unready_loads(TEA_URL, 1));
        browser.goto(TEA_URL).await.unwrap();

        loader::ensure_ready(&browser, TEA_URL, &config).await.unwrap();

        assert_eq!(browser.count("refresh"), 1);
        assert_eq!(browser.inner().load_count(), 2);
        let gap = browser.gap("refresh", "wait_for").unwrap();
        assert!(gap >= settle, "looked again after {gap:?}");
    }
}
