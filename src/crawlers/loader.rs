use crate::browser::Browser;
use crate::config::ScraperConfig;
use crate::error::{BrowserError, ScrapeError};
use crate::retry::RetryPolicy;

const SCROLL_HEIGHT_SCRIPT: &str = "return document.body.scrollHeight";

/// Navigate to `url` under the navigation retry policy and size the window
pub async fn open<B: Browser>(
    browser: &B,
    url: &str,
    config: &ScraperConfig,
) -> Result<(), ScrapeError> {
    config
        .navigation
        .retry(|attempt| async move {
            if attempt > 0 {
                ::log::info!("Reconnecting to {} (attempt {})", url, attempt + 1);
            }
            browser.goto(url).await
        })
        .await
        .map_err(|source| ScrapeError::PageLoad {
            url: url.to_string(),
            source,
        })?;

    browser
        .set_window_size(config.window_width, config.window_height)
        .await?;

    match browser.execute(SCROLL_HEIGHT_SCRIPT).await {
        Ok(height) => ::log::debug!("Page height of {}: {}", url, height),
        Err(e) => ::log::debug!("Could not read page height of {}: {}", url, e),
    }
    Ok(())
}

/// Wait until the product and price nodes are present.
///
/// Every retry under the `page_load` policy reloads the page and sleeps the
/// policy delay before looking again. Once the policy is spent the last wait
/// error is returned as a page load failure.
pub async fn ensure_ready<B: Browser>(
    browser: &B,
    url: &str,
    config: &ScraperConfig,
) -> Result<(), ScrapeError> {
    let settle = config.settle_delay();
    if !settle.is_zero() {
        tokio::time::sleep(settle).await;
    }

    let timeout = config.element_timeout();
    let product = config.selectors.ready_selector();
    let price = config.selectors.price.as_str();
    let reload = config.page_load;
    // The reload settles inside the attempt, so the policy itself never sleeps
    let attempts = RetryPolicy { delay_ms: 0, ..reload };

    attempts
        .retry(|attempt| async move {
            if attempt > 0 {
                ::log::warn!("Key elements missing on {}, reloading", url);
                browser.refresh().await?;
                let settle = reload.delay_after(attempt - 1);
                if !settle.is_zero() {
                    tokio::time::sleep(settle).await;
                }
            }
            browser.wait_for(product, timeout).await?;
            browser.wait_for(price, timeout).await?;
            Ok::<(), BrowserError>(())
        })
        .await
        .map_err(|source| ScrapeError::PageLoad {
            url: url.to_string(),
            source,
        })
}
