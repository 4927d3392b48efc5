use super::category::detect_category;
use crate::browser::Browser;
use crate::config::ScraperConfig;
use crate::error::BrowserError;
use crate::results::{Catalog, PageState};
use crate::retry::RetryPolicy;

/// Read an element's trimmed text, retrying read errors and empty text.
///
/// Resolves to an empty string once the policy is spent.
pub async fn read_text<B: Browser>(
    browser: &B,
    element: &B::Element,
    policy: &RetryPolicy,
) -> String {
    policy
        .retry(|_| async move {
            let text = browser.text(element).await?;
            let text = text.trim();
            if text.is_empty() {
                Err(BrowserError::EmptyText)
            } else {
                Ok(text.to_string())
            }
        })
        .await
        .unwrap_or_else(|e| {
            ::log::trace!("Giving up on element text: {}", e);
            String::new()
        })
}

/// Non-empty texts of every element matching `selector`, in document order
pub async fn read_all<B: Browser>(
    browser: &B,
    selector: &str,
    policy: &RetryPolicy,
) -> Vec<String> {
    let elements = match browser.find_all(selector).await {
        Ok(elements) => elements,
        Err(e) => {
            ::log::warn!("Failed to query `{}`: {}", selector, e);
            return Vec::new();
        }
    };

    let mut texts = Vec::with_capacity(elements.len());
    for element in &elements {
        let text = read_text(browser, element, policy).await;
        if !text.is_empty() {
            texts.push(text);
        }
    }
    texts
}

/// Read the category, products and prices of the current page into `catalog`
pub async fn extract_page<B: Browser>(
    browser: &B,
    state: &mut PageState,
    config: &ScraperConfig,
    catalog: &mut Catalog,
) {
    state.category =
        detect_category(browser, &config.category_strategies, &config.text_read).await;
    ::log::info!(
        "Page {} of {}: category {}",
        state.page_index + 1,
        state.url,
        state.category
    );

    let products = read_all(browser, &config.selectors.product, &config.text_read).await;
    for product in &products {
        ::log::debug!("Product: {}", product);
    }
    let prices = read_all(browser, &config.selectors.price, &config.text_read).await;

    if products.len() != prices.len() {
        ::log::warn!(
            "Page {} of {} has {} products but {} prices; later rows will not line up",
            state.page_index + 1,
            state.url,
            products.len(),
            prices.len()
        );
    }

    catalog.record_page(state, products, prices);
}
