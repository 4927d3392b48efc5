pub mod category;
pub mod extractor;
pub mod loader;
pub mod pager;

#[cfg(test)]
mod tests;

use crate::browser::Browser;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::results::{Catalog, PageState};
use pager::PagerStep;

/// Scrape every page of one category into `catalog`.
///
/// Returns the number of pages extracted.
pub async fn crawl_category<B: Browser>(
    browser: &B,
    url: &str,
    config: &ScraperConfig,
    catalog: &mut Catalog,
) -> Result<usize, ScrapeError> {
    ::log::info!("Scraping category: {}", url);
    let before = catalog.len();

    loader::open(browser, url, config).await?;
    loader::ensure_ready(browser, url, config).await?;

    let mut state = PageState::new(url);
    extractor::extract_page(browser, &mut state, config, catalog).await;
    let mut pages = 1;

    loop {
        if config.max_pages.is_some_and(|max| pages >= max) {
            ::log::info!("Reached the page limit of {} for {}", pages, url);
            break;
        }

        let next = match pager::next_step(browser, config).await {
            PagerStep::HasNext(next) => next,
            PagerStep::Done => break,
        };

        if !pager::turn_page(browser, &next, config).await {
            break;
        }
        state.page_index += 1;
        ::log::debug!("Turned to page {} of {}", state.page_index + 1, url);

        loader::ensure_ready(browser, url, config).await?;
        extractor::extract_page(browser, &mut state, config, catalog).await;
        pages += 1;
    }

    ::log::info!(
        "Finished {}: {} products over {} pages",
        url,
        catalog.len() - before,
        pages
    );
    Ok(pages)
}

/// Open the storefront, then scrape each target in order.
///
/// A failing target aborts the run unless `continue_on_error` is set, in
/// which case it is logged and returned in the list of failed targets.
pub async fn crawl_all<B: Browser>(
    browser: &B,
    config: &ScraperConfig,
) -> Result<(Catalog, Vec<String>), ScrapeError> {
    let mut catalog = Catalog::new();
    let mut failed = Vec::new();

    if !config.base_url.is_empty() {
        loader::open(browser, &config.base_url, config).await?;
    }

    for (i, url) in config.targets.iter().enumerate() {
        ::log::debug!("Target {} of {}", i + 1, config.targets.len());
        match crawl_category(browser, url, config, &mut catalog).await {
            Ok(_) => {}
            Err(e) if config.continue_on_error => {
                ::log::error!("Skipping {}: {}", url, e);
                failed.push(url.clone());
            }
            Err(e) => return Err(e),
        }
    }

    Ok((catalog, failed))
}
