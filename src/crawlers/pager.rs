use crate::browser::Browser;
use crate::config::ScraperConfig;
use std::time::Duration;
use tokio::time::Instant;

/// Outcome of looking for the next-page control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerStep<E> {
    HasNext(E),
    Done,
}

/// Find the pager control whose text matches the configured next label
pub async fn next_step<B: Browser>(browser: &B, config: &ScraperConfig) -> PagerStep<B::Element> {
    let controls = match browser.find_all(&config.selectors.pager).await {
        Ok(controls) => controls,
        Err(e) => {
            ::log::debug!("No pager controls: {}", e);
            return PagerStep::Done;
        }
    };

    for control in controls {
        let text = browser.text(&control).await.unwrap_or_default();
        if config.pager_match.matches(&text, &config.next_label) {
            return PagerStep::HasNext(control);
        }
    }
    PagerStep::Done
}

/// Click `next` and wait for the current listing to be replaced.
///
/// Returns false when the click itself failed. A listing that never goes
/// stale within the timeout is not an error.
pub async fn turn_page<B: Browser>(browser: &B, next: &B::Element, config: &ScraperConfig) -> bool {
    let anchor = browser.find(&config.selectors.product).await.ok();

    if let Err(e) = browser.click(next).await {
        ::log::warn!("Failed to click the next page control: {}", e);
        return false;
    }

    let delay = config.page_turn_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    if let Some(anchor) = anchor {
        if !wait_until_stale(browser, &anchor, config.stale_timeout(), config.stale_poll()).await {
            ::log::debug!("Previous listing still attached after page turn, continuing");
        }
    }
    true
}

/// Poll until `element` is detached, giving up after `timeout`
pub async fn wait_until_stale<B: Browser>(
    browser: &B,
    element: &B::Element,
    timeout: Duration,
    poll: Duration,
) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        match browser.is_stale(element).await {
            Ok(true) => return true,
            Ok(false) => {}
            Err(e) => {
                ::log::debug!("Staleness check failed: {}", e);
                return false;
            }
        }
        if Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(poll).await;
    }
}
