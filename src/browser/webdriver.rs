use super::Browser;
use crate::error::BrowserError;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;

/// Well-known local WebDriver endpoints tried after the configured one
const FALLBACK_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium / geckodriver default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// [`Browser`] backed by a WebDriver session
pub struct WebDriverBrowser {
    client: Client,
}

impl WebDriverBrowser {
    /// Connect to the WebDriver at `webdriver_url`, falling back to common
    /// local endpoints when it is unreachable
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self, BrowserError> {
        let capabilities = chrome_capabilities(headless);

        match try_connect(webdriver_url, &capabilities).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        for url in FALLBACK_URLS.iter() {
            if *url == webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = try_connect(url, &capabilities).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(BrowserError::Connect(webdriver_url.to_string()))
    }
}

async fn try_connect(url: &str, capabilities: &Map<String, Value>) -> Result<Client, String> {
    ClientBuilder::native()
        .capabilities(capabilities.clone())
        .connect(url)
        .await
        .map_err(|e| e.to_string())
}

fn chrome_capabilities(headless: bool) -> Map<String, Value> {
    let mut args = vec!["--disable-gpu", "--no-sandbox"];
    if headless {
        args.push("--headless=new");
    }

    let mut capabilities = Map::new();
    capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    capabilities
}

/// Translate a WebDriver command failure into a [`BrowserError`]
fn classify(error: CmdError, selector: Option<&str>) -> BrowserError {
    if matches!(error, CmdError::WaitTimeout) {
        BrowserError::Timeout {
            selector: selector.unwrap_or_default().to_string(),
            waited_ms: 0,
        }
    } else if error.is_no_such_element() {
        BrowserError::NotFound(selector.unwrap_or_default().to_string())
    } else if error.is_stale_element_reference() {
        BrowserError::Stale
    } else if error.is_invalid_session_id() {
        BrowserError::SessionLost(error.to_string())
    } else {
        BrowserError::Command(error.to_string())
    }
}

impl Browser for WebDriverBrowser {
    type Element = Element;

    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.client.goto(url).await.map_err(|e| classify(e, None))
    }

    async fn refresh(&self) -> Result<(), BrowserError> {
        self.client.refresh().await.map_err(|e| classify(e, None))
    }

    async fn current_url(&self) -> Result<String, BrowserError> {
        let url = self
            .client
            .current_url()
            .await
            .map_err(|e| classify(e, None))?;
        Ok(url.to_string())
    }

    async fn set_window_size(&self, width: u32, height: u32) -> Result<(), BrowserError> {
        self.client
            .set_window_size(width, height)
            .await
            .map_err(|e| classify(e, None))
    }

    async fn execute(&self, script: &str) -> Result<Value, BrowserError> {
        self.client
            .execute(script, vec![])
            .await
            .map_err(|e| classify(e, None))
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<Element, BrowserError> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
            .map_err(|e| match classify(e, Some(selector)) {
                BrowserError::Timeout { selector, .. } => BrowserError::Timeout {
                    selector,
                    waited_ms: timeout.as_millis(),
                },
                other => other,
            })
    }

    async fn find(&self, selector: &str) -> Result<Element, BrowserError> {
        self.client
            .find(Locator::Css(selector))
            .await
            .map_err(|e| classify(e, Some(selector)))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Element>, BrowserError> {
        self.client
            .find_all(Locator::Css(selector))
            .await
            .map_err(|e| classify(e, Some(selector)))
    }

    async fn text(&self, element: &Element) -> Result<String, BrowserError> {
        element.text().await.map_err(|e| classify(e, None))
    }

    async fn click(&self, element: &Element) -> Result<(), BrowserError> {
        element.click().await.map_err(|e| classify(e, None))
    }

    async fn is_stale(&self, element: &Element) -> Result<bool, BrowserError> {
        match element.is_displayed().await {
            Ok(_) => Ok(false),
            Err(e) => match classify(e, None) {
                BrowserError::Stale => Ok(true),
                other => Err(other),
            },
        }
    }

    async fn close(&self) -> Result<(), BrowserError> {
        self.client
            .clone()
            .close()
            .await
            .map_err(|e| classify(e, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fantoccini::error::{ErrorStatus, WebDriver};

    #[test]
    fn test_headless_capabilities() {
        let capabilities = chrome_capabilities(true);
        let args = capabilities["goog:chromeOptions"]["args"].as_array().unwrap();
        assert!(args.iter().any(|arg| arg == "--headless=new"));

        let capabilities = chrome_capabilities(false);
        let args = capabilities["goog:chromeOptions"]["args"].as_array().unwrap();
        assert!(!args.iter().any(|arg| arg == "--headless=new"));
    }

    fn standard(status: ErrorStatus, message: &'static str) -> CmdError {
        CmdError::Standard(WebDriver::new(status, message))
    }

    #[test]
    fn test_stale_reference_classified() {
        let error = standard(
            ErrorStatus::StaleElementReference,
            "element is not attached to the page document",
        );
        assert!(matches!(classify(error, None), BrowserError::Stale));
    }

    #[test]
    fn test_missing_element_and_lost_session_classified() {
        let error = standard(ErrorStatus::NoSuchElement, "no such element");
        assert!(matches!(
            classify(error, Some("a.pager")),
            BrowserError::NotFound(ref selector) if selector == "a.pager"
        ));

        let error = standard(ErrorStatus::InvalidSessionId, "session deleted");
        assert!(matches!(classify(error, None), BrowserError::SessionLost(_)));

        let error = standard(ErrorStatus::ElementNotInteractable, "element not interactable");
        assert!(matches!(classify(error, None), BrowserError::Command(_)));
    }

    #[test]
    fn test_wait_timeout_classified() {
        let error = classify(CmdError::WaitTimeout, Some("a.product"));
        assert!(matches!(
            error,
            BrowserError::Timeout { ref selector, .. } if selector == "a.product"
        ));
    }
}
