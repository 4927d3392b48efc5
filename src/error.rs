use thiserror::Error;

/// Failures reported by a browser backend
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no element matches `{0}`")]
    NotFound(String),

    #[error("timed out after {waited_ms} ms waiting for `{selector}`")]
    Timeout { selector: String, waited_ms: u128 },

    #[error("element is no longer attached to the document")]
    Stale,

    #[error("element text is empty")]
    EmptyText,

    #[error("browser session lost: {0}")]
    SessionLost(String),

    #[error("could not connect to any WebDriver server (last tried {0})")]
    Connect(String),

    #[error("browser command failed: {0}")]
    Command(String),
}

/// Errors surfaced by a scraping run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("page {url} never became ready: {source}")]
    PageLoad {
        url: String,
        #[source]
        source: BrowserError,
    },

    #[error("failed to write export: {0}")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
