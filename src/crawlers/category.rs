use super::extractor::read_text;
use crate::browser::Browser;
use crate::config::CategoryStrategy;
use crate::retry::RetryPolicy;
use crate::utils::normalize_text;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Label used when every strategy comes up empty
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Catalogue-code listings look like `/<Name>/c/<CODE>`
static CODE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([^/]+)/c/[^/]+/?$").expect("valid catalogue path regex"));

/// Walk the strategy chain in order and return the first label found
pub async fn detect_category<B: Browser>(
    browser: &B,
    strategies: &[CategoryStrategy],
    text_policy: &RetryPolicy,
) -> String {
    for strategy in strategies {
        if let Some(label) = try_strategy(browser, strategy, text_policy).await {
            ::log::debug!("Category {:?} resolved by {:?}", label, strategy);
            return label;
        }
        ::log::trace!("Category strategy {:?} found nothing", strategy);
    }
    UNKNOWN_CATEGORY.to_string()
}

async fn try_strategy<B: Browser>(
    browser: &B,
    strategy: &CategoryStrategy,
    text_policy: &RetryPolicy,
) -> Option<String> {
    match strategy {
        CategoryStrategy::Heading { selector } => {
            let heading = browser.find(selector).await.ok()?;
            let text = read_text(browser, &heading, text_policy).await;
            (!text.is_empty()).then_some(text)
        }
        CategoryStrategy::Breadcrumb { selector } => {
            let crumbs = browser.find_all(selector).await.ok()?;
            let mut last = None;
            for crumb in &crumbs {
                let text = read_text(browser, crumb, text_policy).await;
                if !text.is_empty() {
                    last = Some(text);
                }
            }
            last
        }
        CategoryStrategy::UrlSlug => {
            let url = browser.current_url().await.ok()?;
            label_from_url(&url)
        }
    }
}

/// Best-effort label from a category URL
pub fn label_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let path = parsed.path();

    let slug = match CODE_PATH.captures(path) {
        Some(captures) => captures.get(1)?.as_str().to_string(),
        None => path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()?
            .to_string(),
    };

    let label = normalize_text(&slug.replace(['-', '_'], " "));
    (!label.is_empty()).then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_slug() {
        assert_eq!(
            label_from_url("https://shop.example/en-ae/fresh-food-bakery-asian-bakery/").as_deref(),
            Some("fresh food bakery asian bakery")
        );
    }

    #[test]
    fn test_label_from_catalogue_code() {
        assert_eq!(
            label_from_url("https://shop.example/en-ae/Pantry-Essentials/c/CPUAE0182").as_deref(),
            Some("Pantry Essentials")
        );
        assert_eq!(
            label_from_url("https://shop.example/en-ae/Frozen-Foods/c/CPUAE0180/").as_deref(),
            Some("Frozen Foods")
        );
    }

    #[test]
    fn test_label_from_bare_host() {
        assert_eq!(label_from_url("https://shop.example/"), None);
        assert_eq!(label_from_url("not a url"), None);
    }
}
