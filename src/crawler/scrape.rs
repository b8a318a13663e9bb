use anyhow::{anyhow, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::{ParseError, Url};

/// Download the page at `url` and return its body.
/// Transport errors and non-success statuses are both failures.
pub async fn fetch_page(url: &str, client: &Client, timeout: Option<Duration>) -> Result<String> {
    let mut request = client.get(url);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }
    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("Failed to fetch page: {}", response.status()));
    }

    Ok(response.text().await?)
}

/// Raw `href` values of every `<a>` element, in document order.
/// Values are returned exactly as written in the markup, nothing is resolved.
pub fn extract_hrefs(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    Ok(document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect())
}

/// Checks whether `href` points at `host`.
///
/// A relative reference has no host of its own and never matches.
/// Any other parse failure is returned to the caller.
pub fn is_same_host(href: &str, host: &str) -> Result<bool, ParseError> {
    match Url::parse(href) {
        Ok(url) => Ok(url.host_str() == Some(host)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok(false),
        Err(e) => Err(e),
    }
}
