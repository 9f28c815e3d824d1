//! Content extraction: fetch a URL and reduce it to readable text.
//!
//! Handles two content families: PDF responses are decoded page by page,
//! everything else goes through boilerplate-stripping HTML extraction
//! (navigation, ads and chrome removed, main article text kept).
//!
//! Extraction failure is a per-source outcome, never a batch failure: every
//! error path logs and yields `None`.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

/// Minimum trimmed character count for HTML extraction output. Anything
/// shorter is a failed or near-empty extraction and yields absent.
const MIN_HTML_TEXT_CHARS: usize = 100;

/// Per-fetch transport timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Content-bearing regions tried in order before falling back to `<body>`.
const MAIN_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role='main']",
    "#content",
    "#main",
    ".post-content",
    ".entry-content",
];

/// Elements that never carry article text.
const BOILERPLATE_SELECTORS: &[&str] = &[
    "nav",
    "header",
    "footer",
    "aside",
    "script",
    "style",
    "noscript",
    "iframe",
    "form",
    ".sidebar",
    ".menu",
    ".navbar",
    ".advertisement",
    ".ads",
];

/// Readable-text extraction from a URL.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract readable text. `None` means the fetch or extraction failed or
    /// produced nothing usable; callers substitute a placeholder and move on.
    async fn extract(&self, url: &str) -> Option<String>;
}

/// HTTP extractor handling HTML and PDF responses.
pub struct HttpExtractor {
    client: reqwest::Client,
}

impl HttpExtractor {
    pub fn new() -> Self {
        // Browser-like identification; some sites reject default library
        // user agents outright.
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/pdf;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn fetch_and_extract(&self, url: &str) -> Result<Option<String>, reqwest::Error> {
        debug!(url = %url, "fetching source");
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if is_pdf(&content_type) {
            let bytes = response.bytes().await?;
            Ok(extract_pdf_text(&bytes))
        } else {
            let html = response.text().await?;
            Ok(extract_html_text(&html))
        }
    }
}

impl Default for HttpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extractor for HttpExtractor {
    async fn extract(&self, url: &str) -> Option<String> {
        match self.fetch_and_extract(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = %url, error = %e, "content extraction failed");
                None
            }
        }
    }
}

/// Check the declared content type for a PDF body.
fn is_pdf(content_type: &str) -> bool {
    content_type.contains("application/pdf")
}

/// Decode the extractable text of every page in a PDF document.
fn extract_pdf_text(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(e) => {
            warn!(error = %e, "PDF decode failed");
            None
        }
    }
}

/// Boilerplate-stripping HTML extraction.
///
/// Isolates the main content region, drops chrome elements, and converts
/// what survives to markdown text. Output shorter than the floor is treated
/// as a failed extraction.
fn extract_html_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let region = main_region(&document).unwrap_or_else(|| body_region(&document));
    let cleaned = strip_boilerplate(&region);
    let text = to_text(&cleaned);

    let trimmed = text.trim();
    if trimmed.chars().count() > MIN_HTML_TEXT_CHARS {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// First matching main-content region, as HTML.
fn main_region(document: &Html) -> Option<String> {
    MAIN_SELECTORS.iter().find_map(|selector_str| {
        let selector = Selector::parse(selector_str).ok()?;
        document
            .select(&selector)
            .next()
            .map(|element| element.html())
    })
}

/// `<body>` (or, failing that, the whole document) as HTML.
fn body_region(document: &Html) -> String {
    Selector::parse("body")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|element| element.html())
        })
        .unwrap_or_else(|| document.root_element().html())
}

/// Remove chrome elements from an HTML fragment.
fn strip_boilerplate(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut cleaned = html.to_string();

    for selector_str in BOILERPLATE_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                cleaned = cleaned.replace(&element.html(), "");
            }
        }
    }

    cleaned
}

/// Convert an HTML fragment to markdown text, falling back to a bare text
/// collection if conversion fails.
fn to_text(html: &str) -> String {
    htmd::convert(html).unwrap_or_else(|_| {
        Html::parse_document(html).root_element().text().collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(body: &str) -> String {
        format!(
            "<html><head><title>t</title></head><body>\
             <nav><a href=\"/\">Home</a><a href=\"/about\">About</a></nav>\
             <article><h1>Heading</h1><p>{}</p></article>\
             <footer>Copyright 2025 Example Corp, all rights reserved</footer>\
             </body></html>",
            body
        )
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf("application/pdf"));
        assert!(is_pdf("application/pdf; charset=binary"));
        assert!(!is_pdf("text/html; charset=utf-8"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn test_html_extraction_keeps_article_text() {
        let long_paragraph = "Rust's ownership model statically prevents data races. \
            The borrow checker enforces aliasing rules at compile time, which is \
            why concurrent code in Rust carries fewer footguns than elsewhere.";
        let text = extract_html_text(&article(long_paragraph)).unwrap();

        assert!(text.contains("ownership model"));
        assert!(!text.contains("About"));
        assert!(!text.contains("Copyright"));
    }

    #[test]
    fn test_html_extraction_floor_rejects_short_output() {
        assert_eq!(extract_html_text(&article("Too short.")), None);
        assert_eq!(extract_html_text("<html><body></body></html>"), None);
    }

    #[test]
    fn test_main_region_prefers_article_over_body() {
        let document = Html::parse_document(
            "<body><p>outside</p><article><p>inside</p></article></body>",
        );
        let region = main_region(&document).unwrap();
        assert!(region.contains("inside"));
        assert!(!region.contains("outside"));
    }

    #[test]
    fn test_pdf_decode_failure_is_absent() {
        assert_eq!(extract_pdf_text(b"not a pdf"), None);
    }
}
