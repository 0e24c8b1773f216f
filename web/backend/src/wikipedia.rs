use regex::Regex;
use reqwest::Client;
use rustc_hash::FxHashSet;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;
use wikirace_core::{FetchError, LinkSource, PageId};

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

static CONTENT_LINKS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#bodyContent #mw-content-text a").expect("Invalid article link selector")
});

static MEDIA_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpe?g|png|gif|bmp|mov|avi|mp4|pdf|docx|xlsx|pptx)$")
        .expect("Invalid media suffix regex")
});

/// Link source backed by live Wikipedia article pages
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("wikirace/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url })
    }

    pub fn page_url(&self, page: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(page))
    }
}

impl LinkSource for WikipediaClient {
    async fn fetch_neighbors(&self, page: &str) -> Result<Vec<PageId>, FetchError> {
        let url = self.page_url(page);
        debug!(page, url = %url, "Scraping page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::request(page, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                page: page.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::request(page, e))?;

        Ok(extract_links(&body))
    }

    fn canonical_page(&self, page: &str) -> PageId {
        normalize_title(page)
    }
}

/// Article titles linked from the content area of a page, in document order
/// and without duplicates.
pub fn extract_links(html: &str) -> Vec<PageId> {
    let document = Html::parse_document(html);
    let mut seen = FxHashSet::default();

    document
        .select(&CONTENT_LINKS)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| href.strip_prefix("/wiki/"))
        .map(|title| title.split_once('#').map_or(title, |(title, _)| title))
        .map(decode_title)
        .filter(|title| is_article_title(title))
        .filter(|title| seen.insert(title.clone()))
        .collect()
}

/// Wikipedia spells titles with underscores; users type spaces.
pub fn normalize_title(title: &str) -> PageId {
    title.trim().replace(' ', "_")
}

fn is_article_title(title: &str) -> bool {
    // Namespaced pages (File:, Help:, Special:...) are not articles
    !title.is_empty() && !title.contains(':') && !MEDIA_SUFFIX.is_match(title)
}

fn decode_title(title: &str) -> PageId {
    urlencoding::decode(title)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| title.to_string())
}
