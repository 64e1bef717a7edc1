pub mod crawler;
pub mod extractor;
mod query;
pub mod walker;

use url::Url;

use crate::types::Result;

pub const DEFAULT_BASE_URL: &str = "https://djinni.co/jobs/";
pub const DEFAULT_KEYWORD: &str = "Python";
pub const DEFAULT_CATEGORY_MARKER: &str = "Категорія:";

/// Where to crawl and what to look for.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: Url,
    pub keyword: String,
    /// Label of the list row whose sibling holds the technology tags
    pub category_marker: String,
}

impl SiteConfig {
    pub fn new(base_url: Url, keyword: impl Into<String>) -> Self {
        Self {
            base_url,
            keyword: keyword.into(),
            category_marker: DEFAULT_CATEGORY_MARKER.to_owned(),
        }
    }

    pub fn first_index_url(&self) -> Result<Url> {
        self.resolve(&format!(
            "?primary_keyword={}&page=1",
            urlencoding::encode(&self.keyword)
        ))
    }

    /// Joins a link found on the site onto the base url.
    pub fn resolve(&self, href: &str) -> Result<Url> {
        Ok(self.base_url.join(href)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base url is valid");
        Self::new(base_url, DEFAULT_KEYWORD)
    }
}
