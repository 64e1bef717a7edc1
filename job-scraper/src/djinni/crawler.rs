use futures::future::{join_all, try_join_all};

use super::extractor::extract_listing;
use super::walker::walk;
use super::SiteConfig;
use crate::fetch::{session, PageSource};
use crate::types::Result;
use crate::JobListing;

/// Crawls every listing of a keyword search.
pub struct Crawler {
    config: SiteConfig,
}

impl Crawler {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Crawls all listings over a fresh session.
    /// Any failing listing fails the whole crawl, nothing partial is returned.
    pub async fn crawl(&self) -> Result<Vec<JobListing>> {
        let client = session()?;
        self.crawl_with(&client).await
    }

    pub async fn crawl_with<S: PageSource + ?Sized>(&self, source: &S) -> Result<Vec<JobListing>> {
        let links = walk(source, &self.config).await?;
        log::info!("scraping {} listings", links.len());
        let jobs = links.iter().map(|link| self.scrape_listing(source, link));
        try_join_all(jobs).await
    }

    /// Like [`Crawler::crawl`], but every listing succeeds or fails on its own.
    /// Results are paired with the listing link and keep the link order.
    pub async fn crawl_each(&self) -> Result<Vec<(String, Result<JobListing>)>> {
        let client = session()?;
        self.crawl_each_with(&client).await
    }

    pub async fn crawl_each_with<S: PageSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<(String, Result<JobListing>)>> {
        let links = walk(source, &self.config).await?;
        log::info!("scraping {} listings", links.len());
        let jobs = links.iter().map(|link| self.scrape_listing(source, link));
        let results = join_all(jobs).await;
        Ok(links.into_iter().zip(results).collect())
    }

    async fn scrape_listing<S: PageSource + ?Sized>(&self, source: &S, link: &str) -> Result<JobListing> {
        let url = self.config.resolve(link)?;
        let html = source.fetch(&url).await?;
        let job = extract_listing(&html, &self.config)?;
        log::debug!("scraped listing {}", url);
        Ok(job)
    }
}
