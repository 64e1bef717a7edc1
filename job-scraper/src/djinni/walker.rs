use lazy_static::lazy_static;
use scraper::{Html, Selector};

use super::query::select_one;
use super::SiteConfig;
use crate::fetch::PageSource;
use crate::types::Result;

lazy_static! {
    static ref LISTING_CARD: Selector = Selector::parse("a.profile").unwrap();
    static ref NEXT_PAGE: Selector = Selector::parse(".d-md-none > a.btn-lg").unwrap();
}

struct IndexPage {
    listing_links: Vec<String>,
    next_page: Option<String>,
}

fn parse_index_page(html: &str) -> IndexPage {
    let doc = Html::parse_document(html);
    let listing_links = doc
        .select(&LISTING_CARD)
        .filter_map(|a| a.value().attr("href"))
        .map(String::from)
        .collect();
    let next_page = select_one(&doc, &NEXT_PAGE)
        .and_then(|a| a.value().attr("href"))
        .map(String::from);
    IndexPage {
        listing_links,
        next_page,
    }
}

/// Follows the search result pages until there is no next page,
/// collecting the relative links of every listing on the way.
pub async fn walk<S: PageSource + ?Sized>(source: &S, config: &SiteConfig) -> Result<Vec<String>> {
    let mut page_url = config.first_index_url()?;
    let mut links = Vec::new();
    let mut pages = 0;
    loop {
        let html = source.fetch(&page_url).await?;
        let page = parse_index_page(&html);
        pages += 1;
        log::debug!(
            "found {} listings on index page {}",
            page.listing_links.len(),
            page_url
        );
        links.extend(page.listing_links);
        match page.next_page {
            Some(href) => page_url = config.resolve(&href)?,
            None => break,
        }
    }
    log::info!(
        "walked {} index pages for '{}', found {} listings",
        pages,
        config.keyword,
        links.len()
    );
    Ok(links)
}
