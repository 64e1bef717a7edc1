use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::types::{Error, Result};

/// Something that can GET a page and hand back its body.
#[async_trait]
pub trait PageSource: Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

#[async_trait]
impl PageSource for Client {
    async fn fetch(&self, url: &Url) -> Result<String> {
        log::debug!("GET {}", url);
        let resp = self.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            log::error!(
                "request not successful, status code: {}, url: {}",
                resp.status(),
                url
            );
            return Err(Error::RequestNotOk(url.to_string()));
        }
        Ok(resp.text().await?)
    }
}

/// One pooled session for a whole crawl.
/// Proxy settings come from the environment, certificates are not verified.
pub fn session() -> Result<Client> {
    let client = Client::builder()
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}


#[cfg(test)]
mod test {
    use super::testing::StaticPages;
    use super::*;

    #[tokio::test]
    async fn test_static_pages_miss_is_not_ok() {
        let pages = StaticPages::default().with("https://example.com/a", "<p>a</p>");
        let url = Url::parse("https://example.com/b").unwrap();
        let res = pages.fetch(&url).await;
        assert!(matches!(res, Err(Error::RequestNotOk(ref u)) if u == "https://example.com/b"));
        assert_eq!(pages.requests(), 1);
    }

    #[test]
    fn test_session_builds() {
        assert!(session().is_ok(), "Failed to build http session");
    }
}
