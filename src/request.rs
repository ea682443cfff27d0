use std::future::Future;

use reqwest::Client;

use crate::{Result, BASE_URL, USER_AGENT};

/// Anything that can hand out the raw HTML of a listing page.
pub trait PageSource {
    fn fetch_page(&self, letter: char, page: usize) -> impl Future<Output = Result<String>> + Send;
}

/// The live site.
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
    base_url: String,
}

impl SiteClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// `base_url` must contain the `{page}` and `{letter}` placeholders.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn page_url(&self, letter: char, page: usize) -> String {
        self.base_url
            .replace("{page}", &page.to_string())
            .replace("{letter}", &letter.to_string())
    }
}

impl PageSource for SiteClient {
    /// Requests a page and returns the HTML.
    /// Status codes are not checked, pages past the end come back as a
    /// not-found page without a listing table.
    async fn fetch_page(&self, letter: char, page: usize) -> Result<String> {
        let res = self
            .client
            .get(self.page_url(letter, page))
            .send()
            .await?;
        let html = res.text().await?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_fills_both_placeholders() {
        let client = SiteClient::new().unwrap();
        assert_eq!(
            client.page_url('C', 3),
            "https://medicament.ma/listing-des-medicaments/page/3/?lettre=C"
        );
    }

    #[test]
    fn page_url_with_custom_base() {
        let client = SiteClient::with_base_url("http://127.0.0.1:3000/{letter}/{page}").unwrap();
        assert_eq!(client.page_url('Z', 12), "http://127.0.0.1:3000/Z/12");
    }
}
