//! One listing page and its lazily derived state

use crate::crawler::fetcher::fetch_page;
use crate::listing::{
    extract_rows, parse_document, records_from_rows, DirectoryRecord, FileRecord, Row, RowKind,
};
use crate::Result;
use reqwest::Client;
use url::Url;

/// A listing page identified by its URL
///
/// Nothing is fetched on construction. The raw body, the table rows and the
/// two record lists are each computed on first use and cached, so reading
/// `files` and then `subpages` costs one request and one parse.
///
/// The markup tree is only alive inside the synchronous parse step; the page
/// keeps owned rows, so its futures are `Send`.
#[derive(Debug)]
pub struct PageSource {
    url: Url,
    client: Client,
    raw_page: Option<String>,
    rows: Option<Vec<Row>>,
    files: Option<Vec<FileRecord>>,
    subpages: Option<Vec<DirectoryRecord>>,
}

impl PageSource {
    pub fn new(url: Url, client: Client) -> Self {
        Self {
            url,
            client,
            raw_page: None,
            rows: None,
            files: None,
            subpages: None,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns true once the page body has been downloaded
    pub fn is_fetched(&self) -> bool {
        self.raw_page.is_some()
    }

    /// File records of the page, in document order
    pub async fn files(&mut self) -> Result<&[FileRecord]> {
        if self.files.is_none() {
            self.load_rows().await?;
            let rows = self.rows.as_deref().unwrap_or_default();
            let files = records_from_rows(rows, &self.url, RowKind::File);
            tracing::debug!("{}: {} files", self.url, files.len());
            self.files = Some(files);
        }
        Ok(self.files.as_deref().unwrap_or_default())
    }

    /// Directory records of the page, in document order
    pub async fn subpages(&mut self) -> Result<&[DirectoryRecord]> {
        if self.subpages.is_none() {
            self.load_rows().await?;
            let rows = self.rows.as_deref().unwrap_or_default();
            let subpages = records_from_rows(rows, &self.url, RowKind::Directory);
            tracing::debug!("{}: {} directories", self.url, subpages.len());
            self.subpages = Some(subpages);
        }
        Ok(self.subpages.as_deref().unwrap_or_default())
    }

    /// Raw page body, fetching it on first use
    pub async fn raw_page(&mut self) -> Result<&str> {
        self.load_raw_page().await?;
        Ok(self.raw_page.as_deref().unwrap_or_default())
    }

    /// Parses the page into table rows unless already done
    async fn load_rows(&mut self) -> Result<()> {
        if self.rows.is_none() {
            self.load_raw_page().await?;
            let raw_page = self.raw_page.as_deref().unwrap_or_default();
            self.rows = Some(extract_rows(&parse_document(raw_page)));
        }
        Ok(())
    }

    /// Fetches the page body unless already done
    async fn load_raw_page(&mut self) -> Result<()> {
        if self.raw_page.is_none() {
            self.raw_page = Some(fetch_page(&self.client, &self.url).await?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::crawler::build_http_client;

    #[test]
    fn test_new_page_fetches_nothing() {
        let client = build_http_client(&HttpConfig::default()).unwrap();
        let url = Url::parse("https://domain/dir/").unwrap();
        let page = PageSource::new(url.clone(), client);

        assert_eq!(page.url(), &url);
        assert!(!page.is_fetched());
        assert!(page.files.is_none());
        assert!(page.subpages.is_none());
        assert!(page.rows.is_none());
    }

    #[tokio::test]
    async fn test_cached_files_are_returned_without_fetching() {
        let client = build_http_client(&HttpConfig::default()).unwrap();
        // Unroutable on purpose: any request would fail.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let mut page = PageSource::new(url, client);

        let cached = vec![FileRecord {
            name: Some("custom.txt".to_string()),
            ..Default::default()
        }];
        page.files = Some(cached.clone());
        page.subpages = Some(Vec::new());

        assert_eq!(page.files().await.unwrap(), cached.as_slice());
        assert!(page.subpages().await.unwrap().is_empty());
        assert!(!page.is_fetched());
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn test_page_futures_are_send() {
        let client = build_http_client(&HttpConfig::default()).unwrap();
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let mut page = PageSource::new(url, client);

        assert_send(&page.files());
        assert_send(&page.subpages());
        assert_send(&page.raw_page());
    }
}
