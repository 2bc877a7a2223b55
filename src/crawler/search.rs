//! Single page queries and the recursive crawler

use crate::config::CrawlConfig;
use crate::crawler::page::PageSource;
use crate::listing::{DirectoryRecord, FileRecord};
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Returns the file records of one listing page
pub async fn search_files(client: &Client, url: &Url) -> Result<Vec<FileRecord>> {
    let mut page = PageSource::new(url.clone(), client.clone());
    Ok(page.files().await?.to_vec())
}

/// Returns the directory records of one listing page
pub async fn search_dirs(client: &Client, url: &Url) -> Result<Vec<DirectoryRecord>> {
    let mut page = PageSource::new(url.clone(), client.clone());
    Ok(page.subpages().await?.to_vec())
}

/// Returns the file records of a listing page and every directory below it
///
/// Uses the default crawl settings; see [`Crawler`].
pub async fn search_recursive(client: &Client, url: &Url) -> Result<Vec<FileRecord>> {
    Crawler::new(client.clone(), CrawlConfig::default())
        .crawl(url)
        .await
}

/// Recursive directory tree traversal
///
/// Pages are visited one at a time from a stack of pending pages: the most
/// recently discovered directory is listed next. Each page is drained (files,
/// then subdirectories) before the next one is fetched.
///
/// Any failed fetch aborts the whole crawl and no partial inventory is
/// returned.
///
/// With the default configuration no visited set is kept, so a listing that
/// links back to one of its ancestors is crawled forever. Enable
/// `skip_visited` to fetch each URL at most once per crawl.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: Client,
    config: CrawlConfig,
}

/// Counters of one finished crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Listing pages fetched
    pub pages: usize,
    /// Directory records that were not followed (no URL, or already visited)
    pub skipped: usize,
}

impl Crawler {
    pub fn new(client: Client, config: CrawlConfig) -> Self {
        Self { client, config }
    }

    /// Crawls the tree rooted at `root` and returns every file record found
    pub async fn crawl(&self, root: &Url) -> Result<Vec<FileRecord>> {
        self.crawl_with_stats(root).await.map(|(files, _)| files)
    }

    /// Like [`Crawler::crawl`], also returning crawl counters
    pub async fn crawl_with_stats(&self, root: &Url) -> Result<(Vec<FileRecord>, CrawlStats)> {
        tracing::info!("Starting recursive search at {}", root);

        let mut pending = vec![PageSource::new(root.clone(), self.client.clone())];
        let mut visited: HashSet<Url> = HashSet::new();
        let mut files = Vec::new();
        let mut stats = CrawlStats::default();

        if self.config.skip_visited {
            visited.insert(root.clone());
        }

        while let Some(mut page) = pending.pop() {
            files.extend_from_slice(page.files().await?);
            stats.pages += 1;

            let page_url = page.url().clone();
            for subpage in page.subpages().await? {
                let Some(url) = subpage.url.as_ref() else {
                    tracing::warn!(
                        "Directory {:?} on {} has no URL, not following it",
                        subpage.dir,
                        page_url
                    );
                    stats.skipped += 1;
                    continue;
                };

                if self.config.skip_visited && !visited.insert(url.clone()) {
                    tracing::debug!("Already visited {}, skipping", url);
                    stats.skipped += 1;
                    continue;
                }

                pending.push(PageSource::new(url.clone(), self.client.clone()));
            }

            tracing::trace!("{} pages pending", pending.len());
        }

        tracing::info!(
            "Recursive search finished: {} files in {} pages",
            files.len(),
            stats.pages
        );

        Ok((files, stats))
    }
}
