//! Fetching and merging remote disposable-domain lists
//!
//! Each source resolves to a newline-delimited plain-text list of domains.
//! An update is all-or-nothing: any source failing aborts the whole fetch
//! and the previously installed snapshot stays authoritative.

use crate::error::FetchError;
use crate::index::DomainIndex;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// The regularly updated blocklist maintained at
/// <https://github.com/martenson/disposable-email-domains>.
pub const DEFAULT_LIST_URL: &str =
    "https://raw.githubusercontent.com/martenson/disposable-email-domains/master/disposable_email_blocklist.conf";

/// A source of raw domain-list text.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Identifier used in error reporting, typically the URL.
    fn name(&self) -> &str;

    /// Retrieve the full list body for this source.
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// [`ListSource`] backed by an HTTP GET against a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with a default client.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a source with a caller-configured client, e.g. one carrying
    /// a request timeout or proxy settings.
    #[must_use]
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl ListSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&self.url, e, false))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                source_name: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&self.url, e, true))
    }
}

fn classify_reqwest_error(url: &str, error: reqwest::Error, reading_body: bool) -> FetchError {
    if error.is_timeout() {
        FetchError::Cancelled
    } else if reading_body {
        FetchError::Body {
            source_name: url.to_string(),
            source: Box::new(error),
        }
    } else {
        FetchError::Transport {
            source_name: url.to_string(),
            source: Box::new(error),
        }
    }
}

/// Split a list body into lowercased domain entries. Blank lines and `#`
/// comment lines are skipped; the upstream blocklist conf carries both.
fn parse_list(body: &str) -> HashSet<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Fetch every source in order and merge the results into one set.
///
/// The first failing source aborts the whole operation and partial results
/// are discarded.
pub async fn fetch_merged(sources: &[Arc<dyn ListSource>]) -> Result<HashSet<String>, FetchError> {
    let mut merged = HashSet::new();
    for source in sources {
        let body = source.fetch().await?;
        let entries = parse_list(&body);
        debug!("fetched {} entries from {}", entries.len(), source.name());
        merged.extend(entries);
    }
    Ok(merged)
}

/// Fetch all sources concurrently, one task per source, and merge the
/// results into one set.
///
/// Same contract as [`fetch_merged`]: any source failing fails the batch,
/// and sibling fetches are aborted. Dropping the returned future aborts all
/// in-flight fetches.
pub async fn fetch_merged_parallel(
    sources: &[Arc<dyn ListSource>],
) -> Result<HashSet<String>, FetchError> {
    let mut tasks = JoinSet::new();
    for source in sources {
        let source = Arc::clone(source);
        tasks.spawn(async move {
            let body = source.fetch().await?;
            let entries = parse_list(&body);
            debug!("fetched {} entries from {}", entries.len(), source.name());
            Ok::<_, FetchError>(entries)
        });
    }

    let mut merged = HashSet::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(entries)) => merged.extend(entries),
            Ok(Err(e)) => {
                tasks.abort_all();
                return Err(e);
            }
            Err(join_error) => {
                if join_error.is_panic() {
                    std::panic::resume_unwind(join_error.into_panic());
                }
                tasks.abort_all();
                return Err(FetchError::Cancelled);
            }
        }
    }
    Ok(merged)
}

/// How [`refresh`] fetches its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One source at a time, in the order given
    #[default]
    Sequential,
    /// All sources concurrently
    Parallel,
}

/// Fetch all sources and, on success, atomically install the merged set
/// into `index`. Returns the number of installed domains.
///
/// On any failure the index is left untouched and the error is returned;
/// retry policy belongs to the caller.
pub async fn refresh(
    index: &DomainIndex,
    sources: &[Arc<dyn ListSource>],
    mode: FetchMode,
) -> Result<usize, FetchError> {
    let merged = match mode {
        FetchMode::Sequential => fetch_merged(sources).await?,
        FetchMode::Parallel => fetch_merged_parallel(sources).await?,
    };

    let count = merged.len();
    index.replace(merged);
    info!("installed {count} disposable domains from {} sources", sources.len());
    Ok(count)
}
