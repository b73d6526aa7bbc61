//! Native asset fetchers: local directory and HTTP base URL.

use crate::AssetArgs;
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;
use stc_core::{AssetFetcher, FetchResponse};

/// Reads assets from a directory. A missing file answers 404, like the
/// static server the web app is deployed behind.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetFetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> anyhow::Result<FetchResponse> {
        let full = self.root.join(path);
        debug!("reading {}", full.display());
        match tokio::fs::read_to_string(&full).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(anyhow::anyhow!("{}: {}", full.display(), e)),
        }
    }
}

/// Fetches assets relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl AssetFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> anyhow::Result<FetchResponse> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchResponse { status, body })
    }
}

/// Fetcher selected by the CLI flags.
pub enum CliFetcher {
    File(FileFetcher),
    Http(HttpFetcher),
}

impl CliFetcher {
    pub fn from_args(args: &AssetArgs) -> Self {
        match args.base_url.as_deref() {
            Some(url) => CliFetcher::Http(HttpFetcher::new(url)),
            None => CliFetcher::File(FileFetcher::new(&args.dir)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CliFetcher::File(f) => f.root.display().to_string(),
            CliFetcher::Http(h) => h.base_url.clone(),
        }
    }
}

impl AssetFetcher for CliFetcher {
    async fn fetch(&self, path: &str) -> anyhow::Result<FetchResponse> {
        match self {
            CliFetcher::File(f) => f.fetch(path).await,
            CliFetcher::Http(h) => h.fetch(path).await,
        }
    }
}
