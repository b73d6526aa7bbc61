//! Startup loader for the three static assets.
//!
//! The token list, pair mapping, and statistics are requested concurrently
//! and joined. The first two are required; the statistics asset is optional
//! and any failure there degrades to an empty map.

use crate::config::AssetPaths;
use crate::error::LoadError;
use crate::models::{parse_pair_mapping, parse_stats, parse_token_list, StatsMap, TokenCatalog};
use log::{error, info, warn};

/// Status and body of a fetched asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of the static assets: the browser's `fetch`, the filesystem, or HTTP.
///
/// An `Err` is a transport failure; an HTTP error status is an `Ok` response
/// with a non-2xx `status`.
#[allow(async_fn_in_trait)]
pub trait AssetFetcher {
    async fn fetch(&self, path: &str) -> anyhow::Result<FetchResponse>;
}

/// Fetch all three assets and build the catalog.
pub async fn load_catalog<F: AssetFetcher>(
    fetcher: &F,
    paths: &AssetPaths,
) -> Result<TokenCatalog, LoadError> {
    info!(
        "Loading assets: {}, {}, {}",
        paths.token_list, paths.pair_mapping, paths.stats
    );

    let (tokens_res, mapping_res, stats_res) = futures::join!(
        fetcher.fetch(&paths.token_list),
        fetcher.fetch(&paths.pair_mapping),
        fetcher.fetch(&paths.stats),
    );

    let tokens_res = tokens_res.map_err(|e| LoadError::Request {
        resource: "Token list",
        message: format!("{:#}", e),
    })?;
    let mapping_res = mapping_res.map_err(|e| LoadError::Request {
        resource: "Pair mapping",
        message: format!("{:#}", e),
    })?;

    if !tokens_res.is_success() {
        return Err(LoadError::TokenListStatus(tokens_res.status));
    }
    if !mapping_res.is_success() {
        return Err(LoadError::PairMappingStatus(mapping_res.status));
    }

    let tokens = parse_token_list(&tokens_res.body)?;
    let pairs = parse_pair_mapping(&mapping_res.body)?;
    let (stats, stats_available) = match stats_res {
        Ok(res) => stats_from_response(res),
        Err(e) => {
            error!("OHLCV data fetch failed: {:#}", e);
            (StatsMap::new(), false)
        }
    };

    info!(
        "Loaded {} tokens, {} pair entries, {} statistics records",
        tokens.len(),
        pairs.len(),
        stats.len()
    );

    Ok(TokenCatalog {
        tokens,
        pairs,
        stats,
        stats_available,
    })
}

fn stats_from_response(res: FetchResponse) -> (StatsMap, bool) {
    if !res.is_success() {
        error!("OHLCV data fetch failed: {}", res.status);
        return (StatsMap::new(), false);
    }
    match parse_stats(&res.body) {
        Ok(stats) => (stats, true),
        Err(e) => {
            warn!("OHLCV data unusable, continuing without it: {:#}", e);
            (StatsMap::new(), false)
        }
    }
}
