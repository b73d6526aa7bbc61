//! `check`: load the assets and report coverage gaps.

use crate::fetch::CliFetcher;
use crate::AssetArgs;
use log::{info, warn};
use stc_core::config::AssetPaths;
use stc_core::{load_catalog, DexSource, TokenCatalog};

/// Coverage summary of a loaded catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub tokens: usize,
    /// Token count per source, in button order.
    pub per_source: Vec<(DexSource, usize)>,
    pub without_pairs: Vec<String>,
    pub without_stats: Vec<String>,
    pub stats_available: bool,
    /// Mapping entries for tokens that are not in the list.
    pub unlisted_mappings: usize,
}

impl CheckReport {
    pub fn from_catalog(catalog: &TokenCatalog) -> Self {
        let per_source = DexSource::ALL
            .into_iter()
            .map(|source| {
                let count = catalog
                    .tokens
                    .iter()
                    .filter(|t| catalog.pairs_for(t).is_some_and(|p| p.contains(source)))
                    .count();
                (source, count)
            })
            .collect();
        let unlisted_mappings = catalog
            .pairs
            .keys()
            .filter(|k| !catalog.tokens.iter().any(|t| t == *k))
            .count();

        Self {
            tokens: catalog.len(),
            per_source,
            without_pairs: catalog
                .tokens_without_pairs()
                .into_iter()
                .map(str::to_string)
                .collect(),
            without_stats: catalog
                .tokens_without_stats()
                .into_iter()
                .map(str::to_string)
                .collect(),
            stats_available: catalog.stats_available,
            unlisted_mappings,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("tokens: {}\n", self.tokens);
        for (source, count) in &self.per_source {
            out.push_str(&format!("  {:<9} {}\n", source.key(), count));
        }
        out.push_str(&format!("without pairs: {}\n", self.without_pairs.len()));
        for token in &self.without_pairs {
            out.push_str(&format!("  {}\n", token));
        }
        if self.stats_available {
            out.push_str(&format!("without statistics: {}\n", self.without_stats.len()));
        } else {
            out.push_str("statistics: unavailable\n");
        }
        if self.unlisted_mappings > 0 {
            out.push_str(&format!(
                "mapping entries for unlisted tokens: {}\n",
                self.unlisted_mappings
            ));
        }
        out
    }
}

pub async fn run_check(assets: &AssetArgs) -> anyhow::Result<()> {
    let fetcher = CliFetcher::from_args(assets);
    info!("Checking assets at {}", fetcher.describe());

    let catalog = load_catalog(&fetcher, &AssetPaths::default()).await?;
    let report = CheckReport::from_catalog(&catalog);
    if !report.without_pairs.is_empty() {
        warn!("{} tokens have no chartable pool", report.without_pairs.len());
    }
    print!("{}", report.render());
    Ok(())
}
