//! `show`: print what the viewer would render for one token.

use crate::fetch::CliFetcher;
use crate::AssetArgs;
use log::info;
use stc_core::config::{AssetPaths, WidgetOptions};
use stc_core::view::{build_token_view, EmbedView, ScriptStatus};
use stc_core::{load_catalog, ChartType, Selection, TokenCatalog};

/// Text description of the view for the token at `index`.
///
/// The widget script is assumed loaded; the time zone is left to the default.
pub fn describe(catalog: &TokenCatalog, index: usize, chart: ChartType) -> anyhow::Result<String> {
    let mut selection = Selection::initial(catalog);
    selection.go_to(catalog, index);
    selection.select_chart(chart);

    let Some(view) = build_token_view(catalog, &selection, &ScriptStatus::Loaded) else {
        anyhow::bail!("no token addresses found in the list");
    };

    let mut out = format!(
        "token {} of {}: {}\n",
        view.nav.position, view.nav.total, view.nav.address
    );
    let sources: Vec<&str> = view.sources.buttons.iter().map(|b| b.source.key()).collect();
    out.push_str(&format!(
        "sources: {}\n",
        if sources.is_empty() { "none".to_string() } else { sources.join(", ") }
    ));
    out.push_str(&format!(
        "selected source: {}\n",
        selection.source.map_or("none", |s| s.key())
    ));
    out.push_str(&format!("ATH (USD): {}\n", view.info.ath_usd));
    out.push_str(&format!("Est. ATH MCAP (USD): {}\n", view.info.est_ath_market_cap_usd));
    if let Some(link) = &view.info.axiom_link {
        out.push_str(&format!("axiom: {}\n", link));
    }

    match &view.embed {
        EmbedView::Iframe { src, .. } => out.push_str(&format!("embed: {}\n", src)),
        EmbedView::Widget {
            pair_address,
            container_id,
        } => {
            let options = WidgetOptions::for_pair(pair_address, None);
            out.push_str(&format!("widget container: {}\n", container_id));
            out.push_str(&format!("widget options: {}\n", options.to_json()?));
        }
        EmbedView::Notices(notices) => {
            for notice in notices {
                out.push_str(&format!("note: {}\n", notice.text));
            }
        }
    }
    out.push_str(&format!("buyers: {}\n", view.buyers.len()));
    Ok(out)
}

pub async fn run_show(assets: &AssetArgs, index: usize, chart: ChartType) -> anyhow::Result<()> {
    let fetcher = CliFetcher::from_args(assets);
    info!("Loading assets from {}", fetcher.describe());

    let catalog = load_catalog(&fetcher, &AssetPaths::default()).await?;
    print!("{}", describe(&catalog, index, chart)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stc_core::models::{PairMapping, TokenPairs};

    fn catalog() -> TokenCatalog {
        let mut pairs = PairMapping::new();
        pairs.insert(
            "MintA".into(),
            TokenPairs {
                pumpfun: Some("PoolF".into()),
                pumpswap: Some("PoolS".into()),
                raydium: None,
            },
        );
        TokenCatalog {
            tokens: vec!["MintA".into(), "MintB".into()],
            pairs,
            ..Default::default()
        }
    }

    #[test]
    fn iframe_view_prints_embed_url() {
        let text = describe(&catalog(), 0, ChartType::Dexscreener).unwrap();
        assert!(text.starts_with("token 1 of 2: MintA\n"));
        assert!(text.contains("sources: pumpfun, pumpswap\n"));
        assert!(text.contains("selected source: pumpswap\n"));
        assert!(text.contains("embed: https://dexscreener.com/solana/PoolS?embed=1&theme=dark&info=0\n"));
    }

    #[test]
    fn widget_view_prints_options() {
        let text = describe(&catalog(), 0, ChartType::Moralis).unwrap();
        assert!(text.contains("widget container: moralis-chart-0\n"));
        assert!(text.contains("\"pairAddress\":\"PoolS\""));
        assert!(text.contains("\"timeZone\":\"Etc/UTC\""));
    }

    #[test]
    fn index_wraps_and_missing_pairs_noted() {
        let text = describe(&catalog(), 3, ChartType::Moralis).unwrap();
        assert!(text.starts_with("token 2 of 2: MintB\n"));
        assert!(text.contains("sources: none\n"));
        assert!(text.contains("note: Select a chart source above"));
    }

    #[test]
    fn empty_catalog_is_error() {
        assert!(describe(&TokenCatalog::default(), 0, ChartType::Moralis).is_err());
    }
}
