//! Selection controller: current token, source, and chart type.

use crate::models::TokenCatalog;
use crate::source::DexSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which chart provider is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Iframe embed keyed by pool address.
    Dexscreener,
    /// Script-injected widget.
    #[default]
    Moralis,
}

impl ChartType {
    pub const ALL: [ChartType; 2] = [ChartType::Dexscreener, ChartType::Moralis];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Dexscreener => "Dexscreener",
            ChartType::Moralis => "Moralis",
        }
    }

    pub fn needs_script(self) -> bool {
        matches!(self, ChartType::Moralis)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartType::Dexscreener => "dexscreener",
            ChartType::Moralis => "moralis",
        })
    }
}

impl std::str::FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dexscreener" | "iframe" => Ok(ChartType::Dexscreener),
            "moralis" | "widget" => Ok(ChartType::Moralis),
            other => Err(format!("unknown chart type: {}", other)),
        }
    }
}

/// Current UI selection.
///
/// `source`, when set, always names a source the current token has a pool on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub index: usize,
    pub source: Option<DexSource>,
    pub chart: ChartType,
}

impl Selection {
    /// Selection right after loading: first token, its preferred source.
    pub fn initial(catalog: &TokenCatalog) -> Self {
        let mut selection = Self::default();
        selection.reset_source(catalog);
        selection
    }

    /// Move to the next token, wrapping to the first.
    pub fn next(&mut self, catalog: &TokenCatalog) {
        let len = catalog.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.reset_source(catalog);
    }

    /// Move to the previous token, wrapping to the last.
    pub fn prev(&mut self, catalog: &TokenCatalog) {
        let len = catalog.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
        self.reset_source(catalog);
    }

    /// Jump to `index` (wrapped into range).
    pub fn go_to(&mut self, catalog: &TokenCatalog, index: usize) {
        let len = catalog.len();
        if len == 0 {
            return;
        }
        self.index = index % len;
        self.reset_source(catalog);
    }

    /// Select a source explicitly. Ignored unless the current token has it.
    pub fn select_source(&mut self, catalog: &TokenCatalog, source: DexSource) -> bool {
        let available = self
            .current_token(catalog)
            .and_then(|t| catalog.pairs_for(t))
            .is_some_and(|p| p.contains(source));
        if available {
            self.source = Some(source);
        }
        available
    }

    pub fn select_chart(&mut self, chart: ChartType) {
        self.chart = chart;
    }

    pub fn current_token<'a>(&self, catalog: &'a TokenCatalog) -> Option<&'a str> {
        catalog.token(self.index)
    }

    /// Pool address of the selected source for the current token.
    pub fn pair_address<'a>(&self, catalog: &'a TokenCatalog) -> Option<&'a str> {
        let source = self.source?;
        self.current_token(catalog)
            .and_then(|t| catalog.pairs_for(t))
            .and_then(|p| p.get(source))
    }

    fn reset_source(&mut self, catalog: &TokenCatalog) {
        self.source = self
            .current_token(catalog)
            .and_then(|t| catalog.pairs_for(t))
            .and_then(|p| p.preferred());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PairMapping, TokenPairs};

    fn pairs(pumpfun: bool, raydium: bool, pumpswap: bool) -> TokenPairs {
        TokenPairs {
            pumpfun: pumpfun.then(|| "PoolF".to_string()),
            raydium: raydium.then(|| "PoolR".to_string()),
            pumpswap: pumpswap.then(|| "PoolS".to_string()),
        }
    }

    fn catalog(entries: Vec<(&str, Option<TokenPairs>)>) -> TokenCatalog {
        let mut mapping = PairMapping::new();
        let mut tokens = Vec::new();
        for (token, p) in entries {
            tokens.push(token.to_string());
            if let Some(p) = p {
                mapping.insert(token.to_string(), p);
            }
        }
        TokenCatalog {
            tokens,
            pairs: mapping,
            ..Default::default()
        }
    }

    #[test]
    fn next_wraps_to_first() {
        let c = catalog(vec![("A", None), ("B", None), ("C", None)]);
        let mut s = Selection::initial(&c);
        s.index = 2;
        s.next(&c);
        assert_eq!(s.index, 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let c = catalog(vec![("A", None), ("B", None), ("C", None)]);
        let mut s = Selection::initial(&c);
        assert_eq!(s.index, 0);
        s.prev(&c);
        assert_eq!(s.index, 2);
        s.prev(&c);
        assert_eq!(s.index, 1);
    }

    #[test]
    fn single_token_stays_put() {
        let c = catalog(vec![("A", None)]);
        let mut s = Selection::initial(&c);
        s.next(&c);
        assert_eq!(s.index, 0);
        s.prev(&c);
        assert_eq!(s.index, 0);
    }

    #[test]
    fn empty_catalog_is_noop() {
        let c = TokenCatalog::default();
        let mut s = Selection::initial(&c);
        s.next(&c);
        s.prev(&c);
        s.go_to(&c, 5);
        assert_eq!(s, Selection::default());
    }

    #[test]
    fn preference_over_every_subset() {
        let cases = [
            ((false, false, false), None),
            ((true, false, false), Some(DexSource::Pumpfun)),
            ((false, true, false), Some(DexSource::Raydium)),
            ((false, false, true), Some(DexSource::Pumpswap)),
            ((true, true, false), Some(DexSource::Raydium)),
            ((true, false, true), Some(DexSource::Pumpswap)),
            ((false, true, true), Some(DexSource::Raydium)),
            ((true, true, true), Some(DexSource::Raydium)),
        ];
        for ((f, r, s), expected) in cases {
            let c = catalog(vec![("Start", None), ("Target", Some(pairs(f, r, s)))]);
            let mut sel = Selection::initial(&c);
            sel.next(&c);
            assert_eq!(sel.source, expected, "pumpfun={} raydium={} pumpswap={}", f, r, s);
        }
    }

    #[test]
    fn initial_load_uses_same_preference() {
        let c = catalog(vec![("A", Some(pairs(true, true, false)))]);
        assert_eq!(Selection::initial(&c).source, Some(DexSource::Raydium));
    }

    #[test]
    fn navigation_resets_source_even_if_user_picked_one() {
        let c = catalog(vec![
            ("A", Some(pairs(true, true, true))),
            ("B", Some(pairs(true, false, false))),
        ]);
        let mut s = Selection::initial(&c);
        assert!(s.select_source(&c, DexSource::Pumpswap));
        s.next(&c);
        assert_eq!(s.source, Some(DexSource::Pumpfun));
        s.next(&c);
        assert_eq!(s.source, Some(DexSource::Raydium));
    }

    #[test]
    fn token_without_mapping_has_no_source() {
        let c = catalog(vec![("A", Some(pairs(true, false, false))), ("B", None)]);
        let mut s = Selection::initial(&c);
        s.next(&c);
        assert_eq!(s.source, None);
        assert_eq!(s.pair_address(&c), None);
    }

    #[test]
    fn select_source_rejects_missing_pool() {
        let c = catalog(vec![("A", Some(pairs(true, false, false)))]);
        let mut s = Selection::initial(&c);
        assert!(!s.select_source(&c, DexSource::Raydium));
        assert_eq!(s.source, Some(DexSource::Pumpfun));
        assert_eq!(s.pair_address(&c), Some("PoolF"));
    }

    #[test]
    fn chart_type_is_kept_across_navigation() {
        let c = catalog(vec![("A", None), ("B", None)]);
        let mut s = Selection::initial(&c);
        assert_eq!(s.chart, ChartType::Moralis);
        s.select_chart(ChartType::Dexscreener);
        s.next(&c);
        assert_eq!(s.chart, ChartType::Dexscreener);
    }

    #[test]
    fn chart_type_parses_aliases() {
        assert_eq!("widget".parse::<ChartType>(), Ok(ChartType::Moralis));
        assert_eq!("Dexscreener".parse::<ChartType>(), Ok(ChartType::Dexscreener));
        assert!("tradingview".parse::<ChartType>().is_err());
    }
}
