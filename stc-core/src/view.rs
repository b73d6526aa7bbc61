//! Page view model.
//!
//! `build_page_view` maps load phase, selection, and widget script status to
//! a plain description of the page. The Dioxus components only render it.

use crate::config::{embed_url, widget_container_id};
use crate::models::{TokenCatalog, TokenPairs, TokenStats};
use crate::selection::{ChartType, Selection};
use crate::source::DexSource;

pub const TITLE: &str = "Solana Token Charts";
pub const LOADING_TEXT: &str = "Loading token data...";
pub const EMPTY_LIST_TEXT: &str = "No token addresses found in the list.";
pub const NO_PAIR_TEXT: &str = "No Pump.fun/Raydium/Pumpswap pair found";
pub const SELECT_SOURCE_TEXT: &str = "Select a chart source above (Pump.fun, Raydium, or Pumpswap).";
pub const SCRIPT_LOADING_TEXT: &str = "Loading Moralis chart library...";
pub const SCRIPT_FAILED_TEXT: &str = "Could not load Moralis chart library.";
pub const SCRIPT_FAILED_NOTE: &str = "(Moralis Script Failed to Load)";
pub const SCRIPT_LOAD_ERROR: &str = "Failed to load the Moralis chart widget script.";
pub const NO_BUYERS_TEXT: &str = "No buyer data available.";
pub const NOT_AVAILABLE: &str = "N/A";

/// Progress of the startup load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Failed(String),
    Ready(TokenCatalog),
}

impl LoadPhase {
    pub fn catalog(&self) -> Option<&TokenCatalog> {
        match self {
            LoadPhase::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// State of the injected widget script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScriptStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl ScriptStatus {
    /// Status when the script tag was already in the document. The tag is
    /// not injected again; it counts as loaded only once the factory exists.
    pub fn for_present_tag(factory_available: bool) -> Option<Self> {
        factory_available.then_some(ScriptStatus::Loaded)
    }

    /// Status after the injected tag fired `load` or `error`.
    pub fn from_outcome(outcome: Result<(), String>) -> Self {
        match outcome {
            Ok(()) => ScriptStatus::Loaded,
            Err(msg) => ScriptStatus::Failed(msg),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ScriptStatus::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ScriptStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: &'static str,
    /// Non-fatal banner, shown whatever the load phase.
    pub script_error: Option<String>,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Loading,
    Failed(String),
    Empty,
    Token(Box<TokenView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenView {
    pub nav: NavView,
    pub info: InfoView,
    pub chart_toggle: ChartToggleView,
    pub sources: SourceToggleView,
    pub embed: EmbedView,
    pub buyers: Vec<BuyerRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    /// 1-based position.
    pub position: usize,
    pub total: usize,
    pub address: String,
    /// False when there is nothing to page to.
    pub can_navigate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoView {
    pub axiom_link: Option<String>,
    pub ath_usd: String,
    pub est_ath_market_cap_usd: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartButton {
    pub chart: ChartType,
    pub label: String,
    pub active: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartToggleView {
    pub buttons: Vec<ChartButton>,
    /// Widget selected but its script failed.
    pub script_failed_note: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceButton {
    pub source: DexSource,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceToggleView {
    pub buttons: Vec<SourceButton>,
    pub no_pair: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: &'static str,
    pub tone: Tone,
}

impl Notice {
    fn plain(text: &'static str) -> Self {
        Self {
            text,
            tone: Tone::Plain,
        }
    }

    fn warning(text: &'static str) -> Self {
        Self {
            text,
            tone: Tone::Warning,
        }
    }
}

/// Content of the chart region.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedView {
    Iframe { title: String, src: String },
    Widget { pair_address: String, container_id: String },
    Notices(Vec<Notice>),
}

impl EmbedView {
    pub fn is_chart(&self) -> bool {
        !matches!(self, EmbedView::Notices(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuyerRow {
    pub key: String,
    pub rank: u32,
    pub wallet: String,
    pub sol_spent: String,
}

pub fn build_page_view(phase: &LoadPhase, selection: &Selection, script: &ScriptStatus) -> PageView {
    let body = match phase {
        LoadPhase::Loading => PageBody::Loading,
        LoadPhase::Failed(msg) => PageBody::Failed(msg.clone()),
        LoadPhase::Ready(catalog) => match build_token_view(catalog, selection, script) {
            Some(view) => PageBody::Token(Box::new(view)),
            None => PageBody::Empty,
        },
    };
    PageView {
        title: TITLE,
        script_error: script.error().map(str::to_string),
        body,
    }
}

/// View of the selected token, or `None` for an empty catalog.
pub fn build_token_view(
    catalog: &TokenCatalog,
    selection: &Selection,
    script: &ScriptStatus,
) -> Option<TokenView> {
    let address = selection.current_token(catalog)?;
    let empty_pairs = TokenPairs::default();
    let pairs = catalog.pairs_for(address).unwrap_or(&empty_pairs);
    let empty_stats = TokenStats::default();
    let stats = catalog.stats_for(address).unwrap_or(&empty_stats);
    let pair_address = selection.pair_address(catalog);

    Some(TokenView {
        nav: NavView {
            position: selection.index + 1,
            total: catalog.len(),
            address: address.to_string(),
            can_navigate: catalog.len() > 1,
        },
        info: info_view(stats),
        chart_toggle: chart_toggle_view(selection.chart, script),
        sources: source_toggle_view(pairs, selection.source),
        embed: embed_view(selection, pair_address, script),
        buyers: buyer_rows(stats),
    })
}

fn info_view(stats: &TokenStats) -> InfoView {
    InfoView {
        axiom_link: stats.axiom_link.clone().filter(|l| !l.is_empty()),
        ath_usd: stats
            .calculated_ath_usd
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string),
        est_ath_market_cap_usd: stats
            .estimated_ath_market_cap_usd
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string),
    }
}

fn chart_toggle_view(selected: ChartType, script: &ScriptStatus) -> ChartToggleView {
    let buttons = ChartType::ALL
        .into_iter()
        .map(|chart| {
            let enabled = !chart.needs_script() || script.is_loaded();
            let label = if enabled {
                chart.label().to_string()
            } else {
                format!("{} (Loading...)", chart.label())
            };
            ChartButton {
                chart,
                label,
                active: chart == selected,
                enabled,
            }
        })
        .collect();
    ChartToggleView {
        buttons,
        script_failed_note: selected.needs_script() && script.error().is_some(),
    }
}

fn source_toggle_view(pairs: &TokenPairs, selected: Option<DexSource>) -> SourceToggleView {
    let buttons: Vec<SourceButton> = pairs
        .available()
        .into_iter()
        .map(|source| SourceButton {
            source,
            label: source.label(),
            active: selected == Some(source),
        })
        .collect();
    SourceToggleView {
        no_pair: buttons.is_empty(),
        buttons,
    }
}

fn embed_view(selection: &Selection, pair_address: Option<&str>, script: &ScriptStatus) -> EmbedView {
    match (selection.chart, pair_address) {
        (ChartType::Dexscreener, Some(pair)) => EmbedView::Iframe {
            title: format!("Dexscreener Chart - {}", pair),
            src: embed_url(pair),
        },
        (ChartType::Dexscreener, None) => EmbedView::Notices(vec![Notice::plain(SELECT_SOURCE_TEXT)]),
        (ChartType::Moralis, pair) => match (script, pair) {
            (ScriptStatus::Loaded, Some(pair)) => EmbedView::Widget {
                pair_address: pair.to_string(),
                container_id: widget_container_id(selection.index),
            },
            (ScriptStatus::Loaded, None) => EmbedView::Notices(vec![Notice::plain(SELECT_SOURCE_TEXT)]),
            (ScriptStatus::Loading, _) => EmbedView::Notices(vec![Notice::plain(SCRIPT_LOADING_TEXT)]),
            (ScriptStatus::Failed(_), _) => EmbedView::Notices(vec![
                Notice::warning(SCRIPT_FAILED_TEXT),
                Notice::plain(SELECT_SOURCE_TEXT),
            ]),
        },
    }
}

fn buyer_rows(stats: &TokenStats) -> Vec<BuyerRow> {
    stats
        .first_50_buyers
        .iter()
        .map(|b| BuyerRow {
            key: format!("{}-{}", b.rank, b.wallet),
            rank: b.rank,
            wallet: b.wallet.clone(),
            sol_spent: b
                .sol_spent
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string),
        })
        .collect()
}
