//! Asset locations, widget script constants, and chart embed settings.

use serde::Serialize;

/// Default path of the token address list.
pub const TOKEN_LIST_PATH: &str = "target_tokens.json";
/// Default path of the token -> source -> pool address mapping.
pub const PAIR_MAPPING_PATH: &str = "token_pair_mapping.json";
/// Default path of the precomputed OHLCV/buyer statistics.
pub const STATS_PATH: &str = "ohlcv_batch_80_87_sol_switch.json";

/// DOM id of the injected widget script tag.
pub const WIDGET_SCRIPT_ID: &str = "moralis-chart-widget";
/// Widget script URL.
pub const WIDGET_SCRIPT_URL: &str = "https://moralis.com/static/embed/chart.js";
/// Global function the widget script registers on `window`.
pub const WIDGET_FACTORY: &str = "createMyWidget";
/// Prefix of the per-token widget container id.
pub const WIDGET_CONTAINER_PREFIX: &str = "moralis-chart-";

/// Fallback when the browser does not report a time zone.
pub const DEFAULT_TIME_ZONE: &str = "Etc/UTC";

/// Maximum number of buyer rows kept per token.
pub const MAX_BUYERS: usize = 50;

const EMBED_URL_BASE: &str = "https://dexscreener.com/solana/";
const EMBED_URL_QUERY: &str = "?embed=1&theme=dark&info=0";

/// Paths of the three static assets, relative to the page (or to the
/// directory / base URL the CLI is pointed at).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub token_list: String,
    pub pair_mapping: String,
    pub stats: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            token_list: TOKEN_LIST_PATH.to_string(),
            pair_mapping: PAIR_MAPPING_PATH.to_string(),
            stats: STATS_PATH.to_string(),
        }
    }
}

/// Iframe `src` for a pool address.
pub fn embed_url(pair_address: &str) -> String {
    format!("{}{}{}", EMBED_URL_BASE, pair_address, EMBED_URL_QUERY)
}

/// Container id for the widget of the token at `index`.
pub fn widget_container_id(index: usize) -> String {
    format!("{}{}", WIDGET_CONTAINER_PREFIX, index)
}

/// Options object passed to the widget factory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub auto_size: bool,
    pub chain_id: &'static str,
    pub pair_address: String,
    pub show_holders_chart: bool,
    pub default_interval: &'static str,
    pub time_zone: String,
    pub theme: &'static str,
    pub locale: &'static str,
    pub background_color: &'static str,
    pub grid_color: &'static str,
    pub text_color: &'static str,
    pub candle_up_color: &'static str,
    pub candle_down_color: &'static str,
    pub hide_left_toolbar: bool,
    pub hide_top_toolbar: bool,
    pub hide_bottom_toolbar: bool,
}

impl WidgetOptions {
    /// Fixed widget styling for a pool. An empty `time_zone` falls back to
    /// [`DEFAULT_TIME_ZONE`].
    pub fn for_pair(pair_address: &str, time_zone: Option<String>) -> Self {
        let time_zone = time_zone
            .filter(|tz| !tz.is_empty())
            .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());
        Self {
            auto_size: true,
            chain_id: "solana",
            pair_address: pair_address.to_string(),
            show_holders_chart: true,
            default_interval: "30",
            time_zone,
            theme: "moralis",
            locale: "en",
            background_color: "#071321",
            grid_color: "#0d2035",
            text_color: "#68738D",
            candle_up_color: "#4CE666",
            candle_down_color: "#E64C4C",
            hide_left_toolbar: false,
            hide_top_toolbar: false,
            hide_bottom_toolbar: false,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
