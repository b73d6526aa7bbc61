//! Solana Token Charts
//!
//! Pages through a curated list of Solana tokens and shows a price chart for
//! the selected liquidity pool, either as a Dexscreener iframe or as a
//! Moralis widget mounted through its injected script.
//!
//! Data flow:
//! 1. On mount: fetch `target_tokens.json`, `token_pair_mapping.json`, and the
//!    OHLCV/buyer statistics concurrently (served from `public/`).
//! 2. On mount: inject the Moralis widget script and track its load state.
//! 3. Every render: build the page view from the load phase, selection, and
//!    script state, and hand its pieces to the components.

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, Level};
use stc_chart_ui::components::{
    BuyerList, ChartEmbed, ChartTypeSelector, ErrorDisplay, LoadingSpinner, SourceSelector,
    TokenNavigation, TokenSummary,
};
use stc_chart_ui::hooks::{use_asset_loader, use_widget_script};
use stc_chart_ui::state::AppState;
use stc_core::view::{PageBody, EMPTY_LIST_TEXT};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    use_asset_loader(state);
    use_widget_script(state);

    let view = state.page_view();
    log_selection(&state);

    let body = match view.body {
        PageBody::Loading => rsx! { LoadingSpinner {} },
        PageBody::Failed(msg) => rsx! {
            ErrorDisplay { title: "Data Loading Error".to_string(), message: msg }
        },
        PageBody::Empty => rsx! { p { "{EMPTY_LIST_TEXT}" } },
        PageBody::Token(token) => {
            let token = *token;
            rsx! {
                TokenNavigation { nav: token.nav }
                TokenSummary { info: token.info }
                ChartTypeSelector { toggle: token.chart_toggle }
                SourceSelector { sources: token.sources }
                ChartEmbed { embed: token.embed }
                BuyerList { buyers: token.buyers }
            }
        }
    };

    rsx! {
        div {
            class: "App",
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { "{view.title}" }

            if let Some(err) = view.script_error.as_ref() {
                ErrorDisplay {
                    title: "Chart Script Error".to_string(),
                    message: err.clone(),
                    warning: true,
                }
            }

            {body}
        }
    }
}

fn log_selection(state: &AppState) {
    let phase = state.phase.read();
    let Some(catalog) = phase.catalog() else {
        return;
    };
    let selection = state.selection.read();
    let token = selection.current_token(catalog);
    debug!(
        "Selected token: {:?}, pairs: {:?}, stats: {:?}, source: {:?}, chart: {}",
        token,
        token.and_then(|t| catalog.pairs_for(t)),
        token.and_then(|t| catalog.stats_for(t)),
        selection.source,
        selection.chart
    );
}
