//! Startup hooks: asset load and widget script injection.

use crate::fetch::BrowserFetcher;
use crate::js_bridge::{self, ScriptLoad};
use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, warn};
use stc_core::config::{AssetPaths, WIDGET_SCRIPT_ID, WIDGET_SCRIPT_URL};
use stc_core::view::{ScriptStatus, SCRIPT_LOAD_ERROR};

/// Fetch the three assets once on mount.
pub fn use_asset_loader(state: AppState) {
    use_hook(move || {
        spawn(async move {
            state.load(BrowserFetcher, AssetPaths::default()).await;
        });
    });
}

/// Inject the widget script once and track its load state in `state.script`.
///
/// The tag is removed again when the owning component unmounts.
pub fn use_widget_script(state: AppState) {
    let mut status = state.script;
    use_hook(move || {
        spawn(async move {
            match js_bridge::inject_script(WIDGET_SCRIPT_ID, WIDGET_SCRIPT_URL) {
                Ok(ScriptLoad::AlreadyPresent) => {
                    if let Some(next) = ScriptStatus::for_present_tag(js_bridge::factory_available()) {
                        status.set(next);
                    }
                }
                Ok(ScriptLoad::Pending(rx)) => match rx.await {
                    Ok(outcome) => {
                        let next = ScriptStatus::from_outcome(outcome);
                        match next.error() {
                            Some(msg) => error!("{}", msg),
                            None => info!("Moralis chart script loaded successfully."),
                        }
                        status.set(next);
                    }
                    Err(_) => warn!("widget script handlers dropped before firing"),
                },
                Err(e) => {
                    error!("widget script injection failed: {:#}", e);
                    status.set(ScriptStatus::Failed(SCRIPT_LOAD_ERROR.to_string()));
                }
            }
        });
    });
    use_drop(|| js_bridge::remove_script(WIDGET_SCRIPT_ID));
}
