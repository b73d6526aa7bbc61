//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use stc_core::config::AssetPaths;
use stc_core::view::{build_page_view, LoadPhase, PageView, ScriptStatus};
use stc_core::{load_catalog, AssetFetcher, ChartType, DexSource, Selection};

/// Shared application state for the token chart viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loading, failed, or the loaded catalog
    pub phase: Signal<LoadPhase>,
    /// Current token / source / chart type
    pub selection: Signal<Selection>,
    /// Widget script load state
    pub script: Signal<ScriptStatus>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            phase: Signal::new(LoadPhase::Loading),
            selection: Signal::new(Selection::default()),
            script: Signal::new(ScriptStatus::Loading),
        }
    }

    /// Run the startup load and move to `Ready` or `Failed`.
    pub async fn load<F: AssetFetcher>(mut self, fetcher: F, paths: AssetPaths) {
        match load_catalog(&fetcher, &paths).await {
            Ok(catalog) => {
                info!("token data loaded: {} tokens", catalog.len());
                self.selection.set(Selection::initial(&catalog));
                self.phase.set(LoadPhase::Ready(catalog));
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.phase.set(LoadPhase::Failed(e.banner()));
            }
        }
    }

    pub fn page_view(&self) -> PageView {
        build_page_view(&self.phase.read(), &self.selection.read(), &self.script.read())
    }

    pub fn next_token(&mut self) {
        let phase = self.phase.read();
        if let Some(catalog) = phase.catalog() {
            self.selection.write().next(catalog);
        }
    }

    pub fn prev_token(&mut self) {
        let phase = self.phase.read();
        if let Some(catalog) = phase.catalog() {
            self.selection.write().prev(catalog);
        }
    }

    pub fn select_source(&mut self, source: DexSource) {
        let phase = self.phase.read();
        if let Some(catalog) = phase.catalog() {
            self.selection.write().select_source(catalog, source);
        }
    }

    pub fn select_chart(&mut self, chart: ChartType) {
        self.selection.write().select_chart(chart);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
