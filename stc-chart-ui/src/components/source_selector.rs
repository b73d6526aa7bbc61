//! DEX source toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use stc_core::view::{SourceToggleView, NO_PAIR_TEXT};

/// Buttons for the sources the current token has a pool on.
#[component]
pub fn SourceSelector(sources: SourceToggleView) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "dex-navigation",
            style: "display: flex; gap: 8px; align-items: center; margin: 8px 0;",
            span { "Chart Source:" }
            for button in sources.buttons.iter() {
                button {
                    key: "{button.source}",
                    class: if button.active { "active" } else { "" },
                    onclick: {
                        let source = button.source;
                        let mut state = state;
                        move |_| state.select_source(source)
                    },
                    "{button.label}"
                }
            }
            if sources.no_pair {
                span { "{NO_PAIR_TEXT}" }
            }
        }
    }
}
