//! Chart provider toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use stc_core::view::{ChartToggleView, SCRIPT_FAILED_NOTE};

/// One button per chart type. The widget button stays disabled until its
/// script has loaded.
#[component]
pub fn ChartTypeSelector(toggle: ChartToggleView) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "chart-type-navigation",
            style: "display: flex; gap: 8px; align-items: center; margin: 8px 0;",
            span { "Chart Type:" }
            for button in toggle.buttons.iter() {
                button {
                    key: "{button.chart}",
                    class: if button.active { "active" } else { "" },
                    disabled: !button.enabled,
                    onclick: {
                        let chart = button.chart;
                        let mut state = state;
                        move |_| state.select_chart(chart)
                    },
                    "{button.label}"
                }
            }
            if toggle.script_failed_note {
                span {
                    style: "color: orange; margin-left: 1em;",
                    "{SCRIPT_FAILED_NOTE}"
                }
            }
        }
    }
}
