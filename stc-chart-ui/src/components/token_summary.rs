//! External link and all-time-high statistics for the current token.

use dioxus::prelude::*;
use stc_core::view::InfoView;

#[component]
pub fn TokenSummary(info: InfoView) -> Element {
    rsx! {
        div {
            class: "top-info-container",
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; margin: 8px 0;",
            if let Some(link) = info.axiom_link.as_ref() {
                div {
                    class: "axiom-link-item",
                    a {
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Open on Axiom"
                    }
                }
            }
            p {
                class: "ath-info-item",
                style: "margin: 0;",
                strong { "ATH (USD): " }
                "{info.ath_usd}"
            }
            p {
                class: "ath-info-item",
                style: "margin: 0;",
                strong { "Est. ATH MCAP (USD): " }
                "{info.est_ath_market_cap_usd}"
            }
        }
    }
}
