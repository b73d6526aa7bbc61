//! Previous / next token controls.

use crate::state::AppState;
use dioxus::prelude::*;
use stc_core::view::NavView;

/// Token pager. Both buttons are disabled when there is at most one token.
#[component]
pub fn TokenNavigation(nav: NavView) -> Element {
    let mut state = use_context::<AppState>();
    let disabled = !nav.can_navigate;

    rsx! {
        div {
            class: "navigation token-navigation",
            style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; margin: 12px 0;",
            button {
                disabled,
                onclick: move |_| state.prev_token(),
                "< Previous Token"
            }
            span {
                "Token {nav.position} of {nav.total} "
                span {
                    class: "token-address",
                    style: "font-family: monospace; font-size: 12px; color: #666;",
                    "({nav.address})"
                }
            }
            button {
                disabled,
                onclick: move |_| state.next_token(),
                "Next Token >"
            }
        }
    }
}
