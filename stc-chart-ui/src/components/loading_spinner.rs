//! Loading indicator component.

use dioxus::prelude::*;
use stc_core::view::LOADING_TEXT;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{LOADING_TEXT}"
        }
    }
}
