//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Banner prefix, e.g. "Data Loading Error"
    pub title: String,
    pub message: String,
    /// Non-fatal errors render in the warning palette.
    #[props(default = false)]
    pub warning: bool,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let style = if props.warning {
        "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #E65100; border-radius: 4px; border: 1px solid #FFB74D;"
    } else {
        "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
    };

    rsx! {
        div {
            style: "{style}",
            strong { "{props.title}: " }
            "{props.message}"
        }
    }
}
