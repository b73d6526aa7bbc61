//! Chart region: iframe embed, widget, or notices.

use super::PriceChartWidget;
use dioxus::prelude::*;
use stc_core::view::{EmbedView, Tone};

#[component]
pub fn ChartEmbed(embed: EmbedView) -> Element {
    let content = match embed {
        EmbedView::Iframe { title, src } => rsx! {
            iframe {
                title: "{title}",
                src: "{src}",
                width: "100%",
                height: "100%",
                style: "border: none;",
                "allowfullscreen": "true",
            }
        },
        EmbedView::Widget {
            pair_address,
            container_id,
        } => rsx! {
            PriceChartWidget {
                pair_address,
                container_id,
                script_loaded: true,
            }
        },
        EmbedView::Notices(notices) => rsx! {
            for notice in notices.iter() {
                p {
                    style: if notice.tone == Tone::Warning { "color: orange;" } else { "" },
                    "{notice.text}"
                }
            }
        },
    };

    rsx! {
        div {
            class: "chart-container-single dexscreener-embed",
            style: "height: 600px; width: 100%; position: relative; margin: 12px 0;",
            {content}
        }
    }
}
