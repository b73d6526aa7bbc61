//! Early buyer list.

use dioxus::prelude::*;
use stc_core::view::{BuyerRow, NO_BUYERS_TEXT};

#[component]
pub fn BuyerList(buyers: Vec<BuyerRow>) -> Element {
    let count = buyers.len();

    rsx! {
        div {
            class: "token-extra-data",
            style: "margin-top: 16px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Additional Info" }
            div {
                strong { "First {count} Buyers:" }
                if buyers.is_empty() {
                    p { "{NO_BUYERS_TEXT}" }
                } else {
                    ul {
                        class: "buyer-list",
                        style: "list-style: none; padding-left: 0; font-size: 13px;",
                        for buyer in buyers.iter() {
                            li {
                                key: "{buyer.key}",
                                "{buyer.rank}. "
                                span {
                                    class: "wallet-address",
                                    style: "font-family: monospace;",
                                    "{buyer.wallet}"
                                }
                                " ({buyer.sol_spent} SOL)"
                            }
                        }
                    }
                }
            }
        }
    }
}
