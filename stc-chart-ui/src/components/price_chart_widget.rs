//! Third-party price chart widget.

use crate::js_bridge;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use stc_core::config::WidgetOptions;
use stc_core::widget::WidgetSlot;
use std::cell::RefCell;
use std::rc::Rc;

/// Mounts the widget into a container div.
///
/// The widget is torn down and recreated whenever `pair_address`,
/// `container_id`, or `script_loaded` changes, and the container is emptied
/// when the component unmounts.
#[component]
pub fn PriceChartWidget(pair_address: String, container_id: String, script_loaded: bool) -> Element {
    let slot = use_hook(|| Rc::new(RefCell::new(WidgetSlot::default())));

    use_effect({
        let slot = Rc::clone(&slot);
        let container_id = container_id.clone();
        use_reactive!(|(pair_address, container_id, script_loaded)| {
            let plan = slot.borrow_mut().update(&pair_address, &container_id, script_loaded);
            for id in &plan.clear {
                js_bridge::clear_container(id);
            }
            let Some(mount) = plan.mount else {
                return;
            };

            info!(
                "Loading Moralis widget for pair {} into container {}",
                mount.pair_address, mount.container_id
            );
            let options = WidgetOptions::for_pair(&mount.pair_address, js_bridge::local_time_zone());
            if let Err(e) = js_bridge::mount_widget(&mount.container_id, &options) {
                error!("widget mount failed: {:#}", e);
            }
        })
    });

    use_drop({
        let slot = Rc::clone(&slot);
        move || {
            if let Some(id) = slot.borrow_mut().release() {
                js_bridge::clear_container(&id);
            }
        }
    });

    rsx! {
        div {
            style: "width: 100%; height: 100%;",
            div {
                id: "{container_id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
