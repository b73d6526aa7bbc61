//! Typed wrappers around the third-party chart widget.
//!
//! The widget ships as an external script that registers a global factory
//! (`window.createMyWidget`). This module injects that script once, reports
//! its load outcome through a oneshot channel, and mounts / clears widgets in
//! container elements.

use anyhow::{anyhow, Context};
use dioxus_logger::tracing::{debug, warn};
use futures::channel::oneshot;
use stc_core::config::{WidgetOptions, WIDGET_FACTORY};
use stc_core::view::SCRIPT_LOAD_ERROR;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

/// Outcome of a script load: `Ok(())` on `onload`, the error banner text on `onerror`.
pub type ScriptOutcome = Result<(), String>;

/// Result of [`inject_script`].
pub enum ScriptLoad {
    /// A tag with the same id is already in the document; nothing was injected.
    AlreadyPresent,
    /// The tag was appended; the receiver resolves on `onload` / `onerror`.
    Pending(oneshot::Receiver<ScriptOutcome>),
}

/// Convert a thrown JS value into an `anyhow::Error`.
pub fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(msg) => anyhow!(msg),
        None => anyhow!("{:?}", value),
    }
}

fn document() -> anyhow::Result<Document> {
    web_sys::window()
        .context("no global window")?
        .document()
        .context("window has no document")
}

/// Append an async `<script>` tag unless one with `id` already exists.
pub fn inject_script(id: &str, src: &str) -> anyhow::Result<ScriptLoad> {
    let document = document()?;
    if document.get_element_by_id(id).is_some() {
        debug!("script {} already present", id);
        return Ok(ScriptLoad::AlreadyPresent);
    }

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a script"))?;
    script.set_id(id);
    script.set_src(src);
    script.set_type("text/javascript");
    script.set_async(true);

    let (tx, rx) = oneshot::channel::<ScriptOutcome>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        })
    };
    let on_error = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(Err(SCRIPT_LOAD_ERROR.to_string()));
        }
    });
    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    // The tag outlives this call; the handlers must too.
    on_load.forget();
    on_error.forget();

    document
        .body()
        .context("document has no body")?
        .append_child(&script)
        .map_err(js_error)?;
    Ok(ScriptLoad::Pending(rx))
}

/// Remove the script tag with `id`, if any.
pub fn remove_script(id: &str) {
    if let Ok(document) = document() {
        if let Some(el) = document.get_element_by_id(id) {
            el.remove();
        }
    }
}

/// Whether the widget script has registered its factory.
pub fn factory_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(WIDGET_FACTORY)).ok())
        .is_some_and(|f| f.is_function())
}

/// Mount a widget into `container_id` by calling the global factory.
pub fn mount_widget(container_id: &str, options: &WidgetOptions) -> anyhow::Result<()> {
    let window = web_sys::window().context("no global window")?;
    let factory = js_sys::Reflect::get(&window, &JsValue::from_str(WIDGET_FACTORY))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| anyhow!("{} function is not defined", WIDGET_FACTORY))?;
    let options = js_sys::JSON::parse(&options.to_json()?).map_err(js_error)?;
    factory
        .call2(&JsValue::NULL, &JsValue::from_str(container_id), &options)
        .map_err(js_error)?;
    Ok(())
}

/// Empty the container element, dropping whatever the widget rendered.
pub fn clear_container(container_id: &str) {
    match document() {
        Ok(document) => {
            if let Some(el) = document.get_element_by_id(container_id) {
                el.set_inner_html("");
            }
        }
        Err(e) => warn!("cannot clear {}: {:#}", container_id, e),
    }
}

/// The browser's resolved IANA time zone.
pub fn local_time_zone() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|tz| tz.as_string())
}
