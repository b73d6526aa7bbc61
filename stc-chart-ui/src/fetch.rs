//! `AssetFetcher` over the browser's `fetch`.

use crate::js_bridge::js_error;
use anyhow::{anyhow, Context};
use stc_core::{AssetFetcher, FetchResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches assets relative to the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher;

impl AssetFetcher for BrowserFetcher {
    async fn fetch(&self, path: &str) -> anyhow::Result<FetchResponse> {
        let window = web_sys::window().context("no global window")?;
        let response: Response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| anyhow!("fetch of {} did not return a Response", path))?;

        let status = response.status();
        let text = response.text().map_err(js_error)?;
        let body = JsFuture::from(text)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        Ok(FetchResponse { status, body })
    }
}
