//! Shared Dioxus components and chart widget bridge for the token chart viewer.
//!
//! This crate provides:
//! - `js_bridge`: widget script injection and widget factory calls via `web_sys` / `js_sys`
//! - `fetch`: an `AssetFetcher` backed by the browser's `fetch`
//! - `state`: reactive AppState with Dioxus Signals
//! - `hooks`: startup hooks for the asset load and the widget script
//! - `components`: RSX components rendering the page view model

pub mod components;
pub mod fetch;
pub mod hooks;
pub mod js_bridge;
pub mod state;
