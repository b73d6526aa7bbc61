//! Core types for the Solana token chart viewer.
//!
//! This crate provides:
//! - `models`: token list, pair mapping, and per-token statistics parsed from the static JSON assets
//! - `source`: the three DEX sources and their preference order
//! - `loader`: the startup loader, generic over an `AssetFetcher`
//! - `selection`: token index / source / chart type selection controller
//! - `view`: the page view model rendered by the Dioxus components
//! - `widget`: teardown/remount bookkeeping for the chart widget container
//! - `config`: asset paths, widget script constants, and embed URL templates

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod selection;
pub mod source;
pub mod view;
pub mod widget;

pub use error::LoadError;
pub use loader::{load_catalog, AssetFetcher, FetchResponse};
pub use models::{Buyer, PairMapping, TokenCatalog, TokenPairs, TokenStats};
pub use selection::{ChartType, Selection};
pub use source::DexSource;
