//! Fatal load errors.

use thiserror::Error;

/// Errors that stop the app from reaching the loaded state.
///
/// Only the token list and the pair mapping can produce these; statistics
/// failures are logged and replaced with empty defaults.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Token list fetch failed: {0}")]
    TokenListStatus(u16),

    #[error("Pair mapping fetch failed: {0}")]
    PairMappingStatus(u16),

    #[error("Token list data is not an array")]
    TokenListNotArray,

    #[error("Token list entry {index} is not a string")]
    TokenListEntry { index: usize },

    #[error("Pair mapping data is not an object")]
    PairMappingNotObject,

    #[error("{resource} request failed: {message}")]
    Request {
        resource: &'static str,
        message: String,
    },

    #[error("{resource} is not valid JSON: {source}")]
    Json {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Banner text shown in place of the loaded UI.
    pub fn banner(&self) -> String {
        format!("Failed to load data: {}", self)
    }
}
