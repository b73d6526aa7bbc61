//! DEX sources a token may have a liquidity pool on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A liquidity venue with a chartable pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DexSource {
    Pumpfun,
    Raydium,
    Pumpswap,
}

impl DexSource {
    /// Display order of the source buttons.
    pub const ALL: [DexSource; 3] = [DexSource::Pumpfun, DexSource::Raydium, DexSource::Pumpswap];

    /// Auto-selection order, used both on initial load and on navigation.
    pub const PREFERENCE: [DexSource; 3] =
        [DexSource::Raydium, DexSource::Pumpswap, DexSource::Pumpfun];

    /// Key used in `token_pair_mapping.json`.
    pub fn key(self) -> &'static str {
        match self {
            DexSource::Pumpfun => "pumpfun",
            DexSource::Raydium => "raydium",
            DexSource::Pumpswap => "pumpswap",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            DexSource::Pumpfun => "Pump.fun",
            DexSource::Raydium => "Raydium",
            DexSource::Pumpswap => "Pumpswap",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        DexSource::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for DexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for source in DexSource::ALL {
            assert_eq!(DexSource::from_key(source.key()), Some(source));
        }
        assert_eq!(DexSource::from_key("orca"), None);
    }

    #[test]
    fn serde_uses_mapping_keys() {
        let json = serde_json::to_string(&DexSource::Pumpswap).unwrap();
        assert_eq!(json, "\"pumpswap\"");
    }
}
