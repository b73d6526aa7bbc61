//! Data models for the three static JSON assets.
//!
//! - `target_tokens.json`: `["<token address>", ...]`
//! - `token_pair_mapping.json`: `{"<token>": {"pumpfun": "<pool>", "raydium": "<pool>", "pumpswap": "<pool>"}}`
//! - `ohlcv_*.json`: `{"<token>": {"axiomLink": ..., "calculatedAthUsd": ..., "estimatedAthMarketCapUsd": ..., "first50Buyers": [...]}}`

use crate::config::MAX_BUYERS;
use crate::error::LoadError;
use crate::source::DexSource;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Pool addresses of one token, per source. Absent sources are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPairs {
    pub pumpfun: Option<String>,
    pub raydium: Option<String>,
    pub pumpswap: Option<String>,
}

impl TokenPairs {
    pub fn get(&self, source: DexSource) -> Option<&str> {
        match source {
            DexSource::Pumpfun => self.pumpfun.as_deref(),
            DexSource::Raydium => self.raydium.as_deref(),
            DexSource::Pumpswap => self.pumpswap.as_deref(),
        }
    }

    pub fn contains(&self, source: DexSource) -> bool {
        self.get(source).is_some()
    }

    pub fn is_empty(&self) -> bool {
        DexSource::ALL.iter().all(|s| !self.contains(*s))
    }

    /// Sources present for this token, in button order.
    pub fn available(&self) -> Vec<DexSource> {
        DexSource::ALL
            .into_iter()
            .filter(|s| self.contains(*s))
            .collect()
    }

    /// First source present in [`DexSource::PREFERENCE`] order.
    pub fn preferred(&self) -> Option<DexSource> {
        DexSource::PREFERENCE
            .into_iter()
            .find(|s| self.contains(*s))
    }

    /// Build from one mapping entry. Non-string and empty values count as absent.
    fn from_json(object: &serde_json::Map<String, Value>) -> Self {
        let pick = |source: DexSource| {
            object
                .get(source.key())
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            pumpfun: pick(DexSource::Pumpfun),
            raydium: pick(DexSource::Raydium),
            pumpswap: pick(DexSource::Pumpswap),
        }
    }
}

/// Token address -> pool addresses.
pub type PairMapping = HashMap<String, TokenPairs>;

/// A statistic that may be published as a number or as preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    /// Numbers and strings decode; anything else is treated as absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(StatValue::Number),
            Value::String(s) => Some(StatValue::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => f.write_str(&format_number(*n)),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Format a number the way a browser prints it: plain decimal, switching to
/// exponent notation below 1e-6 and from 1e21 (`1.2e-7`, `1e+21`).
pub fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if n == 0.0 || !n.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// One early buyer of a token. `sol_spent` is `None` when the amount is
/// missing or not a number/string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub rank: u32,
    pub wallet: String,
    #[serde(default)]
    pub sol_spent: Option<StatValue>,
}

impl Buyer {
    /// Decode one buyer row. A row needs an integer rank and a string wallet.
    pub fn from_json(value: &Value) -> Option<Self> {
        let rank = value.get("rank")?.as_u64()?;
        Some(Self {
            rank: u32::try_from(rank).ok()?,
            wallet: value.get("wallet")?.as_str()?.to_string(),
            sol_spent: value.get("sol_spent").and_then(StatValue::from_json),
        })
    }
}

/// Precomputed statistics for one token. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    #[serde(default)]
    pub axiom_link: Option<String>,
    #[serde(default)]
    pub calculated_ath_usd: Option<StatValue>,
    #[serde(default)]
    pub estimated_ath_market_cap_usd: Option<StatValue>,
    #[serde(default, rename = "first50Buyers")]
    pub first_50_buyers: Vec<Buyer>,
}

impl TokenStats {
    /// Decode one statistics record field by field. A field of the wrong
    /// type, or a malformed buyer row, is dropped on its own.
    pub fn from_json(token: &str, object: &Map<String, Value>) -> Self {
        let axiom_link = object
            .get("axiomLink")
            .and_then(Value::as_str)
            .map(str::to_string);
        let stat = |key: &str| {
            let value = object.get(key)?;
            let decoded = StatValue::from_json(value);
            if decoded.is_none() && !value.is_null() {
                warn!("ignoring {} for {}: {}", key, token, json_kind(value));
            }
            decoded
        };

        let mut first_50_buyers = Vec::new();
        match object.get("first50Buyers") {
            None | Some(Value::Null) => {}
            Some(Value::Array(rows)) => {
                for (index, row) in rows.iter().enumerate() {
                    if first_50_buyers.len() == MAX_BUYERS {
                        break;
                    }
                    match Buyer::from_json(row) {
                        Some(buyer) => first_50_buyers.push(buyer),
                        None => warn!("skipping buyer {} of {}: malformed row", index, token),
                    }
                }
            }
            Some(other) => warn!("ignoring first50Buyers for {}: {}", token, json_kind(other)),
        }

        Self {
            axiom_link,
            calculated_ath_usd: stat("calculatedAthUsd"),
            estimated_ath_market_cap_usd: stat("estimatedAthMarketCapUsd"),
            first_50_buyers,
        }
    }
}

/// Token address -> statistics.
pub type StatsMap = HashMap<String, TokenStats>;

/// Everything the loader produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCatalog {
    pub tokens: Vec<String>,
    pub pairs: PairMapping,
    pub stats: StatsMap,
    /// False when the statistics asset could not be used.
    pub stats_available: bool,
}

impl TokenCatalog {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Pairs of a token, or `None` when the mapping has no entry for it.
    pub fn pairs_for(&self, token: &str) -> Option<&TokenPairs> {
        self.pairs.get(token)
    }

    pub fn stats_for(&self, token: &str) -> Option<&TokenStats> {
        self.stats.get(token)
    }

    /// Tokens whose mapping entry is missing or has no usable pool.
    pub fn tokens_without_pairs(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| self.pairs_for(t).map_or(true, TokenPairs::is_empty))
            .map(String::as_str)
            .collect()
    }

    pub fn tokens_without_stats(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| !self.stats.contains_key(t.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Parse the token list. The top level must be an array of strings.
pub fn parse_token_list(body: &str) -> Result<Vec<String>, LoadError> {
    let value: Value = serde_json::from_str(body).map_err(|source| LoadError::Json {
        resource: "Token list",
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(LoadError::TokenListNotArray);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s),
            _ => Err(LoadError::TokenListEntry { index }),
        })
        .collect()
}

/// Parse the pair mapping. The top level must be an object; entries that are
/// not objects are treated as "no pairs".
pub fn parse_pair_mapping(body: &str) -> Result<PairMapping, LoadError> {
    let value: Value = serde_json::from_str(body).map_err(|source| LoadError::Json {
        resource: "Pair mapping",
        source,
    })?;
    let Value::Object(entries) = value else {
        return Err(LoadError::PairMappingNotObject);
    };

    let mut mapping = PairMapping::with_capacity(entries.len());
    for (token, entry) in entries {
        match entry {
            Value::Object(object) => {
                mapping.insert(token, TokenPairs::from_json(&object));
            }
            other => {
                warn!(
                    "pair mapping entry for {} is not an object ({}), treating as no pairs",
                    token,
                    json_kind(&other)
                );
                mapping.insert(token, TokenPairs::default());
            }
        }
    }
    Ok(mapping)
}

/// Parse the statistics asset. Records that are not objects are skipped;
/// inside a record, bad fields and buyer rows are dropped individually and
/// buyer lists are capped at [`MAX_BUYERS`].
pub fn parse_stats(body: &str) -> anyhow::Result<StatsMap> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(entries) = value else {
        anyhow::bail!("statistics data is not an object ({})", json_kind(&value));
    };

    let mut stats = StatsMap::with_capacity(entries.len());
    for (token, entry) in entries {
        match entry {
            Value::Object(object) => {
                let record = TokenStats::from_json(&token, &object);
                stats.insert(token, record);
            }
            other => warn!("skipping statistics for {}: {}", token, json_kind(&other)),
        }
    }
    Ok(stats)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_list_accepts_string_array() {
        let tokens = parse_token_list(r#"["MintA", "MintB"]"#).unwrap();
        assert_eq!(tokens, vec!["MintA".to_string(), "MintB".to_string()]);
    }

    #[test]
    fn token_list_rejects_object() {
        let err = parse_token_list(r#"{"tokens": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::TokenListNotArray));
        assert_eq!(err.to_string(), "Token list data is not an array");
    }

    #[test]
    fn token_list_rejects_non_string_entry() {
        let err = parse_token_list(r#"["MintA", 7]"#).unwrap_err();
        assert!(matches!(err, LoadError::TokenListEntry { index: 1 }));
    }

    #[test]
    fn token_list_rejects_bad_json() {
        let err = parse_token_list("[\"MintA\"").unwrap_err();
        assert!(matches!(err, LoadError::Json { resource: "Token list", .. }));
    }

    #[test]
    fn pair_mapping_rejects_null_and_array() {
        assert!(matches!(
            parse_pair_mapping("null").unwrap_err(),
            LoadError::PairMappingNotObject
        ));
        assert!(matches!(
            parse_pair_mapping("[]").unwrap_err(),
            LoadError::PairMappingNotObject
        ));
    }

    #[test]
    fn pair_mapping_ignores_empty_and_unknown_keys() {
        let mapping = parse_pair_mapping(
            r#"{
                "MintA": {"raydium": "PoolR", "pumpfun": "", "orca": "PoolO"},
                "MintB": {"pumpswap": null, "pumpfun": 12},
                "MintC": "not-an-object"
            }"#,
        )
        .unwrap();

        let a = &mapping["MintA"];
        assert_eq!(a.get(DexSource::Raydium), Some("PoolR"));
        assert!(!a.contains(DexSource::Pumpfun));
        assert_eq!(a.available(), vec![DexSource::Raydium]);

        assert!(mapping["MintB"].is_empty());
        assert!(mapping["MintC"].is_empty());
    }

    #[test]
    fn available_sources_follow_button_order() {
        let pairs = TokenPairs {
            pumpfun: Some("F".into()),
            raydium: Some("R".into()),
            pumpswap: Some("S".into()),
        };
        assert_eq!(
            pairs.available(),
            vec![DexSource::Pumpfun, DexSource::Raydium, DexSource::Pumpswap]
        );
    }

    #[test]
    fn stats_parse_optional_fields_and_cap_buyers() {
        let buyers: Vec<String> = (1..=60)
            .map(|i| format!(r#"{{"rank": {}, "wallet": "W{}", "sol_spent": 0.5}}"#, i, i))
            .collect();
        let body = format!(
            r#"{{
                "MintA": {{
                    "axiomLink": "https://axiom.trade/t/MintA",
                    "calculatedAthUsd": 0.00042,
                    "estimatedAthMarketCapUsd": "420000",
                    "first50Buyers": [{}]
                }},
                "MintB": {{}}
            }}"#,
            buyers.join(",")
        );
        let stats = parse_stats(&body).unwrap();

        let a = &stats["MintA"];
        assert_eq!(a.axiom_link.as_deref(), Some("https://axiom.trade/t/MintA"));
        assert_eq!(a.calculated_ath_usd, Some(StatValue::Number(0.00042)));
        assert_eq!(
            a.estimated_ath_market_cap_usd.as_ref().map(ToString::to_string),
            Some("420000".to_string())
        );
        assert_eq!(a.first_50_buyers.len(), MAX_BUYERS);
        assert_eq!(a.first_50_buyers[0].rank, 1);
        assert_eq!(a.first_50_buyers[49].wallet, "W50");

        assert_eq!(stats["MintB"], TokenStats::default());
    }

    #[test]
    fn stats_skip_undecodable_records() {
        let stats = parse_stats(
            r#"{"MintA": {"first50Buyers": "oops"}, "MintB": {"axiomLink": "https://a"}, "MintC": 7}"#,
        )
        .unwrap();
        assert_eq!(stats["MintA"], TokenStats::default());
        assert_eq!(stats["MintB"].axiom_link.as_deref(), Some("https://a"));
        assert!(!stats.contains_key("MintC"));
    }

    #[test]
    fn stats_keep_record_when_one_buyer_is_bad() {
        let stats = parse_stats(
            r#"{"MintA": {
                "axiomLink": "https://a",
                "calculatedAthUsd": 0.5,
                "first50Buyers": [
                    {"rank": 1, "wallet": "W1", "sol_spent": 2.5},
                    {"rank": 2, "wallet": "W2", "sol_spent": null},
                    {"rank": 3.5, "wallet": "W3", "sol_spent": 1},
                    {"rank": 4, "wallet": "W4", "sol_spent": "0.75"}
                ]
            }}"#,
        )
        .unwrap();

        let a = &stats["MintA"];
        assert_eq!(a.axiom_link.as_deref(), Some("https://a"));
        assert_eq!(a.calculated_ath_usd, Some(StatValue::Number(0.5)));
        let wallets: Vec<&str> = a.first_50_buyers.iter().map(|b| b.wallet.as_str()).collect();
        assert_eq!(wallets, vec!["W1", "W2", "W4"]);
        assert_eq!(a.first_50_buyers[0].sol_spent, Some(StatValue::Number(2.5)));
        assert_eq!(a.first_50_buyers[1].sol_spent, None);
        assert_eq!(
            a.first_50_buyers[2].sol_spent,
            Some(StatValue::Text("0.75".into()))
        );
    }

    #[test]
    fn stats_drop_only_mistyped_ath_fields() {
        let stats = parse_stats(
            r#"{"MintA": {
                "axiomLink": "https://a",
                "calculatedAthUsd": true,
                "estimatedAthMarketCapUsd": {"usd": 1},
                "first50Buyers": [{"rank": 1, "wallet": "W1", "sol_spent": 2.5}]
            }}"#,
        )
        .unwrap();

        let a = &stats["MintA"];
        assert_eq!(a.axiom_link.as_deref(), Some("https://a"));
        assert_eq!(a.calculated_ath_usd, None);
        assert_eq!(a.estimated_ath_market_cap_usd, None);
        assert_eq!(a.first_50_buyers.len(), 1);
    }

    #[test]
    fn numbers_print_like_the_browser() {
        assert_eq!(StatValue::Number(1.2e-7).to_string(), "1.2e-7");
        assert_eq!(StatValue::Number(0.0021).to_string(), "0.0021");
        assert_eq!(StatValue::Number(0.000001).to_string(), "0.000001");
        assert_eq!(StatValue::Number(3100000.0).to_string(), "3100000");
        assert_eq!(StatValue::Number(-5e-9).to_string(), "-5e-9");
        assert_eq!(StatValue::Number(1e21).to_string(), "1e+21");
        assert_eq!(StatValue::Number(2.5e22).to_string(), "2.5e+22");
        assert_eq!(StatValue::Number(0.0).to_string(), "0");
    }

    #[test]
    fn stats_reject_non_object() {
        assert!(parse_stats("[]").is_err());
    }

    #[test]
    fn catalog_reports_gaps() {
        let mut pairs = PairMapping::new();
        pairs.insert(
            "MintA".into(),
            TokenPairs {
                raydium: Some("R".into()),
                ..Default::default()
            },
        );
        pairs.insert("MintB".into(), TokenPairs::default());
        let mut stats = StatsMap::new();
        stats.insert("MintA".into(), TokenStats::default());

        let catalog = TokenCatalog {
            tokens: vec!["MintA".into(), "MintB".into(), "MintC".into()],
            pairs,
            stats,
            stats_available: true,
        };
        assert_eq!(catalog.tokens_without_pairs(), vec!["MintB", "MintC"]);
        assert_eq!(catalog.tokens_without_stats(), vec!["MintB", "MintC"]);
    }
}
