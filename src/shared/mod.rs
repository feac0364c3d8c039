//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the subgraphs and chart libraries use.

pub mod serde_util;

use crate::error::FetchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── PairAddress ─────────────────────────────────────────────────────────────

/// A DEX pair contract address, normalized to lowercase `0x`-prefixed hex.
///
/// Subgraph entity ids are lowercase, so a checksummed address would never
/// match. Parsing lowercases and validates the 20-byte length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairAddress(String);

impl PairAddress {
    pub fn parse(s: &str) -> Result<Self, FetchError> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered.strip_prefix("0x").ok_or_else(|| {
            FetchError::Validation(format!("Pair address must start with 0x: {}", s))
        })?;
        let bytes = hex::decode(digits)
            .map_err(|e| FetchError::Validation(format!("Invalid pair address {}: {}", s, e)))?;
        if bytes.len() != 20 {
            return Err(FetchError::Validation(format!(
                "Pair address must be 20 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PairAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PairAddress {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PairAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PairAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PairAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── SeriesKind ──────────────────────────────────────────────────────────────

/// Output shape of a price series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeriesKind {
    #[default]
    Line,
    Candle,
}

impl SeriesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "LINE",
            Self::Candle => "CANDLE",
        }
    }
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Resolved ────────────────────────────────────────────────────────────────

/// Partial-success result: the entities that resolved plus the alias keys
/// that were dropped along the way.
///
/// Missing data is expected (a bucket with no block, a pair not yet created
/// at a block), so it is counted here instead of being raised as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub items: Vec<T>,
    pub skipped: Vec<String>,
}

impl<T> Resolved<T> {
    pub fn new(items: Vec<T>, skipped: Vec<String>) -> Self {
        Self { items, skipped }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: &str = "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc";

    #[test]
    fn test_pair_address_lowercases() {
        let pair = PairAddress::parse(PAIR).unwrap();
        assert_eq!(pair.as_str(), "0xb4e16d0168e52d35cacd2c6185b44281ec28c9dc");
    }

    #[test]
    fn test_pair_address_rejects_missing_prefix() {
        let err = PairAddress::parse("b4e16d0168e52d35cacd2c6185b44281ec28c9dc").unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }

    #[test]
    fn test_pair_address_rejects_wrong_length() {
        assert!(PairAddress::parse("0xb4e16d").is_err());
        assert!(PairAddress::parse("0xzz16d0168e52d35cacd2c6185b44281ec28c9dc").is_err());
    }

    #[test]
    fn test_pair_address_serde() {
        let json = format!("\"{}\"", PAIR);
        let pair: PairAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(
            serde_json::to_string(&pair).unwrap(),
            "\"0xb4e16d0168e52d35cacd2c6185b44281ec28c9dc\""
        );
    }

    #[test]
    fn test_series_kind_serde() {
        let kind: SeriesKind = serde_json::from_str("\"CANDLE\"").unwrap();
        assert_eq!(kind, SeriesKind::Candle);
        assert_eq!(serde_json::to_string(&SeriesKind::Line).unwrap(), "\"LINE\"");
    }
}
