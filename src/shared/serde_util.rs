//! Custom serde helpers for subgraph wire formats.

/// Deserializes a GraphQL `BigInt` into `u64`.
///
/// The Graph sends `BigInt` scalars as JSON strings (`"12345678"`), but some
/// indexers and test fixtures send plain numbers. Both are accepted.
pub mod u64_from_str_or_num {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(n),
            Raw::Str(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid block number: {}", s))),
        }
    }
}

/// Deserializes a GraphQL `BigDecimal` into `f64`, yielding `NaN` for
/// anything that is not a number or a numeric string (including `null`).
///
/// Pair with `#[serde(default = "nan")]` so absent fields read as `NaN` too.
pub mod lenient_f64 {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => n,
            Raw::Str(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            Raw::Other(_) => f64::NAN,
        })
    }
}

pub fn nan() -> f64 {
    f64::NAN
}
