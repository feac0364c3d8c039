//! Time buckets: evenly spaced sample timestamps over a chart span.

use serde::{Deserialize, Serialize};

/// Window after a bucket in which a block must have been mined to represent it.
pub const BLOCK_WINDOW_SECS: i64 = 600;

/// Generate `start, start + stride, …` up to and including `now`.
///
/// A non-positive stride or a start in the future yields no buckets.
pub fn buckets(start: i64, stride: i64, now: i64) -> Vec<i64> {
    if stride <= 0 || start > now {
        return Vec::new();
    }
    let count = (now - start) / stride + 1;
    (0..count).map(|i| start + i * stride).collect()
}

/// Preset chart span: how far back to look and how densely to sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Span {
    #[default]
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "1m")]
    Month1,
    #[serde(rename = "1yr")]
    Year1,
}

impl Span {
    pub const ALL: [Span; 4] = [Span::Day1, Span::Week1, Span::Month1, Span::Year1];

    /// Parse a span label. Unknown labels are `None`; callers render nothing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1d" => Some(Self::Day1),
            "1w" => Some(Self::Week1),
            "1m" => Some(Self::Month1),
            "1yr" => Some(Self::Year1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1d",
            Self::Week1 => "1w",
            Self::Month1 => "1m",
            Self::Year1 => "1yr",
        }
    }

    /// How far before `now` the first bucket lies, in seconds.
    pub fn lookback(&self) -> i64 {
        match self {
            Self::Day1 => 24 * 3600,
            Self::Week1 => 7 * 24 * 3600,
            Self::Month1 => 31 * 24 * 3600,
            Self::Year1 => 365 * 24 * 3600,
        }
    }

    /// Distance between buckets in seconds.
    pub fn stride(&self) -> i64 {
        match self {
            Self::Day1 => 600,
            Self::Week1 | Self::Month1 => 3600,
            Self::Year1 => 86400,
        }
    }

    pub fn buckets(&self, now: i64) -> Vec<i64> {
        buckets(now - self.lookback(), self.stride(), now)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
