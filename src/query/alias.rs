//! Per-input field aliases.
//!
//! Every batched field is aliased `t<timestamp>` so results come back keyed by
//! the bucket they answer. GraphQL aliases must start with a letter, hence the
//! prefix.

const PREFIX: char = 't';

/// Alias for the field answering `timestamp`.
pub fn encode(timestamp: i64) -> String {
    format!("{}{}", PREFIX, timestamp)
}

/// Recover the timestamp from an alias. Returns `None` for keys this crate
/// did not produce.
pub fn decode(alias: &str) -> Option<i64> {
    let digits = alias.strip_prefix(PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(1_700_000_000), "t1700000000");
    }

    #[test]
    fn test_round_trip() {
        for ts in [0, 9, 10, 1_600_000_000, 1_700_000_600] {
            assert_eq!(decode(&encode(ts)), Some(ts));
        }
    }

    #[test]
    fn test_decode_rejects_foreign_keys() {
        assert_eq!(decode("t"), None);
        assert_eq!(decode("x123"), None);
        assert_eq!(decode("t12a"), None);
        assert_eq!(decode("t-5"), None);
        assert_eq!(decode("__typename"), None);
    }
}
