//! Chart options: defaults plus caller overrides.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Crosshair in normal (free-moving) mode, time axis showing hours and
/// minutes but not seconds.
pub fn default_options() -> Value {
    json!({
        "crosshair": { "mode": 0 },
        "timeScale": {
            "timeVisible": true,
            "secondsVisible": false,
        },
    })
}

/// Deep-merge `overrides` into `base`. Objects merge key by key; any other
/// value in `overrides` replaces the base value outright.
pub fn merge_options(base: Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(mut base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                let merged = match base.remove(key) {
                    Some(existing) => merge_options(existing, value),
                    None => value.clone(),
                };
                base.insert(key.clone(), merged);
            }
            Value::Object(base)
        }
        (base, Value::Null) => base,
        (_, overrides) => overrides.clone(),
    }
}

/// Candlestick colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleStyle {
    pub up_color: String,
    pub down_color: String,
    pub border_up_color: String,
    pub border_down_color: String,
    pub wick_up_color: String,
    pub wick_down_color: String,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            up_color: "green".to_string(),
            down_color: "red".to_string(),
            border_up_color: "green".to_string(),
            border_down_color: "red".to_string(),
            wick_up_color: "green".to_string(),
            wick_down_color: "red".to_string(),
        }
    }
}
