//! Float encoding for JSON series.
//!
//! JSON has no literal for infinities or NaN, and serde_json would write
//! them as `null`. Finite values stay numbers; non-finite values are
//! written as the strings `"inf"`, `"-inf"` and `"NaN"` and parsed back.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum JsonFloat {
    Number(f64),
    Text(String),
}

impl JsonFloat {
    fn encode(value: f64) -> Self {
        if value.is_finite() {
            JsonFloat::Number(value)
        } else {
            JsonFloat::Text(value.to_string())
        }
    }

    fn decode(self) -> Result<f64, String> {
        match self {
            JsonFloat::Number(v) => Ok(v),
            JsonFloat::Text(s) => s
                .parse::<f64>()
                .map_err(|_| format!("invalid float literal {:?}", s)),
        }
    }
}

/// `#[serde(with = "float::series")]` for `Vec<f64>`
pub mod series {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|&v| JsonFloat::encode(v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<JsonFloat>::deserialize(deserializer)?
            .into_iter()
            .map(|v| v.decode().map_err(D::Error::custom))
            .collect()
    }
}

/// `#[serde(with = "float::rows")]` for `Vec<Vec<f64>>`
pub mod rows {
    use super::*;

    pub fn serialize<S: Serializer>(rows: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            rows.iter()
                .map(|row| row.iter().map(|&v| JsonFloat::encode(v)).collect::<Vec<_>>()),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<f64>>, D::Error> {
        Vec::<Vec<JsonFloat>>::deserialize(deserializer)?
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| v.decode().map_err(D::Error::custom))
                    .collect()
            })
            .collect()
    }
}
