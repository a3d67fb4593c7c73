//! Custom serde helpers for backend wire formats.

/// Deserializes a JSON number (or numeric string) into `Decimal`.
///
/// The backend and the quote API both send amounts as JSON floats
/// (`"value_eth": 0.0015`). Going through the number's textual form keeps
/// the value exactly as printed instead of inheriting f64 rounding.
pub mod decimal_number {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        };
        parse(&text).map_err(serde::de::Error::custom)
    }

    pub(crate) fn parse(text: &str) -> Result<Decimal, String> {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|e| format!("Invalid decimal {:?}: {}", text, e))
    }
}

/// Like [`decimal_number`], but `null` or a missing field becomes zero.
pub mod decimal_number_or_zero {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        match raw {
            None | Some(serde_json::Value::Null) => Ok(Decimal::ZERO),
            Some(serde_json::Value::Number(n)) => {
                super::decimal_number::parse(&n.to_string()).map_err(serde::de::Error::custom)
            }
            Some(serde_json::Value::String(s)) => {
                super::decimal_number::parse(&s).map_err(serde::de::Error::custom)
            }
            Some(other) => Err(serde::de::Error::custom(format!(
                "Expected a number, got {}",
                other
            ))),
        }
    }
}

/// Deserializes an ISO-8601 timestamp into `DateTime<Utc>`.
///
/// The backend formats `time_stamp` with Python's `isoformat()`, which omits
/// the offset for naive datetimes (`2025-11-27T12:00:00`). Naive values are
/// taken as UTC.
pub mod iso_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s)))
    }

    pub(crate) fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
