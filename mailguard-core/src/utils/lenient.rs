//! Lenient string decoding.
//!
//! The validator endpoint documents every field as a string, but boolean
//! flags sometimes arrive as JSON `true`/`false`, numbers, or `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any scalar into its string form. `null` becomes an empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        v: String,
    }

    fn decode(json: &str) -> String {
        serde_json::from_str::<Probe>(json).map(|p| p.v).unwrap_or_else(|e| format!("ERR {e}"))
    }

    #[test]
    fn accepts_strings_bools_numbers_and_null() {
        assert_eq!(decode(r#"{"v":"true"}"#), "true");
        assert_eq!(decode(r#"{"v":false}"#), "false");
        assert_eq!(decode(r#"{"v":3}"#), "3");
        assert_eq!(decode(r#"{"v":null}"#), "");
        assert_eq!(decode("{}"), "");
    }
}
