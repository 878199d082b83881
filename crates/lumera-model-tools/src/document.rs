//! JSON documents stored in text columns.

use crate::error::Error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    Ok(serde_json::from_str(text)?)
}

pub fn render<T: Serialize>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

/// Parses a free form payload. An empty column is read as `null`.
pub fn parse_value(text: &str) -> Result<Value, Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    parse(text)
}

/// Tags are a JSON array of strings. An empty column is read as no tags.
pub fn parse_tags(text: &str) -> Result<Vec<String>, Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_columns() {
        assert_eq!(parse_value("").unwrap(), Value::Null);
        assert!(parse_tags("  ").unwrap().is_empty());
        assert_eq!(parse_tags(r#"["a","b"]"#).unwrap(), vec!["a", "b"]);
        assert!(parse_value("{broken").is_err());
    }

    #[test]
    fn test_render() {
        let rendered = render(&json!({"selected": "B"})).unwrap();
        assert_eq!(parse_value(&rendered).unwrap(), json!({"selected": "B"}));
    }
}
