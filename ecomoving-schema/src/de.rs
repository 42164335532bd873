use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number or bool. `null`, lists and objects become an
/// empty string.
pub fn lax_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    match v {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => Ok(String::new()),
    }
}

/// Like [`lax_string`], but empty and `null` values become `None`.
pub fn lax_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lax_string(deserializer).map(|s| (!s.is_empty()).then_some(s))
}

/// A nested record when the value is an object that fits `T`; anything else
/// (a string holding JSON, a list, a scalar) is `None`.
pub fn lax_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    if !v.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(v).ok())
}

/// Integers, floats (truncated) and numeric strings; anything else is `0`.
pub fn lax_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_as_i64(&v).unwrap_or_default())
}

/// Truthiness as the content editors use it: `true`, non-zero numbers and the
/// string `"true"`.
pub fn lax_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// A list of strings; non-string entries are dropped and a non-list is empty.
pub fn lax_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_as_string_list(&v).unwrap_or_default())
}

/// A list of records; entries that do not fit `T` are dropped.
pub fn lax_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    let Value::Array(items) = v else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// `Some` only when the value is a JSON array.
pub fn value_as_string_list(v: &Value) -> Option<Vec<String>> {
    v.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    })
}

pub fn value_as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// JavaScript-style truthiness for optional text: `None` for missing, `null`
/// and empty strings.
pub fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct LaxRecord {
        #[serde(default, deserialize_with = "lax_string")]
        id: String,
        #[serde(default, deserialize_with = "lax_i64")]
        order: i64,
        #[serde(default, deserialize_with = "lax_string_list")]
        gallery: Vec<String>,
        #[serde(default, deserialize_with = "lax_bool")]
        premium: bool,
    }

    #[test]
    fn numbers_and_nulls_are_tolerated() {
        let p: LaxRecord = serde_json::from_str(
            r#"{"id": 42, "order": "3", "gallery": ["a", 1, "b"], "premium": 1}"#,
        )
        .expect("lax record should deserialize");
        assert_eq!(p.id, "42");
        assert_eq!(p.order, 3);
        assert_eq!(p.gallery, vec!["a".to_string(), "b".to_string()]);
        assert!(p.premium);

        let p: LaxRecord = serde_json::from_str(r#"{"id": null, "gallery": "nope"}"#)
            .expect("lax record should deserialize");
        assert_eq!(p.id, "");
        assert_eq!(p.order, 0);
        assert!(p.gallery.is_empty());
        assert!(!p.premium);

        let p: LaxRecord = serde_json::from_str(r#"{"id": ["x"]}"#)
            .expect("non-scalar id should not reject the record");
        assert_eq!(p.id, "");
    }
}
