use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Dot-separated accessor into a record, e.g. `"customer.name"`.
///
/// Parsing never fails. A path with an empty segment (`"a..b"`, `""`) is
/// kept as written and simply never resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
}

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { raw: path.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Segments of the path, `None` if any of them is empty
    pub fn segments(&self) -> Option<Vec<&str>> {
        let segments: Vec<&str> = self.raw.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            None
        } else {
            Some(segments)
        }
    }

    /// Walk a JSON value along this path.
    ///
    /// Object keys are matched exactly; numeric segments index into arrays.
    /// Any missing intermediate step yields `None`.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        let mut current = value;
        for segment in self.segments()? {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

/// Text form of a JSON value for matching.
///
/// Null and objects have no text form. Arrays join their elements with `,`,
/// rendering null elements as empty strings.
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| value_text(item).map(Cow::into_owned).unwrap_or_default())
                .collect();
            Some(Cow::Owned(parts.join(",")))
        }
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        FieldPath::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        FieldPath::new(path)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_nested() {
        let record = json!({"customer": {"name": "John Smith", "address": {"city": "Leeds"}}});

        assert_eq!(FieldPath::from("customer.name").resolve(&record), Some(&json!("John Smith")));
        assert_eq!(FieldPath::from("customer.address.city").resolve(&record), Some(&json!("Leeds")));
    }

    #[test]
    fn test_resolve_missing_intermediate() {
        let record = json!({"customer": null, "total": 12});

        assert_eq!(FieldPath::from("customer.name").resolve(&record), None);
        assert_eq!(FieldPath::from("total.amount").resolve(&record), None);
        assert_eq!(FieldPath::from("shipping.city").resolve(&record), None);
    }

    #[test]
    fn test_resolve_array_index() {
        let record = json!({"items": [{"sku": "BC-100"}, {"sku": "PST-A2"}]});

        assert_eq!(FieldPath::from("items.1.sku").resolve(&record), Some(&json!("PST-A2")));
        assert_eq!(FieldPath::from("items.5.sku").resolve(&record), None);
        assert_eq!(FieldPath::from("items.first.sku").resolve(&record), None);
    }

    #[test]
    fn test_empty_segments_never_resolve() {
        let record = json!({"a": {"": 1}, "": 2});

        assert_eq!(FieldPath::from("").resolve(&record), None);
        assert_eq!(FieldPath::from("a.").resolve(&record), None);
        assert_eq!(FieldPath::from(".a").resolve(&record), None);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("Active")).as_deref(), Some("Active"));
        assert_eq!(value_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(value_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(value_text(&json!(["a", null, 3])).as_deref(), Some("a,,3"));
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!({"k": "v"})), None);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let paths: Vec<FieldPath> = serde_json::from_str(r#"["name", "customer.email"]"#).unwrap();
        assert_eq!(paths[1].as_str(), "customer.email");
        assert_eq!(serde_json::to_string(&paths[0]).unwrap(), r#""name""#);
    }
}
