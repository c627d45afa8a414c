//! Opaque tag collection owned by the UI

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::TagSetError;

/// Default key of the durable tag record
pub const DEFAULT_TAGS_KEY: &str = "tags";

/// Ordered sequence of UI-defined tag records.
///
/// The bridge never looks inside a tag; the set is stored and replaced as a
/// whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<Value>);

impl TagSet {
    pub fn new(tags: Vec<Value>) -> Self {
        Self(tags)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Accept a UI payload, which must be a JSON sequence.
    pub fn from_payload(payload: Value) -> Result<Self, TagSetError> {
        match payload {
            Value::Array(tags) => Ok(Self(tags)),
            other => Err(TagSetError::NotASequence(json_kind(&other))),
        }
    }

    /// Parse a stored record.
    pub fn parse(raw: &str) -> Result<Self, TagSetError> {
        serde_json::from_str(raw).map_err(|e| TagSetError::Deserialize(e.to_string()))
    }

    /// Serialize for the durable record.
    pub fn to_json(&self) -> Result<String, TagSetError> {
        serde_json::to_string(self).map_err(|e| TagSetError::Serialize(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}

/// UI initialization payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitFlags {
    pub tags: TagSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_payload_accepts_sequences() {
        let tags = TagSet::from_payload(json!([{"name": "work"}, "x", 3])).unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn from_payload_rejects_non_sequences() {
        let err = TagSet::from_payload(json!({"name": "work"})).unwrap_err();
        assert!(matches!(err, TagSetError::NotASequence("an object")));
        assert!(TagSet::from_payload(Value::Null).is_err());
    }

    #[test]
    fn parse_rejects_malformed_records() {
        assert!(TagSet::parse("not json").is_err());
        assert!(TagSet::parse("{\"a\":1}").is_err());
    }

    #[test]
    fn stored_record_keeps_tags_intact() {
        let tags = TagSet::new(vec![json!({"id": 1, "label": "a", "nested": {"k": [1, 2]}})]);
        let raw = tags.to_json().unwrap();
        assert_eq!(raw, r#"[{"id":1,"label":"a","nested":{"k":[1,2]}}]"#);
        assert_eq!(TagSet::parse(&raw).unwrap(), tags);
    }

    #[test]
    fn init_flags_serialize_with_tags_field() {
        let flags = InitFlags {
            tags: TagSet::empty(),
        };
        assert_eq!(serde_json::to_value(&flags).unwrap(), json!({"tags": []}));
    }
}
