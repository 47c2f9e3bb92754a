//! Free-form activity records.
//!
//! Activities carry whatever fields the client submits. The only structure
//! imposed is that the document is a JSON object keyed by field name.

use serde::Serialize;
use serde_json::{Map, Value};

use super::RecordId;

/// Field document of an activity, excluding its identifier.
///
/// An `id` key submitted by a client is dropped on construction so the
/// store-assigned identifier cannot be shadowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActivityFields(Map<String, Value>);

/// Raised when an activity body is not a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("activity data must be a JSON object, got {kind}")]
pub struct ActivityFieldsError {
    kind: &'static str,
}

impl ActivityFields {
    /// Build a field document from an arbitrary JSON value.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ActivityFields;
    /// use serde_json::json;
    ///
    /// let fields = ActivityFields::try_from_value(json!({"id": 9, "name": "Run"}))
    ///     .expect("object body");
    /// assert!(fields.get("id").is_none());
    /// assert_eq!(fields.get("name"), Some(&json!("Run")));
    /// ```
    pub fn try_from_value(value: Value) -> Result<Self, ActivityFieldsError> {
        match value {
            Value::Object(mut map) => {
                map.remove("id");
                Ok(Self(map))
            }
            other => Err(ActivityFieldsError {
                kind: json_kind(&other),
            }),
        }
    }

    /// Look up a single field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Overwrite the fields present in `patch`, leaving others untouched.
    pub fn merge(&mut self, patch: Self) {
        self.0.extend(patch.0);
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into a JSON value suitable for storage.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A persisted activity: its identifier plus the stored field document.
///
/// Serialises flat, so `{"id":1,"name":"Run"}` rather than nesting the
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: ActivityFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!([1, 2]), "an array")]
    #[case(json!("walk"), "a string")]
    #[case(json!(3), "a number")]
    fn non_object_bodies_are_rejected(#[case] body: Value, #[case] kind: &str) {
        let error = ActivityFields::try_from_value(body).expect_err("non-object body");
        assert!(error.to_string().ends_with(kind));
    }

    #[rstest]
    fn merge_overwrites_only_submitted_keys() {
        let mut stored =
            ActivityFields::try_from_value(json!({"name": "Run", "minutes": 30})).expect("object");
        let patch = ActivityFields::try_from_value(json!({"minutes": 45})).expect("object");

        stored.merge(patch);

        assert_eq!(stored.get("name"), Some(&json!("Run")));
        assert_eq!(stored.get("minutes"), Some(&json!(45)));
    }

    #[rstest]
    fn activity_serialises_flat_with_id() {
        let activity = Activity {
            id: RecordId::new(4),
            fields: ActivityFields::try_from_value(json!({"name": "Swim"})).expect("object"),
        };
        let value = serde_json::to_value(&activity).expect("serialise activity");
        assert_eq!(value, json!({"id": 4, "name": "Swim"}));
    }
}
