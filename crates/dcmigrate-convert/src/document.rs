//! Semi-structured document access

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Result;

/// A parsed Kubernetes resource as a tree of mappings, sequences, and
/// scalars.
///
/// All accessors take a dotted path (e.g. `"spec.strategy.type"`) and return
/// `None` when any intermediate step is absent or not a mapping - absence is
/// never an error at this layer. Sequence order is preserved; mapping key
/// order carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(pub JsonValue);

impl Document {
    /// Wrap an already-decoded JSON value
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Parse a document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: JsonValue = serde_yaml::from_str(yaml)?;
        Ok(Self(value))
    }

    /// Serialize the document to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.0)?)
    }

    /// Get a value by dotted path
    pub fn get(&self, path: &str) -> Option<&JsonValue> {
        let mut current = &self.0;
        for key in path.split('.') {
            current = current.as_object()?.get(key)?;
        }
        Some(current)
    }

    /// Get a mapping by dotted path
    pub fn get_map(&self, path: &str) -> Option<&serde_json::Map<String, JsonValue>> {
        self.get(path)?.as_object()
    }

    /// Get a sequence by dotted path
    pub fn get_seq(&self, path: &str) -> Option<&Vec<JsonValue>> {
        self.get(path)?.as_array()
    }

    /// Get a string scalar by dotted path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// Get an integer scalar by dotted path
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path)?.as_i64()
    }

    /// Get a boolean scalar by dotted path
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path)?.as_bool()
    }

    /// Set a value by dotted path, creating intermediate mappings as needed.
    /// Any non-mapping value in the way is replaced.
    pub fn set(&mut self, path: &str, value: JsonValue) {
        let parts: Vec<&str> = path.split('.').collect();
        set_nested(&mut self.0, &parts, value);
    }

    /// Remove a value by dotted path. Removing an absent path is a no-op.
    pub fn remove(&mut self, path: &str) {
        let parts: Vec<&str> = path.split('.').collect();
        remove_nested(&mut self.0, &parts);
    }

    /// Get the inner JSON value
    pub fn inner(&self) -> &JsonValue {
        &self.0
    }

    /// Convert to the inner JSON value
    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for Document {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

/// Set a nested value by path
fn set_nested(value: &mut JsonValue, path: &[&str], new_value: JsonValue) {
    let Some((key, remaining)) = path.split_first() else {
        *value = new_value;
        return;
    };

    if !value.is_object() {
        *value = JsonValue::Object(serde_json::Map::new());
    }

    let Some(map) = value.as_object_mut() else {
        return;
    };

    if remaining.is_empty() {
        map.insert((*key).to_string(), new_value);
    } else {
        let entry = map
            .entry((*key).to_string())
            .or_insert_with(|| JsonValue::Object(serde_json::Map::new()));
        set_nested(entry, remaining, new_value);
    }
}

/// Remove a nested value by path
fn remove_nested(value: &mut JsonValue, path: &[&str]) {
    let Some((key, remaining)) = path.split_first() else {
        return;
    };

    let Some(map) = value.as_object_mut() else {
        return;
    };

    if remaining.is_empty() {
        map.remove(*key);
    } else if let Some(child) = map.get_mut(*key) {
        remove_nested(child, remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_nested_path() {
        let doc = Document::new(json!({
            "spec": {
                "strategy": {
                    "type": "Rolling"
                }
            }
        }));

        assert_eq!(doc.get_str("spec.strategy.type"), Some("Rolling"));
        assert!(doc.get("spec.strategy.rollingParams").is_none());
        assert!(doc.get("status").is_none());
    }

    #[test]
    fn test_get_through_scalar_is_none() {
        let doc = Document::new(json!({ "spec": { "replicas": 3 } }));

        // Traversal through a scalar does not panic or error
        assert!(doc.get("spec.replicas.nested").is_none());
        assert_eq!(doc.get_i64("spec.replicas"), Some(3));
    }

    #[test]
    fn test_typed_accessors() {
        let doc = Document::new(json!({
            "spec": {
                "paused": true,
                "triggers": [{"type": "ConfigChange"}],
                "selector": {"app": "web"}
            }
        }));

        assert_eq!(doc.get_bool("spec.paused"), Some(true));
        assert_eq!(doc.get_seq("spec.triggers").map(Vec::len), Some(1));
        assert!(doc.get_map("spec.selector").is_some());
        // Wrong-type access is absence, not an error
        assert!(doc.get_str("spec.paused").is_none());
        assert!(doc.get_map("spec.triggers").is_none());
    }

    #[test]
    fn test_set_creates_intermediate_maps() {
        let mut doc = Document::new(json!({}));
        doc.set("spec.strategy.type", json!("RollingUpdate"));

        assert_eq!(doc.get_str("spec.strategy.type"), Some("RollingUpdate"));
    }

    #[test]
    fn test_set_overwrites_existing() {
        let mut doc = Document::new(json!({ "spec": { "replicas": 1 } }));
        doc.set("spec.replicas", json!(5));

        assert_eq!(doc.get_i64("spec.replicas"), Some(5));
    }

    #[test]
    fn test_remove_existing_and_absent() {
        let mut doc = Document::new(json!({
            "spec": { "triggers": [], "replicas": 2 }
        }));

        doc.remove("spec.triggers");
        assert!(doc.get("spec.triggers").is_none());
        assert_eq!(doc.get_i64("spec.replicas"), Some(2));

        // Absent path is a no-op
        doc.remove("spec.paused");
        doc.remove("status.conditions");
    }

    #[test]
    fn test_sequence_order_preserved() {
        let doc = Document::from_yaml(
            r#"
spec:
  template:
    spec:
      containers:
        - name: first
        - name: second
        - name: third
"#,
        )
        .unwrap();

        let containers = doc.get_seq("spec.template.spec.containers").unwrap();
        let names: Vec<_> = containers
            .iter()
            .filter_map(|c| c.get("name").and_then(JsonValue::as_str))
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let doc = Document::from_yaml("metadata:\n  name: web\n").unwrap();
        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.contains("name: web"));
    }
}
