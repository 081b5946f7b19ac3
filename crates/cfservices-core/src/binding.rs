//! Service binding records and the ordered set they are collected into.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One bound service instance.
///
/// Beyond `name` the record is opaque: every field from the source is kept
/// verbatim and compared structurally by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Binding {
    name: String,
    fields: Map<String, Value>,
}

impl Binding {
    /// Wrap a record, provided it carries a non-empty string `name`.
    pub fn from_map(fields: Map<String, Value>) -> Option<Self> {
        let name = match fields.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => return None,
        };
        Some(Self { name, fields })
    }

    /// Wrap a JSON value, provided it is an object with a usable `name`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Self::from_map(fields),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.fields.get("label").and_then(Value::as_str)
    }

    pub fn plan(&self) -> Option<&str> {
        self.fields.get("plan").and_then(Value::as_str)
    }

    /// String tags, skipping any non-string entries.
    pub fn tags(&self) -> Vec<&str> {
        self.fields
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn credentials(&self) -> Option<&Map<String, Value>> {
        self.fields.get("credentials").and_then(Value::as_object)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl TryFrom<Map<String, Value>> for Binding {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_map(fields).ok_or_else(|| "binding record has no name".to_string())
    }
}

impl From<Binding> for Map<String, Value> {
    fn from(binding: Binding) -> Self {
        binding.fields
    }
}

/// Bindings keyed by instance name, in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingSet {
    bindings: IndexMap<String, Binding>,
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding. A repeated name replaces the earlier record but keeps
    /// its original position.
    pub fn insert(&mut self, binding: Binding) {
        self.bindings.insert(binding.name().to_string(), binding);
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Take a binding out, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// The whole set as a `{ name: record }` JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(
            self.bindings
                .into_iter()
                .map(|(name, binding)| (name, binding.into_value()))
                .collect(),
        )
    }
}

impl IntoIterator for BindingSet {
    type Item = Binding;
    type IntoIter = indexmap::map::IntoValues<String, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_values()
    }
}

impl FromIterator<Binding> for BindingSet {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        let mut set = Self::new();
        for binding in iter {
            set.insert(binding);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn binding(value: Value) -> Binding {
        Binding::from_value(value).unwrap()
    }

    #[test]
    fn test_accessors() {
        let b = binding(json!({
            "name": "postgres1",
            "label": "postgres",
            "plan": "small",
            "tags": ["postgresql", 7, "sql"],
            "credentials": {"user": "u"}
        }));
        assert_eq!(b.name(), "postgres1");
        assert_eq!(b.label(), Some("postgres"));
        assert_eq!(b.plan(), Some("small"));
        assert_eq!(b.tags(), vec!["postgresql", "sql"]);
        assert_eq!(b.credentials().unwrap()["user"], "u");
        assert_eq!(b.get("missing"), None);
    }

    #[test]
    fn test_rejects_records_without_name() {
        assert!(Binding::from_value(json!({"label": "redis"})).is_none());
        assert!(Binding::from_value(json!({"name": ""})).is_none());
        assert!(Binding::from_value(json!({"name": 5})).is_none());
        assert!(Binding::from_value(json!("redis1")).is_none());
    }

    #[test]
    fn test_serde_is_transparent() {
        let value = json!({"name": "redis1", "plan": "small"});
        let b: Binding = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&b).unwrap(), value);
        assert!(serde_json::from_value::<Binding>(json!({"plan": "small"})).is_err());
    }

    #[test]
    fn test_set_keeps_first_position_on_duplicate() {
        let set: BindingSet = vec![
            binding(json!({"name": "a", "plan": "old"})),
            binding(json!({"name": "b"})),
            binding(json!({"name": "a", "plan": "new"})),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.get("a").unwrap().plan(), Some("new"));
    }

    #[test]
    fn test_into_value_keys_by_name() {
        let set: BindingSet = vec![binding(json!({"name": "a"})), binding(json!({"name": "b"}))]
            .into_iter()
            .collect();
        assert_eq!(
            set.into_value(),
            json!({"a": {"name": "a"}, "b": {"name": "b"}})
        );
    }
}
