//! Queries over service bindings.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::binding::Binding;
use crate::matcher;

/// Label used for closures when the caller gives no description.
pub const FILTER_DESCRIPTION: &str = "the filter";

/// Caller-supplied test over a binding.
pub type FilterFn = dyn Fn(&Binding) -> bool + Send + Sync;

/// What a caller is looking for.
#[derive(Clone)]
pub enum Query {
    /// Exact instance name. Only meaningful to a strict lookup; as a
    /// predicate it matches nothing.
    Name(String),
    /// Partial field match, see [`Predicate`].
    Predicate(Predicate),
    /// Arbitrary closure.
    Filter(Arc<FilterFn>),
}

impl Query {
    pub fn name(name: impl Into<String>) -> Self {
        Query::Name(name.into())
    }

    pub fn filter<F>(f: F) -> Self
    where
        F: Fn(&Binding) -> bool + Send + Sync + 'static,
    {
        Query::Filter(Arc::new(f))
    }

    /// Whether `binding` satisfies this query as a predicate.
    pub fn matches(&self, binding: &Binding) -> bool {
        match self {
            Query::Name(_) => false,
            Query::Predicate(predicate) => predicate.matches(binding),
            Query::Filter(f) => f(binding),
        }
    }

    /// Human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Query::Name(name) => name.clone(),
            Query::Predicate(predicate) => predicate.to_string(),
            Query::Filter(_) => FILTER_DESCRIPTION.to_string(),
        }
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Query::Predicate(predicate) => f.debug_tuple("Predicate").field(predicate).finish(),
            Query::Filter(_) => f.write_str("Filter(..)"),
        }
    }
}

impl From<&str> for Query {
    fn from(name: &str) -> Self {
        Query::Name(name.to_string())
    }
}

impl From<String> for Query {
    fn from(name: String) -> Self {
        Query::Name(name)
    }
}

impl From<Predicate> for Query {
    fn from(predicate: Predicate) -> Self {
        Query::Predicate(predicate)
    }
}

impl From<Map<String, Value>> for Query {
    fn from(fields: Map<String, Value>) -> Self {
        Query::Predicate(Predicate::from(fields))
    }
}

/// Field → expected value pairs a binding must satisfy.
///
/// Matching follows [`matcher::is_match`]: nested objects match partially and
/// an expected array matches any array holding all of its elements, which is
/// how tag queries like `{"tags": ["sql"]}` work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Predicate(Map<String, Value>);

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.field("label", label.into())
    }

    pub fn plan(self, plan: impl Into<String>) -> Self {
        self.field("plan", plan.into())
    }

    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<Value> = tags.into_iter().map(|t| Value::String(t.into())).collect();
        self.field("tags", tags)
    }

    pub fn matches(&self, binding: &Binding) -> bool {
        matcher::is_object_match(binding.as_map(), &self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Predicate {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Compact JSON, e.g. `{"tags":["sql"]}`.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = Value::Object(self.0.clone());
        write!(f, "{}", value)
    }
}
