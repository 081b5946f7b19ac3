//! Configuration for locating and interpreting the bindings source.

use serde::{Deserialize, Serialize};

/// Environment variable the platform publishes bindings in.
pub const DEFAULT_VARIABLE: &str = "VCAP_SERVICES";

/// How the loader treats a source that parses but is not shaped like
/// `{ "<type>": [ { "name": .. }, .. ] }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapePolicy {
    /// Degrade to an empty binding set.
    #[default]
    Permissive,
    /// Raise [`crate::ServicesError::SourceShape`].
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Name of the environment variable holding the source JSON.
    pub variable: String,
    pub shape: ShapePolicy,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            shape: ShapePolicy::default(),
        }
    }
}

impl ServicesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML fragment, e.g. `variable = "MY_SERVICES"`.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub fn with_shape(mut self, shape: ShapePolicy) -> Self {
        self.shape = shape;
        self
    }
}
