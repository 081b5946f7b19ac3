//! Entry points that read the bindings source on every call.

use tracing::debug;

use crate::binding::{Binding, BindingSet};
use crate::config::{ServicesConfig, ShapePolicy};
use crate::error::Result;
use crate::loader;
use crate::query::Query;
use crate::resolver::{self, Resolved};
use crate::source::Source;

/// Query interface over a bindings source.
///
/// Nothing is cached: every call re-reads and re-parses the source, so a
/// changed environment is picked up immediately.
#[derive(Debug, Clone)]
pub struct Services {
    source: Source,
    shape: ShapePolicy,
}

impl Default for Services {
    fn default() -> Self {
        Self::new(ServicesConfig::default())
    }
}

impl Services {
    /// Read the environment variable named by `config`.
    pub fn new(config: ServicesConfig) -> Self {
        Self {
            source: Source::Env(config.variable),
            shape: config.shape,
        }
    }

    /// Use an explicit source with the default shape policy.
    pub fn from_source(source: Source) -> Self {
        Self {
            source,
            shape: ShapePolicy::default(),
        }
    }

    pub fn with_shape(mut self, shape: ShapePolicy) -> Self {
        self.shape = shape;
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Parse the current source into a fresh binding set.
    pub fn load(&self) -> Result<BindingSet> {
        debug!("Loading service bindings from {}", self.source.label());
        loader::load_source(&self.source, self.shape)
    }

    /// Strict lookup: the whole set without a query, otherwise exactly one
    /// binding or an error.
    pub fn lookup(&self, query: Option<&Query>, description: Option<&str>) -> Result<Resolved> {
        resolver::lookup(self.load()?, query, description)
    }

    /// Strict lookup of a single binding.
    pub fn lookup_one(&self, query: &Query, description: Option<&str>) -> Result<Binding> {
        resolver::lookup_one(self.load()?, query, description)
    }

    /// Every binding matching `query` (all of them without one).
    ///
    /// Errors only when the source itself cannot be read.
    pub fn filter(&self, query: Option<&Query>) -> Result<Vec<Binding>> {
        Ok(resolver::filter(self.load()?, query))
    }
}

/// [`Services::lookup`] against `VCAP_SERVICES`.
pub fn lookup(query: Option<&Query>, description: Option<&str>) -> Result<Resolved> {
    Services::default().lookup(query, description)
}

/// [`Services::filter`] against `VCAP_SERVICES`.
pub fn filter(query: Option<&Query>) -> Result<Vec<Binding>> {
    Services::default().filter(query)
}
