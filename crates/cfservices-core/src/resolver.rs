//! Strict and permissive query resolution over a [`BindingSet`].
//!
//! - [`lookup`] wants exactly one binding and errors otherwise.
//! - [`filter`] returns every match, possibly none, and never errors.
//!
//! Both report matches in binding set order.

use serde_json::Value;
use tracing::debug;

use crate::binding::{Binding, BindingSet};
use crate::error::{Result, ServicesError};
use crate::query::Query;

/// Outcome of a strict lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// No query was given: every binding, keyed by name.
    All(BindingSet),
    /// The single binding the query selected.
    One(Binding),
}

impl Resolved {
    pub fn into_binding(self) -> Option<Binding> {
        match self {
            Resolved::One(binding) => Some(binding),
            Resolved::All(_) => None,
        }
    }

    pub fn into_set(self) -> Option<BindingSet> {
        match self {
            Resolved::All(set) => Some(set),
            Resolved::One(_) => None,
        }
    }

    /// `{ name: record }` for `All`, the record itself for `One`.
    pub fn into_value(self) -> Value {
        match self {
            Resolved::All(set) => set.into_value(),
            Resolved::One(binding) => binding.into_value(),
        }
    }
}

/// Strict lookup. Without a query the whole set is returned.
pub fn lookup(
    bindings: BindingSet,
    query: Option<&Query>,
    description: Option<&str>,
) -> Result<Resolved> {
    match query {
        None => Ok(Resolved::All(bindings)),
        Some(query) => lookup_one(bindings, query, description).map(Resolved::One),
    }
}

/// Strict lookup of exactly one binding.
///
/// A [`Query::Name`] is looked up directly. Other queries must match exactly
/// one binding; `description` replaces the query's own
/// [`describe`](Query::describe) text in error messages.
pub fn lookup_one(
    mut bindings: BindingSet,
    query: &Query,
    description: Option<&str>,
) -> Result<Binding> {
    if let Query::Name(name) = query {
        return bindings
            .remove(name)
            .ok_or_else(|| ServicesError::NoInstanceNamed { name: name.clone() });
    }

    let description = description
        .map(str::to_string)
        .unwrap_or_else(|| query.describe());

    let mut matches: Vec<Binding> = bindings.into_iter().filter(|b| query.matches(b)).collect();
    debug!("Query {} matched {} service bindings", description, matches.len());

    if matches.len() > 1 {
        return Err(ServicesError::AmbiguousMatch {
            description,
            names: matches.iter().map(|b| b.name().to_string()).collect(),
        });
    }
    matches.pop().ok_or(ServicesError::NoMatch { description })
}

/// Permissive filter. Without a query every binding is returned.
pub fn filter(bindings: BindingSet, query: Option<&Query>) -> Vec<Binding> {
    match query {
        None => bindings.into_iter().collect(),
        Some(query) => {
            let matches: Vec<Binding> = bindings.into_iter().filter(|b| query.matches(b)).collect();
            debug!(
                "Filter {} matched {} service bindings",
                query.describe(),
                matches.len()
            );
            matches
        }
    }
}
