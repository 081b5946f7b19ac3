//! Query Cloud Foundry service bindings
//!
//! The platform describes bound service instances in the `VCAP_SERVICES`
//! environment variable, grouped by service type. This crate flattens that
//! into one set keyed by instance name and resolves queries against it:
//!
//! - **Strict lookup** ([`lookup`], [`Services::lookup`]) returns exactly one
//!   binding, or errors when nothing or more than one binding matches.
//! - **Filter** ([`filter`], [`Services::filter`]) returns every match.
//!
//! A [`Query`] is an instance name, a [`Predicate`] of expected field values
//! (arrays match as subsets, so `tags: ["sql"]` finds every SQL service), or
//! a closure.
//!
//! # Example
//!
//! ```rust,no_run
//! use cfservices_core::{Predicate, Query, Services};
//!
//! let services = Services::default();
//! let db = services.lookup_one(&Query::from(Predicate::new().tags(["sql"])), Some("SQL db"))?;
//! println!("{:?}", db.credentials());
//! # Ok::<(), cfservices_core::ServicesError>(())
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod resolver;
pub mod services;
pub mod source;

pub use binding::{Binding, BindingSet};
pub use config::{ServicesConfig, ShapePolicy, DEFAULT_VARIABLE};
pub use error::{ErrorKind, Result, ServicesError};
pub use query::{Predicate, Query};
pub use resolver::Resolved;
pub use services::{filter, lookup, Services};
pub use source::Source;
