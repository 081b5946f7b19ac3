//! Test fixtures for cfservices
//!
//! Four bindings across two service types, the same shape a Cloud Foundry
//! app sees in `VCAP_SERVICES`.

use serde_json::{json, Value};

/// Fixture bindings by instance name
pub enum Fixture {
    Postgres1,
    Postgres2,
    Redis1,
    Redis2,
}

impl Fixture {
    pub const ALL: [Fixture; 4] = [
        Fixture::Postgres1,
        Fixture::Postgres2,
        Fixture::Redis1,
        Fixture::Redis2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Fixture::Postgres1 => "postgres1",
            Fixture::Postgres2 => "postgres2",
            Fixture::Redis1 => "redis1",
            Fixture::Redis2 => "redis2",
        }
    }

    /// The binding record as the platform serialises it.
    pub fn record(&self) -> Value {
        match self {
            Fixture::Postgres1 => json!({
                "label": "postgres",
                "plan": "small",
                "name": "postgres1",
                "tags": ["postgresql", "sql"],
                "credentials": {
                    "user": "postgres1-user",
                    "password": "postgres1-pass"
                }
            }),
            Fixture::Postgres2 => json!({
                "label": "postgres",
                "plan": "large",
                "name": "postgres2",
                "tags": ["postgresql", "sql", "db"],
                "credentials": {
                    "user": "postgres2-user",
                    "password": "postgres2-pass"
                }
            }),
            Fixture::Redis1 => json!({
                "label": "redis",
                "plan": "small",
                "name": "redis1",
                "credentials": {
                    "user": "redis1-user",
                    "password": "redis1-pass"
                }
            }),
            Fixture::Redis2 => json!({
                "label": "redis",
                "plan": "large",
                "name": "redis2",
                "credentials": {
                    "user": "redis2-user",
                    "password": "redis2-pass"
                }
            }),
        }
    }
}

/// `{ "postgres": [postgres1, postgres2], "redis": [redis1, redis2] }`
pub fn vcap_services() -> Value {
    json!({
        "postgres": [Fixture::Postgres1.record(), Fixture::Postgres2.record()],
        "redis": [Fixture::Redis1.record(), Fixture::Redis2.record()]
    })
}

/// [`vcap_services`] as source text.
pub fn vcap_services_json() -> String {
    vcap_services().to_string()
}

/// Source text for arbitrary groups of records.
pub fn source_json<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = (&'a str, Vec<Value>)>,
{
    let groups: serde_json::Map<String, Value> = groups
        .into_iter()
        .map(|(service_type, records)| (service_type.to_string(), Value::Array(records)))
        .collect();
    Value::Object(groups).to_string()
}
