//! Parse the bindings source and flatten it into a [`BindingSet`].
//!
//! The platform groups bindings by service type:
//!
//! ```json
//! { "postgres": [ { "name": "postgres1", ... } ], "redis": [ ... ] }
//! ```
//!
//! Flattening walks the groups in source order, keeps every record that
//! carries a `name` and keys it by that name.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::binding::{Binding, BindingSet};
use crate::config::ShapePolicy;
use crate::error::{Result, ServicesError};
use crate::source::Source;

/// Read `source` and build a fresh binding set from it.
pub fn load_source(source: &Source, policy: ShapePolicy) -> Result<BindingSet> {
    let text = source.read()?;
    load(source.label(), &text, policy)
}

/// Parse `text` and flatten it. `label` names the source in errors.
pub fn load(label: &str, text: &str, policy: ShapePolicy) -> Result<BindingSet> {
    let parsed: Value = serde_json::from_str(text).map_err(|e| ServicesError::SourceParse {
        variable: label.to_string(),
        details: e.to_string(),
    })?;

    let groups = match parsed {
        Value::Object(groups) => groups,
        other => {
            return shape_mismatch(
                label,
                policy,
                format!(
                    "expected an object of service groups, found {}",
                    type_name(&other)
                ),
            )
        }
    };

    let total_groups = groups.len();
    let mut array_groups = 0usize;
    let mut bindings = BindingSet::new();

    for (service_type, group) in groups {
        let Value::Array(records) = group else {
            trace!("Skipping non-array service group '{}'", service_type);
            continue;
        };
        array_groups += 1;

        for record in records {
            match Binding::from_value(record) {
                Some(binding) => bindings.insert(binding),
                None => trace!("Discarding nameless record in group '{}'", service_type),
            }
        }
    }

    // `{}` is the legitimate "nothing bound yet" case.
    if array_groups < total_groups {
        let details = format!(
            "{} of {} service groups are not arrays",
            total_groups - array_groups,
            total_groups
        );
        if policy == ShapePolicy::Strict || array_groups == 0 {
            return shape_mismatch(label, policy, details);
        }
        warn!("{}: {}; they were skipped", label, details);
    }

    debug!(
        "Loaded {} service bindings from {} groups in {}",
        bindings.len(),
        array_groups,
        label
    );
    Ok(bindings)
}

fn shape_mismatch(label: &str, policy: ShapePolicy, details: String) -> Result<BindingSet> {
    match policy {
        ShapePolicy::Permissive => {
            warn!(
                "{} is not shaped like service bindings ({}); treating as empty",
                label, details
            );
            Ok(BindingSet::new())
        }
        ShapePolicy::Strict => Err(ServicesError::SourceShape {
            variable: label.to_string(),
            details,
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const LABEL: &str = "VCAP_SERVICES";

    fn permissive(text: &str) -> Result<BindingSet> {
        load(LABEL, text, ShapePolicy::Permissive)
    }

    fn strict(text: &str) -> Result<BindingSet> {
        load(LABEL, text, ShapePolicy::Strict)
    }

    #[test]
    fn test_flattens_groups_in_source_order() {
        let set = permissive(
            r#"{
                "redis": [{"name": "redis1"}, {"name": "redis2"}],
                "postgres": [{"name": "postgres1"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["redis1", "redis2", "postgres1"]
        );
    }

    #[test]
    fn test_discards_nameless_records() {
        let set = permissive(r#"{"s3": [{"label": "s3"}, "junk", 4, {"name": "bucket"}]}"#).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["bucket"]);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = permissive("ala-bala").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert!(err.to_string().starts_with("Could not parse environment variable VCAP_SERVICES:"));
    }

    #[test]
    fn test_empty_text_is_a_parse_error() {
        assert!(matches!(
            strict("").unwrap_err(),
            ServicesError::SourceParse { .. }
        ));
    }

    #[test]
    fn test_permissive_degrades_wrong_shapes() {
        assert!(permissive("5").unwrap().is_empty());
        assert!(permissive("null").unwrap().is_empty());
        assert!(permissive(r#"[{"name": "a"}]"#).unwrap().is_empty());
        assert!(permissive(r#"{ "a":"x", "b":"y" }"#).unwrap().is_empty());
    }

    #[test]
    fn test_permissive_skips_stray_groups() {
        let set = permissive(r#"{"a": "x", "redis": [{"name": "redis1"}]}"#).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["redis1"]);
    }

    #[test]
    fn test_strict_rejects_wrong_shapes() {
        for text in ["5", r#"{ "a":"x", "b":"y" }"#, r#"{"a": "x", "redis": []}"#] {
            let err = strict(text).unwrap_err();
            assert!(
                matches!(err, ServicesError::SourceShape { .. }),
                "expected shape error for {}",
                text
            );
            assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        }
    }

    #[test]
    fn test_empty_object_is_empty_under_both_policies() {
        assert!(permissive("{}").unwrap().is_empty());
        assert!(strict("{}").unwrap().is_empty());
    }

    #[test]
    fn test_load_source_reads_inline_text() {
        let source = Source::inline("inline", r#"{"redis": [{"name": "r"}]}"#);
        let set = load_source(&source, ShapePolicy::Permissive).unwrap();
        assert_eq!(set.len(), 1);
    }
}
