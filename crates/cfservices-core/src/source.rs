//! Where the raw bindings text comes from.

use std::env;

use crate::error::{Result, ServicesError};

/// A bindings source.
///
/// `Env` is the production path; `Inline` lets callers hand over text they
/// already hold without touching process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read the named environment variable on every call.
    Env(String),
    /// Fixed text, reported under `label` in error messages.
    Inline { label: String, text: String },
}

impl Source {
    pub fn env(variable: impl Into<String>) -> Self {
        Source::Env(variable.into())
    }

    pub fn inline(label: impl Into<String>, text: impl Into<String>) -> Self {
        Source::Inline {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Name used when reporting problems with this source.
    pub fn label(&self) -> &str {
        match self {
            Source::Env(variable) => variable,
            Source::Inline { label, .. } => label,
        }
    }

    /// Fetch the current text.
    ///
    /// An unset variable and one holding non-unicode data are both reported
    /// as [`ServicesError::SourceUndefined`]. An empty value is returned as-is
    /// and fails later at parse time.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Env(variable) => env::var(variable).map_err(|_| {
                ServicesError::SourceUndefined {
                    variable: variable.clone(),
                }
            }),
            Source::Inline { text, .. } => Ok(text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_inline_reads_text() {
        let source = Source::inline("fixture", "{}");
        assert_eq!(source.label(), "fixture");
        assert_eq!(source.read().unwrap(), "{}");
    }

    #[test]
    fn test_env_missing() {
        let source = Source::env("CFSERVICES_SOURCE_TEST_UNSET");
        let err = source.read().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert!(err.to_string().contains("CFSERVICES_SOURCE_TEST_UNSET"));
    }

    #[test]
    fn test_env_present() {
        env::set_var("CFSERVICES_SOURCE_TEST_SET", "5");
        let source = Source::env("CFSERVICES_SOURCE_TEST_SET");
        assert_eq!(source.label(), "CFSERVICES_SOURCE_TEST_SET");
        assert_eq!(source.read().unwrap(), "5");
    }
}
