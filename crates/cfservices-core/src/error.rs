use thiserror::Error;

/// Coarse classification of a [`ServicesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source variable is missing or could not be read as bindings.
    SourceUnavailable,
    /// A strict lookup matched nothing.
    NotFound,
    /// A strict lookup matched more than one binding.
    AmbiguousMatch,
}

#[derive(Error, Debug)]
pub enum ServicesError {
    #[error("Environment variable {variable} is not defined")]
    SourceUndefined { variable: String },

    #[error("Could not parse environment variable {variable}: {details}")]
    SourceParse { variable: String, details: String },

    #[error("Environment variable {variable} has an unexpected shape: {details}")]
    SourceShape { variable: String, details: String },

    #[error("No service instance with name {name}")]
    NoInstanceNamed { name: String },

    #[error("No service instance matches {description}")]
    NoMatch { description: String },

    #[error("Multiple service instances match {description}: {}", .names.join(", "))]
    AmbiguousMatch {
        description: String,
        names: Vec<String>,
    },
}

impl ServicesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServicesError::SourceUndefined { .. }
            | ServicesError::SourceParse { .. }
            | ServicesError::SourceShape { .. } => ErrorKind::SourceUnavailable,
            ServicesError::NoInstanceNamed { .. } | ServicesError::NoMatch { .. } => {
                ErrorKind::NotFound
            }
            ServicesError::AmbiguousMatch { .. } => ErrorKind::AmbiguousMatch,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServicesError>;
