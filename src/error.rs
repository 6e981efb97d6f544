//! Error types.
//!
//! Two channels never meet: routine type mismatches travel as [`TypeError`]
//! inside the engine and end up as diagnostic text, everything else is a
//! setup error handed back to the caller instead of a diagnostic list.
use thiserror::Error;

/// A type description that cannot be decomposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Unable to extract outer most type from '{0}'")]
    MissingOuterType(String),

    #[error("Type description '{description}' exceeds the maximum nesting depth of {max}")]
    TooDeep { description: String, max: usize },
}

/// Failure of a single type check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The value does not conform; the message ends up in a diagnostic.
    #[error("{0}")]
    Mismatch(String),

    /// The description itself is malformed; never turned into a diagnostic.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

impl TypeError {
    pub fn mismatch(message: impl Into<String>) -> Self {
        TypeError::Mismatch(message.into())
    }

    /// Rewrites a mismatch message, leaving descriptor errors untouched.
    pub(crate) fn map_mismatch(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            TypeError::Mismatch(message) => TypeError::Mismatch(f(message)),
            other => other,
        }
    }
}

/// Setup errors of [`crate::ArgumentValidator::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate parameter definition for ${0}")]
    DuplicateParameter(String),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// Parameter extraction found the same name declared more than once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Multiple definitions for: {}", .0.join(", "))]
    DuplicateDefinitions(Vec<String>),
}

/// Loading declarations, arguments or options from JSON text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("at JSON path {path} → {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON object of arguments but found {0}")]
    NotAnObject(String),
}
