use serde::Deserialize;

use crate::error::LoadError;
use crate::path_de::from_str_with_path;

// ------------------------------- Policy ---------------------------------- //

const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOptions {
    /// Report arguments that have no declared parameter.
    pub strict_unknown_arguments: bool,
    /// Deepest `<...>` nesting a type description may have.
    pub max_nesting_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        ValidatorOptions {
            strict_unknown_arguments: true,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ValidatorOptions {
    pub fn lenient() -> Self {
        ValidatorOptions { strict_unknown_arguments: false, ..Self::default() }
    }

    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        from_str_with_path(src)
    }
}
