use serde::Deserialize;

/// A declared parameter: name, type description and whether it may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    type_description: String,
    #[serde(default)]
    optional: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_description: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            type_description: type_description.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, type_description: impl Into<String>) -> Self {
        Parameter { optional: true, ..Parameter::new(name, type_description) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_description(&self) -> &str {
        &self.type_description
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}
