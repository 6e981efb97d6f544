//! Fail-soft structural type checking of named runtime values.
//!
//! Parameters declare a type description (`string`, `int|string`,
//! `array<string,int>`, `Foo[]`, `resource<stream>`, a class name, ...);
//! [`ArgumentValidator::validate`] checks a map of arguments against them
//! and returns human-readable diagnostics instead of failing on the first
//! mismatch.
//!
//! - [`descriptor`]: the type-description grammar
//! - [`types`]: built-in validators and the [`Type`] trait for custom ones
//! - [`registry`]: name → validators, several per name allowed
//! - [`engine`]: the validator itself
//! - [`extract`]: `@var`/`@param` declarations from documentation text
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod extract;
pub mod options;
pub mod parameter;
pub mod path_de;
pub mod registry;
pub mod types;
pub mod value;

pub use descriptor::{TypeDescriptionParser, TypeDescriptor};
pub use engine::{ArgumentValidator, Arguments};
pub use error::{DescriptorError, ExtractionError, LoadError, TypeError, ValidationError};
pub use extract::extract;
pub use options::ValidatorOptions;
pub use parameter::Parameter;
pub use path_de::{arguments_from_json, parameters_from_json};
pub use registry::TypeRegistry;
pub use types::{Type, TypeValidator};
pub use value::{Callable, Instance, Key, Resource, Value};
