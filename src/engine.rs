//! The argument validator.
//!
//! ```
//! use argument_validation::{ArgumentValidator, Arguments, Parameter, Value};
//!
//! let validator = ArgumentValidator::new();
//! let parameters = [Parameter::new("name", "string")];
//! let mut arguments = Arguments::new();
//! arguments.insert("name".into(), Value::from("foobar"));
//!
//! let errors = validator.validate(&parameters, &arguments).unwrap();
//! assert!(errors.is_empty());
//! ```
use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::descriptor::{TypeDescriptionParser, TypeDescriptor, nesting_depth};
use crate::error::{DescriptorError, TypeError, ValidationError};
use crate::options::ValidatorOptions;
use crate::parameter::Parameter;
use crate::registry::TypeRegistry;
use crate::types::{Type, TypeValidator};
use crate::value::Value;

/// Named argument values, in call order.
pub type Arguments = IndexMap<String, Value>;

/// How a type name is checked.
enum Resolution<'a, P: TypeDescriptionParser> {
    Registered(&'a [std::sync::Arc<dyn Type<P>>]),
    ClassInstance(&'a str),
}

#[derive(Debug)]
pub struct ArgumentValidator<P: TypeDescriptionParser = TypeDescriptor> {
    registry: TypeRegistry<P>,
    options: ValidatorOptions,
}

impl ArgumentValidator {
    /// Built-in types, unknown arguments reported.
    pub fn new() -> Self {
        Self::with_parser(ValidatorOptions::default())
    }

    /// Built-in types, unknown arguments ignored.
    pub fn lenient() -> Self {
        Self::with_parser(ValidatorOptions::lenient())
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self::with_parser(options)
    }
}

impl Default for ArgumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TypeDescriptionParser> ArgumentValidator<P> {
    /// Validator using a custom description grammar `P`.
    pub fn with_parser(options: ValidatorOptions) -> Self {
        ArgumentValidator { registry: TypeRegistry::with_defaults(), options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn registry(&self) -> &TypeRegistry<P> {
        &self.registry
    }

    /// Register a type under its name and aliases.
    pub fn register_type(&mut self, ty: impl Type<P> + 'static) -> &mut Self {
        self.registry.register(ty);
        self
    }

    /// Register a type under `name` only.
    pub fn register_type_as(&mut self, ty: impl Type<P> + 'static, name: &str) -> &mut Self {
        self.registry.register_as(ty, name);
        self
    }

    /// Check `arguments` against `parameters`.
    ///
    /// The returned list is empty when every argument conforms. Duplicate
    /// parameter names and malformed type descriptions are reported as
    /// `Err` before or instead of any diagnostics.
    pub fn validate(
        &self,
        parameters: &[Parameter],
        arguments: &Arguments,
    ) -> Result<Vec<String>, ValidationError> {
        let indexed = index_parameters_by_name(parameters)?;

        let mut errors = Vec::new();
        if self.options.strict_unknown_arguments {
            errors.extend(unknown_arguments(&indexed, arguments));
        }
        errors.extend(self.validate_params(parameters, arguments)?);

        debug!(
            parameters = parameters.len(),
            arguments = arguments.len(),
            diagnostics = errors.len(),
            "validated arguments"
        );
        Ok(errors)
    }

    fn validate_params(
        &self,
        parameters: &[Parameter],
        arguments: &Arguments,
    ) -> Result<Vec<String>, ValidationError> {
        let mut errors = Vec::new();

        for param in parameters {
            let name = param.name();
            let Some(value) = arguments.get(name) else {
                if !param.is_optional() {
                    errors.push(format!(
                        "Required argument ${name} of type {} is missing",
                        param.type_description()
                    ));
                }
                continue;
            };

            let alternatives = P::from_description(param.type_description()).outer_types();
            let mut failures = Vec::new();
            for alternative in &alternatives {
                match self.validate_type_descriptor(alternative, value) {
                    Ok(()) => trace!(parameter = name, alternative = %alternative, "matched"),
                    Err(TypeError::Mismatch(message)) => {
                        trace!(parameter = name, alternative = %alternative, %message, "rejected");
                        failures.push(format!(
                            "Argument ${name} does not match type '{alternative}': {message}"
                        ));
                    }
                    Err(TypeError::Descriptor(e)) => return Err(e.into()),
                }
            }

            // A single type reports its own error; a union only says that
            // none of its alternatives matched.
            if alternatives.len() == 1 {
                errors.append(&mut failures);
            } else if failures.len() == alternatives.len() {
                errors.push(format!(
                    "Parameter ${name}: did not match type declaration \"{}\"",
                    param.type_description()
                ));
            }
        }

        Ok(errors)
    }

    fn resolve<'a>(&'a self, name: &'a str) -> Resolution<'a, P> {
        match self.registry.lookup(name) {
            Some(types) => Resolution::Registered(types),
            None => Resolution::ClassInstance(name),
        }
    }

    fn check_depth(&self, descriptor: &P) -> Result<(), DescriptorError> {
        let max = self.options.max_nesting_depth;
        if nesting_depth(descriptor.as_str()) > max {
            return Err(DescriptorError::TooDeep { description: descriptor.to_string(), max });
        }
        Ok(())
    }
}

impl<P: TypeDescriptionParser> TypeValidator<P> for ArgumentValidator<P> {
    fn validate_type_descriptor(&self, descriptor: &P, value: &Value) -> Result<(), TypeError> {
        self.check_depth(descriptor)?;
        let outer = descriptor.outer_type()?;
        let inner = descriptor.inner_type_description();

        match self.resolve(outer.as_str()) {
            Resolution::ClassInstance(class) => validate_class_instance(class, &inner, value),
            Resolution::Registered(types) => {
                let mut first_error = None;
                for ty in types {
                    match ty.validate(self, &inner, value) {
                        Ok(()) => return Ok(()),
                        Err(e @ TypeError::Descriptor(_)) => return Err(e),
                        Err(e) if first_error.is_none() => first_error = Some(e),
                        Err(_) => {}
                    }
                }
                match first_error {
                    Some(e) => Err(e),
                    None => Ok(()),
                }
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn index_parameters_by_name(parameters: &[Parameter]) -> Result<HashSet<&str>, ValidationError> {
    let mut names = HashSet::with_capacity(parameters.len());
    for param in parameters {
        if !names.insert(param.name()) {
            return Err(ValidationError::DuplicateParameter(param.name().to_string()));
        }
    }
    Ok(names)
}

fn unknown_arguments(declared: &HashSet<&str>, arguments: &Arguments) -> Vec<String> {
    arguments
        .iter()
        .filter(|(name, _)| !declared.contains(name.as_str()))
        .map(|(name, value)| {
            format!("No parameter definition for argument ${name} of type {}", value.kind())
        })
        .collect()
}

/// Unregistered names are class names.
fn validate_class_instance<P: TypeDescriptionParser>(
    class: &str,
    inner: &P,
    value: &Value,
) -> Result<(), TypeError> {
    if !inner.is_empty() {
        return Err(TypeError::mismatch(format!(
            "Cannot handle {class}<{inner}> in a generic way, this requires a type implementation for {class}"
        )));
    }
    let Value::Object(instance) = value else {
        return Err(TypeError::mismatch(format!(
            "Expected instance of {class} but received {}",
            value.kind()
        )));
    };
    if !instance.instance_of(class) {
        return Err(TypeError::mismatch(format!(
            "{} not an instance of {class}",
            instance.class
        )));
    }
    Ok(())
}
