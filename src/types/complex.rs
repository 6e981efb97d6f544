use once_cell::sync::Lazy;
use regex::Regex;

use super::{Type, TypeValidator, expected};
use crate::descriptor::TypeDescriptionParser;
use crate::error::TypeError;
use crate::value::Value;

/// Leading/trailing ASCII whitespace, optional sign, ASCII decimal digits
/// with an optional fraction and exponent. Hex and binary literals are not
/// numeric, and neither are non-ASCII digits or spaces.
static NUMERIC_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$",
    )
    .expect("valid regex")
});

pub fn is_numeric_string(s: &str) -> bool {
    NUMERIC_STRING.is_match(s)
}

/// Accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyType;

impl<P: TypeDescriptionParser> Type<P> for AnyType {
    fn name(&self) -> &str {
        "any"
    }

    fn aliases(&self) -> &[&str] {
        &["mixed"]
    }

    fn validate(&self, _: &dyn TypeValidator<P>, _: &P, _: &Value) -> Result<(), TypeError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CallableType;

impl<P: TypeDescriptionParser> Type<P> for CallableType {
    fn name(&self) -> &str {
        "callable"
    }

    fn validate(&self, _: &dyn TypeValidator<P>, _: &P, value: &Value) -> Result<(), TypeError> {
        match value {
            Value::Callable(_) => Ok(()),
            _ => Err(expected("callable", value)),
        }
    }
}

/// Integer or float.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberType;

impl<P: TypeDescriptionParser> Type<P> for NumberType {
    fn name(&self) -> &str {
        "number"
    }

    fn validate(&self, _: &dyn TypeValidator<P>, _: &P, value: &Value) -> Result<(), TypeError> {
        match value {
            Value::Integer(_) | Value::Float(_) => Ok(()),
            _ => Err(expected("number (float or integer)", value)),
        }
    }
}

/// A number, or a string spelling one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericType;

impl<P: TypeDescriptionParser> Type<P> for NumericType {
    fn name(&self) -> &str {
        "numeric"
    }

    fn validate(&self, _: &dyn TypeValidator<P>, _: &P, value: &Value) -> Result<(), TypeError> {
        match value {
            Value::Integer(_) | Value::Float(_) => Ok(()),
            Value::String(s) if is_numeric_string(s) => Ok(()),
            Value::String(_) => Err(TypeError::mismatch(
                "Expected numeric but received string does not represent a valid number",
            )),
            _ => Err(expected("numeric", value)),
        }
    }
}

/// Any object instance, regardless of class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectType;

impl<P: TypeDescriptionParser> Type<P> for ObjectType {
    fn name(&self) -> &str {
        "object"
    }

    fn validate(&self, _: &dyn TypeValidator<P>, _: &P, value: &Value) -> Result<(), TypeError> {
        match value {
            Value::Object(_) => Ok(()),
            _ => Err(expected("object", value)),
        }
    }
}

/// External handle; `resource<a|b>` restricts the handle kind by exact name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceType;

impl<P: TypeDescriptionParser> Type<P> for ResourceType {
    fn name(&self) -> &str {
        "resource"
    }

    fn validate(&self, _: &dyn TypeValidator<P>, inner: &P, value: &Value) -> Result<(), TypeError> {
        let Value::Resource(resource) = value else {
            return Err(expected("resource", value));
        };
        if inner.is_empty() {
            return Ok(());
        }
        let matched = inner
            .outer_types()
            .iter()
            .any(|kind| kind.as_str() == resource.kind);
        if matched {
            Ok(())
        } else {
            Err(TypeError::mismatch(format!(
                "Expected resource of type {inner} but {} received",
                resource.kind
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgumentValidator;
    use crate::descriptor::TypeDescriptor;

    fn check<T: Type>(ty: T, inner: &str, value: Value) -> Result<(), TypeError> {
        let engine = ArgumentValidator::new();
        ty.validate(&engine, &TypeDescriptor::new(inner), &value)
    }

    #[test]
    fn numeric_strings() {
        for s in ["1", "-1", "+1.5", "1e3", ".5", "5.", " 42 ", "\t7\n", "1.5E-3"] {
            assert!(is_numeric_string(s), "{s:?} should be numeric");
        }
        for s in [
            "", "abc", "0x1A", "1e", "1 2", "--1", ".", "１２", "\u{a0}1", "1\u{a0}", "١٢٣",
        ] {
            assert!(!is_numeric_string(s), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn numeric_messages() {
        assert!(check(NumericType, "", Value::from("12.5")).is_ok());
        assert!(check(NumericType, "", Value::Float(1.0)).is_ok());
        assert_eq!(
            check(NumericType, "", Value::from("abc")),
            Err(TypeError::mismatch(
                "Expected numeric but received string does not represent a valid number"
            ))
        );
        assert_eq!(
            check(NumericType, "", Value::Bool(true)),
            Err(TypeError::mismatch("Expected numeric but boolean received"))
        );
    }

    #[test]
    fn numeric_rejects_non_ascii_digits_and_spaces() {
        for s in ["１２", "\u{a0}1", "١٢٣"] {
            assert_eq!(
                check(NumericType, "", Value::from(s)),
                Err(TypeError::mismatch(
                    "Expected numeric but received string does not represent a valid number"
                )),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn number_rejects_numeric_strings() {
        assert_eq!(
            check(NumberType, "", Value::from("1")),
            Err(TypeError::mismatch("Expected number (float or integer) but string received"))
        );
    }

    #[test]
    fn resource_kinds() {
        let stream = Value::resource("stream", 3);
        assert!(check(ResourceType, "", stream.clone()).is_ok());
        assert!(check(ResourceType, "stream", stream.clone()).is_ok());
        assert!(check(ResourceType, "unknown|stream", stream.clone()).is_ok());
        assert_eq!(
            check(ResourceType, "randomtype", stream),
            Err(TypeError::mismatch("Expected resource of type randomtype but stream received"))
        );
        assert_eq!(
            check(ResourceType, "", Value::Integer(1)),
            Err(TypeError::mismatch("Expected resource but integer received"))
        );
    }

    #[test]
    fn object_and_callable() {
        assert!(check(ObjectType, "", Value::object("Foo")).is_ok());
        assert!(check(CallableType, "", Value::callable("strlen")).is_ok());
        assert_eq!(
            check(CallableType, "", Value::from("strlen")),
            Err(TypeError::mismatch("Expected callable but string received"))
        );
        assert!(check(AnyType, "", Value::Null).is_ok());
    }
}
