//! Type validators.
//!
//! A [`Type`] checks one value against one registered type name. It receives
//! the generic argument of the description (`string` for `array<string>`)
//! and the engine, so collection types can dispatch their elements back
//! through [`TypeValidator::validate_type_descriptor`].
pub mod array;
pub mod complex;
pub mod scalar;

use crate::descriptor::{TypeDescriptionParser, TypeDescriptor};
use crate::error::TypeError;
use crate::value::Value;

pub use array::ArrayType;
pub use complex::{AnyType, CallableType, NumberType, NumericType, ObjectType, ResourceType};
pub use scalar::{BoolType, FloatType, IntegerType, StringType};

/// Recursive entry point handed to every [`Type`].
pub trait TypeValidator<P: TypeDescriptionParser = TypeDescriptor> {
    fn validate_type_descriptor(&self, descriptor: &P, value: &Value) -> Result<(), TypeError>;
}

pub trait Type<P: TypeDescriptionParser = TypeDescriptor>: Send + Sync {
    fn name(&self) -> &str;

    /// Additional names the type registers under.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn validate(
        &self,
        validator: &dyn TypeValidator<P>,
        inner: &P,
        value: &Value,
    ) -> Result<(), TypeError>;
}

/// `Expected <kind> but <actual> received`
pub(crate) fn expected(kind: &str, value: &Value) -> TypeError {
    TypeError::mismatch(format!("Expected {kind} but {} received", value.kind()))
}
