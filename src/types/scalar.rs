//! Single runtime-kind checks. Generic arguments are accepted and ignored.
use super::{Type, TypeValidator, expected};
use crate::descriptor::TypeDescriptionParser;
use crate::error::TypeError;
use crate::value::Value;

macro_rules! scalar_type {
    ($(#[$meta:meta])* $ty:ident, $name:literal, [$($alias:literal),*], $pat:pat) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl<P: TypeDescriptionParser> Type<P> for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn aliases(&self) -> &[&str] {
                &[$($alias),*]
            }

            fn validate(
                &self,
                _validator: &dyn TypeValidator<P>,
                _inner: &P,
                value: &Value,
            ) -> Result<(), TypeError> {
                match value {
                    $pat => Ok(()),
                    _ => Err(expected($name, value)),
                }
            }
        }
    };
}

scalar_type!(
    /// `bool`, alias `boolean`.
    BoolType, "bool", ["boolean"], Value::Bool(_)
);
scalar_type!(
    /// `float`, alias `double`. Integers are not floats.
    FloatType, "float", ["double"], Value::Float(_)
);
scalar_type!(
    /// `integer`, alias `int`.
    IntegerType, "integer", ["int"], Value::Integer(_)
);
scalar_type!(StringType, "string", [], Value::String(_));
