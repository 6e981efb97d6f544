use super::{Type, TypeValidator, expected};
use crate::descriptor::TypeDescriptionParser;
use crate::error::TypeError;
use crate::value::Value;

/// `array`, `array<V>` or `array<K,V>`. Stops at the first failing entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayType;

impl<P: TypeDescriptionParser> Type<P> for ArrayType {
    fn name(&self) -> &str {
        "array"
    }

    fn validate(
        &self,
        validator: &dyn TypeValidator<P>,
        inner: &P,
        value: &Value,
    ) -> Result<(), TypeError> {
        let Value::Array(entries) = value else {
            return Err(expected("array", value));
        };
        if inner.is_empty() {
            return Ok(());
        }

        let (key_type, value_type) = inner.key_value_types();

        // position is only for the message
        for (position, (key, item)) in entries.iter().enumerate() {
            if !key_type.is_empty() {
                validator
                    .validate_type_descriptor(&key_type, &key.to_value())
                    .map_err(|e| e.map_mismatch(|m| format!("Error in key #{position}: {m}")))?;
            }
            validator
                .validate_type_descriptor(&value_type, item)
                .map_err(|e| {
                    e.map_mismatch(|m| format!("Error in value at key #{position} ('{key}'): {m}"))
                })?;
        }
        Ok(())
    }
}
