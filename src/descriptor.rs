//! Type-description grammar.
//!
//! A description is a string such as `string`, `int|string`, `array<string>`,
//! `array<string,int>` or the shorthand `string[]` (= `array<string>`).
//!
//! Known limitation: the top-level splitter does not balance nested generic
//! arguments, so `array<a|array<b>>` splits into `array<a|array<b>` and a
//! stray `>`. Nested generics without a union inside them (e.g.
//! `array<string,array<int>>`) decompose fine.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DescriptorError;

/// Either a top-level `|`, or a `name<...>` span whose pipes are kept.
static OUTER_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^<|]+<[^>]+>)|\|").expect("valid regex"));

/// `type[]`
static ARRAY_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\[]+)\[\]$").expect("valid regex"));

/// Decomposition of a type description. [`TypeDescriptor`] is the default;
/// the validator is generic over this trait so the grammar can be swapped.
pub trait TypeDescriptionParser:
    Clone + fmt::Debug + fmt::Display + Send + Sync + Sized + 'static
{
    fn from_description(description: &str) -> Self;

    fn as_str(&self) -> &str;

    /// Top-level union alternatives, with `T[]` expanded to `array<T>`.
    fn outer_types(&self) -> Vec<Self>;

    /// The name before the first `<`.
    fn outer_type(&self) -> Result<Self, DescriptorError>;

    /// The generic argument, or an empty description.
    fn inner_type_description(&self) -> Self;

    /// `(key, value)` of a generic argument; the key is empty when absent.
    fn key_value_types(&self) -> (Self, Self);

    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    pub fn new(description: impl Into<String>) -> Self {
        TypeDescriptor(description.into())
    }
}

impl TypeDescriptionParser for TypeDescriptor {
    fn from_description(description: &str) -> Self {
        TypeDescriptor::new(description)
    }

    fn as_str(&self) -> &str {
        &self.0
    }

    fn outer_types(&self) -> Vec<Self> {
        split_outer(&self.0)
            .into_iter()
            .map(|split| match ARRAY_SHORTHAND.captures(split) {
                Some(caps) => TypeDescriptor(format!("array<{}>", &caps[1])),
                None => TypeDescriptor::new(split),
            })
            .collect()
    }

    fn outer_type(&self) -> Result<Self, DescriptorError> {
        let name = match self.0.find('<') {
            Some(lt) => &self.0[..lt],
            None => self.0.as_str(),
        };
        if name.is_empty() {
            return Err(DescriptorError::MissingOuterType(self.0.clone()));
        }
        Ok(TypeDescriptor::new(name))
    }

    fn inner_type_description(&self) -> Self {
        match self.0.find('<') {
            Some(lt) if self.0.ends_with('>') => TypeDescriptor::new(&self.0[lt + 1..self.0.len() - 1]),
            _ => TypeDescriptor::default(),
        }
    }

    fn key_value_types(&self) -> (Self, Self) {
        let mut depth = 0usize;
        for (i, c) in self.0.char_indices() {
            match c {
                '<' => depth += 1,
                '>' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    return (TypeDescriptor::new(&self.0[..i]), TypeDescriptor::new(&self.0[i + 1..]));
                }
                _ => {}
            }
        }
        (TypeDescriptor::default(), self.clone())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(description: &str) -> Self {
        TypeDescriptor::new(description)
    }
}

impl PartialEq<&str> for TypeDescriptor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ------------------------------- Helpers --------------------------------- //

/// Split like a delimiter-capturing regex split: text between matches and
/// captured `name<...>` spans are kept, empty pieces dropped.
fn split_outer(description: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for caps in OUTER_SPLIT.captures_iter(description) {
        let Some(whole) = caps.get(0) else { continue };
        let before = &description[last..whole.start()];
        if !before.is_empty() {
            pieces.push(before);
        }
        if let Some(span) = caps.get(1) {
            pieces.push(span.as_str());
        }
        last = whole.end();
    }
    let rest = &description[last..];
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

/// Deepest `<...>` nesting in a description.
pub fn nesting_depth(description: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for c in description.chars() {
        match c {
            '<' => {
                depth += 1;
                max = max.max(depth);
            }
            '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outer(description: &str) -> Vec<String> {
        TypeDescriptor::new(description)
            .outer_types()
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn empty_has_no_alternatives() {
        assert!(outer("").is_empty());
    }

    #[test]
    fn unions_split_outside_brackets() {
        assert_eq!(outer("type"), ["type"]);
        assert_eq!(outer("type1|type2|type3"), ["type1", "type2", "type3"]);
        assert_eq!(outer("array<type1|type2>"), ["array<type1|type2>"]);
        assert_eq!(outer("array<type1|type2>|type3"), ["array<type1|type2>", "type3"]);
        assert_eq!(
            outer("array<type1|type2>|type3|array<type4|type5>|type6"),
            ["array<type1|type2>", "type3", "array<type4|type5>", "type6"]
        );
    }

    #[test]
    fn nested_union_keeps_known_limitation() {
        assert_eq!(outer("array<type1|array<type2>>"), ["array<type1|array<type2>", ">"]);
    }

    #[test]
    fn shorthand_expands_per_alternative() {
        assert_eq!(outer("type[]"), ["array<type>"]);
        assert_eq!(outer("foo|type[]"), ["foo", "array<type>"]);
        assert_eq!(outer("array<type[]>"), ["array<type[]>"]);
    }

    #[test]
    fn key_value_split() {
        let kv = |d: &str| {
            let (k, v) = TypeDescriptor::new(d).key_value_types();
            (k.to_string(), v.to_string())
        };
        assert_eq!(kv(""), ("".into(), "".into()));
        assert_eq!(kv("value"), ("".into(), "value".into()));
        assert_eq!(kv("key,value"), ("key".into(), "value".into()));
        assert_eq!(kv("key,value<key2,value2>"), ("key".into(), "value<key2,value2>".into()));
        assert_eq!(kv("array<int,string>,int"), ("array<int,string>".into(), "int".into()));
    }

    #[test]
    fn outer_and_inner() {
        assert_eq!(TypeDescriptor::new("array").outer_type().unwrap(), "array");
        assert_eq!(TypeDescriptor::new("array<string>").outer_type().unwrap(), "array");
        assert_eq!(TypeDescriptor::new("array<string>").inner_type_description(), "string");
        assert_eq!(
            TypeDescriptor::new("array<string,array<int>>").inner_type_description(),
            "string,array<int>"
        );
        assert!(TypeDescriptor::new("array").inner_type_description().is_empty());
    }

    #[test]
    fn outer_type_needs_a_name() {
        assert_eq!(
            TypeDescriptor::new("<foo>").outer_type(),
            Err(DescriptorError::MissingOuterType("<foo>".into()))
        );
    }

    #[test]
    fn depth() {
        assert_eq!(nesting_depth("string"), 0);
        assert_eq!(nesting_depth("array<string>|array<array<int>>"), 2);
    }
}
