//! Pull parameter declarations out of documentation text.
//!
//! Looks for `@var <type> $<name>` or `@param <type> $<name>`; a leading `?`
//! (`?@var`, `?@param`) marks the parameter optional. The surrounding text
//! is not otherwise parsed.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractionError;
use crate::parameter::Parameter;

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<decl>\??@(?:var|param))\s+(?P<types>\S+)\s+\$(?P<name>\S+)").expect("valid regex")
});

/// Declarations in order of appearance. Every name declared twice is
/// collected and reported in one error.
pub fn extract(text: &str) -> Result<Vec<Parameter>, ExtractionError> {
    let mut parameters: Vec<Parameter> = Vec::new();
    let mut duplicates = Vec::new();

    for caps in DECLARATION.captures_iter(text) {
        let name = &caps["name"];
        if parameters.iter().any(|p| p.name() == name) {
            duplicates.push(name.to_string());
            continue;
        }
        let type_description = &caps["types"];
        parameters.push(if caps["decl"].starts_with('?') {
            Parameter::optional(name, type_description)
        } else {
            Parameter::new(name, type_description)
        });
    }

    if !duplicates.is_empty() {
        return Err(ExtractionError::DuplicateDefinitions(duplicates));
    }
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        assert_eq!(extract("@var string $name").unwrap(), vec![Parameter::new("name", "string")]);
        assert_eq!(
            extract("?@var string $name").unwrap(),
            vec![Parameter::optional("name", "string")]
        );
    }

    #[test]
    fn in_docblock() {
        let doc = "/**\n * @var type $name\n * ?@param type2 $name2 Description\n */";
        assert_eq!(
            extract(doc).unwrap(),
            vec![Parameter::new("name", "type"), Parameter::optional("name2", "type2")]
        );
    }

    #[test]
    fn leading_backslash_stays() {
        assert_eq!(extract("@var \\type $name").unwrap(), vec![Parameter::new("name", "\\type")]);
    }

    #[test]
    fn duplicates_are_all_collected() {
        let doc = "@var int $a\n@var int $b\n?@var string $a\n@param bool $b\n@var int $c";
        assert_eq!(
            extract(doc),
            Err(ExtractionError::DuplicateDefinitions(vec!["a".into(), "b".into()]))
        );
        assert_eq!(
            extract(doc).unwrap_err().to_string(),
            "Multiple definitions for: a, b"
        );
    }

    #[test]
    fn no_declarations() {
        assert!(extract("just prose, no tags").unwrap().is_empty());
    }
}
