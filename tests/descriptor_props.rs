use argument_validation::{TypeDescriptionParser, TypeDescriptor};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

proptest! {
    #[test]
    fn plain_unions_split_into_their_names(names in prop::collection::vec(name(), 1..6)) {
        let description = names.join("|");
        let split: Vec<String> = TypeDescriptor::new(description.as_str())
            .outer_types()
            .iter()
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(split, names);
    }

    #[test]
    fn shorthand_matches_long_form(a in name(), b in name()) {
        let short = TypeDescriptor::new(format!("{a}|{b}[]")).outer_types();
        let long = TypeDescriptor::new(format!("{a}|array<{b}>")).outer_types();
        prop_assert_eq!(short, long);
    }

    #[test]
    fn generic_decomposes(outer in name(), key in name(), value in name()) {
        let d = TypeDescriptor::new(format!("{outer}<{key},{value}>"));
        prop_assert_eq!(d.outer_type().unwrap(), TypeDescriptor::new(outer.as_str()));
        let (k, v) = d.inner_type_description().key_value_types();
        prop_assert_eq!(k.as_str(), key.as_str());
        prop_assert_eq!(v.as_str(), value.as_str());
    }

    #[test]
    fn pipes_inside_generics_are_kept(outer in name(), a in name(), b in name(), c in name()) {
        let generic = format!("{outer}<{a}|{b}>");
        let split = TypeDescriptor::new(format!("{generic}|{c}")).outer_types();
        prop_assert_eq!(split, vec![TypeDescriptor::new(generic), TypeDescriptor::new(c)]);
    }
}
