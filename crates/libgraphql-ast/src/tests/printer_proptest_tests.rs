use crate::parse_operation;
use crate::print_document;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_]{0,8}")
        .expect("valid regex")
        .prop_filter("not a keyword", |name| {
            !matches!(
                name.as_str(),
                "query" | "mutation" | "subscription" | "fragment" | "on" | "true" | "false" | "null"
            )
        })
}

fn selection_set_strategy() -> impl Strategy<Value = String> {
    let leaf = name_strategy();
    leaf.prop_recursive(4, 32, 4, |inner| {
        (name_strategy(), prop::collection::vec(inner, 1..4))
            .prop_map(|(name, children)| format!("{name} {{ {} }}", children.join(" ")))
    })
}

proptest! {
    /// Verifies that canonical printing is a fixed point: printing the
    /// parse of a canonical print reproduces it.
    #[test]
    fn canonical_print_is_stable(selections in prop::collection::vec(selection_set_strategy(), 1..4)) {
        let source = format!("{{ {} }}", selections.join(" "));
        let printed = print_document(&parse_operation(&source).unwrap());
        let reprinted = print_document(&parse_operation(&printed).unwrap());
        prop_assert_eq!(printed, reprinted);
    }

    #[test]
    fn generated_variable_names_are_unused(declared in prop::collection::btree_set("[a-c]{1,2}", 0..8)) {
        let definitions = declared
            .iter()
            .map(|name| format!("${name}: Int"))
            .collect::<Vec<_>>()
            .join(", ");
        let source = if declared.is_empty() {
            "query Q { a }".to_string()
        } else {
            format!("query Q({definitions}) {{ a }}")
        };
        let mut doc = parse_operation(&source).unwrap();
        doc.input.set_variable("zz", serde_json::json!(1));
        let operation = doc.operation_definition_refs().next().unwrap();

        let generated = doc.generate_unused_variable_definition_name(operation);
        prop_assert!(!declared.contains(&generated));
        prop_assert_ne!(generated.as_str(), "zz");
        prop_assert!(doc.variable_definition_by_name(operation, &generated).is_none());
    }
}
