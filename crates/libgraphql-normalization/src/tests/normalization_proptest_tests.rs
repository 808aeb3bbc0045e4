use crate::OperationNormalizer;
use crate::passes::InputCoercionForList;
use crate::tests::test_utils::LIST_COERCION_SCHEMA;
use crate::tests::test_utils::pets_schema;
use crate::tests::test_utils::reprint;
use crate::tests::test_utils::schema;
use crate::tests::test_utils::walk_visitor;
use indexmap::IndexSet;
use libgraphql_ast::Document;
use libgraphql_ast::Report;
use libgraphql_ast::Selection;
use libgraphql_ast::parse_operation;
use libgraphql_ast::print_document;
use libgraphql_ast::refs::SelectionSetRef;
use proptest::prelude::*;

/// Selections valid on `Dog`, with duplicates, self-aliases and inline
/// fragments that always apply.
fn dog_selection_strategy() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec![
        "name",
        "nickname",
        "barkVolume",
        "name: name",
        "owner { name }",
        "owner { pets { name } }",
        "extra { string }",
        "extra { noString }",
    ])
    .prop_map(str::to_owned);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|selections| format!("... on Dog {{ {} }}", selections.join(" "))),
            pet_selection_strategy()
                .prop_map(|selections| format!("... on Pet {{ {} }}", selections.join(" "))),
            prop::collection::vec(inner, 1..4)
                .prop_map(|selections| format!("... {{ {} }}", selections.join(" "))),
        ]
    })
}

/// Selections valid on `Pet`, which only declares `name`.
fn pet_selection_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["name", "name: name"]), 1..3)
}

fn normalize(definition: &Document, source: &str) -> Document {
    let mut operation = parse_operation(source).unwrap();
    let mut report = Report::default();
    OperationNormalizer::default().normalize_operation(&mut operation, definition, &mut report);
    assert!(!report.has_errors(), "{report}");
    operation
}

/// Whether every set under `set` is free of inline fragments and repeated
/// response keys.
fn selection_sets_are_flat(doc: &Document, set: SelectionSetRef) -> bool {
    let mut keys = IndexSet::new();
    for selection in &doc[set].selections {
        let Selection::Field(field) = doc[*selection] else {
            return false;
        };
        if !keys.insert(doc.field_response_key(field)) {
            return false;
        }
        let Some(child) = doc[field].selection_set else {
            continue;
        };
        if !selection_sets_are_flat(doc, child) {
            return false;
        }
    }
    true
}

proptest! {
    #[test]
    fn normalization_is_idempotent(selections in prop::collection::vec(dog_selection_strategy(), 1..6)) {
        let definition = pets_schema();
        let source = format!("{{ dog {{ {} }} }}", selections.join(" "));
        let mut operation = normalize(&definition, &source);
        let once = print_document(&operation);

        let mut report = Report::default();
        OperationNormalizer::default().normalize_operation(&mut operation, &definition, &mut report);
        prop_assert!(!report.has_errors());
        prop_assert_eq!(print_document(&operation), once);
    }

    /// Verifies that resolving and merging leave one field per response key
    /// at every level, whatever the order selections were written in.
    #[test]
    fn normalized_selection_sets_have_unique_response_keys(
        selections in prop::collection::vec(dog_selection_strategy(), 1..6),
    ) {
        let definition = pets_schema();
        let source = format!("{{ dog {{ {} }} dog {{ {} }} }}", selections.join(" "), selections.join(" "));
        let operation = normalize(&definition, &source);
        let root = operation.operation_definition_refs().next().unwrap();

        prop_assert!(selection_sets_are_flat(&operation, operation[root].selection_set));
        prop_assert_eq!(operation[operation[root].selection_set].selections.len(), 1);
    }

    #[test]
    fn list_coercion_wraps_each_item_and_is_stable(ids in prop::collection::vec(0..1000i64, 1..6)) {
        let definition = schema(LIST_COERCION_SCHEMA);
        let listed = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(", ");
        let wrapped = ids.iter().map(|id| format!("[{id}]")).collect::<Vec<_>>().join(", ");
        let source = format!("{{ charactersByNestedIds(ids: [{listed}]) {{ id }} }}");
        let expected = reprint(&format!("{{ charactersByNestedIds(ids: [{wrapped}]) {{ id }} }}"));

        let (operation, report) = walk_visitor(InputCoercionForList, &definition, &source, "");
        prop_assert!(!report.has_errors());
        let coerced = print_document(&operation);
        prop_assert_eq!(&coerced, &expected);

        let (operation, report) = walk_visitor(InputCoercionForList, &definition, &coerced, "");
        prop_assert!(!report.has_errors());
        prop_assert_eq!(print_document(&operation), expected);
    }
}
