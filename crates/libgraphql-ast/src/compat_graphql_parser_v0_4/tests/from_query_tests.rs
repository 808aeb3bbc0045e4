use crate::DocumentParseError;
use crate::Node;
use crate::OperationType;
use crate::Position;
use crate::Selection;
use crate::Value;
use crate::compat_graphql_parser_v0_4::import_query_document;
use crate::parse_operation;
use crate::parse_operation_into;

/// Verifies that positions are carried over from the parser, 1-based.
#[test]
fn positions_are_kept() {
    let doc = parse_operation("query Q($a: Int) {\n  dog @skip(if: $a) {\n    ...F\n  }\n}").unwrap();
    let operation = doc.operation_definition_refs().next().unwrap();
    assert_eq!(doc[operation].position, Position::new(1, 1));

    let variable = doc[operation].variable_definitions[0];
    assert_eq!(doc[variable].position, Position::new(1, 9));

    let dog = doc.selection_field(doc[doc[operation].selection_set].selections[0]).unwrap();
    assert_eq!(doc[dog].position, Position::new(2, 3));
    assert_eq!(doc[doc[dog].directives[0]].position, Position::new(2, 7));

    let inner = doc[dog].selection_set.unwrap();
    let Selection::FragmentSpread(spread) = doc[doc[inner].selections[0]] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(doc[spread].position, Position::new(3, 5));
}

#[test]
fn root_nodes_follow_source_order() {
    let doc = parse_operation("fragment F on Dog { a } subscription S { b } mutation { c } { d }").unwrap();
    assert!(matches!(doc.root_nodes[0], Node::FragmentDefinition(_)));
    let operation_types: Vec<OperationType> = doc
        .operation_definition_refs()
        .map(|r| doc[r].operation_type)
        .collect();
    assert_eq!(
        operation_types,
        vec![OperationType::Subscription, OperationType::Mutation, OperationType::Query],
    );
    assert_eq!(doc.fragment_definition_refs().count(), 1);
    assert!(doc.index.is_empty());
}

#[test]
fn leaf_fields_have_no_selection_set() {
    let doc = parse_operation("{ a b { c } }").unwrap();
    let operation = doc.operation_definition_refs().next().unwrap();
    let selections = &doc[doc[operation].selection_set].selections;
    let a = doc.selection_field(selections[0]).unwrap();
    let b = doc.selection_field(selections[1]).unwrap();
    assert!(doc[a].selection_set.is_none());
    assert!(doc[b].selection_set.is_some());
}

#[test]
fn variable_definitions_keep_types_and_defaults() {
    let doc = parse_operation("query Q($a: [Int!]! = [1], $b: String) { f }").unwrap();
    let operation = doc.operation_definition_refs().next().unwrap();
    let definitions = &doc[operation].variable_definitions;
    assert_eq!(doc.variable_definition_name(definitions[0]), "a");
    assert!(doc.type_is_non_null(doc[definitions[0]].ty));
    assert_eq!(doc.resolve_type_name(doc[definitions[0]].ty), "Int");
    assert!(matches!(doc[definitions[0]].default_value, Some(Value::List(_))));
    assert!(doc[definitions[1]].default_value.is_none());
}

#[test]
fn inline_fragments_with_and_without_type_condition() {
    let doc = parse_operation("{ ... on Dog { a } ... @include(if: true) { b } }").unwrap();
    let operation = doc.operation_definition_refs().next().unwrap();
    let selections = &doc[doc[operation].selection_set].selections;
    let (Selection::InlineFragment(typed), Selection::InlineFragment(untyped)) =
        (doc[selections[0]], doc[selections[1]])
    else {
        panic!("expected two inline fragments");
    };
    assert_eq!(doc.inline_fragment_type_condition_name(typed), Some("Dog"));
    assert_eq!(doc.inline_fragment_type_condition_name(untyped), None);
    assert_eq!(doc[untyped].directives.len(), 1);
}

#[test]
fn syntax_errors_surface_as_query_parse_errors() {
    let error = parse_operation("{ a ").unwrap_err();
    assert!(matches!(error, DocumentParseError::Query(_)));
}

/// Verifies that parsing into an existing Document first discards what it
/// held.
#[test]
fn parse_into_resets_the_document() {
    let mut doc = parse_operation("{ a b c }").unwrap();
    doc.input.set_variable("x", serde_json::json!(1));
    parse_operation_into(&mut doc, "{ d }").unwrap();
    assert_eq!(doc.root_nodes.len(), 1);
    assert_eq!(doc.fields.len(), 1);
    assert!(doc.input.variables().is_empty());
}

#[test]
fn importing_appends_to_existing_definitions() {
    let mut doc = parse_operation("query A { a }").unwrap();
    let ast = graphql_parser::parse_query::<String>("query B { b }").unwrap().into_static();
    import_query_document(&mut doc, &ast);
    let names: Vec<&str> = doc
        .operation_definition_refs()
        .map(|r| doc.operation_definition_name(r))
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

fn spread_positions(doc: &crate::Document) -> Vec<Position> {
    doc.fragment_spreads.iter().map(|spread| spread.position).collect()
}

#[test]
fn spreads_are_placed_on_their_dots() {
    let doc = parse_operation("{\n  ... F\n  ...G, ...H\n}").unwrap();
    assert_eq!(
        spread_positions(&doc),
        vec![Position::new(2, 3), Position::new(3, 3), Position::new(3, 9)],
    );
}

#[test]
fn importing_without_source_keeps_the_parser_spread_position() {
    let mut doc = crate::Document::default();
    let ast = graphql_parser::parse_query::<String>("{\n    ...F\n}").unwrap().into_static();
    import_query_document(&mut doc, &ast);
    assert_eq!(spread_positions(&doc), vec![Position::new(2, 8)]);
}
