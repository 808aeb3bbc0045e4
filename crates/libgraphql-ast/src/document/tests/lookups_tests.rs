use crate::Node;
use crate::parse_definition;
use crate::parse_operation;

const SCHEMA: &str = "
    interface Node { id: ID }
    interface Named { name: String }
    interface Aged { age: Int }
    type Dog implements Node & Named { id: ID name: String }
    type Cat implements Named { name: String }
    type Rock { weight: Int }
    union Animal = Dog | Cat
    union Thing = Rock
    input Filter { name: String first: Int = 10 }
    type Query { dogs(filter: Filter, limit: Int): [Dog] }
    directive @cost(weight: Int) on FIELD_DEFINITION
";

fn node(doc: &crate::Document, name: &str) -> Node {
    doc.index.first_non_extension_node_by_name(name).unwrap()
}

#[test]
fn interface_and_union_relationships() {
    let doc = parse_definition(SCHEMA).unwrap();
    let (dog, cat, rock) = (node(&doc, "Dog"), node(&doc, "Cat"), node(&doc, "Rock"));
    let (node_interface, named, aged) = (node(&doc, "Node"), node(&doc, "Named"), node(&doc, "Aged"));
    let (animal, thing) = (node(&doc, "Animal"), node(&doc, "Thing"));

    assert!(doc.node_implements_interface(dog, node_interface));
    assert!(doc.node_implements_interface(cat, named));
    assert!(!doc.node_implements_interface(cat, node_interface));
    assert!(!doc.node_implements_interface(dog, animal));

    assert!(doc.node_is_union_member(dog, animal));
    assert!(!doc.node_is_union_member(rock, animal));

    assert!(doc.union_intersects_interface(animal, node_interface));
    assert!(!doc.union_intersects_interface(thing, named));

    assert!(doc.interfaces_intersect(node_interface, named));
    assert!(!doc.interfaces_intersect(named, aged));
}

#[test]
fn field_argument_and_input_field_lookups() {
    let doc = parse_definition(SCHEMA).unwrap();
    let query = node(&doc, "Query");
    let dogs = doc.node_field_definition_by_name(query, "dogs").unwrap();
    assert_eq!(doc.resolve_type_name(doc[dogs].ty), "Dog");
    assert!(doc.node_field_definition_by_name(query, "cats").is_none());

    let filter_argument = doc.field_definition_argument_by_name(dogs, "filter").unwrap();
    assert_eq!(doc.resolve_type_name(doc[filter_argument].ty), "Filter");
    assert!(doc.field_definition_argument_by_name(dogs, "offset").is_none());

    let Node::InputObjectTypeDefinition(filter) = node(&doc, "Filter") else {
        panic!("Filter is not an input object");
    };
    let first = doc.input_object_field_by_name(filter, "first").unwrap();
    assert!(doc[first].default_value.is_some());

    let cost = doc.directive_definition_by_name("cost").unwrap();
    assert_eq!(doc.str(doc[cost].locations[0]), "FIELD_DEFINITION");
    assert!(doc.directive_definition_by_name("Dog").is_none());
}

#[test]
fn executable_lookups() {
    let doc = parse_operation(
        "query Q { pet: dog(id: 1) @include(if: true) ...F } fragment F on Dog { name }",
    )
    .unwrap();
    let operation = doc.operation_definition_refs().next().unwrap();
    assert_eq!(doc.operation_definition_name(operation), "Q");

    let selections = &doc[doc[operation].selection_set].selections;
    let dog = doc.selection_field(selections[0]).unwrap();
    assert_eq!(doc.field_name(dog), "dog");
    assert_eq!(doc.field_response_key(dog), "pet");
    assert!(doc.field_argument_value(dog, "id").is_some());
    let include = doc[dog].directives[0];
    assert_eq!(doc.directive_argument_value(include, "if"), Some(crate::Value::Boolean(true)));
    assert!(doc.selection_field(selections[1]).is_none());

    let fragment = doc.fragment_definition_ref("F").unwrap();
    assert_eq!(doc.fragment_definition_type_name(fragment), "Dog");
    assert!(doc.fragment_definition_ref("G").is_none());
}
