use crate::Node;
use crate::parse_definition;
use crate::parse_operation;
use crate::print_document;
use crate::print_document_pretty;
use crate::printer::print_type;
use crate::printer::print_value;
use pretty_assertions::assert_eq;

fn reprint_operation(source: &str) -> String {
    print_document(&parse_operation(source).unwrap())
}

fn reprint_definition(source: &str) -> String {
    print_document(&parse_definition(source).unwrap())
}

/// Verifies that an anonymous query without variables or directives is
/// printed in shorthand form.
#[test]
fn anonymous_query_prints_as_shorthand() {
    assert_eq!(reprint_operation("query { dog { name } }"), "{ dog { name } }");
    assert_eq!(reprint_operation("{dog{name}}"), "{ dog { name } }");
}

#[test]
fn operation_with_variables_directives_and_fragments() {
    let source = "query Q($a: Int = 1, $b: [String!]!) @cached { \
                  pet: animal(id: $a, tags: $b) @skip(if: false) { \
                  name ... on Dog { bark } ...Details } } \
                  fragment Details on Animal { age }";
    assert_eq!(
        reprint_operation(source),
        "query Q($a: Int = 1, $b: [String!]!) @cached { \
         pet: animal(id: $a, tags: $b) @skip(if: false) { \
         name ... on Dog { bark } ...Details } } \
         fragment Details on Animal { age }",
    );
}

#[test]
fn mutation_and_subscription_keywords() {
    assert_eq!(reprint_operation("mutation { a }"), "mutation { a }");
    assert_eq!(reprint_operation("subscription S { a }"), "subscription S { a }");
}

/// Verifies that literal values keep their source spelling, strings are
/// re-escaped, and object fields come out in the (alphabetical) order the
/// parser hands them over.
#[test]
fn literal_values() {
    assert_eq!(
        reprint_operation(r#"{ f(i: 12, fl: 1.5, s: "a \"b\"", e: RED, n: null, l: [1, [true]], o: {b: 1, a: "x"}) }"#),
        r#"{ f(i: 12, fl: 1.5, s: "a \"b\"", e: RED, n: null, l: [1, [true]], o: {a: "x", b: 1}) }"#,
    );
}

#[test]
fn type_system_definitions() {
    let source = r#"
        schema { query: Root mutation: Edit }
        "The dog" type Dog implements Pet & Node @key { name(short: Boolean = false): String! }
        interface Pet implements Node { name: String }
        union Animal = Dog | Cat
        enum Color { RED GREEN @deprecated }
        input Filter { first: Int = 10 tags: [String] }
        scalar Date
        directive @key(fields: String) repeatable on OBJECT | INTERFACE
    "#;
    assert_eq!(
        reprint_definition(source),
        "schema { query: Root mutation: Edit } \
         \"The dog\" type Dog implements Pet & Node @key { name(short: Boolean = false): String! } \
         interface Pet implements Node { name: String } \
         union Animal = Dog | Cat \
         enum Color { RED GREEN @deprecated } \
         input Filter { first: Int = 10 tags: [String] } \
         scalar Date \
         directive @key(fields: String) repeatable on OBJECT | INTERFACE",
    );
}

#[test]
fn type_extensions_print_with_extend_keyword() {
    assert_eq!(
        reprint_definition("extend type Dog @key { age: Int } extend union U = A extend scalar S @x"),
        "extend type Dog @key { age: Int } extend union U = A extend scalar S @x",
    );
}

/// Verifies that root nodes flipped to `Unknown` and merged extensions are
/// not printed.
#[test]
fn deleted_and_merged_nodes_are_skipped() {
    let mut doc = parse_operation("query A { a } query B { b }").unwrap();
    let first = doc.root_nodes[0];
    assert!(doc.remove_root_node(first));
    assert_eq!(print_document(&doc), "query B { b }");

    let mut schema = parse_definition("type A { a: Int } extend type A { b: Int }").unwrap();
    let extension = schema.root_nodes[1];
    assert!(matches!(extension, Node::ObjectTypeExtension(_)));
    schema.index.merged_type_extensions.push(extension);
    assert_eq!(print_document(&schema), "type A { a: Int }");
}

#[test]
fn pretty_printing_indents_two_spaces() {
    let doc = parse_operation("query Q { dog { name } } fragment F on Dog { age }").unwrap();
    assert_eq!(
        print_document_pretty(&doc),
        "query Q {\n  dog {\n    name\n  }\n}\n\nfragment F on Dog {\n  age\n}\n",
    );
}

#[test]
fn printing_single_values_and_types() {
    let doc = parse_definition("type Q { f(a: [Int!]! = [1, 2]): String }").unwrap();
    let field = doc.field_definitions[0].arguments[0];
    let argument = &doc[field];
    assert_eq!(print_type(&doc, argument.ty), "[Int!]!");
    assert_eq!(print_value(&doc, argument.default_value.unwrap()), "[1, 2]");
}
