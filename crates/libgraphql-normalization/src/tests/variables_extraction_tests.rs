use crate::passes::VariablesExtraction;
use crate::tests::test_utils::assert_visitor_with_variables;
use crate::tests::test_utils::pets_schema;

#[track_caller]
fn assert_extracted(source: &str, variables: &str, expected: &str, expected_variables: &str) {
    assert_visitor_with_variables(
        VariablesExtraction::default(),
        &pets_schema(),
        source,
        variables,
        expected,
        expected_variables,
    );
}

#[test]
fn literal_arguments_become_variables_typed_by_the_schema() {
    assert_extracted(
        r#"mutation { renameDog(id: "1", name: "Rex") { name } }"#,
        "",
        "mutation($a: ID!, $b: String!) { renameDog(id: $a, name: $b) { name } }",
        r#"{"a":"1","b":"Rex"}"#,
    );
}

#[test]
fn equal_literals_of_equal_types_share_a_variable() {
    assert_extracted(
        r#"{ a: findDog(name: "Rex") { name } b: findDog(name: "Rex") { nickname } }"#,
        "",
        "query($a: String) { a: findDog(name: $a) { name } b: findDog(name: $a) { nickname } }",
        r#"{"a":"Rex"}"#,
    );
}

#[test]
fn equal_literals_of_different_types_do_not_share() {
    assert_extracted(
        r#"mutation { renameDog(id: "1", name: "1") { name } }"#,
        "",
        "mutation($a: ID!, $b: String!) { renameDog(id: $a, name: $b) { name } }",
        r#"{"a":"1","b":"1"}"#,
    );
}

#[test]
fn generated_names_skip_declared_variables() {
    assert_extracted(
        r#"query Q($a: String) { a: findDog(name: $a) { name } b: findDog(name: "Rex") { name } }"#,
        r#"{"a":"x"}"#,
        "query Q($a: String, $b: String) { a: findDog(name: $a) { name } b: findDog(name: $b) { name } }",
        r#"{"a":"x","b":"Rex"}"#,
    );
}

#[test]
fn object_and_list_literals_are_extracted_whole() {
    assert_extracted(
        r#"{ findDog(complex: { owner: "Ann", name: "Rex" }) { name } dogsByNames(names: ["a", "b"]) { name } }"#,
        "",
        "query($a: ComplexInput, $b: [String!]) { findDog(complex: $a) { name } dogsByNames(names: $b) { name } }",
        r#"{"a":{"name":"Rex","owner":"Ann"},"b":["a","b"]}"#,
    );
}

#[test]
fn enum_literals_become_strings() {
    assert_extracted(
        "{ dog { doesKnowCommand(dogCommand: SIT) } }",
        "",
        "query($a: DogCommand!) { dog { doesKnowCommand(dogCommand: $a) } }",
        r#"{"a":"SIT"}"#,
    );
}

#[test]
fn values_with_variables_and_directive_arguments_stay() {
    let source = "query Q($n: String) { findDog(complex: { name: $n }) { name @include(if: true) } }";
    assert_extracted(source, r#"{"n":"Rex"}"#, source, r#"{"n":"Rex"}"#);
}

#[test]
fn fragment_definitions_are_not_touched() {
    let source = "{ dog { ...F } } fragment F on Dog { isHousetrained(atOtherHomes: true) }";
    assert_extracted(source, "", source, "{}");
}
