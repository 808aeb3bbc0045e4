use crate::passes::FieldDeduplication;
use crate::passes::FieldSelectionMerging;
use crate::passes::InlineFragmentMerging;
use crate::passes::InlineFragmentResolving;
use crate::passes::RemoveFragmentDefinitions;
use crate::passes::RemoveSelfAliasing;
use crate::tests::test_utils::assert_visitor;
use crate::tests::test_utils::pets_schema;
use crate::tests::test_utils::reprint;
use libgraphql_ast::Report;
use libgraphql_ast::parse_operation;
use libgraphql_ast::print_document;
use libgraphql_visitor::Walker;
use pretty_assertions::assert_eq;

#[track_caller]
fn assert_merged(source: &str, expected: &str) {
    let schema = pets_schema();
    let mut operation = parse_operation(source).unwrap();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(InlineFragmentMerging)
        .register_visitor(FieldSelectionMerging)
        .walk(&mut operation, Some(&schema), &mut report);
    assert!(!report.has_errors(), "{report}");
    assert_eq!(print_document(&operation), reprint(expected));
}

// ─── Aliases ────────────────────────────────────────────────────────────

#[test]
fn self_aliases_are_dropped() {
    assert_visitor(
        RemoveSelfAliasing,
        &pets_schema(),
        "{ dog { name: name nick: nickname } }",
        "{ dog { name nick: nickname } }",
    );
}

// ─── Inline fragment resolution ─────────────────────────────────────────

#[test]
fn always_applying_inline_fragments_are_spliced() {
    assert_visitor(
        InlineFragmentResolving,
        &pets_schema(),
        "{ dog { ... on Dog { name } ... { nickname } ... on Pet { name } } }",
        "{ dog { name nickname name } }",
    );
}

#[test]
fn union_condition_containing_the_type_is_spliced() {
    assert_visitor(
        InlineFragmentResolving,
        &pets_schema(),
        "{ dog { ... on CatOrDog { ... on Dog { name } } } }",
        "{ dog { name } }",
    );
}

#[test]
fn narrowing_and_directed_inline_fragments_stay() {
    let source = "{ pet { ... on Dog { name } } dog { ... @include(if: true) { name } } }";
    assert_visitor(InlineFragmentResolving, &pets_schema(), source, source);
}

// ─── Merging ────────────────────────────────────────────────────────────

#[test]
fn inline_fragments_with_equal_conditions_merge() {
    assert_merged(
        "{ pet { ... on Dog { name } ... on Cat { name } ... on Dog { nickname } } }",
        "{ pet { ... on Dog { name nickname } ... on Cat { name } } }",
    );
}

#[test]
fn inline_fragments_with_different_directives_stay_apart() {
    let source = "query Q($a: Boolean!) { pet { ... on Dog { name } ... on Dog @include(if: $a) { nickname } } }";
    assert_merged(source, source);
}

#[test]
fn fields_with_selection_sets_merge() {
    assert_merged(
        "{ dog { owner { name } owner { pets { name } } } }",
        "{ dog { owner { name pets { name } } } }",
    );
}

#[test]
fn merged_fields_have_their_children_merged() {
    assert_merged(
        "{ dog { extra { string } } dog { extra { noString } } }",
        "{ dog { extra { string noString } } }",
    );
}

#[test]
fn fields_with_different_arguments_or_aliases_stay_apart() {
    let source = r#"{ findDog(name: "a") { name } findDog(name: "b") { name } other: findDog(name: "a") { nickname } }"#;
    assert_merged(source, source);
}

#[test]
fn fields_with_different_directives_merge_and_keep_both() {
    assert_merged(
        "{ dog { name } dog @deprecated { nickname } }",
        "{ dog @deprecated { name nickname } }",
    );
}

#[test]
fn equal_directives_are_kept_once_when_merging() {
    assert_merged(
        r#"{ dog @cost(weight: 1) { name } dog @deprecated @cost(weight: 1) { nickname } }"#,
        r#"{ dog @cost(weight: 1) @deprecated { name nickname } }"#,
    );
}

#[test]
fn fields_with_different_include_conditions_stay_apart() {
    let source = "query Q($a: Boolean!) { dog { name } dog @include(if: $a) { nickname } }";
    assert_merged(source, source);
}

// ─── Cleanup ────────────────────────────────────────────────────────────

#[test]
fn identical_leaf_fields_are_deduplicated() {
    assert_visitor(
        FieldDeduplication,
        &pets_schema(),
        r#"
        {
            dog {
                name
                nickname
                name
                isHousetrained(atOtherHomes: true)
                isHousetrained(atOtherHomes: false)
                isHousetrained(atOtherHomes: true)
            }
        }
        "#,
        "{ dog { name nickname isHousetrained(atOtherHomes: true) isHousetrained(atOtherHomes: false) } }",
    );
}

#[test]
fn fragment_definitions_are_removed() {
    assert_visitor(
        RemoveFragmentDefinitions,
        &pets_schema(),
        "{ dog { name } } fragment DogName on Dog { name } fragment Other on Cat { name }",
        "{ dog { name } }",
    );
}
