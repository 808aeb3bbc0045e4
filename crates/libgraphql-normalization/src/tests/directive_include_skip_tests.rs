use crate::passes::DirectiveIncludeSkip;
use crate::tests::test_utils::assert_visitor;
use crate::tests::test_utils::assert_visitor_with_variables;
use crate::tests::test_utils::pets_schema;

#[test]
fn literal_conditions_remove_excluded_fields() {
    assert_visitor(
        DirectiveIncludeSkip::new(),
        &pets_schema(),
        "{ dog { name @include(if: false) nickname @skip(if: false) barkVolume @skip(if: true) } }",
        "{ dog { nickname } }",
    );
}

#[test]
fn kept_selections_lose_resolved_directives() {
    assert_visitor(
        DirectiveIncludeSkip::new(),
        &pets_schema(),
        "{ dog { name @include(if: true) } }",
        "{ dog { name } }",
    );
}

#[test]
fn skip_wins_over_include() {
    assert_visitor(
        DirectiveIncludeSkip::new(),
        &pets_schema(),
        "{ dog { name @include(if: true) @skip(if: true) nickname } }",
        "{ dog { nickname } }",
    );
}

#[test]
fn emptied_selection_set_gets_typename_placeholder() {
    assert_visitor(
        DirectiveIncludeSkip::new(),
        &pets_schema(),
        "{ dog { name @include(if: false) nickname @skip(if: true) } }",
        "{ dog { __internal__typename_placeholder: __typename } }",
    );
}

#[test]
fn fragments_are_included_and_skipped_too() {
    assert_visitor(
        DirectiveIncludeSkip::new(),
        &pets_schema(),
        r#"
        {
            dog {
                ... on Dog @skip(if: true) { name }
                ...DogNick @include(if: true)
                ...DogBark @include(if: false)
                barkVolume
            }
        }
        fragment DogNick on Dog { nickname }
        fragment DogBark on Dog { barkVolume }
        "#,
        r#"
        { dog { ...DogNick barkVolume } }
        fragment DogNick on Dog { nickname }
        fragment DogBark on Dog { barkVolume }
        "#,
    );
}

#[test]
fn variable_conditions_are_kept_by_default() {
    assert_visitor_with_variables(
        DirectiveIncludeSkip::new(),
        &pets_schema(),
        "query Q($yes: Boolean!) { dog { name @include(if: $yes) } }",
        r#"{"yes":false}"#,
        "query Q($yes: Boolean!) { dog { name @include(if: $yes) } }",
        r#"{"yes":false}"#,
    );
}

#[test]
fn variable_conditions_resolve_when_enabled() {
    assert_visitor_with_variables(
        DirectiveIncludeSkip::new().with_variable_resolution(true),
        &pets_schema(),
        "query Q($yes: Boolean!, $no: Boolean!) { dog { name @include(if: $yes) nickname @skip(if: $no) barkVolume @include(if: $missing) } }",
        r#"{"yes":false,"no":false}"#,
        "query Q($yes: Boolean!, $no: Boolean!) { dog { nickname barkVolume @include(if: $missing) } }",
        r#"{"yes":false,"no":false}"#,
    );
}
