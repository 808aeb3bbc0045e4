use crate::Visitor;
use crate::WalkContext;
use crate::Walker;
use crate::tests::dog_schema;
use libgraphql_ast::ExternalErrorKind;
use libgraphql_ast::Node;
use libgraphql_ast::Report;
use libgraphql_ast::parse_operation;
use libgraphql_ast::refs::*;
use pretty_assertions::assert_eq;

fn type_name(ctx: &WalkContext<'_>, node: Option<Node>) -> String {
    match (ctx.definition, node) {
        (Some(definition), Some(node)) => definition.node_name(node).to_owned(),
        _ => "<none>".to_owned(),
    }
}

/// Records, for every field, the type the field is selected on.
#[derive(Default)]
struct EnclosingTypes {
    fields: Vec<String>,
    directives: Vec<String>,
    operations: Vec<String>,
    fragments: Vec<String>,
}

impl Visitor for EnclosingTypes {
    fn enter_operation_definition(&mut self, ctx: &mut WalkContext<'_>, _node: OperationDefinitionRef) {
        let name = type_name(ctx, ctx.enclosing_type_definition());
        self.operations.push(name);
    }

    fn enter_fragment_definition(&mut self, ctx: &mut WalkContext<'_>, _node: FragmentDefinitionRef) {
        let name = type_name(ctx, ctx.enclosing_type_definition());
        self.fragments.push(name);
    }

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        let name = format!(
            "{}.{}",
            type_name(ctx, ctx.enclosing_type_definition()),
            ctx.operation.field_name(node),
        );
        self.fields.push(name);
    }

    fn enter_directive(&mut self, ctx: &mut WalkContext<'_>, node: DirectiveRef) {
        let name = format!(
            "@{} in {}",
            ctx.operation.directive_name(node),
            type_name(ctx, ctx.enclosing_type_definition()),
        );
        self.directives.push(name);
    }
}

#[test]
fn enclosing_type_follows_fields_and_fragments() {
    let schema = dog_schema();
    let mut operation = parse_operation(
        r#"
        query Q {
            dog { name owner { name } }
            pets { ... on Dog { barkVolume } name ...PetName }
        }
        fragment PetName on Pet { name }
        "#,
    )
    .unwrap();
    let mut types = EnclosingTypes::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut types)
        .walk(&mut operation, Some(&schema), &mut report);

    assert!(!report.has_errors(), "{report}");
    assert_eq!(types.operations, vec!["Query"]);
    assert_eq!(types.fragments, vec!["Pet"]);
    assert_eq!(
        types.fields,
        vec![
            "Query.dog",
            "Dog.name",
            "Dog.owner",
            "Human.name",
            "Query.pets",
            "Dog.barkVolume",
            "Pet.name",
            "Pet.name",
        ],
    );
}

#[test]
fn typename_resolves_to_string() {
    let schema = dog_schema();
    let mut operation = parse_operation("{ dog { __typename @skip(if: false) } }").unwrap();
    let mut types = EnclosingTypes::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut types)
        .walk(&mut operation, Some(&schema), &mut report);

    assert!(!report.has_errors(), "{report}");
    assert_eq!(types.fields, vec!["Query.dog", "Dog.__typename"]);
    assert_eq!(types.directives, vec!["@skip in String"]);
}

#[test]
fn inline_fragment_without_condition_keeps_enclosing_type() {
    let schema = dog_schema();
    let mut operation = parse_operation("{ dog { ... @include(if: true) { name } } }").unwrap();
    let mut types = EnclosingTypes::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut types)
        .walk(&mut operation, Some(&schema), &mut report);

    assert_eq!(types.fields, vec!["Query.dog", "Dog.name"]);
}

#[test]
fn walking_without_definition_has_no_enclosing_types() {
    let mut operation = parse_operation("{ dog { name } }").unwrap();
    let mut types = EnclosingTypes::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut types)
        .walk(&mut operation, None, &mut report);

    assert_eq!(types.fields, vec!["<none>.dog", "<none>.name"]);
}

fn walk_errors(source: &str) -> Report {
    let schema = dog_schema();
    let mut operation = parse_operation(source).unwrap();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(EnclosingTypes::default())
        .walk(&mut operation, Some(&schema), &mut report);
    report
}

/// Verifies that a field missing from its enclosing type stops the walk
/// with a located error.
#[test]
fn undefined_field_is_reported() {
    let report = walk_errors("{\n  dog {\n    meow\n  }\n}");

    assert_eq!(report.external_errors.len(), 1);
    let error = &report.external_errors[0];
    assert_eq!(error.kind, ExternalErrorKind::FieldUndefinedOnType);
    assert_eq!(error.message, "field: meow not defined on type: Dog");
    assert_eq!(error.locations[0].line, 3);
}

#[test]
fn undefined_root_operation_type_is_reported() {
    let report = walk_errors("subscription { dog }");

    assert_eq!(report.external_errors.len(), 1);
    assert_eq!(report.external_errors[0].kind, ExternalErrorKind::OperationTypeUndefined);
}

#[test]
fn undefined_type_condition_is_reported() {
    let report = walk_errors("fragment F on Bird { name }");

    assert_eq!(report.external_errors.len(), 1);
    assert_eq!(report.external_errors[0].kind, ExternalErrorKind::TypeUndefined);
    assert_eq!(report.external_errors[0].message, "type not defined: Bird");
}

#[derive(Default)]
struct ArgumentTypes {
    seen: Vec<String>,
    fields: Vec<Option<String>>,
}

impl Visitor for ArgumentTypes {
    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        let described = match (ctx.definition, ctx.argument_input_value_definition(node)) {
            (Some(definition), Some(input_value)) => format!(
                "{}: {}",
                ctx.operation.argument_name(node),
                definition.resolve_type_name(definition[input_value].ty),
            ),
            _ => format!("{}: ?", ctx.operation.argument_name(node)),
        };
        self.seen.push(described);
    }

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        let field_type = match (ctx.definition, ctx.field_definition(node)) {
            (Some(definition), Some(field_definition)) => {
                Some(definition.resolve_type_name(definition[field_definition].ty).to_owned())
            },
            _ => None,
        };
        self.fields.push(field_type);
    }
}

#[test]
fn argument_definitions_resolve_for_fields_and_directives() {
    let schema = dog_schema();
    let mut operation = parse_operation(
        "mutation { renameDog(name: \"Rex\") { barkVolume(loud: true, extra: 1) @include(if: true) } }",
    )
    .unwrap();
    let mut types = ArgumentTypes::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut types)
        .walk(&mut operation, Some(&schema), &mut report);

    assert!(!report.has_errors(), "{report}");
    assert_eq!(types.seen, vec!["name: String", "loud: Boolean", "extra: ?", "if: Boolean"]);
    assert_eq!(types.fields, vec![Some("Dog".to_owned()), Some("Int".to_owned())]);
}
