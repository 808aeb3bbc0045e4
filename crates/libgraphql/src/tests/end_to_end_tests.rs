use crate::DefinitionNormalizer;
use crate::OperationNormalizer;
use crate::Report;
use crate::merge_base_schema;
use crate::parse_definition;
use crate::parse_operation;
use crate::print_document;
use crate::print_document_pretty;
use pretty_assertions::assert_eq;

const SCHEMA: &str = r#"
    type Query { hero(episode: Episode = NEWHOPE): Character }
    enum Episode { NEWHOPE EMPIRE JEDI }
    interface Character { name: String }
    type Droid implements Character { name: String primaryFunction: String }
    extend type Droid { serialNumber: String }
"#;

#[test]
fn schema_and_operation_normalize_together() {
    let mut schema = parse_definition(SCHEMA).unwrap();
    let mut report = Report::default();
    DefinitionNormalizer::default().normalize_definition(&mut schema, &mut report);
    merge_base_schema(&mut schema);
    assert!(!report.has_errors(), "{report}");

    let mut operation = parse_operation(
        r#"
        query Hero {
            hero { ...DroidFields name: name }
        }
        fragment DroidFields on Droid { name serialNumber }
        "#,
    )
    .unwrap();
    OperationNormalizer::default().normalize_operation(&mut operation, &schema, &mut report);

    assert!(!report.has_errors(), "{report}");
    assert_eq!(
        print_document(&operation),
        "query Hero($a: Episode) { hero(episode: $a) { ... on Droid { name serialNumber } name } }",
    );
    assert_eq!(operation.input.variables()["a"], serde_json::json!("NEWHOPE"));
}

#[test]
fn pretty_printing_indents_normalized_output() {
    let mut schema = parse_definition("type Query { a: String b: String }").unwrap();
    merge_base_schema(&mut schema);
    let mut operation = parse_operation("{ a b a }").unwrap();
    let mut report = Report::default();
    crate::normalization::normalize_operation(&mut operation, &schema, &mut report);

    assert!(!report.has_errors(), "{report}");
    assert_eq!(print_document_pretty(&operation), "{\n  a\n  b\n}\n");
}
