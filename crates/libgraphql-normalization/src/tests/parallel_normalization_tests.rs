use crate::OperationNormalizer;
use crate::tests::test_utils::pets_schema;
use libgraphql_ast::DocumentPool;
use libgraphql_ast::Report;
use libgraphql_ast::parse_operation_into;
use libgraphql_ast::print_document;
use rayon::prelude::*;

/// Verifies that one normalizer and one schema can serve many threads, each
/// normalizing its own pooled Document.
#[test]
fn shared_normalizer_and_schema_across_threads() {
    let definition = pets_schema();
    let normalizer = OperationNormalizer::default();
    let pool = DocumentPool::with_max_idle(8);

    let results: Vec<(String, String)> = (0..64)
        .into_par_iter()
        .map(|i| {
            let mut operation = pool.get();
            let source = format!(
                r#"{{ findDog(name: "dog{i}") {{ ...DogName }} }} fragment DogName on Dog {{ name: name nickname }}"#,
            );
            parse_operation_into(&mut operation, &source).unwrap();
            let mut report = Report::default();
            normalizer.normalize_operation(&mut operation, &definition, &mut report);
            assert!(!report.has_errors(), "{report}");
            (print_document(&operation), operation.input.variables_json())
        })
        .collect();

    for (i, (printed, variables)) in results.iter().enumerate() {
        assert_eq!(printed, "query($a: String) { findDog(name: $a) { name nickname } }");
        assert_eq!(variables, &format!(r#"{{"a":"dog{i}"}}"#));
    }
}
