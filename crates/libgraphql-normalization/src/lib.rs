//! Normalization of GraphQL documents.
//!
//! [`OperationNormalizer`] rewrites an executable Document against a schema
//! into one canonical form: fragments inlined, literals moved into
//! variables, redundant selections merged or dropped and defaults made
//! explicit. [`DefinitionNormalizer`] folds type extensions into their
//! definitions. [`VariablesNormalizer`] runs only the variable stages,
//! for new variable values supplied to an already normalized operation.
//!
//! The individual rewrites live in [`passes`] and can be walked one by one.
//!
//! ```
//! # use libgraphql_ast::Report;
//! # use libgraphql_ast::merge_base_schema;
//! # use libgraphql_ast::parse_definition;
//! # use libgraphql_ast::parse_operation;
//! # use libgraphql_ast::print_document;
//! # use libgraphql_normalization::OperationNormalizer;
//! let mut schema = parse_definition("type Query { greeting(name: String): String }").unwrap();
//! merge_base_schema(&mut schema);
//! let mut operation = parse_operation(r#"{ greeting(name: "Ada") }"#).unwrap();
//!
//! let mut report = Report::default();
//! OperationNormalizer::default().normalize_operation(&mut operation, &schema, &mut report);
//!
//! assert!(!report.has_errors());
//! assert_eq!(print_document(&operation), "query($a: String) { greeting(name: $a) }");
//! assert_eq!(operation.input.variables_json(), r#"{"a":"Ada"}"#);
//! ```

mod definition_normalizer;
mod operation_normalizer;
mod options;
pub mod passes;
mod variables_normalizer;

pub use definition_normalizer::DefinitionNormalizer;
pub use operation_normalizer::OperationNormalizer;
pub use options::DefinitionNormalizationOptions;
pub use options::NormalizationOptions;
pub use variables_normalizer::VariablesNormalizer;

use libgraphql_ast::Document;
use libgraphql_ast::Report;

/// Normalizes every operation of `operation` with the default options.
pub fn normalize_operation(operation: &mut Document, definition: &Document, report: &mut Report) {
    OperationNormalizer::default().normalize_operation(operation, definition, report);
}

/// Merges the type extensions of `definition` with the default options.
pub fn normalize_definition(definition: &mut Document, report: &mut Report) {
    DefinitionNormalizer::default().normalize_definition(definition, report);
}

#[cfg(test)]
mod tests;
