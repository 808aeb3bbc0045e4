//! A GraphQL engine for building GraphQL tools, clients, and servers.
//!
//! `libgraphql` bundles the arena [`Document`](ast::Document) model, the
//! [`Walker`](visitor::Walker) that drives visitors over it, and the
//! [normalization](normalization) passes built on the two. The most
//! commonly used items are re-exported at the root.

pub use libgraphql_ast as ast;
pub use libgraphql_normalization as normalization;
pub use libgraphql_visitor as visitor;

pub use libgraphql_ast::Document;
pub use libgraphql_ast::Report;
pub use libgraphql_ast::merge_base_schema;
pub use libgraphql_ast::parse_definition;
pub use libgraphql_ast::parse_operation;
pub use libgraphql_ast::print_document;
pub use libgraphql_ast::print_document_pretty;
pub use libgraphql_normalization::DefinitionNormalizer;
pub use libgraphql_normalization::NormalizationOptions;
pub use libgraphql_normalization::OperationNormalizer;
pub use libgraphql_normalization::VariablesNormalizer;
pub use libgraphql_visitor::Visitor;
pub use libgraphql_visitor::Walker;

#[cfg(test)]
mod tests;
