//! Import layer from the `graphql_parser` v0.4 AST into a [`Document`].
//!
//! The lexer/parser is `graphql_parser`'s; this module only walks its owned
//! tree once and appends every node to the arena. Known losses:
//!
//! * Object value fields arrive as a `BTreeMap`, so their order becomes
//!   alphabetical.
//! * Block strings arrive unescaped without a block marker.
//! * Variable definitions cannot carry directives, and `extend schema` is
//!   not representable.

mod from_query;
mod from_schema;
mod helpers;

use crate::Document;

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentParseError {
    #[error("failed to parse executable document: {0}")]
    Query(#[from] query::ParseError),

    #[error("failed to parse type system document: {0}")]
    Schema(#[from] schema::ParseError),
}

/// Parses an executable document (operations and fragments).
pub fn parse_operation(source: &str) -> Result<Document, DocumentParseError> {
    let ast = graphql_parser::parse_query::<String>(source)?.into_static();
    let mut doc = Document::default();
    from_query::QueryImporter::new(&mut doc).with_source(source).import_document(&ast);
    Ok(doc)
}

/// Parses a type system document (schema, types, extensions and directive
/// definitions).
pub fn parse_definition(source: &str) -> Result<Document, DocumentParseError> {
    let ast = graphql_parser::parse_schema::<String>(source)?.into_static();
    let mut doc = Document::default();
    import_schema_document(&mut doc, &ast);
    Ok(doc)
}

/// Parses an executable document into `doc`, which is reset first. Meant
/// for Documents checked out of a [`DocumentPool`](crate::DocumentPool).
pub fn parse_operation_into(doc: &mut Document, source: &str) -> Result<(), DocumentParseError> {
    let ast = graphql_parser::parse_query::<String>(source)?.into_static();
    doc.reset();
    from_query::QueryImporter::new(doc).with_source(source).import_document(&ast);
    Ok(())
}

/// Appends every definition of a `graphql_parser` query document to `doc`.
///
/// Without the source text, fragment spreads keep `graphql_parser`'s
/// position, which is the fragment name rather than the `...` token.
pub fn import_query_document(doc: &mut Document, ast: &query::Document) {
    from_query::QueryImporter::new(doc).import_document(ast);
}

/// Appends every definition of a `graphql_parser` schema document to `doc`.
pub fn import_schema_document(doc: &mut Document, ast: &schema::Document) {
    from_schema::SchemaImporter::new(doc).import_document(ast);
}

#[cfg(test)]
mod tests;
