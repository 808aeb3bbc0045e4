//! Arena-allocated GraphQL documents.
//!
//! A [`Document`] keeps every node kind in its own dense table and links
//! nodes with typed integer refs ([`refs`]); all names and literals live in
//! one append-only [`Input`] buffer. Type-system definitions are looked up
//! through the name [`Index`]. Documents are filled by the
//! [`graphql_parser`](compat_graphql_parser_v0_4) import layer or by the
//! `add_*`/`copy_*`/`import_*` builders, rendered back to text by the
//! [`printer`], and recycled through a [`DocumentPool`].

mod base_schema;
mod byte_slice_reference;
pub mod compat_graphql_parser_v0_4;
mod document;
mod index;
mod input;
mod node;
mod pool;
mod position;
pub mod printer;
pub mod refs;
mod report;

pub use base_schema::merge_base_schema;
pub use byte_slice_reference::ByteSliceReference;
pub use compat_graphql_parser_v0_4::DocumentParseError;
pub use compat_graphql_parser_v0_4::parse_definition;
pub use compat_graphql_parser_v0_4::parse_operation;
pub use compat_graphql_parser_v0_4::parse_operation_into;
pub use document::*;
pub use index::Index;
pub use input::Input;
pub use input::VariablesJsonError;
pub use node::Node;
pub use pool::DocumentPool;
pub use pool::PooledDocument;
pub use position::Position;
pub use printer::print_document;
pub use printer::print_document_pretty;
pub use report::ExternalError;
pub use report::ExternalErrorKind;
pub use report::InternalError;
pub use report::Report;

#[cfg(test)]
mod tests;
