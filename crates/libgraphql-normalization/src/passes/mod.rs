//! The individual normalization passes.
//!
//! Each pass is a [`Visitor`](libgraphql_visitor::Visitor) and can run on
//! its own Walker:
//!
//! ```
//! # use libgraphql_ast::Report;
//! # use libgraphql_ast::merge_base_schema;
//! # use libgraphql_ast::parse_definition;
//! # use libgraphql_ast::parse_operation;
//! # use libgraphql_ast::print_document;
//! # use libgraphql_normalization::passes::RemoveSelfAliasing;
//! # use libgraphql_visitor::Walker;
//! let mut schema = parse_definition("type Query { name: String }").unwrap();
//! merge_base_schema(&mut schema);
//! let mut operation = parse_operation("{ name: name }").unwrap();
//! let mut report = Report::default();
//! Walker::new()
//!     .register_visitor(RemoveSelfAliasing)
//!     .walk(&mut operation, Some(&schema), &mut report);
//! assert_eq!(print_document(&operation), "{ name }");
//! ```

mod delete_unused_variables;
mod directive_include_skip;
mod extend_type_definitions;
mod field_deduplication;
mod field_selection_merging;
mod fragment_spread_depth;
mod fragment_spread_inlining;
mod inject_input_field_defaults;
mod inline_fragment_merging;
mod inline_fragment_resolving;
mod input_coercion_for_list;
mod remove_fragment_definitions;
mod remove_merged_type_extensions;
mod remove_operation_definitions;
mod remove_self_aliasing;
mod variables_default_value_extraction;
mod variables_extraction;

pub use delete_unused_variables::DeleteUnusedVariables;
pub use directive_include_skip::DirectiveIncludeSkip;
pub use directive_include_skip::TYPENAME_PLACEHOLDER_ALIAS;
pub use extend_type_definitions::ExtendTypeDefinitions;
pub use field_deduplication::FieldDeduplication;
pub use field_selection_merging::FieldSelectionMerging;
pub use fragment_spread_depth::FragmentSpreadDepth;
pub use fragment_spread_depth::FragmentSpreadDepths;
pub use fragment_spread_depth::SpreadDepth;
pub use fragment_spread_inlining::FragmentSpreadInlining;
pub use inject_input_field_defaults::InjectInputFieldDefaults;
pub use inline_fragment_merging::InlineFragmentMerging;
pub use inline_fragment_resolving::InlineFragmentResolving;
pub use input_coercion_for_list::InputCoercionForList;
pub use remove_fragment_definitions::RemoveFragmentDefinitions;
pub use remove_merged_type_extensions::RemoveMergedTypeExtensions;
pub use remove_operation_definitions::RemoveNotMatchingOperationDefinitions;
pub use remove_self_aliasing::RemoveSelfAliasing;
pub use variables_default_value_extraction::VariablesDefaultValueExtraction;
pub use variables_extraction::VariablesExtraction;

use libgraphql_ast::Document;
use libgraphql_ast::Node;
use libgraphql_ast::refs::DirectiveRef;

/// The directive list of a selection node, for the kinds that carry one.
pub(crate) fn selection_directives_mut(
    doc: &mut Document,
    node: Node,
) -> Option<&mut Vec<DirectiveRef>> {
    match node {
        Node::Field(r) => Some(&mut doc[r].directives),
        Node::FragmentSpread(r) => Some(&mut doc[r].directives),
        Node::InlineFragment(r) => Some(&mut doc[r].directives),
        _ => None,
    }
}

/// The input object type definition `type_name` names in `definition`, if
/// it names one.
pub(crate) fn input_object_definition(
    definition: &Document,
    type_name: &str,
) -> Option<libgraphql_ast::refs::InputObjectTypeDefinitionRef> {
    match definition.index.first_non_extension_node_by_name(type_name)? {
        Node::InputObjectTypeDefinition(r) => Some(r),
        _ => None,
    }
}
