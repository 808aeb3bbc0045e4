use libgraphql_ast::Document;
use libgraphql_ast::Node;
use libgraphql_ast::refs::InlineFragmentRef;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Whether every value of type `enclosing` also satisfies the type
/// condition `condition`.
fn condition_always_applies(definition: &Document, enclosing: Node, condition: &str) -> bool {
    if definition.node_name(enclosing) == condition {
        return true;
    }
    let Some(condition) = definition.index.first_non_extension_node_by_name(condition) else {
        return false;
    };
    match condition {
        Node::InterfaceTypeDefinition(_) => definition.node_implements_interface(enclosing, condition),
        Node::UnionTypeDefinition(_) => definition.node_is_union_member(enclosing, condition),
        _ => false,
    }
}

/// Splices inline fragments that always apply into their enclosing
/// selection set: fragments without a type condition, and fragments whose
/// condition is the enclosing type, an interface it implements or a union
/// it belongs to. Fragments with directives and fragments narrowing the
/// enclosing type are kept.
#[derive(Debug, Default)]
pub struct InlineFragmentResolving;

impl Visitor for InlineFragmentResolving {
    fn enter_inline_fragment(&mut self, ctx: &mut WalkContext<'_>, node: InlineFragmentRef) {
        let doc = &*ctx.operation;
        if !doc[node].directives.is_empty() {
            return;
        }
        let always_applies = match doc.inline_fragment_type_condition_name(node) {
            None => true,
            Some(condition) => match (ctx.definition, ctx.enclosing_type_definition()) {
                (Some(definition), Some(enclosing)) => {
                    condition_always_applies(definition, enclosing, condition)
                },
                _ => false,
            },
        };
        if !always_applies {
            return;
        }
        let Some((set, selection)) = ctx.current_selection() else {
            return;
        };
        let fragment_set = doc[node].selection_set;
        ctx.operation.replace_selection_on_selection_set(set, selection, fragment_set);
        ctx.skip_node();
    }
}
