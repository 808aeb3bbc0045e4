use libgraphql_ast::Document;
use libgraphql_ast::Selection;
use libgraphql_ast::refs::SelectionRef;
use libgraphql_ast::refs::SelectionSetRef;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

fn find_duplicate(doc: &Document, set: SelectionSetRef) -> Option<SelectionRef> {
    let selections = &doc[set].selections;
    for (i, left) in selections.iter().enumerate() {
        let Selection::Field(left) = doc[*left] else {
            continue;
        };
        for right in &selections[i + 1..] {
            if let Selection::Field(right_field) = doc[*right] {
                if doc.fields_are_equal_flat(left, right_field) {
                    return Some(*right);
                }
            }
        }
    }
    None
}

/// Drops later copies of identical leaf fields: same name, alias, arguments
/// and directives, and no selection set.
#[derive(Debug, Default)]
pub struct FieldDeduplication;

impl Visitor for FieldDeduplication {
    fn enter_selection_set(&mut self, ctx: &mut WalkContext<'_>, node: SelectionSetRef) {
        let Some(duplicate) = find_duplicate(ctx.operation, node) else {
            return;
        };
        ctx.operation.remove_from_selection_set(node, duplicate);
        ctx.revisit_node();
    }
}
