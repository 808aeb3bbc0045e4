use libgraphql_ast::Document;
use libgraphql_ast::Selection;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

fn can_merge(doc: &Document, left: InlineFragmentRef, right: InlineFragmentRef) -> bool {
    doc.inline_fragment_type_condition_name(left) == doc.inline_fragment_type_condition_name(right)
        && doc.directive_sets_are_equal(&doc[left].directives, &doc[right].directives)
}

/// First pair of mergeable sibling inline fragments in `set`, with the
/// selection holding the later one.
fn find_mergeable(
    doc: &Document,
    set: SelectionSetRef,
) -> Option<(InlineFragmentRef, InlineFragmentRef, SelectionRef)> {
    let selections = &doc[set].selections;
    for (i, left) in selections.iter().enumerate() {
        let Selection::InlineFragment(left_fragment) = doc[*left] else {
            continue;
        };
        for right in &selections[i + 1..] {
            let Selection::InlineFragment(right_fragment) = doc[*right] else {
                continue;
            };
            if can_merge(doc, left_fragment, right_fragment) {
                return Some((left_fragment, right_fragment, *right));
            }
        }
    }
    None
}

/// Merges sibling inline fragments with the same type condition and equal
/// directives: the later fragment's selections move into the earlier one.
#[derive(Debug, Default)]
pub struct InlineFragmentMerging;

impl Visitor for InlineFragmentMerging {
    fn enter_selection_set(&mut self, ctx: &mut WalkContext<'_>, node: SelectionSetRef) {
        let Some((into, from, from_selection)) = find_mergeable(ctx.operation, node) else {
            return;
        };
        let doc = &mut *ctx.operation;
        let (target, source) = (doc[into].selection_set, doc[from].selection_set);
        doc.append_selection_set(target, source);
        doc.remove_from_selection_set(node, from_selection);
        ctx.revisit_node();
    }
}
