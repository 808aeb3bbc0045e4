use libgraphql_ast::Document;
use libgraphql_ast::Selection;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

fn is_conditional(doc: &Document, directive: DirectiveRef) -> bool {
    matches!(doc.directive_name(directive), "include" | "skip")
}

fn conditional_directives(doc: &Document, field: FieldRef) -> Vec<DirectiveRef> {
    doc[field]
        .directives
        .iter()
        .copied()
        .filter(|directive| is_conditional(doc, *directive))
        .collect()
}

/// Fields merge regardless of their other directives, but `@include` and
/// `@skip` must agree or the merged field would change what gets selected.
fn can_merge(doc: &Document, left: FieldRef, right: FieldRef) -> bool {
    let (l, r) = (&doc[left], &doc[right]);
    l.selection_set.is_some()
        && r.selection_set.is_some()
        && doc.field_name(left) == doc.field_name(right)
        && doc.field_alias(left) == doc.field_alias(right)
        && doc.argument_sets_are_equal(&l.arguments, &r.arguments)
        && doc.directive_sets_are_equal(
            &conditional_directives(doc, left),
            &conditional_directives(doc, right),
        )
}

/// Appends the directives of `from` that `into` does not already carry.
fn merge_directives(doc: &mut Document, into: FieldRef, from: FieldRef) {
    let missing: Vec<DirectiveRef> = doc[from]
        .directives
        .iter()
        .copied()
        .filter(|directive| {
            !doc[into]
                .directives
                .iter()
                .any(|existing| doc.directives_are_equal(*existing, *directive))
        })
        .collect();
    doc[into].directives.extend(missing);
}

fn find_mergeable(doc: &Document, set: SelectionSetRef) -> Option<(FieldRef, FieldRef, SelectionRef)> {
    let selections = &doc[set].selections;
    for (i, left) in selections.iter().enumerate() {
        let Selection::Field(left_field) = doc[*left] else {
            continue;
        };
        for right in &selections[i + 1..] {
            let Selection::Field(right_field) = doc[*right] else {
                continue;
            };
            if can_merge(doc, left_field, right_field) {
                return Some((left_field, right_field, *right));
            }
        }
    }
    None
}

/// Merges sibling fields with a selection set that share name, alias and
/// arguments. The later field's selections and new directives are appended
/// to the earlier field and the later field is dropped.
#[derive(Debug, Default)]
pub struct FieldSelectionMerging;

impl Visitor for FieldSelectionMerging {
    fn enter_selection_set(&mut self, ctx: &mut WalkContext<'_>, node: SelectionSetRef) {
        let Some((into, from, from_selection)) = find_mergeable(ctx.operation, node) else {
            return;
        };
        let doc = &mut *ctx.operation;
        if let (Some(target), Some(source)) = (doc[into].selection_set, doc[from].selection_set) {
            doc.append_selection_set(target, source);
        }
        merge_directives(doc, into, from);
        doc.remove_from_selection_set(node, from_selection);
        log::trace!("merged sibling selections of `{}`", doc.field_response_key(into));
        ctx.revisit_node();
    }
}
