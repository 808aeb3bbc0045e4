use crate::passes::FragmentSpreadDepths;
use libgraphql_ast::Document;
use libgraphql_ast::ExternalError;
use libgraphql_ast::InlineFragment;
use libgraphql_ast::Node;
use libgraphql_ast::Selection;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// How a fragment's type relates to the type it is spread into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SpreadRelation {
    /// The fragment always applies; its selections can be spliced in.
    Splice,
    /// The fragment applies to some possible types; it becomes an inline
    /// fragment keeping its type condition.
    Wrap,
    /// No possible type in common.
    Inapplicable,
}

fn spread_relation(definition: &Document, enclosing: Node, fragment_type: Node) -> SpreadRelation {
    use Node::*;
    if definition.node_name(enclosing) == definition.node_name(fragment_type) {
        return SpreadRelation::Splice;
    }
    match (enclosing, fragment_type) {
        (ObjectTypeDefinition(_) | InterfaceTypeDefinition(_), InterfaceTypeDefinition(_))
            if definition.node_implements_interface(enclosing, fragment_type) =>
        {
            SpreadRelation::Splice
        },
        (ObjectTypeDefinition(_), UnionTypeDefinition(_))
            if definition.node_is_union_member(enclosing, fragment_type) =>
        {
            SpreadRelation::Wrap
        },
        (InterfaceTypeDefinition(_), ObjectTypeDefinition(_))
            if definition.node_implements_interface(fragment_type, enclosing) =>
        {
            SpreadRelation::Wrap
        },
        (UnionTypeDefinition(_), ObjectTypeDefinition(_))
            if definition.node_is_union_member(fragment_type, enclosing) =>
        {
            SpreadRelation::Wrap
        },
        (InterfaceTypeDefinition(_), UnionTypeDefinition(_))
            if definition.union_intersects_interface(fragment_type, enclosing) =>
        {
            SpreadRelation::Wrap
        },
        (UnionTypeDefinition(_), InterfaceTypeDefinition(_))
            if definition.union_intersects_interface(enclosing, fragment_type) =>
        {
            SpreadRelation::Wrap
        },
        (InterfaceTypeDefinition(_), InterfaceTypeDefinition(_))
            if definition.interfaces_intersect(enclosing, fragment_type) =>
        {
            SpreadRelation::Wrap
        },
        _ => SpreadRelation::Inapplicable,
    }
}

#[derive(Debug)]
struct PendingInline {
    set: SelectionSetRef,
    selection: SelectionRef,
    spread: FragmentSpreadRef,
    fragment: FragmentDefinitionRef,
    wrap: bool,
    depth: usize,
}

/// Replaces fragment spreads with the fragments' selections.
///
/// A spread whose fragment always applies to the enclosing type, and that
/// carries no directives, is spliced into the enclosing selection set.
/// Other applicable spreads become inline fragments with the fragment's
/// type condition and the spread's directives. Spreads that cannot apply
/// are left alone.
///
/// Spreads are collected during the walk and inlined once it is done,
/// deepest first, so every fragment copied into an operation has already
/// had its own spreads inlined. Depths come from a prior
/// [`FragmentSpreadDepth`](crate::passes::FragmentSpreadDepth) walk.
#[derive(Debug, Default)]
pub struct FragmentSpreadInlining {
    depths: FragmentSpreadDepths,
    pending: Vec<PendingInline>,
}

impl FragmentSpreadInlining {
    pub fn new(depths: FragmentSpreadDepths) -> Self {
        Self {
            depths,
            pending: vec![],
        }
    }

    fn inline(doc: &mut Document, pending: &PendingInline) {
        let fragment = &doc[pending.fragment];
        let (fragment_set, type_condition) = (fragment.selection_set, fragment.type_condition);
        let selection_set = doc.copy_selection_set(fragment_set);
        if pending.wrap {
            let type_condition = doc.copy_type(type_condition);
            let directives = std::mem::take(&mut doc[pending.spread].directives);
            let position = doc[pending.spread].position;
            let inline_fragment = doc.add(InlineFragment {
                type_condition: Some(type_condition),
                directives,
                selection_set,
                position,
            });
            doc[pending.selection] = Selection::InlineFragment(inline_fragment);
        } else {
            doc.replace_selection_on_selection_set(pending.set, pending.selection, selection_set);
        }
    }
}

impl Visitor for FragmentSpreadInlining {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.pending.clear();
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, node: FragmentSpreadRef) {
        let Some(definition) = ctx.definition else {
            return;
        };
        let doc = &*ctx.operation;
        let fragment_name = doc.fragment_spread_name(node);
        let Some(fragment) = doc.fragment_definition_ref(fragment_name) else {
            let error = ExternalError::fragment_undefined(fragment_name).at(doc[node].position);
            ctx.stop_with_external_err(error);
            return;
        };
        let fragment_type_name = doc.fragment_definition_type_name(fragment);
        let Some(fragment_type) = definition.index.first_non_extension_node_by_name(fragment_type_name)
        else {
            let error = ExternalError::type_undefined(fragment_type_name).at(doc[fragment].position);
            ctx.stop_with_external_err(error);
            return;
        };
        let (Some(enclosing), Some((set, selection))) =
            (ctx.enclosing_type_definition(), ctx.current_selection())
        else {
            return;
        };

        let wrap = match spread_relation(definition, enclosing, fragment_type) {
            SpreadRelation::Inapplicable => return,
            SpreadRelation::Splice => !doc[node].directives.is_empty(),
            SpreadRelation::Wrap => true,
        };
        let depth = self.depths.depth(node).unwrap_or_else(|| {
            ctx.ancestors()
                .iter()
                .filter(|ancestor| matches!(ancestor, Node::SelectionSet(_)))
                .count()
        });
        if self.pending.iter().any(|pending| pending.spread == node) {
            return;
        }
        self.pending.push(PendingInline {
            set,
            selection,
            spread: node,
            fragment,
            wrap,
            depth,
        });
    }

    fn leave_document(&mut self, ctx: &mut WalkContext<'_>) {
        let mut pending = std::mem::take(&mut self.pending);
        pending.sort_by_key(|pending| std::cmp::Reverse(pending.depth));
        for pending in &pending {
            log::trace!(
                "inlining ...{} at depth {}{}",
                ctx.operation.fragment_spread_name(pending.spread),
                pending.depth,
                if pending.wrap { " as inline fragment" } else { "" },
            );
            Self::inline(ctx.operation, pending);
        }
    }
}
