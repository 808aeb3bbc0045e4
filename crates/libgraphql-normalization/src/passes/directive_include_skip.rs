use crate::passes::selection_directives_mut;
use libgraphql_ast::Document;
use libgraphql_ast::Node;
use libgraphql_ast::Value;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;
use smallvec::SmallVec;

/// Alias of the `__typename` field put into a selection set that lost all
/// of its selections to `@include`/`@skip`.
pub const TYPENAME_PLACEHOLDER_ALIAS: &str = "__internal__typename_placeholder";

/// Applies `@include(if:)` and `@skip(if:)` to fields, fragment spreads and
/// inline fragments.
///
/// A selection is dropped when an `@include` condition is false or a
/// `@skip` condition is true; otherwise the resolved directives are
/// stripped from it. Conditions are literal booleans, or variables when
/// [`with_variable_resolution`](Self::with_variable_resolution) is on and
/// the variable holds a JSON boolean. Anything else leaves the directive
/// in place.
#[derive(Debug, Default)]
pub struct DirectiveIncludeSkip {
    resolve_variables: bool,
}

impl DirectiveIncludeSkip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable_resolution(mut self, enabled: bool) -> Self {
        self.resolve_variables = enabled;
        self
    }

    /// `Some(keep)` for an `@include`/`@skip` whose condition is known.
    fn evaluate(&self, doc: &Document, directive: DirectiveRef) -> Option<bool> {
        let skip = match doc.directive_name(directive) {
            "include" => false,
            "skip" => true,
            _ => return None,
        };
        let condition = match doc.directive_argument_value(directive, "if")? {
            Value::Boolean(value) => value,
            Value::Variable(variable) if self.resolve_variables => {
                doc.input.variable(doc.variable_value_name(variable))?.as_bool()?
            },
            _ => return None,
        };
        Some(condition != skip)
    }

    fn apply(&self, ctx: &mut WalkContext<'_>, node: Node) {
        let doc = &mut *ctx.operation;
        let Some(directives) = selection_directives_mut(doc, node) else {
            return;
        };
        let directives = directives.clone();
        let mut keep = true;
        let mut resolved: SmallVec<[DirectiveRef; 2]> = SmallVec::new();
        for directive in directives {
            if let Some(keep_node) = self.evaluate(doc, directive) {
                keep &= keep_node;
                resolved.push(directive);
            }
        }

        if keep {
            if let Some(directives) = selection_directives_mut(doc, node) {
                directives.retain(|directive| !resolved.contains(directive));
            }
            return;
        }

        let Some((set, selection)) = ctx.current_selection() else {
            return;
        };
        let doc = &mut *ctx.operation;
        doc.remove_from_selection_set(set, selection);
        if doc.selection_set_is_empty(set) {
            let placeholder = doc.add_field_selection(Some(TYPENAME_PLACEHOLDER_ALIAS), "__typename");
            doc[set].selections.push(placeholder);
        }
        log::trace!("removed {} excluded by @include/@skip", node.kind_name());
        ctx.skip_node();
    }
}

impl Visitor for DirectiveIncludeSkip {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        self.apply(ctx, Node::Field(node));
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, node: FragmentSpreadRef) {
        self.apply(ctx, Node::FragmentSpread(node));
    }

    fn enter_inline_fragment(&mut self, ctx: &mut WalkContext<'_>, node: InlineFragmentRef) {
        self.apply(ctx, Node::InlineFragment(node));
    }
}
