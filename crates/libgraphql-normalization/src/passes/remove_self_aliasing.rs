use libgraphql_ast::refs::FieldRef;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Drops aliases equal to their field's name: `name: name` becomes `name`.
#[derive(Debug, Default)]
pub struct RemoveSelfAliasing;

impl Visitor for RemoveSelfAliasing {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        let doc = &mut *ctx.operation;
        if doc.field_alias(node) == Some(doc.field_name(node)) {
            doc[node].alias = None;
        }
    }
}
