use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Logically deletes the type extensions
/// [`ExtendTypeDefinitions`](crate::passes::ExtendTypeDefinitions) merged,
/// dropping them from the root nodes and from the name index.
#[derive(Debug, Default)]
pub struct RemoveMergedTypeExtensions;

impl Visitor for RemoveMergedTypeExtensions {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
        let doc = &mut *ctx.operation;
        let merged = std::mem::take(&mut doc.index.merged_type_extensions);
        for extension in merged {
            let name = doc.node_name(extension).to_owned();
            doc.remove_root_node(extension);
            doc.index.remove_node(&name, extension);
        }
    }
}
