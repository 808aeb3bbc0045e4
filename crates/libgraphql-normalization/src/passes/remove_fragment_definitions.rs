use libgraphql_ast::Node;
use libgraphql_ast::refs::FragmentDefinitionRef;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Logically deletes every fragment definition of the Document.
#[derive(Debug, Default)]
pub struct RemoveFragmentDefinitions;

impl Visitor for RemoveFragmentDefinitions {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
        let doc = &mut *ctx.operation;
        let fragments: Vec<FragmentDefinitionRef> = doc.fragment_definition_refs().collect();
        for fragment in fragments {
            doc.remove_root_node(Node::FragmentDefinition(fragment));
        }
    }
}
