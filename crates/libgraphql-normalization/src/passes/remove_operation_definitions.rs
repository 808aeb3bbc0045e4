use libgraphql_ast::ExternalError;
use libgraphql_ast::Node;
use libgraphql_ast::refs::OperationDefinitionRef;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Keeps only the operation named `operation_name`, logically deleting every
/// other operation definition. Stops with `OperationNameNotFound` when no
/// operation carries the name.
pub struct RemoveNotMatchingOperationDefinitions {
    operation_name: String,
}

impl RemoveNotMatchingOperationDefinitions {
    pub fn new(operation_name: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
        }
    }
}

impl Visitor for RemoveNotMatchingOperationDefinitions {
    fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
        let doc = &mut *ctx.operation;
        let (matching, others): (Vec<OperationDefinitionRef>, Vec<OperationDefinitionRef>) = doc
            .operation_definition_refs()
            .partition(|r| doc.operation_definition_name(*r) == self.operation_name);
        if matching.is_empty() {
            ctx.stop_with_external_err(ExternalError::operation_name_not_found(
                &self.operation_name,
            ));
            return;
        }
        for operation in others {
            doc.remove_root_node(Node::OperationDefinition(operation));
        }
        log::trace!("kept operation `{}`", self.operation_name);
    }
}
