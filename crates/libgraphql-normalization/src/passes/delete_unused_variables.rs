use indexmap::IndexMap;
use indexmap::IndexSet;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Removes variable definitions no argument refers to, along with their
/// JSON values.
///
/// Variables used inside fragment definitions count as used by every
/// operation, since those fragments may still be spread into it. A JSON
/// value is only removed when no remaining operation declares the
/// variable.
#[derive(Debug, Default)]
pub struct DeleteUnusedVariables {
    used_by_operation: IndexMap<OperationDefinitionRef, IndexSet<String>>,
    used_in_fragments: IndexSet<String>,
}

impl Visitor for DeleteUnusedVariables {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.used_by_operation.clear();
        self.used_in_fragments.clear();
    }

    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        let doc = &*ctx.operation;
        let mut names = vec![];
        doc.variables_used_in_value(doc[node].value, &mut names);
        if names.is_empty() {
            return;
        }
        let used = match ctx.enclosing_operation() {
            Some(operation) => self.used_by_operation.entry(operation).or_default(),
            None => &mut self.used_in_fragments,
        };
        used.extend(names.into_iter().map(str::to_owned));
    }

    fn leave_document(&mut self, ctx: &mut WalkContext<'_>) {
        let doc = &mut *ctx.operation;
        let operations: Vec<OperationDefinitionRef> = doc.operation_definition_refs().collect();
        let mut removed: IndexSet<String> = IndexSet::new();
        for operation in &operations {
            let used = self.used_by_operation.get(operation);
            let definitions = doc[*operation].variable_definitions.clone();
            let (kept, unused): (Vec<VariableDefinitionRef>, Vec<VariableDefinitionRef>) =
                definitions.into_iter().partition(|definition| {
                    let name = doc.variable_definition_name(*definition);
                    used.is_some_and(|used| used.contains(name)) || self.used_in_fragments.contains(name)
                });
            for definition in unused {
                removed.insert(doc.variable_definition_name(definition).to_owned());
            }
            doc[*operation].variable_definitions = kept;
        }

        for name in removed {
            let still_declared = operations
                .iter()
                .any(|operation| doc.variable_definition_by_name(*operation, &name).is_some());
            if !still_declared {
                log::trace!("removed unused variable ${name}");
                doc.input.remove_variable(&name);
            }
        }
    }
}
