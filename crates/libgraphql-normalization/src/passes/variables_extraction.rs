use libgraphql_ast::InternalError;
use libgraphql_ast::Node;
use libgraphql_ast::Value;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;
use serde_json::Value as JsonValue;

#[derive(Debug)]
struct ExtractedVariable {
    name: String,
    value: JsonValue,
    /// Argument type in the definition Document.
    schema_type: TypeRef,
}

/// Moves literal field arguments of operations into variables.
///
/// Each argument without variables becomes `$name`, with the literal as the
/// variable's JSON value and the schema type of the argument as the
/// variable's type. Within one operation, literals with equal JSON values
/// and equal schema types share a single variable. Directive arguments and
/// arguments the schema does not define are left alone.
#[derive(Debug, Default)]
pub struct VariablesExtraction {
    extracted: Vec<ExtractedVariable>,
}

impl Visitor for VariablesExtraction {
    fn enter_operation_definition(&mut self, _ctx: &mut WalkContext<'_>, _node: OperationDefinitionRef) {
        self.extracted.clear();
    }

    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        let Some(definition) = ctx.definition else {
            return;
        };
        let Some(Node::OperationDefinition(operation)) = ctx.ancestors().first().copied() else {
            return;
        };
        if ctx.is_inside_directive() {
            return;
        }
        let Some(input_value) = ctx.argument_input_value_definition(node) else {
            return;
        };

        let doc = &*ctx.operation;
        let value = doc[node].value;
        if doc.value_contains_variable(value) {
            return;
        }
        let json = match doc.value_to_json(value) {
            Ok(json) => json,
            Err(source) => {
                let argument = doc.argument_name(node).to_owned();
                ctx.stop_with_internal_err(InternalError::ValueToJson { argument, source });
                return;
            },
        };

        let schema_type = definition[input_value].ty;
        let reused = self
            .extracted
            .iter()
            .find(|extracted| {
                extracted.value == json && definition.types_are_equal_deep(extracted.schema_type, schema_type)
            })
            .map(|extracted| extracted.name.clone());
        let doc = &mut *ctx.operation;
        let name = match reused {
            Some(name) => name,
            None => {
                let name = doc.generate_unused_variable_definition_name(operation);
                doc.input.set_variable(name.clone(), json.clone());
                let ty = doc.import_type(definition, schema_type);
                doc.add_variable_definition_to_operation(operation, &name, ty);
                self.extracted.push(ExtractedVariable {
                    name: name.clone(),
                    value: json,
                    schema_type,
                });
                name
            },
        };
        log::trace!("extracted argument `{}` into ${name}", doc.argument_name(node));
        let variable = doc.add_variable_value(&name);
        doc[node].value = Value::Variable(variable);
    }
}
