use crate::passes::input_object_definition;
use indexmap::IndexSet;
use libgraphql_ast::Document;
use libgraphql_ast::InternalError;
use libgraphql_ast::Type;
use libgraphql_ast::TypeKind;
use libgraphql_ast::Value;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Turns defaults into explicit variable values.
///
/// * A variable definition's default value becomes the variable's JSON
///   value, unless one was supplied, and is erased from the definition.
/// * A field argument the operation omits but the schema gives a default
///   is added as a new variable carrying that default.
///
/// A variable that lost its default and is used where the schema requires
/// a non-null value gets its type made non-null, since the value is now
/// always present.
#[derive(Debug, Default)]
pub struct VariablesDefaultValueExtraction {
    defaulted: Vec<VariableDefinitionRef>,
    non_null_usages: IndexSet<String>,
}

impl VariablesDefaultValueExtraction {
    /// Records variables appearing at non-null positions of `value`, whose
    /// schema type is `ty`.
    fn record_non_null_usages(&mut self, doc: &Document, definition: &Document, value: Value, ty: TypeRef) {
        match value {
            Value::Variable(variable) => {
                if definition.type_is_non_null(ty) {
                    self.non_null_usages.insert(doc.variable_value_name(variable).to_owned());
                }
            },
            Value::List(list) => {
                let nullable = &definition[definition.type_nullable(ty)];
                let (TypeKind::List, Some(item_type)) = (nullable.kind, nullable.of_type) else {
                    return;
                };
                for item in &doc[list].values {
                    self.record_non_null_usages(doc, definition, *item, item_type);
                }
            },
            Value::Object(object) => {
                let Some(input_object) = input_object_definition(definition, definition.resolve_type_name(ty))
                else {
                    return;
                };
                for field in &doc[object].fields {
                    let field = &doc[*field];
                    if let Some(field_definition) =
                        definition.input_object_field_by_name(input_object, doc.str(field.name))
                    {
                        self.record_non_null_usages(doc, definition, field.value, definition[field_definition].ty);
                    }
                }
            },
            _ => {},
        }
    }
}

impl Visitor for VariablesDefaultValueExtraction {
    fn enter_operation_definition(&mut self, _ctx: &mut WalkContext<'_>, _node: OperationDefinitionRef) {
        self.defaulted.clear();
        self.non_null_usages.clear();
    }

    fn enter_variable_definition(&mut self, ctx: &mut WalkContext<'_>, node: VariableDefinitionRef) {
        let doc = &mut *ctx.operation;
        let Some(default_value) = doc[node].default_value else {
            return;
        };
        let name = doc.variable_definition_name(node).to_owned();
        if !doc.input.has_variable(&name) {
            match doc.value_to_json(default_value) {
                Ok(json) => doc.input.set_variable(name, json),
                Err(source) => {
                    ctx.stop_with_internal_err(InternalError::ValueToJson { argument: name, source });
                    return;
                },
            }
        }
        doc[node].default_value = None;
        self.defaulted.push(node);
    }

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        let (Some(definition), Some(operation)) = (ctx.definition, ctx.enclosing_operation()) else {
            return;
        };
        let Some(field_definition) = ctx.field_definition(node) else {
            return;
        };
        for input_value in &definition[field_definition].arguments {
            let input_value = &definition[*input_value];
            let argument_name = definition.str(input_value.name);
            let doc = &mut *ctx.operation;
            if let Some(argument) = doc.argument_by_name(&doc[node].arguments, argument_name) {
                let value = doc[argument].value;
                self.record_non_null_usages(doc, definition, value, input_value.ty);
                continue;
            }
            let Some(default_value) = input_value.default_value else {
                continue;
            };
            let json = match definition.value_to_json(default_value) {
                Ok(json) => json,
                Err(source) => {
                    let argument = argument_name.to_owned();
                    ctx.stop_with_internal_err(InternalError::ValueToJson { argument, source });
                    return;
                },
            };
            let name = doc.generate_unused_variable_definition_name(operation);
            doc.input.set_variable(name.clone(), json);
            let ty = doc.import_type(definition, input_value.ty);
            doc.add_variable_definition_to_operation(operation, &name, ty);
            let variable = doc.add_variable_value(&name);
            let argument = doc.add_argument(argument_name, Value::Variable(variable));
            doc[node].arguments.push(argument);
            log::trace!("argument `{argument_name}` defaults through ${name}");
        }
    }

    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        let Some(definition) = ctx.definition else {
            return;
        };
        if ctx.enclosing_operation().is_none() || !ctx.is_inside_directive() {
            return;
        }
        let Some(input_value) = ctx.argument_input_value_definition(node) else {
            return;
        };
        let value = ctx.operation[node].value;
        self.record_non_null_usages(ctx.operation, definition, value, definition[input_value].ty);
    }

    fn leave_operation_definition(&mut self, ctx: &mut WalkContext<'_>, _node: OperationDefinitionRef) {
        let doc = &mut *ctx.operation;
        for definition in self.defaulted.drain(..) {
            let ty = doc[definition].ty;
            let used_as_non_null = self
                .non_null_usages
                .contains(doc.variable_definition_name(definition));
            if used_as_non_null && !doc.type_is_non_null(ty) {
                let non_null = doc.add(Type::non_null(ty));
                doc[definition].ty = non_null;
            }
        }
    }
}
