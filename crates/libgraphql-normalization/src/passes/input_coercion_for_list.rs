use crate::passes::input_object_definition;
use libgraphql_ast::Document;
use libgraphql_ast::TypeKind;
use libgraphql_ast::Value;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;
use serde_json::Value as JsonValue;

/// Wraps single values passed where the schema expects a list, the way
/// GraphQL input coercion does: `ids: 1` for `[ID]` becomes `ids: [1]`.
///
/// Applies to literal argument values, recursing through list items and
/// input object fields, and to the JSON values of variables, driven by
/// the variable's declared type. `null` and variable references are never
/// wrapped.
#[derive(Debug, Default)]
pub struct InputCoercionForList;

/// Coerces the literal `value` against `ty`, a type of `definition`.
/// Nested lists and objects are updated in place.
fn coerce_value(doc: &mut Document, definition: &Document, value: Value, ty: TypeRef) -> Value {
    if matches!(value, Value::Null | Value::Variable(_)) {
        return value;
    }
    let nullable = &definition[definition.type_nullable(ty)];
    match (nullable.kind, value) {
        (TypeKind::List, Value::List(list)) => {
            let Some(item_type) = nullable.of_type else {
                return value;
            };
            let items = doc[list].values.clone();
            let coerced: Vec<Value> = items
                .iter()
                .map(|item| coerce_value(doc, definition, *item, item_type))
                .collect();
            doc[list].values = coerced;
            value
        },
        (TypeKind::List, _) => {
            let Some(item_type) = nullable.of_type else {
                return value;
            };
            let item = coerce_value(doc, definition, value, item_type);
            doc.add_list_value(vec![item])
        },
        (TypeKind::Named, Value::Object(object)) => {
            let Some(input_object) = input_object_definition(definition, definition.str(nullable.name)) else {
                return value;
            };
            for field in doc[object].fields.clone() {
                let field_name = doc.str(doc[field].name);
                let Some(field_definition) = definition.input_object_field_by_name(input_object, field_name)
                else {
                    continue;
                };
                let field_value = doc[field].value;
                let coerced = coerce_value(doc, definition, field_value, definition[field_definition].ty);
                doc[field].value = coerced;
            }
            value
        },
        _ => value,
    }
}

/// Coerces the JSON `value` against `ty`, a type of `ty_doc`. Input object
/// field types are always read from `definition`. Returns whether anything
/// changed.
fn coerce_json(ty_doc: &Document, ty: TypeRef, definition: &Document, value: &mut JsonValue) -> bool {
    if value.is_null() {
        return false;
    }
    let nullable = &ty_doc[ty_doc.type_nullable(ty)];
    match nullable.kind {
        TypeKind::List => {
            let Some(item_type) = nullable.of_type else {
                return false;
            };
            match value {
                JsonValue::Array(items) => items.iter_mut().fold(false, |changed, item| {
                    coerce_json(ty_doc, item_type, definition, item) || changed
                }),
                _ => {
                    let mut item = std::mem::take(value);
                    coerce_json(ty_doc, item_type, definition, &mut item);
                    *value = JsonValue::Array(vec![item]);
                    true
                },
            }
        },
        TypeKind::Named => {
            let JsonValue::Object(fields) = value else {
                return false;
            };
            let Some(input_object) = input_object_definition(definition, ty_doc.str(nullable.name)) else {
                return false;
            };
            let mut changed = false;
            for (key, field_value) in fields.iter_mut() {
                if let Some(field_definition) = definition.input_object_field_by_name(input_object, key) {
                    changed |= coerce_json(definition, definition[field_definition].ty, definition, field_value);
                }
            }
            changed
        },
        TypeKind::NonNull => false,
    }
}

impl Visitor for InputCoercionForList {
    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        let Some(definition) = ctx.definition else {
            return;
        };
        let Some(input_value) = ctx.argument_input_value_definition(node) else {
            return;
        };
        let doc = &mut *ctx.operation;
        let value = doc[node].value;
        let coerced = coerce_value(doc, definition, value, definition[input_value].ty);
        if coerced != value {
            log::trace!("wrapped argument `{}` into a list", doc.argument_name(node));
            doc[node].value = coerced;
        }
    }

    fn enter_variable_definition(&mut self, ctx: &mut WalkContext<'_>, node: VariableDefinitionRef) {
        let Some(definition) = ctx.definition else {
            return;
        };
        let doc = &mut *ctx.operation;
        let name = doc.variable_definition_name(node).to_owned();
        let Some(slot) = doc.input.variable_mut(&name) else {
            return;
        };
        let mut value = std::mem::take(slot);
        let changed = coerce_json(doc, doc[node].ty, definition, &mut value);
        if changed {
            log::trace!("wrapped variable ${name} into a list");
        }
        if let Some(slot) = doc.input.variable_mut(&name) {
            *slot = value;
        }
    }
}
