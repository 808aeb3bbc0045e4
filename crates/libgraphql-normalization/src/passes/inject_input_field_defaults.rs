use crate::passes::input_object_definition;
use libgraphql_ast::Document;
use libgraphql_ast::InternalError;
use libgraphql_ast::TypeKind;
use libgraphql_ast::ValueToJsonError;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;
use serde_json::Value as JsonValue;

/// Fills in the schema defaults of input object fields missing from
/// variable values.
///
/// Fields of input object type are descended into when present, or when
/// they have a default, which is inserted first. Other fields with a
/// default are inserted when missing. Values of custom scalars are opaque
/// and never entered.
#[derive(Debug, Default)]
pub struct InjectInputFieldDefaults;

/// Failure to convert the default of input field `field`.
struct DefaultConversionError {
    field: String,
    source: ValueToJsonError,
}

/// Injects defaults into `value`, whose type is `ty` in `ty_doc`.
fn inject(
    ty_doc: &Document,
    ty: TypeRef,
    definition: &Document,
    value: &mut JsonValue,
) -> Result<(), DefaultConversionError> {
    let nullable = &ty_doc[ty_doc.type_nullable(ty)];
    match nullable.kind {
        TypeKind::List => {
            let (Some(item_type), JsonValue::Array(items)) = (nullable.of_type, value) else {
                return Ok(());
            };
            for item in items {
                inject(ty_doc, item_type, definition, item)?;
            }
            Ok(())
        },
        TypeKind::Named => {
            let JsonValue::Object(fields) = value else {
                return Ok(());
            };
            let Some(input_object) = input_object_definition(definition, ty_doc.str(nullable.name)) else {
                return Ok(());
            };
            for field in &definition[input_object].fields {
                let field = &definition[*field];
                let field_name = definition.str(field.name);
                if !fields.contains_key(field_name) {
                    let Some(default_value) = field.default_value else {
                        continue;
                    };
                    let json = definition
                        .value_to_json(default_value)
                        .map_err(|source| DefaultConversionError {
                            field: field_name.to_owned(),
                            source,
                        })?;
                    fields.insert(field_name.to_owned(), json);
                }
                let field_type_name = definition.resolve_type_name(field.ty);
                if input_object_definition(definition, field_type_name).is_none() {
                    continue;
                }
                if let Some(field_value) = fields.get_mut(field_name) {
                    inject(definition, field.ty, definition, field_value)?;
                }
            }
            Ok(())
        },
        TypeKind::NonNull => Ok(()),
    }
}

impl Visitor for InjectInputFieldDefaults {
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
        let injected = inject(doc, doc[node].ty, definition, &mut value);
        if let Some(slot) = doc.input.variable_mut(&name) {
            *slot = value;
        }
        if let Err(DefaultConversionError { field, source }) = injected {
            ctx.stop_with_internal_err(InternalError::ValueToJson { argument: field, source });
        }
    }
}
