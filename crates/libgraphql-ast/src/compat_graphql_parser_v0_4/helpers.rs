//! Sub-node importers shared by the query and schema importers.

use crate::Document;
use crate::Position;
use crate::compat_graphql_parser_v0_4::query;
use crate::document::Argument;
use crate::document::Directive;
use crate::document::FloatValue;
use crate::document::IntValue;
use crate::document::ObjectField;
use crate::document::ObjectValue;
use crate::document::StringValue;
use crate::document::Type;
use crate::document::Value;
use crate::refs::ArgumentRef;
use crate::refs::DirectiveRef;
use crate::refs::TypeRef;

pub(super) fn import_type(doc: &mut Document, ty: &query::Type) -> TypeRef {
    use graphql_parser::query::Type as GpType;
    match ty {
        GpType::NamedType(name) => doc.add_named_type(name),
        GpType::ListType(inner) => {
            let inner = import_type(doc, inner);
            doc.add(Type::list(inner))
        },
        GpType::NonNullType(inner) => {
            let inner = import_type(doc, inner);
            doc.add(Type::non_null(inner))
        },
    }
}

pub(super) fn import_value(doc: &mut Document, value: &query::Value) -> Value {
    use graphql_parser::query::Value as GpValue;
    match value {
        GpValue::Null => Value::Null,
        GpValue::Boolean(b) => Value::Boolean(*b),
        GpValue::Int(number) => {
            let raw = number.as_i64().unwrap_or_default().to_string();
            let raw = doc.input.append_input_str(&raw);
            Value::Int(doc.add(IntValue { raw }))
        },
        GpValue::Float(float) => {
            // `{:?}` keeps the fractional part of whole floats (`1.0`).
            let raw = doc.input.append_input_str(&format!("{float:?}"));
            Value::Float(doc.add(FloatValue { raw }))
        },
        GpValue::String(content) => {
            let content = doc.input.append_input_str(content);
            Value::String(doc.add(StringValue { content, block: false }))
        },
        GpValue::Enum(name) => doc.add_enum_value(name),
        GpValue::Variable(name) => Value::Variable(doc.add_variable_value(name)),
        GpValue::List(values) => {
            let values = values.iter().map(|value| import_value(doc, value)).collect();
            doc.add_list_value(values)
        },
        GpValue::Object(fields) => {
            let fields = fields
                .iter()
                .map(|(name, value)| {
                    let name = doc.input.append_input_str(name);
                    let value = import_value(doc, value);
                    doc.add(ObjectField { name, value })
                })
                .collect();
            Value::Object(doc.add(ObjectValue { fields }))
        },
    }
}

pub(super) fn import_arguments(
    doc: &mut Document,
    arguments: &[(String, query::Value)],
) -> Vec<ArgumentRef> {
    arguments
        .iter()
        .map(|(name, value)| {
            let name = doc.input.append_input_str(name);
            let value = import_value(doc, value);
            doc.add(Argument { name, value })
        })
        .collect()
}

pub(super) fn import_directives(doc: &mut Document, directives: &[query::Directive]) -> Vec<DirectiveRef> {
    directives
        .iter()
        .map(|directive| {
            let name = doc.input.append_input_str(&directive.name);
            let arguments = import_arguments(doc, &directive.arguments);
            doc.add(Directive {
                name,
                arguments,
                position: Position::from(directive.position),
            })
        })
        .collect()
}

pub(super) fn import_description(
    doc: &mut Document,
    description: &Option<String>,
) -> Option<crate::ByteSliceReference> {
    description
        .as_deref()
        .map(|description| doc.input.append_input_str(description))
}
