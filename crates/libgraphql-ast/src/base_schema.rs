use crate::Document;
use crate::Node;
use crate::document::DirectiveDefinition;
use crate::document::InputValueDefinition;
use crate::document::OperationType;
use crate::document::ScalarTypeDefinition;
use crate::document::Type;
use crate::document::Value;
use crate::refs::InputValueDefinitionRef;

const BUILT_IN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

const CONDITION_LOCATIONS: [&str; 3] = ["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"];

const DEPRECATED_LOCATIONS: [&str; 4] = [
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INPUT_FIELD_DEFINITION",
    "ENUM_VALUE",
];

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Adds everything a user schema may rely on without declaring it: the
/// built-in scalars, the `@include`, `@skip` and `@deprecated` directives,
/// and (absent a `schema { … }` block) the conventional root operation
/// types.
///
/// Definitions the schema already declares are left alone, so merging twice
/// is a no-op.
pub fn merge_base_schema(doc: &mut Document) {
    for name in BUILT_IN_SCALARS {
        if has_type_definition(doc, name) {
            continue;
        }
        let name_ref = doc.input.append_input_str(name);
        let scalar = doc.add(ScalarTypeDefinition {
            name: name_ref,
            ..ScalarTypeDefinition::default()
        });
        doc.add_root_node(Node::ScalarTypeDefinition(scalar));
        log::trace!("added built-in scalar `{name}`");
    }

    for name in ["include", "skip"] {
        if doc.directive_definition_by_name(name).is_none() {
            let argument = add_input_value(doc, "if", "Boolean", true, None);
            add_directive_definition(doc, name, argument, &CONDITION_LOCATIONS);
        }
    }
    if doc.directive_definition_by_name("deprecated").is_none() {
        let reason = doc.add_string_value(DEFAULT_DEPRECATION_REASON);
        let argument = add_input_value(doc, "reason", "String", false, Some(reason));
        add_directive_definition(doc, "deprecated", argument, &DEPRECATED_LOCATIONS);
    }

    let has_schema_definition = doc
        .root_nodes
        .iter()
        .any(|node| matches!(node, Node::SchemaDefinition(_)));
    if has_schema_definition {
        return;
    }
    let conventional_roots = [
        (OperationType::Query, "Query"),
        (OperationType::Mutation, "Mutation"),
        (OperationType::Subscription, "Subscription"),
    ];
    for (operation_type, name) in conventional_roots {
        let is_object_type = doc
            .index
            .first_non_extension_node_by_name(name)
            .is_some_and(|node| matches!(node, Node::ObjectTypeDefinition(_)));
        if is_object_type && doc.root_operation_type_name(operation_type).is_none() {
            doc.index.set_root_operation_type_name(operation_type, name);
        }
    }
}

fn has_type_definition(doc: &Document, name: &str) -> bool {
    doc.index.nodes_by_name(name).is_some_and(|nodes| {
        nodes
            .iter()
            .any(|node| node.is_type_definition() && doc.node_name(*node) == name)
    })
}

fn add_input_value(
    doc: &mut Document,
    name: &str,
    type_name: &str,
    non_null: bool,
    default_value: Option<Value>,
) -> InputValueDefinitionRef {
    let mut ty = doc.add_named_type(type_name);
    if non_null {
        ty = doc.add(Type::non_null(ty));
    }
    let name = doc.input.append_input_str(name);
    doc.add(InputValueDefinition {
        description: None,
        name,
        ty,
        default_value,
        directives: vec![],
        position: Default::default(),
    })
}

fn add_directive_definition(
    doc: &mut Document,
    name: &str,
    argument: InputValueDefinitionRef,
    locations: &[&str],
) {
    let name_ref = doc.input.append_input_str(name);
    let locations = locations
        .iter()
        .map(|location| doc.input.append_input_str(location))
        .collect();
    let directive = doc.add(DirectiveDefinition {
        description: None,
        name: name_ref,
        arguments: vec![argument],
        repeatable: false,
        locations,
        position: Default::default(),
    });
    doc.add_root_node(Node::DirectiveDefinition(directive));
    log::trace!("added built-in directive `@{name}`");
}
