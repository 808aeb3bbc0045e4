//! `graphql_parser` v0.4 schema `Document` → arena [`Document`].

use crate::Document;
use crate::Node;
use crate::Position;
use crate::compat_graphql_parser_v0_4::helpers::import_description;
use crate::compat_graphql_parser_v0_4::helpers::import_directives;
use crate::compat_graphql_parser_v0_4::helpers::import_type;
use crate::compat_graphql_parser_v0_4::helpers::import_value;
use crate::compat_graphql_parser_v0_4::schema;
use crate::document::*;
use crate::refs::*;

pub(super) struct SchemaImporter<'doc> {
    doc: &'doc mut Document,
}

impl<'doc> SchemaImporter<'doc> {
    pub(super) fn new(doc: &'doc mut Document) -> Self {
        Self { doc }
    }

    pub(super) fn import_document(&mut self, ast: &schema::Document) {
        use graphql_parser::schema::Definition as GpDef;
        for definition in &ast.definitions {
            let node = match definition {
                GpDef::SchemaDefinition(schema) => self.import_schema_definition(schema),
                GpDef::TypeDefinition(ty) => self.import_type_definition(ty),
                GpDef::TypeExtension(extension) => self.import_type_extension(extension),
                GpDef::DirectiveDefinition(directive) => self.import_directive_definition(directive),
            };
            self.doc.add_root_node(node);
        }
    }

    fn import_schema_definition(&mut self, schema: &schema::SchemaDefinition) -> Node {
        let directives = import_directives(self.doc, &schema.directives);
        let roots = [
            (OperationType::Query, &schema.query),
            (OperationType::Mutation, &schema.mutation),
            (OperationType::Subscription, &schema.subscription),
        ];
        let mut root_operation_types = vec![];
        for (operation_type, name) in roots {
            let Some(name) = name else {
                continue;
            };
            self.doc.index.set_root_operation_type_name(operation_type, name.as_str());
            let named_type = self.doc.add_named_type(name);
            root_operation_types.push(self.doc.add(RootOperationTypeDefinition {
                operation_type,
                named_type,
            }));
        }
        Node::SchemaDefinition(self.doc.add(SchemaDefinition {
            directives,
            root_operation_types,
            position: Position::from(schema.position),
        }))
    }

    fn import_type_definition(&mut self, ty: &schema::TypeDefinition) -> Node {
        use graphql_parser::schema::TypeDefinition as GpTy;
        match ty {
            GpTy::Scalar(scalar) => {
                let definition = ScalarTypeDefinition {
                    description: import_description(self.doc, &scalar.description),
                    name: self.doc.input.append_input_str(&scalar.name),
                    directives: import_directives(self.doc, &scalar.directives),
                    position: Position::from(scalar.position),
                };
                Node::ScalarTypeDefinition(self.doc.add(definition))
            },
            GpTy::Object(object) => {
                let definition = ObjectTypeDefinition {
                    description: import_description(self.doc, &object.description),
                    name: self.doc.input.append_input_str(&object.name),
                    implements_interfaces: self.import_named_types(&object.implements_interfaces),
                    directives: import_directives(self.doc, &object.directives),
                    fields: self.import_field_definitions(&object.fields),
                    position: Position::from(object.position),
                };
                Node::ObjectTypeDefinition(self.doc.add(definition))
            },
            GpTy::Interface(interface) => {
                let definition = InterfaceTypeDefinition {
                    description: import_description(self.doc, &interface.description),
                    name: self.doc.input.append_input_str(&interface.name),
                    implements_interfaces: self.import_named_types(&interface.implements_interfaces),
                    directives: import_directives(self.doc, &interface.directives),
                    fields: self.import_field_definitions(&interface.fields),
                    position: Position::from(interface.position),
                };
                Node::InterfaceTypeDefinition(self.doc.add(definition))
            },
            GpTy::Union(union) => {
                let definition = UnionTypeDefinition {
                    description: import_description(self.doc, &union.description),
                    name: self.doc.input.append_input_str(&union.name),
                    directives: import_directives(self.doc, &union.directives),
                    member_types: self.import_named_types(&union.types),
                    position: Position::from(union.position),
                };
                Node::UnionTypeDefinition(self.doc.add(definition))
            },
            GpTy::Enum(enum_type) => {
                let definition = EnumTypeDefinition {
                    description: import_description(self.doc, &enum_type.description),
                    name: self.doc.input.append_input_str(&enum_type.name),
                    directives: import_directives(self.doc, &enum_type.directives),
                    values: self.import_enum_values(&enum_type.values),
                    position: Position::from(enum_type.position),
                };
                Node::EnumTypeDefinition(self.doc.add(definition))
            },
            GpTy::InputObject(input_object) => {
                let definition = InputObjectTypeDefinition {
                    description: import_description(self.doc, &input_object.description),
                    name: self.doc.input.append_input_str(&input_object.name),
                    directives: import_directives(self.doc, &input_object.directives),
                    fields: self.import_input_values(&input_object.fields),
                    position: Position::from(input_object.position),
                };
                Node::InputObjectTypeDefinition(self.doc.add(definition))
            },
        }
    }

    fn import_type_extension(&mut self, extension: &schema::TypeExtension) -> Node {
        use graphql_parser::schema::TypeExtension as GpExt;
        match extension {
            GpExt::Scalar(scalar) => {
                let definition = ScalarTypeDefinition {
                    description: None,
                    name: self.doc.input.append_input_str(&scalar.name),
                    directives: import_directives(self.doc, &scalar.directives),
                    position: Position::from(scalar.position),
                };
                Node::ScalarTypeExtension(self.doc.add(ScalarTypeExtension { definition }))
            },
            GpExt::Object(object) => {
                let definition = ObjectTypeDefinition {
                    description: None,
                    name: self.doc.input.append_input_str(&object.name),
                    implements_interfaces: self.import_named_types(&object.implements_interfaces),
                    directives: import_directives(self.doc, &object.directives),
                    fields: self.import_field_definitions(&object.fields),
                    position: Position::from(object.position),
                };
                Node::ObjectTypeExtension(self.doc.add(ObjectTypeExtension { definition }))
            },
            GpExt::Interface(interface) => {
                let definition = InterfaceTypeDefinition {
                    description: None,
                    name: self.doc.input.append_input_str(&interface.name),
                    implements_interfaces: self.import_named_types(&interface.implements_interfaces),
                    directives: import_directives(self.doc, &interface.directives),
                    fields: self.import_field_definitions(&interface.fields),
                    position: Position::from(interface.position),
                };
                Node::InterfaceTypeExtension(self.doc.add(InterfaceTypeExtension { definition }))
            },
            GpExt::Union(union) => {
                let definition = UnionTypeDefinition {
                    description: None,
                    name: self.doc.input.append_input_str(&union.name),
                    directives: import_directives(self.doc, &union.directives),
                    member_types: self.import_named_types(&union.types),
                    position: Position::from(union.position),
                };
                Node::UnionTypeExtension(self.doc.add(UnionTypeExtension { definition }))
            },
            GpExt::Enum(enum_type) => {
                let definition = EnumTypeDefinition {
                    description: None,
                    name: self.doc.input.append_input_str(&enum_type.name),
                    directives: import_directives(self.doc, &enum_type.directives),
                    values: self.import_enum_values(&enum_type.values),
                    position: Position::from(enum_type.position),
                };
                Node::EnumTypeExtension(self.doc.add(EnumTypeExtension { definition }))
            },
            GpExt::InputObject(input_object) => {
                let definition = InputObjectTypeDefinition {
                    description: None,
                    name: self.doc.input.append_input_str(&input_object.name),
                    directives: import_directives(self.doc, &input_object.directives),
                    fields: self.import_input_values(&input_object.fields),
                    position: Position::from(input_object.position),
                };
                Node::InputObjectTypeExtension(self.doc.add(InputObjectTypeExtension { definition }))
            },
        }
    }

    fn import_directive_definition(&mut self, directive: &schema::DirectiveDefinition) -> Node {
        let description = import_description(self.doc, &directive.description);
        let name = self.doc.input.append_input_str(&directive.name);
        let arguments = self.import_input_values(&directive.arguments);
        let locations = directive
            .locations
            .iter()
            .map(|location| self.doc.input.append_input_str(location.as_str()))
            .collect();
        Node::DirectiveDefinition(self.doc.add(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable: directive.repeatable,
            locations,
            position: Position::from(directive.position),
        }))
    }

    fn import_named_types(&mut self, names: &[String]) -> Vec<TypeRef> {
        names.iter().map(|name| self.doc.add_named_type(name)).collect()
    }

    fn import_field_definitions(&mut self, fields: &[schema::Field]) -> Vec<FieldDefinitionRef> {
        fields
            .iter()
            .map(|field| {
                let definition = FieldDefinition {
                    description: import_description(self.doc, &field.description),
                    name: self.doc.input.append_input_str(&field.name),
                    arguments: self.import_input_values(&field.arguments),
                    ty: import_type(self.doc, &field.field_type),
                    directives: import_directives(self.doc, &field.directives),
                    position: Position::from(field.position),
                };
                self.doc.add(definition)
            })
            .collect()
    }

    fn import_input_values(&mut self, values: &[schema::InputValue]) -> Vec<InputValueDefinitionRef> {
        values
            .iter()
            .map(|value| {
                let definition = InputValueDefinition {
                    description: import_description(self.doc, &value.description),
                    name: self.doc.input.append_input_str(&value.name),
                    ty: import_type(self.doc, &value.value_type),
                    default_value: value
                        .default_value
                        .as_ref()
                        .map(|default| import_value(self.doc, default)),
                    directives: import_directives(self.doc, &value.directives),
                    position: Position::from(value.position),
                };
                self.doc.add(definition)
            })
            .collect()
    }

    fn import_enum_values(&mut self, values: &[schema::EnumValue]) -> Vec<EnumValueDefinitionRef> {
        values
            .iter()
            .map(|value| {
                let definition = EnumValueDefinition {
                    description: import_description(self.doc, &value.description),
                    name: self.doc.input.append_input_str(&value.name),
                    directives: import_directives(self.doc, &value.directives),
                    position: Position::from(value.position),
                };
                self.doc.add(definition)
            })
            .collect()
    }
}
