use libgraphql_ast::Document;
use libgraphql_ast::Node;
use libgraphql_ast::refs::*;
use libgraphql_visitor::Visitor;
use libgraphql_visitor::WalkContext;

/// Refs of `extension` whose name (as given by `name`) is not in `base`.
fn new_by_name<R: Copy>(
    doc: &Document,
    base: &[R],
    extension: &[R],
    name: impl Fn(&Document, R) -> &str,
) -> Vec<R> {
    extension
        .iter()
        .filter(|added| !base.iter().any(|existing| name(doc, *existing) == name(doc, **added)))
        .copied()
        .collect()
}

fn type_name(doc: &Document, ty: TypeRef) -> &str {
    doc.resolve_type_name(ty)
}

fn field_definition_name(doc: &Document, field: FieldDefinitionRef) -> &str {
    doc.str(doc[field].name)
}

fn input_value_name(doc: &Document, input_value: InputValueDefinitionRef) -> &str {
    doc.str(doc[input_value].name)
}

fn enum_value_name(doc: &Document, value: EnumValueDefinitionRef) -> &str {
    doc.str(doc[value].name)
}

/// Folds `extension` into `base`. Both nodes are of matching kinds.
fn merge(doc: &mut Document, base: Node, extension: Node) {
    match (base, extension) {
        (Node::ObjectTypeDefinition(base), Node::ObjectTypeExtension(extension)) => {
            let added = doc[extension].definition.clone();
            let interfaces = new_by_name(doc, &doc[base].implements_interfaces, &added.implements_interfaces, type_name);
            let fields = new_by_name(doc, &doc[base].fields, &added.fields, field_definition_name);
            let base = &mut doc[base];
            base.implements_interfaces.extend(interfaces);
            base.directives.extend(added.directives);
            base.fields.extend(fields);
        },
        (Node::InterfaceTypeDefinition(base), Node::InterfaceTypeExtension(extension)) => {
            let added = doc[extension].definition.clone();
            let interfaces = new_by_name(doc, &doc[base].implements_interfaces, &added.implements_interfaces, type_name);
            let fields = new_by_name(doc, &doc[base].fields, &added.fields, field_definition_name);
            let base = &mut doc[base];
            base.implements_interfaces.extend(interfaces);
            base.directives.extend(added.directives);
            base.fields.extend(fields);
        },
        (Node::UnionTypeDefinition(base), Node::UnionTypeExtension(extension)) => {
            let added = doc[extension].definition.clone();
            let members = new_by_name(doc, &doc[base].member_types, &added.member_types, type_name);
            let base = &mut doc[base];
            base.directives.extend(added.directives);
            base.member_types.extend(members);
        },
        (Node::EnumTypeDefinition(base), Node::EnumTypeExtension(extension)) => {
            let added = doc[extension].definition.clone();
            let values = new_by_name(doc, &doc[base].values, &added.values, enum_value_name);
            let base = &mut doc[base];
            base.directives.extend(added.directives);
            base.values.extend(values);
        },
        (Node::InputObjectTypeDefinition(base), Node::InputObjectTypeExtension(extension)) => {
            let added = doc[extension].definition.clone();
            let fields = new_by_name(doc, &doc[base].fields, &added.fields, input_value_name);
            let base = &mut doc[base];
            base.directives.extend(added.directives);
            base.fields.extend(fields);
        },
        (Node::ScalarTypeDefinition(base), Node::ScalarTypeExtension(extension)) => {
            let added = doc[extension].definition.directives.clone();
            doc[base].directives.extend(added);
        },
        _ => {},
    }
}

/// A new definition built from the extension's contents.
fn synthesize(doc: &mut Document, extension: Node) -> Option<Node> {
    let definition = match extension {
        Node::ObjectTypeExtension(r) => {
            let definition = doc[r].definition.clone();
            Node::ObjectTypeDefinition(doc.add(definition))
        },
        Node::InterfaceTypeExtension(r) => {
            let definition = doc[r].definition.clone();
            Node::InterfaceTypeDefinition(doc.add(definition))
        },
        Node::UnionTypeExtension(r) => {
            let definition = doc[r].definition.clone();
            Node::UnionTypeDefinition(doc.add(definition))
        },
        Node::EnumTypeExtension(r) => {
            let definition = doc[r].definition.clone();
            Node::EnumTypeDefinition(doc.add(definition))
        },
        Node::InputObjectTypeExtension(r) => {
            let definition = doc[r].definition.clone();
            Node::InputObjectTypeDefinition(doc.add(definition))
        },
        Node::ScalarTypeExtension(r) => {
            let definition = doc[r].definition.clone();
            Node::ScalarTypeDefinition(doc.add(definition))
        },
        _ => return None,
    };
    Some(definition)
}

/// Whether `candidate` is a definition `extension` can extend.
fn extends(extension: Node, candidate: Node) -> bool {
    matches!(
        (extension, candidate),
        (Node::ObjectTypeExtension(_), Node::ObjectTypeDefinition(_))
            | (Node::InterfaceTypeExtension(_), Node::InterfaceTypeDefinition(_))
            | (Node::UnionTypeExtension(_), Node::UnionTypeDefinition(_))
            | (Node::EnumTypeExtension(_), Node::EnumTypeDefinition(_))
            | (Node::InputObjectTypeExtension(_), Node::InputObjectTypeDefinition(_))
            | (Node::ScalarTypeExtension(_), Node::ScalarTypeDefinition(_))
    )
}

/// Merges type extensions into the definitions they extend.
///
/// Fields, enum values, union members and implemented interfaces are
/// added unless the definition already has one with the same name;
/// directives are appended. Merged extensions are recorded in
/// [`Index::merged_type_extensions`](libgraphql_ast::Index) so printers and
/// [`RemoveMergedTypeExtensions`](crate::passes::RemoveMergedTypeExtensions)
/// can skip or drop them.
///
/// An extension without a definition of its kind becomes that definition
/// when `create_missing_definitions` is set, and is left alone otherwise.
#[derive(Debug)]
pub struct ExtendTypeDefinitions {
    create_missing_definitions: bool,
}

impl ExtendTypeDefinitions {
    pub fn new(create_missing_definitions: bool) -> Self {
        Self {
            create_missing_definitions,
        }
    }

    fn extend(&self, ctx: &mut WalkContext<'_>, extension: Node) {
        let doc = &mut *ctx.operation;
        if doc.index.is_merged_type_extension(extension) {
            return;
        }
        let name = doc.node_name(extension).to_owned();
        let base = doc
            .index
            .nodes_by_name(&name)
            .and_then(|nodes| nodes.iter().copied().find(|node| extends(extension, *node)));
        match base {
            Some(base) => {
                merge(doc, base, extension);
                doc.index.merged_type_extensions.push(extension);
                log::trace!("merged {} into `{name}`", extension.kind_name());
            },
            None if self.create_missing_definitions => {
                let Some(definition) = synthesize(doc, extension) else {
                    return;
                };
                if let Some(slot) = doc.root_nodes.iter_mut().find(|node| **node == extension) {
                    *slot = definition;
                }
                doc.index.replace_node(&name, extension, definition);
                log::trace!("created `{name}` from its {}", extension.kind_name());
            },
            None => {},
        }
        ctx.skip_node();
    }
}

impl Default for ExtendTypeDefinitions {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Visitor for ExtendTypeDefinitions {
    fn enter_object_type_extension(&mut self, ctx: &mut WalkContext<'_>, node: ObjectTypeExtensionRef) {
        self.extend(ctx, Node::ObjectTypeExtension(node));
    }

    fn enter_interface_type_extension(&mut self, ctx: &mut WalkContext<'_>, node: InterfaceTypeExtensionRef) {
        self.extend(ctx, Node::InterfaceTypeExtension(node));
    }

    fn enter_union_type_extension(&mut self, ctx: &mut WalkContext<'_>, node: UnionTypeExtensionRef) {
        self.extend(ctx, Node::UnionTypeExtension(node));
    }

    fn enter_enum_type_extension(&mut self, ctx: &mut WalkContext<'_>, node: EnumTypeExtensionRef) {
        self.extend(ctx, Node::EnumTypeExtension(node));
    }

    fn enter_input_object_type_extension(
        &mut self,
        ctx: &mut WalkContext<'_>,
        node: InputObjectTypeExtensionRef,
    ) {
        self.extend(ctx, Node::InputObjectTypeExtension(node));
    }

    fn enter_scalar_type_extension(&mut self, ctx: &mut WalkContext<'_>, node: ScalarTypeExtensionRef) {
        self.extend(ctx, Node::ScalarTypeExtension(node));
    }
}
