use crate::ByteSliceReference;
use crate::Document;
use crate::Node;
use crate::document::OperationType;
use crate::document::Selection;
use crate::document::TypeKind;
use crate::document::Value;
use crate::refs::*;

impl Document {
    /// Name of a node that can be indexed: type definitions, their
    /// extensions and directive definitions.
    pub fn node_name_ref(&self, node: Node) -> Option<ByteSliceReference> {
        Some(match node {
            Node::ObjectTypeDefinition(r) => self[r].name,
            Node::ObjectTypeExtension(r) => self[r].definition.name,
            Node::InterfaceTypeDefinition(r) => self[r].name,
            Node::InterfaceTypeExtension(r) => self[r].definition.name,
            Node::UnionTypeDefinition(r) => self[r].name,
            Node::UnionTypeExtension(r) => self[r].definition.name,
            Node::EnumTypeDefinition(r) => self[r].name,
            Node::EnumTypeExtension(r) => self[r].definition.name,
            Node::InputObjectTypeDefinition(r) => self[r].name,
            Node::InputObjectTypeExtension(r) => self[r].definition.name,
            Node::ScalarTypeDefinition(r) => self[r].name,
            Node::ScalarTypeExtension(r) => self[r].definition.name,
            Node::DirectiveDefinition(r) => self[r].name,
            _ => return None,
        })
    }

    /// Name of any named node, or `""` for nodes without one.
    pub fn node_name(&self, node: Node) -> &str {
        if let Some(name) = self.node_name_ref(node) {
            return self.str(name);
        }
        match node {
            Node::Field(r) => self.str(self[r].name),
            Node::FieldDefinition(r) => self.str(self[r].name),
            Node::InputValueDefinition(r) => self.str(self[r].name),
            Node::EnumValueDefinition(r) => self.str(self[r].name),
            Node::Argument(r) => self.str(self[r].name),
            Node::Directive(r) => self.str(self[r].name),
            Node::FragmentDefinition(r) => self.str(self[r].name),
            Node::FragmentSpread(r) => self.str(self[r].fragment_name),
            Node::OperationDefinition(r) => self.operation_definition_name(r),
            Node::VariableDefinition(r) => self.variable_definition_name(r),
            _ => "",
        }
    }

    pub fn operation_definition_name(&self, r: OperationDefinitionRef) -> &str {
        self[r].name.map(|name| self.str(name)).unwrap_or("")
    }

    pub fn field_name(&self, r: FieldRef) -> &str {
        self.str(self[r].name)
    }

    pub fn field_alias(&self, r: FieldRef) -> Option<&str> {
        self[r].alias.map(|alias| self.str(alias))
    }

    /// The key this field contributes to a response: its alias if it has one.
    pub fn field_response_key(&self, r: FieldRef) -> &str {
        self.field_alias(r).unwrap_or_else(|| self.field_name(r))
    }

    pub fn argument_name(&self, r: ArgumentRef) -> &str {
        self.str(self[r].name)
    }

    pub fn directive_name(&self, r: DirectiveRef) -> &str {
        self.str(self[r].name)
    }

    pub fn fragment_spread_name(&self, r: FragmentSpreadRef) -> &str {
        self.str(self[r].fragment_name)
    }

    pub fn variable_value_name(&self, r: VariableValueRef) -> &str {
        self.str(self[r].name)
    }

    pub fn variable_definition_name(&self, r: VariableDefinitionRef) -> &str {
        self.variable_value_name(self[r].variable)
    }

    /// Follows the `List`/`NonNull` wrappers down to the named leaf.
    pub fn resolve_underlying_type(&self, mut ty: TypeRef) -> TypeRef {
        while let Some(inner) = self[ty].of_type {
            ty = inner;
        }
        ty
    }

    /// Name of the named type at the bottom of the chain.
    pub fn resolve_type_name(&self, ty: TypeRef) -> &str {
        self.str(self[self.resolve_underlying_type(ty)].name)
    }

    pub fn type_is_non_null(&self, ty: TypeRef) -> bool {
        self[ty].kind == TypeKind::NonNull
    }

    /// Removes a single top-level `NonNull` wrapper, if present.
    pub fn type_nullable(&self, ty: TypeRef) -> TypeRef {
        match (self[ty].kind, self[ty].of_type) {
            (TypeKind::NonNull, Some(inner)) => inner,
            _ => ty,
        }
    }

    pub fn fragment_definition_ref(&self, name: &str) -> Option<FragmentDefinitionRef> {
        self.fragment_definition_refs()
            .find(|r| self.str(self[*r].name) == name)
    }

    pub fn fragment_definition_name(&self, r: FragmentDefinitionRef) -> &str {
        self.str(self[r].name)
    }

    pub fn fragment_definition_type_name(&self, r: FragmentDefinitionRef) -> &str {
        self.resolve_type_name(self[r].type_condition)
    }

    pub fn inline_fragment_type_condition_name(&self, r: InlineFragmentRef) -> Option<&str> {
        self[r].type_condition.map(|ty| self.resolve_type_name(ty))
    }

    pub fn selection_field(&self, r: SelectionRef) -> Option<FieldRef> {
        match self[r] {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn root_operation_type_name(&self, operation_type: OperationType) -> Option<&str> {
        self.index.root_operation_type_name(operation_type)
    }

    /// Field definitions declared on an object or interface type.
    pub fn node_field_definitions(&self, node: Node) -> &[FieldDefinitionRef] {
        match node {
            Node::ObjectTypeDefinition(r) => &self[r].fields,
            Node::ObjectTypeExtension(r) => &self[r].definition.fields,
            Node::InterfaceTypeDefinition(r) => &self[r].fields,
            Node::InterfaceTypeExtension(r) => &self[r].definition.fields,
            _ => &[],
        }
    }

    pub fn node_field_definition_by_name(
        &self,
        node: Node,
        field_name: &str,
    ) -> Option<FieldDefinitionRef> {
        self.node_field_definitions(node)
            .iter()
            .find(|r| self.str(self[**r].name) == field_name)
            .copied()
    }

    pub fn field_definition_argument_by_name(
        &self,
        field_definition: FieldDefinitionRef,
        argument_name: &str,
    ) -> Option<InputValueDefinitionRef> {
        self.input_value_definition_by_name(&self[field_definition].arguments, argument_name)
    }

    pub fn input_object_field_by_name(
        &self,
        input_object: InputObjectTypeDefinitionRef,
        field_name: &str,
    ) -> Option<InputValueDefinitionRef> {
        self.input_value_definition_by_name(&self[input_object].fields, field_name)
    }

    pub fn input_value_definition_by_name(
        &self,
        refs: &[InputValueDefinitionRef],
        name: &str,
    ) -> Option<InputValueDefinitionRef> {
        refs.iter()
            .find(|r| self.str(self[**r].name) == name)
            .copied()
    }

    pub fn directive_definition_by_name(&self, name: &str) -> Option<DirectiveDefinitionRef> {
        self.index
            .nodes_by_name(name)?
            .iter()
            .find_map(|node| match node {
                Node::DirectiveDefinition(r) if self.str(self[*r].name) == name => Some(*r),
                _ => None,
            })
    }

    pub fn argument_by_name(&self, arguments: &[ArgumentRef], name: &str) -> Option<ArgumentRef> {
        arguments
            .iter()
            .find(|r| self.argument_name(**r) == name)
            .copied()
    }

    pub fn directive_argument_value(&self, directive: DirectiveRef, name: &str) -> Option<Value> {
        self.argument_by_name(&self[directive].arguments, name)
            .map(|r| self[r].value)
    }

    pub fn field_argument_value(&self, field: FieldRef, name: &str) -> Option<Value> {
        self.argument_by_name(&self[field].arguments, name)
            .map(|r| self[r].value)
    }

    /// Interfaces a type claims to implement, by name.
    fn implemented_interface_names(&self, node: Node) -> impl Iterator<Item = &str> + '_ {
        let refs: &[TypeRef] = match node {
            Node::ObjectTypeDefinition(r) => &self[r].implements_interfaces,
            Node::InterfaceTypeDefinition(r) => &self[r].implements_interfaces,
            _ => &[],
        };
        refs.iter().map(|ty| self.resolve_type_name(*ty))
    }

    /// `true` if `node` (an object or interface type) declares that it
    /// implements the interface `interface`.
    pub fn node_implements_interface(&self, node: Node, interface: Node) -> bool {
        if !matches!(interface, Node::InterfaceTypeDefinition(_)) {
            return false;
        }
        let interface_name = self.node_name(interface);
        self.implemented_interface_names(node)
            .any(|name| name == interface_name)
    }

    /// `true` if `node` is one of the member types of the union `union`.
    pub fn node_is_union_member(&self, node: Node, union: Node) -> bool {
        let Node::UnionTypeDefinition(union) = union else {
            return false;
        };
        let node_name = self.node_name(node);
        self[union]
            .member_types
            .iter()
            .any(|ty| self.resolve_type_name(*ty) == node_name)
    }

    /// `true` if some member of `union` implements `interface`.
    pub fn union_intersects_interface(&self, union: Node, interface: Node) -> bool {
        let Node::UnionTypeDefinition(union) = union else {
            return false;
        };
        self[union].member_types.iter().any(|ty| {
            self.index
                .first_non_extension_node_by_name(self.resolve_type_name(*ty))
                .is_some_and(|member| self.node_implements_interface(member, interface))
        })
    }

    /// `true` if some object type implements both interfaces.
    pub fn interfaces_intersect(&self, left: Node, right: Node) -> bool {
        self.root_nodes.iter().any(|node| {
            matches!(node, Node::ObjectTypeDefinition(_))
                && self.node_implements_interface(*node, left)
                && self.node_implements_interface(*node, right)
        })
    }
}
