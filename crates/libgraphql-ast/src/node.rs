use crate::refs::*;

/// A `(kind, ref)` pair addressing one record of a [`Document`](crate::Document).
///
/// This is the only way heterogeneous children are addressed: root nodes,
/// Index buckets, the Walker's ancestor stack and its enclosing-type stack
/// all hold `Node`s. A root node that has been logically deleted is flipped
/// to [`Node::Unknown`]; its backing record stays in its table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Node {
    #[default]
    Unknown,
    Argument(ArgumentRef),
    Directive(DirectiveRef),
    DirectiveDefinition(DirectiveDefinitionRef),
    EnumTypeDefinition(EnumTypeDefinitionRef),
    EnumTypeExtension(EnumTypeExtensionRef),
    EnumValueDefinition(EnumValueDefinitionRef),
    Field(FieldRef),
    FieldDefinition(FieldDefinitionRef),
    FragmentDefinition(FragmentDefinitionRef),
    FragmentSpread(FragmentSpreadRef),
    InlineFragment(InlineFragmentRef),
    InputObjectTypeDefinition(InputObjectTypeDefinitionRef),
    InputObjectTypeExtension(InputObjectTypeExtensionRef),
    InputValueDefinition(InputValueDefinitionRef),
    InterfaceTypeDefinition(InterfaceTypeDefinitionRef),
    InterfaceTypeExtension(InterfaceTypeExtensionRef),
    ObjectTypeDefinition(ObjectTypeDefinitionRef),
    ObjectTypeExtension(ObjectTypeExtensionRef),
    OperationDefinition(OperationDefinitionRef),
    RootOperationTypeDefinition(RootOperationTypeDefinitionRef),
    ScalarTypeDefinition(ScalarTypeDefinitionRef),
    ScalarTypeExtension(ScalarTypeExtensionRef),
    SchemaDefinition(SchemaDefinitionRef),
    SelectionSet(SelectionSetRef),
    UnionTypeDefinition(UnionTypeDefinitionRef),
    UnionTypeExtension(UnionTypeExtensionRef),
    VariableDefinition(VariableDefinitionRef),
}

impl Node {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Node::Unknown)
    }

    /// `true` for the `extend …` variants of the type-system kinds.
    pub fn is_type_extension(&self) -> bool {
        matches!(
            self,
            Node::EnumTypeExtension(_)
                | Node::InputObjectTypeExtension(_)
                | Node::InterfaceTypeExtension(_)
                | Node::ObjectTypeExtension(_)
                | Node::ScalarTypeExtension(_)
                | Node::UnionTypeExtension(_)
        )
    }

    /// `true` for the named type definitions a field or type condition can
    /// resolve to.
    pub fn is_type_definition(&self) -> bool {
        matches!(
            self,
            Node::EnumTypeDefinition(_)
                | Node::InputObjectTypeDefinition(_)
                | Node::InterfaceTypeDefinition(_)
                | Node::ObjectTypeDefinition(_)
                | Node::ScalarTypeDefinition(_)
                | Node::UnionTypeDefinition(_)
        )
    }

    /// `true` for the composite output types: the ones that carry a
    /// selection set.
    pub fn is_composite_type(&self) -> bool {
        matches!(
            self,
            Node::InterfaceTypeDefinition(_)
                | Node::ObjectTypeDefinition(_)
                | Node::UnionTypeDefinition(_)
        )
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Unknown => "Unknown",
            Node::Argument(_) => "Argument",
            Node::Directive(_) => "Directive",
            Node::DirectiveDefinition(_) => "DirectiveDefinition",
            Node::EnumTypeDefinition(_) => "EnumTypeDefinition",
            Node::EnumTypeExtension(_) => "EnumTypeExtension",
            Node::EnumValueDefinition(_) => "EnumValueDefinition",
            Node::Field(_) => "Field",
            Node::FieldDefinition(_) => "FieldDefinition",
            Node::FragmentDefinition(_) => "FragmentDefinition",
            Node::FragmentSpread(_) => "FragmentSpread",
            Node::InlineFragment(_) => "InlineFragment",
            Node::InputObjectTypeDefinition(_) => "InputObjectTypeDefinition",
            Node::InputObjectTypeExtension(_) => "InputObjectTypeExtension",
            Node::InputValueDefinition(_) => "InputValueDefinition",
            Node::InterfaceTypeDefinition(_) => "InterfaceTypeDefinition",
            Node::InterfaceTypeExtension(_) => "InterfaceTypeExtension",
            Node::ObjectTypeDefinition(_) => "ObjectTypeDefinition",
            Node::ObjectTypeExtension(_) => "ObjectTypeExtension",
            Node::OperationDefinition(_) => "OperationDefinition",
            Node::RootOperationTypeDefinition(_) => "RootOperationTypeDefinition",
            Node::ScalarTypeDefinition(_) => "ScalarTypeDefinition",
            Node::ScalarTypeExtension(_) => "ScalarTypeExtension",
            Node::SchemaDefinition(_) => "SchemaDefinition",
            Node::SelectionSet(_) => "SelectionSet",
            Node::UnionTypeDefinition(_) => "UnionTypeDefinition",
            Node::UnionTypeExtension(_) => "UnionTypeExtension",
            Node::VariableDefinition(_) => "VariableDefinition",
        }
    }
}
