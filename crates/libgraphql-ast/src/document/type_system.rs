use crate::ByteSliceReference;
use crate::Position;
use crate::document::OperationType;
use crate::document::Value;
use crate::refs::DirectiveRef;
use crate::refs::EnumValueDefinitionRef;
use crate::refs::FieldDefinitionRef;
use crate::refs::InputValueDefinitionRef;
use crate::refs::RootOperationTypeDefinitionRef;
use crate::refs::TypeRef;

#[derive(Clone, Debug, Default)]
pub struct SchemaDefinition {
    pub directives: Vec<DirectiveRef>,
    pub root_operation_types: Vec<RootOperationTypeDefinitionRef>,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct RootOperationTypeDefinition {
    pub operation_type: OperationType,
    pub named_type: TypeRef,
}

#[derive(Clone, Debug, Default)]
pub struct ObjectTypeDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    /// Named types of the `implements A & B` clause.
    pub implements_interfaces: Vec<TypeRef>,
    pub directives: Vec<DirectiveRef>,
    pub fields: Vec<FieldDefinitionRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct InterfaceTypeDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub implements_interfaces: Vec<TypeRef>,
    pub directives: Vec<DirectiveRef>,
    pub fields: Vec<FieldDefinitionRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct UnionTypeDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub directives: Vec<DirectiveRef>,
    pub member_types: Vec<TypeRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct EnumTypeDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub directives: Vec<DirectiveRef>,
    pub values: Vec<EnumValueDefinitionRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct EnumValueDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub directives: Vec<DirectiveRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct InputObjectTypeDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub directives: Vec<DirectiveRef>,
    pub fields: Vec<InputValueDefinitionRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct ScalarTypeDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub directives: Vec<DirectiveRef>,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct FieldDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub arguments: Vec<InputValueDefinitionRef>,
    pub ty: TypeRef,
    pub directives: Vec<DirectiveRef>,
    pub position: Position,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug)]
pub struct InputValueDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveRef>,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct DirectiveDefinition {
    pub description: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub arguments: Vec<InputValueDefinitionRef>,
    pub repeatable: bool,
    /// Location names (`FIELD`, `QUERY`, …) as written.
    pub locations: Vec<ByteSliceReference>,
    pub position: Position,
}

macro_rules! define_type_extensions {
    ($($extension:ident => $definition:ident),* $(,)?) => {
        $(
            /// `extend` form of the
            #[doc = concat!("[`", stringify!($definition), "`].")]
            /// The embedded definition's lists are folded into the base
            /// definition when extensions are merged.
            #[derive(Clone, Debug, Default)]
            pub struct $extension {
                pub definition: $definition,
            }
        )*
    };
}

define_type_extensions! {
    ObjectTypeExtension => ObjectTypeDefinition,
    InterfaceTypeExtension => InterfaceTypeDefinition,
    UnionTypeExtension => UnionTypeDefinition,
    EnumTypeExtension => EnumTypeDefinition,
    InputObjectTypeExtension => InputObjectTypeDefinition,
    ScalarTypeExtension => ScalarTypeDefinition,
}
