//! Typed indices into the [`Document`](crate::Document) tables.
//!
//! Each table gets its own newtype so a [`FieldRef`] can never be used to
//! read the arguments table. A ref is only meaningful for the Document that
//! produced it. Dereferencing goes through `Index`/`IndexMut`:
//!
//! ```
//! use libgraphql_ast::Document;
//! use libgraphql_ast::Field;
//!
//! let mut doc = Document::default();
//! let name = doc.input.append_input_str("dog");
//! let field_ref = doc.add(Field::new(name));
//! assert_eq!(doc.str(doc[field_ref].name), "dog");
//! ```

use crate::document::*;
use crate::Document;

/// A record that lives in one of the [`Document`] tables.
pub trait Record: Sized {
    type Ref: Copy;

    #[doc(hidden)]
    fn table(doc: &Document) -> &Vec<Self>;

    #[doc(hidden)]
    fn table_mut(doc: &mut Document) -> &mut Vec<Self>;

    #[doc(hidden)]
    fn make_ref(index: usize) -> Self::Ref;
}

macro_rules! define_refs {
    ($(
        $(#[$meta:meta])*
        $ref_name:ident => $table:ident: $record:ty;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
            pub struct $ref_name(u32);

            impl $ref_name {
                /// Panics if `index` does not fit in a `u32`.
                pub fn new(index: usize) -> Self {
                    match u32::try_from(index) {
                        Ok(index) => Self(index),
                        Err(_) => panic!(
                            "{} index {index} exceeds u32::MAX",
                            stringify!($ref_name),
                        ),
                    }
                }

                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }

            impl Record for $record {
                type Ref = $ref_name;

                fn table(doc: &Document) -> &Vec<Self> {
                    &doc.$table
                }

                fn table_mut(doc: &mut Document) -> &mut Vec<Self> {
                    &mut doc.$table
                }

                fn make_ref(index: usize) -> $ref_name {
                    $ref_name::new(index)
                }
            }

            impl std::ops::Index<$ref_name> for Document {
                type Output = $record;

                fn index(&self, r: $ref_name) -> &$record {
                    &self.$table[r.index()]
                }
            }

            impl std::ops::IndexMut<$ref_name> for Document {
                fn index_mut(&mut self, r: $ref_name) -> &mut $record {
                    &mut self.$table[r.index()]
                }
            }
        )*
    };
}

define_refs! {
    TypeRef => types: Type;
    StringValueRef => string_values: StringValue;
    IntValueRef => int_values: IntValue;
    FloatValueRef => float_values: FloatValue;
    EnumValueRef => enum_values: EnumValue;
    VariableValueRef => variable_values: VariableValue;
    ListValueRef => list_values: ListValue;
    ObjectValueRef => object_values: ObjectValue;
    ObjectFieldRef => object_fields: ObjectField;
    ArgumentRef => arguments: Argument;
    DirectiveRef => directives: Directive;
    OperationDefinitionRef => operation_definitions: OperationDefinition;
    VariableDefinitionRef => variable_definitions: VariableDefinition;
    SelectionSetRef => selection_sets: SelectionSet;
    /// Index into the table of [`Selection`] entries. A selection set holds
    /// these rather than the field/spread/fragment refs directly so that
    /// replacing one kind of selection with another is a single write.
    SelectionRef => selections: Selection;
    FieldRef => fields: Field;
    FragmentSpreadRef => fragment_spreads: FragmentSpread;
    InlineFragmentRef => inline_fragments: InlineFragment;
    FragmentDefinitionRef => fragment_definitions: FragmentDefinition;
    SchemaDefinitionRef => schema_definitions: SchemaDefinition;
    RootOperationTypeDefinitionRef => root_operation_type_definitions: RootOperationTypeDefinition;
    ObjectTypeDefinitionRef => object_type_definitions: ObjectTypeDefinition;
    ObjectTypeExtensionRef => object_type_extensions: ObjectTypeExtension;
    InterfaceTypeDefinitionRef => interface_type_definitions: InterfaceTypeDefinition;
    InterfaceTypeExtensionRef => interface_type_extensions: InterfaceTypeExtension;
    UnionTypeDefinitionRef => union_type_definitions: UnionTypeDefinition;
    UnionTypeExtensionRef => union_type_extensions: UnionTypeExtension;
    EnumTypeDefinitionRef => enum_type_definitions: EnumTypeDefinition;
    EnumTypeExtensionRef => enum_type_extensions: EnumTypeExtension;
    EnumValueDefinitionRef => enum_value_definitions: EnumValueDefinition;
    InputObjectTypeDefinitionRef => input_object_type_definitions: InputObjectTypeDefinition;
    InputObjectTypeExtensionRef => input_object_type_extensions: InputObjectTypeExtension;
    ScalarTypeDefinitionRef => scalar_type_definitions: ScalarTypeDefinition;
    ScalarTypeExtensionRef => scalar_type_extensions: ScalarTypeExtension;
    FieldDefinitionRef => field_definitions: FieldDefinition;
    InputValueDefinitionRef => input_value_definitions: InputValueDefinition;
    DirectiveDefinitionRef => directive_definitions: DirectiveDefinition;
}
