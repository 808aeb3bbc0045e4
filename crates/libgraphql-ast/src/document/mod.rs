mod builders;
mod equality;
mod executable;
mod json;
mod lookups;
mod selections;
mod type_system;
mod values;
mod variables;

pub use executable::*;
pub use json::ValueToJsonError;
pub use type_system::*;
pub use values::*;

use crate::ByteSliceReference;
use crate::Index;
use crate::Input;
use crate::Node;
use crate::refs::*;

/// The arena holding one GraphQL document.
///
/// Every node kind has its own dense table; nodes point at each other with
/// the typed refs of [`crate::refs`], never with pointers, and all text lives
/// in [`Document::input`]. Records are only ever appended: deleting a node
/// means dropping its ref from a parent list (or flipping a root node to
/// [`Node::Unknown`]), so every outstanding ref stays valid for the lifetime
/// of the Document, or until [`Document::reset`].
///
/// Ref-taking accessors treat an out-of-range ref as a programmer error and
/// panic through the slice bounds check.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub input: Input,
    pub index: Index,
    pub root_nodes: Vec<Node>,

    pub types: Vec<Type>,
    pub string_values: Vec<StringValue>,
    pub int_values: Vec<IntValue>,
    pub float_values: Vec<FloatValue>,
    pub enum_values: Vec<EnumValue>,
    pub variable_values: Vec<VariableValue>,
    pub list_values: Vec<ListValue>,
    pub object_values: Vec<ObjectValue>,
    pub object_fields: Vec<ObjectField>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,

    pub operation_definitions: Vec<OperationDefinition>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_sets: Vec<SelectionSet>,
    pub selections: Vec<Selection>,
    pub fields: Vec<Field>,
    pub fragment_spreads: Vec<FragmentSpread>,
    pub inline_fragments: Vec<InlineFragment>,
    pub fragment_definitions: Vec<FragmentDefinition>,

    pub schema_definitions: Vec<SchemaDefinition>,
    pub root_operation_type_definitions: Vec<RootOperationTypeDefinition>,
    pub object_type_definitions: Vec<ObjectTypeDefinition>,
    pub object_type_extensions: Vec<ObjectTypeExtension>,
    pub interface_type_definitions: Vec<InterfaceTypeDefinition>,
    pub interface_type_extensions: Vec<InterfaceTypeExtension>,
    pub union_type_definitions: Vec<UnionTypeDefinition>,
    pub union_type_extensions: Vec<UnionTypeExtension>,
    pub enum_type_definitions: Vec<EnumTypeDefinition>,
    pub enum_type_extensions: Vec<EnumTypeExtension>,
    pub enum_value_definitions: Vec<EnumValueDefinition>,
    pub input_object_type_definitions: Vec<InputObjectTypeDefinition>,
    pub input_object_type_extensions: Vec<InputObjectTypeExtension>,
    pub scalar_type_definitions: Vec<ScalarTypeDefinition>,
    pub scalar_type_extensions: Vec<ScalarTypeExtension>,
    pub field_definitions: Vec<FieldDefinition>,
    pub input_value_definitions: Vec<InputValueDefinition>,
    pub directive_definitions: Vec<DirectiveDefinition>,
}

impl Document {
    /// Creates a Document whose tables are pre-sized for roughly `nodes`
    /// nodes (and whose input buffer is pre-sized for `input_bytes` bytes).
    ///
    /// The hints are spread over the tables by their typical share of an
    /// operation document; none of them is a limit.
    pub fn with_capacity(nodes: usize, input_bytes: usize) -> Self {
        let small = nodes / 16;
        let medium = nodes / 4;
        Self {
            input: Input::with_capacity(input_bytes),
            index: Index::default(),
            root_nodes: Vec::with_capacity(small.max(4)),
            types: Vec::with_capacity(medium),
            string_values: Vec::with_capacity(small),
            int_values: Vec::with_capacity(small),
            float_values: Vec::with_capacity(small),
            enum_values: Vec::with_capacity(small),
            variable_values: Vec::with_capacity(small),
            list_values: Vec::with_capacity(small),
            object_values: Vec::with_capacity(small),
            object_fields: Vec::with_capacity(small),
            arguments: Vec::with_capacity(medium),
            directives: Vec::with_capacity(small),
            operation_definitions: Vec::with_capacity(4),
            variable_definitions: Vec::with_capacity(small),
            selection_sets: Vec::with_capacity(medium),
            selections: Vec::with_capacity(nodes),
            fields: Vec::with_capacity(nodes),
            fragment_spreads: Vec::with_capacity(small),
            inline_fragments: Vec::with_capacity(small),
            fragment_definitions: Vec::with_capacity(small),
            ..Self::default()
        }
    }

    /// Appends `record` to its table and returns the new ref.
    pub fn add<R: Record>(&mut self, record: R) -> R::Ref {
        let table = R::table_mut(self);
        table.push(record);
        R::make_ref(table.len() - 1)
    }

    /// Number of records in the table `R` lives in.
    pub fn count<R: Record>(&self) -> usize {
        R::table(self).len()
    }

    /// Text behind a reference into this Document's input.
    pub fn str(&self, reference: ByteSliceReference) -> &str {
        self.input.str(reference)
    }

    /// Appends a root node and, for named type-system nodes, indexes it.
    pub fn add_root_node(&mut self, node: Node) {
        self.root_nodes.push(node);
        if let Some(name) = self.node_name_ref(node) {
            let name = self.input.str(name).to_owned();
            self.index.add_node(&name, node);
        }
    }

    /// Logically deletes a root node by flipping it to [`Node::Unknown`].
    /// Returns `false` if `node` is not a root node.
    pub fn remove_root_node(&mut self, node: Node) -> bool {
        match self.root_nodes.iter_mut().find(|root| **root == node) {
            Some(slot) => {
                *slot = Node::Unknown;
                true
            },
            None => false,
        }
    }

    pub fn operation_definition_refs(&self) -> impl Iterator<Item = OperationDefinitionRef> + '_ {
        self.root_nodes.iter().filter_map(|node| match node {
            Node::OperationDefinition(r) => Some(*r),
            _ => None,
        })
    }

    pub fn fragment_definition_refs(&self) -> impl Iterator<Item = FragmentDefinitionRef> + '_ {
        self.root_nodes.iter().filter_map(|node| match node {
            Node::FragmentDefinition(r) => Some(*r),
            _ => None,
        })
    }

    /// Truncates every table, clears the Index and the input buffer. The
    /// backing allocations are kept for reuse.
    pub fn reset(&mut self) {
        self.input.reset();
        self.index.reset();
        self.root_nodes.clear();
        self.types.clear();
        self.string_values.clear();
        self.int_values.clear();
        self.float_values.clear();
        self.enum_values.clear();
        self.variable_values.clear();
        self.list_values.clear();
        self.object_values.clear();
        self.object_fields.clear();
        self.arguments.clear();
        self.directives.clear();
        self.operation_definitions.clear();
        self.variable_definitions.clear();
        self.selection_sets.clear();
        self.selections.clear();
        self.fields.clear();
        self.fragment_spreads.clear();
        self.inline_fragments.clear();
        self.fragment_definitions.clear();
        self.schema_definitions.clear();
        self.root_operation_type_definitions.clear();
        self.object_type_definitions.clear();
        self.object_type_extensions.clear();
        self.interface_type_definitions.clear();
        self.interface_type_extensions.clear();
        self.union_type_definitions.clear();
        self.union_type_extensions.clear();
        self.enum_type_definitions.clear();
        self.enum_type_extensions.clear();
        self.enum_value_definitions.clear();
        self.input_object_type_definitions.clear();
        self.input_object_type_extensions.clear();
        self.scalar_type_definitions.clear();
        self.scalar_type_extensions.clear();
        self.field_definitions.clear();
        self.input_value_definitions.clear();
        self.directive_definitions.clear();
    }

    /// `true` when no table holds a record and the input buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.root_nodes.is_empty() && self.input.is_empty() && self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests;
