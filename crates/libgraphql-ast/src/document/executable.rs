use crate::ByteSliceReference;
use crate::Position;
use crate::document::Value;
use crate::refs::ArgumentRef;
use crate::refs::DirectiveRef;
use crate::refs::FieldRef;
use crate::refs::FragmentSpreadRef;
use crate::refs::InlineFragmentRef;
use crate::refs::SelectionRef;
use crate::refs::SelectionSetRef;
use crate::refs::TypeRef;
use crate::refs::VariableDefinitionRef;
use crate::refs::VariableValueRef;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

#[derive(Clone, Debug)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<ByteSliceReference>,
    pub variable_definitions: Vec<VariableDefinitionRef>,
    pub directives: Vec<DirectiveRef>,
    pub selection_set: SelectionSetRef,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct VariableDefinition {
    pub variable: VariableValueRef,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveRef>,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct Argument {
    pub name: ByteSliceReference,
    pub value: Value,
}

#[derive(Clone, Debug)]
pub struct Directive {
    pub name: ByteSliceReference,
    pub arguments: Vec<ArgumentRef>,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    /// Output and merge order of the set's selections.
    pub selections: Vec<SelectionRef>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Selection {
    Field(FieldRef),
    FragmentSpread(FragmentSpreadRef),
    InlineFragment(InlineFragmentRef),
}

#[derive(Clone, Debug)]
pub struct Field {
    pub alias: Option<ByteSliceReference>,
    pub name: ByteSliceReference,
    pub arguments: Vec<ArgumentRef>,
    pub directives: Vec<DirectiveRef>,
    pub selection_set: Option<SelectionSetRef>,
    pub position: Position,
}

impl Field {
    /// A leaf field with no alias, arguments or directives.
    pub fn new(name: ByteSliceReference) -> Self {
        Self {
            alias: None,
            name,
            arguments: vec![],
            directives: vec![],
            selection_set: None,
            position: Position::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FragmentSpread {
    pub fragment_name: ByteSliceReference,
    pub directives: Vec<DirectiveRef>,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct InlineFragment {
    /// Named type of the `... on T` condition, if any.
    pub type_condition: Option<TypeRef>,
    pub directives: Vec<DirectiveRef>,
    pub selection_set: SelectionSetRef,
    pub position: Position,
}

#[derive(Clone, Debug)]
pub struct FragmentDefinition {
    pub name: ByteSliceReference,
    pub type_condition: TypeRef,
    pub directives: Vec<DirectiveRef>,
    pub selection_set: SelectionSetRef,
    pub position: Position,
}
