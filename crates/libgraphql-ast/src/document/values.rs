use crate::ByteSliceReference;
use crate::refs::EnumValueRef;
use crate::refs::FloatValueRef;
use crate::refs::IntValueRef;
use crate::refs::ListValueRef;
use crate::refs::ObjectFieldRef;
use crate::refs::ObjectValueRef;
use crate::refs::StringValueRef;
use crate::refs::TypeRef;
use crate::refs::VariableValueRef;

/// A GraphQL input value: a kind tag plus a ref into the kind-specific
/// table. Booleans and `null` carry their payload inline.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(EnumValueRef),
    Float(FloatValueRef),
    Int(IntValueRef),
    List(ListValueRef),
    Null,
    Object(ObjectValueRef),
    String(StringValueRef),
    Variable(VariableValueRef),
}

impl Value {
    pub fn is_variable(&self) -> bool {
        matches!(self, Value::Variable(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Enum(_) => "Enum",
            Value::Float(_) => "Float",
            Value::Int(_) => "Int",
            Value::List(_) => "List",
            Value::Null => "Null",
            Value::Object(_) => "Object",
            Value::String(_) => "String",
            Value::Variable(_) => "Variable",
        }
    }
}

#[derive(Clone, Debug)]
pub struct StringValue {
    /// The unescaped string content.
    pub content: ByteSliceReference,
    pub block: bool,
}

/// An integer literal, kept as its source text so arbitrarily large values
/// survive the trip into the variables JSON unchanged.
#[derive(Clone, Debug)]
pub struct IntValue {
    pub raw: ByteSliceReference,
}

#[derive(Clone, Debug)]
pub struct FloatValue {
    pub raw: ByteSliceReference,
}

#[derive(Clone, Debug)]
pub struct EnumValue {
    pub name: ByteSliceReference,
}

#[derive(Clone, Debug)]
pub struct VariableValue {
    /// Variable name without the leading `$`.
    pub name: ByteSliceReference,
}

#[derive(Clone, Debug, Default)]
pub struct ListValue {
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, Default)]
pub struct ObjectValue {
    pub fields: Vec<ObjectFieldRef>,
}

#[derive(Clone, Debug)]
pub struct ObjectField {
    pub name: ByteSliceReference,
    pub value: Value,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Named,
    List,
    NonNull,
}

/// One link of a type reference chain. `[Int!]` is stored as
/// `List -> NonNull -> Named("Int")`; `name` is only meaningful on the
/// `Named` leaf and `of_type` only on the wrappers.
#[derive(Clone, Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub name: ByteSliceReference,
    pub of_type: Option<TypeRef>,
}

impl Type {
    pub fn named(name: ByteSliceReference) -> Self {
        Self {
            kind: TypeKind::Named,
            name,
            of_type: None,
        }
    }

    pub fn list(of_type: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: ByteSliceReference::default(),
            of_type: Some(of_type),
        }
    }

    pub fn non_null(of_type: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: ByteSliceReference::default(),
            of_type: Some(of_type),
        }
    }
}
