//! `add_*`, `copy_*` and `import_*` builders.
//!
//! `copy_*` duplicates a subtree inside the same Document so the copy can be
//! mutated independently of the original. Names keep pointing at the same
//! bytes, which is sound because input bytes are never rewritten.
//!
//! `import_*` brings a subtree over from another Document (typically a type
//! reference or default value from the schema). Every name is re-appended to
//! this Document's input, since a [`ByteSliceReference`] means nothing
//! outside the buffer that produced it.

use crate::ByteSliceReference;
use crate::Document;
use crate::Position;
use crate::document::*;
use crate::refs::*;

impl Document {
    pub fn add_named_type(&mut self, name: &str) -> TypeRef {
        let name = self.input.append_input_str(name);
        self.add(Type::named(name))
    }

    pub fn add_variable_value(&mut self, name: &str) -> VariableValueRef {
        let name = self.input.append_input_str(name);
        self.add(VariableValue { name })
    }

    pub fn add_string_value(&mut self, content: &str) -> Value {
        let content = self.input.append_input_str(content);
        Value::String(self.add(StringValue { content, block: false }))
    }

    pub fn add_int_value(&mut self, raw: &str) -> Value {
        let raw = self.input.append_input_str(raw);
        Value::Int(self.add(IntValue { raw }))
    }

    pub fn add_float_value(&mut self, raw: &str) -> Value {
        let raw = self.input.append_input_str(raw);
        Value::Float(self.add(FloatValue { raw }))
    }

    pub fn add_enum_value(&mut self, name: &str) -> Value {
        let name = self.input.append_input_str(name);
        Value::Enum(self.add(EnumValue { name }))
    }

    pub fn add_list_value(&mut self, values: Vec<Value>) -> Value {
        Value::List(self.add(ListValue { values }))
    }

    pub fn add_argument(&mut self, name: &str, value: Value) -> ArgumentRef {
        let name = self.input.append_input_str(name);
        self.add(Argument { name, value })
    }

    pub fn add_selection_set(&mut self) -> SelectionSetRef {
        self.add(SelectionSet::default())
    }

    /// Adds a field aliased to `alias` with no arguments and no selections,
    /// wrapped in a selection ready to be appended to a selection set.
    pub fn add_field_selection(&mut self, alias: Option<&str>, name: &str) -> SelectionRef {
        let alias = alias.map(|alias| self.input.append_input_str(alias));
        let name = self.input.append_input_str(name);
        let field = self.add(Field {
            alias,
            ..Field::new(name)
        });
        self.add(Selection::Field(field))
    }

    /// Declares `$name: ty` on an operation and returns the new definition.
    pub fn add_variable_definition_to_operation(
        &mut self,
        operation: OperationDefinitionRef,
        name: &str,
        ty: TypeRef,
    ) -> VariableDefinitionRef {
        let variable = self.add_variable_value(name);
        let definition = self.add(VariableDefinition {
            variable,
            ty,
            default_value: None,
            directives: vec![],
            position: Position::default(),
        });
        self[operation].variable_definitions.push(definition);
        definition
    }

    pub fn copy_type(&mut self, ty: TypeRef) -> TypeRef {
        let Type { kind, name, of_type } = self[ty].clone();
        let of_type = of_type.map(|inner| self.copy_type(inner));
        self.add(Type { kind, name, of_type })
    }

    pub fn copy_value(&mut self, value: Value) -> Value {
        match value {
            Value::Boolean(_) | Value::Null => value,
            Value::String(r) => {
                let copy = self[r].clone();
                Value::String(self.add(copy))
            },
            Value::Int(r) => {
                let copy = self[r].clone();
                Value::Int(self.add(copy))
            },
            Value::Float(r) => {
                let copy = self[r].clone();
                Value::Float(self.add(copy))
            },
            Value::Enum(r) => {
                let copy = self[r].clone();
                Value::Enum(self.add(copy))
            },
            Value::Variable(r) => {
                let copy = self[r].clone();
                Value::Variable(self.add(copy))
            },
            Value::List(r) => {
                let values = self[r]
                    .values
                    .clone()
                    .into_iter()
                    .map(|value| self.copy_value(value))
                    .collect();
                Value::List(self.add(ListValue { values }))
            },
            Value::Object(r) => {
                let fields = self[r]
                    .fields
                    .clone()
                    .into_iter()
                    .map(|field| {
                        let ObjectField { name, value } = self[field].clone();
                        let value = self.copy_value(value);
                        self.add(ObjectField { name, value })
                    })
                    .collect();
                Value::Object(self.add(ObjectValue { fields }))
            },
        }
    }

    pub fn copy_argument(&mut self, r: ArgumentRef) -> ArgumentRef {
        let Argument { name, value } = self[r].clone();
        let value = self.copy_value(value);
        self.add(Argument { name, value })
    }

    pub fn copy_arguments(&mut self, refs: &[ArgumentRef]) -> Vec<ArgumentRef> {
        refs.iter().map(|r| self.copy_argument(*r)).collect()
    }

    pub fn copy_directive(&mut self, r: DirectiveRef) -> DirectiveRef {
        let Directive { name, arguments, position } = self[r].clone();
        let arguments = self.copy_arguments(&arguments);
        self.add(Directive { name, arguments, position })
    }

    pub fn copy_directives(&mut self, refs: &[DirectiveRef]) -> Vec<DirectiveRef> {
        refs.iter().map(|r| self.copy_directive(*r)).collect()
    }

    pub fn copy_field(&mut self, r: FieldRef) -> FieldRef {
        let Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            position,
        } = self[r].clone();
        let arguments = self.copy_arguments(&arguments);
        let directives = self.copy_directives(&directives);
        let selection_set = selection_set.map(|set| self.copy_selection_set(set));
        self.add(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            position,
        })
    }

    pub fn copy_fragment_spread(&mut self, r: FragmentSpreadRef) -> FragmentSpreadRef {
        let FragmentSpread {
            fragment_name,
            directives,
            position,
        } = self[r].clone();
        let directives = self.copy_directives(&directives);
        self.add(FragmentSpread {
            fragment_name,
            directives,
            position,
        })
    }

    pub fn copy_inline_fragment(&mut self, r: InlineFragmentRef) -> InlineFragmentRef {
        let InlineFragment {
            type_condition,
            directives,
            selection_set,
            position,
        } = self[r].clone();
        let type_condition = type_condition.map(|ty| self.copy_type(ty));
        let directives = self.copy_directives(&directives);
        let selection_set = self.copy_selection_set(selection_set);
        self.add(InlineFragment {
            type_condition,
            directives,
            selection_set,
            position,
        })
    }

    pub fn copy_selection(&mut self, r: SelectionRef) -> SelectionRef {
        let original = self[r];
        let selection = match original {
            Selection::Field(field) => Selection::Field(self.copy_field(field)),
            Selection::FragmentSpread(spread) => {
                Selection::FragmentSpread(self.copy_fragment_spread(spread))
            },
            Selection::InlineFragment(fragment) => {
                Selection::InlineFragment(self.copy_inline_fragment(fragment))
            },
        };
        self.add(selection)
    }

    pub fn copy_selection_set(&mut self, r: SelectionSetRef) -> SelectionSetRef {
        let selections = self[r]
            .selections
            .clone()
            .into_iter()
            .map(|selection| self.copy_selection(selection))
            .collect();
        self.add(SelectionSet { selections })
    }

    fn import_str(&mut self, from: &Document, reference: ByteSliceReference) -> ByteSliceReference {
        self.input.append_input_str(from.str(reference))
    }

    /// Imports a type reference chain from another Document.
    pub fn import_type(&mut self, from: &Document, ty: TypeRef) -> TypeRef {
        let source = &from[ty];
        let of_type = source.of_type.map(|inner| self.import_type(from, inner));
        let name = match source.kind {
            TypeKind::Named => self.import_str(from, source.name),
            TypeKind::List | TypeKind::NonNull => ByteSliceReference::default(),
        };
        self.add(Type {
            kind: source.kind,
            name,
            of_type,
        })
    }

    /// Imports a value (typically a schema default) from another Document.
    pub fn import_value(&mut self, from: &Document, value: Value) -> Value {
        match value {
            Value::Boolean(_) | Value::Null => value,
            Value::String(r) => {
                let content = self.import_str(from, from[r].content);
                Value::String(self.add(StringValue {
                    content,
                    block: from[r].block,
                }))
            },
            Value::Int(r) => {
                let raw = self.import_str(from, from[r].raw);
                Value::Int(self.add(IntValue { raw }))
            },
            Value::Float(r) => {
                let raw = self.import_str(from, from[r].raw);
                Value::Float(self.add(FloatValue { raw }))
            },
            Value::Enum(r) => {
                let name = self.import_str(from, from[r].name);
                Value::Enum(self.add(EnumValue { name }))
            },
            Value::Variable(r) => {
                let name = self.import_str(from, from[r].name);
                Value::Variable(self.add(VariableValue { name }))
            },
            Value::List(r) => {
                let values = from[r]
                    .values
                    .iter()
                    .map(|value| self.import_value(from, *value))
                    .collect();
                Value::List(self.add(ListValue { values }))
            },
            Value::Object(r) => {
                let fields = from[r]
                    .fields
                    .iter()
                    .map(|field| {
                        let name = self.import_str(from, from[*field].name);
                        let value = self.import_value(from, from[*field].value);
                        self.add(ObjectField { name, value })
                    })
                    .collect();
                Value::Object(self.add(ObjectValue { fields }))
            },
        }
    }

    /// Imports a directive (and its arguments) from another Document.
    pub fn import_directive(&mut self, from: &Document, r: DirectiveRef) -> DirectiveRef {
        let name = self.import_str(from, from[r].name);
        let arguments = from[r]
            .arguments
            .iter()
            .map(|argument| {
                let name = self.import_str(from, from[*argument].name);
                let value = self.import_value(from, from[*argument].value);
                self.add(Argument { name, value })
            })
            .collect();
        self.add(Directive {
            name,
            arguments,
            position: from[r].position,
        })
    }

    /// Imports a whole input value definition (argument definition or input
    /// field) from another Document.
    pub fn import_input_value_definition(
        &mut self,
        from: &Document,
        r: InputValueDefinitionRef,
    ) -> InputValueDefinitionRef {
        let source = &from[r];
        let description = source.description.map(|d| self.import_str(from, d));
        let name = self.import_str(from, source.name);
        let ty = self.import_type(from, source.ty);
        let default_value = source.default_value.map(|v| self.import_value(from, v));
        let directives = source
            .directives
            .iter()
            .map(|d| self.import_directive(from, *d))
            .collect();
        self.add(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            position: source.position,
        })
    }
}
