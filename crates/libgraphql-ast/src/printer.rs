//! GraphQL source printing for [`Document`]s.
//!
//! Root nodes flipped to [`Node::Unknown`] and type extensions that have
//! already been merged into their base definition are not printed.

use crate::Document;
use crate::Node;
use crate::document::*;
use crate::refs::*;
use std::fmt::Write;

/// Prints `doc` in canonical single-line form:
/// `query Q($a: Int) { dog { name } }`. Root definitions are joined by a
/// single space.
pub fn print_document(doc: &Document) -> String {
    let mut printer = Printer::new(doc, false);
    printer.print_root_nodes();
    printer.out
}

/// Prints `doc` with two-space indentation, one root definition per block.
pub fn print_document_pretty(doc: &Document) -> String {
    let mut printer = Printer::new(doc, true);
    printer.print_root_nodes();
    printer.out.push('\n');
    printer.out
}

/// Prints a single value, e.g. for messages.
pub fn print_value(doc: &Document, value: Value) -> String {
    let mut printer = Printer::new(doc, false);
    printer.value(value);
    printer.out
}

/// Prints a type reference, e.g. `[Int!]!`.
pub fn print_type(doc: &Document, ty: TypeRef) -> String {
    let mut printer = Printer::new(doc, false);
    printer.ty(ty);
    printer.out
}

/// Prints a selection set in canonical single-line form.
pub fn print_selection_set(doc: &Document, set: SelectionSetRef) -> String {
    let mut printer = Printer::new(doc, false);
    printer.selection_set(set);
    printer.out
}

struct Printer<'doc> {
    doc: &'doc Document,
    out: String,
    pretty: bool,
    depth: usize,
}

impl<'doc> Printer<'doc> {
    fn new(doc: &'doc Document, pretty: bool) -> Self {
        Self {
            doc,
            out: String::with_capacity(doc.input.len()),
            pretty,
            depth: 0,
        }
    }

    fn print_root_nodes(&mut self) {
        let doc = self.doc;
        let printable = doc.root_nodes.iter().filter(|node| {
            !node.is_unknown() && !doc.index.is_merged_type_extension(**node)
        });
        for (i, node) in printable.enumerate() {
            if i > 0 {
                self.out.push_str(if self.pretty { "\n\n" } else { " " });
            }
            self.root_node(*node);
        }
    }

    fn root_node(&mut self, node: Node) {
        let doc = self.doc;
        match node {
            Node::OperationDefinition(r) => self.operation_definition(r),
            Node::FragmentDefinition(r) => self.fragment_definition(r),
            Node::SchemaDefinition(r) => self.schema_definition(r),
            Node::ObjectTypeDefinition(r) => self.object_type("type", &doc[r]),
            Node::ObjectTypeExtension(r) => self.object_type("extend type", &doc[r].definition),
            Node::InterfaceTypeDefinition(r) => self.interface_type("interface", &doc[r]),
            Node::InterfaceTypeExtension(r) => {
                self.interface_type("extend interface", &doc[r].definition)
            },
            Node::UnionTypeDefinition(r) => self.union_type("union", &doc[r]),
            Node::UnionTypeExtension(r) => self.union_type("extend union", &doc[r].definition),
            Node::EnumTypeDefinition(r) => self.enum_type("enum", &doc[r]),
            Node::EnumTypeExtension(r) => self.enum_type("extend enum", &doc[r].definition),
            Node::InputObjectTypeDefinition(r) => self.input_object_type("input", &doc[r]),
            Node::InputObjectTypeExtension(r) => {
                self.input_object_type("extend input", &doc[r].definition)
            },
            Node::ScalarTypeDefinition(r) => self.scalar_type("scalar", &doc[r]),
            Node::ScalarTypeExtension(r) => self.scalar_type("extend scalar", &doc[r].definition),
            Node::DirectiveDefinition(r) => self.directive_definition(r),
            _ => {},
        }
    }

    fn str(&self, reference: crate::ByteSliceReference) -> &'doc str {
        self.doc.str(reference)
    }

    fn open_block(&mut self) {
        self.out.push('{');
        self.depth += 1;
    }

    fn close_block(&mut self) {
        self.depth -= 1;
        if self.pretty {
            self.newline();
        } else {
            self.out.push(' ');
        }
        self.out.push('}');
    }

    /// Separator before each member of a block.
    fn block_item(&mut self) {
        if self.pretty {
            self.newline();
        } else {
            self.out.push(' ');
        }
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn description(&mut self, description: Option<crate::ByteSliceReference>) {
        if let Some(description) = description {
            let text = self.str(description);
            write_escaped_string(&mut self.out, text);
            if self.pretty {
                self.newline();
            } else {
                self.out.push(' ');
            }
        }
    }

    fn operation_definition(&mut self, r: OperationDefinitionRef) {
        let doc = self.doc;
        let op = &doc[r];
        let shorthand = op.operation_type == OperationType::Query
            && op.name.is_none()
            && op.variable_definitions.is_empty()
            && op.directives.is_empty();
        if !shorthand {
            self.out.push_str(op.operation_type.as_str());
            if let Some(name) = op.name {
                self.out.push(' ');
                self.out.push_str(self.str(name));
            }
            if !op.variable_definitions.is_empty() {
                self.out.push('(');
                for (i, definition) in op.variable_definitions.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.variable_definition(*definition);
                }
                self.out.push(')');
            }
            self.directives(&op.directives);
            self.out.push(' ');
        }
        self.selection_set(op.selection_set);
    }

    fn variable_definition(&mut self, r: VariableDefinitionRef) {
        let doc = self.doc;
        let definition = &doc[r];
        self.out.push('$');
        self.out.push_str(doc.variable_value_name(definition.variable));
        self.out.push_str(": ");
        self.ty(definition.ty);
        if let Some(default_value) = definition.default_value {
            self.out.push_str(" = ");
            self.value(default_value);
        }
        self.directives(&definition.directives);
    }

    fn fragment_definition(&mut self, r: FragmentDefinitionRef) {
        let doc = self.doc;
        let fragment = &doc[r];
        self.out.push_str("fragment ");
        self.out.push_str(self.str(fragment.name));
        self.out.push_str(" on ");
        self.ty(fragment.type_condition);
        self.directives(&fragment.directives);
        self.out.push(' ');
        self.selection_set(fragment.selection_set);
    }

    fn selection_set(&mut self, r: SelectionSetRef) {
        let doc = self.doc;
        self.open_block();
        for selection in &doc[r].selections {
            self.block_item();
            match doc[*selection] {
                Selection::Field(field) => self.field(field),
                Selection::FragmentSpread(spread) => self.fragment_spread(spread),
                Selection::InlineFragment(fragment) => self.inline_fragment(fragment),
            }
        }
        self.close_block();
    }

    fn field(&mut self, r: FieldRef) {
        let doc = self.doc;
        let field = &doc[r];
        if let Some(alias) = field.alias {
            self.out.push_str(self.str(alias));
            self.out.push_str(": ");
        }
        self.out.push_str(self.str(field.name));
        self.arguments(&field.arguments);
        self.directives(&field.directives);
        if let Some(set) = field.selection_set {
            self.out.push(' ');
            self.selection_set(set);
        }
    }

    fn fragment_spread(&mut self, r: FragmentSpreadRef) {
        let doc = self.doc;
        self.out.push_str("...");
        self.out.push_str(self.str(doc[r].fragment_name));
        self.directives(&doc[r].directives);
    }

    fn inline_fragment(&mut self, r: InlineFragmentRef) {
        let doc = self.doc;
        let fragment = &doc[r];
        self.out.push_str("...");
        if let Some(type_condition) = fragment.type_condition {
            self.out.push_str(" on ");
            self.ty(type_condition);
        }
        self.directives(&fragment.directives);
        self.out.push(' ');
        self.selection_set(fragment.selection_set);
    }

    fn arguments(&mut self, arguments: &[ArgumentRef]) {
        if arguments.is_empty() {
            return;
        }
        let doc = self.doc;
        self.out.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(self.str(doc[*argument].name));
            self.out.push_str(": ");
            self.value(doc[*argument].value);
        }
        self.out.push(')');
    }

    fn directives(&mut self, directives: &[DirectiveRef]) {
        let doc = self.doc;
        for directive in directives {
            self.out.push_str(" @");
            self.out.push_str(self.str(doc[*directive].name));
            self.arguments(&doc[*directive].arguments);
        }
    }

    fn value(&mut self, value: Value) {
        let doc = self.doc;
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Boolean(b) => self.out.push_str(if b { "true" } else { "false" }),
            Value::Int(r) => self.out.push_str(self.str(doc[r].raw)),
            Value::Float(r) => self.out.push_str(self.str(doc[r].raw)),
            Value::Enum(r) => self.out.push_str(self.str(doc[r].name)),
            Value::Variable(r) => {
                self.out.push('$');
                self.out.push_str(self.str(doc[r].name));
            },
            Value::String(r) if doc[r].block => {
                self.out.push_str("\"\"\"");
                self.out.push_str(&self.str(doc[r].content).replace("\"\"\"", "\\\"\"\""));
                self.out.push_str("\"\"\"");
            },
            Value::String(r) => {
                let text = self.str(doc[r].content);
                write_escaped_string(&mut self.out, text);
            },
            Value::List(r) => {
                self.out.push('[');
                for (i, value) in doc[r].values.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.value(*value);
                }
                self.out.push(']');
            },
            Value::Object(r) => {
                self.out.push('{');
                for (i, field) in doc[r].fields.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(self.str(doc[*field].name));
                    self.out.push_str(": ");
                    self.value(doc[*field].value);
                }
                self.out.push('}');
            },
        }
    }

    fn ty(&mut self, r: TypeRef) {
        let doc = self.doc;
        let ty = &doc[r];
        match (ty.kind, ty.of_type) {
            (TypeKind::Named, _) | (_, None) => self.out.push_str(self.str(ty.name)),
            (TypeKind::List, Some(inner)) => {
                self.out.push('[');
                self.ty(inner);
                self.out.push(']');
            },
            (TypeKind::NonNull, Some(inner)) => {
                self.ty(inner);
                self.out.push('!');
            },
        }
    }

    fn schema_definition(&mut self, r: SchemaDefinitionRef) {
        let doc = self.doc;
        self.out.push_str("schema");
        self.directives(&doc[r].directives);
        self.out.push(' ');
        self.open_block();
        for root in &doc[r].root_operation_types {
            self.block_item();
            let root = &doc[*root];
            self.out.push_str(root.operation_type.as_str());
            self.out.push_str(": ");
            self.ty(root.named_type);
        }
        self.close_block();
    }

    fn implements(&mut self, interfaces: &[TypeRef]) {
        for (i, interface) in interfaces.iter().enumerate() {
            self.out.push_str(if i == 0 { " implements " } else { " & " });
            self.ty(*interface);
        }
    }

    fn field_definitions(&mut self, fields: &[FieldDefinitionRef]) {
        if fields.is_empty() {
            return;
        }
        let doc = self.doc;
        self.out.push(' ');
        self.open_block();
        for field in fields {
            self.block_item();
            let field = &doc[*field];
            self.description(field.description);
            self.out.push_str(self.str(field.name));
            self.argument_definitions(&field.arguments);
            self.out.push_str(": ");
            self.ty(field.ty);
            self.directives(&field.directives);
        }
        self.close_block();
    }

    fn argument_definitions(&mut self, arguments: &[InputValueDefinitionRef]) {
        if arguments.is_empty() {
            return;
        }
        self.out.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.input_value_definition(*argument);
        }
        self.out.push(')');
    }

    fn input_value_definition(&mut self, r: InputValueDefinitionRef) {
        let doc = self.doc;
        let definition = &doc[r];
        self.description(definition.description);
        self.out.push_str(self.str(definition.name));
        self.out.push_str(": ");
        self.ty(definition.ty);
        if let Some(default_value) = definition.default_value {
            self.out.push_str(" = ");
            self.value(default_value);
        }
        self.directives(&definition.directives);
    }

    fn object_type(&mut self, keyword: &str, definition: &ObjectTypeDefinition) {
        self.description(definition.description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.out.push_str(self.str(definition.name));
        self.implements(&definition.implements_interfaces);
        self.directives(&definition.directives);
        self.field_definitions(&definition.fields);
    }

    fn interface_type(&mut self, keyword: &str, definition: &InterfaceTypeDefinition) {
        self.description(definition.description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.out.push_str(self.str(definition.name));
        self.implements(&definition.implements_interfaces);
        self.directives(&definition.directives);
        self.field_definitions(&definition.fields);
    }

    fn union_type(&mut self, keyword: &str, definition: &UnionTypeDefinition) {
        self.description(definition.description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.out.push_str(self.str(definition.name));
        self.directives(&definition.directives);
        for (i, member) in definition.member_types.iter().enumerate() {
            self.out.push_str(if i == 0 { " = " } else { " | " });
            self.ty(*member);
        }
    }

    fn enum_type(&mut self, keyword: &str, definition: &EnumTypeDefinition) {
        let doc = self.doc;
        self.description(definition.description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.out.push_str(self.str(definition.name));
        self.directives(&definition.directives);
        if definition.values.is_empty() {
            return;
        }
        self.out.push(' ');
        self.open_block();
        for value in &definition.values {
            self.block_item();
            let value = &doc[*value];
            self.description(value.description);
            self.out.push_str(self.str(value.name));
            self.directives(&value.directives);
        }
        self.close_block();
    }

    fn input_object_type(&mut self, keyword: &str, definition: &InputObjectTypeDefinition) {
        self.description(definition.description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.out.push_str(self.str(definition.name));
        self.directives(&definition.directives);
        if definition.fields.is_empty() {
            return;
        }
        self.out.push(' ');
        self.open_block();
        for field in &definition.fields {
            self.block_item();
            self.input_value_definition(*field);
        }
        self.close_block();
    }

    fn scalar_type(&mut self, keyword: &str, definition: &ScalarTypeDefinition) {
        self.description(definition.description);
        self.out.push_str(keyword);
        self.out.push(' ');
        self.out.push_str(self.str(definition.name));
        self.directives(&definition.directives);
    }

    fn directive_definition(&mut self, r: DirectiveDefinitionRef) {
        let doc = self.doc;
        let definition = &doc[r];
        self.description(definition.description);
        self.out.push_str("directive @");
        self.out.push_str(self.str(definition.name));
        self.argument_definitions(&definition.arguments);
        if definition.repeatable {
            self.out.push_str(" repeatable");
        }
        for (i, location) in definition.locations.iter().enumerate() {
            self.out.push_str(if i == 0 { " on " } else { " | " });
            self.out.push_str(self.str(*location));
        }
    }
}

/// Writes `text` as a double-quoted GraphQL string literal.
fn write_escaped_string(out: &mut String, text: &str) {
    out.push('"');
    let bytes = text.as_bytes();
    let needs_escaping =
        memchr::memchr2(b'"', b'\\', bytes).is_some() || bytes.iter().any(|b| *b < 0x20);
    if !needs_escaping {
        out.push_str(text);
    } else {
        for c in text.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    let _ = write!(out, "\\u{:04X}", c as u32);
                },
                c => out.push(c),
            }
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::write_escaped_string;

    #[test]
    fn escapes_quotes_backslashes_and_control_characters() {
        let mut out = String::new();
        write_escaped_string(&mut out, "say \"hi\"\\\n\u{1}");
        assert_eq!(out, r#""say \"hi\"\\\n\u0001""#);
    }

    #[test]
    fn leaves_plain_strings_untouched() {
        let mut out = String::new();
        write_escaped_string(&mut out, "plain text");
        assert_eq!(out, "\"plain text\"");
    }
}
