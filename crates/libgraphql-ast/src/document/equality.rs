//! Structural equality and compatibility queries. None of these mutate.

use crate::Document;
use crate::Node;
use crate::document::TypeKind;
use crate::document::Value;
use crate::refs::*;

impl Document {
    /// Structural equality of two type chains of this Document.
    pub fn types_are_equal_deep(&self, left: TypeRef, right: TypeRef) -> bool {
        self.types_are_equal_deep_across(left, self, right)
    }

    /// Like [`Document::types_are_equal_deep`] with `right` living in
    /// another Document (an operation variable type against a schema type).
    pub fn types_are_equal_deep_across(&self, left: TypeRef, other: &Document, right: TypeRef) -> bool {
        let (mut left, mut right) = (Some(left), Some(right));
        loop {
            match (left, right) {
                (None, None) => return true,
                (Some(l), Some(r)) => {
                    let (l, r) = (&self[l], &other[r]);
                    if l.kind != r.kind {
                        return false;
                    }
                    if l.kind == TypeKind::Named {
                        return self.str(l.name) == other.str(r.name);
                    }
                    left = l.of_type;
                    right = r.of_type;
                },
                _ => return false,
            }
        }
    }

    /// Like [`Document::types_are_equal_deep`], except that the named leaves
    /// may also differ when one names an interface (or union) the other
    /// implements (or is a member of). Both chains must live in this
    /// Document, which must be a schema.
    pub fn types_are_compatible_deep(&self, left: TypeRef, right: TypeRef) -> bool {
        let (mut left, mut right) = (left, right);
        loop {
            let (l, r) = (&self[left], &self[right]);
            if l.kind != r.kind {
                return false;
            }
            if l.kind == TypeKind::Named {
                let (left_name, right_name) = (self.str(l.name), self.str(r.name));
                if left_name == right_name {
                    return true;
                }
                let (Some(left_node), Some(right_node)) = (
                    self.index.first_non_extension_node_by_name(left_name),
                    self.index.first_non_extension_node_by_name(right_name),
                ) else {
                    return false;
                };
                return self.named_types_are_compatible(left_node, right_node);
            }
            match (l.of_type, r.of_type) {
                (Some(l), Some(r)) => {
                    left = l;
                    right = r;
                },
                _ => return false,
            }
        }
    }

    fn named_types_are_compatible(&self, left: Node, right: Node) -> bool {
        if std::mem::discriminant(&left) == std::mem::discriminant(&right) {
            return false;
        }
        match (left, right) {
            (Node::InterfaceTypeDefinition(_), _) => self.node_implements_interface(right, left),
            (_, Node::InterfaceTypeDefinition(_)) => self.node_implements_interface(left, right),
            (Node::UnionTypeDefinition(_), _) => self.node_is_union_member(right, left),
            (_, Node::UnionTypeDefinition(_)) => self.node_is_union_member(left, right),
            _ => false,
        }
    }

    /// Deep equality of two values of this Document. Object fields compare
    /// by name regardless of order; list items compare in order.
    pub fn values_are_equal(&self, left: Value, right: Value) -> bool {
        self.values_are_equal_across(left, self, right)
    }

    pub fn values_are_equal_across(&self, left: Value, other: &Document, right: Value) -> bool {
        match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(l), Value::Boolean(r)) => l == r,
            (Value::String(l), Value::String(r)) => {
                self.str(self[l].content) == other.str(other[r].content)
            },
            (Value::Int(l), Value::Int(r)) => self.str(self[l].raw) == other.str(other[r].raw),
            (Value::Float(l), Value::Float(r)) => self.str(self[l].raw) == other.str(other[r].raw),
            (Value::Enum(l), Value::Enum(r)) => self.str(self[l].name) == other.str(other[r].name),
            (Value::Variable(l), Value::Variable(r)) => {
                self.str(self[l].name) == other.str(other[r].name)
            },
            (Value::List(l), Value::List(r)) => {
                let (l, r) = (&self[l].values, &other[r].values);
                l.len() == r.len()
                    && l.iter()
                        .zip(r.iter())
                        .all(|(l, r)| self.values_are_equal_across(*l, other, *r))
            },
            (Value::Object(l), Value::Object(r)) => {
                let (l, r) = (&self[l].fields, &other[r].fields);
                l.len() == r.len()
                    && l.iter().all(|l| {
                        let name = self.str(self[*l].name);
                        r.iter().any(|r| {
                            other.str(other[*r].name) == name
                                && self.values_are_equal_across(self[*l].value, other, other[*r].value)
                        })
                    })
            },
            _ => false,
        }
    }

    pub fn arguments_are_equal(&self, left: ArgumentRef, right: ArgumentRef) -> bool {
        self.argument_name(left) == self.argument_name(right)
            && self.values_are_equal(self[left].value, self[right].value)
    }

    /// Argument lists are equal when they hold pairwise-equal arguments,
    /// in any order.
    pub fn argument_sets_are_equal(&self, left: &[ArgumentRef], right: &[ArgumentRef]) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .all(|l| right.iter().any(|r| self.arguments_are_equal(*l, *r)))
    }

    pub fn directives_are_equal(&self, left: DirectiveRef, right: DirectiveRef) -> bool {
        self.directive_name(left) == self.directive_name(right)
            && self.argument_sets_are_equal(&self[left].arguments, &self[right].arguments)
    }

    /// Directive lists are equal when they hold equal directives in the same
    /// order.
    pub fn directive_sets_are_equal(&self, left: &[DirectiveRef], right: &[DirectiveRef]) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .zip(right.iter())
                .all(|(l, r)| self.directives_are_equal(*l, *r))
    }

    /// Flat field equality: same name, same alias, equal arguments and
    /// directives, and neither field has a selection set.
    pub fn fields_are_equal_flat(&self, left: FieldRef, right: FieldRef) -> bool {
        let (l, r) = (&self[left], &self[right]);
        self.field_name(left) == self.field_name(right)
            && self.field_alias(left) == self.field_alias(right)
            && l.selection_set.is_none()
            && r.selection_set.is_none()
            && self.argument_sets_are_equal(&l.arguments, &r.arguments)
            && self.directive_sets_are_equal(&l.directives, &r.directives)
    }
}
