use crate::Document;
use crate::document::Value;
use crate::refs::*;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `0 -> "a"`, `25 -> "z"`, `26 -> "aa"`, `27 -> "ab"`, …
fn nth_variable_name(mut n: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(ALPHABET[n % ALPHABET.len()]);
        n /= ALPHABET.len();
        if n == 0 {
            break;
        }
        n -= 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

impl Document {
    pub fn variable_definition_by_name(
        &self,
        operation: OperationDefinitionRef,
        name: &str,
    ) -> Option<VariableDefinitionRef> {
        self[operation]
            .variable_definitions
            .iter()
            .find(|r| self.variable_definition_name(**r) == name)
            .copied()
    }

    /// Shortest name in the sequence `a`, `b`, …, `z`, `aa`, `ab`, … that is
    /// neither declared by `operation` nor present in the variables JSON.
    pub fn generate_unused_variable_definition_name(&self, operation: OperationDefinitionRef) -> String {
        (0..)
            .map(nth_variable_name)
            .find(|name| {
                self.variable_definition_by_name(operation, name).is_none()
                    && !self.input.has_variable(name)
            })
            .unwrap_or_default()
    }

    pub fn value_contains_variable(&self, value: Value) -> bool {
        match value {
            Value::Variable(_) => true,
            Value::List(r) => self[r]
                .values
                .iter()
                .any(|value| self.value_contains_variable(*value)),
            Value::Object(r) => self[r]
                .fields
                .iter()
                .any(|field| self.value_contains_variable(self[*field].value)),
            _ => false,
        }
    }

    /// Appends the name of every variable referenced anywhere in `value`.
    pub fn variables_used_in_value<'doc>(&'doc self, value: Value, names: &mut Vec<&'doc str>) {
        match value {
            Value::Variable(r) => names.push(self.variable_value_name(r)),
            Value::List(r) => {
                for value in &self[r].values {
                    self.variables_used_in_value(*value, names);
                }
            },
            Value::Object(r) => {
                for field in &self[r].fields {
                    self.variables_used_in_value(self[*field].value, names);
                }
            },
            _ => {},
        }
    }
}
