use crate::Document;
use crate::document::Value;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ValueToJsonError {
    #[error("numeric literal `{raw}` is not representable as JSON")]
    InvalidNumber { raw: String },

    #[error("value references variable `${name}`, which has no JSON representation")]
    UnresolvedVariable { name: String },
}

impl Document {
    /// Converts a literal value to JSON.
    ///
    /// Numbers keep their source text, enum values become strings and object
    /// fields keep their order.
    pub fn value_to_json(&self, value: Value) -> Result<JsonValue, ValueToJsonError> {
        Ok(match value {
            Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(b),
            Value::String(r) => JsonValue::String(self.str(self[r].content).to_owned()),
            Value::Enum(r) => JsonValue::String(self.str(self[r].name).to_owned()),
            Value::Int(r) => parse_number(self.str(self[r].raw))?,
            Value::Float(r) => parse_number(self.str(self[r].raw))?,
            Value::Variable(r) => {
                return Err(ValueToJsonError::UnresolvedVariable {
                    name: self.str(self[r].name).to_owned(),
                });
            },
            Value::List(r) => JsonValue::Array(
                self[r]
                    .values
                    .iter()
                    .map(|value| self.value_to_json(*value))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(r) => {
                let mut map = Map::with_capacity(self[r].fields.len());
                for field in &self[r].fields {
                    let field = &self[*field];
                    map.insert(self.str(field.name).to_owned(), self.value_to_json(field.value)?);
                }
                JsonValue::Object(map)
            },
        })
    }
}

fn parse_number(raw: &str) -> Result<JsonValue, ValueToJsonError> {
    raw.parse::<Number>()
        .map(JsonValue::Number)
        .map_err(|_| ValueToJsonError::InvalidNumber { raw: raw.to_owned() })
}
