use crate::ByteSliceReference;
use serde_json::Map;
use serde_json::Value as JsonValue;

/// Error returned when a caller hands [`Input::set_variables_json`] bytes
/// that are not a JSON object.
#[derive(Debug, thiserror::Error)]
pub enum VariablesJsonError {
    #[error("variables are not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("variables must be a JSON object, found: {found}")]
    NotAnObject { found: &'static str },
}

/// The raw text backing a [`Document`](crate::Document) plus the variables
/// side channel that travels with an operation.
///
/// The text buffer is append-only: every name and literal in the arena is a
/// [`ByteSliceReference`] into it, and synthesized content (a generated
/// variable name, an imported type name) is appended rather than written in
/// place. Offsets are never reused until [`Input::reset`].
#[derive(Clone, Debug, Default)]
pub struct Input {
    raw: String,
    variables: Map<String, JsonValue>,
}

/// `[start, end)` offsets for `len` bytes appended at `start`, if they fit
/// in a `u32`.
pub(crate) fn reference_offsets(start: usize, len: usize) -> Option<(u32, u32)> {
    let end = start.checked_add(len)?;
    Some((u32::try_from(start).ok()?, u32::try_from(end).ok()?))
}

impl Input {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: String::with_capacity(capacity),
            variables: Map::new(),
        }
    }

    /// Appends `text` to the buffer and returns a reference to it.
    ///
    /// Panics if the buffer would grow past `u32::MAX` bytes, the most a
    /// [`ByteSliceReference`] can address.
    pub fn append_input_str(&mut self, text: &str) -> ByteSliceReference {
        let Some((start, end)) = reference_offsets(self.raw.len(), text.len()) else {
            panic!(
                "input buffer of {} bytes cannot grow by {} bytes past u32::MAX",
                self.raw.len(),
                text.len(),
            );
        };
        self.raw.push_str(text);
        ByteSliceReference::new(start, end)
    }

    /// Returns the text a reference points at.
    ///
    /// Panics if `reference` was not produced by this buffer.
    pub fn str(&self, reference: ByteSliceReference) -> &str {
        &self.raw[reference.start as usize..reference.end as usize]
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn variables(&self) -> &Map<String, JsonValue> {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Map<String, JsonValue> {
        &mut self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&JsonValue> {
        self.variables.get(name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut JsonValue> {
        self.variables.get_mut(name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Sets (or overwrites) the JSON value of a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: JsonValue) {
        self.variables.insert(name.into(), value);
    }

    /// Removes a variable, keeping the relative order of the others.
    pub fn remove_variable(&mut self, name: &str) -> Option<JsonValue> {
        self.variables.shift_remove(name)
    }

    /// Serializes the variables side channel as compact JSON.
    pub fn variables_json(&self) -> String {
        JsonValue::Object(self.variables.clone()).to_string()
    }

    /// Replaces the variables side channel with the object encoded in
    /// `json`. Empty input is treated as `{}`.
    pub fn set_variables_json(
        &mut self,
        json: &[u8],
    ) -> Result<(), VariablesJsonError> {
        if json.iter().all(u8::is_ascii_whitespace) {
            self.variables.clear();
            return Ok(());
        }

        match serde_json::from_slice::<JsonValue>(json)? {
            JsonValue::Object(map) => {
                self.variables = map;
                Ok(())
            },
            other => Err(VariablesJsonError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Truncates the text buffer and drops every variable, retaining the
    /// allocated capacity.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.variables.clear();
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
