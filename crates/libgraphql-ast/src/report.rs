use crate::Position;

/// What went wrong, for callers that branch on error class rather than
/// message text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ExternalErrorKind {
    FieldUndefinedOnType,
    FragmentSpreadFormsCycle,
    FragmentUndefined,
    InvalidVariables,
    OperationNameNotFound,
    OperationTypeUndefined,
    TypeUndefined,
}

/// An error caused by the input documents, reported to whoever submitted
/// them.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ExternalError {
    pub kind: ExternalErrorKind,
    pub message: String,
    /// Source locations involved, most relevant first. Empty for
    /// synthesized nodes.
    pub locations: Vec<Position>,
}

impl ExternalError {
    pub fn new(kind: ExternalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            locations: vec![],
        }
    }

    /// Attaches `position` if it points into real source text.
    pub fn at(mut self, position: Position) -> Self {
        if position.is_known() {
            self.locations.push(position);
        }
        self
    }

    pub fn field_undefined_on_type(field_name: &str, type_name: &str) -> Self {
        Self::new(
            ExternalErrorKind::FieldUndefinedOnType,
            format!("field: {field_name} not defined on type: {type_name}"),
        )
    }

    pub fn fragment_spread_forms_cycle(chain: &[&str]) -> Self {
        Self::new(
            ExternalErrorKind::FragmentSpreadFormsCycle,
            format!("fragment spread forms a cycle: {}", chain.join(" -> ")),
        )
    }

    pub fn fragment_undefined(fragment_name: &str) -> Self {
        Self::new(
            ExternalErrorKind::FragmentUndefined,
            format!("fragment: {fragment_name} is undefined"),
        )
    }

    pub fn invalid_variables(reason: impl std::fmt::Display) -> Self {
        Self::new(
            ExternalErrorKind::InvalidVariables,
            format!("variables are invalid: {reason}"),
        )
    }

    pub fn operation_name_not_found(operation_name: &str) -> Self {
        Self::new(
            ExternalErrorKind::OperationNameNotFound,
            format!("operation with name: {operation_name} not found"),
        )
    }

    pub fn operation_type_undefined(operation_type: &str) -> Self {
        Self::new(
            ExternalErrorKind::OperationTypeUndefined,
            format!("the schema does not define a root type for operation type: {operation_type}"),
        )
    }

    pub fn type_undefined(type_name: &str) -> Self {
        Self::new(
            ExternalErrorKind::TypeUndefined,
            format!("type not defined: {type_name}"),
        )
    }

    fn format_oneline(&self) -> String {
        match self.locations.first() {
            Some(position) => format!("{}: {}", position, self.message),
            None => self.message.clone(),
        }
    }
}

/// An error in the engine itself: a pass found the Document in a state it
/// should never be in.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InternalError {
    #[error("{pass}: {message}")]
    InvariantViolated {
        pass: &'static str,
        message: String,
    },

    #[error("value of argument `{argument}` cannot be converted to JSON: {source}")]
    ValueToJson {
        argument: String,
        source: crate::document::ValueToJsonError,
    },
}

/// Errors collected while walking or normalizing a Document.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub external_errors: Vec<ExternalError>,
    pub internal_errors: Vec<InternalError>,
}

impl Report {
    pub fn add_external_error(&mut self, error: ExternalError) {
        self.external_errors.push(error);
    }

    pub fn add_internal_error(&mut self, error: InternalError) {
        self.internal_errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.external_errors.is_empty() || !self.internal_errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.external_errors.clear();
        self.internal_errors.clear();
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.external_errors {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "external: {error}")?;
        }
        for error in &self.internal_errors {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "internal: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}
