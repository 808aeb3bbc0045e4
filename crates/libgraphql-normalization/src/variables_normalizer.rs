use crate::operation_normalizer::run_stage;
use crate::passes::InjectInputFieldDefaults;
use crate::passes::InputCoercionForList;
use crate::passes::VariablesDefaultValueExtraction;
use libgraphql_ast::Document;
use libgraphql_ast::Report;
use libgraphql_visitor::Walker;

/// The variable stages closing [`OperationNormalizer`](crate::OperationNormalizer)
/// runs, in order.
pub(crate) fn run_variable_stages(
    extract_default_values: bool,
    coerce_list_inputs: bool,
    inject_input_field_defaults: bool,
    operation: &mut Document,
    definition: &Document,
    report: &mut Report,
) -> bool {
    if extract_default_values {
        let mut walker = Walker::new();
        walker.register_visitor(VariablesDefaultValueExtraction::default());
        if !run_stage("default value extraction", &mut walker, operation, definition, report) {
            return false;
        }
    }
    if coerce_list_inputs {
        let mut walker = Walker::new();
        walker.register_visitor(InputCoercionForList);
        if !run_stage("list input coercion", &mut walker, operation, definition, report) {
            return false;
        }
    }
    if inject_input_field_defaults {
        let mut walker = Walker::new();
        walker.register_visitor(InjectInputFieldDefaults);
        if !run_stage("input field defaults", &mut walker, operation, definition, report) {
            return false;
        }
    }
    true
}

/// Runs only the variable stages: default value extraction, list input
/// coercion and input field default injection.
///
/// For callers that normalize an operation once and then execute it with
/// changing variables: after [`Input::set_variables_json`](libgraphql_ast::Input::set_variables_json)
/// on the normalized operation, this brings the new values into the shape
/// the normalized operation expects.
#[derive(Clone, Debug)]
pub struct VariablesNormalizer {
    extract_default_values: bool,
    coerce_list_inputs: bool,
    inject_input_field_defaults: bool,
}

impl Default for VariablesNormalizer {
    fn default() -> Self {
        Self {
            extract_default_values: true,
            coerce_list_inputs: true,
            inject_input_field_defaults: true,
        }
    }
}

impl VariablesNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the variable stage switches from full normalization options.
    pub fn from_options(options: &crate::NormalizationOptions) -> Self {
        Self {
            extract_default_values: options.extract_default_values,
            coerce_list_inputs: options.coerce_list_inputs,
            inject_input_field_defaults: options.inject_input_field_defaults,
        }
    }

    pub fn normalize_variables(&self, operation: &mut Document, definition: &Document, report: &mut Report) {
        run_variable_stages(
            self.extract_default_values,
            self.coerce_list_inputs,
            self.inject_input_field_defaults,
            operation,
            definition,
            report,
        );
    }
}
