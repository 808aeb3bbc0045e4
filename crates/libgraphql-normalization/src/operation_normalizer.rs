use crate::NormalizationOptions;
use crate::passes::*;
use crate::variables_normalizer::run_variable_stages;
use libgraphql_ast::Document;
use libgraphql_ast::Report;
use libgraphql_visitor::Walker;

/// Walks `operation` with the visitors registered on `walker`, if any.
/// Returns `false` when the walk left errors and normalization must stop.
pub(crate) fn run_stage(
    stage: &str,
    walker: &mut Walker<'_>,
    operation: &mut Document,
    definition: &Document,
    report: &mut Report,
) -> bool {
    if walker.visitor_count() == 0 {
        return true;
    }
    log::debug!("running normalization stage `{stage}`");
    walker.walk(operation, Some(definition), report);
    if report.has_errors() {
        log::debug!("normalization stopped after stage `{stage}`: {report}");
        return false;
    }
    true
}

/// Rewrites executable Documents into canonical form against a schema.
///
/// The stages run in a fixed order, each as its own walk over the
/// operation, and normalization stops after the first stage that reports
/// an error:
///
/// 1. drop operations not matching the requested name
/// 2. `@include`/`@skip`, and fragment spread validation and depths
/// 3. fragment spread inlining
/// 4. variable extraction
/// 5. self-alias removal and inline fragment resolution
/// 6. inline fragment and field merging
/// 7. fragment definition removal
/// 8. field deduplication and unused variable removal
/// 9. default value extraction
/// 10. list input coercion
/// 11. input field default injection
///
/// A normalizer holds nothing but its options, so one instance can serve
/// any number of threads.
#[derive(Clone, Debug, Default)]
pub struct OperationNormalizer {
    options: NormalizationOptions,
}

impl OperationNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Normalizes every operation of `operation`.
    pub fn normalize_operation(&self, operation: &mut Document, definition: &Document, report: &mut Report) {
        self.normalize(operation, definition, None, report);
    }

    /// Normalizes the operation named `operation_name`, dropping all others.
    /// Reports `OperationNameNotFound` if there is no such operation.
    pub fn normalize_named_operation(
        &self,
        operation: &mut Document,
        definition: &Document,
        operation_name: &str,
        report: &mut Report,
    ) {
        self.normalize(operation, definition, Some(operation_name), report);
    }

    fn normalize(
        &self,
        operation: &mut Document,
        definition: &Document,
        operation_name: Option<&str>,
        report: &mut Report,
    ) {
        let options = &self.options;

        if let Some(operation_name) = operation_name {
            let mut walker = Walker::new();
            walker.register_visitor(RemoveNotMatchingOperationDefinitions::new(operation_name));
            if !run_stage("remove operation definitions", &mut walker, operation, definition, report) {
                return;
            }
        }

        let mut spread_depth = FragmentSpreadDepth::default();
        {
            let mut walker = Walker::new();
            if options.apply_include_skip_directives {
                walker.register_visitor(
                    DirectiveIncludeSkip::new().with_variable_resolution(options.resolve_include_skip_variables),
                );
            }
            if options.inline_fragment_spreads {
                walker.register_visitor(&mut spread_depth);
            }
            if !run_stage("include/skip and spread depths", &mut walker, operation, definition, report) {
                return;
            }
        }

        if options.inline_fragment_spreads {
            let mut walker = Walker::new();
            walker.register_visitor(FragmentSpreadInlining::new(spread_depth.into_depths()));
            if !run_stage("fragment spread inlining", &mut walker, operation, definition, report) {
                return;
            }
        }

        if options.extract_variables {
            let mut walker = Walker::new();
            walker.register_visitor(VariablesExtraction::default());
            if !run_stage("variables extraction", &mut walker, operation, definition, report) {
                return;
            }
        }

        let mut walker = Walker::new();
        if options.remove_self_aliasing {
            walker.register_visitor(RemoveSelfAliasing);
        }
        if options.resolve_inline_fragments {
            walker.register_visitor(InlineFragmentResolving);
        }
        if !run_stage("aliases and inline fragments", &mut walker, operation, definition, report) {
            return;
        }

        if options.merge_selections {
            let mut walker = Walker::new();
            walker
                .register_visitor(InlineFragmentMerging)
                .register_visitor(FieldSelectionMerging);
            if !run_stage("selection merging", &mut walker, operation, definition, report) {
                return;
            }
        }

        if options.remove_fragment_definitions {
            let mut walker = Walker::new();
            walker.register_visitor(RemoveFragmentDefinitions);
            if !run_stage("remove fragment definitions", &mut walker, operation, definition, report) {
                return;
            }
        }

        let mut walker = Walker::new();
        if options.deduplicate_fields {
            walker.register_visitor(FieldDeduplication);
        }
        if options.remove_unused_variables {
            walker.register_visitor(DeleteUnusedVariables::default());
        }
        if !run_stage("deduplication and unused variables", &mut walker, operation, definition, report) {
            return;
        }

        run_variable_stages(
            options.extract_default_values,
            options.coerce_list_inputs,
            options.inject_input_field_defaults,
            operation,
            definition,
            report,
        );
    }
}
