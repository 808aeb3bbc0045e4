use crate::DefinitionNormalizationOptions;
use crate::passes::ExtendTypeDefinitions;
use crate::passes::RemoveMergedTypeExtensions;
use libgraphql_ast::Document;
use libgraphql_ast::Report;
use libgraphql_visitor::Walker;

/// Rewrites a schema Document so every type is described by one
/// definition: extensions are merged into their base definitions (or turn
/// into them) and then removed.
///
/// Callers adding the built-in schema with
/// [`merge_base_schema`](libgraphql_ast::merge_base_schema) should do so
/// after normalizing, so root operation types created from extensions are
/// picked up.
#[derive(Clone, Debug, Default)]
pub struct DefinitionNormalizer {
    options: DefinitionNormalizationOptions,
}

impl DefinitionNormalizer {
    pub fn new(options: DefinitionNormalizationOptions) -> Self {
        Self { options }
    }

    pub fn normalize_definition(&self, definition: &mut Document, report: &mut Report) {
        log::debug!("merging type extensions");
        Walker::new()
            .register_visitor(ExtendTypeDefinitions::new(self.options.create_missing_definitions))
            .walk(definition, None, report);
        if report.has_errors() {
            return;
        }
        Walker::new()
            .register_visitor(RemoveMergedTypeExtensions)
            .walk(definition, None, report);
    }
}
