use serde::Deserialize;
use serde::Serialize;

/// Switches for the stages of [`OperationNormalizer`](crate::OperationNormalizer).
///
/// Every stage is enabled by default except the resolution of
/// `@include`/`@skip` conditions through variable values. Options
/// deserialize from partial objects, missing keys keeping their default:
///
/// ```
/// # use libgraphql_normalization::NormalizationOptions;
/// let options: NormalizationOptions =
///     serde_json::from_str(r#"{ "extract_variables": false }"#).unwrap();
/// assert!(!options.extract_variables);
/// assert!(options.inline_fragment_spreads);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizationOptions {
    /// Drops selections excluded by a literal `@include(if: false)` or
    /// `@skip(if: true)` and strips the directives from kept ones.
    pub apply_include_skip_directives: bool,
    /// Also evaluates `@include`/`@skip` conditions given as variables,
    /// using the operation's variable values.
    pub resolve_include_skip_variables: bool,
    pub inline_fragment_spreads: bool,
    /// Moves literal field arguments into variables.
    pub extract_variables: bool,
    pub remove_self_aliasing: bool,
    /// Splices inline fragments that always apply to their enclosing type.
    pub resolve_inline_fragments: bool,
    /// Merges sibling inline fragments and sibling fields selecting into
    /// the same response key.
    pub merge_selections: bool,
    pub remove_fragment_definitions: bool,
    pub deduplicate_fields: bool,
    pub remove_unused_variables: bool,
    /// Turns variable and argument defaults into explicit variable values.
    pub extract_default_values: bool,
    /// Wraps single values passed where the schema expects a list.
    pub coerce_list_inputs: bool,
    pub inject_input_field_defaults: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            apply_include_skip_directives: true,
            resolve_include_skip_variables: false,
            inline_fragment_spreads: true,
            extract_variables: true,
            remove_self_aliasing: true,
            resolve_inline_fragments: true,
            merge_selections: true,
            remove_fragment_definitions: true,
            deduplicate_fields: true,
            remove_unused_variables: true,
            extract_default_values: true,
            coerce_list_inputs: true,
            inject_input_field_defaults: true,
        }
    }
}

macro_rules! with_setters {
    ($options:ident { $($setter:ident => $field:ident),* $(,)? }) => {
        impl $options {
            $(
                pub fn $setter(mut self, enabled: bool) -> Self {
                    self.$field = enabled;
                    self
                }
            )*
        }
    };
}

impl NormalizationOptions {
    /// Options with every stage disabled, to switch single stages on.
    pub fn none() -> Self {
        Self {
            apply_include_skip_directives: false,
            resolve_include_skip_variables: false,
            inline_fragment_spreads: false,
            extract_variables: false,
            remove_self_aliasing: false,
            resolve_inline_fragments: false,
            merge_selections: false,
            remove_fragment_definitions: false,
            deduplicate_fields: false,
            remove_unused_variables: false,
            extract_default_values: false,
            coerce_list_inputs: false,
            inject_input_field_defaults: false,
        }
    }
}

with_setters!(NormalizationOptions {
    with_apply_include_skip_directives => apply_include_skip_directives,
    with_resolve_include_skip_variables => resolve_include_skip_variables,
    with_inline_fragment_spreads => inline_fragment_spreads,
    with_extract_variables => extract_variables,
    with_remove_self_aliasing => remove_self_aliasing,
    with_resolve_inline_fragments => resolve_inline_fragments,
    with_merge_selections => merge_selections,
    with_remove_fragment_definitions => remove_fragment_definitions,
    with_deduplicate_fields => deduplicate_fields,
    with_remove_unused_variables => remove_unused_variables,
    with_extract_default_values => extract_default_values,
    with_coerce_list_inputs => coerce_list_inputs,
    with_inject_input_field_defaults => inject_input_field_defaults,
});

/// Switches for [`DefinitionNormalizer`](crate::DefinitionNormalizer).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefinitionNormalizationOptions {
    /// Turns an extension with no base definition into that definition
    /// instead of leaving it unmerged.
    pub create_missing_definitions: bool,
}

impl Default for DefinitionNormalizationOptions {
    fn default() -> Self {
        Self {
            create_missing_definitions: true,
        }
    }
}

with_setters!(DefinitionNormalizationOptions {
    with_create_missing_definitions => create_missing_definitions,
});
