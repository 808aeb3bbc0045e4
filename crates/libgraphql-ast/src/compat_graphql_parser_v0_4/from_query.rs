//! `graphql_parser` v0.4 query `Document` → arena [`Document`].

use crate::Document;
use crate::Node;
use crate::Position;
use crate::compat_graphql_parser_v0_4::helpers::import_arguments;
use crate::compat_graphql_parser_v0_4::helpers::import_directives;
use crate::compat_graphql_parser_v0_4::helpers::import_type;
use crate::compat_graphql_parser_v0_4::helpers::import_value;
use crate::compat_graphql_parser_v0_4::query;
use crate::document::Field;
use crate::document::FragmentDefinition;
use crate::document::FragmentSpread;
use crate::document::InlineFragment;
use crate::document::OperationDefinition;
use crate::document::OperationType;
use crate::document::Selection;
use crate::document::SelectionSet;
use crate::document::VariableDefinition;
use crate::refs::SelectionRef;
use crate::refs::SelectionSetRef;
use crate::refs::VariableDefinitionRef;

pub(super) struct QueryImporter<'doc, 'src> {
    doc: &'doc mut Document,
    source: Option<&'src str>,
}

impl<'doc, 'src> QueryImporter<'doc, 'src> {
    pub(super) fn new(doc: &'doc mut Document) -> Self {
        Self { doc, source: None }
    }

    /// Source text the AST was parsed from, used to place fragment spreads
    /// on their `...` token.
    pub(super) fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(source);
        self
    }

    fn spread_position(&self, name_position: graphql_parser::Pos) -> Position {
        let position = Position::from(name_position);
        self.source
            .and_then(|source| spread_token_position(source, position))
            .unwrap_or(position)
    }

    pub(super) fn import_document(&mut self, ast: &query::Document) {
        use graphql_parser::query::Definition as GpDef;
        for definition in &ast.definitions {
            let node = match definition {
                GpDef::Operation(operation) => self.import_operation(operation),
                GpDef::Fragment(fragment) => self.import_fragment_definition(fragment),
            };
            self.doc.add_root_node(node);
        }
    }

    fn import_operation(&mut self, operation: &query::OperationDefinition) -> Node {
        use graphql_parser::query::OperationDefinition as GpOp;
        match operation {
            GpOp::SelectionSet(set) => {
                self.import_operation_parts(OperationType::Query, None, &[], &[], set, set.span.0)
            },
            GpOp::Query(q) => self.import_operation_parts(
                OperationType::Query,
                q.name.as_deref(),
                &q.variable_definitions,
                &q.directives,
                &q.selection_set,
                q.position,
            ),
            GpOp::Mutation(m) => self.import_operation_parts(
                OperationType::Mutation,
                m.name.as_deref(),
                &m.variable_definitions,
                &m.directives,
                &m.selection_set,
                m.position,
            ),
            GpOp::Subscription(s) => self.import_operation_parts(
                OperationType::Subscription,
                s.name.as_deref(),
                &s.variable_definitions,
                &s.directives,
                &s.selection_set,
                s.position,
            ),
        }
    }

    fn import_operation_parts(
        &mut self,
        operation_type: OperationType,
        name: Option<&str>,
        variable_definitions: &[query::VariableDefinition],
        directives: &[query::Directive],
        selection_set: &query::SelectionSet,
        position: graphql_parser::Pos,
    ) -> Node {
        let name = name.map(|name| self.doc.input.append_input_str(name));
        let variable_definitions = variable_definitions
            .iter()
            .map(|definition| self.import_variable_definition(definition))
            .collect();
        let directives = import_directives(self.doc, directives);
        let selection_set = self.import_selection_set(selection_set);
        Node::OperationDefinition(self.doc.add(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
            position: Position::from(position),
        }))
    }

    fn import_variable_definition(&mut self, definition: &query::VariableDefinition) -> VariableDefinitionRef {
        let variable = self.doc.add_variable_value(&definition.name);
        let ty = import_type(self.doc, &definition.var_type);
        let default_value = definition
            .default_value
            .as_ref()
            .map(|value| import_value(self.doc, value));
        self.doc.add(VariableDefinition {
            variable,
            ty,
            default_value,
            directives: vec![],
            position: Position::from(definition.position),
        })
    }

    fn import_fragment_definition(&mut self, fragment: &query::FragmentDefinition) -> Node {
        let graphql_parser::query::TypeCondition::On(type_name) = &fragment.type_condition;
        let name = self.doc.input.append_input_str(&fragment.name);
        let type_condition = self.doc.add_named_type(type_name);
        let directives = import_directives(self.doc, &fragment.directives);
        let selection_set = self.import_selection_set(&fragment.selection_set);
        Node::FragmentDefinition(self.doc.add(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            position: Position::from(fragment.position),
        }))
    }

    fn import_selection_set(&mut self, set: &query::SelectionSet) -> SelectionSetRef {
        let selections = set
            .items
            .iter()
            .map(|selection| self.import_selection(selection))
            .collect();
        self.doc.add(SelectionSet { selections })
    }

    fn import_selection(&mut self, selection: &query::Selection) -> SelectionRef {
        use graphql_parser::query::Selection as GpSel;
        let selection = match selection {
            GpSel::Field(field) => Selection::Field(self.import_field(field)),
            GpSel::FragmentSpread(spread) => {
                let fragment_name = self.doc.input.append_input_str(&spread.fragment_name);
                let directives = import_directives(self.doc, &spread.directives);
                Selection::FragmentSpread(self.doc.add(FragmentSpread {
                    fragment_name,
                    directives,
                    position: self.spread_position(spread.position),
                }))
            },
            GpSel::InlineFragment(fragment) => {
                let type_condition = fragment.type_condition.as_ref().map(|condition| {
                    let graphql_parser::query::TypeCondition::On(type_name) = condition;
                    self.doc.add_named_type(type_name)
                });
                let directives = import_directives(self.doc, &fragment.directives);
                let selection_set = self.import_selection_set(&fragment.selection_set);
                Selection::InlineFragment(self.doc.add(InlineFragment {
                    type_condition,
                    directives,
                    selection_set,
                    position: Position::from(fragment.position),
                }))
            },
        };
        self.doc.add(selection)
    }

    fn import_field(&mut self, field: &query::Field) -> crate::refs::FieldRef {
        let alias = field
            .alias
            .as_deref()
            .map(|alias| self.doc.input.append_input_str(alias));
        let name = self.doc.input.append_input_str(&field.name);
        let arguments = import_arguments(self.doc, &field.arguments);
        let directives = import_directives(self.doc, &field.directives);
        let selection_set = if field.selection_set.items.is_empty() {
            None
        } else {
            Some(self.import_selection_set(&field.selection_set))
        };
        self.doc.add(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            position: Position::from(field.position),
        })
    }
}

/// Finds the `...` token preceding the fragment name at `name_position` on
/// the same line. Columns count characters.
fn spread_token_position(source: &str, name_position: Position) -> Option<Position> {
    let line_index = usize::try_from(name_position.line).ok()?.checked_sub(1)?;
    let column_index = usize::try_from(name_position.column).ok()?.checked_sub(1)?;
    let line = source.lines().nth(line_index)?;
    let before_name: Vec<char> = line.chars().take(column_index).collect();
    let mut end = before_name.len();
    while end > 0 && matches!(before_name[end - 1], ' ' | '\t' | ',') {
        end -= 1;
    }
    if end < 3 || before_name[end - 3..end] != ['.', '.', '.'] {
        return None;
    }
    let column = u32::try_from(end - 3 + 1).ok()?;
    Some(Position::new(name_position.line, column))
}
