use crate::Visitor;
use crate::WalkContext;
use crate::walk_context::Control;
use libgraphql_ast::Document;
use libgraphql_ast::ExternalError;
use libgraphql_ast::Node;
use libgraphql_ast::OperationType;
use libgraphql_ast::Position;
use libgraphql_ast::Report;
use libgraphql_ast::Selection;
use libgraphql_ast::refs::*;
use smallvec::SmallVec;

/// Depth-first traversal of a Document that drives a list of registered
/// [`Visitor`]s.
///
/// Hooks of one node run in registration order, enter hooks before the
/// node's children and leave hooks after them. A hook may mutate the
/// Document through its [`WalkContext`]: every child list is re-read by
/// position, and a selection set whose selection list changed while one of
/// its selections was being walked is walked again from its first
/// selection.
///
/// When a definition Document (the schema) is given, the Walker keeps the
/// enclosing-type stack current and reports names it cannot resolve
/// (root operation type, field, type condition) to the report, stopping the
/// walk.
pub struct Walker<'v> {
    visitors: Vec<Box<dyn Visitor + 'v>>,
}

impl<'v> Walker<'v> {
    pub fn new() -> Self {
        Self { visitors: vec![] }
    }

    pub fn register_visitor<V: Visitor + 'v>(&mut self, visitor: V) -> &mut Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    pub fn register_boxed(&mut self, visitor: Box<dyn Visitor + 'v>) -> &mut Self {
        self.visitors.push(visitor);
        self
    }

    pub fn visitor_count(&self) -> usize {
        self.visitors.len()
    }

    /// Walks `operation` once. Errors raised by hooks or by type resolution
    /// end up in `report`; [`Report::has_errors`] tells whether the walk
    /// stopped early because of one.
    pub fn walk(
        &mut self,
        operation: &mut Document,
        definition: Option<&Document>,
        report: &mut Report,
    ) {
        let mut walk = Walk {
            visitors: &mut self.visitors,
            ctx: WalkContext::new(operation, definition, report),
        };
        walk.walk_document();
    }
}

impl Default for Walker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Skip,
    Stop,
}

struct Walk<'w, 'v, 'a> {
    visitors: &'w mut [Box<dyn Visitor + 'v>],
    ctx: WalkContext<'a>,
}

impl<'v, 'a> Walk<'_, 'v, 'a> {
    fn enter(&mut self, mut hook: impl FnMut(&mut (dyn Visitor + 'v), &mut WalkContext<'a>)) -> Flow {
        if self.ctx.stopped {
            return Flow::Stop;
        }
        let mut i = 0;
        while i < self.visitors.len() {
            self.ctx.control = Control::Continue;
            hook(self.visitors[i].as_mut(), &mut self.ctx);
            match self.ctx.control {
                Control::Continue => i += 1,
                Control::Revisit => i = 0,
                Control::Skip => {
                    self.ctx.control = Control::Continue;
                    return Flow::Skip;
                },
                Control::Stop => return Flow::Stop,
            }
        }
        Flow::Continue
    }

    fn leave(&mut self, mut hook: impl FnMut(&mut (dyn Visitor + 'v), &mut WalkContext<'a>)) {
        if self.ctx.stopped {
            return;
        }
        let mut i = 0;
        while i < self.visitors.len() {
            self.ctx.control = Control::Continue;
            hook(self.visitors[i].as_mut(), &mut self.ctx);
            match self.ctx.control {
                // Skipping is meaningless once the children have been walked.
                Control::Continue | Control::Skip => i += 1,
                Control::Revisit => i = 0,
                Control::Stop => return,
            }
        }
        self.ctx.control = Control::Continue;
    }

    /// Walks every element of a child list, re-reading the list before each
    /// step so hooks may grow or shrink it.
    fn walk_list<R: Copy>(&mut self, list: impl Fn(&Document) -> &[R], walk: impl Fn(&mut Self, R)) {
        let mut i = 0;
        while let Some(child) = list(&*self.ctx.operation).get(i).copied() {
            walk(self, child);
            if self.ctx.stopped {
                return;
            }
            i += 1;
        }
    }

    fn walk_document(&mut self) {
        if self.enter(|v, ctx| v.enter_document(ctx)) != Flow::Continue {
            return;
        }
        let mut i = 0;
        while let Some(node) = self.ctx.operation.root_nodes.get(i).copied() {
            self.walk_root_node(node);
            if self.ctx.stopped {
                return;
            }
            i += 1;
        }
        self.leave(|v, ctx| v.leave_document(ctx));
    }

    fn walk_root_node(&mut self, node: Node) {
        match node {
            Node::OperationDefinition(r) => self.walk_operation_definition(r),
            Node::FragmentDefinition(r) => self.walk_fragment_definition(r),
            Node::SchemaDefinition(r) => self.walk_schema_definition(r),
            Node::ObjectTypeDefinition(r) => self.walk_object_type_definition(r),
            Node::ObjectTypeExtension(r) => self.walk_object_type_extension(r),
            Node::InterfaceTypeDefinition(r) => self.walk_interface_type_definition(r),
            Node::InterfaceTypeExtension(r) => self.walk_interface_type_extension(r),
            Node::UnionTypeDefinition(r) => self.walk_union_type_definition(r),
            Node::UnionTypeExtension(r) => self.walk_union_type_extension(r),
            Node::EnumTypeDefinition(r) => self.walk_enum_type_definition(r),
            Node::EnumTypeExtension(r) => self.walk_enum_type_extension(r),
            Node::InputObjectTypeDefinition(r) => self.walk_input_object_type_definition(r),
            Node::InputObjectTypeExtension(r) => self.walk_input_object_type_extension(r),
            Node::ScalarTypeDefinition(r) => self.walk_scalar_type_definition(r),
            Node::ScalarTypeExtension(r) => self.walk_scalar_type_extension(r),
            Node::DirectiveDefinition(r) => self.walk_directive_definition(r),
            // Logically deleted, or not a root kind.
            _ => {},
        }
    }

    // ---------------------------------------------------------------------
    // Type resolution against the definition Document
    // ---------------------------------------------------------------------

    /// `Ok(None)` when walking without a definition Document.
    fn resolve_named_type(&self, name: &str, position: Position) -> Result<Option<Node>, ExternalError> {
        let Some(definition) = self.ctx.definition else {
            return Ok(None);
        };
        match definition.index.first_non_extension_node_by_name(name) {
            Some(node) if node.is_type_definition() => Ok(Some(node)),
            _ => Err(ExternalError::type_undefined(name).at(position)),
        }
    }

    fn resolve_root_operation_type(
        &self,
        operation_type: OperationType,
        position: Position,
    ) -> Result<Option<Node>, ExternalError> {
        let Some(definition) = self.ctx.definition else {
            return Ok(None);
        };
        match definition.root_operation_type_name(operation_type) {
            Some(name) => self.resolve_named_type(name, position),
            None => Err(ExternalError::operation_type_undefined(operation_type.as_str()).at(position)),
        }
    }

    fn resolve_field_type(&self, field: FieldRef) -> Result<Option<Node>, ExternalError> {
        let Some(definition) = self.ctx.definition else {
            return Ok(None);
        };
        let field_name = self.ctx.operation.field_name(field);
        if field_name == "__typename" {
            return Ok(Some(
                definition
                    .index
                    .first_non_extension_node_by_name("String")
                    .unwrap_or(Node::Unknown),
            ));
        }
        let Some(enclosing) = self.ctx.enclosing_type_definition() else {
            return Ok(Some(Node::Unknown));
        };
        let position = self.ctx.operation[field].position;
        let Some(field_definition) = definition.node_field_definition_by_name(enclosing, field_name) else {
            return Err(
                ExternalError::field_undefined_on_type(field_name, definition.node_name(enclosing))
                    .at(position),
            );
        };
        self.resolve_named_type(definition.resolve_type_name(definition[field_definition].ty), position)
    }

    /// Pushes a resolved type onto the enclosing-type stack. Returns whether
    /// something was pushed, or `None` if resolution failed and the walk
    /// stopped.
    fn push_type(&mut self, resolved: Result<Option<Node>, ExternalError>) -> Option<bool> {
        match resolved {
            Ok(Some(node)) => {
                self.ctx.type_definitions.push(node);
                Some(true)
            },
            Ok(None) => Some(false),
            Err(error) => {
                log::debug!("walk stopped: {error}");
                self.ctx.stop_with_external_err(error);
                None
            },
        }
    }

    fn pop_type(&mut self, pushed: bool) {
        if pushed {
            self.ctx.type_definitions.pop();
        }
    }

    // ---------------------------------------------------------------------
    // Executable definitions
    // ---------------------------------------------------------------------

    fn walk_operation_definition(&mut self, r: OperationDefinitionRef) {
        let operation = &self.ctx.operation[r];
        let resolved = self.resolve_root_operation_type(operation.operation_type, operation.position);
        let Some(pushed) = self.push_type(resolved) else {
            return;
        };
        if self.enter(|v, ctx| v.enter_operation_definition(ctx, r)) != Flow::Continue {
            self.pop_type(pushed);
            return;
        }
        self.ctx.ancestors.push(Node::OperationDefinition(r));
        self.walk_list(move |doc| doc[r].variable_definitions.as_slice(), Self::walk_variable_definition);
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        if self.ctx.stopped {
            return;
        }
        let selection_set = self.ctx.operation[r].selection_set;
        self.walk_selection_set(selection_set);
        self.ctx.ancestors.pop();
        self.pop_type(pushed);
        self.leave(|v, ctx| v.leave_operation_definition(ctx, r));
    }

    fn walk_variable_definition(&mut self, r: VariableDefinitionRef) {
        if self.enter(|v, ctx| v.enter_variable_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::VariableDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_variable_definition(ctx, r));
    }

    fn walk_fragment_definition(&mut self, r: FragmentDefinitionRef) {
        let doc = &*self.ctx.operation;
        let resolved = self.resolve_named_type(doc.fragment_definition_type_name(r), doc[r].position);
        let Some(pushed) = self.push_type(resolved) else {
            return;
        };
        if self.enter(|v, ctx| v.enter_fragment_definition(ctx, r)) != Flow::Continue {
            self.pop_type(pushed);
            return;
        }
        self.ctx.ancestors.push(Node::FragmentDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        if self.ctx.stopped {
            return;
        }
        let selection_set = self.ctx.operation[r].selection_set;
        self.walk_selection_set(selection_set);
        self.ctx.ancestors.pop();
        self.pop_type(pushed);
        self.leave(|v, ctx| v.leave_fragment_definition(ctx, r));
    }

    fn walk_selection_set(&mut self, set: SelectionSetRef) {
        if self.enter(|v, ctx| v.enter_selection_set(ctx, set)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::SelectionSet(set));
        let mut snapshot: SmallVec<[SelectionRef; 8]> =
            SmallVec::from_slice(&self.ctx.operation[set].selections);
        let mut i = 0;
        while let Some(selection) = snapshot.get(i).copied() {
            self.ctx.selections.push((set, selection));
            self.walk_selection(selection);
            self.ctx.selections.pop();
            if self.ctx.stopped {
                return;
            }
            let current = self.ctx.operation[set].selections.as_slice();
            if current != snapshot.as_slice() {
                snapshot = SmallVec::from_slice(current);
                i = 0;
                continue;
            }
            i += 1;
        }
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_selection_set(ctx, set));
    }

    fn walk_selection(&mut self, selection: SelectionRef) {
        let selection = self.ctx.operation[selection];
        match selection {
            Selection::Field(r) => self.walk_field(r),
            Selection::FragmentSpread(r) => self.walk_fragment_spread(r),
            Selection::InlineFragment(r) => self.walk_inline_fragment(r),
        }
    }

    fn walk_field(&mut self, r: FieldRef) {
        if self.enter(|v, ctx| v.enter_field(ctx, r)) != Flow::Continue {
            return;
        }
        let resolved = self.resolve_field_type(r);
        let Some(pushed) = self.push_type(resolved) else {
            return;
        };
        self.ctx.ancestors.push(Node::Field(r));
        self.walk_list(move |doc| doc[r].arguments.as_slice(), Self::walk_argument);
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        if self.ctx.stopped {
            return;
        }
        if let Some(selection_set) = self.ctx.operation[r].selection_set {
            self.walk_selection_set(selection_set);
        }
        self.ctx.ancestors.pop();
        self.pop_type(pushed);
        self.leave(|v, ctx| v.leave_field(ctx, r));
    }

    fn walk_argument(&mut self, r: ArgumentRef) {
        if self.enter(|v, ctx| v.enter_argument(ctx, r)) != Flow::Continue {
            return;
        }
        self.leave(|v, ctx| v.leave_argument(ctx, r));
    }

    fn walk_directive(&mut self, r: DirectiveRef) {
        if self.enter(|v, ctx| v.enter_directive(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::Directive(r));
        self.walk_list(move |doc| doc[r].arguments.as_slice(), Self::walk_argument);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_directive(ctx, r));
    }

    fn walk_fragment_spread(&mut self, r: FragmentSpreadRef) {
        if self.enter(|v, ctx| v.enter_fragment_spread(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::FragmentSpread(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_fragment_spread(ctx, r));
    }

    fn walk_inline_fragment(&mut self, r: InlineFragmentRef) {
        if self.enter(|v, ctx| v.enter_inline_fragment(ctx, r)) != Flow::Continue {
            return;
        }
        let doc = &*self.ctx.operation;
        let resolved = match doc.inline_fragment_type_condition_name(r) {
            Some(name) => self.resolve_named_type(name, doc[r].position),
            // `... @include(if: $x) { … }` keeps the enclosing type.
            None => Ok(self.ctx.definition.and(self.ctx.enclosing_type_definition())),
        };
        let Some(pushed) = self.push_type(resolved) else {
            return;
        };
        self.ctx.ancestors.push(Node::InlineFragment(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        if self.ctx.stopped {
            return;
        }
        let selection_set = self.ctx.operation[r].selection_set;
        self.walk_selection_set(selection_set);
        self.ctx.ancestors.pop();
        self.pop_type(pushed);
        self.leave(|v, ctx| v.leave_inline_fragment(ctx, r));
    }

    // ---------------------------------------------------------------------
    // Type-system definitions
    //
    // These nodes only go onto the ancestor stack: the enclosing-type stack
    // always refers to the definition Document, not the walked one.
    // ---------------------------------------------------------------------

    fn walk_schema_definition(&mut self, r: SchemaDefinitionRef) {
        if self.enter(|v, ctx| v.enter_schema_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::SchemaDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.walk_list(
            move |doc| doc[r].root_operation_types.as_slice(),
            Self::walk_root_operation_type_definition,
        );
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_schema_definition(ctx, r));
    }

    fn walk_root_operation_type_definition(&mut self, r: RootOperationTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_root_operation_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.leave(|v, ctx| v.leave_root_operation_type_definition(ctx, r));
    }

    fn walk_object_type_definition(&mut self, r: ObjectTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_object_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::ObjectTypeDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].fields.as_slice(), Self::walk_field_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_object_type_definition(ctx, r));
    }

    fn walk_object_type_extension(&mut self, r: ObjectTypeExtensionRef) {
        if self.enter(|v, ctx| v.enter_object_type_extension(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::ObjectTypeExtension(r));
        self.walk_list(move |doc| doc[r].definition.directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].definition.fields.as_slice(), Self::walk_field_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_object_type_extension(ctx, r));
    }

    fn walk_interface_type_definition(&mut self, r: InterfaceTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_interface_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::InterfaceTypeDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].fields.as_slice(), Self::walk_field_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_interface_type_definition(ctx, r));
    }

    fn walk_interface_type_extension(&mut self, r: InterfaceTypeExtensionRef) {
        if self.enter(|v, ctx| v.enter_interface_type_extension(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::InterfaceTypeExtension(r));
        self.walk_list(move |doc| doc[r].definition.directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].definition.fields.as_slice(), Self::walk_field_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_interface_type_extension(ctx, r));
    }

    fn walk_union_type_definition(&mut self, r: UnionTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_union_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::UnionTypeDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_union_type_definition(ctx, r));
    }

    fn walk_union_type_extension(&mut self, r: UnionTypeExtensionRef) {
        if self.enter(|v, ctx| v.enter_union_type_extension(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::UnionTypeExtension(r));
        self.walk_list(move |doc| doc[r].definition.directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_union_type_extension(ctx, r));
    }

    fn walk_enum_type_definition(&mut self, r: EnumTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_enum_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::EnumTypeDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].values.as_slice(), Self::walk_enum_value_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_enum_type_definition(ctx, r));
    }

    fn walk_enum_type_extension(&mut self, r: EnumTypeExtensionRef) {
        if self.enter(|v, ctx| v.enter_enum_type_extension(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::EnumTypeExtension(r));
        self.walk_list(move |doc| doc[r].definition.directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].definition.values.as_slice(), Self::walk_enum_value_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_enum_type_extension(ctx, r));
    }

    fn walk_enum_value_definition(&mut self, r: EnumValueDefinitionRef) {
        if self.enter(|v, ctx| v.enter_enum_value_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::EnumValueDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_enum_value_definition(ctx, r));
    }

    fn walk_input_object_type_definition(&mut self, r: InputObjectTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_input_object_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::InputObjectTypeDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].fields.as_slice(), Self::walk_input_value_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_input_object_type_definition(ctx, r));
    }

    fn walk_input_object_type_extension(&mut self, r: InputObjectTypeExtensionRef) {
        if self.enter(|v, ctx| v.enter_input_object_type_extension(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::InputObjectTypeExtension(r));
        self.walk_list(move |doc| doc[r].definition.directives.as_slice(), Self::walk_directive);
        self.walk_list(move |doc| doc[r].definition.fields.as_slice(), Self::walk_input_value_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_input_object_type_extension(ctx, r));
    }

    fn walk_scalar_type_definition(&mut self, r: ScalarTypeDefinitionRef) {
        if self.enter(|v, ctx| v.enter_scalar_type_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::ScalarTypeDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_scalar_type_definition(ctx, r));
    }

    fn walk_scalar_type_extension(&mut self, r: ScalarTypeExtensionRef) {
        if self.enter(|v, ctx| v.enter_scalar_type_extension(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::ScalarTypeExtension(r));
        self.walk_list(move |doc| doc[r].definition.directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_scalar_type_extension(ctx, r));
    }

    fn walk_field_definition(&mut self, r: FieldDefinitionRef) {
        if self.enter(|v, ctx| v.enter_field_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::FieldDefinition(r));
        self.walk_list(move |doc| doc[r].arguments.as_slice(), Self::walk_input_value_definition);
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_field_definition(ctx, r));
    }

    fn walk_input_value_definition(&mut self, r: InputValueDefinitionRef) {
        if self.enter(|v, ctx| v.enter_input_value_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::InputValueDefinition(r));
        self.walk_list(move |doc| doc[r].directives.as_slice(), Self::walk_directive);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_input_value_definition(ctx, r));
    }

    fn walk_directive_definition(&mut self, r: DirectiveDefinitionRef) {
        if self.enter(|v, ctx| v.enter_directive_definition(ctx, r)) != Flow::Continue {
            return;
        }
        self.ctx.ancestors.push(Node::DirectiveDefinition(r));
        self.walk_list(move |doc| doc[r].arguments.as_slice(), Self::walk_input_value_definition);
        self.ctx.ancestors.pop();
        self.leave(|v, ctx| v.leave_directive_definition(ctx, r));
    }
}
