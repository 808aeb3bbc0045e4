use libgraphql_ast::Document;
use libgraphql_ast::ExternalError;
use libgraphql_ast::InternalError;
use libgraphql_ast::Node;
use libgraphql_ast::Report;
use libgraphql_ast::refs::*;
use smallvec::SmallVec;

/// What the most recent hook asked the Walker to do next.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Control {
    #[default]
    Continue,
    Skip,
    Revisit,
    Stop,
}

/// The state a [`Visitor`](crate::Visitor) hook sees: the Document being
/// walked, the optional schema giving it type context, the report errors go
/// to, and the Walker's position in the tree.
pub struct WalkContext<'a> {
    /// The Document being walked. Hooks may mutate it freely; the Walker
    /// re-reads every list it iterates.
    pub operation: &'a mut Document,
    /// The schema resolving type names, when walking an operation against
    /// one.
    pub definition: Option<&'a Document>,
    pub report: &'a mut Report,

    pub(crate) ancestors: SmallVec<[Node; 16]>,
    pub(crate) type_definitions: SmallVec<[Node; 16]>,
    pub(crate) selections: SmallVec<[(SelectionSetRef, SelectionRef); 16]>,
    pub(crate) control: Control,
    pub(crate) stopped: bool,
}

impl<'a> WalkContext<'a> {
    pub(crate) fn new(
        operation: &'a mut Document,
        definition: Option<&'a Document>,
        report: &'a mut Report,
    ) -> Self {
        Self {
            operation,
            definition,
            report,
            ancestors: SmallVec::new(),
            type_definitions: SmallVec::new(),
            selections: SmallVec::new(),
            control: Control::Continue,
            stopped: false,
        }
    }

    /// Nodes enclosing the current one, outermost first. The current node
    /// itself is pushed only after its enter hooks ran.
    pub fn ancestors(&self) -> &[Node] {
        &self.ancestors
    }

    pub fn parent(&self) -> Option<Node> {
        self.ancestors.last().copied()
    }

    /// The schema type in scope: the root operation type, a fragment's type
    /// condition or the type of the enclosing field. Always `None` without a
    /// definition Document.
    pub fn enclosing_type_definition(&self) -> Option<Node> {
        self.type_definitions.last().copied()
    }

    /// The whole enclosing-type stack, outermost first.
    pub fn type_definitions(&self) -> &[Node] {
        &self.type_definitions
    }

    /// The operation the walk is currently inside of, if any.
    pub fn enclosing_operation(&self) -> Option<OperationDefinitionRef> {
        self.ancestors.iter().find_map(|node| match node {
            Node::OperationDefinition(r) => Some(*r),
            _ => None,
        })
    }

    pub fn is_inside_directive(&self) -> bool {
        self.ancestors
            .iter()
            .any(|node| matches!(node, Node::Directive(_)))
    }

    /// The selection being walked and the set it sits in.
    pub fn current_selection(&self) -> Option<(SelectionSetRef, SelectionRef)> {
        self.selections.last().copied()
    }

    /// Siblings preceding the current selection.
    pub fn selections_before(&self) -> &[SelectionRef] {
        match self.current_selection() {
            Some((set, selection)) => self.operation.selections_before(set, selection),
            None => &[],
        }
    }

    /// Siblings following the current selection.
    pub fn selections_after(&self) -> &[SelectionRef] {
        match self.current_selection() {
            Some((set, selection)) => self.operation.selections_after(set, selection),
            None => &[],
        }
    }

    /// Field definition of `field` on the enclosing type. Only meaningful
    /// during `enter_field`/`leave_field`, while the enclosing type is the one
    /// the field is selected on.
    pub fn field_definition(&self, field: FieldRef) -> Option<FieldDefinitionRef> {
        let definition = self.definition?;
        definition.node_field_definition_by_name(
            self.enclosing_type_definition()?,
            self.operation.field_name(field),
        )
    }

    /// Schema definition of an argument of the current field or directive.
    pub fn argument_input_value_definition(
        &self,
        argument: ArgumentRef,
    ) -> Option<InputValueDefinitionRef> {
        let definition = self.definition?;
        let argument_name = self.operation.argument_name(argument);
        match self.parent()? {
            Node::Field(field) => {
                // The field's own type is on top; it is defined on the one
                // below.
                let enclosing = *self.type_definitions.iter().rev().nth(1)?;
                let field_definition = definition
                    .node_field_definition_by_name(enclosing, self.operation.field_name(field))?;
                definition.field_definition_argument_by_name(field_definition, argument_name)
            },
            Node::Directive(directive) => {
                let directive_definition =
                    definition.directive_definition_by_name(self.operation.directive_name(directive))?;
                definition.input_value_definition_by_name(
                    &definition[directive_definition].arguments,
                    argument_name,
                )
            },
            _ => None,
        }
    }

    /// Aborts the whole walk after the current hook returns.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.control = Control::Stop;
    }

    pub fn stop_with_external_err(&mut self, error: ExternalError) {
        self.report.add_external_error(error);
        self.stop();
    }

    pub fn stop_with_internal_err(&mut self, error: InternalError) {
        self.report.add_internal_error(error);
        self.stop();
    }

    /// Leaves the children of the current node (and its leave hooks) out.
    /// Only honored by enter hooks.
    pub fn skip_node(&mut self) {
        if !self.stopped {
            self.control = Control::Skip;
        }
    }

    /// Runs the hooks of the current node again, from the first registered
    /// visitor. Meant for hooks that just restructured the node.
    pub fn revisit_node(&mut self) {
        if !self.stopped {
            self.control = Control::Revisit;
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
