use crate::Visitor;
use crate::WalkContext;
use crate::Walker;
use libgraphql_ast::Report;
use libgraphql_ast::Selection;
use libgraphql_ast::parse_definition;
use libgraphql_ast::parse_operation;
use libgraphql_ast::refs::*;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Recorder {
    fn record(&mut self, event: impl Into<String>) {
        self.events.push(event.into());
    }
}

impl Visitor for Recorder {
    fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.record("enter document");
    }

    fn leave_document(&mut self, _ctx: &mut WalkContext<'_>) {
        self.record("leave document");
    }

    fn enter_operation_definition(&mut self, ctx: &mut WalkContext<'_>, node: OperationDefinitionRef) {
        self.record(format!("enter operation {}", ctx.operation.operation_definition_name(node)));
    }

    fn leave_operation_definition(&mut self, ctx: &mut WalkContext<'_>, node: OperationDefinitionRef) {
        self.record(format!("leave operation {}", ctx.operation.operation_definition_name(node)));
    }

    fn enter_variable_definition(&mut self, ctx: &mut WalkContext<'_>, node: VariableDefinitionRef) {
        self.record(format!("enter variable {}", ctx.operation.variable_definition_name(node)));
    }

    fn leave_variable_definition(&mut self, ctx: &mut WalkContext<'_>, node: VariableDefinitionRef) {
        self.record(format!("leave variable {}", ctx.operation.variable_definition_name(node)));
    }

    fn enter_fragment_definition(&mut self, ctx: &mut WalkContext<'_>, node: FragmentDefinitionRef) {
        self.record(format!("enter fragment {}", ctx.operation.fragment_definition_name(node)));
    }

    fn leave_fragment_definition(&mut self, ctx: &mut WalkContext<'_>, node: FragmentDefinitionRef) {
        self.record(format!("leave fragment {}", ctx.operation.fragment_definition_name(node)));
    }

    fn enter_selection_set(&mut self, _ctx: &mut WalkContext<'_>, _node: SelectionSetRef) {
        self.record("enter selection set");
    }

    fn leave_selection_set(&mut self, _ctx: &mut WalkContext<'_>, _node: SelectionSetRef) {
        self.record("leave selection set");
    }

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        self.record(format!("enter field {}", ctx.operation.field_name(node)));
    }

    fn leave_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        self.record(format!("leave field {}", ctx.operation.field_name(node)));
    }

    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        self.record(format!("enter argument {}", ctx.operation.argument_name(node)));
    }

    fn leave_argument(&mut self, ctx: &mut WalkContext<'_>, node: ArgumentRef) {
        self.record(format!("leave argument {}", ctx.operation.argument_name(node)));
    }

    fn enter_directive(&mut self, ctx: &mut WalkContext<'_>, node: DirectiveRef) {
        self.record(format!("enter directive {}", ctx.operation.directive_name(node)));
    }

    fn leave_directive(&mut self, ctx: &mut WalkContext<'_>, node: DirectiveRef) {
        self.record(format!("leave directive {}", ctx.operation.directive_name(node)));
    }

    fn enter_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, node: FragmentSpreadRef) {
        self.record(format!("enter spread {}", ctx.operation.fragment_spread_name(node)));
    }

    fn leave_fragment_spread(&mut self, ctx: &mut WalkContext<'_>, node: FragmentSpreadRef) {
        self.record(format!("leave spread {}", ctx.operation.fragment_spread_name(node)));
    }

    fn enter_inline_fragment(&mut self, ctx: &mut WalkContext<'_>, node: InlineFragmentRef) {
        let condition = ctx.operation.inline_fragment_type_condition_name(node).unwrap_or("-");
        self.record(format!("enter inline fragment {condition}"));
    }

    fn leave_inline_fragment(&mut self, ctx: &mut WalkContext<'_>, node: InlineFragmentRef) {
        let condition = ctx.operation.inline_fragment_type_condition_name(node).unwrap_or("-");
        self.record(format!("leave inline fragment {condition}"));
    }

    fn enter_object_type_definition(&mut self, ctx: &mut WalkContext<'_>, node: ObjectTypeDefinitionRef) {
        let name = ctx.operation[node].name;
        self.record(format!("enter object {}", ctx.operation.str(name)));
    }

    fn leave_object_type_definition(&mut self, ctx: &mut WalkContext<'_>, node: ObjectTypeDefinitionRef) {
        let name = ctx.operation[node].name;
        self.record(format!("leave object {}", ctx.operation.str(name)));
    }

    fn enter_object_type_extension(&mut self, ctx: &mut WalkContext<'_>, node: ObjectTypeExtensionRef) {
        let name = ctx.operation[node].definition.name;
        self.record(format!("enter object extension {}", ctx.operation.str(name)));
    }

    fn enter_field_definition(&mut self, ctx: &mut WalkContext<'_>, node: FieldDefinitionRef) {
        let name = ctx.operation[node].name;
        self.record(format!("enter field definition {}", ctx.operation.str(name)));
    }

    fn enter_input_value_definition(&mut self, ctx: &mut WalkContext<'_>, node: InputValueDefinitionRef) {
        let name = ctx.operation[node].name;
        self.record(format!("enter input value {}", ctx.operation.str(name)));
    }

    fn enter_enum_value_definition(&mut self, ctx: &mut WalkContext<'_>, node: EnumValueDefinitionRef) {
        let name = ctx.operation[node].name;
        self.record(format!("enter enum value {}", ctx.operation.str(name)));
    }

    fn enter_directive_definition(&mut self, ctx: &mut WalkContext<'_>, node: DirectiveDefinitionRef) {
        let name = ctx.operation[node].name;
        self.record(format!("enter directive definition {}", ctx.operation.str(name)));
    }
}

fn field_events(events: &[String]) -> Vec<&str> {
    events
        .iter()
        .filter(|event| event.starts_with("enter field "))
        .map(String::as_str)
        .collect()
}

/// Verifies that executable documents are walked depth first, with every
/// leave hook after the node's children.
#[test]
fn walks_operations_depth_first() {
    let mut operation = parse_operation(
        "query Q($v: Int) @d { dog(a: 1) { name } ...F } fragment F on Dog { barkVolume }",
    )
    .unwrap();
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut recorder)
        .walk(&mut operation, None, &mut report);

    assert!(!report.has_errors());
    assert_eq!(
        recorder.events,
        vec![
            "enter document",
            "enter operation Q",
            "enter variable v",
            "leave variable v",
            "enter directive d",
            "leave directive d",
            "enter selection set",
            "enter field dog",
            "enter argument a",
            "leave argument a",
            "enter selection set",
            "enter field name",
            "leave field name",
            "leave selection set",
            "leave field dog",
            "enter spread F",
            "leave spread F",
            "leave selection set",
            "leave operation Q",
            "enter fragment F",
            "enter selection set",
            "enter field barkVolume",
            "leave field barkVolume",
            "leave selection set",
            "leave fragment F",
            "leave document",
        ],
    );
}

#[test]
fn walks_type_system_definitions() {
    let mut schema = parse_definition(
        r#"
        type Dog { name(short: Boolean): String }
        extend type Dog { age: Int }
        enum Size { SMALL LARGE }
        directive @loud(level: Int) on FIELD
        "#,
    )
    .unwrap();
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut recorder)
        .walk(&mut schema, None, &mut report);

    assert_eq!(
        recorder.events,
        vec![
            "enter document",
            "enter object Dog",
            "enter field definition name",
            "enter input value short",
            "leave object Dog",
            "enter object extension Dog",
            "enter field definition age",
            "enter enum value SMALL",
            "enter enum value LARGE",
            "enter directive definition loud",
            "enter input value level",
            "leave document",
        ],
    );
}

#[test]
fn visitors_run_in_registration_order() {
    let mut operation = parse_operation("{ a }").unwrap();
    let mut first = Recorder::default();
    let mut second = Recorder::default();
    let mut report = Report::default();

    struct Tagged<'r> {
        tag: &'static str,
        log: &'r std::cell::RefCell<Vec<String>>,
    }
    impl Visitor for Tagged<'_> {
        fn enter_field(&mut self, _ctx: &mut WalkContext<'_>, _node: FieldRef) {
            self.log.borrow_mut().push(format!("enter {}", self.tag));
        }

        fn leave_field(&mut self, _ctx: &mut WalkContext<'_>, _node: FieldRef) {
            self.log.borrow_mut().push(format!("leave {}", self.tag));
        }
    }

    let log = std::cell::RefCell::new(vec![]);
    Walker::new()
        .register_visitor(&mut first)
        .register_visitor(Tagged { tag: "one", log: &log })
        .register_visitor(Tagged { tag: "two", log: &log })
        .register_visitor(&mut second)
        .walk(&mut operation, None, &mut report);

    assert_eq!(log.into_inner(), vec!["enter one", "enter two", "leave one", "leave two"]);
    assert_eq!(first.events, second.events);
}

struct SkipField(&'static str);

impl Visitor for SkipField {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        if ctx.operation.field_name(node) == self.0 {
            ctx.skip_node();
        }
    }
}

/// Verifies that skipping a node leaves out its children and its leave
/// hooks, but not its siblings.
#[test]
fn skip_node_skips_children_and_leave_hooks() {
    let mut operation = parse_operation("{ dog { name } cat { name } }").unwrap();
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(SkipField("dog"))
        .register_visitor(&mut recorder)
        .walk(&mut operation, None, &mut report);

    assert!(!recorder.events.iter().any(|event| event == "leave field dog"));
    assert!(!recorder.events.iter().any(|event| event == "enter field dog"));
    assert_eq!(
        field_events(&recorder.events),
        vec!["enter field cat", "enter field name"],
    );
    assert!(recorder.events.iter().any(|event| event == "leave document"));
}

struct StopAt(&'static str);

impl Visitor for StopAt {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        if ctx.operation.field_name(node) == self.0 {
            ctx.stop();
        }
    }
}

#[test]
fn stop_aborts_the_whole_walk() {
    let mut operation = parse_operation("{ a b c }").unwrap();
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut recorder)
        .register_visitor(StopAt("b"))
        .walk(&mut operation, None, &mut report);

    assert_eq!(field_events(&recorder.events), vec!["enter field a", "enter field b"]);
    assert!(!recorder.events.iter().any(|event| event == "leave field b"));
    assert!(!recorder.events.iter().any(|event| event == "leave document"));
    // A plain stop carries no error.
    assert!(!report.has_errors());
}

#[derive(Default)]
struct RevisitOnce {
    calls: usize,
}

impl Visitor for RevisitOnce {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, _node: FieldRef) {
        self.calls += 1;
        if self.calls == 1 {
            ctx.revisit_node();
        }
    }
}

/// Verifies that revisiting re-runs the hooks of the current node from the
/// first registered visitor.
#[test]
fn revisit_restarts_the_hook_list() {
    let mut operation = parse_operation("{ a }").unwrap();
    let mut recorder = Recorder::default();
    let mut revisit = RevisitOnce::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut recorder)
        .register_visitor(&mut revisit)
        .walk(&mut operation, None, &mut report);

    assert_eq!(revisit.calls, 2);
    assert_eq!(field_events(&recorder.events), vec!["enter field a", "enter field a"]);
}

/// Removes the selection named `remove` from the current selection set
/// when entering the field named `trigger`.
struct RemoveSibling {
    trigger: &'static str,
    remove: &'static str,
}

impl Visitor for RemoveSibling {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        if ctx.operation.field_name(node) != self.trigger {
            return;
        }
        let Some((set, _)) = ctx.current_selection() else {
            return;
        };
        let doomed = ctx.operation[set].selections.iter().copied().find(|selection| {
            ctx.operation
                .selection_field(*selection)
                .is_some_and(|field| ctx.operation.field_name(field) == self.remove)
        });
        if let Some(doomed) = doomed {
            ctx.operation.remove_from_selection_set(set, doomed);
        }
    }
}

/// Verifies that a selection set whose selection list changed mid-walk is
/// walked again from its first selection.
#[test]
fn mutated_selection_set_is_rewalked_from_the_top() {
    let mut operation = parse_operation("{ a b c }").unwrap();
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut recorder)
        .register_visitor(RemoveSibling { trigger: "b", remove: "a" })
        .walk(&mut operation, None, &mut report);

    assert_eq!(
        field_events(&recorder.events),
        vec!["enter field a", "enter field b", "enter field b", "enter field c"],
    );
}

#[derive(Default)]
struct AppendOnce {
    appended: bool,
}

impl Visitor for AppendOnce {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, _node: FieldRef) {
        if self.appended {
            return;
        }
        let Some((set, _)) = ctx.current_selection() else {
            return;
        };
        let added = ctx.operation.add_field_selection(None, "z");
        ctx.operation[set].selections.push(added);
        self.appended = true;
    }
}

#[test]
fn selections_appended_mid_walk_are_visited() {
    let mut operation = parse_operation("{ a b }").unwrap();
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(AppendOnce::default())
        .register_visitor(&mut recorder)
        .walk(&mut operation, None, &mut report);

    assert_eq!(
        field_events(&recorder.events),
        vec!["enter field a", "enter field a", "enter field b", "enter field z"],
    );
}

#[test]
fn deleted_root_nodes_are_not_walked() {
    let mut operation = parse_operation("query A { a } query B { b }").unwrap();
    let first = operation.root_nodes[0];
    operation.remove_root_node(first);
    let mut recorder = Recorder::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut recorder)
        .walk(&mut operation, None, &mut report);

    assert_eq!(field_events(&recorder.events), vec!["enter field b"]);
}

#[derive(Default)]
struct Siblings {
    seen: Vec<(String, Vec<String>, Vec<String>)>,
}

impl Visitor for Siblings {
    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, node: FieldRef) {
        let names = |selections: &[SelectionRef]| {
            selections
                .iter()
                .map(|selection| match ctx.operation[*selection] {
                    Selection::Field(field) => ctx.operation.field_name(field).to_owned(),
                    _ => "...".to_owned(),
                })
                .collect::<Vec<_>>()
        };
        self.seen.push((
            ctx.operation.field_name(node).to_owned(),
            names(ctx.selections_before()),
            names(ctx.selections_after()),
        ));
    }
}

#[test]
fn context_exposes_sibling_selections() {
    let mut operation = parse_operation("{ a b c }").unwrap();
    let mut siblings = Siblings::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut siblings)
        .walk(&mut operation, None, &mut report);

    let b = &siblings.seen[1];
    assert_eq!(b.0, "b");
    assert_eq!(b.1, vec!["a"]);
    assert_eq!(b.2, vec!["c"]);
    assert!(siblings.seen[0].1.is_empty());
    assert!(siblings.seen[2].2.is_empty());
}

#[derive(Default)]
struct Ancestry {
    argument_ancestors: Vec<&'static str>,
    argument_parent: Option<&'static str>,
    inside_directive: Vec<bool>,
    operations: Vec<Option<OperationDefinitionRef>>,
}

impl Visitor for Ancestry {
    fn enter_argument(&mut self, ctx: &mut WalkContext<'_>, _node: ArgumentRef) {
        if self.argument_parent.is_none() {
            self.argument_ancestors = ctx.ancestors().iter().map(|node| node.kind_name()).collect();
            self.argument_parent = ctx.parent().map(|node| node.kind_name());
        }
        self.inside_directive.push(ctx.is_inside_directive());
    }

    fn enter_field(&mut self, ctx: &mut WalkContext<'_>, _node: FieldRef) {
        self.operations.push(ctx.enclosing_operation());
    }
}

#[test]
fn ancestor_stack_tracks_enclosing_nodes() {
    let mut operation =
        parse_operation("query Q { dog { barkVolume(loud: true) @skip(if: false) } }").unwrap();
    let mut ancestry = Ancestry::default();
    let mut report = Report::default();
    Walker::new()
        .register_visitor(&mut ancestry)
        .walk(&mut operation, None, &mut report);

    assert_eq!(
        ancestry.argument_ancestors,
        vec!["OperationDefinition", "SelectionSet", "Field", "SelectionSet", "Field"],
    );
    assert_eq!(ancestry.argument_parent, Some("Field"));
    assert_eq!(ancestry.inside_directive, vec![false, true]);
    let q = operation.operation_definition_refs().next();
    assert_eq!(ancestry.operations, vec![q, q]);
}
