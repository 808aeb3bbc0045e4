use crate::WalkContext;
use libgraphql_ast::refs::*;

macro_rules! define_visitor {
    ($(
        $(#[$meta:meta])*
        $enter:ident / $leave:ident: $node_ref:ty;
    )*) => {
        /// Callbacks a [`Walker`](crate::Walker) invokes while traversing a
        /// Document.
        ///
        /// Every node kind has an `enter_*`/`leave_*` pair, all defaulting to
        /// no-ops, so a pass only implements the hooks it cares about. Hooks
        /// receive the [`WalkContext`], through which they read and mutate
        /// the Document and steer the traversal (skip, revisit, stop).
        pub trait Visitor {
            /// Called once before the first root node.
            fn enter_document(&mut self, _ctx: &mut WalkContext<'_>) {}

            /// Called once after the last root node, unless the walk stopped.
            fn leave_document(&mut self, _ctx: &mut WalkContext<'_>) {}

            $(
                $(#[$meta])*
                fn $enter(&mut self, _ctx: &mut WalkContext<'_>, _node: $node_ref) {}

                fn $leave(&mut self, _ctx: &mut WalkContext<'_>, _node: $node_ref) {}
            )*
        }

        /// Lets a caller register a borrowed pass and read its state back
        /// once the Walker is dropped.
        impl<V: Visitor + ?Sized> Visitor for &mut V {
            fn enter_document(&mut self, ctx: &mut WalkContext<'_>) {
                (**self).enter_document(ctx)
            }

            fn leave_document(&mut self, ctx: &mut WalkContext<'_>) {
                (**self).leave_document(ctx)
            }

            $(
                fn $enter(&mut self, ctx: &mut WalkContext<'_>, node: $node_ref) {
                    (**self).$enter(ctx, node)
                }

                fn $leave(&mut self, ctx: &mut WalkContext<'_>, node: $node_ref) {
                    (**self).$leave(ctx, node)
                }
            )*
        }
    };
}

define_visitor! {
    enter_operation_definition / leave_operation_definition: OperationDefinitionRef;
    enter_variable_definition / leave_variable_definition: VariableDefinitionRef;
    enter_fragment_definition / leave_fragment_definition: FragmentDefinitionRef;
    enter_selection_set / leave_selection_set: SelectionSetRef;
    /// The enclosing type while this hook runs is the type the field is
    /// selected on; its own type is in scope for its arguments and children.
    enter_field / leave_field: FieldRef;
    /// Arguments of fields and of directives. Arguments are not pushed onto
    /// the ancestor stack: the parent is the field or the directive.
    enter_argument / leave_argument: ArgumentRef;
    enter_directive / leave_directive: DirectiveRef;
    enter_fragment_spread / leave_fragment_spread: FragmentSpreadRef;
    enter_inline_fragment / leave_inline_fragment: InlineFragmentRef;

    enter_schema_definition / leave_schema_definition: SchemaDefinitionRef;
    enter_root_operation_type_definition / leave_root_operation_type_definition: RootOperationTypeDefinitionRef;
    enter_object_type_definition / leave_object_type_definition: ObjectTypeDefinitionRef;
    enter_object_type_extension / leave_object_type_extension: ObjectTypeExtensionRef;
    enter_interface_type_definition / leave_interface_type_definition: InterfaceTypeDefinitionRef;
    enter_interface_type_extension / leave_interface_type_extension: InterfaceTypeExtensionRef;
    enter_union_type_definition / leave_union_type_definition: UnionTypeDefinitionRef;
    enter_union_type_extension / leave_union_type_extension: UnionTypeExtensionRef;
    enter_enum_type_definition / leave_enum_type_definition: EnumTypeDefinitionRef;
    enter_enum_type_extension / leave_enum_type_extension: EnumTypeExtensionRef;
    enter_enum_value_definition / leave_enum_value_definition: EnumValueDefinitionRef;
    enter_input_object_type_definition / leave_input_object_type_definition: InputObjectTypeDefinitionRef;
    enter_input_object_type_extension / leave_input_object_type_extension: InputObjectTypeExtensionRef;
    enter_scalar_type_definition / leave_scalar_type_definition: ScalarTypeDefinitionRef;
    enter_scalar_type_extension / leave_scalar_type_extension: ScalarTypeExtensionRef;
    enter_field_definition / leave_field_definition: FieldDefinitionRef;
    /// Argument definitions of fields and directives, and input object
    /// fields.
    enter_input_value_definition / leave_input_value_definition: InputValueDefinitionRef;
    enter_directive_definition / leave_directive_definition: DirectiveDefinitionRef;
}
