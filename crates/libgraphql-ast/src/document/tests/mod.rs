mod lookups_tests;

use crate::Document;
use crate::refs::FieldRef;
use crate::refs::SelectionSetRef;

/// Selection set of the first operation in `doc`.
fn operation_selection_set(doc: &Document) -> SelectionSetRef {
    let operation = doc.operation_definition_refs().next().unwrap();
    doc[operation].selection_set
}

/// The field selections of `set`, in order.
fn fields_of(doc: &Document, set: SelectionSetRef) -> Vec<FieldRef> {
    doc[set]
        .selections
        .iter()
        .filter_map(|selection| doc.selection_field(*selection))
        .collect()
}
