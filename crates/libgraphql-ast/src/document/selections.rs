use crate::Document;
use crate::document::Selection;
use crate::refs::*;

fn split_around<T: Copy + PartialEq + std::fmt::Debug>(refs: &[T], target: T) -> (&[T], &[T]) {
    debug_assert!(
        refs.iter().filter(|r| **r == target).count() <= 1,
        "{target:?} appears more than once in its parent list",
    );
    match refs.iter().position(|r| *r == target) {
        Some(position) => (&refs[..position], &refs[position + 1..]),
        None => (&[], &[]),
    }
}

impl Document {
    /// Position of the selection that wraps `selection` (a field, spread or
    /// inline fragment) in `set`.
    pub fn selection_ref_in_set(
        &self,
        set: SelectionSetRef,
        selection: Selection,
    ) -> Option<SelectionRef> {
        self[set]
            .selections
            .iter()
            .find(|r| self[**r] == selection)
            .copied()
    }

    /// Selections preceding `selection` in `set`. A ref is expected to
    /// appear at most once per set; debug builds assert it.
    pub fn selections_before(&self, set: SelectionSetRef, selection: SelectionRef) -> &[SelectionRef] {
        split_around(&self[set].selections, selection).0
    }

    pub fn selections_after(&self, set: SelectionSetRef, selection: SelectionRef) -> &[SelectionRef] {
        split_around(&self[set].selections, selection).1
    }

    pub fn arguments_before(&self, field: FieldRef, argument: ArgumentRef) -> &[ArgumentRef] {
        split_around(&self[field].arguments, argument).0
    }

    pub fn arguments_after(&self, field: FieldRef, argument: ArgumentRef) -> &[ArgumentRef] {
        split_around(&self[field].arguments, argument).1
    }

    /// Replaces `replace` in `set` with every selection of `with`, in order.
    /// Returns `false` (and changes nothing) if `replace` is not in `set`.
    pub fn replace_selection_on_selection_set(
        &mut self,
        set: SelectionSetRef,
        replace: SelectionRef,
        with: SelectionSetRef,
    ) -> bool {
        let replacement = self[with].selections.clone();
        let selections = &mut self[set].selections;
        match selections.iter().position(|r| *r == replace) {
            Some(position) => {
                let _removed = selections.splice(position..=position, replacement);
                true
            },
            None => false,
        }
    }

    /// Swaps `replace` for `with` in place.
    pub fn replace_selection(
        &mut self,
        set: SelectionSetRef,
        replace: SelectionRef,
        with: SelectionRef,
    ) -> bool {
        match self[set].selections.iter_mut().find(|r| **r == replace) {
            Some(slot) => {
                *slot = with;
                true
            },
            None => false,
        }
    }

    pub fn remove_from_selection_set(&mut self, set: SelectionSetRef, selection: SelectionRef) -> bool {
        let selections = &mut self[set].selections;
        match selections.iter().position(|r| *r == selection) {
            Some(position) => {
                selections.remove(position);
                true
            },
            None => false,
        }
    }

    /// Moves every selection of `source` to the end of `target`. `source`
    /// is left empty.
    pub fn append_selection_set(&mut self, target: SelectionSetRef, source: SelectionSetRef) {
        let moved = std::mem::take(&mut self[source].selections);
        self[target].selections.extend(moved);
    }

    pub fn selection_set_has_field_selection_with_name_or_alias(
        &self,
        set: SelectionSetRef,
        name_or_alias: &str,
    ) -> bool {
        self[set].selections.iter().any(|r| match self[*r] {
            Selection::Field(field) => {
                self.field_name(field) == name_or_alias
                    || self.field_alias(field) == Some(name_or_alias)
            },
            _ => false,
        })
    }

    pub fn selection_set_is_empty(&self, set: SelectionSetRef) -> bool {
        self[set].selections.is_empty()
    }
}
