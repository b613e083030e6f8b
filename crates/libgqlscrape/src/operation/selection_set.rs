use crate::operation::FieldSelection;
use crate::operation::Selection;

/// An ordered, never-empty list of [`Selection`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    /// Wrap `selections`, falling back to `{ __typename }` when nothing could
    /// be selected so the enclosing document stays valid.
    pub(super) fn from_selections(selections: Vec<Selection>) -> Self {
        if selections.is_empty() {
            Self::typename_only()
        } else {
            Self { selections }
        }
    }

    pub(super) fn typename_only() -> Self {
        Self {
            selections: vec![Selection::Field(FieldSelection::typename())],
        }
    }

    /// Number of nested selection-set levels, this one included. Inline
    /// fragments do not add a level: they select on the same object.
    pub fn depth(&self) -> usize {
        1 + self.nested_depth()
    }

    fn nested_depth(&self) -> usize {
        self.selections.iter()
            .map(|selection| match selection {
                Selection::Field(field) =>
                    field.selection_set().map_or(0, SelectionSet::depth),
                Selection::InlineFragment(fragment) =>
                    fragment.selection_set().nested_depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Indicates if this set is the `{ __typename }` placeholder selection.
    pub fn is_typename_only(&self) -> bool {
        matches!(
            self.selections.as_slice(),
            [Selection::Field(field)] if field.name() == "__typename",
        )
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }
}
