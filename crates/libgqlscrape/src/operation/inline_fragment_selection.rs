use crate::operation::SelectionSet;

/// An `... on Type { ... }` selection on an interface- or union-typed field.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection {
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl InlineFragmentSelection {
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Name of the concrete type this fragment applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
