use crate::operation::SelectionSet;
use crate::Value;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) name: String,
    pub(super) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    pub(crate) fn typename() -> Self {
        Self {
            arguments: IndexMap::new(),
            name: "__typename".to_string(),
            selection_set: None,
        }
    }

    /// Argument literals, in the order the schema declares the arguments.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// `None` for scalar and enum fields.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
