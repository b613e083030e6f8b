mod field_selection;
mod generated_document;
mod generated_operations;
mod inline_fragment_selection;
mod operation_generator;
mod operation_kind;
mod selection;
mod selection_set;
mod selection_set_builder;

pub use field_selection::FieldSelection;
pub use generated_document::GeneratedDocument;
pub use generated_operations::GeneratedOperations;
pub use generated_operations::GenerationFailure;
pub use inline_fragment_selection::InlineFragmentSelection;
pub use operation_generator::GeneratorConfig;
pub use operation_generator::OperationGenerator;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_builder::DEFAULT_MAX_DEPTH;
pub use selection_set_builder::SelectionSetBuilder;

#[cfg(test)]
mod tests;
