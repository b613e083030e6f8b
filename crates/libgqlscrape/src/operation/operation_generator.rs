use crate::named_ref::DerefByNameError;
use crate::operation::DEFAULT_MAX_DEPTH;
use crate::operation::GeneratedDocument;
use crate::operation::GeneratedOperations;
use crate::operation::GenerationFailure;
use crate::operation::OperationKind;
use crate::operation::SelectionSetBuilder;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// How many selection sets may nest below a root field.
    pub max_depth: usize,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Generates one [`GeneratedDocument`] for every field of every root type of
/// a [`Schema`].
#[derive(Clone, Debug)]
pub struct OperationGenerator<'schema> {
    schema: &'schema Schema,
    selection_set_builder: SelectionSetBuilder<'schema>,
}
impl<'schema> OperationGenerator<'schema> {
    pub fn new(schema: &'schema Schema, config: &GeneratorConfig) -> Self {
        Self {
            schema,
            selection_set_builder: SelectionSetBuilder::new(schema, config.max_depth),
        }
    }

    /// Generate a document for every root field of the schema.
    ///
    /// A root field that cannot be generated (because something it reaches
    /// references an undefined type) is recorded in
    /// [`GeneratedOperations::failures()`]; generation of the other root
    /// fields carries on.
    pub fn generate(&self) -> GeneratedOperations {
        let mut operations = GeneratedOperations::default();
        for (operation_kind, root_type) in self.schema.root_types() {
            let mut generated = 0;
            for root_field in root_type.fields().values() {
                if root_field.is_introspection_field() {
                    continue;
                }

                match self.generate_root_field(operation_kind, root_type, root_field) {
                    Ok(document) => {
                        generated += 1;
                        match operation_kind {
                            OperationKind::Mutation => operations.mutations.push(document),
                            OperationKind::Query => operations.queries.push(document),
                            OperationKind::Subscription => operations.subscriptions.push(document),
                        }
                    },

                    Err(error) => {
                        log::warn!(
                            "Skipping {operation_kind} `{}`: {error}",
                            root_field.name(),
                        );
                        operations.failures.push(GenerationFailure {
                            error,
                            operation_kind,
                            root_field_name: root_field.name().to_string(),
                        });
                    },
                }
            }
            log::info!(
                "Generated {generated} {operation_kind} documents from `{}`.",
                root_type.name(),
            );
        }
        operations
    }

    /// Generate the document for a single root field of `root_type`.
    pub fn generate_root_field(
        &self,
        operation_kind: OperationKind,
        root_type: &'schema ObjectType,
        root_field: &'schema Field,
    ) -> Result<GeneratedDocument, DerefByNameError> {
        // Each root field starts a fresh walk with only the root type on the
        // path.
        let visiting = HashSet::from([root_type.name()]);
        Ok(GeneratedDocument {
            operation_kind,
            root_field: self.selection_set_builder.build_root_field_selection(
                root_field,
                &visiting,
            )?,
        })
    }
}
