use crate::named_ref::DerefByNameError;
use crate::operation::FieldSelection;
use crate::operation::InlineFragmentSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::ValueSynthesizer;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, DerefByNameError>;

/// Return types of the fields already selected by earlier sibling fragments,
/// keyed by response name.
type FragmentFieldTypes<'schema> = HashMap<&'schema str, &'schema TypeAnnotation>;

/// Default bound on how many selection sets may nest below a root field.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Builds the selection set for an output type by walking the type graph.
///
/// Two guards keep the walk finite on cyclic schemas:
///
/// * `visiting` holds the composite type names on the current path; a field
///   whose type is already on the path is left out.
/// * `depth` counts nested selection sets; a composite field that would nest
///   deeper than `max_depth` is left out.
///
/// Leaving a field out never fails the document: if nothing at all can be
/// selected on a type, its selection set is `{ __typename }`.
#[derive(Clone, Debug)]
pub struct SelectionSetBuilder<'schema> {
    max_depth: usize,
    schema: &'schema Schema,
    value_synthesizer: ValueSynthesizer<'schema>,
}
impl<'schema> SelectionSetBuilder<'schema> {
    /// `max_depth` is clamped to at least 1 so every root field returning a
    /// composite type still gets a selection set.
    pub fn new(schema: &'schema Schema, max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
            schema,
            value_synthesizer: ValueSynthesizer::new(schema),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the selection set for a value of type `type_annot`, sitting at
    /// nesting level `depth`. Returns `None` when the type is a leaf (scalar
    /// or enum) and takes no selection set.
    pub fn build(
        &self,
        type_annot: &TypeAnnotation,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<Option<SelectionSet>> {
        let type_ = type_annot.innermost_type(self.schema)?;
        if !type_.is_composite() {
            return Ok(None);
        }
        self.build_for_type(type_, visiting, depth).map(Some)
    }

    /// Build the selection of `field` within a selection set at nesting level
    /// `depth` (a root field's own selection set is level `1`). Returns `None`
    /// when the field has to be left out.
    pub fn build_field_selection(
        &self,
        field: &'schema Field,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<Option<FieldSelection>> {
        let return_type = field.type_annotation().innermost_type(self.schema)?;

        let selection_set =
            if return_type.is_leaf() {
                None
            } else if return_type.is_composite() {
                let type_name = return_type.name();
                if visiting.contains(type_name) {
                    log::debug!(
                        "Omitting `{}.{}`: `{type_name}` is already being selected \
                        on this path.",
                        field.parent_type_name(),
                        field.name(),
                    );
                    return Ok(None);
                }
                if depth + 1 > self.max_depth {
                    log::debug!(
                        "Omitting `{}.{}`: selecting it would nest deeper than {} \
                        levels.",
                        field.parent_type_name(),
                        field.name(),
                        self.max_depth,
                    );
                    return Ok(None);
                }

                let mut visiting = visiting.clone();
                visiting.insert(type_name);
                Some(self.build_for_type(return_type, &visiting, depth + 1)?)
            } else {
                log::warn!(
                    "Omitting `{}.{}`: input type `{}` used as a field's output type.",
                    field.parent_type_name(),
                    field.name(),
                    return_type.name(),
                );
                return Ok(None);
            };

        Ok(Some(FieldSelection {
            arguments: self.value_synthesizer.synthesize_arguments(field.arguments())?,
            name: field.name().to_string(),
            selection_set,
        }))
    }

    /// Build the selection of a root field. Unlike
    /// [`SelectionSetBuilder::build_field_selection()`] a root field is never
    /// left out: it is the whole point of its document. `visiting` should
    /// hold the root type's name so fields leading back to the root are
    /// omitted further down.
    pub fn build_root_field_selection(
        &self,
        field: &'schema Field,
        visiting: &HashSet<&'schema str>,
    ) -> Result<FieldSelection> {
        let return_type = field.type_annotation().innermost_type(self.schema)?;
        let selection_set =
            if return_type.is_composite() {
                let mut visiting = visiting.clone();
                visiting.insert(return_type.name());
                Some(self.build_for_type(return_type, &visiting, 1)?)
            } else {
                if !return_type.is_leaf() {
                    log::warn!(
                        "Root field `{}.{}` declares input type `{}` as its \
                        output type; selecting it without a selection set.",
                        field.parent_type_name(),
                        field.name(),
                        return_type.name(),
                    );
                }
                None
            };

        Ok(FieldSelection {
            arguments: self.value_synthesizer.synthesize_arguments(field.arguments())?,
            name: field.name().to_string(),
            selection_set,
        })
    }

    fn build_for_type(
        &self,
        type_: &'schema GraphQLType,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<SelectionSet> {
        let selections = match type_ {
            GraphQLType::Object(obj_type) =>
                self.field_selections(obj_type.fields(), None, visiting, depth)?,

            GraphQLType::Interface(iface_type) =>
                self.interface_selections(iface_type, visiting, depth)?,

            GraphQLType::Union(union_type) =>
                self.union_selections(union_type, visiting, depth)?,

            // Leaf and input types never reach here via `build()`.
            _ => vec![],
        };
        Ok(SelectionSet::from_selections(selections))
    }

    fn field_selections(
        &self,
        fields: &'schema IndexMap<String, Field>,
        already_selected: Option<&'schema IndexMap<String, Field>>,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<Vec<Selection>> {
        let mut selections = vec![];
        for (field_name, field) in fields {
            if field.is_introspection_field() {
                continue;
            }
            if already_selected.is_some_and(|selected| selected.contains_key(field_name)) {
                continue;
            }
            if let Some(field_selection) = self.build_field_selection(field, visiting, depth)? {
                selections.push(Selection::Field(field_selection));
            }
        }
        Ok(selections)
    }

    /// The interface's own fields, then one fragment per implementing object
    /// type holding the fields only that object declares.
    ///
    /// Sibling fragments must not select the same response name with
    /// different return types (a server rejects such a document as
    /// unmergeable), so later fragments drop clashing fields.
    fn interface_selections(
        &self,
        iface_type: &'schema InterfaceType,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<Vec<Selection>> {
        let mut selections =
            self.field_selections(iface_type.fields(), None, visiting, depth)?;
        let mut fragment_field_types = FragmentFieldTypes::new();
        for type_name in iface_type.possible_type_names() {
            if let Some(fragment) = self.inline_fragment(
                type_name,
                Some(iface_type.fields()),
                &mut fragment_field_types,
                visiting,
                depth,
            )? {
                selections.push(Selection::InlineFragment(fragment));
            }
        }
        Ok(selections)
    }

    /// `__typename`, then one fragment per member type. Clashing fields are
    /// dropped from later fragments as for interfaces.
    fn union_selections(
        &self,
        union_type: &'schema UnionType,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<Vec<Selection>> {
        let mut selections = vec![Selection::Field(FieldSelection::typename())];
        let mut fragment_field_types = FragmentFieldTypes::new();
        for type_name in union_type.member_type_names() {
            if let Some(fragment) = self.inline_fragment(
                type_name,
                None,
                &mut fragment_field_types,
                visiting,
                depth,
            )? {
                selections.push(Selection::InlineFragment(fragment));
            }
        }
        Ok(selections)
    }

    fn inline_fragment(
        &self,
        type_name: &str,
        already_selected: Option<&'schema IndexMap<String, Field>>,
        fragment_field_types: &mut FragmentFieldTypes<'schema>,
        visiting: &HashSet<&'schema str>,
        depth: usize,
    ) -> Result<Option<InlineFragmentSelection>> {
        let type_ = self.schema.resolve(type_name)?;
        let Some(obj_type) = type_.as_object() else {
            log::warn!(
                "Skipping fragment on `{type_name}`: possible types must be \
                object types.",
            );
            return Ok(None);
        };
        if visiting.contains(obj_type.name()) {
            return Ok(None);
        }

        let mut visiting = visiting.clone();
        visiting.insert(obj_type.name());
        let mut selections = self.field_selections(
            obj_type.fields(),
            already_selected,
            &visiting,
            depth,
        )?;
        selections.retain(|selection| {
            keeps_fragment_field_types(obj_type, selection, fragment_field_types)
        });
        if selections.is_empty() {
            return Ok(None);
        }

        Ok(Some(InlineFragmentSelection {
            selection_set: SelectionSet::from_selections(selections),
            type_condition: obj_type.name().to_string(),
        }))
    }
}

/// Whether `selection` (made inside a fragment on `obj_type`) agrees with
/// the return types selected under the same name by earlier fragments.
/// Records its own return type when it is the first.
fn keeps_fragment_field_types<'schema>(
    obj_type: &'schema ObjectType,
    selection: &Selection,
    fragment_field_types: &mut FragmentFieldTypes<'schema>,
) -> bool {
    let Selection::Field(field_selection) = selection else {
        return true;
    };
    let Some(field) = obj_type.fields().get(field_selection.name()) else {
        return true;
    };
    match fragment_field_types.get(field.name()) {
        Some(&selected_type) if selected_type != field.type_annotation() => {
            log::debug!(
                "Omitting `{}.{}`: a sibling fragment already selects `{}` as \
                `{selected_type}`, not `{}`.",
                obj_type.name(),
                field.name(),
                field.name(),
                field.type_annotation(),
            );
            false
        },
        Some(_) => true,
        None => {
            fragment_field_types.insert(field.name(), field.type_annotation());
            true
        },
    }
}
