use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, DerefByNameError>;

/// Placeholder literal for `ID` arguments.
pub const ID_PLACEHOLDER: &str = "id";

/// Placeholder literal for `String` and custom-scalar arguments.
pub const STRING_PLACEHOLDER: &str = "string";

/// A synthesized literal, plus whether producing it required cutting off an
/// input-object cycle somewhere inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesizedValue {
    pub cycle_guarded: bool,
    pub value: Value,
}
impl std::convert::From<Value> for SynthesizedValue {
    fn from(value: Value) -> Self {
        Self {
            cycle_guarded: false,
            value,
        }
    }
}

/// Produces placeholder argument literals for any input type of a
/// [`Schema`].
#[derive(Clone, Debug)]
pub struct ValueSynthesizer<'schema> {
    schema: &'schema Schema,
}
impl<'schema> ValueSynthesizer<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Synthesize a literal for `type_annot`.
    ///
    /// `visiting` holds the names of the input object types currently being
    /// expanded on this path. Re-entering one of them yields `{}` (and marks
    /// the result as `cycle_guarded`) instead of recursing forever.
    pub fn synthesize(
        &self,
        type_annot: &TypeAnnotation,
        visiting: &HashSet<&'schema str>,
    ) -> Result<SynthesizedValue> {
        match type_annot {
            TypeAnnotation::List(list_annot) => {
                let inner = self.synthesize(
                    list_annot.inner_type_annotation(),
                    visiting,
                )?;
                Ok(SynthesizedValue {
                    cycle_guarded: inner.cycle_guarded,
                    value: Value::List(vec![inner.value]),
                })
            },

            TypeAnnotation::Named(named_annot) => self.synthesize_named(
                named_annot.graphql_type(self.schema)?,
                visiting,
            ),
        }
    }

    /// Synthesize one literal per argument.
    ///
    /// Required arguments are always present. Optional arguments are present
    /// too, except when their literal had to be cut short by the cycle guard.
    pub fn synthesize_arguments(
        &self,
        arguments: &IndexMap<String, InputValue>,
    ) -> Result<IndexMap<String, Value>> {
        let mut literals = IndexMap::new();
        for (arg_name, argument) in arguments {
            let synthesized = self.synthesize(
                argument.type_annotation(),
                &HashSet::new(),
            )?;
            if synthesized.cycle_guarded && !argument.is_required() {
                log::debug!(
                    "Dropping optional argument `{arg_name}`: its input type is \
                    self-referential.",
                );
                continue;
            }
            literals.insert(arg_name.to_owned(), synthesized.value);
        }
        Ok(literals)
    }

    fn synthesize_named(
        &self,
        type_: &'schema GraphQLType,
        visiting: &HashSet<&'schema str>,
    ) -> Result<SynthesizedValue> {
        let value = match type_ {
            GraphQLType::Bool => Value::Bool(true),

            GraphQLType::Float | GraphQLType::Int => Value::Int(0),

            GraphQLType::ID => Value::String(ID_PLACEHOLDER.to_string()),

            GraphQLType::Scalar(_) | GraphQLType::String =>
                Value::String(STRING_PLACEHOLDER.to_string()),

            GraphQLType::Enum(enum_type) =>
                enum_type.values()
                    .first()
                    .map(|value_name| Value::Enum(value_name.to_owned()))
                    .unwrap_or(Value::Null),

            GraphQLType::InputObject(input_obj_type) =>
                return self.synthesize_input_object(input_obj_type, visiting),

            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => {
                log::warn!(
                    "Output type `{}` used in an input position; using `null`.",
                    type_.name(),
                );
                Value::Null
            },
        };
        Ok(value.into())
    }

    fn synthesize_input_object(
        &self,
        input_obj_type: &'schema InputObjectType,
        visiting: &HashSet<&'schema str>,
    ) -> Result<SynthesizedValue> {
        let type_name = input_obj_type.name();
        if visiting.contains(type_name) {
            log::debug!(
                "Input type `{type_name}` refers back to itself; emitting `{{}}`.",
            );
            return Ok(SynthesizedValue {
                cycle_guarded: true,
                value: Value::Object(IndexMap::new()),
            });
        }

        let mut visiting = visiting.clone();
        visiting.insert(type_name);

        let mut cycle_guarded = false;
        let mut entries = IndexMap::new();
        for (field_name, input_field) in input_obj_type.fields() {
            if !input_field.is_required() {
                continue;
            }
            let synthesized = self.synthesize(
                input_field.type_annotation(),
                &visiting,
            )?;
            cycle_guarded |= synthesized.cycle_guarded;
            entries.insert(field_name.to_owned(), synthesized.value);
        }

        Ok(SynthesizedValue {
            cycle_guarded,
            value: Value::Object(entries),
        })
    }
}
